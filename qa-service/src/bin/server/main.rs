use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use qa_service::account::service::AccountService;
use qa_service::answer::service::AnswerService;
use qa_service::config::Config;
use qa_service::inbound::http::router::create_router;
use qa_service::outbound::repositories::PostgresAccountRepository;
use qa_service::outbound::repositories::PostgresAnswerRepository;
use qa_service::outbound::repositories::PostgresQuestionRepository;
use qa_service::question::service::QuestionService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qa_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "qa-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database schema applied");

    // The signing key and TTL are fixed here for the process lifetime.
    let tokens = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    ));

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let question_repository = Arc::new(PostgresQuestionRepository::new(pg_pool.clone()));
    let answer_repository = Arc::new(PostgresAnswerRepository::new(pg_pool));

    let account_service = Arc::new(AccountService::new(
        account_repository,
        Arc::clone(&tokens),
    ));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&question_repository)));
    let answer_service = Arc::new(AnswerService::new(answer_repository, question_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        question_service,
        answer_service,
        tokens,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
