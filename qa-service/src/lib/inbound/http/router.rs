use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::create_account::create_admin;
use super::handlers::accounts::create_account::create_user;
use super::handlers::accounts::delete_account::delete_admin;
use super::handlers::accounts::delete_account::delete_user;
use super::handlers::accounts::update_account::update_admin;
use super::handlers::accounts::update_account::update_user;
use super::handlers::answers::list_answers::list_answers;
use super::handlers::answers::post_answer::post_answer;
use super::handlers::login::login;
use super::handlers::questions::create_question::create_question;
use super::handlers::questions::delete_question::delete_question;
use super::handlers::questions::edit_question::edit_question;
use super::handlers::questions::search_questions::search_questions;
use super::middleware::authenticate as auth_middleware;
use crate::account::service::AccountService;
use crate::answer::service::AnswerService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresAnswerRepository;
use crate::outbound::repositories::PostgresQuestionRepository;
use crate::question::service::QuestionService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository>>,
    pub question_service: Arc<QuestionService<PostgresQuestionRepository>>,
    pub answer_service: Arc<AnswerService<PostgresAnswerRepository, PostgresQuestionRepository>>,
    pub tokens: Arc<TokenService>,
}

pub fn create_router(
    account_service: Arc<AccountService<PostgresAccountRepository>>,
    question_service: Arc<QuestionService<PostgresQuestionRepository>>,
    answer_service: Arc<AnswerService<PostgresAnswerRepository, PostgresQuestionRepository>>,
    tokens: Arc<TokenService>,
) -> Router {
    let state = AppState {
        account_service,
        question_service,
        answer_service,
        tokens,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/admins", post(create_admin))
        .route("/api/users", post(create_user))
        .route("/api/questions", get(search_questions))
        .route("/api/questions/:question_id/answers", get(list_answers));

    let protected_routes = Router::new()
        .route("/api/admins/me", patch(update_admin))
        .route("/api/admins/me", delete(delete_admin))
        .route("/api/users/me", patch(update_user))
        .route("/api/users/me", delete(delete_user))
        .route("/api/questions", post(create_question))
        .route("/api/questions/:question_id", put(edit_question))
        .route("/api/questions/:question_id", delete(delete_question))
        .route("/api/questions/:question_id/answers", post(post_answer))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
