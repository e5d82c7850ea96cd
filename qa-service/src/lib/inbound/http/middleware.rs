use auth::Principal;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Middleware that validates bearer tokens and stores the authenticated
/// `Principal` in request extensions.
///
/// Two gates: the token must decode (signature valid, not expired), and its
/// subject must still resolve to an account with the claimed role. A token
/// for a deleted account fails here, not deeper in a handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.tokens.decode(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    let principal: Principal = claims.principal;

    state.account_service.authorize(principal).await.map_err(|e| {
        tracing::warn!("Token subject did not resolve to an account: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
