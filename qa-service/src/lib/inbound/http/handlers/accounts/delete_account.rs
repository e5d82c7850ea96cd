use auth::Principal;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::account::models::AccountId;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// A user-role token never deletes an admin, regardless of target: the
/// route only ever deletes the token's own subject, and the role gate
/// rejects the wrong tag with a 403.
pub async fn delete_admin(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<()>, ApiError> {
    let Principal::Admin(id) = principal else {
        return Err(ApiError::wrong_role());
    };

    state
        .account_service
        .delete_account(AccountId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<()>, ApiError> {
    let Principal::User(id) = principal else {
        return Err(ApiError::wrong_role());
    };

    state
        .account_service
        .delete_account(AccountId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
