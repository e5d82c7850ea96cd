use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::accounts::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Role;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

/// Login resolves the role once, here: the issued token carries the role
/// tag, and no later check revisits the email/password.
///
/// Unknown email and wrong password both surface as the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (account, token) = state
        .account_service
        .login(&body.email, body.role, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            account: (&account).into(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
    role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub account: AccountData,
    pub token: String,
}
