use auth::Principal;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AccountData;
use crate::account::errors::AccountError;
use crate::account::models::AccountId;
use crate::account::models::DisplayName;
use crate::account::models::EmailAddress;
use crate::account::models::UpdateAccountCommand;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating the acting account (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
}

impl UpdateAccountRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, AccountError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        let display_name = self.display_name.map(DisplayName::new).transpose()?;

        Ok(UpdateAccountCommand {
            email,
            password: self.password,
            display_name,
        })
    }
}

/// Updates always target the token's own subject; the admin route refuses
/// user principals outright.
pub async fn update_admin(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let Principal::Admin(id) = principal else {
        return Err(ApiError::wrong_role());
    };

    state
        .account_service
        .update_account(AccountId(id), req.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let Principal::User(id) = principal else {
        return Err(ApiError::wrong_role());
    };

    state
        .account_service
        .update_account(AccountId(id), req.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
