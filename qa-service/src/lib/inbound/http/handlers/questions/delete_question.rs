use auth::Principal;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::question::errors::QuestionError;
use crate::question::models::QuestionId;
use crate::question::ports::QuestionServicePort;

pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(principal): Extension<Principal>,
) -> Result<ApiSuccess<()>, ApiError> {
    let Principal::User(editor) = principal else {
        return Err(ApiError::wrong_role());
    };

    let question_id = QuestionId::from_string(&id).map_err(QuestionError::from)?;

    state
        .question_service
        .delete_question(question_id, AccountId(editor))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
