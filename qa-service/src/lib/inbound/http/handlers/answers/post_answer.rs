use auth::Principal;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AnswerData;
use crate::account::models::AccountId;
use crate::answer::ports::AnswerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::question::errors::QuestionError;
use crate::question::models::QuestionId;

/// HTTP request body for posting an answer (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostAnswerRequest {
    body: String,
}

pub async fn post_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<PostAnswerRequest>,
) -> Result<ApiSuccess<AnswerData>, ApiError> {
    let Principal::User(author_id) = principal else {
        return Err(ApiError::wrong_role());
    };

    let question_id = QuestionId::from_string(&id).map_err(QuestionError::from)?;

    state
        .answer_service
        .post_answer(question_id, AccountId(author_id), body.body)
        .await
        .map_err(ApiError::from)
        .map(|ref answer| ApiSuccess::new(StatusCode::CREATED, answer.into()))
}
