use auth::Principal;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::parse_tags;
use super::QuestionData;
use crate::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::question::errors::QuestionError;
use crate::question::models::CreateQuestionCommand;
use crate::question::models::Title;
use crate::question::ports::QuestionServicePort;

/// HTTP request body for creating a question (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateQuestionRequest {
    title: String,
    body: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl CreateQuestionRequest {
    fn try_into_command(self) -> Result<CreateQuestionCommand, QuestionError> {
        Ok(CreateQuestionCommand {
            title: Title::new(self.title)?,
            body: self.body,
            tags: parse_tags(self.tags)?,
        })
    }
}

/// Questions are asked by users; an admin token is refused here.
pub async fn create_question(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateQuestionRequest>,
) -> Result<ApiSuccess<QuestionData>, ApiError> {
    let Principal::User(author_id) = principal else {
        return Err(ApiError::wrong_role());
    };

    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .question_service
        .create_question(AccountId(author_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref question| ApiSuccess::new(StatusCode::CREATED, question.into()))
}
