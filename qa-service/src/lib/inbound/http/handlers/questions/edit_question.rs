use auth::Principal;
use axum::extract::Path;
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
use crate::question::models::EditQuestionCommand;
use crate::question::models::QuestionId;
use crate::question::models::Title;
use crate::question::ports::QuestionServicePort;

/// HTTP request body for replacing a question's content (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditQuestionRequest {
    title: String,
    body: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl EditQuestionRequest {
    fn try_into_command(self) -> Result<EditQuestionCommand, QuestionError> {
        Ok(EditQuestionCommand {
            title: Title::new(self.title)?,
            body: self.body,
            tags: parse_tags(self.tags)?,
        })
    }
}

/// The service enforces authorship; the handler only establishes that the
/// caller is a user and which account is acting.
pub async fn edit_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<EditQuestionRequest>,
) -> Result<ApiSuccess<QuestionData>, ApiError> {
    let Principal::User(editor) = principal else {
        return Err(ApiError::wrong_role());
    };

    let question_id = QuestionId::from_string(&id).map_err(QuestionError::from)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .question_service
        .edit_question(question_id, AccountId(editor), command)
        .await
        .map_err(ApiError::from)
        .map(|ref question| ApiSuccess::new(StatusCode::OK, question.into()))
}
