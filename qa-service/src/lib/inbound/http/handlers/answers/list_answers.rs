use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::AnswerData;
use crate::answer::ports::AnswerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::question::errors::QuestionError;
use crate::question::models::QuestionId;

/// Public read; 404 when the question itself does not exist, as opposed to
/// an empty list for a question nobody has answered.
pub async fn list_answers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<AnswerData>>, ApiError> {
    let question_id = QuestionId::from_string(&id).map_err(QuestionError::from)?;

    state
        .answer_service
        .answers_for_question(question_id)
        .await
        .map_err(ApiError::from)
        .map(|answers| {
            ApiSuccess::new(
                StatusCode::OK,
                answers.iter().map(AnswerData::from).collect(),
            )
        })
}
