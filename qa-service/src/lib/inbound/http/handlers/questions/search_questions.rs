use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::parse_tags;
use super::QuestionData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::question::errors::QuestionError;
use crate::question::ports::QuestionServicePort;

/// Query parameters for question search. Exactly one filter is expected;
/// when both are present the title filter wins.
#[derive(Debug, Deserialize)]
pub struct SearchQuestionsParams {
    /// Case-insensitive title substring
    pub title: Option<String>,
    /// Comma-separated tag list; matches on any shared tag
    pub tags: Option<String>,
}

/// Both searches are public reads.
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<SearchQuestionsParams>,
) -> Result<ApiSuccess<Vec<QuestionData>>, ApiError> {
    let questions = match (params.title, params.tags) {
        (Some(title), _) => state
            .question_service
            .search_by_title(&title)
            .await
            .map_err(ApiError::from)?,
        (None, Some(tags)) => {
            let tags = parse_tags(
                tags.split(',')
                    .filter(|t| !t.trim().is_empty())
                    .map(|t| t.to_string())
                    .collect(),
            )
            .map_err(QuestionError::from)?;

            state
                .question_service
                .search_by_tags(&tags)
                .await
                .map_err(ApiError::from)?
        }
        (None, None) => {
            return Err(ApiError::UnprocessableEntity(
                "Provide a title or tags query parameter".to_string(),
            ))
        }
    };

    Ok(ApiSuccess::new(
        StatusCode::OK,
        questions.iter().map(QuestionData::from).collect(),
    ))
}
