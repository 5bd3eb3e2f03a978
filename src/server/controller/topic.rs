use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, topic::TopicsDto},
    server::{error::AppError, service::topic::TopicService, state::AppState},
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// List all topics.
///
/// # Returns
/// - `200 OK` - Every topic, ordered by slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved topics", body = TopicsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::new(&state.db).get_all().await?;

    Ok(Json(TopicsDto {
        topics: topics.into_iter().map(|topic| topic.into_dto()).collect(),
    }))
}
