//! HTTP endpoint handlers. Thin wrappers over the store's read queries.
//! Each handler is instrumented and logs its parameters and result size.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, instrument};

use super::AppState;
use crate::error::SeedError;
use crate::model::Question;
use crate::protocol::*;
use crate::store::{QuestionStats, TopicSummary};

/// Store failure surfaced as `500 {"error": "..."}`.
pub struct ApiError(SeedError);

impl From<SeedError> for ApiError {
    fn from(e: SeedError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(target: "api", error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorOut {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state), fields(subject = ?q.subject))]
pub async fn http_get_topics(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TopicsQuery>,
) -> Result<Json<Vec<TopicSummary>>, ApiError> {
    let topics = state.store.lock().await.topics(q.subject.as_deref())?;
    info!(target: "api", count = topics.len(), "Topics served");
    Ok(Json(topics))
}

#[instrument(level = "info", skip(state), fields(topic_id = q.topic_id))]
pub async fn http_get_questions(
    State(state): State<Arc<AppState>>,
    Query(q): Query<QuestionsQuery>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state.store.lock().await.questions_for_topic(q.topic_id)?;
    info!(target: "api", topic_id = q.topic_id, count = questions.len(), "Questions served");
    Ok(Json(questions))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_stats(State(state): State<Arc<AppState>>) -> Result<Json<QuestionStats>, ApiError> {
    let stats = state.store.lock().await.stats()?;
    info!(target: "api", total = stats.total, "Stats served");
    Ok(Json(stats))
}
