//! Router assembly for the read API: question bank endpoints plus HTTP tracing.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::store::SqliteStore;

pub mod http;

/// Shared by every handler. One SQLite connection, held for one query at a time.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }
}

/// Build the application router with:
/// - `GET /api/health`
/// - `GET /api/topics[?subject=]`
/// - `GET /api/questions?topicId=N`
/// - `GET /api/questions/stats`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(http::http_health))
        .route("/api/topics", get(http::http_get_topics))
        .route("/api/questions", get(http::http_get_questions))
        .route("/api/questions/stats", get(http::http_get_stats))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::compose_batch;
    use crate::store::QuestionStore;
    use crate::topics::resolve_topic;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn seeded_state() -> (Arc<AppState>, i64) {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let topic = resolve_topic(&mut store, "Physics", 2).unwrap();
        store
            .insert_questions(&compose_batch("Physics", 2, topic.id, 20, 1))
            .unwrap();
        resolve_topic(&mut store, "Botany", 1).unwrap();
        (AppState::new(store), topic.id)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = seeded_state();
        let (status, body) = get(build_router(state), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn test_questions_for_topic() {
        let (state, topic_id) = seeded_state();
        let (status, body) = get(build_router(state), &format!("/api/questions?topicId={}", topic_id)).await;
        assert_eq!(status, StatusCode::OK);

        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 20);
        let first = &questions[0];
        assert_eq!(first["topicId"], topic_id);
        assert_eq!(first["difficultyLevel"], 1);
        assert_eq!(first["sourceType"], "Generated Set 1");
        assert_eq!(first["options"].as_array().unwrap().len(), 4);
        let correct = first["correctAnswer"].as_str().unwrap();
        assert!(first["options"]
            .as_array()
            .unwrap()
            .iter()
            .any(|o| o["id"] == correct));
    }

    #[tokio::test]
    async fn test_unknown_topic_is_empty() {
        let (state, _) = seeded_state();
        let (status, body) = get(build_router(state), "/api/questions?topicId=999").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_missing_topic_id_rejected() {
        let (state, _) = seeded_state();
        let (status, _) = get(build_router(state.clone()), "/api/questions").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get(build_router(state), "/api/questions?topicId=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats() {
        let (state, _) = seeded_state();
        let (status, body) = get(build_router(state), "/api/questions/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 20);
        assert_eq!(body["bySubject"]["Physics"], 20);
        assert_eq!(body["byDifficulty"]["easy"], 6);
        assert_eq!(body["byDifficulty"]["medium"], 10);
        assert_eq!(body["byDifficulty"]["hard"], 4);
    }

    #[tokio::test]
    async fn test_topics_filtered_by_subject() {
        let (state, _) = seeded_state();
        let (_, all) = get(build_router(state.clone()), "/api/topics").await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, botany) = get(build_router(state), "/api/topics?subject=Botany").await;
        assert_eq!(status, StatusCode::OK);
        let botany = botany.as_array().unwrap();
        assert_eq!(botany.len(), 1);
        assert_eq!(botany[0]["topicName"], "Chapter 1");
        assert_eq!(botany[0]["questionCount"], 0);
    }
}
