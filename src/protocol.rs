//! JSON shapes of the read API (serde ready).
//! Response bodies reuse the library types (`Question`, `TopicSummary`, `QuestionStats`).

use serde::{Deserialize, Serialize};

/// `GET /api/questions?topicId=N`
#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    #[serde(rename = "topicId")]
    pub topic_id: i64,
}

/// `GET /api/topics[?subject=Physics]`
#[derive(Debug, Default, Deserialize)]
pub struct TopicsQuery {
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}
