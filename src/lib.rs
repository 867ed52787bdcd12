//! NEET Seeder - bulk question bank generator
//!
//! Plans per-chapter quotas across subjects, composes difficulty-balanced
//! batches from subject templates and persists them to SQLite.

pub mod composer;
pub mod error;
pub mod generator;
pub mod model;
pub mod planner;
pub mod protocol;
pub mod routes;
pub mod store;
pub mod templates;
pub mod topics;

#[cfg(test)]
mod testing;

pub use composer::{compose_batch, DifficultySplit};
pub use error::{Result, SeedError};
pub use generator::{Generator, RunReport, RunState};
pub use model::{AnswerOption, Difficulty, NewQuestion, NewTopic, OptionId, Question, Topic};
pub use planner::{Plan, SubjectPlan, DEFAULT_BATCH_SIZE, DEFAULT_GLOBAL_TARGET};
pub use store::{QuestionStats, QuestionStore, SqliteStore, TopicSummary};
pub use templates::{select_template, QuestionTemplate};
pub use topics::resolve_topic;
