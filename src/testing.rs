//! In-memory store that records every call, for tests that count datastore traffic.

use std::collections::HashMap;

use crate::error::{Result, SeedError};
use crate::model::{NewQuestion, NewTopic, Topic};
use crate::store::QuestionStore;

#[derive(Default)]
pub struct RecordingStore {
    pub topics: Vec<Topic>,
    pub stored: HashMap<i64, u32>,
    pub batches: Vec<Vec<NewQuestion>>,
    pub lookups: usize,
    pub topic_inserts: usize,
    pub batch_attempts: usize,
    /// 1-based batch insert attempt that fails with a disk-full error
    pub fail_on_batch: Option<usize>,
}

impl RecordingStore {
    pub fn failing_on(batch: usize) -> Self {
        Self {
            fail_on_batch: Some(batch),
            ..Self::default()
        }
    }

    pub fn persisted(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

impl QuestionStore for RecordingStore {
    fn find_topic(&mut self, subject: &str, topic_name: &str) -> Result<Option<Topic>> {
        self.lookups += 1;
        Ok(self
            .topics
            .iter()
            .find(|t| t.subject == subject && t.topic_name == topic_name)
            .cloned())
    }

    fn insert_topic(&mut self, topic: &NewTopic) -> Result<Topic> {
        self.topic_inserts += 1;
        let row = Topic {
            id: self.topics.len() as i64 + 1,
            subject: topic.subject.clone(),
            class_level: topic.class_level.clone(),
            topic_name: topic.topic_name.clone(),
            ncert_chapter: topic.ncert_chapter.clone(),
            reference_books: topic.reference_books.clone(),
        };
        self.topics.push(row.clone());
        Ok(row)
    }

    fn count_questions(&mut self, topic_id: i64) -> Result<u32> {
        Ok(self.stored.get(&topic_id).copied().unwrap_or(0))
    }

    fn insert_questions(&mut self, batch: &[NewQuestion]) -> Result<()> {
        self.batch_attempts += 1;
        if self.fail_on_batch == Some(self.batch_attempts) {
            return Err(SeedError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
                Some("database or disk is full".into()),
            )));
        }
        for q in batch {
            *self.stored.entry(q.topic_id).or_insert(0) += 1;
        }
        self.batches.push(batch.to_vec());
        Ok(())
    }
}
