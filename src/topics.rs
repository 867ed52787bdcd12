//! Lookup-or-create of the topic row that owns a chapter's questions.

use crate::error::Result;
use crate::model::{NewTopic, Topic};
use crate::store::QuestionStore;

pub const CLASS_LEVEL: &str = "Class XI-XII";

pub const REFERENCE_BOOKS: [&str; 2] = ["NCERT", "Reference Books"];

pub fn topic_name(chapter: u32) -> String {
    format!("Chapter {}", chapter)
}

/// Return the topic for `(subject, chapter)`, creating it on first use.
/// Topics are keyed by subject and name, so "Chapter 12" of two subjects are distinct rows.
pub fn resolve_topic<S: QuestionStore + ?Sized>(store: &mut S, subject: &str, chapter: u32) -> Result<Topic> {
    let name = topic_name(chapter);
    if let Some(existing) = store.find_topic(subject, &name)? {
        tracing::debug!(subject, chapter, topic_id = existing.id, "Reusing topic");
        return Ok(existing);
    }

    let topic = store.insert_topic(&NewTopic {
        subject: subject.to_string(),
        class_level: CLASS_LEVEL.to_string(),
        topic_name: name.clone(),
        ncert_chapter: Some(name),
        reference_books: REFERENCE_BOOKS.iter().map(|b| b.to_string()).collect(),
    })?;
    tracing::debug!(subject, chapter, topic_id = topic.id, "Created topic");
    Ok(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use crate::testing::RecordingStore;

    #[test]
    fn test_resolve_twice_inserts_once() {
        let mut store = RecordingStore::default();
        let first = resolve_topic(&mut store, "Botany", 5).unwrap();
        let second = resolve_topic(&mut store, "Botany", 5).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.lookups, 2);
        assert_eq!(store.topic_inserts, 1);
    }

    #[test]
    fn test_new_topic_fields() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let topic = resolve_topic(&mut store, "Zoology", 9).unwrap();
        assert_eq!(topic.subject, "Zoology");
        assert_eq!(topic.class_level, "Class XI-XII");
        assert_eq!(topic.topic_name, "Chapter 9");
        assert_eq!(topic.ncert_chapter.as_deref(), Some("Chapter 9"));
        assert_eq!(topic.reference_books, vec!["NCERT", "Reference Books"]);
    }

    #[test]
    fn test_subjects_do_not_share_chapters() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let physics = resolve_topic(&mut store, "Physics", 12).unwrap();
        let chemistry = resolve_topic(&mut store, "Chemistry", 12).unwrap();
        let physics_again = resolve_topic(&mut store, "Physics", 12).unwrap();

        assert_ne!(physics.id, chemistry.id);
        assert_eq!(physics.id, physics_again.id);
        assert_eq!(chemistry.subject, "Chemistry");
    }
}
