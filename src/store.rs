//! Question bank storage.
//!
//! `QuestionStore` is the seam the generator writes through; `SqliteStore`
//! is the on-disk implementation and also serves the read queries used by
//! the CLI and the HTTP API. List-valued columns are stored as JSON text.

use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::model::{AnswerOption, Difficulty, NewQuestion, NewTopic, OptionId, Question, Topic};

/// Datastore operations needed by a generation run.
pub trait QuestionStore {
    /// Look up a topic by subject and topic name.
    fn find_topic(&mut self, subject: &str, topic_name: &str) -> Result<Option<Topic>>;

    /// Create the topic unless an equal (subject, topic name) row exists; return the stored row.
    fn insert_topic(&mut self, topic: &NewTopic) -> Result<Topic>;

    /// Number of questions already stored for a topic.
    fn count_questions(&mut self, topic_id: i64) -> Result<u32>;

    /// Insert a batch atomically.
    fn insert_questions(&mut self, batch: &[NewQuestion]) -> Result<()>;
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS content_topics (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        subject         TEXT NOT NULL,
        class_level     TEXT NOT NULL,
        topic_name      TEXT NOT NULL,
        ncert_chapter   TEXT,
        reference_books TEXT NOT NULL DEFAULT '[]',
        UNIQUE (subject, topic_name)
    );
    CREATE TABLE IF NOT EXISTS questions (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        topic_id         INTEGER NOT NULL REFERENCES content_topics(id),
        question_text    TEXT NOT NULL,
        options          TEXT NOT NULL,
        correct_answer   TEXT NOT NULL,
        solution_detail  TEXT NOT NULL,
        solution_steps   TEXT NOT NULL DEFAULT '[]',
        difficulty_level INTEGER NOT NULL CHECK (difficulty_level BETWEEN 1 AND 3),
        source_type      TEXT NOT NULL,
        related_topics   TEXT NOT NULL DEFAULT '[]'
    );
    CREATE INDEX IF NOT EXISTS idx_questions_topic ON questions(topic_id);
";

const TOPIC_COLUMNS: &str = "id, subject, class_level, topic_name, ncert_chapter, reference_books";

const QUESTION_COLUMNS: &str = "id, topic_id, question_text, options, correct_answer, solution_detail, \
     solution_steps, difficulty_level, source_type, related_topics";

/// A topic together with how many questions it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    #[serde(flatten)]
    pub topic: Topic,
    pub question_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStats {
    pub total: u64,
    pub by_subject: BTreeMap<String, u64>,
    pub by_difficulty: BTreeMap<String, u64>,
}

/// Topic row with the JSON column still encoded
struct RawTopic {
    id: i64,
    subject: String,
    class_level: String,
    topic_name: String,
    ncert_chapter: Option<String>,
    reference_books: String,
}

impl RawTopic {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            subject: row.get(1)?,
            class_level: row.get(2)?,
            topic_name: row.get(3)?,
            ncert_chapter: row.get(4)?,
            reference_books: row.get(5)?,
        })
    }

    fn decode(self) -> Result<Topic> {
        Ok(Topic {
            id: self.id,
            subject: self.subject,
            class_level: self.class_level,
            topic_name: self.topic_name,
            ncert_chapter: self.ncert_chapter,
            reference_books: serde_json::from_str(&self.reference_books)?,
        })
    }
}

struct RawQuestion {
    id: i64,
    topic_id: i64,
    question_text: String,
    options: String,
    correct_answer: String,
    solution_detail: String,
    solution_steps: String,
    difficulty_level: i64,
    source_type: String,
    related_topics: String,
}

impl RawQuestion {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            topic_id: row.get(1)?,
            question_text: row.get(2)?,
            options: row.get(3)?,
            correct_answer: row.get(4)?,
            solution_detail: row.get(5)?,
            solution_steps: row.get(6)?,
            difficulty_level: row.get(7)?,
            source_type: row.get(8)?,
            related_topics: row.get(9)?,
        })
    }

    fn decode(self) -> Result<Question> {
        let options: Vec<AnswerOption> = serde_json::from_str(&self.options)?;
        Ok(Question {
            id: self.id,
            topic_id: self.topic_id,
            question_text: self.question_text,
            options,
            correct_answer: OptionId::parse(&self.correct_answer)?,
            solution_detail: self.solution_detail,
            solution_steps: serde_json::from_str(&self.solution_steps)?,
            difficulty: Difficulty::try_from(self.difficulty_level)?,
            source_type: self.source_type,
            related_topics: serde_json::from_str(&self.related_topics)?,
        })
    }
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the question bank at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn topic(&self, id: i64) -> Result<Option<Topic>> {
        let raw = self
            .conn
            .query_row(
                &format!("SELECT {} FROM content_topics WHERE id = ?1", TOPIC_COLUMNS),
                params![id],
                RawTopic::from_row,
            )
            .optional()?;
        raw.map(RawTopic::decode).transpose()
    }

    /// Topics in creation order, optionally limited to one subject.
    pub fn topics(&self, subject: Option<&str>) -> Result<Vec<TopicSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.subject, t.class_level, t.topic_name, t.ncert_chapter, t.reference_books,
                    COUNT(q.id)
             FROM content_topics t
             LEFT JOIN questions q ON q.topic_id = t.id
             WHERE ?1 IS NULL OR t.subject = ?1
             GROUP BY t.id
             ORDER BY t.id",
        )?;
        let rows = stmt.query_map(params![subject], |row| {
            Ok((RawTopic::from_row(row)?, row.get::<_, i64>(6)?))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (raw, count) = row?;
            out.push(TopicSummary {
                topic: raw.decode()?,
                question_count: count as u64,
            });
        }
        Ok(out)
    }

    /// All questions of one topic in insertion order.
    pub fn questions_for_topic(&self, topic_id: i64) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM questions WHERE topic_id = ?1 ORDER BY id",
            QUESTION_COLUMNS
        ))?;
        let rows = stmt.query_map(params![topic_id], RawQuestion::from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?.decode()?);
        }
        Ok(out)
    }

    pub fn stats(&self) -> Result<QuestionStats> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;

        let mut by_subject = BTreeMap::new();
        let mut stmt = self.conn.prepare(
            "SELECT t.subject, COUNT(*)
             FROM questions q
             INNER JOIN content_topics t ON q.topic_id = t.id
             GROUP BY t.subject",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
        for row in rows {
            let (subject, count) = row?;
            by_subject.insert(subject, count as u64);
        }

        let mut by_difficulty = BTreeMap::new();
        let mut stmt = self.conn.prepare(
            "SELECT difficulty_level, COUNT(*) FROM questions GROUP BY difficulty_level",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
        for row in rows {
            let (level, count) = row?;
            let label = Difficulty::try_from(level)?.label();
            by_difficulty.insert(label.to_string(), count as u64);
        }

        Ok(QuestionStats {
            total: total as u64,
            by_subject,
            by_difficulty,
        })
    }
}

impl QuestionStore for SqliteStore {
    fn find_topic(&mut self, subject: &str, topic_name: &str) -> Result<Option<Topic>> {
        let raw = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM content_topics WHERE subject = ?1 AND topic_name = ?2",
                    TOPIC_COLUMNS
                ),
                params![subject, topic_name],
                RawTopic::from_row,
            )
            .optional()?;
        raw.map(RawTopic::decode).transpose()
    }

    fn insert_topic(&mut self, topic: &NewTopic) -> Result<Topic> {
        self.conn.execute(
            "INSERT OR IGNORE INTO content_topics
                 (subject, class_level, topic_name, ncert_chapter, reference_books)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                topic.subject,
                topic.class_level,
                topic.topic_name,
                topic.ncert_chapter,
                serde_json::to_string(&topic.reference_books)?,
            ],
        )?;
        let raw = self.conn.query_row(
            &format!(
                "SELECT {} FROM content_topics WHERE subject = ?1 AND topic_name = ?2",
                TOPIC_COLUMNS
            ),
            params![topic.subject, topic.topic_name],
            RawTopic::from_row,
        )?;
        raw.decode()
    }

    fn count_questions(&mut self, topic_id: i64) -> Result<u32> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM questions WHERE topic_id = ?1",
            params![topic_id],
            |row| row.get(0),
        )?;
        Ok(count as u32)
    }

    fn insert_questions(&mut self, batch: &[NewQuestion]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO questions
                     (topic_id, question_text, options, correct_answer, solution_detail,
                      solution_steps, difficulty_level, source_type, related_topics)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for q in batch {
                stmt.execute(params![
                    q.topic_id,
                    q.question_text,
                    serde_json::to_string(&q.options)?,
                    q.correct_answer.as_str(),
                    q.solution_detail,
                    serde_json::to_string(&q.solution_steps)?,
                    q.difficulty.level(),
                    q.source_type,
                    serde_json::to_string(&q.related_topics)?,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
