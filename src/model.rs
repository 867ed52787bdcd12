//! Records stored in the question bank.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SeedError;

/// Difficulty of a question, persisted as 1 (easy), 2 (medium) or 3 (hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.level()
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = SeedError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(SeedError::InvalidDifficulty(other)),
        }
    }
}

/// Stable identifier of one of the four answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionId {
    A,
    B,
    C,
    D,
}

impl OptionId {
    /// Options are lettered by position.
    pub const ALL: [OptionId; 4] = [OptionId::A, OptionId::B, OptionId::C, OptionId::D];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionId::A => "A",
            OptionId::B => "B",
            OptionId::C => "C",
            OptionId::D => "D",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SeedError> {
        match s {
            "A" => Ok(OptionId::A),
            "B" => Ok(OptionId::B),
            "C" => Ok(OptionId::C),
            "D" => Ok(OptionId::D),
            other => Err(SeedError::InvalidOptionId(other.to_string())),
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
}

/// Builds the lettered option list from four texts in display order.
pub fn lettered_options(texts: [String; 4]) -> Vec<AnswerOption> {
    OptionId::ALL
        .into_iter()
        .zip(texts)
        .map(|(id, text)| AnswerOption { id, text })
        .collect()
}

/// One chapter of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub subject: String,
    pub class_level: String,
    pub topic_name: String,
    pub ncert_chapter: Option<String>,
    pub reference_books: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub subject: String,
    pub class_level: String,
    pub topic_name: String,
    pub ncert_chapter: Option<String>,
    pub reference_books: Vec<String>,
}

/// A question ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub topic_id: i64,
    pub question_text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: OptionId,
    pub solution_detail: String,
    pub solution_steps: Vec<String>,
    pub difficulty: Difficulty,
    pub source_type: String,
    pub related_topics: Vec<String>,
}

/// A stored question row, as served to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub topic_id: i64,
    pub question_text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: OptionId,
    pub solution_detail: String,
    pub solution_steps: Vec<String>,
    #[serde(rename = "difficultyLevel")]
    pub difficulty: Difficulty,
    pub source_type: String,
    pub related_topics: Vec<String>,
}
