//! Batch composition: split a batch by difficulty and build question records.

use crate::model::{Difficulty, NewQuestion};
use crate::templates::select_template;

/// Placeholder walkthrough attached to every generated question
pub const SOLUTION_STEPS: [&str; 4] = [
    "Step 1: Identify the given information and what needs to be found",
    "Step 2: Apply relevant formulas or concepts",
    "Step 3: Perform calculations or logical deductions",
    "Step 4: Verify the answer with the given options",
];

/// 30% easy / 50% medium / remainder hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultySplit {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultySplit {
    pub fn for_batch(size: u32) -> Self {
        let easy = size * 3 / 10;
        let medium = size / 2;
        Self {
            easy,
            medium,
            hard: size - easy - medium,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }

    fn counts(&self) -> [(Difficulty, u32); 3] {
        [
            (Difficulty::Easy, self.easy),
            (Difficulty::Medium, self.medium),
            (Difficulty::Hard, self.hard),
        ]
    }
}

/// Label recorded on every question of batch `set_number`.
pub fn source_label(set_number: u32) -> String {
    format!("Generated Set {}", set_number)
}

/// Build `size` questions for one chapter: easy first, then medium, then hard.
/// The template index restarts at zero for each difficulty.
pub fn compose_batch(
    subject: &str,
    chapter: u32,
    topic_id: i64,
    size: u32,
    set_number: u32,
) -> Vec<NewQuestion> {
    let split = DifficultySplit::for_batch(size);
    let source_type = source_label(set_number);
    let related = format!("{} - Chapter {}", subject, chapter);

    let mut batch = Vec::with_capacity(size as usize);
    for (difficulty, count) in split.counts() {
        for index in 0..count as usize {
            let template = select_template(subject, chapter, difficulty, index);
            batch.push(NewQuestion {
                topic_id,
                question_text: template.question,
                options: template.options,
                correct_answer: template.correct,
                solution_detail: template.explanation,
                solution_steps: SOLUTION_STEPS.iter().map(|s| s.to_string()).collect(),
                difficulty,
                source_type: source_type.clone(),
                related_topics: vec![related.clone()],
            });
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sums_to_batch_size() {
        for size in 0..=200 {
            let split = DifficultySplit::for_batch(size);
            assert_eq!(split.total(), size);
            assert_eq!(split.easy, (size as f64 * 0.3).floor() as u32);
            assert_eq!(split.medium, (size as f64 * 0.5).floor() as u32);
            assert_eq!(split, DifficultySplit::for_batch(size));
        }
    }

    #[test]
    fn test_default_batch_split() {
        assert_eq!(
            DifficultySplit::for_batch(20),
            DifficultySplit { easy: 6, medium: 10, hard: 4 }
        );
        assert_eq!(
            DifficultySplit::for_batch(1),
            DifficultySplit { easy: 0, medium: 0, hard: 1 }
        );
    }

    #[test]
    fn test_compose_batch_order_and_fields() {
        let batch = compose_batch("Zoology", 4, 42, 20, 7);
        assert_eq!(batch.len(), 20);

        let levels: Vec<_> = batch.iter().map(|q| q.difficulty).collect();
        assert!(levels[..6].iter().all(|d| *d == Difficulty::Easy));
        assert!(levels[6..16].iter().all(|d| *d == Difficulty::Medium));
        assert!(levels[16..].iter().all(|d| *d == Difficulty::Hard));

        for q in &batch {
            assert_eq!(q.topic_id, 42);
            assert_eq!(q.source_type, "Generated Set 7");
            assert_eq!(q.related_topics, vec!["Zoology - Chapter 4".to_string()]);
            assert_eq!(q.solution_steps.len(), 4);
            assert!(q.question_text.starts_with("[Digestion] "));
        }

        // index restarts per difficulty
        assert_eq!(
            batch[6].question_text,
            select_template("Zoology", 4, Difficulty::Medium, 0).question
        );
    }

    #[test]
    fn test_compose_empty_batch() {
        assert!(compose_batch("Physics", 1, 1, 0, 1).is_empty());
    }
}
