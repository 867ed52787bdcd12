//! Generation targets: which subjects, how many chapters, how many questions.

use crate::error::{Result, SeedError};

/// Default size of a persisted batch
pub const DEFAULT_BATCH_SIZE: u32 = 20;

/// Default cap on questions across all subjects
pub const DEFAULT_GLOBAL_TARGET: u32 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectPlan {
    pub name: String,
    pub chapters: u32,
    pub target: u32,
}

impl SubjectPlan {
    pub fn new(name: impl Into<String>, chapters: u32, target: u32) -> Self {
        Self {
            name: name.into(),
            chapters,
            target,
        }
    }

    /// ceil(target / chapters); zero when the subject has no chapters.
    pub fn chapter_quota(&self) -> u32 {
        if self.chapters == 0 {
            return 0;
        }
        self.target.div_ceil(self.chapters)
    }

    /// Chapters 1..=N, each with the subject's quota.
    pub fn chapter_plans(&self) -> impl Iterator<Item = ChapterPlan<'_>> + '_ {
        let quota = self.chapter_quota();
        (1..=self.chapters).map(move |chapter| ChapterPlan {
            subject: self.name.as_str(),
            chapter,
            quota,
        })
    }
}

/// One chapter's slot in the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterPlan<'a> {
    pub subject: &'a str,
    pub chapter: u32,
    pub quota: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub subjects: Vec<SubjectPlan>,
    pub global_target: u32,
    pub batch_size: u32,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            subjects: vec![
                SubjectPlan::new("Physics", 24, 12_000),
                SubjectPlan::new("Chemistry", 44, 13_000),
                SubjectPlan::new("Botany", 37, 12_500),
                SubjectPlan::new("Zoology", 37, 12_500),
            ],
            global_target: DEFAULT_GLOBAL_TARGET,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Plan {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SeedError::InvalidPlan("batch size must be at least 1".into()));
        }
        Ok(())
    }

    /// Keep only the named subjects (case-insensitive), preserving table order.
    pub fn retain_subjects(&mut self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        for name in names {
            if !self.subjects.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
                return Err(SeedError::InvalidPlan(format!("unknown subject {:?}", name)));
            }
        }
        self.subjects
            .retain(|s| names.iter().any(|n| s.name.eq_ignore_ascii_case(n)));
        Ok(())
    }

    /// Subject order, then chapters 1..=N.
    pub fn chapters(&self) -> impl Iterator<Item = ChapterPlan<'_>> + '_ {
        self.subjects.iter().flat_map(SubjectPlan::chapter_plans)
    }

    /// Upper bound of questions a run can persist, used to size the progress bar.
    pub fn planned_total(&self) -> u64 {
        let sum: u64 = self
            .subjects
            .iter()
            .map(|s| s.chapter_quota() as u64 * s.chapters as u64)
            .sum();
        sum.min(self.global_target as u64)
    }
}
