//! Generation run: walks the plan chapter by chapter, composes batches and
//! persists them until every quota is met or the global target is reached.
//!
//! The run is strictly sequential. Each chapter resumes from the number of
//! questions already stored for its topic, so re-running after a failure
//! picks up where the previous run stopped instead of duplicating rows.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

use crate::composer::compose_batch;
use crate::error::Result;
use crate::model::NewQuestion;
use crate::planner::{ChapterPlan, Plan};
use crate::store::QuestionStore;
use crate::topics::resolve_topic;

/// Counters carried from batch to batch within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// Questions present for visited chapters, stored earlier or in this run
    pub total: u64,
    /// Questions persisted by this run
    pub generated: u64,
    /// Sequence number of the next batch
    pub next_set: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            total: 0,
            generated: 0,
            next_set: 1,
        }
    }
}

impl RunState {
    pub fn batches(&self) -> u32 {
        self.next_set - 1
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub total: u64,
    pub generated: u64,
    pub batches: u32,
    pub chapters_skipped: u32,
    pub target_reached: bool,
    pub elapsed: Duration,
}

pub struct Generator {
    plan: Plan,
    progress: ProgressBar,
    console: bool,
}

impl Generator {
    pub fn new(plan: Plan) -> Result<Self> {
        plan.validate()?;
        Ok(Self {
            plan,
            progress: ProgressBar::hidden(),
            console: false,
        })
    }

    /// Draw a progress bar and console report on the terminal.
    pub fn with_progress_bar(mut self) -> Self {
        let pb = ProgressBar::new(self.plan.planned_total());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) ~{eta} remaining")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        self.progress = pb;
        self.console = true;
        self
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn run<S: QuestionStore + ?Sized>(&self, store: &mut S) -> Result<RunReport> {
        let started = Instant::now();
        let mut state = RunState::default();
        let mut chapters_skipped = 0;
        let mut target_reached = false;
        let target = self.plan.global_target as u64;

        tracing::info!(
            subjects = self.plan.subjects.len(),
            global_target = target,
            batch_size = self.plan.batch_size,
            "Starting question generation"
        );
        self.say(format!(
            "🚀 Starting generation of {}+ NEET questions in sets of {}...\n",
            group_thousands(target),
            self.plan.batch_size
        ));

        'subjects: for subject in &self.plan.subjects {
            self.say(format!(
                "\n📚 Generating {} questions for {}...",
                group_thousands(subject.target as u64),
                subject.name
            ));

            for ChapterPlan { chapter, quota, .. } in subject.chapter_plans() {
                if quota == 0 {
                    continue;
                }
                let topic = resolve_topic(store, &subject.name, chapter)?;
                let mut chapter_count = store.count_questions(topic.id)?;
                state.total += chapter_count as u64;

                if chapter_count >= quota {
                    chapters_skipped += 1;
                    self.progress.inc(quota as u64);
                    self.say(format!(
                        "  ⏭  {} Ch.{} already has {} questions | Total: {}",
                        subject.name,
                        chapter,
                        chapter_count,
                        group_thousands(state.total)
                    ));
                } else if chapter_count > 0 {
                    self.progress.inc(chapter_count as u64);
                    tracing::info!(subject = %subject.name, chapter, existing = chapter_count, "Resuming chapter");
                }

                if state.total >= target {
                    target_reached = true;
                    break 'subjects;
                }

                while chapter_count < quota {
                    let size = self.plan.batch_size.min(quota - chapter_count);
                    let batch = compose_batch(&subject.name, chapter, topic.id, size, state.next_set);
                    save_batch(store, &batch, state.next_set)?;

                    chapter_count += size;
                    state.total += size as u64;
                    state.generated += size as u64;
                    self.progress.inc(size as u64);
                    self.say(format!(
                        "  ✅ Set {}: {} questions | {} Ch.{} | Total: {}",
                        state.next_set,
                        size,
                        subject.name,
                        chapter,
                        group_thousands(state.total)
                    ));
                    state.next_set += 1;

                    if state.total >= target {
                        target_reached = true;
                        break 'subjects;
                    }
                }
            }
        }

        if target_reached {
            self.say(format!(
                "\n🎉 Target reached! Generated {} questions",
                group_thousands(state.total)
            ));
        } else {
            self.say(format!(
                "\n✨ Generation complete! Total: {} questions in {} sets",
                group_thousands(state.total),
                state.batches()
            ));
        }

        let elapsed = started.elapsed();
        self.say(format!("⏱  Elapsed: {:.2} minutes", elapsed.as_secs_f64() / 60.0));
        self.progress.finish_and_clear();

        tracing::info!(
            total = state.total,
            generated = state.generated,
            batches = state.batches(),
            target_reached,
            "Question generation finished"
        );

        Ok(RunReport {
            total: state.total,
            generated: state.generated,
            batches: state.batches(),
            chapters_skipped,
            target_reached,
            elapsed,
        })
    }

    fn say(&self, line: String) {
        if self.console {
            self.progress.suspend(|| println!("{}", line));
        }
    }
}

/// Persist one batch; a failure is logged and aborts the run.
fn save_batch<S: QuestionStore + ?Sized>(store: &mut S, batch: &[NewQuestion], set_number: u32) -> Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    store.insert_questions(batch).map_err(|e| {
        tracing::error!(set = set_number, size = batch.len(), error = %e, "Error saving batch");
        e
    })
}

/// 12345 -> "12,345"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;
    use crate::model::Difficulty;
    use crate::planner::SubjectPlan;
    use crate::store::SqliteStore;
    use crate::testing::RecordingStore;

    fn plan(subjects: Vec<SubjectPlan>, global_target: u32, batch_size: u32) -> Plan {
        Plan {
            subjects,
            global_target,
            batch_size,
        }
    }

    #[test]
    fn test_single_chapter_two_batches() {
        let generator = Generator::new(plan(vec![SubjectPlan::new("Physics", 1, 40)], 40, 20)).unwrap();
        let mut store = RecordingStore::default();
        let report = generator.run(&mut store).unwrap();

        assert_eq!(store.batches.len(), 2);
        assert_eq!(report.batches, 2);
        assert_eq!(report.total, 40);
        assert!(report.target_reached);
        for batch in &store.batches {
            assert_eq!(batch.len(), 20);
            let count = |d| batch.iter().filter(|q| q.difficulty == d).count();
            assert_eq!(count(Difficulty::Easy), 6);
            assert_eq!(count(Difficulty::Medium), 10);
            assert_eq!(count(Difficulty::Hard), 4);
        }
        assert_eq!(store.batches[0][0].source_type, "Generated Set 1");
        assert_eq!(store.batches[1][0].source_type, "Generated Set 2");
    }

    #[test]
    fn test_global_target_is_a_hard_stop() {
        let generator = Generator::new(plan(
            vec![SubjectPlan::new("Physics", 3, 90), SubjectPlan::new("Zoology", 2, 40)],
            50,
            20,
        ))
        .unwrap();
        let mut store = RecordingStore::default();
        let report = generator.run(&mut store).unwrap();

        // chapter quota 30: batches of 20 + 10, then 20 more crosses 50
        let sizes: Vec<_> = store.batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![20, 10, 20]);
        assert!(report.target_reached);
        assert!(store.persisted() as u32 <= 50 + 20 - 1);
        assert!(store.topics.iter().all(|t| t.subject == "Physics"));
    }

    #[test]
    fn test_persistence_failure_aborts_run() {
        let generator = Generator::new(plan(vec![SubjectPlan::new("Chemistry", 2, 200)], 1_000, 20)).unwrap();
        let mut store = RecordingStore::failing_on(3);
        let err = generator.run(&mut store).unwrap_err();

        assert!(matches!(err, SeedError::Database(_)));
        assert_eq!(store.batch_attempts, 3);
        assert_eq!(store.batches.len(), 2);
    }

    #[test]
    fn test_last_batch_is_trimmed_to_quota() {
        let generator = Generator::new(plan(vec![SubjectPlan::new("Botany", 2, 50)], 1_000, 20)).unwrap();
        let mut store = RecordingStore::default();
        let report = generator.run(&mut store).unwrap();

        let sizes: Vec<_> = store.batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![20, 5, 20, 5]);
        assert!(!report.target_reached);
        assert_eq!(report.total, 50);
        assert_eq!(store.topic_inserts, 2);
    }

    #[test]
    fn test_zero_quota_subject_is_a_no_op() {
        let generator = Generator::new(plan(
            vec![SubjectPlan::new("Physics", 0, 100), SubjectPlan::new("Zoology", 3, 0)],
            1_000,
            20,
        ))
        .unwrap();
        let mut store = RecordingStore::default();
        let report = generator.run(&mut store).unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(store.batch_attempts, 0);
        assert_eq!(store.lookups, 0);
    }

    #[test]
    fn test_rerun_resumes_from_stored_counts() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let p = plan(vec![SubjectPlan::new("Physics", 2, 60)], 1_000, 20);

        let first = Generator::new(p.clone()).unwrap().run(&mut store).unwrap();
        assert_eq!(first.generated, 60);
        assert_eq!(first.chapters_skipped, 0);

        let second = Generator::new(p).unwrap().run(&mut store).unwrap();
        assert_eq!(second.generated, 0);
        assert_eq!(second.batches, 0);
        assert_eq!(second.total, 60);
        assert_eq!(second.chapters_skipped, 2);
        assert_eq!(store.stats().unwrap().total, 60);
    }

    #[test]
    fn test_partial_chapter_is_topped_up() {
        let mut store = RecordingStore::default();
        let topic = resolve_topic(&mut store, "Zoology", 1).unwrap();
        store.stored.insert(topic.id, 12);

        let generator = Generator::new(plan(vec![SubjectPlan::new("Zoology", 1, 30)], 1_000, 20)).unwrap();
        let report = generator.run(&mut store).unwrap();

        assert_eq!(report.generated, 18);
        assert_eq!(report.total, 30);
        let sizes: Vec<_> = store.batches.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![18]);
    }

    #[test]
    fn test_invalid_plan_rejected() {
        assert!(matches!(
            Generator::new(plan(vec![], 10, 0)),
            Err(SeedError::InvalidPlan(_))
        ));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
