//! In-memory tracking of import jobs by opaque identifier.
//!
//! The tracker is a pure mapping of job id to last-known progress. It
//! holds no UI reference; the owning event loop recomputes indicator
//! visibility after every mutation. All operations are total: malformed
//! inputs degrade to defaults rather than erroring.

use std::collections::HashMap;

/// Label prefixed to the visible progress message.
pub const IMPORT_LABEL: &str = "Importing reviews";

/// Last-known progress of one import job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProgress {
    pub processed: u64,
    /// `None` when the server has not reported a total (rendered `?`).
    pub total: Option<u64>,
}

/// Outcome of a completion event against the tracked set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The job was tracked and has been removed.
    Completed,
    /// The event named a job this client never tracked (or already
    /// reconciled); it must be silently dropped.
    UnknownJob,
    /// The event carried no job id; always accepted.
    Anonymous,
}

/// Mapping of job id to last-known `{processed, total}`.
#[derive(Debug, Default)]
pub struct JobTracker {
    jobs: HashMap<String, JobProgress>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a job's progress.
    ///
    /// Negative or missing `processed` defaults to 0; a negative or
    /// missing `total` is treated as unknown.
    pub fn upsert(&mut self, job_id: &str, processed: Option<i64>, total: Option<i64>) {
        let progress = JobProgress {
            processed: processed.unwrap_or(0).max(0) as u64,
            total: total.filter(|t| *t >= 0).map(|t| t as u64),
        };
        self.jobs.insert(job_id.to_string(), progress);
    }

    /// Apply a completion event.
    ///
    /// With an id: remove the job if tracked, otherwise report it as
    /// unknown so the caller can drop the event. Without an id the
    /// completion is unconditionally accepted (legacy/anonymous jobs).
    pub fn complete(&mut self, job_id: Option<&str>) -> CompletionOutcome {
        match job_id {
            Some(id) => {
                if self.jobs.remove(id).is_some() {
                    CompletionOutcome::Completed
                } else {
                    CompletionOutcome::UnknownJob
                }
            }
            None => CompletionOutcome::Anonymous,
        }
    }

    /// True iff no jobs are tracked.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn get(&self, job_id: &str) -> Option<&JobProgress> {
        self.jobs.get(job_id)
    }
}

/// Format the visible progress message: `"<label> <processed>/<total-or-?>"`.
pub fn progress_label(processed: u64, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("{IMPORT_LABEL} {processed}/{total}"),
        None => format!("{IMPORT_LABEL} {processed}/?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_inserts_and_overwrites() {
        let mut tracker = JobTracker::new();
        tracker.upsert("J1", Some(2), Some(10));
        assert_eq!(
            tracker.get("J1"),
            Some(&JobProgress {
                processed: 2,
                total: Some(10)
            })
        );

        tracker.upsert("J1", Some(7), Some(10));
        assert_eq!(tracker.get("J1").unwrap().processed, 7);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn malformed_progress_degrades_to_defaults() {
        let mut tracker = JobTracker::new();
        tracker.upsert("J1", None, None);
        assert_eq!(
            tracker.get("J1"),
            Some(&JobProgress {
                processed: 0,
                total: None
            })
        );

        tracker.upsert("J2", Some(-5), Some(-1));
        assert_eq!(
            tracker.get("J2"),
            Some(&JobProgress {
                processed: 0,
                total: None
            })
        );
    }

    #[test]
    fn complete_removes_tracked_job() {
        let mut tracker = JobTracker::new();
        tracker.upsert("J1", Some(5), Some(5));
        assert_eq!(tracker.complete(Some("J1")), CompletionOutcome::Completed);
        assert!(tracker.is_empty());
    }

    #[test]
    fn duplicate_completion_is_unknown() {
        let mut tracker = JobTracker::new();
        tracker.upsert("J1", Some(5), Some(5));
        assert_eq!(tracker.complete(Some("J1")), CompletionOutcome::Completed);
        assert_eq!(tracker.complete(Some("J1")), CompletionOutcome::UnknownJob);
    }

    #[test]
    fn untracked_completion_is_unknown_and_mutates_nothing() {
        let mut tracker = JobTracker::new();
        tracker.upsert("J1", Some(1), Some(2));
        assert_eq!(tracker.complete(Some("J9")), CompletionOutcome::UnknownJob);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn anonymous_completion_is_always_accepted() {
        let mut tracker = JobTracker::new();
        assert_eq!(tracker.complete(None), CompletionOutcome::Anonymous);

        tracker.upsert("J1", Some(1), None);
        assert_eq!(tracker.complete(None), CompletionOutcome::Anonymous);
        // Anonymous completions do not remove tracked jobs.
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn progress_label_formats_unknown_total_as_question_mark() {
        assert_eq!(progress_label(3, Some(10)), "Importing reviews 3/10");
        assert_eq!(progress_label(0, None), "Importing reviews 0/?");
    }
}
