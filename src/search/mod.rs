//! Perfect-match search.
//!
//! The controller drives a generate-and-verify loop over a single mutable
//! session: generate a candidate, score it, keep it when it encodes the
//! plaintext exactly, until the quota of perfect matches is reached or the
//! attempt budget is spent. The loop is cooperative, not preemptive:
//! cancellation is observed at iteration boundaries only, and every 10th
//! iteration yields control back to the scheduler so the loop never starves
//! the host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::RngCore;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::generate::CandidateSource;
use crate::params::CipherParams;
use crate::verify::check_constraints;

/// Iterations between cooperative yields.
const YIELD_INTERVAL: u64 = 10;

/// Why a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The quota of perfect matches was found.
    TargetReached,
    /// The attempt budget was spent first.
    BudgetExhausted,
    /// A stop was requested from outside.
    Stopped,
}

/// Progress snapshot emitted after every iteration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressEvent {
    /// Candidates tried so far.
    pub attempts: u64,
    /// Perfect matches found so far.
    pub found_count: usize,
    /// Overall progress, 0..=100.
    pub percentage: f64,
    /// Milliseconds since the search started.
    pub elapsed_ms: u64,
}

/// Final result of a search run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Perfect matches in discovery order.
    pub perfect_matches: Vec<String>,
    /// Total candidates tried.
    pub attempts: u64,
    /// Why the loop exited.
    pub outcome: SearchOutcome,
    /// Milliseconds the run took.
    pub elapsed_ms: u64,
}

/// Cancellation handle for a running search.
///
/// Mirrors the observed original semantics: pause and stop both raise the
/// same stop flag, so a "paused" search does not resume - it ends with
/// [`SearchOutcome::Stopped`] at the next iteration boundary.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    stop_requested: Arc<AtomicBool>,
}

impl SearchHandle {
    /// Requests a stop at the next iteration boundary. Non-resumable.
    pub fn pause(&self) {
        self.stop_requested.store(true, Ordering::Relaxed);
    }

    /// Requests a stop at the next iteration boundary.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::Relaxed);
    }

    /// True once a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }
}

/// Mutable state of one search run, owned by the controller.
#[derive(Debug)]
struct SearchSession {
    attempts: u64,
    perfect_matches: Vec<String>,
    running: bool,
    stop_requested: Arc<AtomicBool>,
    started_at: Instant,
    target_count: usize,
    max_attempts: u64,
}

impl SearchSession {
    fn new(stop_requested: Arc<AtomicBool>, target_count: usize, max_attempts: u64) -> Self {
        Self {
            attempts: 0,
            perfect_matches: Vec::new(),
            running: true,
            stop_requested,
            started_at: Instant::now(),
            target_count,
            max_attempts,
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }

    fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Attempt progress fills 0-90%, found matches add the last 10%; the
    /// quota being met pins the bar at 100%.
    fn percentage(&self) -> f64 {
        if self.perfect_matches.len() >= self.target_count {
            return 100.0;
        }
        let attempt_part = if self.max_attempts > 0 {
            (self.attempts as f64 / self.max_attempts as f64 * 90.0).min(90.0)
        } else {
            90.0
        };
        let match_part = if self.target_count > 0 {
            self.perfect_matches.len() as f64 / self.target_count as f64 * 10.0
        } else {
            0.0
        };
        (attempt_part + match_part).min(100.0)
    }

    fn progress(&self) -> ProgressEvent {
        ProgressEvent {
            attempts: self.attempts,
            found_count: self.perfect_matches.len(),
            percentage: self.percentage(),
            elapsed_ms: self.elapsed_ms(),
        }
    }
}

/// Drives the generate-and-verify loop.
///
/// Exactly one session is active at a time; starting a run resets the
/// session and discards any prior matches.
#[derive(Debug)]
pub struct SearchController {
    stop_requested: Arc<AtomicBool>,
}

impl SearchController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self {
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a handle that can request cancellation of the current (or
    /// next) run from another task.
    pub fn handle(&self) -> SearchHandle {
        SearchHandle {
            stop_requested: Arc::clone(&self.stop_requested),
        }
    }

    /// Runs a search until the quota is met, the budget is spent, or a stop
    /// is requested.
    ///
    /// Candidates come from `source`, randomness from `rng`; pass a seeded
    /// generator for reproducible runs. When `progress` is given, a
    /// [`ProgressEvent`] is sent after every iteration. The in-flight
    /// candidate always completes: cancellation is observed only between
    /// iterations.
    pub async fn run(
        &mut self,
        plaintext: &str,
        params: &CipherParams,
        source: &mut dyn CandidateSource,
        rng: &mut dyn RngCore,
        target_count: usize,
        max_attempts: u64,
        progress: Option<&mpsc::UnboundedSender<ProgressEvent>>,
    ) -> SearchReport {
        let target_count = target_count.max(1);

        // A fresh start discards whatever a prior session accumulated
        self.stop_requested.store(false, Ordering::Relaxed);
        let mut session = SearchSession::new(
            Arc::clone(&self.stop_requested),
            target_count,
            max_attempts,
        );

        while session.running
            && !session.stop_requested()
            && session.perfect_matches.len() < session.target_count
            && session.attempts < session.max_attempts
        {
            // Cooperative suspension point so the loop never blocks the host
            if session.attempts % YIELD_INTERVAL == 0 {
                tokio::task::yield_now().await;
            }

            session.attempts += 1;

            let candidate = source.next_candidate(rng);
            let report = check_constraints(plaintext, &candidate, params);
            if report.is_valid {
                session.perfect_matches.push(candidate);
            }

            if let Some(tx) = progress {
                let _ = tx.send(session.progress());
            }
        }

        session.running = false;

        let outcome = if session.perfect_matches.len() >= session.target_count {
            SearchOutcome::TargetReached
        } else if session.attempts >= session.max_attempts {
            SearchOutcome::BudgetExhausted
        } else {
            SearchOutcome::Stopped
        };

        let elapsed_ms = session.elapsed_ms();
        SearchReport {
            perfect_matches: session.perfect_matches,
            attempts: session.attempts,
            outcome,
            elapsed_ms,
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Always returns a candidate that extracts nothing.
    struct NeverMatches;

    impl CandidateSource for NeverMatches {
        fn next_candidate(&mut self, _rng: &mut dyn RngCore) -> String {
            "no triggers here".to_string()
        }
    }

    /// Returns a perfect cover for plaintext "ab" on the n-th call.
    struct MatchesOnNth {
        calls: u64,
        nth: u64,
    }

    impl CandidateSource for MatchesOnNth {
        fn next_candidate(&mut self, _rng: &mut dyn RngCore) -> String {
            self.calls += 1;
            if self.calls == self.nth {
                "x,a.bz".to_string()
            } else {
                "zzz".to_string()
            }
        }
    }

    fn test_params() -> CipherParams {
        CipherParams::new(",.", 1, true)
    }

    #[tokio::test]
    async fn test_search_exhausts_budget() {
        let mut controller = SearchController::new();
        let mut source = NeverMatches;
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let report = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 100, None)
            .await;

        assert_eq!(report.attempts, 100);
        assert_eq!(report.outcome, SearchOutcome::BudgetExhausted);
        assert!(report.perfect_matches.is_empty());
    }

    #[tokio::test]
    async fn test_search_stops_at_target() {
        let mut controller = SearchController::new();
        let mut source = MatchesOnNth { calls: 0, nth: 5 };
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let report = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 100, None)
            .await;

        assert_eq!(report.attempts, 5);
        assert_eq!(report.outcome, SearchOutcome::TargetReached);
        assert_eq!(report.perfect_matches, vec!["x,a.bz".to_string()]);
    }

    /// Never matches, but raises the stop flag after a fixed number of calls.
    struct StopsItself {
        handle: SearchHandle,
        calls: u64,
        stop_after: u64,
    }

    impl CandidateSource for StopsItself {
        fn next_candidate(&mut self, _rng: &mut dyn RngCore) -> String {
            self.calls += 1;
            if self.calls >= self.stop_after {
                self.handle.stop();
            }
            "zzz".to_string()
        }
    }

    #[tokio::test]
    async fn test_search_honours_stop_request() {
        let mut controller = SearchController::new();
        let handle = controller.handle();
        let mut source = StopsItself {
            handle,
            calls: 0,
            stop_after: 7,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let report = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 100, None)
            .await;

        // The in-flight iteration completes; the stop lands at the boundary
        assert_eq!(report.attempts, 7);
        assert_eq!(report.outcome, SearchOutcome::Stopped);
        assert!(report.perfect_matches.is_empty());
    }

    #[test]
    fn test_pause_is_stop() {
        let controller = SearchController::new();
        let handle = controller.handle();
        handle.pause();
        assert!(handle.is_stop_requested());
    }

    #[tokio::test]
    async fn test_new_run_discards_previous_matches() {
        let mut controller = SearchController::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let mut source = MatchesOnNth { calls: 0, nth: 1 };
        let first = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 10, None)
            .await;
        assert_eq!(first.perfect_matches.len(), 1);

        let mut source = NeverMatches;
        let second = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 10, None)
            .await;
        assert!(second.perfect_matches.is_empty());
        assert_eq!(second.attempts, 10);
    }

    #[tokio::test]
    async fn test_progress_events_reported_every_iteration() {
        let mut controller = SearchController::new();
        let mut source = NeverMatches;
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let report = controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 20, Some(&tx))
            .await;
        drop(tx);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        assert_eq!(report.attempts, 20);
        assert_eq!(events.len(), 20);
        assert_eq!(events.last().unwrap().attempts, 20);
        // 20/20 attempts with no matches pins the bar at 90%
        assert!((events.last().unwrap().percentage - 90.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_progress_reaches_100_on_target() {
        let mut controller = SearchController::new();
        let mut source = MatchesOnNth { calls: 0, nth: 3 };
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (tx, mut rx) = mpsc::unbounded_channel();

        controller
            .run("ab", &test_params(), &mut source, &mut rng, 1, 100, Some(&tx))
            .await;
        drop(tx);

        let mut last = None;
        while let Some(event) = rx.recv().await {
            last = Some(event);
        }
        assert_eq!(last.unwrap().percentage, 100.0);
    }
}
