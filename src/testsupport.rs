//! Shared test fixtures: a simulated clock for the scheduler seam, in-memory
//! reporter/navigator bindings, and a temp-dir helper for config tests.
//!
//! Intentionally std-only so unit tests can use these without new
//! dependencies.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::engine::{Bridge, Scheduler, TimerEvent};
use crate::error::NavigateError;
use crate::navigator::{FrameId, Navigator};
use crate::reporter::Reporter;

// ---------------------------------------------------------------------------
// SimScheduler
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ScheduledTimer {
    deadline: Duration,
    seq: u64,
    event: TimerEvent,
}

/// Virtual-clock scheduler for deterministic sequencing tests.
///
/// Timers are dispatched in deadline order (FIFO among equal deadlines), and
/// every fired event is logged with its virtual timestamp so tests can assert
/// ordering properties.
#[derive(Debug, Default)]
pub struct SimScheduler {
    now: Duration,
    seq: u64,
    queue: Vec<ScheduledTimer>,
    fired: Vec<(Duration, TimerEvent)>,
}

impl SimScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fired events with their virtual timestamps, in dispatch order.
    pub fn fired(&self) -> &[(Duration, TimerEvent)] {
        &self.fired
    }

    /// Advance the clock by `delta`, dispatching every timer that comes due.
    ///
    /// Dispatch can arm new timers; those fire too when they land inside the
    /// window.
    pub fn advance(&mut self, bridge: &mut Bridge, delta: Duration) {
        let limit = self.now + delta;
        while let Some(timer) = self.pop_due(limit) {
            self.now = timer.deadline;
            self.fired.push((timer.deadline, timer.event.clone()));
            bridge.on_timer(timer.event, self);
        }
        self.now = limit;
    }

    /// Dispatch timers until the queue drains.
    pub fn run_until_idle(&mut self, bridge: &mut Bridge) {
        while let Some(timer) = self.pop_due(Duration::MAX) {
            self.now = timer.deadline;
            self.fired.push((timer.deadline, timer.event.clone()));
            bridge.on_timer(timer.event, self);
        }
    }

    fn pop_due(&mut self, limit: Duration) -> Option<ScheduledTimer> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= limit)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(i, _)| i)?;
        Some(self.queue.remove(index))
    }
}

impl Scheduler for SimScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.seq += 1;
        self.queue.push(ScheduledTimer {
            deadline: self.now + delay,
            seq: self.seq,
            event,
        });
    }
}

// ---------------------------------------------------------------------------
// MemoryReporter
// ---------------------------------------------------------------------------

/// Reporter binding that appends to shared in-memory logs.
///
/// Clone handles share the same logs, so a clone handed to the engine stays
/// inspectable from the test.
#[derive(Clone, Default)]
pub struct MemoryReporter {
    statuses: Arc<Mutex<Vec<String>>>,
    debugs: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().expect("reporter lock").clone()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().expect("reporter lock").clone()
    }
}

impl Reporter for MemoryReporter {
    fn status(&self, message: &str) {
        self.statuses
            .lock()
            .expect("reporter lock")
            .push(message.to_string());
    }

    fn debug(&self, message: &str) {
        self.debugs
            .lock()
            .expect("reporter lock")
            .push(message.to_string());
    }
}

// ---------------------------------------------------------------------------
// RecordingNavigator
// ---------------------------------------------------------------------------

/// One recorded navigation side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Navigate(String),
    EmbedFrame(String),
    RemoveFrame(u64),
}

/// Navigator binding that records every action, optionally failing each
/// navigation attempt to exercise the caught-error paths.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    actions: Arc<Mutex<Vec<NavAction>>>,
    next_frame: Arc<AtomicU64>,
    fail: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigator whose navigate/embed calls always error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn actions(&self) -> Vec<NavAction> {
        self.actions.lock().expect("navigator lock").clone()
    }

    fn record(&self, action: NavAction) {
        self.actions.lock().expect("navigator lock").push(action);
    }

    fn failure(&self) -> NavigateError {
        NavigateError::Spawn(std::io::Error::other("simulated opener failure"))
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, uri: &str) -> Result<(), NavigateError> {
        if self.fail {
            return Err(self.failure());
        }
        self.record(NavAction::Navigate(uri.to_string()));
        Ok(())
    }

    fn embed_frame(&mut self, uri: &str) -> Result<FrameId, NavigateError> {
        if self.fail {
            return Err(self.failure());
        }
        self.record(NavAction::EmbedFrame(uri.to_string()));
        let id = self.next_frame.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(FrameId(id))
    }

    fn remove_frame(&mut self, frame: FrameId) {
        self.record(NavAction::RemoveFrame(frame.0));
    }
}

// ---------------------------------------------------------------------------
// TestTempDir
// ---------------------------------------------------------------------------

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("applink-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_scheduler_dispatches_in_deadline_order() {
        let mut clock = SimScheduler::new();
        clock.schedule(Duration::from_millis(200), TimerEvent::RevealManualControl);
        clock.schedule(Duration::from_millis(100), TimerEvent::InitialLaunch);
        let first = clock.pop_due(Duration::MAX).unwrap();
        let second = clock.pop_due(Duration::MAX).unwrap();
        assert_eq!(first.event, TimerEvent::InitialLaunch);
        assert_eq!(second.event, TimerEvent::RevealManualControl);
        assert!(clock.pop_due(Duration::MAX).is_none());
    }

    #[test]
    fn sim_scheduler_equal_deadlines_dispatch_fifo() {
        let mut clock = SimScheduler::new();
        let delay = Duration::from_millis(50);
        clock.schedule(delay, TimerEvent::InitialLaunch);
        clock.schedule(delay, TimerEvent::RevealManualControl);
        assert_eq!(
            clock.pop_due(Duration::MAX).unwrap().event,
            TimerEvent::InitialLaunch
        );
        assert_eq!(
            clock.pop_due(Duration::MAX).unwrap().event,
            TimerEvent::RevealManualControl
        );
    }

    #[test]
    fn memory_reporter_clones_share_logs() {
        let reporter = MemoryReporter::new();
        let clone = reporter.clone();
        clone.status("hello");
        clone.debug("detail");
        assert_eq!(reporter.statuses(), vec!["hello".to_string()]);
        assert_eq!(reporter.debugs(), vec!["detail".to_string()]);
    }

    #[test]
    fn recording_navigator_assigns_increasing_frames() {
        let mut navigator = RecordingNavigator::new();
        let a = navigator.embed_frame("app://a").unwrap();
        let b = navigator.embed_frame("app://b").unwrap();
        assert!(b.0 > a.0);
    }

    #[test]
    fn failing_navigator_records_nothing() {
        let mut navigator = RecordingNavigator::failing();
        assert!(navigator.navigate("app://x").is_err());
        assert!(navigator.embed_frame("app://x").is_err());
        assert!(navigator.actions().is_empty());
    }

    #[test]
    fn temp_dir_fixture_resolves_child_paths() {
        let fixture = TestTempDir::new("fixture");
        let child = fixture.child("nested/applink.toml");
        assert!(child.starts_with(fixture.path()));
    }
}
