//! Launch-attempt sequencing.
//!
//! `Bridge` is the state machine at the center of the crate: it owns the
//! immutable launch configuration and incoming parameters, recomputes the
//! deep link for every attempt, and fires navigation through the injected
//! `Navigator` while narrating through the `Reporter`. All timing goes
//! through the `Scheduler` seam so the whole sequence can be driven by a
//! simulated clock in tests.

use std::time::Duration;

use tracing::debug;

use crate::config::{BridgeConfig, LaunchStrategy};
use crate::deeplink;
use crate::detect::Platform;
use crate::error::NavigateError;
use crate::navigator::{FrameId, Navigator};
use crate::params::ParamMap;
use crate::reporter::Reporter;

/// Gap between the intent-URI attempt and the direct-navigate fallback,
/// long enough for Chrome to hand off to the target app first.
pub const INTENT_SECONDARY_DELAY: Duration = Duration::from_millis(500);
/// Gap between the hidden-frame attempt and the direct-navigate fallback.
pub const FRAME_SECONDARY_DELAY: Duration = Duration::from_millis(100);
/// How long an embedded frame stays alive before teardown.
pub const FRAME_GRACE: Duration = Duration::from_millis(1000);

/// Observable phases of the automatic launch flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Idle,
    AwaitingInitialDelay,
    LaunchAttempted,
    AwaitingFallbackReveal,
    ManualControlVisible,
}

/// Timer payloads the engine arms through the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// First automatic launch attempt.
    InitialLaunch,
    /// Direct navigation fallback for an attempt already in flight.
    SecondaryNavigate { uri: String },
    /// Reveal the manual retry control.
    RevealManualControl,
    /// Tear down a hidden frame after its grace period.
    RemoveFrame { frame: FrameId },
}

/// Timer source seam. Once armed a timer always fires; dropping the driving
/// loop is the only cancellation path.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent);
}

/// The bridge-page launch engine.
pub struct Bridge {
    config: BridgeConfig,
    params: ParamMap,
    user_agent: String,
    navigator: Box<dyn Navigator>,
    reporter: Box<dyn Reporter>,
    state: LaunchState,
}

impl Bridge {
    pub fn new(
        config: BridgeConfig,
        params: ParamMap,
        user_agent: String,
        navigator: Box<dyn Navigator>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            params,
            user_agent,
            navigator,
            reporter,
            state: LaunchState::Idle,
        }
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    pub fn manual_control_visible(&self) -> bool {
        self.state == LaunchState::ManualControlVisible
    }

    /// Begin the automatic flow: dump startup diagnostics and arm the
    /// initial-launch timer. Calls after the first are ignored.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        if self.state != LaunchState::Idle {
            return;
        }
        self.reporter.debug(&format!(
            "platform: {}",
            Platform::from_user_agent(&self.user_agent)
        ));
        self.reporter
            .debug(&format!("target: {}", self.config.scheme));
        for (key, value) in self.params.iter() {
            self.reporter.debug(&format!("param {key}={value}"));
        }
        self.state = LaunchState::AwaitingInitialDelay;
        scheduler.schedule(self.config.launch_delay(), TimerEvent::InitialLaunch);
    }

    /// Dispatch a fired timer.
    pub fn on_timer(&mut self, event: TimerEvent, scheduler: &mut dyn Scheduler) {
        debug!(state = ?self.state, event = ?event, "timer fired");
        match event {
            TimerEvent::InitialLaunch => {
                self.state = LaunchState::LaunchAttempted;
                self.attempt_launch(scheduler);
                self.state = LaunchState::AwaitingFallbackReveal;
                scheduler.schedule(
                    self.config.fallback_delay(),
                    TimerEvent::RevealManualControl,
                );
            }
            TimerEvent::SecondaryNavigate { uri } => {
                self.reporter.debug("direct navigation fallback");
                if let Err(e) = self.navigator.navigate(&uri) {
                    self.report_launch_failure(&e);
                }
            }
            TimerEvent::RevealManualControl => {
                // The flip happens at most once per automatic sequence.
                if self.state == LaunchState::AwaitingFallbackReveal {
                    self.state = LaunchState::ManualControlVisible;
                    self.reporter
                        .status("app did not open automatically; use the retry control");
                }
            }
            TimerEvent::RemoveFrame { frame } => {
                self.navigator.remove_frame(frame);
            }
        }
    }

    /// Re-run the launch attempt on user request.
    ///
    /// Re-entrant without limit; never resets earlier timers or state.
    pub fn manual_trigger(&mut self, scheduler: &mut dyn Scheduler) {
        self.reporter.debug("manual trigger");
        self.attempt_launch(scheduler);
    }

    /// One launch attempt: recompute the link, re-detect the platform, fire
    /// the primary strategy, and arm the direct-navigate fallback.
    fn attempt_launch(&mut self, scheduler: &mut dyn Scheduler) {
        let deep_link = deeplink::compose(&self.config.scheme, &self.params);
        let platform = Platform::from_user_agent(&self.user_agent);
        self.reporter
            .debug(&format!("attempting launch on {platform}: {deep_link}"));

        if !platform.supports_launch() {
            self.reporter
                .status("automatic launch is only supported on Android devices");
            return;
        }

        self.reporter.status("launching app");
        let secondary_delay = match self.config.strategy {
            LaunchStrategy::Intent => {
                if let Err(e) = self.launch_via_intent(&deep_link) {
                    self.report_launch_failure(&e);
                }
                INTENT_SECONDARY_DELAY
            }
            LaunchStrategy::Frame => {
                match self.navigator.embed_frame(&deep_link) {
                    Ok(frame) => {
                        self.reporter.debug("launch attempted via hidden frame");
                        scheduler.schedule(FRAME_GRACE, TimerEvent::RemoveFrame { frame });
                    }
                    Err(e) => self.report_launch_failure(&e),
                }
                FRAME_SECONDARY_DELAY
            }
        };

        // Primary has already fired; the fallback trails it by construction.
        scheduler.schedule(
            secondary_delay,
            TimerEvent::SecondaryNavigate { uri: deep_link },
        );
    }

    fn launch_via_intent(&mut self, deep_link: &str) -> Result<(), NavigateError> {
        let intent = deeplink::intent_uri(deep_link, &self.config.package)
            .ok_or_else(|| NavigateError::MalformedTarget(deep_link.to_string()))?;
        self.reporter
            .debug(&format!("launch attempted via intent URI: {intent}"));
        self.navigator.navigate(&intent)
    }

    fn report_launch_failure(&mut self, error: &NavigateError) {
        self.reporter.status(&format!("launch attempt failed: {error}"));
        self.reporter.debug(&format!("navigation error: {error}"));
    }
}
