//! Tokio-driven bridge runtime.
//!
//! Bridges the synchronous launch engine onto real timers: each armed timer
//! becomes a spawned sleep task feeding one mpsc channel, and a select loop
//! dispatches fired events back into the engine. Stdin lines act as the
//! manual retry control once it is revealed.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::engine::{Bridge, Scheduler, TimerEvent};
use crate::error::BridgeError;

/// Scheduler backed by spawned `tokio::time::sleep` tasks.
///
/// Armed timers are independent tasks; dropping the receiver (ending the run
/// loop) is the only way pending timers stop mattering, which matches the
/// page-teardown semantics of the original flow.
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the run loop already ended.
            let _ = tx.send(event);
        });
    }
}

/// Drive a bridge to completion with real timers.
///
/// Interactive mode reads `input` line by line: once the manual control is
/// revealed, any line re-triggers the launch; `q` or end-of-input exits.
/// Non-interactive mode returns as soon as the manual control reveals.
pub async fn run_bridge<I>(
    mut bridge: Bridge,
    interactive: bool,
    input: I,
) -> Result<(), BridgeError>
where
    I: AsyncBufRead + Unpin,
{
    let (mut scheduler, mut timers) = TokioScheduler::new();
    bridge.start(&mut scheduler);

    let mut lines = input.lines();

    loop {
        tokio::select! {
            Some(event) = timers.recv() => {
                bridge.on_timer(event, &mut scheduler);
                if !interactive && bridge.manual_control_visible() {
                    return Ok(());
                }
            }
            line = lines.next_line(), if interactive => {
                match line? {
                    None => return Ok(()),
                    Some(text) if text.trim() == "q" => return Ok(()),
                    Some(_) if bridge.manual_control_visible() => {
                        bridge.manual_trigger(&mut scheduler);
                    }
                    Some(_) => {
                        debug!("retry input ignored; manual control not revealed yet");
                    }
                }
            }
            else => return Ok(()),
        }
    }
}
