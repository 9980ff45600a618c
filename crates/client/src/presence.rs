//! Typing presence
//!
//! Local keystrokes are coalesced into at most one typing signal per quiet
//! period. Remote typing signals drive a transient "incoming activity"
//! indicator that a chat message from the same participant clears.

use std::time::Duration;

use chatbox_shared::{ParticipantId, TypingSignal};
use tokio::time::Instant;

/// Quiet period after the last keystroke before a typing signal goes out
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// The single scheduled emission
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingEmission {
    deadline: Instant,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Indicator {
    sender: ParticipantId,
    status_text: String,
}

/// Outcome of applying a remote typing signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceUpdate {
    pub status_text: String,
    pub preview: String,
    /// First signal since the last rendered message
    pub play_cue: bool,
}

#[derive(Debug)]
pub struct PresenceDebouncer {
    quiet_period: Duration,
    pending: Option<PendingEmission>,
    indicator: Option<Indicator>,
    cued: bool,
}

impl PresenceDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            indicator: None,
            cued: false,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Record local input; replaces any pending emission
    pub fn notify_local_activity(&mut self, current_text: &str) {
        self.schedule_at(current_text, Instant::now());
    }

    /// Cancel-then-schedule as one step: the previous deadline is gone
    /// before the new one exists.
    pub fn schedule_at(&mut self, current_text: &str, now: Instant) {
        self.pending = Some(PendingEmission {
            deadline: now + self.quiet_period,
            text: current_text.to_string(),
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending emission, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the text snapshot once its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.text)
        } else {
            None
        }
    }

    /// Apply a remote typing signal; self-echoes are ignored
    pub fn on_remote_signal(
        &mut self,
        signal: &TypingSignal,
        local: &ParticipantId,
    ) -> Option<PresenceUpdate> {
        if signal.sender == *local {
            return None;
        }

        self.indicator = Some(Indicator {
            sender: signal.sender.clone(),
            status_text: signal.status_text.clone(),
        });

        let play_cue = !self.cued;
        self.cued = true;

        Some(PresenceUpdate {
            status_text: signal.status_text.clone(),
            preview: signal.body.clone(),
            play_cue,
        })
    }

    /// A chat message was rendered; returns true if the indicator was cleared
    pub fn on_chat_rendered(&mut self, sender: &ParticipantId) -> bool {
        self.cued = false;

        let clears = self
            .indicator
            .as_ref()
            .is_some_and(|indicator| indicator.sender == *sender);
        if clears {
            self.indicator = None;
        }
        clears
    }

    /// Currently surfaced incoming activity
    pub fn indicator(&self) -> Option<&str> {
        self.indicator.as_ref().map(|i| i.status_text.as_str())
    }
}

impl Default for PresenceDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}
