//! Deferred message clearing
//!
//! Timed clears are plain values (`ScheduledClear`) produced by state
//! transitions. A `Scheduler` turns them into wake-ups that come back to the
//! App actor as `ClearToken`s. Each token names the message generation it was
//! issued for, so a clear that fires late never erases a newer message.

use std::time::Duration;

use tokio::sync::mpsc;

/// Which message slot a clear applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Identifies one specific message instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearToken {
    pub kind: MessageKind,
    pub generation: u64,
}

/// Request to clear a message after a delay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledClear {
    pub token: ClearToken,
    pub after: Duration,
}

/// Source of deferred wake-ups
pub trait Scheduler: Send {
    fn schedule(&mut self, clear: ScheduledClear);
}

/// Scheduler backed by Tokio timers. Expired tokens are posted to `expire_tx`.
pub struct TokioScheduler {
    expire_tx: mpsc::UnboundedSender<ClearToken>,
}

impl TokioScheduler {
    pub fn new(expire_tx: mpsc::UnboundedSender<ClearToken>) -> Self {
        TokioScheduler { expire_tx }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, clear: ScheduledClear) {
        let tx = self.expire_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(clear.after).await;
            let _ = tx.send(clear.token);
        });
    }
}

/// Virtual-time scheduler for deterministic tests
#[cfg(test)]
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, ClearToken)>,
}

#[cfg(test)]
impl ManualScheduler {
    /// Move the clock forward and return the tokens that became due, in order
    pub fn advance(&mut self, by: Duration) -> Vec<ClearToken> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, ClearToken)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, token)| token).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&mut self, clear: ScheduledClear) {
        self.pending.push((self.now + clear.after, clear.token));
    }
}
