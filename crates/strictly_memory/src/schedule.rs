//! Deferred actions on a logical clock.
//!
//! Timeouts and the countdown interval are modelled as explicit queue
//! entries instead of callbacks, so a reset can cancel all of them at once.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Something the session does later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredAction {
    /// One countdown second elapsed.
    Tick,
    /// A matched pair has been shown long enough; clear the selection.
    SettleMatch {
        /// First card of the pair.
        first: usize,
        /// Second card of the pair.
        second: usize,
    },
    /// A mismatched pair has been shown long enough; turn both face-down.
    HideMismatch {
        /// First card flipped.
        first: usize,
        /// Second card flipped.
        second: usize,
    },
    /// The end-of-game message has been shown long enough.
    HideMessage,
}

/// A queued action and when it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ScheduledAction {
    /// Logical time at which the action fires.
    pub due: Duration,
    /// Insertion order, breaks ties between equal due times.
    pub seq: u64,
    /// What to do.
    pub action: DeferredAction,
}

/// Queue of pending deferred actions, ordered by due time then insertion.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledAction>,
    next_seq: u64,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to fire at `due`.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, due: Duration, action: DeferredAction) {
        let entry = ScheduledAction::new(due, self.next_seq, action);
        self.next_seq += 1;
        let at = self
            .pending
            .partition_point(|p| (p.due, p.seq) <= (entry.due, entry.seq));
        self.pending.insert(at, entry);
        trace!(pending = self.pending.len(), "Action scheduled");
    }

    /// Removes and returns the earliest action due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledAction> {
        match self.pending.first() {
            Some(first) if first.due <= now => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    /// Due time of the earliest pending action.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|p| p.due)
    }

    /// Cancels every pending action matching `predicate`; returns how many.
    pub fn cancel(&mut self, predicate: impl Fn(&DeferredAction) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !predicate(&p.action));
        before - self.pending.len()
    }

    /// Cancels everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending actions in firing order.
    pub fn pending(&self) -> &[ScheduledAction] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(800), DeferredAction::HideMessage);
        scheduler.schedule(ms(200), DeferredAction::Tick);

        assert_eq!(scheduler.next_due(), Some(ms(200)));
        assert_eq!(scheduler.pop_due(ms(100)), None);
        assert_eq!(scheduler.pop_due(ms(1000)).map(|p| p.action), Some(DeferredAction::Tick));
        assert_eq!(
            scheduler.pop_due(ms(1000)).map(|p| p.action),
            Some(DeferredAction::HideMessage)
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1000), DeferredAction::Tick);
        scheduler.schedule(ms(1000), DeferredAction::HideMessage);
        assert_eq!(scheduler.pop_due(ms(1000)).map(|p| p.action), Some(DeferredAction::Tick));
    }

    #[test]
    fn test_cancel_matching() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1000), DeferredAction::Tick);
        scheduler.schedule(ms(5000), DeferredAction::HideMessage);
        let removed = scheduler.cancel(|a| matches!(a, DeferredAction::Tick));
        assert_eq!(removed, 1);
        assert_eq!(scheduler.len(), 1);
        scheduler.clear();
        assert_eq!(scheduler.next_due(), None);
    }
}
