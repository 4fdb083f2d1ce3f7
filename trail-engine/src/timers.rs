//! Token-keyed timer registry
//!
//! Every scheduled action gets a fresh [`TimerToken`]. Cancelling is a map
//! removal; firing pops the earliest deadline. Tokens are issued in
//! increasing order, so actions sharing a deadline fire in the order they
//! were scheduled.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    AutoDraw,
    ManualTimeout,
    PeriodicClear,
    FadeStep,
    ModeSettle,
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    next_id: u64,
    queue: BTreeMap<(u64, TimerToken), TimerKind>,
    deadlines: HashMap<TimerToken, u64>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: u64, kind: TimerKind) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.queue.insert((at, token), kind);
        self.deadlines.insert(token, at);
        token
    }

    /// Revoke a pending action. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match self.deadlines.remove(&token) {
            Some(at) => self.queue.remove(&(at, token)).is_some(),
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.deadlines.contains_key(&token)
    }

    pub fn deadline(&self, token: TimerToken) -> Option<u64> {
        self.deadlines.get(&token).copied()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Remove and return the earliest action due at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<(u64, TimerToken, TimerKind)> {
        let (&(at, token), _) = self.queue.iter().next()?;
        if at > now {
            return None;
        }
        let kind = self.queue.remove(&(at, token))?;
        self.deadlines.remove(&token);
        Some((at, token, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_deadline_then_schedule_order() {
        let mut timers = TimerRegistry::new();
        let late = timers.schedule(200, TimerKind::AutoDraw);
        let first = timers.schedule(100, TimerKind::FadeStep);
        let second = timers.schedule(100, TimerKind::PeriodicClear);

        assert_eq!(timers.next_deadline(), Some(100));
        assert_eq!(timers.pop_due(150), Some((100, first, TimerKind::FadeStep)));
        assert_eq!(
            timers.pop_due(150),
            Some((100, second, TimerKind::PeriodicClear))
        );
        assert_eq!(timers.pop_due(150), None);
        assert!(timers.is_pending(late));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancelled_tokens_never_fire() {
        let mut timers = TimerRegistry::new();
        let token = timers.schedule(10, TimerKind::ManualTimeout);
        assert!(timers.cancel(token));
        assert!(!timers.cancel(token));
        assert!(timers.pop_due(1_000).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn cancel_all_empties_registry() {
        let mut timers = TimerRegistry::new();
        let a = timers.schedule(10, TimerKind::AutoDraw);
        timers.schedule(20, TimerKind::ModeSettle);
        timers.cancel_all();
        assert!(!timers.is_pending(a));
        assert_eq!(timers.next_deadline(), None);
    }
}
