use std::collections::BTreeMap;

use super::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Fire-once timers keyed by absolute deadline. Timers sharing a deadline
/// fire in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    next_id: u64,
    pending: BTreeMap<(Millis, TimerId), K>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<K> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Millis, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((at, id), kind);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<K> {
        let key = self.pending.keys().find(|(_, tid)| *tid == id).copied()?;
        self.pending.remove(&key)
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.keys().next().map(|(at, _)| *at)
    }

    /// Removes the earliest timer if it is due, returning its deadline.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, K)> {
        let (at, _) = *self.pending.keys().next()?;
        if at > now {
            return None;
        }
        self.pending.pop_first().map(|((at, _), kind)| (at, kind))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, "c");
        q.schedule(100, "a");
        q.schedule(100, "b");
        assert_eq!(q.next_deadline(), Some(100));
        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.pop_due(100), Some((100, "a")));
        assert_eq!(q.pop_due(250).map(|(_, k)| k), Some("b"));
        assert_eq!(q.pop_due(250), None);
        assert_eq!(q.pop_due(1000).map(|(_, k)| k), Some("c"));
        assert!(q.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10, 1);
        let b = q.schedule(20, 2);
        assert_eq!(q.cancel(a), Some(1));
        assert_eq!(q.cancel(a), None);
        assert_eq!(q.next_deadline(), Some(20));
        q.schedule(30, 3);
        q.cancel_all();
        assert_eq!(q.len(), 0);
        assert_eq!(q.cancel(b), None);
        assert_eq!(q.pop_due(Millis::MAX), None);
    }
}
