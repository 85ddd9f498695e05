use std::collections::VecDeque;

use log::debug;

/// One finished entry waiting to expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgedEntry {
    pub finished_at: u64,
    pub id: u32,
    pub serial: u64,
}

/// Finished entries ordered by the time they finished, oldest first.
///
/// Timestamps never decrease from head to tail: a push with a timestamp older
/// than the tail is recorded at the tail's time.
#[derive(Debug, Default)]
pub struct AgingQueue {
    entries: VecDeque<AgedEntry>,
}

impl AgingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, now: u64, id: u32, serial: u64) {
        let finished_at = match self.entries.back() {
            Some(tail) if tail.finished_at > now => {
                debug!(
                    "Clock went backwards ({} < {}), queueing job {} at tail time.",
                    now,
                    tail.finished_at,
                    id
                );
                tail.finished_at
            }
            _ => now,
        };
        self.entries.push_back(AgedEntry { finished_at, id, serial });
    }

    /// Pops every entry with `finished_at + duration <= now`, stopping at the
    /// first one that is still too young.
    pub fn pop_expired(&mut self, now: u64, duration: u64) -> Vec<AgedEntry> {
        let expired = self
            .entries
            .iter()
            .take_while(|entry| entry.finished_at.saturating_add(duration) <= now)
            .count();
        let popped: Vec<AgedEntry> = self.entries.drain(..expired).collect();
        debug_assert!(self.is_ordered(), "aging queue out of order");
        popped
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgedEntry> {
        self.entries.iter()
    }

    fn is_ordered(&self) -> bool {
        self.entries
            .iter()
            .zip(self.entries.iter().skip(1))
            .all(|(a, b)| a.finished_at <= b.finished_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[AgedEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn pops_only_the_expired_prefix() {
        let mut queue = AgingQueue::new();
        queue.push(100, 1, 0);
        queue.push(101, 2, 1);
        queue.push(105, 3, 2);

        assert!(queue.pop_expired(104, 5).is_empty());
        assert_eq!(ids(&queue.pop_expired(106, 5)), [1, 2]);
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_expired(109, 5).is_empty());
        assert_eq!(ids(&queue.pop_expired(110, 5)), [3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_duration_expires_everything_queued() {
        let mut queue = AgingQueue::new();
        queue.push(50, 1, 0);
        queue.push(50, 2, 1);
        assert_eq!(ids(&queue.pop_expired(50, 0)), [1, 2]);
    }

    #[test]
    fn backwards_clock_keeps_order() {
        let mut queue = AgingQueue::new();
        queue.push(200, 1, 0);
        queue.push(150, 2, 1);

        let times: Vec<u64> = queue.iter().map(|e| e.finished_at).collect();
        assert_eq!(times, [200, 200]);
        assert!(queue.pop_expired(204, 5).is_empty());
        assert_eq!(ids(&queue.pop_expired(205, 5)), [1, 2]);
    }

    #[test]
    fn huge_duration_does_not_overflow() {
        let mut queue = AgingQueue::new();
        queue.push(u64::MAX - 1, 1, 0);
        assert!(queue.pop_expired(u64::MAX - 1, u64::MAX).is_empty());
        queue.clear();
        assert!(queue.is_empty());
    }
}
