use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::round::RoundId;

/// Virtual-time timer queue, in milliseconds.
///
/// Nothing here sleeps. Timers fire when the owner advances the clock past
/// their due time; timers due at the same instant fire in the order they
/// were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: u64,
    seq: u64,
    heap: BinaryHeap<Reverse<(u64, u64, RoundId)>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u64, round: RoundId) -> u64 {
        let due = self.now.saturating_add(delay_ms);
        self.seq += 1;
        self.heap.push(Reverse((due, self.seq, round)));
        due
    }

    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<RoundId> {
        match self.heap.peek() {
            Some(Reverse((due, _, _))) if *due <= until => {}
            _ => return None,
        }
        let Reverse((due, _, round)) = self.heap.pop()?;
        self.now = self.now.max(due);
        Some(round)
    }

    /// Moves the clock forward without firing anything.
    pub fn settle_at(&mut self, t: u64) {
        self.now = self.now.max(t);
    }
}
