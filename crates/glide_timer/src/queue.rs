//! Deferred task queue
//!
//! Tasks are stored in a slotmap keyed by [`TaskId`] so they can be cancelled
//! in O(1). Ordering is by deadline, with ties broken by scheduling order.

use slotmap::{new_key_type, SlotMap};
use std::time::Duration;
use thiserror::Error;

/// Default spacing between animation frames (~60fps)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

new_key_type! {
    /// Handle to a scheduled task
    pub struct TaskId;
}

/// Errors raised when scheduling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// A repeating task needs a non-zero interval, otherwise it would fire forever
    #[error("repeating interval must be non-zero")]
    ZeroInterval,
}

/// A task handed back by [`TimerQueue::pop_due`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// The task's handle (still valid for repeating tasks)
    pub id: TaskId,
    /// Clock time the task was due at
    pub at: Duration,
    /// The payload supplied when scheduling
    pub payload: T,
}

struct Entry<T> {
    due: Duration,
    seq: u64,
    repeat: Option<Duration>,
    payload: T,
}

/// Single-threaded queue of deferred tasks on a virtual clock
///
/// The clock only moves when the owner pops tasks or calls
/// [`advance_clock`](Self::advance_clock); nothing here sleeps or spawns.
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    tasks: SlotMap<TaskId, Entry<T>>,
}

impl<T> std::fmt::Debug for TimerQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("pending", &self.tasks.len())
            .finish()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            tasks: SlotMap::with_key(),
        }
    }

    /// Current clock time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `payload` once after `delay`
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        self.insert(self.now + delay, None, payload)
    }

    /// Run `payload` on the next animation frame
    pub fn request_frame(&mut self, payload: T) -> TaskId {
        self.insert(self.now + DEFAULT_FRAME_INTERVAL, None, payload)
    }

    /// Run `payload` every `interval`, first firing one interval from now
    pub fn schedule_repeating(&mut self, interval: Duration, payload: T) -> crate::Result<TaskId> {
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval);
        }
        Ok(self.insert(self.now + interval, Some(interval), payload))
    }

    /// Cancel a pending task, returning whether it was still pending
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(id).is_some()
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.values().map(|entry| entry.due).min()
    }

    /// Move the clock forward without firing anything
    ///
    /// The clock never moves backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    fn insert(&mut self, due: Duration, repeat: Option<Duration>, payload: T) -> TaskId {
        let seq = self.bump_seq();
        self.tasks.insert(Entry {
            due,
            seq,
            repeat,
            payload,
        })
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn earliest_due(&self, deadline: Duration) -> Option<(TaskId, Duration)> {
        self.tasks
            .iter()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(id, entry)| (id, entry.due))
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Pop the earliest task due at or before `deadline`
    ///
    /// The clock moves to the task's due time. One-shot tasks are removed;
    /// repeating tasks are rescheduled one interval later before being
    /// returned, so the caller may cancel them from inside the handler.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired<T>> {
        let (id, due) = self.earliest_due(deadline)?;
        self.now = self.now.max(due);

        let repeat = self.tasks.get(id).and_then(|entry| entry.repeat);
        let payload = match repeat {
            Some(interval) => {
                let seq = self.bump_seq();
                let entry = self.tasks.get_mut(id)?;
                entry.due += interval;
                entry.seq = seq;
                entry.payload.clone()
            }
            None => self.tasks.remove(id)?.payload,
        };

        tracing::trace!(?id, ?due, "timer fired");
        Some(Fired {
            id,
            at: due,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain<T: Clone>(timers: &mut TimerQueue<T>, deadline: Duration) -> Vec<T> {
        std::iter::from_fn(|| timers.pop_due(deadline))
            .map(|fired| fired.payload)
            .collect()
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(300), "c");
        timers.schedule(ms(100), "a");
        timers.schedule(ms(200), "b");

        assert_eq!(drain(&mut timers, ms(1000)), vec!["a", "b", "c"]);
        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.now(), ms(300));
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(50), 1);
        timers.schedule(ms(50), 2);
        timers.schedule(ms(50), 3);

        assert_eq!(drain(&mut timers, ms(50)), vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(500), ());

        assert!(timers.pop_due(ms(499)).is_none());
        assert_eq!(timers.now(), Duration::ZERO);
        assert_eq!(timers.next_deadline(), Some(ms(500)));
    }

    #[test]
    fn test_repeating_reschedules() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(ms(1000), "tick").unwrap();

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(ms(3500)))
            .map(|fired| fired.at)
            .collect();
        assert_eq!(fired, vec![ms(1000), ms(2000), ms(3000)]);
        assert_eq!(timers.next_deadline(), Some(ms(4000)));
        assert!(timers.cancel(id));
    }

    #[test]
    fn test_cancel_repeating_from_handler() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(ms(10), ()).unwrap();

        let fired = timers.pop_due(ms(100)).unwrap();
        assert_eq!(fired.id, id);
        assert!(timers.cancel(fired.id));
        assert!(timers.pop_due(ms(100)).is_none());
        assert!(!timers.cancel(id));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut timers: TimerQueue<()> = TimerQueue::new();
        assert_eq!(
            timers.schedule_repeating(Duration::ZERO, ()),
            Err(TimerError::ZeroInterval)
        );
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn test_frame_fires_one_frame_later() {
        let mut timers = TimerQueue::new();
        timers.advance_clock(ms(100));
        timers.request_frame("frame");

        assert_eq!(timers.next_deadline(), Some(ms(100) + DEFAULT_FRAME_INTERVAL));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut timers: TimerQueue<()> = TimerQueue::new();
        timers.advance_clock(ms(200));
        timers.advance_clock(ms(100));
        assert_eq!(timers.now(), ms(200));
    }
}
