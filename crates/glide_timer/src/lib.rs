//! Glide Timer Queue
//!
//! A single-threaded queue of deferred tasks driven by a host clock.
//!
//! Widgets schedule work instead of blocking: one-shot delays, repeating
//! intervals and next-frame callbacks all land in the same queue and are
//! handed back to the owner in deadline order when the host advances time.
//!
//! # Example
//!
//! ```rust
//! use glide_timer::TimerQueue;
//! use std::time::Duration;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Duration::from_millis(500), "snap");
//! timers.request_frame("insert");
//!
//! let deadline = timers.now() + Duration::from_millis(600);
//! let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(deadline))
//!     .map(|task| task.payload)
//!     .collect();
//! assert_eq!(fired, vec!["insert", "snap"]);
//! ```

mod queue;

pub use queue::{Fired, TaskId, TimerError, TimerQueue, DEFAULT_FRAME_INTERVAL};

/// Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
