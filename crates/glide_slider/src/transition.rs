//! Wraparound state machine and navigation bookkeeping
//!
//! A plain step between neighbours needs no bookkeeping: both transforms are
//! set in one call and the stylesheet animates them. Wrapping past either end
//! is different. The slider animates a copy of the far end slide into view,
//! then silently rearranges the real slides behind it:
//!
//! ```text
//!   Idle ──wrap──▶ EnteringClone ──transition──▶ Snapping ──settle──▶ Settled (Idle)
//!                  clone created,               transitions off,      transitions on,
//!                  inserted next frame          slides snapped,       queued requests
//!                  and animated in              clone removed         replayed
//! ```
//!
//! While a wrap is in flight the slider refuses to start another transition;
//! see [`BusyPolicy`](crate::BusyPolicy).

use glide_timer::TaskId;

use crate::transform::Direction;
use crate::view::CloneHandle;

/// Phase of a wraparound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapPhase {
    /// The clone is on its way into view
    EnteringClone,
    /// Real slides have been snapped with transitions off
    Snapping,
    /// At rest
    Settled,
}

/// A wraparound in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrap {
    pub direction: Direction,
    /// The transient copy; removed when snapping
    pub clone: CloneHandle,
    pub phase: WrapPhase,
    /// The timer task that performs the next phase change
    pub step: TaskId,
}

/// Whether a wraparound is in flight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionState {
    #[default]
    Idle,
    Wrapping(Wrap),
}

impl TransitionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, TransitionState::Wrapping(_))
    }

    pub fn phase(&self) -> WrapPhase {
        match self {
            TransitionState::Idle => WrapPhase::Settled,
            TransitionState::Wrapping(wrap) => wrap.phase,
        }
    }
}

/// A navigation request, as held while a wrap is in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavRequest {
    Next,
    Prev,
    GoTo(usize),
}

/// What a navigation call did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Moved between two slides without wrapping
    Moved { from: usize, to: usize },
    /// Started a wraparound past one end
    Wrapped { from: usize, to: usize },
    /// Target was already current
    Unchanged,
    /// Held until the current wrap settles
    Queued,
    /// Discarded because a wrap is in flight
    Dropped,
}

impl Navigation {
    /// Index the slider now shows (or is heading to), if the call moved it
    pub fn target(self) -> Option<usize> {
        match self {
            Navigation::Moved { to, .. } | Navigation::Wrapped { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Tasks the slider schedules on its timer queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum SliderTask {
    Autoplay,
    InsertClone,
    Snap,
    Settle,
}
