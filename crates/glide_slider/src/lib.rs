//! Glide Slider
//!
//! A carousel widget: one visible slide out of a fixed sequence, previous and
//! next controls, a dot per slide, optional autoplay, and seamless looping
//! past either end.
//!
//! # Features
//!
//! - **Injected view**: drawing and input live behind [`SliderView`], so the
//!   state machine runs the same against a real display or [`RecordingView`]
//! - **Seamless wraparound**: a transient clone of the far end slide animates
//!   in, then the real slides are snapped behind it with transitions off
//! - **Re-entrancy guard**: navigation during a wraparound is queued or
//!   dropped per [`BusyPolicy`], never interleaved
//! - **Host-driven time**: deferred steps run on a [`glide_timer`] queue when
//!   the host calls [`Slider::advance`]
//!
//! # Example
//!
//! ```rust
//! use glide_slider::prelude::*;
//! use std::time::Duration;
//!
//! let mut host = RecordingHost::new().with_container("#gallery", 4);
//! let config = SliderConfig::new()
//!     .with_autoplay(true)
//!     .with_duration(Duration::from_millis(1000));
//!
//! let mut slider = Slider::mount(&mut host, "#gallery", config)?;
//! slider.advance(Duration::from_millis(2000));
//! assert_eq!(slider.current(), 2);
//!
//! slider.handle_event(SliderEvent::IndicatorPressed(0))?;
//! assert_eq!(slider.view().active_indicators(), vec![0]);
//! # Ok::<(), SliderError>(())
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod headless;
mod indicators;
pub mod slider;
pub mod transform;
pub mod transition;
pub mod view;


pub use config::{BusyPolicy, SliderConfig};
pub use error::{Result, SliderError};
pub use event::SliderEvent;
pub use headless::{RecordingHost, RecordingView, ViewOp};
pub use slider::Slider;
pub use transform::{Direction, Motion, SlideTarget, SlideTransform};
pub use transition::{NavRequest, Navigation, TransitionState, Wrap, WrapPhase};
pub use view::{CloneHandle, SliderView, ViewHost};

/// Common imports for hosts embedding a slider
pub mod prelude {
    pub use crate::config::{BusyPolicy, SliderConfig};
    pub use crate::error::{Result, SliderError};
    pub use crate::event::SliderEvent;
    pub use crate::headless::{RecordingHost, RecordingView};
    pub use crate::slider::Slider;
    pub use crate::transform::{Motion, SlideTarget, SlideTransform};
    pub use crate::transition::{Navigation, WrapPhase};
    pub use crate::view::{CloneHandle, SliderView, ViewHost};
}
