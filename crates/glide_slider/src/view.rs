//! The rendering surface a slider drives
//!
//! The slider never touches a display directly. A host implements
//! [`SliderView`] over whatever actually draws the slides (a DOM container,
//! a retained-mode scene, a terminal) and forwards clicks on the controls it
//! mounted back as [`SliderEvent`](crate::SliderEvent)s.
//!
//! The view owns slide content. The slider only moves surfaces between the
//! three [`SlideTransform`] positions, toggles the transition effect, and asks
//! for transient copies of end slides during a wraparound.

use crate::transform::{Motion, SlideTarget, SlideTransform};

/// Opaque handle to a transient slide copy, issued by the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloneHandle(u64);

impl CloneHandle {
    pub fn from_raw(raw: u64) -> Self {
        CloneHandle(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// A container of slide surfaces plus the controls attached to it
pub trait SliderView {
    /// Number of slide surfaces found in the container
    fn slide_count(&self) -> usize;

    /// Move a surface to `transform`
    fn set_transform(&mut self, target: SlideTarget, transform: SlideTransform, motion: Motion);

    /// Turn the transition effect on or off for every real slide
    fn set_transitions_enabled(&mut self, enabled: bool);

    /// Duplicate slide `source`, positioned at `transform` but not yet shown
    fn create_clone(&mut self, source: usize, transform: SlideTransform) -> CloneHandle;

    /// Attach a clone created by [`create_clone`](Self::create_clone)
    fn insert_clone(&mut self, clone: CloneHandle);

    /// Detach and destroy a clone
    fn remove_clone(&mut self, clone: CloneHandle);

    /// Create the previous/next buttons and `indicators` dots
    fn mount_controls(&mut self, indicators: usize);

    /// Remove everything [`mount_controls`](Self::mount_controls) created
    fn unmount_controls(&mut self) {}

    /// Mark one dot active or inactive
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// Resolves container selectors to views
pub trait ViewHost {
    type View: SliderView;

    fn resolve(&mut self, selector: &str) -> Option<Self::View>;
}
