//! Input from the slider's controls

/// A press on one of the controls mounted by [`SliderView::mount_controls`]
///
/// [`SliderView::mount_controls`]: crate::SliderView::mount_controls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderEvent {
    /// The previous button
    PrevPressed,
    /// The next button
    NextPressed,
    /// The dot for a slide index
    IndicatorPressed(usize),
}
