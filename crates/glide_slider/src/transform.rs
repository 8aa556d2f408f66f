//! Slide positions and the resting layout

use crate::view::CloneHandle;

/// Horizontal position of a slide relative to the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideTransform {
    /// Fully out of view on the left (`translateX(-100%)`)
    Leading,
    /// Visible and centered (`translateX(0)`)
    Center,
    /// Fully out of view on the right (`translateX(100%)`)
    Trailing,
}

impl SlideTransform {
    /// Where slide `index` rests while `current` is shown
    ///
    /// Earlier slides wait on the leading side and later ones on the trailing
    /// side, so every neighbour enters from the side it is ordered on.
    pub fn resting(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => SlideTransform::Leading,
            std::cmp::Ordering::Equal => SlideTransform::Center,
            std::cmp::Ordering::Greater => SlideTransform::Trailing,
        }
    }

    pub fn is_visible(self) -> bool {
        self == SlideTransform::Center
    }
}

/// Whether a transform change plays the stylesheet transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Motion {
    #[default]
    Animated,
    /// Apply at once, bypassing the transition for this change only
    Instant,
}

/// Which surface a transform applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideTarget {
    /// A real slide by index
    Slide(usize),
    /// A transient wraparound clone
    Clone(CloneHandle),
}

/// Direction of travel through the slide sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Side the outgoing slide leaves toward
    pub fn exit(self) -> SlideTransform {
        match self {
            Direction::Forward => SlideTransform::Leading,
            Direction::Backward => SlideTransform::Trailing,
        }
    }

    /// Side the incoming slide enters from
    pub fn entry(self) -> SlideTransform {
        match self {
            Direction::Forward => SlideTransform::Trailing,
            Direction::Backward => SlideTransform::Leading,
        }
    }
}
