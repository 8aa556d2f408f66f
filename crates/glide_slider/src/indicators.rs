//! Dot indicators

use crate::view::SliderView;

/// Tracks which dot the view currently shows as active
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorSet {
    len: usize,
    active: Option<usize>,
}

impl IndicatorSet {
    /// A set of `len` dots, none active yet
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Make `index` the only active dot
    pub fn sync<V: SliderView + ?Sized>(&mut self, view: &mut V, index: usize) {
        debug_assert!(index < self.len);
        if let Some(previous) = self.active.filter(|&previous| previous != index) {
            view.set_indicator_active(previous, false);
        }
        view.set_indicator_active(index, true);
        self.active = Some(index);
    }

    /// Forget the active dot after the controls are unmounted
    pub fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{RecordingView, ViewOp};

    #[test]
    fn test_sync_moves_single_active_dot() {
        let mut view = RecordingView::new(4);
        view.mount_controls(4);
        let mut dots = IndicatorSet::new(4);

        dots.sync(&mut view, 0);
        assert_eq!(view.active_indicators(), vec![0]);

        dots.sync(&mut view, 3);
        assert_eq!(view.active_indicators(), vec![3]);
        assert_eq!(dots.active(), Some(3));
    }

    #[test]
    fn test_resync_same_dot_does_not_deactivate() {
        let mut view = RecordingView::new(2);
        view.mount_controls(2);
        let mut dots = IndicatorSet::new(2);
        dots.sync(&mut view, 1);
        view.take_ops();

        dots.sync(&mut view, 1);
        assert_eq!(
            view.ops(),
            &[ViewOp::Indicator {
                index: 1,
                active: true
            }]
        );
        assert_eq!(view.active_indicators(), vec![1]);
    }
}
