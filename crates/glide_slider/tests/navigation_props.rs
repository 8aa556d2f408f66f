//! Property tests for slider invariants.
//!
//! Uses proptest to verify:
//! 1. Plain steps — next/prev away from the ends move the index by exactly one
//! 2. Dot sync — the single active dot matches the index after every call
//! 3. Rest state — after settling, one slide is centered and no clone remains
//! 4. Jumps — go_to lands on any valid target and never wraps

use glide_slider::prelude::*;
use proptest::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
enum Action {
    Next,
    Prev,
    GoTo(usize),
    Wait(u64),
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Next),
        3 => Just(Action::Prev),
        2 => (0usize..12).prop_map(Action::GoTo),
        2 => (0u64..700).prop_map(Action::Wait),
    ]
}

fn slider(slides: usize) -> Slider<RecordingView> {
    Slider::new(RecordingView::new(slides), SliderConfig::default()).unwrap()
}

fn perform(slider: &mut Slider<RecordingView>, action: Action) -> Option<Navigation> {
    match action {
        Action::Next => Some(slider.next()),
        Action::Prev => Some(slider.prev()),
        Action::GoTo(target) => slider.go_to(target).ok(),
        Action::Wait(ms) => {
            slider.advance(Duration::from_millis(ms));
            None
        }
    }
}

// ── 1. Plain Steps ───────────────────────────────────────────────────

proptest! {
    /// Away from the ends, each step moves the index by exactly one.
    #[test]
    fn plain_steps_move_by_one(slides in 3usize..10, forward in proptest::collection::vec(any::<bool>(), 1..40)) {
        let mut slider = slider(slides);
        slider.go_to(slides / 2).unwrap();

        for step_forward in forward {
            let before = slider.current();
            let at_edge = if step_forward { before + 1 == slides } else { before == 0 };
            if at_edge {
                continue;
            }

            let outcome = if step_forward { slider.next() } else { slider.prev() };
            let after = slider.current();

            prop_assert!(matches!(outcome, Navigation::Moved { .. }), "expected Navigation::Moved");
            prop_assert!(after < slides);
            prop_assert_eq!(after.abs_diff(before), 1);
        }
    }
}

// ── 2. Dot Sync ──────────────────────────────────────────────────────

proptest! {
    /// Exactly one dot is active and it matches the index, even mid-wrap.
    #[test]
    fn active_dot_matches_index(slides in 1usize..8, actions in proptest::collection::vec(arb_action(), 1..60)) {
        let mut slider = slider(slides);

        for action in actions {
            perform(&mut slider, action);
            prop_assert_eq!(slider.view().active_indicators(), vec![slider.current()]);
        }
    }
}

// ── 3. Rest State ────────────────────────────────────────────────────

proptest! {
    /// Once settled, the layout is the resting layout with no clones left.
    #[test]
    fn settles_to_resting_layout(slides in 1usize..8, actions in proptest::collection::vec(arb_action(), 1..60)) {
        let mut slider = slider(slides);

        for action in actions {
            perform(&mut slider, action);
        }
        slider.run_until_settled();

        let view = slider.view();
        let current = slider.current();
        prop_assert!(!slider.is_transitioning());
        prop_assert_eq!(view.clone_count(), 0);
        prop_assert!(view.transitions_enabled());
        prop_assert_eq!(view.centered(), vec![current]);
        for (index, transform) in view.transforms().iter().enumerate() {
            prop_assert_eq!(*transform, SlideTransform::resting(index, current));
        }
    }
}

// ── 4. Jumps ─────────────────────────────────────────────────────────

proptest! {
    /// go_to reaches any valid target from any start without a clone.
    #[test]
    fn go_to_lands_on_target(slides in 1usize..10, start in 0usize..10, target in 0usize..10) {
        let mut slider = slider(slides);
        let start = start % slides;
        slider.go_to(start).unwrap();

        match slider.go_to(target) {
            Ok(outcome) => {
                prop_assert!(target < slides);
                prop_assert!(!matches!(outcome, Navigation::Wrapped { .. }), "unexpected Navigation::Wrapped");
                prop_assert_eq!(slider.current(), target);
                prop_assert_eq!(slider.view().active_indicators(), vec![target]);
                prop_assert_eq!(slider.view().clone_count(), 0);
            }
            Err(err) => {
                prop_assert!(target >= slides);
                prop_assert_eq!(err, SliderError::IndexOutOfRange { index: target, len: slides });
                prop_assert_eq!(slider.current(), start);
            }
        }
    }
}
