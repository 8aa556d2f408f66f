//! The slider widget

use std::time::Duration;

use glide_timer::{TaskId, TimerQueue};
use smallvec::SmallVec;

use crate::config::{BusyPolicy, SliderConfig};
use crate::error::{Result, SliderError};
use crate::event::SliderEvent;
use crate::indicators::IndicatorSet;
use crate::transform::{Direction, Motion, SlideTarget, SlideTransform};
use crate::transition::{NavRequest, Navigation, SliderTask, TransitionState, Wrap, WrapPhase};
use crate::view::{SliderView, ViewHost};

/// Carousel over a fixed sequence of slides
///
/// Index and indicator state change synchronously inside each navigation
/// call. Visual work that has to wait (inserting a wraparound clone, snapping
/// slides back, re-enabling transitions, autoplay ticks) is queued on an
/// internal timer and runs when the host calls [`advance`](Self::advance).
///
/// ```rust
/// use glide_slider::{RecordingView, Slider, SliderConfig};
/// use std::time::Duration;
///
/// let mut slider = Slider::new(RecordingView::new(3), SliderConfig::default())?;
/// slider.next();
/// assert_eq!(slider.current(), 1);
///
/// slider.prev();
/// slider.prev(); // wraps to the last slide
/// assert_eq!(slider.current(), 2);
///
/// slider.advance(Duration::from_secs(1));
/// assert!(!slider.is_transitioning());
/// assert_eq!(slider.view().clone_count(), 0);
/// # Ok::<(), glide_slider::SliderError>(())
/// ```
pub struct Slider<V: SliderView> {
    view: V,
    config: SliderConfig,
    len: usize,
    current: usize,
    indicators: IndicatorSet,
    autoplay: Option<TaskId>,
    transition: TransitionState,
    pending: SmallVec<[NavRequest; 2]>,
    timers: TimerQueue<SliderTask>,
}

impl<V: SliderView> std::fmt::Debug for Slider<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("len", &self.len)
            .field("current", &self.current)
            .field("active_indicator", &self.indicators.active())
            .field("autoplay", &self.autoplay.is_some())
            .field("transition", &self.transition)
            .field("pending", &self.pending)
            .field("now", &self.timers.now())
            .finish()
    }
}

impl<V: SliderView> Slider<V> {
    /// Take over `view`, lay its slides out and mount the controls
    pub fn new(mut view: V, config: SliderConfig) -> Result<Self> {
        config.validate()?;

        let len = view.slide_count();
        if len == 0 {
            return Err(SliderError::EmptyContainer);
        }

        for index in 0..len {
            view.set_transform(
                SlideTarget::Slide(index),
                SlideTransform::resting(index, 0),
                Motion::Instant,
            );
        }
        view.mount_controls(len);

        let mut slider = Self {
            view,
            config,
            len,
            current: 0,
            indicators: IndicatorSet::new(len),
            autoplay: None,
            transition: TransitionState::Idle,
            pending: SmallVec::new(),
            timers: TimerQueue::new(),
        };
        slider.sync_indicators();

        if slider.config.autoplay {
            slider.start_autoplay();
        }

        tracing::debug!(
            slides = len,
            autoplay = slider.config.autoplay,
            "slider mounted"
        );
        Ok(slider)
    }

    /// Resolve `selector` through `host` and build a slider over it
    pub fn mount<H>(host: &mut H, selector: &str, config: SliderConfig) -> Result<Self>
    where
        H: ViewHost<View = V>,
    {
        let view = host
            .resolve(selector)
            .ok_or_else(|| SliderError::ContainerNotFound(selector.to_string()))?;
        Self::new(view, config)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Index of the visible slide, or the slide a wraparound is heading to
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Whether a wraparound is in flight
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_busy()
    }

    pub fn phase(&self) -> WrapPhase {
        self.transition.phase()
    }

    /// Navigation requests held until the current wrap settles
    pub fn pending(&self) -> &[NavRequest] {
        &self.pending
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance one slide, wrapping to the first after the last
    pub fn next(&mut self) -> Navigation {
        self.request(NavRequest::Next)
    }

    /// Go back one slide, wrapping to the last before the first
    pub fn prev(&mut self) -> Navigation {
        self.request(NavRequest::Prev)
    }

    /// Jump straight to `target`
    ///
    /// A higher target exits the current slide the way [`next`](Self::next)
    /// does, anything else the way [`prev`](Self::prev) does. Jumps never wrap.
    pub fn go_to(&mut self, target: usize) -> Result<Navigation> {
        if target >= self.len {
            return Err(SliderError::IndexOutOfRange {
                index: target,
                len: self.len,
            });
        }
        Ok(self.request(NavRequest::GoTo(target)))
    }

    /// Route a control press to the matching navigation call
    pub fn handle_event(&mut self, event: SliderEvent) -> Result<Navigation> {
        match event {
            SliderEvent::PrevPressed => Ok(self.prev()),
            SliderEvent::NextPressed => Ok(self.next()),
            SliderEvent::IndicatorPressed(index) => self.go_to(index),
        }
    }

    fn request(&mut self, request: NavRequest) -> Navigation {
        if self.transition.is_busy() {
            return self.defer(request);
        }
        self.apply(request)
    }

    fn defer(&mut self, request: NavRequest) -> Navigation {
        match self.config.busy_policy {
            BusyPolicy::Queue if self.pending.len() < self.config.queue_limit => {
                self.pending.push(request);
                tracing::debug!(?request, "navigation queued behind wraparound");
                Navigation::Queued
            }
            BusyPolicy::Queue => {
                tracing::warn!(?request, "navigation queue full, dropping request");
                Navigation::Dropped
            }
            BusyPolicy::Ignore => {
                tracing::debug!(?request, "navigation ignored during wraparound");
                Navigation::Dropped
            }
        }
    }

    fn apply(&mut self, request: NavRequest) -> Navigation {
        match request {
            NavRequest::Next => self.step(Direction::Forward),
            NavRequest::Prev => self.step(Direction::Backward),
            NavRequest::GoTo(target) => self.jump(target),
        }
    }

    fn step(&mut self, direction: Direction) -> Navigation {
        let from = self.current;
        self.view.set_transform(
            SlideTarget::Slide(from),
            direction.exit(),
            Motion::Animated,
        );

        let to = match direction {
            Direction::Forward if from + 1 < self.len => from + 1,
            Direction::Backward if from > 0 => from - 1,
            _ => return self.begin_wrap(direction, from),
        };

        self.current = to;
        self.view.set_transform(
            SlideTarget::Slide(to),
            SlideTransform::Center,
            Motion::Animated,
        );
        self.sync_indicators();

        tracing::debug!(from, to, "slide moved");
        Navigation::Moved { from, to }
    }

    fn jump(&mut self, target: usize) -> Navigation {
        let from = self.current;
        if target == from {
            self.sync_indicators();
            return Navigation::Unchanged;
        }

        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.view.set_transform(
            SlideTarget::Slide(from),
            direction.exit(),
            Motion::Animated,
        );

        // Slides jumped over change sides while out of view
        let skipped = if target > from {
            from + 1..target
        } else {
            target + 1..from
        };
        for index in skipped {
            self.view.set_transform(
                SlideTarget::Slide(index),
                SlideTransform::resting(index, target),
                Motion::Instant,
            );
        }

        self.current = target;
        self.view.set_transform(
            SlideTarget::Slide(target),
            SlideTransform::Center,
            Motion::Animated,
        );
        self.sync_indicators();

        tracing::debug!(from, to = target, "jumped to slide");
        Navigation::Moved { from, to: target }
    }

    fn sync_indicators(&mut self) {
        self.indicators.sync(&mut self.view, self.current);
    }

    // =========================================================================
    // Wraparound
    // =========================================================================

    fn begin_wrap(&mut self, direction: Direction, from: usize) -> Navigation {
        let to = match direction {
            Direction::Forward => 0,
            Direction::Backward => self.len - 1,
        };

        self.current = to;
        self.sync_indicators();

        let clone = self.view.create_clone(to, direction.entry());
        let step = self.timers.request_frame(SliderTask::InsertClone);
        self.transition = TransitionState::Wrapping(Wrap {
            direction,
            clone,
            phase: WrapPhase::EnteringClone,
            step,
        });

        tracing::debug!(?direction, from, to, "wraparound started");
        Navigation::Wrapped { from, to }
    }

    fn insert_clone(&mut self) {
        let TransitionState::Wrapping(wrap) = &mut self.transition else {
            return;
        };

        self.view.insert_clone(wrap.clone);
        self.view.set_transform(
            SlideTarget::Clone(wrap.clone),
            SlideTransform::Center,
            Motion::Animated,
        );
        wrap.step = self.timers.schedule(self.config.transition, SliderTask::Snap);
    }

    fn snap(&mut self) {
        let TransitionState::Wrapping(wrap) = &mut self.transition else {
            return;
        };

        self.view.set_transitions_enabled(false);
        for index in 0..self.len {
            self.view.set_transform(
                SlideTarget::Slide(index),
                SlideTransform::resting(index, self.current),
                Motion::Instant,
            );
        }
        self.view.remove_clone(wrap.clone);

        wrap.phase = WrapPhase::Snapping;
        wrap.step = self
            .timers
            .schedule(self.config.settle_delay, SliderTask::Settle);

        tracing::debug!(index = self.current, "wraparound snapped");
    }

    fn finish_wrap(&mut self) {
        if !self.transition.is_busy() {
            return;
        }

        self.view.set_transitions_enabled(true);
        self.transition = TransitionState::Idle;
        tracing::debug!(index = self.current, "wraparound settled");

        while !self.transition.is_busy() && !self.pending.is_empty() {
            let request = self.pending.remove(0);
            let outcome = self.apply(request);
            tracing::debug!(?request, ?outcome, "replayed queued navigation");
        }
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Advance every `config.duration` until stopped
    ///
    /// Returns `false` without touching the running timer if autoplay is
    /// already on.
    pub fn start_autoplay(&mut self) -> bool {
        if self.autoplay.is_some() {
            tracing::debug!("autoplay already running");
            return false;
        }

        match self
            .timers
            .schedule_repeating(self.config.duration, SliderTask::Autoplay)
        {
            Ok(task) => {
                self.autoplay = Some(task);
                tracing::debug!(interval = ?self.config.duration, "autoplay started");
                true
            }
            Err(err) => {
                tracing::warn!(%err, "autoplay not started");
                false
            }
        }
    }

    /// Cancel autoplay, returning whether it was running
    pub fn stop_autoplay(&mut self) -> bool {
        let Some(task) = self.autoplay.take() else {
            return false;
        };
        self.timers.cancel(task);
        tracing::debug!("autoplay stopped");
        true
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Elapsed time on the slider's clock
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the next deferred step is due, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Move the clock forward by `elapsed`, running every step that falls due
    ///
    /// Returns the number of steps run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let deadline = self.timers.now() + elapsed;
        let mut fired = 0;

        while let Some(task) = self.timers.pop_due(deadline) {
            match task.payload {
                SliderTask::Autoplay => {
                    let outcome = self.request(NavRequest::Next);
                    tracing::trace!(?outcome, "autoplay tick");
                }
                SliderTask::InsertClone => self.insert_clone(),
                SliderTask::Snap => self.snap(),
                SliderTask::Settle => self.finish_wrap(),
            }
            fired += 1;
        }

        self.timers.advance_clock(deadline);
        fired
    }

    /// Advance exactly as far as needed for any wraparound to settle
    pub fn run_until_settled(&mut self) -> usize {
        let mut fired = 0;
        while self.transition.is_busy() {
            let Some(deadline) = self.timers.next_deadline() else {
                break;
            };
            fired += self.advance(deadline.saturating_sub(self.timers.now()));
        }
        fired
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Stop everything, remove the controls and hand the view back
    ///
    /// A wraparound in flight is cut short: its clone is removed and slides
    /// are snapped to the resting layout for the current index.
    pub fn teardown(mut self) -> V {
        self.stop_autoplay();

        if let TransitionState::Wrapping(wrap) = std::mem::take(&mut self.transition) {
            self.timers.cancel(wrap.step);
            if wrap.phase == WrapPhase::EnteringClone {
                self.view.remove_clone(wrap.clone);
                self.view.set_transitions_enabled(false);
                for index in 0..self.len {
                    self.view.set_transform(
                        SlideTarget::Slide(index),
                        SlideTransform::resting(index, self.current),
                        Motion::Instant,
                    );
                }
            }
            self.view.set_transitions_enabled(true);
        }

        self.pending.clear();
        self.timers.clear();
        self.view.unmount_controls();
        self.indicators.reset();

        tracing::debug!(index = self.current, "slider torn down");
        self.view
    }
}
