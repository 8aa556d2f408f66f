//! Headless view that records every call
//!
//! [`RecordingView`] keeps the visual state a real view would show (slide
//! positions, live clones, active dots) and an ordered log of operations.
//! Tests and display-less hosts drive a slider through it.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, KeyData, SlotMap};

use crate::transform::{Motion, SlideTarget, SlideTransform};
use crate::view::{CloneHandle, SliderView, ViewHost};

new_key_type! {
    struct CloneKey;
}

fn key_of(handle: CloneHandle) -> CloneKey {
    KeyData::from_ffi(handle.to_raw()).into()
}

/// One recorded view call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewOp {
    Transform {
        target: SlideTarget,
        transform: SlideTransform,
        motion: Motion,
    },
    Transitions(bool),
    CreateClone {
        clone: CloneHandle,
        source: usize,
        transform: SlideTransform,
    },
    InsertClone(CloneHandle),
    RemoveClone(CloneHandle),
    MountControls(usize),
    UnmountControls,
    Indicator {
        index: usize,
        active: bool,
    },
}

/// A transient clone as the view sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloneNode {
    pub source: usize,
    pub transform: SlideTransform,
    /// Whether the clone has been attached to the container
    pub inserted: bool,
}

/// In-memory [`SliderView`]
#[derive(Debug)]
pub struct RecordingView {
    slides: Vec<SlideTransform>,
    clones: SlotMap<CloneKey, CloneNode>,
    indicators: Vec<bool>,
    controls_mounted: bool,
    transitions_enabled: bool,
    ops: Vec<ViewOp>,
}

impl RecordingView {
    /// A container with `slides` surfaces, all unpositioned at center
    pub fn new(slides: usize) -> Self {
        Self {
            slides: vec![SlideTransform::Center; slides],
            clones: SlotMap::with_key(),
            indicators: Vec::new(),
            controls_mounted: false,
            transitions_enabled: true,
            ops: Vec::new(),
        }
    }

    pub fn transform(&self, index: usize) -> Option<SlideTransform> {
        self.slides.get(index).copied()
    }

    pub fn transforms(&self) -> &[SlideTransform] {
        &self.slides
    }

    /// Indices of real slides currently centered
    pub fn centered(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, transform)| transform.is_visible())
            .map(|(index, _)| index)
            .collect()
    }

    /// Live clones, inserted or not
    pub fn clone_count(&self) -> usize {
        self.clones.len()
    }

    pub fn clone_node(&self, clone: CloneHandle) -> Option<CloneNode> {
        self.clones.get(key_of(clone)).copied()
    }

    /// Indices of dots currently active
    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn controls_mounted(&self) -> bool {
        self.controls_mounted
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    pub fn ops(&self) -> &[ViewOp] {
        &self.ops
    }

    /// Take the log, leaving it empty
    pub fn take_ops(&mut self) -> Vec<ViewOp> {
        std::mem::take(&mut self.ops)
    }
}

impl SliderView for RecordingView {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_transform(&mut self, target: SlideTarget, transform: SlideTransform, motion: Motion) {
        match target {
            SlideTarget::Slide(index) => {
                if let Some(slot) = self.slides.get_mut(index) {
                    *slot = transform;
                }
            }
            SlideTarget::Clone(clone) => {
                if let Some(node) = self.clones.get_mut(key_of(clone)) {
                    node.transform = transform;
                }
            }
        }
        self.ops.push(ViewOp::Transform {
            target,
            transform,
            motion,
        });
    }

    fn set_transitions_enabled(&mut self, enabled: bool) {
        self.transitions_enabled = enabled;
        self.ops.push(ViewOp::Transitions(enabled));
    }

    fn create_clone(&mut self, source: usize, transform: SlideTransform) -> CloneHandle {
        let key = self.clones.insert(CloneNode {
            source,
            transform,
            inserted: false,
        });
        let clone = CloneHandle::from_raw(key.data().as_ffi());
        self.ops.push(ViewOp::CreateClone {
            clone,
            source,
            transform,
        });
        clone
    }

    fn insert_clone(&mut self, clone: CloneHandle) {
        if let Some(node) = self.clones.get_mut(key_of(clone)) {
            node.inserted = true;
        }
        self.ops.push(ViewOp::InsertClone(clone));
    }

    fn remove_clone(&mut self, clone: CloneHandle) {
        self.clones.remove(key_of(clone));
        self.ops.push(ViewOp::RemoveClone(clone));
    }

    fn mount_controls(&mut self, indicators: usize) {
        self.indicators = vec![false; indicators];
        self.controls_mounted = true;
        self.ops.push(ViewOp::MountControls(indicators));
    }

    fn unmount_controls(&mut self) {
        self.indicators.clear();
        self.controls_mounted = false;
        self.ops.push(ViewOp::UnmountControls);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = active;
        }
        self.ops.push(ViewOp::Indicator { index, active });
    }
}

/// Host that resolves selectors to fresh [`RecordingView`]s
#[derive(Debug, Default)]
pub struct RecordingHost {
    containers: FxHashMap<String, usize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container under `selector` holding `slides` surfaces
    pub fn with_container(mut self, selector: impl Into<String>, slides: usize) -> Self {
        self.containers.insert(selector.into(), slides);
        self
    }
}

impl ViewHost for RecordingHost {
    type View = RecordingView;

    fn resolve(&mut self, selector: &str) -> Option<RecordingView> {
        self.containers
            .get(selector)
            .map(|&slides| RecordingView::new(slides))
    }
}
