use alloc::vec::Vec;

use crate::{Easing, Transition};

/// Configuration for [`crate::SectionTracker`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTrackerOptions<K> {
    /// Section ids in document order.
    pub sections: Vec<K>,
    /// One target id per navigation link, in menu order.
    ///
    /// A link whose target matches no section is kept (it simply never becomes active).
    pub links: Vec<K>,
    /// Sections that switch the navigation menu into its "dark" style.
    pub dark_sections: Vec<K>,
    /// Position of the probe line as a fraction of the container height.
    pub probe_ratio: f64,
}

impl<K> SectionTrackerOptions<K> {
    pub fn new(sections: impl IntoIterator<Item = K>, links: impl IntoIterator<Item = K>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            links: links.into_iter().collect(),
            dark_sections: Vec::new(),
            probe_ratio: 0.6,
        }
    }

    pub fn with_dark_sections(mut self, dark_sections: impl IntoIterator<Item = K>) -> Self {
        self.dark_sections = dark_sections.into_iter().collect();
        self
    }

    pub fn with_probe_ratio(mut self, probe_ratio: f64) -> Self {
        self.probe_ratio = probe_ratio;
        self
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Defaults match the page the engine was built for: a 4s auto-advance with a 2.4s eased slide,
/// and a 0.6s snap-back after dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Number of slides in the markup before cloning.
    pub original_count: usize,
    /// How many full copies of the original set are appended to the strip.
    pub clone_copies: usize,
    pub interval_ms: u64,
    pub advance_transition: Transition,
    pub snap_transition: Transition,
    /// Delay after a drag release before the slow transition and auto-advance resume.
    pub settle_ms: u64,
    /// Raw horizontal travel (px) before a press is treated as a drag.
    pub drag_threshold_px: f64,
    /// Multiplier applied to the raw pointer delta while dragging.
    pub drag_sensitivity: f64,
    /// Damping factor for overscroll past either end of the strip.
    pub rubber_band: f64,
    /// Ignore mouse presses with any button other than the primary one.
    pub primary_button_only: bool,
}

impl CarouselOptions {
    pub fn new(original_count: usize) -> Self {
        Self {
            original_count,
            clone_copies: 10,
            interval_ms: 4000,
            advance_transition: Transition::new(2400, Easing::Ease),
            snap_transition: Transition::new(600, Easing::Ease),
            settle_ms: 650,
            drag_threshold_px: 2.0,
            drag_sensitivity: 2.0,
            rubber_band: 0.5,
            primary_button_only: true,
        }
    }

    /// Total slides on the strip after cloning.
    pub fn slide_count(&self) -> usize {
        self.original_count
            .saturating_mul(self.clone_copies.saturating_add(1))
    }

    pub fn with_clone_copies(mut self, clone_copies: usize) -> Self {
        self.clone_copies = clone_copies;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_advance_transition(mut self, transition: Transition) -> Self {
        self.advance_transition = transition;
        self
    }

    pub fn with_snap_transition(mut self, transition: Transition) -> Self {
        self.snap_transition = transition;
        self
    }

    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn with_drag_threshold_px(mut self, threshold: f64) -> Self {
        self.drag_threshold_px = threshold;
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_rubber_band(mut self, factor: f64) -> Self {
        self.rubber_band = factor;
        self
    }

    pub fn with_primary_button_only(mut self, primary_button_only: bool) -> Self {
        self.primary_button_only = primary_button_only;
        self
    }
}
