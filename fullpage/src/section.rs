use crate::geometry;
use crate::{Bounds, ScrollBehavior, ScrollRequest, SectionKey, SectionTrackerOptions};

/// Geometry of a scrolling page, read on demand.
///
/// Implementations typically forward to `getBoundingClientRect()` / `scrollTop` of the scroll
/// container and the section elements. Returning `None` means "element missing".
pub trait PageGeometry<K> {
    fn container_bounds(&self) -> Option<Bounds>;
    fn scroll_top(&self) -> f64;
    fn section_bounds(&self, id: &K) -> Option<Bounds>;
}

/// The navigation state derived from the active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// Position of the active section in `options.sections`.
    pub active_section: usize,
    /// Position of the link pointing at the active section, if any.
    pub active_link: Option<usize>,
    pub dark: bool,
}

/// Tracks which full-page section is active as the container scrolls.
///
/// The tracker holds no UI objects: call [`SectionTracker::refresh`] on every scroll/resize
/// event (and once at startup) and project the returned [`NavState`] onto the menu.
#[derive(Clone, Debug)]
pub struct SectionTracker<K> {
    options: SectionTrackerOptions<K>,
    nav: Option<NavState>,
}

impl<K: SectionKey> SectionTracker<K> {
    pub fn new(options: SectionTrackerOptions<K>) -> Self {
        fdebug!(
            sections = options.sections.len(),
            links = options.links.len(),
            probe_ratio = options.probe_ratio,
            "SectionTracker::new"
        );
        Self { options, nav: None }
    }

    pub fn options(&self) -> &SectionTrackerOptions<K> {
        &self.options
    }

    /// The last computed navigation state (`None` until the first successful refresh).
    pub fn nav_state(&self) -> Option<NavState> {
        self.nav
    }

    pub fn active_section(&self) -> Option<&K> {
        let nav = self.nav?;
        self.options.sections.get(nav.active_section)
    }

    pub fn is_dark_section(&self, id: &K) -> bool {
        self.options.dark_sections.iter().any(|d| d == id)
    }

    pub fn link_for_section(&self, id: &K) -> Option<usize> {
        self.options.links.iter().position(|l| l == id)
    }

    /// Recomputes the active section from fresh geometry.
    ///
    /// Returns `None` (and leaves the previous state untouched) when there is no container, no
    /// measurable section or no navigation link to drive.
    pub fn refresh(&mut self, geometry: &impl PageGeometry<K>) -> Option<NavState> {
        if self.options.sections.is_empty() || self.options.links.is_empty() {
            return None;
        }
        let Some(container) = geometry.container_bounds() else {
            ftrace!("SectionTracker::refresh: no container");
            return None;
        };
        if !container.is_finite() {
            fwarn!("SectionTracker::refresh: non-finite container bounds");
            return None;
        }

        let probe = geometry::probe_line(container, self.options.probe_ratio);
        if !probe.is_finite() {
            fwarn!(
                probe_ratio = self.options.probe_ratio,
                "SectionTracker::refresh: non-finite probe"
            );
            return None;
        }
        let Some(active_section) = geometry::nearest_to_probe(
            probe,
            self.options
                .sections
                .iter()
                .map(|id| geometry.section_bounds(id)),
        ) else {
            ftrace!("SectionTracker::refresh: no measurable section");
            return None;
        };

        let id = &self.options.sections[active_section];
        let nav = NavState {
            active_section,
            active_link: self.link_for_section(id),
            dark: self.is_dark_section(id),
        };

        if self.nav.map(|n| n.active_section) != Some(active_section) {
            fdebug!(active = ?id, probe, dark = nav.dark, "active section changed");
        }
        self.nav = Some(nav);
        Some(nav)
    }

    /// Computes the smooth scroll that brings `target` to the top of the container.
    ///
    /// Returns `None` when either the container or the target cannot be measured.
    pub fn scroll_request_for(
        &self,
        target: &K,
        geometry: &impl PageGeometry<K>,
    ) -> Option<ScrollRequest> {
        let container = geometry.container_bounds()?;
        let target = geometry.section_bounds(target)?;
        let top = geometry::scroll_offset_for(container, geometry.scroll_top(), target);
        if !top.is_finite() {
            fwarn!(top, "scroll_request_for: non-finite scroll target");
            return None;
        }
        Some(ScrollRequest {
            top,
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Same as [`SectionTracker::scroll_request_for`], addressed by link position.
    pub fn scroll_request_for_link(
        &self,
        link: usize,
        geometry: &impl PageGeometry<K>,
    ) -> Option<ScrollRequest> {
        let target = self.options.links.get(link)?;
        self.scroll_request_for(target, geometry)
    }
}
