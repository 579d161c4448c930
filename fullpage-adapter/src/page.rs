use fullpage::{
    Carousel, CarouselOptions, Effects, NavState, PointerInput, SectionKey, SectionTracker,
    SectionTrackerOptions,
};

use crate::Surface;
use crate::anchor::section_index_for_href;

/// A framework-neutral controller that wires a [`Surface`] to a section tracker and an optional
/// carousel.
///
/// The adapter forwards host events:
/// - `on_scroll` / `on_resize` for the scroll container and window
/// - `on_link_click` / `on_anchor_click` for side-menu clicks
/// - `on_pointer_*` for the slider
/// - `tick(now_ms)` from a timer and `on_animation_frame` from the frame callback
///
/// Both subsystems stay independent; each degrades silently when its elements are missing.
#[derive(Clone, Debug)]
pub struct Page<K, S> {
    surface: S,
    tracker: SectionTracker<K>,
    carousel: Option<Carousel>,
}

impl<K: SectionKey, S: Surface<K>> Page<K, S> {
    /// Attaches both behaviors to `surface`.
    ///
    /// Runs the initial active-section pass, clones the slides and arms auto-advance. A carousel
    /// without slides is not created.
    pub fn attach(
        surface: S,
        sections: SectionTrackerOptions<K>,
        carousel: Option<CarouselOptions>,
        now_ms: u64,
    ) -> Self {
        let mut page = Self {
            surface,
            tracker: SectionTracker::new(sections),
            carousel: None,
        };
        if page.on_scroll().is_none() {
            adebug!("Page::attach: section tracking inactive");
        }

        if let Some(options) = carousel.filter(|o| o.original_count > 0) {
            let mut carousel = Carousel::new(options);
            page.surface.append_slide_copies(carousel.clone_copies());
            carousel.start_auto(now_ms);
            adebug!(
                slides = carousel.slide_count(),
                copies = carousel.clone_copies(),
                "Page::attach: carousel attached"
            );
            page.carousel = Some(carousel);
        }
        page
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn tracker(&self) -> &SectionTracker<K> {
        &self.tracker
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.carousel.as_mut()
    }

    /// Recomputes the active section and projects it onto the menu.
    pub fn on_scroll(&mut self) -> Option<NavState> {
        let nav = self.tracker.refresh(&self.surface)?;
        for link in 0..self.tracker.options().links.len() {
            self.surface
                .set_link_active(link, nav.active_link == Some(link));
        }
        self.surface.set_menu_dark(nav.dark);
        Some(nav)
    }

    pub fn on_resize(&mut self) {
        self.on_scroll();
        if let Some(carousel) = &mut self.carousel {
            let fx = carousel.on_resize(&self.surface);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }

    /// Smooth-scrolls the container to the target of the link at `link`.
    ///
    /// Returns `false` (and does nothing) when the container or the target is missing.
    pub fn on_link_click(&mut self, link: usize) -> bool {
        let Some(request) = self.tracker.scroll_request_for_link(link, &self.surface) else {
            atrace!(link, "link click ignored: missing container or target");
            return false;
        };
        self.surface.scroll_container_to(request);
        true
    }

    pub fn tick(&mut self, now_ms: u64) {
        if let Some(carousel) = &mut self.carousel {
            let fx = carousel.tick(now_ms, &self.surface);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }

    pub fn on_animation_frame(&mut self) {
        if let Some(carousel) = &mut self.carousel {
            let fx = carousel.on_animation_frame(&self.surface);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }

    pub fn on_pointer_down(&mut self, input: PointerInput) {
        if let Some(carousel) = &mut self.carousel {
            let rendered = self.surface.rendered_translate_x();
            let fx = carousel.on_pointer_down(input, rendered);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }

    pub fn on_pointer_move(&mut self, input: PointerInput) {
        if let Some(carousel) = &mut self.carousel {
            let fx = carousel.on_pointer_move(input, &self.surface);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }

    /// Handles `pointerup`, `pointercancel` and `lostpointercapture`.
    pub fn on_pointer_release(&mut self, input: PointerInput, now_ms: u64) {
        if let Some(carousel) = &mut self.carousel {
            let fx = carousel.on_pointer_release(input, now_ms, &self.surface);
            apply_effects::<K, S>(&mut self.surface, fx);
        }
    }
}

impl<K: SectionKey + AsRef<str>, S: Surface<K>> Page<K, S> {
    /// Smooth-scrolls to the section an anchor href (`"#s3"`) points at.
    pub fn on_anchor_click(&mut self, href: &str) -> bool {
        let sections = &self.tracker.options().sections;
        let Some(index) = section_index_for_href(sections, href) else {
            atrace!(href, "anchor click ignored: no such section");
            return false;
        };
        let Some(request) = self.tracker.scroll_request_for(&sections[index], &self.surface)
        else {
            return false;
        };
        self.surface.scroll_container_to(request);
        true
    }
}

fn apply_effects<K, S: Surface<K>>(surface: &mut S, fx: Effects) {
    if let Some(style) = fx.paint {
        surface.set_strip_style(style);
    }
    if let Some(dragging) = fx.dragging {
        surface.set_dragging(dragging);
    }
    if let Some(pointer_id) = fx.capture_pointer {
        surface.capture_pointer(pointer_id);
    }
    if fx.request_frame {
        surface.request_animation_frame();
    }
}
