use fullpage::{PageGeometry, ScrollRequest, StripGeometry, StripStyle};

/// The page elements a [`crate::Page`] drives.
///
/// A DOM host implements this over the scroll container, the section elements, the side-menu
/// links, the slider and its strip. Geometry reads come from the two supertraits; every method
/// here is a mutation. Implementations should treat missing elements as no-ops.
pub trait Surface<K>: PageGeometry<K> + StripGeometry {
    /// Toggles the active marker on the navigation link at `link` (menu order).
    fn set_link_active(&mut self, link: usize, active: bool);

    /// Toggles the navigation menu's dark style.
    fn set_menu_dark(&mut self, dark: bool);

    /// Scrolls the section container (e.g. `scrollTo({ top, behavior: "smooth" })`).
    fn scroll_container_to(&mut self, request: ScrollRequest);

    /// Appends `copies` full copies of the original slides to the strip, in order.
    fn append_slide_copies(&mut self, copies: usize);

    /// Writes the strip's inline transform and transition.
    fn set_strip_style(&mut self, style: StripStyle);

    /// Toggles the slider's dragging indicator.
    fn set_dragging(&mut self, dragging: bool);

    fn capture_pointer(&mut self, pointer_id: i32);

    /// Asks for [`crate::Page::on_animation_frame`] to be called on the next frame.
    fn request_animation_frame(&mut self);

    /// The strip offset currently on screen, when the host can read it back (e.g. by parsing
    /// the computed transform with [`crate::parse_translate_x`]).
    fn rendered_translate_x(&self) -> Option<f64> {
        None
    }
}
