//! A headless full-page section tracker and looping carousel engine.
//!
//! For host-side glue (a surface abstraction, CSS projection, tweens), see the
//! `fullpage-adapter` crate.
//!
//! The crate covers the two behaviors of a scroll-snapped single-page site:
//!
//! - [`SectionTracker`]: picks the active section by proximity to a probe line and derives the
//!   navigation highlight and the menu's "dark" flag.
//! - [`Carousel`]: an auto-advancing slide strip with pointer dragging, rubber-band overscroll
//!   and resize resync.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - geometry readings through [`PageGeometry`] and [`StripGeometry`]
//! - timer ticks, animation frames, scroll/resize and pointer events
//! - a place to apply the returned [`NavState`], [`ScrollRequest`] and [`Effects`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
pub mod geometry;
mod key;
mod options;
mod section;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::{Carousel, CarouselSnapshot, Effects, PhaseKind, StripGeometry};
pub use key::SectionKey;
pub use options::{CarouselOptions, SectionTrackerOptions};
pub use section::{NavState, PageGeometry, SectionTracker};
pub use types::{
    Bounds, Easing, PointerInput, PointerKind, ScrollBehavior, ScrollRequest, StripStyle,
    Transition,
};
