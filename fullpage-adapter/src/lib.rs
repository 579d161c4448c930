//! Host adapter utilities for the `fullpage` crate.
//!
//! The `fullpage` crate is UI-agnostic and focuses on the math and state machines. This crate
//! provides the pieces a host needs to drive them:
//!
//! - [`Surface`] + [`Page`]: one controller that owns the page elements and turns scroll, resize,
//!   click, pointer, timer and frame events into element mutations
//! - CSS projection and parsing (`translateX(..)`, `transition`, computed `matrix(..)`, `gap`)
//! - Anchor href helpers for side-menu links
//! - [`Tween`] / [`StripAnimator`] for hosts without native CSS transitions
//!
//! This crate is intentionally framework-agnostic (no web-sys/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod css;
mod page;
mod surface;
mod tween;


pub use anchor::{link_targets, parse_anchor_href, section_index_for_href};
pub use css::{
    parse_gap, parse_leading_number, parse_translate_x, strip_style_css, transform_css,
    transition_css,
};
pub use page::Page;
pub use surface::Surface;
pub use tween::{StripAnimator, Tween};
