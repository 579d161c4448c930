//! Pure geometry helpers shared by the section tracker and the carousel.
//!
//! Everything here is recomputed from fresh readings on demand; nothing is cached across
//! layout changes.

use crate::Bounds;

pub(crate) fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

// Round half away from zero for non-negative inputs (`f64::round` needs `std`).
fn round_non_negative(v: f64) -> f64 {
    let whole = v as u64 as f64;
    if v - whole >= 0.5 { whole + 1.0 } else { whole }
}

/// The vertical probe line used to pick the active section.
///
/// `ratio = 0.6` sits a little below the container's center, so the next section wins slightly
/// before it has fully snapped into place.
pub fn probe_line(container: Bounds, ratio: f64) -> f64 {
    container.top + container.height() * ratio
}

/// Returns the position of the section whose center is closest to `probe`.
///
/// Sections without usable bounds are skipped. On ties the first one wins.
pub fn nearest_to_probe(
    probe: f64,
    sections: impl IntoIterator<Item = Option<Bounds>>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, bounds) in sections.into_iter().enumerate() {
        let Some(bounds) = bounds.filter(Bounds::is_finite) else {
            continue;
        };
        let dist = abs(bounds.center() - probe);
        match best {
            Some((_, d)) if dist >= d => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

/// The container scroll offset that brings `target` to the container's top edge.
pub fn scroll_offset_for(container: Bounds, scroll_top: f64, target: Bounds) -> f64 {
    scroll_top + (target.top - container.top)
}

/// Sanitizes a gap reading (CSS `gap`/`column-gap`); non-finite values count as `0`.
pub fn sanitize_gap(gap: f64) -> f64 {
    if gap.is_finite() { gap } else { 0.0 }
}

/// Distance between two consecutive slide starts.
///
/// Returns `0.0` when there is no slide to measure (or the reading is unusable).
pub fn step(slide_width: Option<f64>, gap: f64) -> f64 {
    let Some(width) = slide_width.filter(|w| w.is_finite()) else {
        return 0.0;
    };
    let step = width + sanitize_gap(gap);
    if step > 0.0 { step } else { 0.0 }
}

/// The most negative strip offset that still keeps the viewport filled. Never positive.
pub fn min_translate_x(scroll_width: f64, visible_width: f64) -> f64 {
    let max_move = scroll_width - visible_width;
    if max_move.is_finite() && max_move > 0.0 {
        -max_move
    } else {
        0.0
    }
}

/// Resting offset for a logical slide index.
pub fn offset_for_index(index: usize, step: f64) -> f64 {
    if step <= 0.0 {
        return 0.0;
    }
    -(step * index as f64)
}

/// Logical slide index for a resting offset: `round(|offset| / step)`.
pub fn index_for_offset(offset: f64, step: f64) -> Option<usize> {
    if step.is_nan() || step <= 0.0 || !offset.is_finite() {
        return None;
    }
    Some(round_non_negative(abs(offset) / step) as usize)
}

/// How many whole `set_width` spans lie between `offset` and the strip start.
///
/// Shifting a non-positive `offset` right by that many spans keeps it non-positive.
pub fn whole_sets_behind(offset: f64, set_width: f64) -> usize {
    if set_width.is_nan() || set_width <= 0.0 || !offset.is_finite() || offset >= 0.0 {
        return 0;
    }
    (-offset / set_width) as usize
}

/// Damps overscroll past either end of `[min_x, 0]` by `factor`.
///
/// Past the right end the whole candidate is damped; past the left end only the excess beyond
/// `min_x` is.
pub fn rubber_band(candidate: f64, min_x: f64, factor: f64) -> f64 {
    if candidate > 0.0 {
        candidate * factor
    } else if candidate < min_x {
        min_x + (candidate - min_x) * factor
    } else {
        candidate
    }
}

/// Clamps an offset into `[min_x, 0]`.
pub fn clamp_translate(offset: f64, min_x: f64) -> f64 {
    let min_x = min_x.min(0.0);
    if !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(min_x, 0.0)
}
