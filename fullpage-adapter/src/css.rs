//! CSS projection of strip styles, and parsing of computed style values back into numbers.

use alloc::format;
use alloc::string::String;

use fullpage::{StripStyle, Transition};

/// `translateX({x}px)`.
pub fn transform_css(translate_x: f64) -> String {
    format!("translateX({translate_x}px)")
}

/// `transform {secs}s {easing}`, or `none` for an instant jump.
pub fn transition_css(transition: Option<Transition>) -> String {
    match transition {
        Some(t) => format!(
            "transform {}s {}",
            t.duration_ms as f64 / 1000.0,
            t.easing.css_name()
        ),
        None => String::from("none"),
    }
}

/// Both inline style values for a strip write, as `(transform, transition)`.
pub fn strip_style_css(style: StripStyle) -> (String, String) {
    (
        transform_css(style.translate_x),
        transition_css(style.transition),
    )
}

/// Parses the leading number of a CSS value the way `parseFloat` does (`"20px"` -> `20`).
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|(_, c)| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .map_or(value.len(), |(i, _)| i);
    let number = &value[..end];
    (1..=number.len())
        .rev()
        .find_map(|len| number[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Resolves the strip gap from computed `gap` / `column-gap` values; unusable values count as 0.
pub fn parse_gap(gap: &str, column_gap: &str) -> f64 {
    [gap, column_gap]
        .into_iter()
        .find(|v| !v.trim().is_empty())
        .and_then(parse_leading_number)
        .unwrap_or(0.0)
}

fn function_args<'a>(css: &'a str, name: &str) -> Option<&'a str> {
    css.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn nth_arg(args: &str, n: usize, expected: usize) -> Option<f64> {
    if args.split(',').count() != expected {
        return None;
    }
    parse_leading_number(args.split(',').nth(n)?)
}

/// Reads the horizontal offset out of a computed or inline `transform` value.
///
/// Supports `none`, `matrix(a, b, c, d, tx, ty)`, `matrix3d(..16 values..)`, `translateX(..px)`
/// and `translate3d(x, y, z)`. Anything else (or a malformed value) reads as `0`.
pub fn parse_translate_x(css: &str) -> f64 {
    let css = css.trim();
    let parsed = if let Some(args) = function_args(css, "matrix3d") {
        nth_arg(args, 12, 16)
    } else if let Some(args) = function_args(css, "matrix") {
        nth_arg(args, 4, 6)
    } else if let Some(args) = function_args(css, "translateX") {
        parse_leading_number(args)
    } else if let Some(args) = function_args(css, "translate3d") {
        nth_arg(args, 0, 3)
    } else {
        None
    };
    parsed.unwrap_or(0.0)
}
