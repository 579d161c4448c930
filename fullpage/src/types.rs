/// A vertical extent in screen space (e.g. a `getBoundingClientRect()` reading).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn from_top_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }

    /// The CSS timing-function keyword for this easing.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::SmoothStep => "cubic-bezier(0.5, 0, 0.5, 1)",
            Self::EaseInOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
        }
    }
}

// x(s) is monotonic for control points inside [0, 1], so bisection converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    fn axis(s: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..24 {
        let mid = (lo + hi) / 2.0;
        if axis(mid, x1, x2) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    axis((lo + hi) / 2.0, y1, y2)
}

/// A transform transition applied to the slide strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }
}

/// The rendered projection of the carousel: what an adapter writes to the strip element.
///
/// `transition == None` means "jump instantly" (CSS `transition: none`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripStyle {
    pub translate_x: f64,
    pub transition: Option<Transition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A programmatic scroll of the section container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// A pointer event as reported by the host (`pointerdown`/`pointermove`/`pointerup`...).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    pub pointer_id: i32,
    pub kind: PointerKind,
    /// Pressed button (`0` is the primary button).
    pub button: i16,
    pub client_x: f64,
}

impl PointerInput {
    pub fn new(pointer_id: i32, kind: PointerKind, client_x: f64) -> Self {
        Self {
            pointer_id,
            kind,
            button: 0,
            client_x,
        }
    }

    pub fn mouse(client_x: f64) -> Self {
        Self::new(1, PointerKind::Mouse, client_x)
    }

    pub fn touch(pointer_id: i32, client_x: f64) -> Self {
        Self::new(pointer_id, PointerKind::Touch, client_x)
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }
}
