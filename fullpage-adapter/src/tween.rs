use fullpage::{Easing, StripStyle};

/// A small tween helper for hosts that animate offsets themselves (no CSS transitions).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t) as f64;
        self.from + (self.to - self.from) * eased
    }
}

/// Plays strip style writes the way a browser applies `transform` + `transition`.
///
/// A write without a transition jumps; a write with one animates from wherever the strip is
/// currently displayed. Feed [`StripAnimator::position`] back as the rendered offset on
/// pointer-down so a grab freezes the strip where it is seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StripAnimator {
    resting: f64,
    tween: Option<Tween>,
}

impl StripAnimator {
    pub fn new(translate_x: f64) -> Self {
        Self {
            resting: translate_x,
            tween: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn apply(&mut self, style: StripStyle, now_ms: u64) {
        let from = self.position(now_ms);
        self.resting = style.translate_x;
        self.tween = match style.transition {
            Some(t) if from != style.translate_x => Some(Tween::new(
                from,
                style.translate_x,
                now_ms,
                t.duration_ms,
                t.easing,
            )),
            _ => None,
        };
    }

    /// The displayed offset at `now_ms`.
    pub fn position(&self, now_ms: u64) -> f64 {
        match self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.resting,
        }
    }

    /// Samples the displayed offset and drops a finished tween.
    pub fn tick(&mut self, now_ms: u64) -> f64 {
        if self.tween.is_some_and(|t| t.is_done(now_ms)) {
            self.tween = None;
        }
        self.position(now_ms)
    }
}
