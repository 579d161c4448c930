use crate::geometry::{self, abs};
use crate::{CarouselOptions, PointerInput, PointerKind, StripStyle, Transition};

// Overshoot (px) tolerated before the strip counts as exhausted.
const TRAVEL_EPSILON: f64 = 0.5;

/// Geometry of the slide strip, read on demand.
///
/// A DOM adapter forwards to the first slide's bounding width, the strip's computed
/// `gap`/`column-gap`, the strip's `scrollWidth` and the slider's `clientWidth`.
pub trait StripGeometry {
    /// Width of one slide, or `None` when the strip has no slide.
    fn slide_width(&self) -> Option<f64>;
    fn gap(&self) -> f64;
    fn strip_scroll_width(&self) -> f64;
    fn viewport_width(&self) -> f64;
}

/// Externally visible phase of a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseKind {
    Idle,
    AutoAdvancing,
    /// A pointer is down but has not yet moved past the drag threshold.
    Pressed,
    Dragging,
    /// Snapping back after a drag; auto-advance resumes when the settle delay elapses.
    Settling,
}

/// A serializable reading of the carousel state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub phase: PhaseKind,
    pub index: usize,
    pub offset: f64,
    pub slide_count: usize,
}

/// Host-side work requested by a carousel event.
///
/// Each event produces at most one of each effect; adapters apply them in field order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Effects {
    /// Write this transform/transition to the strip now.
    pub paint: Option<StripStyle>,
    /// Toggle the slider's dragging indicator (e.g. an `is-dragging` class).
    pub dragging: Option<bool>,
    /// Capture this pointer on the slider element.
    pub capture_pointer: Option<i32>,
    /// Call [`Carousel::on_animation_frame`] on the next frame.
    pub request_frame: bool,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.paint.is_none()
            && self.dragging.is_none()
            && self.capture_pointer.is_none()
            && !self.request_frame
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
    pointer_id: i32,
    start_x: f64,
    start_translate: f64,
}

/// What a press interrupted, restored when it turns out to be a click.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Resume {
    Idle,
    Auto { next_ms: u64 },
    Settle { until_ms: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    AutoAdvancing { next_ms: u64 },
    Pressed { origin: DragOrigin, resume: Resume },
    Dragging { origin: DragOrigin },
    Settling { until_ms: u64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FrameWork {
    restore_transition: bool,
    advance: bool,
}

/// A headless, auto-advancing, drag-enabled looping carousel.
///
/// The strip offset is authoritative internal state; [`Carousel::style`] is its rendered
/// projection. The carousel holds no UI objects: adapters feed it timer ticks, animation frames,
/// resize and pointer events, and apply the returned [`Effects`].
///
/// Auto-advance and dragging are mutually exclusive by construction: the timer deadline lives in
/// the auto-advancing phase, and the dragging phase has none.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    phase: Phase,
    index: usize,
    offset: f64,
    transition: Option<Transition>,
    pending_target: Option<f64>,
    frame_requested: bool,
    frame_work: FrameWork,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        fdebug!(
            original_count = options.original_count,
            clone_copies = options.clone_copies,
            interval_ms = options.interval_ms,
            "Carousel::new"
        );
        Self {
            options,
            phase: Phase::Idle,
            index: 0,
            offset: 0.0,
            transition: None,
            pending_target: None,
            frame_requested: false,
            frame_work: FrameWork::default(),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Number of slide copies the adapter appends to the strip at setup.
    pub fn clone_copies(&self) -> usize {
        self.options.clone_copies
    }

    pub fn slide_count(&self) -> usize {
        self.options.slide_count()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn style(&self) -> StripStyle {
        StripStyle {
            translate_x: self.offset,
            transition: self.transition,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::AutoAdvancing { .. } => PhaseKind::AutoAdvancing,
            Phase::Pressed { .. } => PhaseKind::Pressed,
            Phase::Dragging { .. } => PhaseKind::Dragging,
            Phase::Settling { .. } => PhaseKind::Settling,
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            phase: self.phase(),
            index: self.index,
            offset: self.offset,
            slide_count: self.slide_count(),
        }
    }

    /// Whether the auto-advance timer is armed.
    pub fn is_auto_advancing(&self) -> bool {
        matches!(
            self.phase,
            Phase::AutoAdvancing { .. }
                | Phase::Pressed {
                    resume: Resume::Auto { .. },
                    ..
                }
        )
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_pointer_down(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. } | Phase::Dragging { .. })
    }

    /// The earliest time at which [`Carousel::tick`] has work to do.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match self.phase {
            Phase::AutoAdvancing { next_ms }
            | Phase::Pressed {
                resume: Resume::Auto { next_ms },
                ..
            } => Some(next_ms),
            Phase::Settling { until_ms } => Some(until_ms),
            _ => None,
        }
    }

    pub fn step(&self, geometry: &impl StripGeometry) -> f64 {
        geometry::step(geometry.slide_width(), geometry.gap())
    }

    pub fn min_translate_x(&self, geometry: &impl StripGeometry) -> f64 {
        geometry::min_translate_x(geometry.strip_scroll_width(), geometry.viewport_width())
    }

    fn interval_ms(&self) -> u64 {
        self.options.interval_ms.max(1)
    }

    fn request_frame(&mut self, fx: &mut Effects) {
        if !self.frame_requested {
            self.frame_requested = true;
            fx.request_frame = true;
        }
    }

    /// (Re)arms the auto-advance timer, replacing any armed timer or pending settle.
    ///
    /// Returns `false` while a pointer is down; a drag release re-arms it after settling.
    pub fn start_auto(&mut self, now_ms: u64) -> bool {
        if self.is_pointer_down() {
            ftrace!("start_auto ignored: pointer is down");
            return false;
        }
        let next_ms = now_ms.saturating_add(self.interval_ms());
        ftrace!(now_ms, next_ms, "start_auto");
        self.phase = Phase::AutoAdvancing { next_ms };
        true
    }

    /// Disarms the auto-advance timer (and a pending post-drag restart).
    pub fn stop_auto(&mut self) {
        match self.phase {
            Phase::AutoAdvancing { .. } | Phase::Settling { .. } => self.phase = Phase::Idle,
            Phase::Pressed { origin, .. } => {
                self.phase = Phase::Pressed {
                    origin,
                    resume: Resume::Idle,
                }
            }
            Phase::Idle | Phase::Dragging { .. } => {}
        }
    }

    /// Advances timers: fires a due auto-advance or finishes a due settle.
    pub fn tick(&mut self, now_ms: u64, geometry: &impl StripGeometry) -> Effects {
        let mut fx = Effects::default();
        match self.phase {
            Phase::AutoAdvancing { next_ms } if now_ms >= next_ms => {
                self.phase = Phase::AutoAdvancing {
                    next_ms: self.following_deadline(next_ms, now_ms),
                };
                self.advance(geometry, &mut fx);
            }
            Phase::Pressed {
                origin,
                resume: Resume::Auto { next_ms },
            } if now_ms >= next_ms => {
                self.phase = Phase::Pressed {
                    origin,
                    resume: Resume::Auto {
                        next_ms: self.following_deadline(next_ms, now_ms),
                    },
                };
                self.advance(geometry, &mut fx);
            }
            Phase::Settling { until_ms } if now_ms >= until_ms => {
                ftrace!(now_ms, "settle finished");
                self.transition = Some(self.options.advance_transition);
                fx.paint = Some(self.style());
                self.start_auto(now_ms);
            }
            _ => {}
        }
        fx
    }

    // Interval semantics: keep the cadence, but never queue up missed fires.
    fn following_deadline(&self, due_ms: u64, now_ms: u64) -> u64 {
        let next = due_ms.saturating_add(self.interval_ms());
        if next <= now_ms {
            now_ms.saturating_add(self.interval_ms())
        } else {
            next
        }
    }

    fn advance(&mut self, geometry: &impl StripGeometry, fx: &mut Effects) {
        let step = self.step(geometry);
        if step <= 0.0 {
            fwarn!("auto-advance skipped: no measurable slide");
            return;
        }

        let travel = -self.min_translate_x(geometry);
        let next_end = step * (self.index + 1) as f64;
        if travel > 0.0 && next_end > travel + TRAVEL_EPSILON {
            // Clones repeat every `original_count` slides, so shifting the offset by whole sets
            // is invisible. The advance itself happens on the next frame, after the jump paints.
            let n = self.options.original_count;
            let sets = match n {
                0 => 0,
                n => {
                    let set_width = step * n as f64;
                    geometry::whole_sets_behind(self.offset, set_width).min(self.index / n)
                }
            };
            if sets == 0 {
                fdebug!(index = self.index, travel, "auto-advance skipped: strip exhausted");
                return;
            }
            let shift = sets * n;
            fdebug!(from = self.index, to = self.index - shift, "rebasing carousel index");
            self.index -= shift;
            self.offset += step * shift as f64;
            self.transition = None;
            fx.paint = Some(self.style());
            self.frame_work.advance = true;
            self.request_frame(fx);
            return;
        }

        self.index += 1;
        self.offset = geometry::offset_for_index(self.index, step);
        self.transition = Some(self.options.advance_transition);
        ftrace!(index = self.index, offset = self.offset, "auto-advance");
        fx.paint = Some(self.style());
    }

    /// Re-snaps the strip to the current index with fresh geometry.
    ///
    /// The jump is instant; the eased transition is restored on the next animation frame so the
    /// host never animates from a stale position. Ignored while a pointer is down.
    pub fn on_resize(&mut self, geometry: &impl StripGeometry) -> Effects {
        let mut fx = Effects::default();
        if self.is_pointer_down() {
            return fx;
        }
        let step = self.step(geometry);
        if step <= 0.0 {
            return fx;
        }
        self.offset = geometry::offset_for_index(self.index, step);
        self.transition = None;
        fx.paint = Some(self.style());
        self.frame_work.restore_transition = true;
        self.request_frame(&mut fx);
        fx
    }

    /// Runs work deferred to the next animation frame.
    ///
    /// Multiple pointer moves between frames collapse into a single transform write here.
    pub fn on_animation_frame(&mut self, geometry: &impl StripGeometry) -> Effects {
        self.frame_requested = false;
        let mut fx = Effects::default();

        if let Some(target) = self.pending_target.take().filter(|_| self.is_dragging()) {
            self.offset = target;
            self.transition = None;
            fx.paint = Some(self.style());
        }

        let work = core::mem::take(&mut self.frame_work);
        if work.restore_transition {
            self.transition = Some(self.options.advance_transition);
            fx.paint = Some(self.style());
        }
        if work.advance && self.is_auto_advancing() {
            self.advance(geometry, &mut fx);
        }
        fx
    }

    /// Starts a press. `rendered` is the strip offset the host currently displays (e.g. parsed
    /// from the computed transform of an in-flight transition); `None` uses the internal offset.
    pub fn on_pointer_down(&mut self, input: PointerInput, rendered: Option<f64>) -> Effects {
        let mut fx = Effects::default();
        let secondary_mouse = input.kind == PointerKind::Mouse && input.button != 0;
        if self.options.primary_button_only && secondary_mouse {
            return fx;
        }
        if !input.client_x.is_finite() {
            fwarn!("pointer down ignored: non-finite client_x");
            return fx;
        }
        let resume = match self.phase {
            Phase::Idle => Resume::Idle,
            Phase::AutoAdvancing { next_ms } => Resume::Auto { next_ms },
            Phase::Settling { until_ms } => Resume::Settle { until_ms },
            Phase::Pressed { .. } | Phase::Dragging { .. } => return fx,
        };

        let start_translate = rendered.filter(|x| x.is_finite()).unwrap_or(self.offset);
        self.offset = start_translate;
        self.transition = None;
        self.pending_target = None;
        self.frame_work = FrameWork::default();
        self.phase = Phase::Pressed {
            origin: DragOrigin {
                pointer_id: input.pointer_id,
                start_x: input.client_x,
                start_translate,
            },
            resume,
        };
        ftrace!(pointer_id = input.pointer_id, start_translate, "pointer down");

        fx.paint = Some(self.style());
        fx.dragging = Some(true);
        fx.capture_pointer = Some(input.pointer_id);
        fx
    }

    pub fn on_pointer_move(
        &mut self,
        input: PointerInput,
        geometry: &impl StripGeometry,
    ) -> Effects {
        let mut fx = Effects::default();
        let origin = match self.phase {
            Phase::Pressed { origin, .. } | Phase::Dragging { origin } => origin,
            _ => return fx,
        };
        if input.pointer_id != origin.pointer_id {
            return fx;
        }
        let raw_dx = input.client_x - origin.start_x;
        if !raw_dx.is_finite() {
            return fx;
        }

        if let Phase::Pressed { .. } = self.phase {
            if abs(raw_dx) < self.options.drag_threshold_px {
                return fx;
            }
            fdebug!(raw_dx, "drag started");
            self.phase = Phase::Dragging { origin };
        }

        let min_x = self.min_translate_x(geometry);
        let candidate = origin.start_translate + raw_dx * self.options.drag_sensitivity;
        self.pending_target = Some(geometry::rubber_band(
            candidate,
            min_x,
            self.options.rubber_band,
        ));
        self.request_frame(&mut fx);
        fx
    }

    /// Ends a press (`pointerup`, `pointercancel` and `lostpointercapture` all land here).
    pub fn on_pointer_release(
        &mut self,
        input: PointerInput,
        now_ms: u64,
        geometry: &impl StripGeometry,
    ) -> Effects {
        let mut fx = Effects::default();
        match self.phase {
            Phase::Pressed { origin, resume } if origin.pointer_id == input.pointer_id => {
                self.phase = match resume {
                    Resume::Idle => Phase::Idle,
                    Resume::Auto { next_ms } => Phase::AutoAdvancing { next_ms },
                    Resume::Settle { until_ms } => Phase::Settling { until_ms },
                };
                fx.dragging = Some(false);
            }
            Phase::Dragging { origin } if origin.pointer_id == input.pointer_id => {
                let current = self.pending_target.take().unwrap_or(self.offset);
                let clamped = geometry::clamp_translate(current, self.min_translate_x(geometry));
                self.offset = clamped;
                self.transition = Some(self.options.snap_transition);
                if let Some(index) = geometry::index_for_offset(clamped, self.step(geometry)) {
                    self.index = index;
                }
                let until_ms = now_ms.saturating_add(self.options.settle_ms);
                self.phase = Phase::Settling { until_ms };
                fdebug!(offset = clamped, index = self.index, until_ms, "drag released");

                fx.paint = Some(self.style());
                fx.dragging = Some(false);
            }
            _ => {}
        }
        fx
    }
}
