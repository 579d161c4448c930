// Example: drive the carousel state machine from a simulated event loop.
use fullpage::{Carousel, CarouselOptions, PointerInput, StripGeometry};

struct Strip {
    slides: usize,
}

impl StripGeometry for Strip {
    fn slide_width(&self) -> Option<f64> {
        (self.slides > 0).then_some(300.0)
    }

    fn gap(&self) -> f64 {
        20.0
    }

    fn strip_scroll_width(&self) -> f64 {
        self.slides as f64 * 320.0 - 20.0
    }

    fn viewport_width(&self) -> f64 {
        960.0
    }
}

fn main() {
    let options = CarouselOptions::new(4);
    let strip = Strip {
        slides: options.slide_count(),
    };
    let mut c = Carousel::new(options);
    c.start_auto(0);

    // Three auto-advances: 4s apart.
    for now_ms in [4_000u64, 8_000, 12_000] {
        let fx = c.tick(now_ms, &strip);
        println!("t={now_ms} paint={:?}", fx.paint);
    }

    // Grab the strip and fling it right, past the start.
    let t0 = 13_000u64;
    c.on_pointer_down(PointerInput::mouse(400.0), None);
    for (i, x) in [410.0, 600.0, 900.0, 1400.0].into_iter().enumerate() {
        let fx = c.on_pointer_move(PointerInput::mouse(x), &strip);
        if fx.request_frame || i == 3 {
            let frame = c.on_animation_frame(&strip);
            println!("move x={x} frame={:?}", frame.paint);
        }
    }
    let fx = c.on_pointer_release(PointerInput::mouse(1400.0), t0, &strip);
    println!("release paint={:?} index={}", fx.paint, c.index());

    let mut now_ms = t0;
    while c.next_deadline_ms().is_some_and(|d| d > now_ms) && now_ms < t0 + 1_000 {
        now_ms += 16;
        let fx = c.tick(now_ms, &strip);
        if !fx.is_empty() {
            println!("t={now_ms} settled: {:?}", c.snapshot());
        }
    }
}
