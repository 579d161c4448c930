// Example: a host without CSS transitions, animating the strip itself.
//
// The host would:
// - implement `Surface` over its widgets
// - forward events to `Page` and call `tick(now_ms)` from a timer
// - play strip writes through a `StripAnimator` and read positions back on pointer-down
use fullpage::{
    Bounds, CarouselOptions, PageGeometry, PointerInput, ScrollRequest, SectionTrackerOptions,
    StripGeometry, StripStyle,
};
use fullpage_adapter::{Page, StripAnimator, Surface, transform_css, transition_css};

const IDS: [&str; 3] = ["hero", "work", "contact"];

struct Host {
    now_ms: u64,
    scroll_top: f64,
    slides: usize,
    strip: StripAnimator,
    frame_pending: bool,
}

impl PageGeometry<&'static str> for Host {
    fn container_bounds(&self) -> Option<Bounds> {
        Some(Bounds::from_top_height(0.0, 600.0))
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn section_bounds(&self, id: &&'static str) -> Option<Bounds> {
        let i = IDS.iter().position(|s| s == id)?;
        Some(Bounds::from_top_height(i as f64 * 600.0 - self.scroll_top, 600.0))
    }
}

impl StripGeometry for Host {
    fn slide_width(&self) -> Option<f64> {
        (self.slides > 0).then_some(240.0)
    }

    fn gap(&self) -> f64 {
        16.0
    }

    fn strip_scroll_width(&self) -> f64 {
        self.slides as f64 * 256.0 - 16.0
    }

    fn viewport_width(&self) -> f64 {
        720.0
    }
}

impl Surface<&'static str> for Host {
    fn set_link_active(&mut self, link: usize, active: bool) {
        if active {
            println!("menu: {} active", IDS[link]);
        }
    }

    fn set_menu_dark(&mut self, dark: bool) {
        println!("menu: dark={dark}");
    }

    fn scroll_container_to(&mut self, request: ScrollRequest) {
        self.scroll_top = request.top;
    }

    fn append_slide_copies(&mut self, copies: usize) {
        self.slides += 3 * copies;
    }

    fn set_strip_style(&mut self, style: StripStyle) {
        println!(
            "t={} strip: transform={} transition={}",
            self.now_ms,
            transform_css(style.translate_x),
            transition_css(style.transition)
        );
        self.strip.apply(style, self.now_ms);
    }

    fn set_dragging(&mut self, dragging: bool) {
        println!("slider: dragging={dragging}");
    }

    fn capture_pointer(&mut self, _pointer_id: i32) {}

    fn request_animation_frame(&mut self) {
        self.frame_pending = true;
    }

    fn rendered_translate_x(&self) -> Option<f64> {
        Some(self.strip.position(self.now_ms))
    }
}

fn main() {
    let host = Host {
        now_ms: 0,
        scroll_top: 0.0,
        slides: 3,
        strip: StripAnimator::default(),
        frame_pending: false,
    };
    let mut page = Page::attach(
        host,
        SectionTrackerOptions::new(IDS, IDS).with_dark_sections(["work"]),
        Some(CarouselOptions::new(3)),
        0,
    );

    page.on_link_click(1);
    page.on_scroll();

    // 16ms frames for ten seconds; grab the strip mid-slide at t=5s.
    let mut now_ms = 0u64;
    while now_ms < 10_000 {
        now_ms += 16;
        page.surface_mut().now_ms = now_ms;
        page.tick(now_ms);

        if std::mem::take(&mut page.surface_mut().frame_pending) {
            page.on_animation_frame();
        }
        page.surface_mut().strip.tick(now_ms);

        match now_ms {
            5_008 => page.on_pointer_down(PointerInput::mouse(300.0)),
            5_024..=5_200 => {
                let x = 300.0 - (now_ms - 5_008) as f64;
                page.on_pointer_move(PointerInput::mouse(x));
            }
            5_216 => page.on_pointer_release(PointerInput::mouse(108.0), now_ms),
            _ => {}
        }
    }

    if let Some(c) = page.carousel() {
        println!("done: {:?}", c.snapshot());
    }
}
