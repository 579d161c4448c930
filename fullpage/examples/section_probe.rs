// Example: scroll through five stacked sections and print the derived menu state.
use fullpage::{Bounds, PageGeometry, SectionTracker, SectionTrackerOptions};

struct Page {
    scroll_top: f64,
}

const IDS: [&str; 5] = ["s1", "s2", "s3", "s4", "s5"];

impl PageGeometry<&'static str> for Page {
    fn container_bounds(&self) -> Option<Bounds> {
        Some(Bounds::from_top_height(0.0, 800.0))
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn section_bounds(&self, id: &&'static str) -> Option<Bounds> {
        let i = IDS.iter().position(|s| s == id)?;
        Some(Bounds::from_top_height(
            i as f64 * 800.0 - self.scroll_top,
            800.0,
        ))
    }
}

fn main() {
    let mut tracker = SectionTracker::new(
        SectionTrackerOptions::new(IDS, IDS).with_dark_sections(["s3", "s4"]),
    );

    let mut page = Page { scroll_top: 0.0 };
    while page.scroll_top <= 3200.0 {
        if let Some(nav) = tracker.refresh(&page) {
            println!(
                "scroll={:>6} active={:?} dark={}",
                page.scroll_top,
                tracker.active_section(),
                nav.dark
            );
        }
        page.scroll_top += 200.0;
    }

    if let Some(req) = tracker.scroll_request_for(&"s4", &page) {
        println!("click s4 -> scroll to {} ({:?})", req.top, req.behavior);
    }
}
