use crate::*;

use std::vec;
use std::vec::Vec;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[derive(Clone, Debug)]
struct FakePage {
    container: Option<Bounds>,
    scroll_top: f64,
    sections: Vec<(&'static str, Bounds)>,
}

impl FakePage {
    // Stacked sections of `height` each, scrolled inside a container at `container_top`.
    fn stacked(ids: &[&'static str], height: f64, container_top: f64, scroll_top: f64) -> Self {
        let sections = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = container_top + i as f64 * height - scroll_top;
                (*id, Bounds::from_top_height(top, height))
            })
            .collect();
        Self {
            container: Some(Bounds::from_top_height(container_top, height)),
            scroll_top,
            sections,
        }
    }
}

impl PageGeometry<&'static str> for FakePage {
    fn container_bounds(&self) -> Option<Bounds> {
        self.container
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn section_bounds(&self, id: &&'static str) -> Option<Bounds> {
        self.sections
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, b)| *b)
    }
}

const IDS: [&str; 5] = ["s1", "s2", "s3", "s4", "s5"];

fn tracker() -> SectionTracker<&'static str> {
    SectionTracker::new(SectionTrackerOptions::new(IDS, IDS).with_dark_sections(["s3", "s4"]))
}

#[test]
fn probe_line_sits_at_sixty_percent() {
    let c = Bounds::from_top_height(100.0, 1000.0);
    assert!(approx(geometry::probe_line(c, 0.6), 700.0));
}

#[test]
fn closest_center_to_probe_becomes_active_and_darkens_menu() {
    // Probe at 2300 + 0.6 * 1000 = 2900; s3's center (3000) is the closest.
    let page = FakePage {
        container: Some(Bounds::from_top_height(2300.0, 1000.0)),
        scroll_top: 0.0,
        sections: vec![
            ("s1", Bounds::new(0.0, 1000.0)),
            ("s2", Bounds::new(1500.0, 2500.0)),
            ("s3", Bounds::new(2500.0, 3500.0)),
            ("s4", Bounds::new(3500.0, 4500.0)),
            ("s5", Bounds::new(4500.0, 5500.0)),
        ],
    };
    let mut t = tracker();
    let nav = t.refresh(&page).unwrap();
    assert_eq!(nav.active_section, 2);
    assert_eq!(nav.active_link, Some(2));
    assert!(nav.dark);
    assert_eq!(t.active_section(), Some(&"s3"));
}

#[test]
fn active_section_matches_brute_force_for_every_scroll_position() {
    let mut t = tracker();
    let mut scroll = 0.0;
    while scroll <= 4000.0 {
        let page = FakePage::stacked(&IDS, 1000.0, 0.0, scroll);
        let nav = t.refresh(&page).unwrap();

        let probe = 600.0;
        let mut expected = 0;
        let mut best = f64::INFINITY;
        for (i, (_, b)) in page.sections.iter().enumerate() {
            let d = (b.center() - probe).abs();
            if d < best {
                best = d;
                expected = i;
            }
        }
        assert_eq!(nav.active_section, expected, "scroll={scroll}");
        assert_eq!(nav.active_link, Some(expected));
        assert_eq!(nav.dark, expected == 2 || expected == 3, "scroll={scroll}");
        scroll += 37.0;
    }
}

#[test]
fn ties_resolve_to_the_first_section_in_document_order() {
    // Probe at 600; s1 centered at 500 and s2 centered at 700 are equally far.
    let page = FakePage {
        container: Some(Bounds::from_top_height(0.0, 1000.0)),
        scroll_top: 0.0,
        sections: vec![
            ("s1", Bounds::new(400.0, 600.0)),
            ("s2", Bounds::new(600.0, 800.0)),
        ],
    };
    let mut t = SectionTracker::new(SectionTrackerOptions::new(["s1", "s2"], ["s1", "s2"]));
    assert_eq!(t.refresh(&page).unwrap().active_section, 0);
}

#[test]
fn sections_without_bounds_are_skipped() {
    let mut page = FakePage::stacked(&IDS, 1000.0, 0.0, 2000.0);
    page.sections.retain(|(id, _)| *id != "s3");
    let nav = tracker().refresh(&page).unwrap();
    assert_ne!(nav.active_section, 2);
}

#[test]
fn unmeasurable_sections_leave_the_previous_state_untouched() {
    let mut page = FakePage::stacked(&IDS, 1000.0, 0.0, 2000.0);
    let mut t = tracker();
    let before = t.refresh(&page).unwrap();
    assert_eq!(before.active_section, 2);

    page.sections.clear();
    assert_eq!(t.refresh(&page), None);
    assert_eq!(t.nav_state(), Some(before));
}

#[test]
fn non_finite_probe_ratio_reports_nothing() {
    let page = FakePage::stacked(&IDS, 1000.0, 0.0, 0.0);
    let options = SectionTrackerOptions::new(IDS, IDS).with_probe_ratio(f64::NAN);
    let mut t = SectionTracker::new(options);
    assert_eq!(t.refresh(&page), None);
    assert_eq!(t.nav_state(), None);
}

#[test]
fn refresh_short_circuits_without_container_or_links() {
    let mut page = FakePage::stacked(&IDS, 1000.0, 0.0, 0.0);
    page.container = None;
    let mut t = tracker();
    assert_eq!(t.refresh(&page), None);
    assert_eq!(t.nav_state(), None);

    let page = FakePage::stacked(&IDS, 1000.0, 0.0, 0.0);
    let mut no_links = SectionTracker::new(SectionTrackerOptions::new(IDS, []));
    assert_eq!(no_links.refresh(&page), None);
}

#[test]
fn section_without_a_link_marks_no_link() {
    let page = FakePage::stacked(&IDS, 1000.0, 0.0, 4000.0);
    let mut t = SectionTracker::new(SectionTrackerOptions::new(IDS, ["s1", "s2"]));
    let nav = t.refresh(&page).unwrap();
    assert_eq!(nav.active_section, 4);
    assert_eq!(nav.active_link, None);
    assert!(!nav.dark);
}

#[test]
fn link_click_scrolls_by_target_offset_relative_to_container() {
    let page = FakePage {
        container: Some(Bounds::from_top_height(100.0, 1000.0)),
        scroll_top: 500.0,
        sections: vec![
            ("s1", Bounds::new(-400.0, 600.0)),
            ("s3", Bounds::new(1300.0, 2300.0)),
        ],
    };
    let t = tracker();
    let req = t.scroll_request_for(&"s3", &page).unwrap();
    assert!(approx(req.top, 1700.0));
    assert_eq!(req.behavior, ScrollBehavior::Smooth);

    assert_eq!(t.scroll_request_for(&"s9", &page), None);
    assert_eq!(t.scroll_request_for_link(42, &page), None);

    let mut missing = page.clone();
    missing.container = None;
    assert_eq!(t.scroll_request_for_link(2, &missing), None);
}

#[derive(Clone, Copy, Debug)]
struct FakeStrip {
    slide_width: Option<f64>,
    gap: f64,
    scroll_width: f64,
    viewport_width: f64,
}

impl FakeStrip {
    fn new(slides: usize, slide_width: f64, gap: f64, viewport_width: f64) -> Self {
        let scroll_width = if slides == 0 {
            0.0
        } else {
            slides as f64 * (slide_width + gap) - gap
        };
        Self {
            slide_width: (slides > 0).then_some(slide_width),
            gap,
            scroll_width,
            viewport_width,
        }
    }
}

impl StripGeometry for FakeStrip {
    fn slide_width(&self) -> Option<f64> {
        self.slide_width
    }

    fn gap(&self) -> f64 {
        self.gap
    }

    fn strip_scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

// 4 originals + 10 copies of 300px slides with a 20px gap.
fn strip() -> FakeStrip {
    FakeStrip::new(44, 300.0, 20.0, 960.0)
}

fn started() -> Carousel {
    let mut c = Carousel::new(CarouselOptions::new(4));
    assert!(c.start_auto(0));
    c
}

#[test]
fn setup_counts_originals_plus_ten_copies() {
    let c = Carousel::new(CarouselOptions::new(4));
    assert_eq!(c.clone_copies(), 10);
    assert_eq!(c.slide_count(), 44);
    assert_eq!(c.phase(), PhaseKind::Idle);
}

#[test]
fn geometry_helpers_guard_unusable_readings() {
    assert!(approx(geometry::step(Some(300.0), 20.0), 320.0));
    assert!(approx(geometry::step(None, 20.0), 0.0));
    assert!(approx(geometry::step(Some(300.0), f64::NAN), 300.0));
    assert!(approx(geometry::min_translate_x(500.0, 960.0), 0.0));
    assert!(approx(geometry::min_translate_x(14060.0, 960.0), -13100.0));
    assert_eq!(geometry::index_for_offset(-1000.0, 320.0), Some(3));
    assert_eq!(geometry::index_for_offset(-1120.0, 320.0), Some(4));
    assert_eq!(geometry::index_for_offset(-1000.0, 0.0), None);
    assert!(approx(geometry::clamp_translate(42.0, -100.0), 0.0));
    assert!(approx(geometry::clamp_translate(-420.0, -100.0), -100.0));
    assert_eq!(geometry::whole_sets_behind(-13_100.0, 1280.0), 10);
    assert_eq!(geometry::whole_sets_behind(-1279.0, 1280.0), 0);
    assert_eq!(geometry::whole_sets_behind(0.0, 1280.0), 0);
    assert_eq!(geometry::whole_sets_behind(-500.0, 0.0), 0);
}

#[test]
fn three_auto_advances_move_three_steps() {
    let g = strip();
    let mut c = started();

    assert!(c.tick(3999, &g).is_empty());
    for n in 1..=3u64 {
        let fx = c.tick(n * 4000, &g);
        let paint = fx.paint.unwrap();
        assert_eq!(paint.transition, Some(Transition::new(2400, Easing::Ease)));
        assert!(approx(paint.translate_x, -320.0 * n as f64));
    }
    assert_eq!(c.index(), 3);
    assert!(approx(c.offset(), -960.0));
}

#[test]
fn restarting_auto_replaces_the_armed_timer() {
    let g = strip();
    let mut c = started();
    assert!(c.start_auto(1000));
    assert_eq!(c.next_deadline_ms(), Some(5000));
    assert!(c.tick(4000, &g).is_empty());
    assert!(c.tick(5000, &g).paint.is_some());
    assert_eq!(c.next_deadline_ms(), Some(9000));

    c.stop_auto();
    assert_eq!(c.next_deadline_ms(), None);
    assert!(c.tick(20_000, &g).is_empty());
}

#[test]
fn missed_intervals_fire_once() {
    let g = strip();
    let mut c = started();
    c.tick(30_000, &g);
    assert_eq!(c.index(), 1);
    assert_eq!(c.next_deadline_ms(), Some(34_000));
}

#[test]
fn auto_advance_without_slides_is_a_noop() {
    let g = FakeStrip::new(0, 300.0, 20.0, 960.0);
    let mut c = started();
    assert!(c.tick(4000, &g).is_empty());
    assert_eq!(c.index(), 0);
}

#[test]
fn small_moves_are_not_drags() {
    let g = strip();
    let mut c = started();

    let fx = c.on_pointer_down(PointerInput::mouse(500.0), None);
    assert_eq!(fx.dragging, Some(true));
    assert_eq!(fx.capture_pointer, Some(1));
    assert_eq!(fx.paint.unwrap().transition, None);

    assert!(c.on_pointer_move(PointerInput::mouse(501.5), &g).is_empty());
    assert_eq!(c.phase(), PhaseKind::Pressed);
    assert!(c.is_auto_advancing());

    let fx = c.on_pointer_release(PointerInput::mouse(501.5), 100, &g);
    assert_eq!(fx.dragging, Some(false));
    assert_eq!(fx.paint, None);
    assert_eq!(c.phase(), PhaseKind::AutoAdvancing);
    assert_eq!(c.next_deadline_ms(), Some(4000));
}

#[test]
fn drag_stops_auto_advance_and_coalesces_moves_per_frame() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(500.0), None);

    let fx = c.on_pointer_move(PointerInput::mouse(490.0), &g);
    assert!(fx.request_frame);
    assert!(c.is_dragging());
    assert!(!c.is_auto_advancing());
    assert_eq!(c.next_deadline_ms(), None);

    let fx = c.on_pointer_move(PointerInput::mouse(450.0), &g);
    assert!(!fx.request_frame);

    // Timers never fire mid-drag.
    assert!(c.tick(100_000, &g).is_empty());

    let fx = c.on_animation_frame(&g);
    let paint = fx.paint.unwrap();
    assert!(approx(paint.translate_x, -100.0));
    assert_eq!(paint.transition, None);

    let fx = c.on_pointer_move(PointerInput::mouse(440.0), &g);
    assert!(fx.request_frame);
}

#[test]
fn overscroll_past_the_start_is_damped_by_half() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::touch(7, 100.0), None);
    c.on_pointer_move(PointerInput::touch(7, 150.0), &g);
    let paint = c.on_animation_frame(&g).paint.unwrap();
    // Undamped candidate is 0 + 50 * 2.0 = 100.
    assert!(approx(paint.translate_x, 50.0));
}

#[test]
fn overscroll_past_the_end_damps_only_the_excess() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::touch(7, 500.0), Some(-13_000.0));
    c.on_pointer_move(PointerInput::touch(7, 400.0), &g);
    let paint = c.on_animation_frame(&g).paint.unwrap();
    // Candidate -13200 is 100 past min (-13100): keep half the excess.
    assert!(approx(paint.translate_x, -13_150.0));
}

#[test]
fn release_clamps_reindexes_then_resumes_after_settling() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(100.0), None);
    c.on_pointer_move(PointerInput::mouse(160.0), &g);
    c.on_animation_frame(&g);

    let fx = c.on_pointer_release(PointerInput::mouse(160.0), 1000, &g);
    let paint = fx.paint.unwrap();
    assert!(approx(paint.translate_x, 0.0));
    assert_eq!(paint.transition, Some(Transition::new(600, Easing::Ease)));
    assert_eq!(fx.dragging, Some(false));
    assert_eq!(c.index(), 0);
    assert_eq!(c.phase(), PhaseKind::Settling);

    assert!(c.tick(1649, &g).is_empty());
    let fx = c.tick(1650, &g);
    assert_eq!(
        fx.paint.unwrap().transition,
        Some(Transition::new(2400, Easing::Ease))
    );
    assert_eq!(c.phase(), PhaseKind::AutoAdvancing);
    assert_eq!(c.next_deadline_ms(), Some(5650));

    c.tick(5650, &g);
    assert!(approx(c.offset(), -320.0));
}

#[test]
fn release_uses_the_latest_target_and_rounds_the_index() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(1000.0), None);
    c.on_pointer_move(PointerInput::mouse(900.0), &g);
    c.on_animation_frame(&g);
    // Not yet painted: release must still honor it.
    c.on_pointer_move(PointerInput::mouse(500.0), &g);

    let paint = c
        .on_pointer_release(PointerInput::mouse(500.0), 0, &g)
        .paint
        .unwrap();
    assert!(approx(paint.translate_x, -1000.0));
    assert_eq!(c.index(), 3);
}

#[test]
fn release_clamps_left_overscroll_to_min_translate() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(500.0), Some(-13_000.0));
    c.on_pointer_move(PointerInput::mouse(300.0), &g);
    c.on_animation_frame(&g);
    c.on_pointer_release(PointerInput::mouse(300.0), 0, &g);
    assert!(approx(c.offset(), -13_100.0));
    let expected = geometry::index_for_offset(-13_100.0, 320.0).unwrap();
    assert_eq!(c.index(), expected);
}

#[test]
fn secondary_buttons_and_foreign_pointers_are_ignored() {
    let g = strip();
    let mut c = started();
    assert!(c.on_pointer_down(PointerInput::mouse(10.0).with_button(2), None).is_empty());
    assert_eq!(c.phase(), PhaseKind::AutoAdvancing);

    c.on_pointer_down(PointerInput::touch(1, 100.0), None);
    assert!(c.on_pointer_down(PointerInput::touch(2, 100.0), None).is_empty());
    assert!(c.on_pointer_move(PointerInput::touch(2, 0.0), &g).is_empty());
    assert!(c.on_pointer_release(PointerInput::touch(2, 0.0), 0, &g).is_empty());
    assert_eq!(c.phase(), PhaseKind::Pressed);
}

#[test]
fn pressing_adopts_the_rendered_offset() {
    let mut c = started();
    let fx = c.on_pointer_down(PointerInput::mouse(0.0), Some(-123.5));
    assert!(approx(fx.paint.unwrap().translate_x, -123.5));
    assert!(approx(c.offset(), -123.5));

    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(0.0), Some(f64::NAN));
    assert!(approx(c.offset(), 0.0));
}

#[test]
fn press_during_settle_resumes_settling_on_click() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(0.0), None);
    c.on_pointer_move(PointerInput::mouse(-100.0), &g);
    c.on_pointer_release(PointerInput::mouse(-100.0), 1000, &g);
    assert_eq!(c.phase(), PhaseKind::Settling);

    c.on_pointer_down(PointerInput::mouse(0.0), None);
    assert_eq!(c.next_deadline_ms(), None);
    assert!(c.tick(2000, &g).is_empty());
    c.on_pointer_release(PointerInput::mouse(0.0), 2000, &g);
    assert_eq!(c.phase(), PhaseKind::Settling);
    c.tick(2000, &g);
    assert_eq!(c.phase(), PhaseKind::AutoAdvancing);
}

#[test]
fn resize_snaps_instantly_then_restores_transition_next_frame() {
    let mut g = strip();
    let mut c = started();
    c.tick(4000, &g);
    c.tick(8000, &g);

    g.slide_width = Some(400.0);
    let fx = c.on_resize(&g);
    let paint = fx.paint.unwrap();
    assert!(approx(paint.translate_x, -840.0));
    assert_eq!(paint.transition, None);
    assert!(fx.request_frame);

    let paint = c.on_animation_frame(&g).paint.unwrap();
    assert!(approx(paint.translate_x, -840.0));
    assert_eq!(paint.transition, Some(Transition::new(2400, Easing::Ease)));
    assert_eq!(c.index(), 2);
}

#[test]
fn resize_is_ignored_while_dragging() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(0.0), None);
    c.on_pointer_move(PointerInput::mouse(-50.0), &g);
    assert!(c.on_resize(&g).paint.is_none());
}

#[test]
fn exhausted_strip_rebases_to_an_identical_slide() {
    // Two originals plus one copy: 4 slides of 100px in a 100px viewport, 300px of travel.
    let g = FakeStrip::new(4, 100.0, 0.0, 100.0);
    let mut c = Carousel::new(CarouselOptions::new(2).with_clone_copies(1));
    c.start_auto(0);
    for n in 1..=3u64 {
        c.tick(n * 4000, &g);
    }
    assert_eq!(c.index(), 3);

    let fx = c.tick(16_000, &g);
    let paint = fx.paint.unwrap();
    assert!(approx(paint.translate_x, -100.0));
    assert_eq!(paint.transition, None);
    assert!(fx.request_frame);
    assert_eq!(c.index(), 1);

    let paint = c.on_animation_frame(&g).paint.unwrap();
    assert!(approx(paint.translate_x, -200.0));
    assert!(paint.transition.is_some());
    assert_eq!(c.index(), 2);
}

#[test]
fn rebase_after_dragging_to_the_end_keeps_the_strip_in_place() {
    let g = strip();
    let mut c = started();
    c.on_pointer_down(PointerInput::mouse(500.0), Some(-13_000.0));
    c.on_pointer_move(PointerInput::mouse(300.0), &g);
    c.on_animation_frame(&g);
    c.on_pointer_release(PointerInput::mouse(300.0), 0, &g);
    // -13100 is not a whole number of 320px steps; the index rounds to 41.
    assert!(approx(c.offset(), -13_100.0));
    assert_eq!(c.index(), 41);

    c.tick(650, &g);
    assert_eq!(c.phase(), PhaseKind::AutoAdvancing);

    let fx = c.tick(4650, &g);
    let paint = fx.paint.unwrap();
    assert_eq!(paint.transition, None);
    // Ten sets of 4 * 320px back: the same picture, 20px short of slide 1's resting offset.
    assert!(approx(paint.translate_x, -300.0));
    assert!(approx((paint.translate_x + 13_100.0) % 1280.0, 0.0));
    assert_eq!(c.index(), 1);

    let paint = c.on_animation_frame(&g).paint.unwrap();
    assert!(approx(paint.translate_x, -640.0));
    assert_eq!(paint.transition, Some(Transition::new(2400, Easing::Ease)));
    assert_eq!(c.index(), 2);
}

#[test]
fn strip_that_cannot_rebase_holds_position() {
    let g = FakeStrip::new(4, 100.0, 0.0, 100.0);
    let mut c = Carousel::new(CarouselOptions::new(4).with_clone_copies(0));
    c.start_auto(0);
    for n in 1..=5u64 {
        c.tick(n * 4000, &g);
    }
    assert_eq!(c.index(), 3);
    assert!(approx(c.offset(), -300.0));
}

#[test]
fn snapshot_reflects_state() {
    let g = strip();
    let mut c = started();
    c.tick(4000, &g);
    let snap = c.snapshot();
    assert_eq!(snap.phase, PhaseKind::AutoAdvancing);
    assert_eq!(snap.index, 1);
    assert!(approx(snap.offset, -320.0));
    assert_eq!(snap.slide_count, 44);
}

#[test]
fn ease_matches_css_keyword_curve() {
    assert!(Easing::Ease.sample(0.0).abs() < 1e-3);
    assert!((Easing::Ease.sample(1.0) - 1.0).abs() < 1e-3);
    assert!((Easing::Ease.sample(0.5) - 0.8024).abs() < 0.01);

    let mut last = 0.0f32;
    for i in 0..=20 {
        let v = Easing::Ease.sample(i as f32 / 20.0);
        assert!(v + 1e-4 >= last);
        last = v;
    }
}
