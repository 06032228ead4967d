// Host-side tests for scroll progress and section tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use core::scroll::*;

fn geometry(scroll_y: f64) -> ScrollGeometry {
    ScrollGeometry {
        scroll_y,
        document_height: 3000.0,
        viewport_height: 1000.0,
        projects_span: Some((1000.0, 800.0)),
    }
}

#[test]
fn progress_spans_zero_to_one() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    assert!((scroll_progress(500.0, 3000.0, 1000.0) - 0.25).abs() < 1e-6);
}

#[test]
fn progress_is_clamped_for_overscroll() {
    assert_eq!(scroll_progress(-120.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn progress_is_zero_when_nothing_scrolls() {
    for s in [0.0, 10.0, 500.0] {
        assert_eq!(scroll_progress(s, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(s, 1000.0, 1000.0), 0.0);
    }
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
}

#[test]
fn section_progress_before_within_passed() {
    // Section at 1000..1800 with a 1000px viewport.
    assert_eq!(section_progress(0.0, 1000.0, 1000.0, 800.0), SectionProgress::Before);
    match section_progress(900.0, 1000.0, 1000.0, 800.0) {
        SectionProgress::Within(p) => assert!((p - 0.5).abs() < 1e-6, "p = {p}"),
        other => panic!("expected Within, got {other:?}"),
    }
    assert_eq!(section_progress(1800.0, 1000.0, 1000.0, 800.0), SectionProgress::Passed);
}

#[test]
fn section_progress_css_values() {
    assert_eq!(SectionProgress::Before.css_value(), 0.0);
    assert_eq!(SectionProgress::Within(0.4).css_value(), 0.4);
    assert!(SectionProgress::Passed.css_value() > 1.0);
}

#[test]
fn visible_ratio_handles_partial_and_degenerate() {
    assert_eq!(visible_ratio(0.0, 500.0, 1000.0), 1.0);
    assert!((visible_ratio(750.0, 500.0, 1000.0) - 0.5).abs() < 1e-9);
    assert_eq!(visible_ratio(1200.0, 500.0, 1000.0), 0.0);
    assert_eq!(visible_ratio(0.0, 0.0, 1000.0), 0.0);
}

#[test]
fn section_tracker_needs_half_visibility() {
    let mut t = SectionTracker::default();
    assert_eq!(t.active(), Section::Home);
    assert!(!t.observe(Section::Projects, 0.49));
    assert_eq!(t.active(), Section::Home);
    assert!(t.observe(Section::Projects, 0.5));
    assert_eq!(t.active(), Section::Projects);
    // Same section again is not a change.
    assert!(!t.observe(Section::Projects, 0.9));
}

#[test]
fn most_recent_section_wins() {
    let mut t = SectionTracker::default();
    t.observe(Section::About, 0.8);
    t.observe(Section::Contact, 0.6);
    assert_eq!(t.active(), Section::Contact);
    t.observe(Section::About, 0.7);
    assert_eq!(t.active(), Section::About);
}

#[test]
fn request_coalesces_bursts_into_one_recompute() {
    let mut t = ScrollTracker::new();
    assert!(t.request());
    for _ in 0..50 {
        assert!(!t.request());
    }
    assert!(t.is_pending());
    t.recompute(&geometry(500.0));
    assert!(!t.is_pending());
}

#[test]
fn every_request_eventually_recomputes() {
    let mut t = ScrollTracker::new();
    t.request();
    t.recompute(&geometry(0.0));
    // A new event after the recompute arms the flag again.
    assert!(t.request());
    assert!(t.is_pending());
    let s = t.recompute(&geometry(1000.0));
    assert!((s.progress - 0.5).abs() < 1e-6);
    assert_eq!(t.state(), s);
}

#[test]
fn recompute_is_synchronous_on_registration() {
    let mut t = ScrollTracker::new();
    let s = t.recompute(&geometry(2000.0));
    assert_eq!(s.progress, 1.0);
    assert_eq!(s.projects, SectionProgress::Passed);
    assert_eq!(t.state(), s);
}

#[test]
fn missing_projects_section_reads_before() {
    let mut t = ScrollTracker::new();
    let mut g = geometry(1500.0);
    g.projects_span = None;
    assert_eq!(t.recompute(&g).projects, SectionProgress::Before);
}

#[test]
fn observe_section_updates_state() {
    let mut t = ScrollTracker::new();
    assert!(t.observe_section(Section::About, 0.75));
    assert_eq!(t.state().section, Section::About);
    // Recompute keeps the latched section.
    assert_eq!(t.recompute(&geometry(0.0)).section, Section::About);
}

#[test]
fn anchor_ids_round_trip() {
    for s in Section::ALL {
        assert_eq!(Section::from_anchor_id(s.anchor_id()), Some(s));
    }
    assert_eq!(Section::from_anchor_id("resume"), None);
}
