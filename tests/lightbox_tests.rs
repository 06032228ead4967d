// Host-side tests for the gallery lightbox state.

#![allow(dead_code)]
mod core {
    pub mod lightbox {
        include!("../src/core/lightbox.rs");
    }
}

use core::lightbox::*;

#[test]
fn key_mapping() {
    assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Escape));
    assert_eq!(LightboxKey::from_key("Esc"), Some(LightboxKey::Escape));
    assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Previous));
    assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
    assert_eq!(LightboxKey::from_key("Enter"), None);
}

#[test]
fn opens_in_range_only() {
    let mut lb = Lightbox::new(3);
    assert!(!lb.is_open());
    assert!(!lb.open(3));
    assert!(!lb.is_open());
    assert!(lb.open(2));
    assert_eq!(lb.current(), Some(2));
    assert_eq!(lb.counter().as_deref(), Some("3 / 3"));
}

#[test]
fn navigation_clamps_without_wrapping() {
    let mut lb = Lightbox::new(3);
    lb.open(0);
    assert!(!lb.has_previous());
    assert!(!lb.previous());
    assert_eq!(lb.current(), Some(0));
    assert!(lb.next());
    assert!(lb.next());
    assert!(!lb.has_next());
    assert!(!lb.next());
    assert_eq!(lb.current(), Some(2));
    assert!(lb.has_previous());
}

#[test]
fn keys_drive_an_open_viewer() {
    let mut lb = Lightbox::new(4);
    lb.open(1);
    assert!(lb.handle_key(LightboxKey::Next));
    assert_eq!(lb.counter().as_deref(), Some("3 / 4"));
    assert!(lb.handle_key(LightboxKey::Previous));
    assert!(lb.handle_key(LightboxKey::Previous));
    assert!(!lb.handle_key(LightboxKey::Previous));
    assert!(lb.handle_key(LightboxKey::Escape));
    assert!(!lb.is_open());
    assert_eq!(lb.counter(), None);
}

#[test]
fn closed_viewer_ignores_keys() {
    let mut lb = Lightbox::new(4);
    for key in [LightboxKey::Escape, LightboxKey::Previous, LightboxKey::Next] {
        assert!(!lb.handle_key(key));
    }
    assert!(!lb.is_open());
}

#[test]
fn empty_gallery_never_opens() {
    let mut lb = Lightbox::new(0);
    assert_eq!(lb.len(), 0);
    assert!(!lb.open(0));
    assert!(!lb.next());
}
