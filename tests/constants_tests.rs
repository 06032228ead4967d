// Host-side sanity checks for tuning constants.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use core::constants::*;

#[test]
fn glow_fits_inside_its_interval() {
    assert!(GLOW_DURATION_SEC < GLOW_INTERVAL_SEC);
    assert!(GLOW_INITIAL_DELAY_SEC > 0.0);
}

#[test]
fn scroll_buckets_are_ordered() {
    assert!(0.0 < BUCKET_NEAR_END && BUCKET_NEAR_END < BUCKET_DOLLY_END && BUCKET_DOLLY_END < 1.0);
}

#[test]
fn focal_scales_shrink_with_scroll() {
    assert!(FOCAL_CLICK_SCALE > FOCAL_BASE_SCALE);
    assert!(FOCAL_BASE_SCALE > FOCAL_MID_SCALE && FOCAL_MID_SCALE > FOCAL_FAR_SCALE);
}

#[test]
fn selected_card_sits_above_the_stack() {
    assert!(CARD_SELECTED_SCALE > CARD_IDLE_SCALE);
    assert!(CARD_SELECTED_Z_INDEX > CARD_Z_INDEX_BASE + CARD_Z_INDEX_STEP * 100);
}

#[test]
fn camera_clip_planes_contain_the_star_shell() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_HOME_Z);
    assert!(STAR_RADIUS_MIN + STAR_RADIUS_SPAN + CAMERA_HOME_Z * 2.0 < CAMERA_ZFAR);
}
