// Host-side tests for the scroll-bucketed camera rig.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use core::camera::*;
use core::constants::*;
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn buckets_split_at_thirds() {
    assert_eq!(ScrollBucket::from_progress(0.0), ScrollBucket::Near);
    assert_eq!(ScrollBucket::from_progress(0.32), ScrollBucket::Near);
    assert!(matches!(ScrollBucket::from_progress(0.5), ScrollBucket::Dolly(_)));
    assert!(matches!(ScrollBucket::from_progress(0.9), ScrollBucket::PullBack(_)));
    assert_eq!(ScrollBucket::from_progress(1.0), ScrollBucket::PullBack(1.0));
    assert_eq!(ScrollBucket::from_progress(f32::NAN), ScrollBucket::Near);
}

#[test]
fn near_bucket_follows_pointer() {
    let t = camera_target(0.1, Vec2::new(0.5, -0.25));
    assert!(approx(t.position, Vec3::new(1.0, 0.5, CAMERA_HOME_Z)));
    assert!(approx(t.look_at, Vec3::new(0.25, 0.125, 0.0)));
}

#[test]
fn dolly_bucket_moves_inward() {
    let start = camera_target(BUCKET_NEAR_END, Vec2::ZERO);
    let end = camera_target(BUCKET_DOLLY_END - 1e-4, Vec2::ZERO);
    assert!(end.position.z < start.position.z);
    assert!((start.position.z - CAMERA_HOME_Z).abs() < 1e-3);
    assert!((end.position.z - (CAMERA_HOME_Z - 3.0)).abs() < 1e-2);
}

#[test]
fn pull_back_offsets_aside_and_looks_at_origin() {
    let t = camera_target(1.0, Vec2::ZERO);
    assert!(approx(t.position, Vec3::new(3.0, 2.0, 6.0)));
    assert_eq!(t.look_at, Vec3::ZERO);
}

#[test]
fn nan_pointer_is_treated_as_centre() {
    let a = camera_target(0.2, Vec2::new(f32::NAN, 1.0));
    let b = camera_target(0.2, Vec2::ZERO);
    assert_eq!(a, b);
}

#[test]
fn ease_moves_a_fraction_of_the_gap() {
    let e = ease_toward(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.08);
    assert!(approx(e, Vec3::new(0.8, 0.0, 0.0)));
    assert_eq!(ease_toward(Vec3::ONE, Vec3::ZERO, 2.0), Vec3::ZERO);
}

#[test]
fn frame_factor_matches_per_frame_at_60hz() {
    assert!((frame_factor(0.08, DT) - 0.08).abs() < 1e-5);
    assert_eq!(frame_factor(0.08, 0.0), 0.0);
    // Two frames' worth of time compounds.
    let two = frame_factor(0.08, 2.0 * DT);
    assert!((two - (1.0 - 0.92f32 * 0.92)).abs() < 1e-5);
    assert!(frame_factor(0.08, 100.0) < 1.0);
}

#[test]
fn rig_eases_instead_of_cutting() {
    let mut rig = CameraRig::new(16.0 / 9.0);
    let target = camera_target(1.0, Vec2::ZERO).position;
    let first = rig.step(1.0, Vec2::ZERO, DT).eye;
    assert!(!approx(first, target));
    let mut last_gap = (first - target).length();
    for _ in 0..600 {
        let eye = rig.step(1.0, Vec2::ZERO, DT).eye;
        let gap = (eye - target).length();
        assert!(gap <= last_gap + 1e-6);
        last_gap = gap;
    }
    assert!(last_gap < 1e-3, "gap = {last_gap}");
}

#[test]
fn camera_matrices_are_finite() {
    let mut rig = CameraRig::new(1.5);
    rig.set_aspect(0.0);
    let cam = rig.step(0.5, Vec2::new(0.3, 0.3), DT);
    assert!(cam.view_proj().is_finite());
    assert!((cam.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
}
