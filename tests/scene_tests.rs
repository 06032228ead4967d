// Host-side tests for the background scene simulation.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use core::constants::*;
use core::scene::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn input(now_sec: f64, progress: f32) -> SceneInput {
    SceneInput {
        now_sec,
        dt_sec: 1.0 / 60.0,
        progress,
        pointer: Vec2::ZERO,
    }
}

#[test]
fn layer_budgets_are_fixed() {
    let mut rng = StdRng::seed_from_u64(1);
    let scene = BackgroundScene::new(&mut rng, 1.6);
    assert_eq!(scene.stars.points.len(), STAR_COUNT);
    assert_eq!(scene.particles.points.len(), PARTICLE_COUNT);
}

#[test]
fn stars_lie_on_the_shell() {
    let mut rng = StdRng::seed_from_u64(2);
    let stars = StarField::generate(&mut rng, 500);
    for s in &stars.points {
        let r = Vec3::from(s.position).length();
        assert!(r >= STAR_RADIUS_MIN - 1e-2 && r <= STAR_RADIUS_MIN + STAR_RADIUS_SPAN + 1e-2);
        assert!(s.size >= 0.0 && s.size <= STAR_SIZE_MAX);
    }
}

#[test]
fn particles_fill_the_cube_with_palette_colours() {
    let mut rng = StdRng::seed_from_u64(3);
    let field = ParticleField::generate(&mut rng, 800);
    let half = PARTICLE_CUBE / 2.0;
    for p in &field.points {
        assert!(p.position.iter().all(|c| c.abs() <= half));
        let rgb = [p.color[0], p.color[1], p.color[2]];
        assert!(PARTICLE_PALETTE.contains(&rgb));
    }
}

#[test]
fn particles_move_on_alternating_frames_only() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = ParticleField::generate(&mut rng, 50);
    let before = field.points.clone();
    assert!(field.step(1.0));
    assert_ne!(field.points, before);
    let after_first = field.points.clone();
    assert!(!field.step(1.1));
    assert_eq!(field.points, after_first);
    assert!(field.step(1.2));
}

#[test]
fn wave_step_is_small() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::generate(&mut rng, 50);
    let before = field.points.clone();
    field.step(3.0);
    for (a, b) in before.iter().zip(&field.points) {
        let d = Vec3::from(a.position).distance(Vec3::from(b.position));
        assert!(d <= PARTICLE_WAVE_STEP * 1.5);
    }
}

#[test]
fn particle_spread_and_opacity_follow_progress() {
    assert!((ParticleField::opacity(0.0) - 0.9).abs() < 1e-6);
    assert!((ParticleField::opacity(1.0) - 0.7).abs() < 1e-6);
    let m = ParticleField::model(0.0, Vec2::ZERO, 1.0);
    let (scale, _, _) = m.to_scale_rotation_translation();
    assert!((scale.x - 1.8).abs() < 1e-4);
}

#[test]
fn focal_targets_by_bucket() {
    assert_eq!(focal_targets(0.1, false), (3.0, 0.9));
    assert_eq!(focal_targets(0.1, true), (3.5, 0.9));
    let (s, o) = focal_targets(1.0, false);
    assert!((s - 0.5).abs() < 1e-5);
    assert!(o.abs() < 1e-5);
    let (mid_s, mid_o) = focal_targets(0.5, false);
    assert!(mid_s < 3.0 && mid_s > 1.2);
    assert!(mid_o < 0.9 && mid_o > 0.5);
}

#[test]
fn click_pulse_expires() {
    let mut body = FocalBody::default();
    body.pulse(1.0);
    for i in 0..20 {
        body.step(1.0 + i as f64 * 0.02, 0.0, 1.0 / 60.0);
    }
    assert!(body.scale() > FOCAL_BASE_SCALE);
    let mut t = 1.6;
    for _ in 0..600 {
        body.step(t, 0.0, 1.0 / 60.0);
        t += 1.0 / 60.0;
    }
    assert!((body.scale() - FOCAL_BASE_SCALE).abs() < 1e-3);
}

#[test]
fn focal_scale_eases_toward_target() {
    let mut body = FocalBody::default();
    let first = body.step(0.0, 1.0, 1.0 / 60.0);
    assert!(body.scale() < FOCAL_BASE_SCALE && body.scale() > FOCAL_FAR_SCALE);
    assert!(first.opacity.abs() < 1e-6);
}

#[test]
fn focal_spin_tracks_progress() {
    let mut a = FocalBody::default();
    let mut b = FocalBody::default();
    let pa = a.step(0.0, 0.0, 0.0);
    let pb = b.step(0.0, 0.25, 0.0);
    let (_, ra, _) = pa.model.to_scale_rotation_translation();
    let (_, rb, _) = pb.model.to_scale_rotation_translation();
    assert!(ra.angle_between(rb) > 0.1);
}

#[test]
fn source_transitions() {
    let probing = FocalSource::default();
    assert_eq!(probing, FocalSource::Probing);
    assert!(!probing.uses_asset());
    assert_eq!(probing.probe_resolved(false), FocalSource::Procedural);
    let loading = probing.probe_resolved(true);
    assert_eq!(loading, FocalSource::Loading);
    assert!(!loading.uses_asset());
    assert_eq!(loading.load_resolved(false), FocalSource::Procedural);
    assert!(loading.load_resolved(true).uses_asset());
    // Failures are final.
    assert_eq!(
        FocalSource::Procedural.probe_resolved(true),
        FocalSource::Procedural
    );
    assert_eq!(FocalSource::Procedural.load_resolved(true), FocalSource::Procedural);
}

#[test]
fn procedural_path_renders_while_probing() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut scene = BackgroundScene::new(&mut rng, 1.0);
    let frame = scene.tick(input(0.5, 0.0));
    assert!(!frame.use_asset);
    assert!(frame.focal.opacity > 0.0);
    scene.source = scene.source.probe_resolved(false);
    assert!(!scene.tick(input(0.6, 0.0)).use_asset);
}

#[test]
fn tick_sanitises_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut scene = BackgroundScene::new(&mut rng, 1.0);
    let frame = scene.tick(SceneInput {
        now_sec: 2.0,
        dt_sec: 1.0 / 60.0,
        progress: f32::NAN,
        pointer: Vec2::new(f32::INFINITY, 0.0),
    });
    assert!(frame.view.is_finite());
    assert!(frame.proj.is_finite());
    assert!(frame.star_model.is_finite());
    assert!(frame.particle_model.is_finite());
    assert!(frame.focal.model.is_finite());
}

#[test]
fn particle_upload_flag_alternates() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut scene = BackgroundScene::new(&mut rng, 1.0);
    let flags: Vec<bool> = (0..6)
        .map(|i| scene.tick(input(i as f64 / 60.0, 0.3)).particles_dirty)
        .collect();
    assert_eq!(flags, vec![true, false, true, false, true, false]);
}

#[test]
fn only_home_scroll_drives_the_scene() {
    assert_eq!(scene_progress(true, 0.7), 0.7);
    assert_eq!(scene_progress(false, 0.7), 0.0);
    assert_eq!(scene_progress(false, 1.0), 0.0);
}

#[test]
fn off_home_pages_keep_the_resting_pose() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut resting = BackgroundScene::new(&mut rng, 1.0);
    let mut rng = StdRng::seed_from_u64(9);
    let mut scrolled = BackgroundScene::new(&mut rng, 1.0);
    let a = resting.tick(input(1.0, 0.0));
    let b = scrolled.tick(input(1.0, scene_progress(false, 0.9)));
    assert_eq!(a.particle_opacity, b.particle_opacity);
    assert_eq!(a.eye, b.eye);
}
