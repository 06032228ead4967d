use super::camera::{frame_factor, CameraRig, ScrollBucket};
use super::constants::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::PI;

/// Instance data for one star or particle sprite.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Sparse shell of stars far behind everything else.
#[derive(Clone, Debug)]
pub struct StarField {
    pub points: Vec<PointVertex>,
}

impl StarField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let points = (0..count)
            .map(|_| {
                let radius = STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN;
                let theta = rng.gen::<f32>() * PI * 2.0;
                let phi = rng.gen::<f32>() * PI;
                PointVertex {
                    position: [
                        radius * phi.sin() * theta.cos(),
                        radius * phi.sin() * theta.sin(),
                        radius * phi.cos(),
                    ],
                    size: rng.gen::<f32>() * STAR_SIZE_MAX,
                    color: [1.0, 1.0, 1.0, 0.6],
                }
            })
            .collect();
        Self { points }
    }

    pub fn model(t_sec: f32, pointer: Vec2) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            glam::EulerRot::XYZ,
            pointer.y * STAR_POINTER_SPIN,
            t_sec * STAR_SPIN + pointer.x * STAR_POINTER_SPIN,
            0.0,
        ))
    }
}

/// Mid-range drifting particles.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub points: Vec<PointVertex>,
    frame: u64,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let points = (0..count)
            .map(|_| {
                let mut p = [0.0f32; 3];
                for c in &mut p {
                    *c = (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE;
                }
                let rgb = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
                PointVertex {
                    position: p,
                    size: rng.gen::<f32>() * PARTICLE_SIZE_MAX,
                    color: [rgb[0], rgb[1], rgb[2], 1.0],
                }
            })
            .collect();
        Self { points, frame: 0 }
    }

    /// Apply the wave perturbation on alternating frames only.
    /// Returns true when positions changed and need re-uploading.
    pub fn step(&mut self, t_sec: f32) -> bool {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % 2 == 0 {
            return false;
        }
        for p in &mut self.points {
            let [x, y, z] = p.position;
            p.position[1] = y + (t_sec * 0.5 + x * 0.1).sin() * PARTICLE_WAVE_STEP;
            p.position[0] = x + (t_sec * 0.3 + z * 0.1).cos() * PARTICLE_WAVE_STEP;
        }
        true
    }

    pub fn model(t_sec: f32, pointer: Vec2, progress: f32) -> Mat4 {
        let scale = 1.0 + progress * PARTICLE_SCROLL_SPREAD;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            Quat::from_euler(
                glam::EulerRot::XYZ,
                pointer.y * PARTICLE_POINTER_SPIN_X,
                t_sec * PARTICLE_SPIN + pointer.x * PARTICLE_POINTER_SPIN_Y,
                0.0,
            ),
            Vec3::ZERO,
        )
    }

    #[inline]
    pub fn opacity(progress: f32) -> f32 {
        0.9 - progress * 0.2
    }
}

/// Target scale and opacity of the focal body for a scroll progress.
pub fn focal_targets(progress: f32, clicked: bool) -> (f32, f32) {
    match ScrollBucket::from_progress(progress) {
        ScrollBucket::Near => (
            if clicked {
                FOCAL_CLICK_SCALE
            } else {
                FOCAL_BASE_SCALE
            },
            0.9,
        ),
        ScrollBucket::Dolly(p) => (
            FOCAL_BASE_SCALE - p * (FOCAL_BASE_SCALE - FOCAL_MID_SCALE),
            0.9 - p * 0.4,
        ),
        ScrollBucket::PullBack(a) => (
            FOCAL_MID_SCALE - a * (FOCAL_MID_SCALE - FOCAL_FAR_SCALE),
            0.5 - a * 0.5,
        ),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalPose {
    pub model: Mat4,
    pub opacity: f32,
}

/// The rotating focal body (authored asset or procedural sphere).
#[derive(Clone, Debug)]
pub struct FocalBody {
    scale: f32,
    click_until_sec: Option<f64>,
}

impl Default for FocalBody {
    fn default() -> Self {
        Self {
            scale: FOCAL_BASE_SCALE,
            click_until_sec: None,
        }
    }
}

impl FocalBody {
    pub fn pulse(&mut self, now_sec: f64) {
        self.click_until_sec = Some(now_sec + FOCAL_CLICK_PULSE_SEC);
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn step(&mut self, now_sec: f64, progress: f32, dt_sec: f32) -> FocalPose {
        let clicked = match self.click_until_sec {
            Some(until) if now_sec < until => true,
            Some(_) => {
                self.click_until_sec = None;
                false
            }
            None => false,
        };
        let (target_scale, opacity) = focal_targets(progress, clicked);
        let k = frame_factor(FOCAL_SCALE_SMOOTHING, dt_sec);
        self.scale += (target_scale - self.scale) * k;

        let t = now_sec as f32;
        let spin = progress * PI * 2.0 * FOCAL_SPIN_TURNS + t * FOCAL_IDLE_SPIN;
        let translation = Vec3::new(
            (progress * PI).sin() * FOCAL_DRIFT_AMP,
            (t * FOCAL_BOB_FREQ).sin() * FOCAL_BOB_AMP,
            FOCAL_Z,
        );
        FocalPose {
            model: Mat4::from_scale_rotation_translation(
                Vec3::splat(self.scale),
                Quat::from_rotation_y(spin),
                translation,
            ),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

/// Which rendering path the focal body uses.
///
/// The procedural path renders while the asset probe is in flight; the asset
/// path only activates after a successful probe and load. Failures are final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocalSource {
    #[default]
    Probing,
    Loading,
    Asset,
    Procedural,
}

impl FocalSource {
    pub fn probe_resolved(self, exists: bool) -> Self {
        match self {
            FocalSource::Probing if exists => FocalSource::Loading,
            FocalSource::Probing => FocalSource::Procedural,
            other => other,
        }
    }

    pub fn load_resolved(self, ok: bool) -> Self {
        match self {
            FocalSource::Loading if ok => FocalSource::Asset,
            FocalSource::Loading => FocalSource::Procedural,
            other => other,
        }
    }

    #[inline]
    pub fn uses_asset(self) -> bool {
        self == FocalSource::Asset
    }
}

/// Scroll progress the background follows. Only the home page drives the
/// scene; every other route holds it at the top-of-page pose.
#[inline]
pub fn scene_progress(on_home: bool, page_progress: f32) -> f32 {
    if on_home {
        page_progress
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneInput {
    pub now_sec: f64,
    pub dt_sec: f32,
    pub progress: f32,
    /// Signed pointer sample over the viewport.
    pub pointer: Vec2,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFrame {
    pub view: Mat4,
    pub proj: Mat4,
    pub eye: Vec3,
    pub star_model: Mat4,
    pub particle_model: Mat4,
    pub particle_opacity: f32,
    pub particles_dirty: bool,
    pub focal: FocalPose,
    pub use_asset: bool,
    pub time_sec: f32,
}

/// CPU side of the decorative background: layers, focal body and camera.
#[derive(Clone, Debug)]
pub struct BackgroundScene {
    pub stars: StarField,
    pub particles: ParticleField,
    pub focal: FocalBody,
    pub source: FocalSource,
    pub rig: CameraRig,
}

impl BackgroundScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, aspect: f32) -> Self {
        Self {
            stars: StarField::generate(rng, STAR_COUNT),
            particles: ParticleField::generate(rng, PARTICLE_COUNT),
            focal: FocalBody::default(),
            source: FocalSource::Probing,
            rig: CameraRig::new(aspect),
        }
    }

    pub fn tick(&mut self, input: SceneInput) -> SceneFrame {
        let t = input.now_sec as f32;
        let pointer = if input.pointer.is_finite() {
            input.pointer
        } else {
            Vec2::ZERO
        };
        let progress = if input.progress.is_finite() {
            input.progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let camera = self.rig.step(progress, pointer, input.dt_sec);
        let (view, proj) = (camera.view_matrix(), camera.projection_matrix());
        let eye = camera.eye;
        let particles_dirty = self.particles.step(t);
        SceneFrame {
            view,
            proj,
            eye,
            star_model: StarField::model(t, pointer),
            particle_model: ParticleField::model(t, pointer, progress),
            particle_opacity: ParticleField::opacity(progress),
            particles_dirty,
            focal: self.focal.step(input.now_sec, progress, input.dt_sec),
            use_asset: self.source.uses_asset(),
            time_sec: t,
        }
    }
}
