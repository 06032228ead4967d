use super::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_HOME_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Scroll bucket driving the camera and the focal body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollBucket {
    /// `p` in `[0, 1/3)`.
    Near,
    /// Local progress through the middle third.
    Dolly(f32),
    /// Local progress through the last third.
    PullBack(f32),
}

impl ScrollBucket {
    pub fn from_progress(progress: f32) -> Self {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if p < BUCKET_NEAR_END {
            ScrollBucket::Near
        } else if p < BUCKET_DOLLY_END {
            ScrollBucket::Dolly((p - BUCKET_NEAR_END) / (BUCKET_DOLLY_END - BUCKET_NEAR_END))
        } else {
            ScrollBucket::PullBack(((p - BUCKET_DOLLY_END) / (1.0 - BUCKET_DOLLY_END)).min(1.0))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Target position/look-at for a scroll progress and a signed pointer sample.
pub fn camera_target(progress: f32, pointer: Vec2) -> CameraTarget {
    let m = if pointer.is_finite() { pointer } else { Vec2::ZERO };
    match ScrollBucket::from_progress(progress) {
        ScrollBucket::Near => CameraTarget {
            position: Vec3::new(m.x * 2.0, -m.y * 2.0, CAMERA_HOME_Z),
            look_at: Vec3::new(m.x * 0.5, -m.y * 0.5, 0.0),
        },
        ScrollBucket::Dolly(p) => CameraTarget {
            position: Vec3::new(m.x, -m.y, CAMERA_HOME_Z - p * 3.0),
            look_at: Vec3::new(m.x * 0.3, -m.y * 0.3, 0.0),
        },
        ScrollBucket::PullBack(a) => CameraTarget {
            position: Vec3::new(3.0 * a + m.x * 0.5, 2.0 * a - m.y * 0.5, 2.0 + a * 4.0),
            look_at: Vec3::ZERO,
        },
    }
}

/// Exponential approach: move `factor` of the remaining distance.
#[inline]
pub fn ease_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// Convert a per-frame (60 Hz) smoothing factor into one for `dt_sec`.
#[inline]
pub fn frame_factor(per_frame: f32, dt_sec: f32) -> f32 {
    let frames = (dt_sec.max(0.0) * 60.0).min(30.0);
    1.0 - (1.0 - per_frame.clamp(0.0, 1.0)).powf(frames)
}

/// Camera that eases toward the scroll/pointer target every frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub camera: Camera,
    smoothing: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera::new(aspect),
            smoothing: CAMERA_SMOOTHING,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    pub fn step(&mut self, progress: f32, pointer: Vec2, dt_sec: f32) -> &Camera {
        let target = camera_target(progress, pointer);
        let k = frame_factor(self.smoothing, dt_sec);
        self.camera.eye = ease_toward(self.camera.eye, target.position, k);
        // Look-at is applied directly; only the eye is smoothed.
        self.camera.target = target.look_at;
        &self.camera
    }
}
