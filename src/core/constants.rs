// Tuning constants shared by the card stage, scroll tracking and the background scene.

// ---------------- Scroll / sections ----------------
// A section becomes active once this fraction of it is inside the viewport.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.5;
// Projects-section progress runs while its span crosses this fraction of the viewport.
pub const SECTION_PROGRESS_ANCHOR: f64 = 0.5;

// ---------------- Pointer ----------------
pub const POINTER_NEUTRAL_SIGNED: f32 = 0.0;
pub const POINTER_NEUTRAL_UNIT: f32 = 0.5;

// ---------------- Card stage ----------------
// Viewports at or below this width (CSS px) stack cards vertically.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

// Base tilt in degrees at the container edge (pointer offset of 0.5).
pub const TILT_GAIN_DEG: f32 = 20.0;
// Cards farther from the pointer tilt more: multiplier = 1 + distance * gain.
pub const TILT_DISTANCE_GAIN: f32 = 1.5;

pub const CARD_IDLE_SCALE: f32 = 0.85;
pub const CARD_SELECTED_SCALE: f32 = 1.0;
pub const CARD_SELECTED_Z_PX: f32 = 200.0;
pub const CARD_SELECTED_Z_INDEX: i32 = 9999;
pub const CARD_Z_INDEX_BASE: i32 = 300;
pub const CARD_Z_INDEX_STEP: i32 = 50;

// Idle float amplitudes (percent of container for position, degrees for rotation)
pub const FLOAT_AMPLITUDE_PCT: f32 = 0.8;
pub const FLOAT_SECONDARY_RATIO: f32 = 0.35;
pub const FLOAT_ROTATION_DEG: f32 = 1.5;

// Compact layout
pub const COMPACT_FADE_SEC: f64 = 0.3;

// Opacity phase below which cards stop accepting pointer events.
pub const PHASE_POINTER_MIN: f32 = 0.3;

// ---------------- Glow scheduler ----------------
pub const GLOW_INITIAL_DELAY_SEC: f64 = 4.0;
pub const GLOW_INTERVAL_SEC: f64 = 6.0;
pub const GLOW_DURATION_SEC: f64 = 5.0;

// ---------------- Camera ----------------
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_HOME_Z: f32 = 5.0;
pub const CAMERA_SMOOTHING: f32 = 0.08; // fraction of the remaining distance per frame

// Scroll buckets (near / dolly / pull-back)
pub const BUCKET_NEAR_END: f32 = 0.33;
pub const BUCKET_DOLLY_END: f32 = 0.66;

// ---------------- Focal body ----------------
pub const FOCAL_BASE_SCALE: f32 = 3.0;
pub const FOCAL_CLICK_SCALE: f32 = 3.5;
pub const FOCAL_MID_SCALE: f32 = 1.2;
pub const FOCAL_FAR_SCALE: f32 = 0.5;
pub const FOCAL_SCALE_SMOOTHING: f32 = 0.1;
pub const FOCAL_SPIN_TURNS: f32 = 3.0; // full turns across the whole page
pub const FOCAL_IDLE_SPIN: f32 = 0.08; // rad/s
pub const FOCAL_BOB_FREQ: f32 = 0.3;
pub const FOCAL_BOB_AMP: f32 = 0.3;
pub const FOCAL_DRIFT_AMP: f32 = 0.8;
pub const FOCAL_Z: f32 = -2.0;
pub const FOCAL_CLICK_PULSE_SEC: f64 = 0.5;
pub const FOCAL_SPHERE_SEGMENTS: u32 = 64;

// ---------------- Ambient layers ----------------
pub const STAR_COUNT: usize = 1000;
pub const STAR_RADIUS_MIN: f32 = 60.0;
pub const STAR_RADIUS_SPAN: f32 = 40.0;
pub const STAR_SIZE_MAX: f32 = 1.5;
pub const STAR_SPIN: f32 = 0.01;
pub const STAR_POINTER_SPIN: f32 = 0.05;

pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_CUBE: f32 = 50.0;
pub const PARTICLE_SIZE_MAX: f32 = 2.5;
pub const PARTICLE_SPIN: f32 = 0.03;
pub const PARTICLE_POINTER_SPIN_Y: f32 = 0.3;
pub const PARTICLE_POINTER_SPIN_X: f32 = 0.15;
pub const PARTICLE_SCROLL_SPREAD: f32 = 0.8;
pub const PARTICLE_WAVE_STEP: f32 = 0.002;
pub const PARTICLE_PALETTE: [[f32; 3]; 4] = [
    [1.0, 1.0, 1.0], // white
    [0.5, 0.7, 1.0], // blue
    [1.0, 0.8, 0.6], // orange
    [0.9, 0.5, 0.8], // purple
];

// Clear color of the background canvas (#050510)
pub const SCENE_CLEAR_RGB: [f64; 3] = [0.0196, 0.0196, 0.0627];
