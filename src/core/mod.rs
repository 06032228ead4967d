pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod glow;
pub mod lightbox;
pub mod model;
pub mod pointer;
pub mod region;
pub mod route;
pub mod scene;
pub mod scroll;
pub mod stage;
pub mod templates;
pub mod text;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static BODY_WGSL: &str = include_str!("../../shaders/body.wgsl");

pub static CATALOG_JSON: &str = include_str!("../../assets/projects.json");
