//! Platform-agnostic core - shared between the egui viewer and the CLI

pub mod config;
pub mod error;
pub mod light;
pub mod point;
pub mod raster;
pub mod render;
pub mod sampler;
pub mod scene;

pub use config::RenderConfig;
pub use error::{Result, SphereError};
pub use light::{shade_for_arc, LightDirection, Shade};
pub use point::{depth_key, sort_by_depth, Point3D, ScenePoint, ScreenPoint};
pub use raster::Raster;
pub use render::{render, Canvas, FrameStats};
pub use sampler::{generate, golden_angle, random_phase};
pub use scene::{disc_diameter, Scene, MIN_DISC_DIAMETER};
