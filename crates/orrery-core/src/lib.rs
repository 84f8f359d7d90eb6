//! Orrery Core - Orbital motion model and procedural scene layout
//!
//! This crate provides the engine-independent logic for the Orrery viewer:
//! - Closed-form circular orbit motion for near-object markers
//! - Procedural placement (marker randomization, star field sampling)
//! - Guide curve tessellation
//! - Scene configuration types and validation

pub mod blueprint;
pub mod config;
pub mod orbit;
pub mod starfield;

pub use blueprint::{MarkerBlueprint, SceneBlueprint};
pub use config::{BodyConfig, ConfigError, MarkerConfig, SceneConfig, StarConfig, TextureConfig};
pub use orbit::{guide_points, OrbitalPath};
