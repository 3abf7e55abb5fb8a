// src/config/mod.rs

//! Optional TOML configuration.
//!
//! - [`model`] holds the deserialized file shape.
//! - [`loader`] reads it from disk.
//! - [`validate`] merges file values with CLI values into a `LaunchPlan`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, parse_str};
pub use model::{ConfigFile, LaunchSection};
pub use validate::resolve_plan;
