//! Seashade library - procedural ocean surface shading

pub mod camera;
pub mod cli;
pub mod error;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod rendering;

pub use error::{Error, MeshConfigError, RenderConfigError, Result};
