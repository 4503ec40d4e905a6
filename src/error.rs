//! Error types for mesh configuration and frame output.

use thiserror::Error;

/// Rejected surface mesh configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshConfigError {
    /// A segment count of zero leaves no cells to triangulate
    #[error("{axis} segment count must be at least 1, got {value}")]
    ZeroSegments { axis: &'static str, value: u32 },

    /// Plane extent must be positive and finite
    #[error("{axis} extent must be positive and finite, got {value}")]
    InvalidExtent { axis: &'static str, value: f32 },

    /// Jitter range must be non-negative and finite
    #[error("height jitter range must be non-negative and finite, got {0}")]
    InvalidJitter(f32),

    /// Jitter must stay below the grid spacing so cells cannot fold over
    #[error("height jitter range {range} must be smaller than the cell size {cell_size}")]
    JitterExceedsCell { range: f32, cell_size: f32 },

    /// Vertex count does not fit a u32 index buffer
    #[error("{width_segments}x{height_segments} segments exceed the u32 index range")]
    TooManyVertices {
        width_segments: u32,
        height_segments: u32,
    },
}

/// Rejected render or recording configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderConfigError {
    #[error("image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },

    #[error("recording frame rate must be at least 1 fps")]
    ZeroFps,

    #[error("recording duration must be non-negative and finite, got {0}")]
    InvalidDuration(f32),
}

/// Errors raised by the preview host (rendering and recording)
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid mesh configuration: {0}")]
    Config(#[from] MeshConfigError),

    #[error("Invalid render configuration: {0}")]
    Render(#[from] RenderConfigError),

    #[error("Pixel buffer does not match a {width}x{height} image")]
    PixelBuffer { width: u32, height: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for host-side operations
pub type Result<T> = std::result::Result<T, Error>;
