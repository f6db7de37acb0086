//! Error types for the ink-field core.
//!
//! The simulation itself is infallible; only the software surface and the
//! goo filter validate their construction arguments.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InkError {
    /// Width or height was zero when creating a pixel surface.
    #[error("invalid surface dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Goo filter parameters outside their usable range.
    #[error("invalid goo filter: {0}")]
    InvalidFilter(String),
}

pub type Result<T> = std::result::Result<T, InkError>;
