pub mod attractor;
pub mod blob;
pub mod constants;
pub mod error;
pub mod field;
pub mod goo;
pub mod pointer;
pub mod raster;
pub mod render;
pub mod scheduler;
pub mod solver;
pub mod spring;
pub mod surface;

pub use attractor::AttractorTracker;
pub use blob::Blob;
pub use constants::*;
pub use error::{InkError, Result};
pub use field::BlobField;
pub use goo::GooFilter;
pub use pointer::{PointerCell, PointerState};
pub use raster::PixelSurface;
pub use render::Renderer;
pub use scheduler::{FrameScheduler, ReseedPolicy, SimParams, Simulation};
pub use solver::{push_magnitude, repulsion, solve};
pub use spring::integrate;
pub use surface::{Rgba, Surface};
