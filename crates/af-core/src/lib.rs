/// Configuration, types, and shared structures for asciify.
///
/// This crate contains the shared types, ramp logic, and configuration
/// used across the asciify workspace.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::LuminanceLut;
pub use color::Rgb;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{FrameBuffer, Grid, PixelCell};
