//! Bar-per-bin audio spectrum rendering on a logarithmic frequency axis.
//!
//! The crate consumes pre-computed, normalized magnitude frames and draws
//! them as a variable-width bar chart into any `DrawTarget<Color = Rgb888>`,
//! once per display refresh. Capture, gain and the pixel surface itself live
//! behind the seams in [`session`].
#![no_std]
extern crate alloc;

pub mod axis;
pub mod color_scheme;
pub mod config;
pub mod renderer;
pub mod session;
pub mod types;

pub use axis::{bin_frequency_table, bin_index_for_frequency, bin_to_frequency, frequency_to_pixel, log_position};
pub use color_scheme::{color_for, rainbow_hue, Channel, ColorScheme};
pub use config::{AxisRange, ConfigError, TransformConfig, ViewportGeometry};
pub use renderer::SpectrumRenderer;
pub use session::{FrameSettings, MagnitudeSource, SpectrumSession};
pub use types::Bar;
