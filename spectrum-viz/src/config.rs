use core::fmt;

/// Spectral transform parameters, fixed for the lifetime of a capture
/// session. The bin count and the cached per-bin frequency table both key
/// off this, so a new config means a new renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    sample_rate: f32,
    transform_size: usize,
}

impl TransformConfig {
    pub fn new(sample_rate: f32, transform_size: usize) -> Result<Self, ConfigError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ConfigError::NonPositiveSampleRate);
        }
        if !transform_size.is_power_of_two() {
            return Err(ConfigError::TransformSizeNotPowerOfTwo { transform_size });
        }
        Ok(Self {
            sample_rate,
            transform_size,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn transform_size(&self) -> usize {
        self.transform_size
    }

    /// Number of magnitude bins per frame.
    pub fn bin_count(&self) -> usize {
        self.transform_size / 2
    }
}

/// The frequency window shown on the logarithmic axis. Both bounds must be
/// positive, so the window is always inside the domain of `log10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min_hz: f32,
    max_hz: f32,
}

impl AxisRange {
    /// The audible window, 20 Hz to 20 kHz.
    pub const AUDIBLE: AxisRange = AxisRange {
        min_hz: 20.0,
        max_hz: 20_000.0,
    };

    pub fn new(min_hz: f32, max_hz: f32) -> Result<Self, ConfigError> {
        if !(min_hz.is_finite() && max_hz.is_finite() && min_hz > 0.0 && min_hz < max_hz) {
            return Err(ConfigError::InvalidAxisRange { min_hz, max_hz });
        }
        Ok(Self { min_hz, max_hz })
    }

    pub fn min_hz(&self) -> f32 {
        self.min_hz
    }

    pub fn max_hz(&self) -> f32 {
        self.max_hz
    }
}

/// Pixel dimensions of the drawing surface, re-read before every frame so a
/// resize shows up on the very next draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub width: u32,
    pub height: u32,
}

impl ViewportGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport has nothing to draw into.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Session construction failures. These are fatal before the draw loop
/// starts; nothing in the draw path produces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveSampleRate,
    TransformSizeNotPowerOfTwo { transform_size: usize },
    InvalidAxisRange { min_hz: f32, max_hz: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveSampleRate => {
                write!(f, "sample rate must be positive and finite")
            }
            ConfigError::TransformSizeNotPowerOfTwo { transform_size } => {
                write!(
                    f,
                    "transform size must be a positive power of two, got {}",
                    transform_size
                )
            }
            ConfigError::InvalidAxisRange { min_hz, max_hz } => {
                write!(
                    f,
                    "axis range must satisfy 0 < min < max, got {} Hz .. {} Hz",
                    min_hz, max_hz
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}
