//! Frequency ↔ pixel mapping on the logarithmic axis, plus the bin ↔
//! frequency conversions that pick which slice of the transform is visible.

use alloc::vec::Vec;

use micromath::F32Ext;

use crate::config::{AxisRange, TransformConfig};

/// Position of `freq` within `range` on the log axis, as a fraction of the
/// axis width. 0.0 at `min_hz`, 1.0 at `max_hz`, outside [0, 1] for
/// frequencies outside the range. Only defined for positive finite input;
/// the bin window in the renderer keeps 0 Hz out.
///
/// This is the one authoritative log mapping: pixel positions and the
/// rainbow hue are both derived from it.
pub fn log_position(freq: f32, range: AxisRange) -> f32 {
    let log_min = range.min_hz().log10();
    let log_max = range.max_hz().log10();
    (freq.log10() - log_min) / (log_max - log_min)
}

/// Horizontal pixel coordinate of `freq` on a surface `width_pixels` wide.
pub fn frequency_to_pixel(freq: f32, range: AxisRange, width_pixels: f32) -> f32 {
    width_pixels * log_position(freq, range)
}

/// Center frequency of a transform bin: `i * sample_rate / transform_size`.
pub fn bin_to_frequency(bin_index: usize, sample_rate: f32, transform_size: usize) -> f32 {
    bin_index as f32 * sample_rate / transform_size as f32
}

/// Nearest bin index for a frequency; inverse of [`bin_to_frequency`].
pub fn bin_index_for_frequency(freq: f32, sample_rate: f32, transform_size: usize) -> usize {
    (freq * transform_size as f32 / sample_rate).round() as usize
}

/// Center frequencies for every bin of one transform, computed once per
/// session so the draw loop never recomputes them.
pub fn bin_frequency_table(config: &TransformConfig) -> Vec<f32> {
    (0..config.bin_count())
        .map(|i| bin_to_frequency(i, config.sample_rate(), config.transform_size()))
        .collect()
}
