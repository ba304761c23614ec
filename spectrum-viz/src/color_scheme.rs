//! Magnitude + frequency → color mapping.

use embedded_graphics::pixelcolor::Rgb888;

use micromath::F32Ext;

use crate::axis::log_position;
use crate::config::AxisRange;

/// Rainbow hue sweeps 0..300 degrees across the axis; stopping short of 360
/// keeps red from appearing at both ends.
const RAINBOW_HUE_SPAN: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Hue from the bin's position on the log axis, lightness from magnitude.
    Rainbow,
    /// Magnitude as intensity in one channel, the others dark.
    SingleChannel(Channel),
}

/// Hue in degrees for a frequency under the rainbow scheme, in [0, 300]
/// for in-range frequencies.
pub fn rainbow_hue(freq: f32, range: AxisRange) -> f32 {
    RAINBOW_HUE_SPAN * log_position(freq, range)
}

/// Color of one bar. Pure: identical inputs always produce the same color.
/// `value` is the bin's normalized magnitude in [0, 1].
pub fn color_for(value: f32, scheme: ColorScheme, freq: f32, range: AxisRange) -> Rgb888 {
    match scheme {
        ColorScheme::Rainbow => {
            let hue = rainbow_hue(freq, range);
            let lightness = 0.5 + value * 0.5;
            hsl_to_rgb(hue, 1.0, lightness)
        }
        ColorScheme::SingleChannel(channel) => {
            let intensity = (value * 255.0) as u8;
            match channel {
                Channel::Red => Rgb888::new(intensity, 0, 0),
                Channel::Green => Rgb888::new(0, intensity, 0),
                Channel::Blue => Rgb888::new(0, 0, intensity),
            }
        }
    }
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb888 {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = if h < 1.0 {
        (c, x, 0.0)
    } else if h < 2.0 {
        (x, c, 0.0)
    } else if h < 3.0 {
        (0.0, c, x)
    } else if h < 4.0 {
        (0.0, x, c)
    } else if h < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = lightness - c / 2.0;
    Rgb888::new(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
