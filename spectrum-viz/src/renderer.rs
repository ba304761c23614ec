//! The per-frame draw cycle: magnitude frame in, filled rectangles out.

use alloc::vec::Vec;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use micromath::F32Ext;

#[cfg(feature = "logging")]
use defmt::warn;
#[cfg(feature = "logging")]
use defmt_rtt as _;

use crate::axis::{bin_frequency_table, bin_index_for_frequency, frequency_to_pixel};
use crate::color_scheme::{color_for, ColorScheme};
use crate::config::{AxisRange, TransformConfig, ViewportGeometry};
use crate::session::FrameSettings;
use crate::types::Bar;

const BACKGROUND: Rgb888 = Rgb888::BLACK;

/// Draws one magnitude frame as a bar chart on the logarithmic axis.
///
/// Construction fixes the transform and the visible frequency window and
/// caches the per-bin frequency table plus the in-range bin window; both are
/// valid for as long as the capture session keeps its transform size. The
/// renderer carries no other state between frames, so every call to
/// [`draw_frame`](Self::draw_frame) reflects the geometry and scheme it is
/// handed.
pub struct SpectrumRenderer {
    config: TransformConfig,
    range: AxisRange,
    bin_freqs: Vec<f32>,
    first_bin: usize,
    last_bin: usize,
}

impl SpectrumRenderer {
    pub fn new(config: TransformConfig, range: AxisRange) -> Self {
        let bin_freqs = bin_frequency_table(&config);
        // Bin 0 sits at 0 Hz, which the log axis cannot place.
        let first_bin =
            bin_index_for_frequency(range.min_hz(), config.sample_rate(), config.transform_size())
                .max(1);
        // A range reaching past Nyquist must not index past the frame.
        let last_bin =
            bin_index_for_frequency(range.max_hz(), config.sample_rate(), config.transform_size())
                .min(config.bin_count().saturating_sub(1));
        Self {
            config,
            range,
            bin_freqs,
            first_bin,
            last_bin,
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// Bars for one frame, left to right in bin order. `samples` must hold
    /// one normalized magnitude per bin of the configured transform;
    /// [`draw_frame`](Self::draw_frame) checks that before calling in here.
    pub fn layout_bars(
        &self,
        samples: &[f32],
        geometry: ViewportGeometry,
        scheme: ColorScheme,
    ) -> Vec<Bar> {
        let width_pixels = geometry.width as f32;
        let mut bars = Vec::with_capacity(self.last_bin.saturating_sub(self.first_bin) + 1);
        for i in self.first_bin..=self.last_bin {
            let freq = self.bin_freqs[i];
            // The final in-range bin has no right-hand neighbour to anchor
            // its edge, so the edge is extrapolated a tenth past it.
            let next_freq = if i == self.last_bin {
                freq * 1.1
            } else {
                self.bin_freqs[i + 1]
            };
            let x = frequency_to_pixel(freq, self.range, width_pixels).floor() as i32;
            let next_x = frequency_to_pixel(next_freq, self.range, width_pixels).floor() as i32;
            let value = samples[i];
            let height = (value * geometry.height as f32) as u32;
            bars.push(Bar {
                left: x,
                top: geometry.height as i32 - height as i32,
                width: (next_x - x).max(1) as u32,
                height,
                color: color_for(value, scheme, freq, self.range),
            });
        }
        bars
    }

    /// Clears the surface and draws one frame.
    ///
    /// A frame with the wrong number of bins is dropped without touching the
    /// surface, so whatever was drawn last stays visible. A zero-area
    /// viewport skips the frame the same way. Only surface errors propagate;
    /// neither skip ends the refresh loop.
    pub fn draw_frame<D>(
        &self,
        target: &mut D,
        samples: &[f32],
        settings: &FrameSettings,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        if settings.geometry.is_degenerate() {
            return Ok(());
        }
        if samples.len() != self.config.bin_count() {
            #[cfg(feature = "logging")]
            warn!(
                "magnitude frame has {} bins, expected {}; frame dropped",
                samples.len(),
                self.config.bin_count()
            );
            return Ok(());
        }

        target.clear(BACKGROUND)?;
        for bar in self.layout_bars(samples, settings.geometry, settings.scheme) {
            Rectangle::new(Point::new(bar.left, bar.top), Size::new(bar.width, bar.height))
                .into_styled(PrimitiveStyle::with_fill(bar.color))
                .draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn renderer(sample_rate: f32, transform_size: usize) -> SpectrumRenderer {
        let config = TransformConfig::new(sample_rate, transform_size).unwrap();
        SpectrumRenderer::new(config, AxisRange::AUDIBLE)
    }

    #[test]
    fn every_bar_is_at_least_one_pixel_wide_under_heavy_compression() {
        // 48 kHz / 2048 on a 64 px panel: neighbouring high bins collapse
        // onto the same column.
        let r = renderer(48_000.0, 2048);
        let samples = vec![0.5; 1024];
        let bars = r.layout_bars(
            &samples,
            ViewportGeometry::new(64, 64),
            ColorScheme::Rainbow,
        );
        assert!(!bars.is_empty());
        assert!(bars.iter().all(|bar| bar.width >= 1));
        // compression actually happened, the clamp was exercised
        assert!(bars
            .windows(2)
            .any(|pair| pair[1].left == pair[0].left));
    }

    #[test]
    fn bars_are_emitted_left_to_right() {
        let r = renderer(44_100.0, 2048);
        let samples = vec![0.3; 1024];
        let bars = r.layout_bars(
            &samples,
            ViewportGeometry::new(1000, 200),
            ColorScheme::Rainbow,
        );
        assert!(bars.windows(2).all(|pair| pair[1].left >= pair[0].left));
    }

    #[test]
    fn the_zero_hz_bin_is_never_drawn() {
        // 96 kHz / 2048: 20 Hz rounds to bin 0, which must be stepped past.
        let r = renderer(96_000.0, 2048);
        assert_eq!(r.first_bin, 1);
        let samples = vec![0.5; 1024];
        let bars = r.layout_bars(
            &samples,
            ViewportGeometry::new(1000, 100),
            ColorScheme::Rainbow,
        );
        // bins 1 ..= round(20000 / 46.875) = 427
        assert_eq!(bars.len(), 427);
        assert!(bars[0].left > 0);
    }

    #[test]
    fn a_range_past_nyquist_stays_inside_the_frame() {
        // 22.05 kHz sampling: the 20 kHz axis top is past Nyquist.
        let r = renderer(22_050.0, 2048);
        assert_eq!(r.last_bin, 1023);
        let samples = vec![0.2; 1024];
        let bars = r.layout_bars(
            &samples,
            ViewportGeometry::new(800, 100),
            ColorScheme::Rainbow,
        );
        // bins 2 ..= 1023; 20 Hz rounds up to bin 2 at this rate
        assert_eq!(bars.len(), 1022);
    }

    #[test]
    fn the_final_bar_gets_a_synthetic_right_edge() {
        let r = renderer(48_000.0, 2048);
        let samples = vec![0.5; 1024];
        let bars = r.layout_bars(
            &samples,
            ViewportGeometry::new(1000, 100),
            ColorScheme::Rainbow,
        );
        // freq * 1.1 spans log10(1.1) of a 3-decade, 1000 px axis: ~14 px
        let last = bars.last().unwrap();
        assert!((10..=17).contains(&(last.width as i32)), "width = {}", last.width);
    }

    #[test]
    fn magnitude_scales_bar_height_from_the_bottom_edge() {
        let r = renderer(44_100.0, 2048);
        let mut samples = vec![0.0; 1024];
        samples[100] = 0.25;
        let geometry = ViewportGeometry::new(1000, 100);
        let bars = r.layout_bars(&samples, geometry, ColorScheme::Rainbow);
        let bar = bars[100 - 1]; // first bar is bin 1
        assert_eq!(bar.height, 25);
        assert_eq!(bar.top, 75);
        // silent bins still occupy their slot, just with no height
        assert_eq!(bars[0].height, 0);
        assert_eq!(bars[0].top, 100);
    }
}
