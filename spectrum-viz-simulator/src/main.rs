//! Desktop host for the spectrum renderer: a simulator window standing in
//! for the raster surface, and a synthetic magnitude provider standing in
//! for the capture chain. R/G/B pick a single-channel scheme, Space the
//! rainbow.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use lazy_static::lazy_static;
use spectrum_viz::{
    bin_frequency_table, frequency_to_pixel, AxisRange, Channel, ColorScheme, FrameSettings,
    MagnitudeSource, SpectrumRenderer, SpectrumSession, TransformConfig, ViewportGeometry,
};
use std::{error::Error, thread, time::Duration};

pub const WIDTH: u32 = 320;
pub const HEIGHT: u32 = 192;
pub const LABEL_STRIP: u32 = 12;
pub const FRAME_DELAY_MS: u64 = 16;

pub const SAMPLE_RATE_HZ: f32 = 44_100.0;
pub const TRANSFORM_SIZE: usize = 2048;

const LABEL_COLOR: Rgb888 = Rgb888::new(160, 160, 160);

const LABEL_POINTS: [(f32, &str); 10] = [
    (20.0, "20"),
    (50.0, "50"),
    (100.0, "100"),
    (200.0, "200"),
    (500.0, "500"),
    (1000.0, "1k"),
    (2000.0, "2k"),
    (5000.0, "5k"),
    (10_000.0, "10k"),
    (20_000.0, "20k"),
];

lazy_static! {
    static ref LABEL_CHAR_STYLE: MonoTextStyle<'static, Rgb888> =
        MonoTextStyle::new(&FONT_6X10, LABEL_COLOR);
    static ref LABEL_TEXT_STYLE: TextStyle = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
}

/// Synthetic stand-in for the capture chain: a spectral peak sweeping the
/// log axis over a faint shimmering floor, regenerated on every poll.
struct SweepSource {
    frame: Vec<f32>,
    bin_freqs: Vec<f32>,
    tick: u32,
}

impl SweepSource {
    fn new(config: &TransformConfig) -> Self {
        Self {
            frame: vec![0.0; config.bin_count()],
            bin_freqs: bin_frequency_table(config),
            tick: 0,
        }
    }
}

impl MagnitudeSource for SweepSource {
    fn current_frame(&mut self) -> &[f32] {
        let t = self.tick as f32 * (FRAME_DELAY_MS as f32 / 1000.0);
        // sweep the peak 20 Hz .. 20 kHz and back
        let sweep = 0.5 * (1.0 + (t * 0.4).sin());
        let center_log = (20.0 * 1000.0f32.powf(sweep)).log10();
        for (i, value) in self.frame.iter_mut().enumerate() {
            let freq = self.bin_freqs[i];
            if freq <= 0.0 {
                *value = 0.0;
                continue;
            }
            let offset = freq.log10() - center_log;
            let peak = (-offset * offset * 18.0).exp();
            let shimmer = 0.04 * (1.0 + (t * 3.0 + i as f32 * 0.13).sin());
            *value = (0.92 * peak + shimmer).min(1.0);
        }
        self.tick = self.tick.wrapping_add(1);
        &self.frame
    }
}

fn draw_frequency_labels(display: &mut SimulatorDisplay<Rgb888>) -> Result<(), Box<dyn Error>> {
    let baseline = (HEIGHT - LABEL_STRIP) as i32 + 2;
    for (freq, text) in LABEL_POINTS {
        let x = frequency_to_pixel(freq, AxisRange::AUDIBLE, WIDTH as f32) as i32;
        Text::with_text_style(
            text,
            Point::new(x, baseline),
            *LABEL_CHAR_STYLE,
            *LABEL_TEXT_STYLE,
        )
        .draw(display)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = TransformConfig::new(SAMPLE_RATE_HZ, TRANSFORM_SIZE)?;
    let renderer = SpectrumRenderer::new(config, AxisRange::AUDIBLE);
    let source = SweepSource::new(&config);
    let mut session = SpectrumSession::new(renderer, source);

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(WIDTH, HEIGHT));
    let mut window = Window::new(
        "Spectrum Visualizer",
        &OutputSettingsBuilder::new().scale(3).build(),
    );

    let mut scheme = ColorScheme::Rainbow;

    'running: loop {
        // fresh snapshot every tick; scheme edits land on the next frame
        let settings = FrameSettings {
            geometry: ViewportGeometry::new(WIDTH, HEIGHT - LABEL_STRIP),
            scheme,
        };

        session.render_tick(&mut display, &settings)?;
        draw_frequency_labels(&mut display)?;
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    scheme = match keycode {
                        Keycode::R => ColorScheme::SingleChannel(Channel::Red),
                        Keycode::G => ColorScheme::SingleChannel(Channel::Green),
                        Keycode::B => ColorScheme::SingleChannel(Channel::Blue),
                        Keycode::Space => ColorScheme::Rainbow,
                        _ => scheme,
                    }
                }
                _ => {}
            }
        }

        thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
    }

    Ok(())
}
