//! Seams to the world outside the core: the magnitude provider, the
//! per-frame settings snapshot, and the session object the refresh loop
//! drives.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888};

use crate::color_scheme::ColorScheme;
use crate::config::ViewportGeometry;
use crate::renderer::SpectrumRenderer;

/// Supplies the most recent normalized magnitude frame, one value in [0, 1]
/// per bin of the session's transform.
///
/// Implementations must not block: a tick with no fresh data returns
/// whatever was current last, and the frame is only borrowed for the
/// duration of one draw.
pub trait MagnitudeSource {
    fn current_frame(&mut self) -> &[f32];
}

/// Snapshot of the externally mutated state, taken once at the top of each
/// frame. The host rebuilds it every tick from whatever its controls and
/// resize handling currently say; the core never holds onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    pub geometry: ViewportGeometry,
    pub scheme: ColorScheme,
}

/// One visualization session: a renderer bound to a transform plus the
/// provider feeding it.
///
/// The refresh loop calls [`render_tick`](Self::render_tick) once per
/// display tick until the session is torn down. Stopping is just not
/// calling again; there is nothing to release, and a later call picks up
/// where the provider currently is.
pub struct SpectrumSession<S> {
    renderer: SpectrumRenderer,
    source: S,
}

impl<S: MagnitudeSource> SpectrumSession<S> {
    pub fn new(renderer: SpectrumRenderer, source: S) -> Self {
        Self { renderer, source }
    }

    pub fn renderer(&self) -> &SpectrumRenderer {
        &self.renderer
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Reads the latest frame from the provider and draws it under the given
    /// settings. Synchronous; completes well within a refresh interval for
    /// any sane transform size, and never waits for data.
    pub fn render_tick<D>(&mut self, target: &mut D, settings: &FrameSettings) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let samples = self.source.current_frame();
        self.renderer.draw_frame(target, samples, settings)
    }
}
