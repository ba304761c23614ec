use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
    primitives::Rectangle,
    Pixel,
};

/// A raster surface that records every fill command instead of keeping
/// pixels, so tests can assert on exactly what the renderer asked for.
pub struct RecordingSurface {
    size: Size,
    pub fills: Vec<(Rectangle, Rgb888)>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            fills: Vec::new(),
        }
    }

    /// Fills after the leading clear, i.e. the bars of the last frame.
    pub fn bars(&self) -> &[(Rectangle, Rgb888)] {
        &self.fills[1..]
    }
}

impl OriginDimensions for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for RecordingSurface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb888) -> Result<(), Self::Error> {
        self.fills.push((*area, color));
        Ok(())
    }
}
