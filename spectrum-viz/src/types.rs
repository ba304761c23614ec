use embedded_graphics::pixelcolor::Rgb888;

/// One positioned, colored bar of the current frame. Derived per bin per
/// draw and discarded with the frame; nothing retains it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub left: i32,
    pub top: i32,
    /// Always at least one pixel, even where the log axis compresses
    /// neighbouring bins onto the same column.
    pub width: u32,
    pub height: u32,
    pub color: Rgb888,
}
