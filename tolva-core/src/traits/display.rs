//! Display collaborator trait.
//!
//! The rendering/protocol library behind the TFT is an external
//! collaborator; the core drives it through this opaque side-effecting
//! interface and never reads anything back.

/// Foreground colors the screens use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    Green,
}

/// Horizontal text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextPos {
    /// Flush left.
    Left,
    /// Centered on the display width.
    Center,
    /// Absolute x coordinate in pixels.
    At(u16),
}

/// Trait for the TFT display library.
pub trait FeederDisplay {
    /// Clear the entire screen to black.
    fn clear(&mut self);

    /// Set the foreground color for subsequent drawing.
    fn set_color(&mut self, color: Color);

    /// Draw a text string.
    fn text(&mut self, s: &str, x: TextPos, y: u16, rotation: u16);

    /// Draw a filled rectangle between two corners.
    fn fill_rect(&mut self, x1: u16, y1: u16, x2: u16, y2: u16);

    /// Draw a monochrome-expanded bitmap of `w` x `h` RGB565 pixels.
    fn bitmap(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u16]);
}
