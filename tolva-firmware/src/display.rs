//! Draw-call logging display backend
//!
//! The TFT panel is not wired on the bench board yet; this backend keeps the
//! whole rendering path exercised by logging every draw call over RTT.
//!
//! TODO: swap in the ILI9341 SPI driver once the panel wiring is final.

use defmt::debug;

use tolva_core::traits::{Color, FeederDisplay, TextPos};

pub struct RttDisplay {
    color: Color,
}

impl RttDisplay {
    pub fn new() -> Self {
        Self {
            color: Color::White,
        }
    }
}

impl FeederDisplay for RttDisplay {
    fn clear(&mut self) {
        debug!("display: clear");
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn text(&mut self, s: &str, x: TextPos, y: u16, rotation: u16) {
        debug!(
            "display: text {=str} x={} y={} rot={} color={}",
            s, x, y, rotation, self.color
        );
    }

    fn fill_rect(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        debug!(
            "display: rect ({},{})-({},{}) color={}",
            x1, y1, x2, y2, self.color
        );
    }

    fn bitmap(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u16]) {
        debug!(
            "display: bitmap {}x{} at ({},{}), {} px",
            w,
            h,
            x,
            y,
            data.len()
        );
    }
}
