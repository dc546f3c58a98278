//! Status screens rendered through the display trait.
//!
//! Each screen is plain data; [`render`] turns it into draw calls. Keeping
//! rendering data-driven means the orchestrator emits a `Show(Screen)`
//! action instead of touching the display mid-transition, and the whole
//! layer is testable with a recording mock.

use core::fmt::Write;

use heapless::String;

use super::display::{Color, FeederDisplay, TextPos};

/// 8x8 paw icon, RGB565, white on black.
const PAW_ICON_SIZE: u16 = 8;
#[rustfmt::skip]
const PAW_ICON: [u16; 64] = [
    0x0000, 0xFFFF, 0x0000, 0x0000, 0x0000, 0x0000, 0xFFFF, 0x0000,
    0xFFFF, 0xFFFF, 0x0000, 0xFFFF, 0xFFFF, 0x0000, 0xFFFF, 0xFFFF,
    0xFFFF, 0xFFFF, 0x0000, 0xFFFF, 0xFFFF, 0x0000, 0xFFFF, 0xFFFF,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0000, 0x0000,
    0x0000, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0000,
    0x0000, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0000,
    0x0000, 0x0000, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF, 0x0000, 0x0000,
];

/// A screen to display, with the data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Boot greeting.
    Welcome,
    /// Steady home screen.
    Home,
    /// Shown while the dispenser is pouring.
    Dispensing,
    /// Configuration/status summary.
    Status {
        /// Configured weight, if the host has sent one.
        weight_kg: Option<u32>,
        /// Grams dispensed per meal.
        portion_g: u32,
    },
}

/// Render a screen through the display collaborator.
pub fn render<D: FeederDisplay>(screen: &Screen, display: &mut D) {
    display.clear();
    match screen {
        Screen::Welcome => {
            display.set_color(Color::White);
            display.text("Hola Perrito!", TextPos::Center, 10, 0);
            display.bitmap(48, 30, PAW_ICON_SIZE, PAW_ICON_SIZE, &PAW_ICON);
            display.set_color(Color::Red);
            display.text("Es hora de comer!", TextPos::Center, 100, 0);
        }
        Screen::Home => {
            display.set_color(Color::White);
            display.text("Dispensador Canino", TextPos::Center, 30, 0);
            display.text("Inteligente", TextPos::Center, 50, 0);
            display.text("Esperando la hora de comer", TextPos::Center, 100, 0);
        }
        Screen::Dispensing => {
            display.set_color(Color::Red);
            display.text("Dispensando comida!", TextPos::Center, 30, 0);
            display.set_color(Color::Green);
            display.fill_rect(30, 70, 130, 90);
            display.set_color(Color::White);
            display.text("Listo! A comer", TextPos::Center, 110, 0);
        }
        Screen::Status {
            weight_kg,
            portion_g,
        } => {
            display.set_color(Color::Red);
            display.text("Estado del sistema", TextPos::Center, 10, 0);
            display.set_color(Color::White);

            let mut line: String<32> = String::new();
            match weight_kg {
                Some(kg) => {
                    let _ = write!(line, "Peso: {} kg", kg);
                }
                None => {
                    let _ = line.push_str("Peso: sin configurar");
                }
            }
            display.text(&line, TextPos::Left, 40, 0);

            line.clear();
            let _ = write!(line, "Racion: {} g", portion_g);
            display.text(&line, TextPos::Left, 60, 0);

            display.text("Modo: Automatico", TextPos::Left, 80, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String as StdString;
    use std::vec::Vec;

    /// Display mock recording every call.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<StdString>,
    }

    impl FeederDisplay for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn set_color(&mut self, color: Color) {
            self.calls.push(std::format!("color {:?}", color));
        }
        fn text(&mut self, s: &str, _x: TextPos, y: u16, _rotation: u16) {
            self.calls.push(std::format!("text@{} {}", y, s));
        }
        fn fill_rect(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
            self.calls.push(std::format!("rect {},{},{},{}", x1, y1, x2, y2));
        }
        fn bitmap(&mut self, _x: u16, _y: u16, w: u16, h: u16, data: &[u16]) {
            self.calls.push(std::format!("bitmap {}x{} ({})", w, h, data.len()));
        }
    }

    #[test]
    fn test_every_screen_clears_first() {
        for screen in [
            Screen::Welcome,
            Screen::Home,
            Screen::Dispensing,
            Screen::Status {
                weight_kg: Some(10),
                portion_g: 75,
            },
        ] {
            let mut d = Recorder::default();
            render(&screen, &mut d);
            assert_eq!(d.calls[0], "clear");
            assert!(d.calls.len() > 1);
        }
    }

    #[test]
    fn test_welcome_draws_icon() {
        let mut d = Recorder::default();
        render(&Screen::Welcome, &mut d);
        assert!(d.calls.iter().any(|c| c == "bitmap 8x8 (64)"));
    }

    #[test]
    fn test_status_with_weight() {
        let mut d = Recorder::default();
        render(
            &Screen::Status {
                weight_kg: Some(20),
                portion_g: 150,
            },
            &mut d,
        );
        assert!(d.calls.iter().any(|c| c == "text@40 Peso: 20 kg"));
        assert!(d.calls.iter().any(|c| c == "text@60 Racion: 150 g"));
    }

    #[test]
    fn test_status_without_weight() {
        let mut d = Recorder::default();
        render(
            &Screen::Status {
                weight_kg: None,
                portion_g: 75,
            },
            &mut d,
        );
        assert!(d.calls.iter().any(|c| c == "text@40 Peso: sin configurar"));
    }
}
