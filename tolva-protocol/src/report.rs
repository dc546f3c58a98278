//! Advisory text lines sent back over the serial port.
//!
//! All outbound traffic is best-effort human-readable text; nothing in the
//! protocol requires the host to see it. Formatting happens into bounded
//! `heapless` strings so the transmit path never allocates.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::command::MealTime;

/// One formatted outbound line, terminator included.
pub type ReportLine = String<64>;

/// Maximum lines in a configuration report.
pub const REPORT_MAX_LINES: usize = 8;

/// ANSI sequence that clears the host terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminator appended to every advisory line.
const EOL: &str = "\n\r";

fn line(args: core::fmt::Arguments<'_>) -> ReportLine {
    let mut s = ReportLine::new();
    // A line that would overflow 64 bytes is truncated by heapless; every
    // format string below fits with room to spare.
    let _ = s.write_fmt(args);
    let _ = s.push_str(EOL);
    s
}

/// `Peso actualizado: <kg>`
pub fn weight_ack(weight_kg: u32) -> ReportLine {
    line(format_args!("Peso actualizado: {}", weight_kg))
}

/// `Primera comida programada a las HH:MM`
pub fn first_meal_ack(meal: MealTime) -> ReportLine {
    line(format_args!(
        "Primera comida programada a las {:02}:{:02}",
        meal.hour, meal.minute
    ))
}

/// `Segunda comida programada a las HH:MM`
pub fn second_meal_ack(meal: MealTime) -> ReportLine {
    line(format_args!(
        "Segunda comida programada a las {:02}:{:02}",
        meal.hour, meal.minute
    ))
}

/// Announcement sent when a programmed meal slot fires.
pub fn meal_announcement(second_slot: bool) -> ReportLine {
    if second_slot {
        line(format_args!("Hora de la segunda comida!"))
    } else {
        line(format_args!("Hora de la primera comida!"))
    }
}

/// Announcement for a confirmed eating-sensor transition.
///
/// The sensor reads high when the bowl is undisturbed, so a confirmed high
/// level means the pet stopped eating.
pub fn eating_announcement(stopped: bool) -> ReportLine {
    if stopped {
        line(format_args!("Ha parado de comer!!!"))
    } else {
        line(format_args!("Esta comiendo!!!"))
    }
}

/// Build the `Mostrar Config` report block.
///
/// `daily_ration_g` is the full daily amount; the per-meal portion is the
/// dispensing side's concern and does not appear here.
pub fn config_report(
    weight_kg: Option<u32>,
    daily_ration_g: u32,
    first_meal: Option<MealTime>,
    second_meal: Option<MealTime>,
) -> Vec<ReportLine, REPORT_MAX_LINES> {
    let mut out = Vec::new();
    let _ = out.push(line(format_args!("----- CONFIGURACION ACTUAL -----")));
    let _ = out.push(line(format_args!(
        "Peso configurado: {} kg",
        weight_kg.unwrap_or(0)
    )));
    let _ = out.push(line(format_args!("Racion diaria: {} g", daily_ration_g)));
    let _ = out.push(meal_slot_line("Primera comida", first_meal));
    let _ = out.push(meal_slot_line("Segunda comida", second_meal));
    let _ = out.push(line(format_args!("--------------------------------")));
    out
}

fn meal_slot_line(label: &str, meal: Option<MealTime>) -> ReportLine {
    match meal {
        Some(m) => line(format_args!("{}: {:02}:{:02}", label, m.hour, m.minute)),
        None => line(format_args!("{}: No programada", label)),
    }
}
