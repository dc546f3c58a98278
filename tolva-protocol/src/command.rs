//! Command parsing for received configuration lines.
//!
//! Parsing is prefix-based, case-sensitive ASCII exactly as the wire
//! protocol defines it. A line that matches no command, or whose payload
//! does not decode, yields `None` and is silently dropped by the caller -
//! a malformed line never disturbs previously accepted configuration.

/// A meal time slot as hour and minute of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MealTime {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
}

impl MealTime {
    /// Decode the wire encoding: a decimal `HMM`/`HHMM` value where the
    /// hour is `t / 100` and the minute `t % 100`.
    ///
    /// Values outside the 24h clock (`2360`, `9905`, ...) are rejected so
    /// a slot that could never fire is not silently accepted.
    pub fn from_hhmm(t: u32) -> Option<Self> {
        let hour = t / 100;
        let minute = t % 100;
        if hour < 24 && minute < 60 {
            Some(Self {
                hour: hour as u8,
                minute: minute as u8,
            })
        } else {
            None
        }
    }
}

/// Commands accepted over the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `Peso:<kg>` - set the pet's weight in kilograms
    SetWeight(u32),
    /// `Primera Comida:<HHMM>` - program the first meal slot
    SetFirstMeal(MealTime),
    /// `Segunda Comida:<HHMM>` - program the second meal slot
    SetSecondMeal(MealTime),
    /// `Mostrar Config` - request the configuration report
    ShowConfig,
}

impl Command {
    /// Parse one complete line (terminator already stripped).
    ///
    /// Bounded time, no allocation; safe to call at interrupt priority.
    pub fn parse(line: &[u8]) -> Option<Self> {
        if let Some(payload) = strip_prefix(line, b"Peso:") {
            return parse_decimal(payload).map(Command::SetWeight);
        }
        if let Some(payload) = strip_prefix(line, b"Primera Comida:") {
            let t = parse_decimal(payload)?;
            return MealTime::from_hhmm(t).map(Command::SetFirstMeal);
        }
        if let Some(payload) = strip_prefix(line, b"Segunda Comida:") {
            let t = parse_decimal(payload)?;
            return MealTime::from_hhmm(t).map(Command::SetSecondMeal);
        }
        if line.starts_with(b"Mostrar Config") {
            return Some(Command::ShowConfig);
        }
        None
    }
}

/// Byte-slice prefix strip (case-sensitive).
fn strip_prefix<'a>(line: &'a [u8], prefix: &[u8]) -> Option<&'a [u8]> {
    if line.starts_with(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

/// Parse an unsigned decimal payload.
///
/// Leading spaces are skipped, digits are consumed until the first
/// non-digit, and at least one digit is required. Saturates instead of
/// wrapping on absurdly long inputs.
fn parse_decimal(payload: &[u8]) -> Option<u32> {
    let mut value: u32 = 0;
    let mut seen_digit = false;
    for &b in payload {
        match b {
            b' ' if !seen_digit => continue,
            b'0'..=b'9' => {
                seen_digit = true;
                value = value
                    .saturating_mul(10)
                    .saturating_add(u32::from(b - b'0'));
            }
            _ => break,
        }
    }
    if seen_digit {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(Command::parse(b"Peso:7"), Some(Command::SetWeight(7)));
        assert_eq!(Command::parse(b"Peso: 15"), Some(Command::SetWeight(15)));
    }

    #[test]
    fn test_parse_first_meal() {
        assert_eq!(
            Command::parse(b"Primera Comida:730"),
            Some(Command::SetFirstMeal(MealTime { hour: 7, minute: 30 }))
        );
        assert_eq!(
            Command::parse(b"Primera Comida:2200"),
            Some(Command::SetFirstMeal(MealTime { hour: 22, minute: 0 }))
        );
    }

    #[test]
    fn test_parse_second_meal() {
        assert_eq!(
            Command::parse(b"Segunda Comida:1945"),
            Some(Command::SetSecondMeal(MealTime { hour: 19, minute: 45 }))
        );
    }

    #[test]
    fn test_parse_show_config() {
        assert_eq!(Command::parse(b"Mostrar Config"), Some(Command::ShowConfig));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(Command::parse(b"peso:7"), None);
        assert_eq!(Command::parse(b"PESO:7"), None);
        assert_eq!(Command::parse(b"mostrar config"), None);
    }

    #[test]
    fn test_unknown_lines_ignored() {
        assert_eq!(Command::parse(b""), None);
        assert_eq!(Command::parse(b"Hola"), None);
        assert_eq!(Command::parse(b"Peso"), None);
    }

    #[test]
    fn test_missing_payload_rejected() {
        assert_eq!(Command::parse(b"Peso:"), None);
        assert_eq!(Command::parse(b"Peso:abc"), None);
        assert_eq!(Command::parse(b"Primera Comida:"), None);
    }

    #[test]
    fn test_out_of_range_meal_rejected() {
        assert_eq!(Command::parse(b"Primera Comida:2400"), None);
        assert_eq!(Command::parse(b"Primera Comida:1260"), None);
        assert_eq!(Command::parse(b"Segunda Comida:9999"), None);
    }

    #[test]
    fn test_single_digit_hour() {
        // HMM form: 915 = 9:15
        assert_eq!(
            Command::parse(b"Primera Comida:915"),
            Some(Command::SetFirstMeal(MealTime { hour: 9, minute: 15 }))
        );
        // Plain minutes: 45 = 0:45
        assert_eq!(
            Command::parse(b"Primera Comida:45"),
            Some(Command::SetFirstMeal(MealTime { hour: 0, minute: 45 }))
        );
    }

    #[test]
    fn test_meal_time_from_hhmm() {
        assert_eq!(
            MealTime::from_hhmm(0),
            Some(MealTime { hour: 0, minute: 0 })
        );
        assert_eq!(
            MealTime::from_hhmm(2359),
            Some(MealTime { hour: 23, minute: 59 })
        );
        assert_eq!(MealTime::from_hhmm(2360), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decimal_roundtrip(n in 0u32..=999_999) {
                let mut buf = [0u8; 16];
                let s = {
                    use core::fmt::Write;
                    let mut w = heapless::String::<16>::new();
                    write!(w, "{}", n).unwrap();
                    let bytes = w.as_bytes();
                    buf[..bytes.len()].copy_from_slice(bytes);
                    bytes.len()
                };
                prop_assert_eq!(parse_decimal(&buf[..s]), Some(n));
            }

            #[test]
            fn valid_meal_times_always_decode(h in 0u32..24, m in 0u32..60) {
                let t = h * 100 + m;
                let meal = MealTime::from_hhmm(t).unwrap();
                prop_assert_eq!(meal.hour as u32, h);
                prop_assert_eq!(meal.minute as u32, m);
            }

            #[test]
            fn garbage_never_panics(line in proptest::collection::vec(any::<u8>(), 0..64)) {
                let _ = Command::parse(&line);
            }
        }
    }
}
