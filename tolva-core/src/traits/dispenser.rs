//! Dispensing actuator trait.

/// Kibble flow rate through the open hatch, grams per second.
pub const FLOW_G_PER_S: u32 = 23;

/// How long the hatch must stay open to pour `grams`.
///
/// Separated from the trait so the timing policy is testable without
/// hardware.
pub fn dispense_duration_ms(grams: u32) -> u32 {
    1000 * grams / FLOW_G_PER_S
}

/// Trait for the dispensing actuator.
///
/// `dispense` blocks for the physical pour (hatch open, timed wait, hatch
/// closed). That blocking is the one sanctioned busy-wait in the system and
/// must never run inside an interrupt handler.
pub trait Dispenser {
    /// Open the hatch long enough to pour `grams`, then close it.
    fn dispense(&mut self, grams: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_scales_with_grams() {
        assert_eq!(dispense_duration_ms(23), 1000);
        assert_eq!(dispense_duration_ms(46), 2000);
        assert_eq!(dispense_duration_ms(0), 0);
    }

    #[test]
    fn test_typical_portion() {
        // 75 g at 23 g/s is a hair over 3 seconds
        assert_eq!(dispense_duration_ms(75), 3260);
    }
}
