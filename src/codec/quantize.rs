//! Quantization engine
//!
//! Maps masses to single bytes and back. Standard nutrients use a linear
//! scale of whole grams; extended nutrients use a log scale between the
//! nutrient's minimum and maximum representable mass.

use crate::models::Mass;
use crate::nutrition::Nutrient;

/// Largest byte value as a float
const BYTE_SCALE: f64 = 255.0;

/// Absorbs float error in `log(exp(x))` so a decoded byte re-encodes to itself
const TRUNCATION_NUDGE: f64 = 1e-9;

/// Mass for a linearly quantized byte
pub fn mass_for_linear_byte(byte: u8) -> Mass {
    Mass::from(byte)
}

/// Linearly quantize a mass, truncating to whole grams
///
/// Masses outside 0..=255 g saturate; NaN becomes 0.
pub fn linear_byte_for(mass: Mass) -> u8 {
    if !(0.0..=BYTE_SCALE).contains(&mass) {
        tracing::debug!("Clamping linear mass {} into byte range", mass);
    }
    clamp_to_byte(mass)
}

/// Mass for a log-quantized byte of the given nutrient
///
/// Byte 0x00 decodes to the nutrient's minimum mass, not to zero.
pub fn mass_for_log_byte(nutrient: Nutrient, byte: u8) -> Mass {
    let (log_min, log_range) = log_bounds(nutrient);
    let fraction = f64::from(byte) / BYTE_SCALE;

    (fraction * log_range + log_min).exp2()
}

/// Log-quantize a mass for the given nutrient
///
/// Exactly zero maps to 0x00. Masses below the minimum clamp to 0x00 and
/// masses above the maximum clamp to 0xFF.
pub fn log_byte_for(nutrient: Nutrient, mass: Mass) -> u8 {
    if mass == 0.0 {
        return 0x00;
    }

    if mass.is_nan() || mass < 0.0 {
        tracing::debug!("{} mass {} is not positive, encoding as 0x00", nutrient, mass);
        return 0x00;
    }

    let (log_min, log_range) = log_bounds(nutrient);
    let fraction = (mass.log2() - log_min) / log_range;

    if !(0.0..=1.0).contains(&fraction) {
        tracing::debug!(
            "{} mass {} outside representable range {}..={}",
            nutrient,
            mass,
            nutrient.minimum_mass(),
            nutrient.maximum_mass()
        );
    }

    clamp_to_byte(fraction * BYTE_SCALE + TRUNCATION_NUDGE)
}

/// log2 of the minimum mass and the log2 width of the representable range
fn log_bounds(nutrient: Nutrient) -> (f64, f64) {
    let log_min = nutrient.minimum_mass().log2();
    let log_max = nutrient.maximum_mass().log2();
    (log_min, log_max - log_min)
}

fn clamp_to_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, BYTE_SCALE).trunc() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_truncates() {
        assert_eq!(linear_byte_for(0.0), 0);
        assert_eq!(linear_byte_for(4.3), 4);
        assert_eq!(linear_byte_for(4.99), 4);
        assert_eq!(linear_byte_for(255.0), 255);
    }

    #[test]
    fn test_linear_clamps() {
        assert_eq!(linear_byte_for(-3.0), 0);
        assert_eq!(linear_byte_for(300.0), 255);
        assert_eq!(linear_byte_for(f64::NAN), 0);
        assert_eq!(linear_byte_for(f64::INFINITY), 255);
    }

    #[test]
    fn test_linear_roundtrip_every_byte() {
        for byte in 0..=u8::MAX {
            assert_eq!(linear_byte_for(mass_for_linear_byte(byte)), byte);
        }
    }

    #[test]
    fn test_quantity_byte_from_mass() {
        assert_eq!(log_byte_for(Nutrient::Magnesium, 0.001), 0x00);
        assert_eq!(log_byte_for(Nutrient::Magnesium, 1.0), 0x8D);
        assert_eq!(log_byte_for(Nutrient::Magnesium, 255.0), 0xFF);

        assert_eq!(log_byte_for(Nutrient::Chromium, 0.0000001), 0x00);
        assert_eq!(log_byte_for(Nutrient::Chromium, 1.0), 0xBD);
        assert_eq!(log_byte_for(Nutrient::Chromium, 255.0), 0xFF);
    }

    #[test]
    fn test_mass_from_quantity_byte() {
        assert!((mass_for_log_byte(Nutrient::Magnesium, 0x00) - 0.001).abs() < 0.0001);
        assert!((mass_for_log_byte(Nutrient::Magnesium, 0x8D) - 1.0).abs() < 0.1);
        assert!((mass_for_log_byte(Nutrient::Magnesium, 0xFF) - 255.0).abs() < 2.55);

        assert!((mass_for_log_byte(Nutrient::Chromium, 0x00) - 0.0000001).abs() < 0.00000001);
        assert!((mass_for_log_byte(Nutrient::Chromium, 0xBD) - 1.0).abs() < 0.1);
        assert!((mass_for_log_byte(Nutrient::Chromium, 0xFF) - 255.0).abs() < 25.5);
    }

    #[test]
    fn test_zero_is_sentinel_for_every_nutrient() {
        for nutrient in Nutrient::ALL {
            assert_eq!(log_byte_for(nutrient, 0.0), 0x00, "{}", nutrient);
        }
    }

    #[test]
    fn test_bounds_map_to_extremes() {
        for nutrient in Nutrient::ALL {
            assert_eq!(log_byte_for(nutrient, nutrient.minimum_mass()), 0x00, "{}", nutrient);
            assert_eq!(log_byte_for(nutrient, nutrient.maximum_mass()), 0xFF, "{}", nutrient);
        }
    }

    #[test]
    fn test_zero_byte_decodes_to_minimum() {
        for nutrient in Nutrient::ALL {
            let mass = mass_for_log_byte(nutrient, 0x00);
            let min = nutrient.minimum_mass();
            assert!((mass - min).abs() <= min * 1e-9, "{} decoded to {}", nutrient, mass);
        }
    }

    #[test]
    fn test_log_roundtrip_every_byte() {
        for nutrient in Nutrient::ALL {
            for byte in 1..=u8::MAX {
                let mass = mass_for_log_byte(nutrient, byte);
                assert_eq!(log_byte_for(nutrient, mass), byte, "{} byte {:#04x}", nutrient, byte);
            }
        }
    }

    #[test]
    fn test_log_clamps_out_of_range() {
        assert_eq!(log_byte_for(Nutrient::Magnesium, 0.0000001), 0x00);
        assert_eq!(log_byte_for(Nutrient::Magnesium, 1000.0), 0xFF);
        assert_eq!(log_byte_for(Nutrient::Magnesium, -1.0), 0x00);
        assert_eq!(log_byte_for(Nutrient::Magnesium, f64::NAN), 0x00);
        assert_eq!(log_byte_for(Nutrient::Magnesium, f64::INFINITY), 0xFF);
    }

    #[test]
    fn test_log_error_bounded_by_step() {
        for nutrient in Nutrient::ALL {
            let step = (nutrient.maximum_mass() / nutrient.minimum_mass()).powf(1.0 / 255.0);
            for mass in [0.0047, 0.163, 1.0, 42.0] {
                if mass < nutrient.minimum_mass() {
                    continue;
                }
                let decoded = mass_for_log_byte(nutrient, log_byte_for(nutrient, mass));
                assert!(decoded <= mass * (1.0 + 1e-9), "{} {}", nutrient, mass);
                assert!(decoded * step >= mass * (1.0 - 1e-9), "{} {}", nutrient, mass);
            }
        }
    }
}
