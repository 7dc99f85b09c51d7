//! Mass units
//!
//! Conversion constants, parsing and display of masses. Nut codes only carry
//! grams; other units exist for input and output.

use crate::models::Mass;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per microgram
pub const G_PER_MCG: f64 = 0.000001;
/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Get the conversion factor to grams for a mass unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "mcg" | "µg" | "ug" | "microgram" | "micrograms" => Some(G_PER_MCG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Parse a mass like "20", "20g", "163 mg" or "5 mcg" into grams
///
/// A bare number is taken as grams. Negative or non-finite values are rejected.
pub fn parse_mass(s: &str) -> Option<Mass> {
    let trimmed = s.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e'))
        .unwrap_or(trimmed.len());
    let (num_part, unit_part) = trimmed.split_at(split);

    let value: f64 = num_part.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let unit = unit_part.trim();
    let factor = if unit.is_empty() {
        1.0
    } else {
        grams_per_unit(unit)?
    };

    Some(value * factor)
}

/// Format a mass in the largest unit that keeps it at or above one
pub fn format_mass(mass: Mass) -> String {
    if mass >= 1.0 || mass == 0.0 {
        format!("{} g", trim_float(mass))
    } else if mass >= G_PER_MG {
        format!("{} mg", trim_float(mass / G_PER_MG))
    } else {
        format!("{} mcg", trim_float(mass / G_PER_MCG))
    }
}

/// Up to three significant decimals, without trailing zeros
fn trim_float(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
