//! Nutrition catalog module
//!
//! The nutrient table and mass unit handling.

pub mod nutrient;
pub mod units;

pub use nutrient::{Nutrient, MAXIMUM_REPRESENTABLE_MASS, SERVING_MASS_CODE};
pub use units::{format_mass, grams_per_unit, parse_mass};
