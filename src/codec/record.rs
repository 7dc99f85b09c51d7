//! Record codec
//!
//! Byte layout of a nut code:
//!
//! ```text
//! byte 0            version
//! bytes 1..=8       standard nutrients, linear, fixed order
//! bytes 9..         (tag, value) pairs until the end of the buffer
//! ```
//!
//! Extended nutrients are written in ascending code order, so equal records
//! always produce identical bytes.

use super::error::{NutCodeError, NutCodeResult};
use super::quantize::{linear_byte_for, log_byte_for, mass_for_linear_byte, mass_for_log_byte};
use crate::models::{Food, FoodOrServing, Mass, Serving};
use crate::nutrition::{Nutrient, SERVING_MASS_CODE};

/// Highest format version this codec reads and the one it writes
pub const VERSION: u8 = 1;

/// Number of fixed-position bytes after the version byte
pub const STANDARD_LEN: usize = Nutrient::STANDARD.len();

/// Decoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject extended tags this codec does not know instead of skipping them
    pub strict_nutrient_codes: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            strict_nutrient_codes: true,
        }
    }
}

/// Encode a food, re-expressed per 100 g
pub fn encode_food(food: &Food) -> Vec<u8> {
    let food = food.normalized();
    let mut bytes = Vec::with_capacity(1 + STANDARD_LEN);

    bytes.push(VERSION);

    bytes.extend(
        Nutrient::STANDARD
            .iter()
            .map(|nutrient| linear_byte_for(nutrient.get(&food))),
    );

    for nutrient in Nutrient::extended() {
        let mass = nutrient.get(&food);
        if mass > 0.0 {
            bytes.push(nutrient.code());
            bytes.push(log_byte_for(nutrient, mass));
        }
    }

    bytes
}

/// Encode a serving: its food followed by the serving mass pair
pub fn encode_serving(serving: &Serving) -> Vec<u8> {
    let mut bytes = encode_food(&serving.food);
    bytes.push(SERVING_MASS_CODE);
    bytes.push(linear_byte_for(serving.mass));
    bytes
}

pub fn encode(record: &FoodOrServing) -> Vec<u8> {
    match record {
        FoodOrServing::Food(food) => encode_food(food),
        FoodOrServing::Serving(serving) => encode_serving(serving),
    }
}

/// Decode a byte stream, skipping unknown extended tags
pub fn decode(bytes: &[u8]) -> NutCodeResult<FoodOrServing> {
    decode_with(bytes, DecodeOptions::default())
}

/// Decode a byte stream
pub fn decode_with(bytes: &[u8], options: DecodeOptions) -> NutCodeResult<FoodOrServing> {
    let (&version, body) = bytes.split_first().ok_or(NutCodeError::MissingVersion)?;

    if version > VERSION {
        return Err(NutCodeError::UnrecognizedVersion(version));
    }

    if body.len() < STANDARD_LEN {
        return Err(NutCodeError::UnexpectedEndOfData);
    }
    let (standard, extended) = body.split_at(STANDARD_LEN);

    // Pairs only; a dangling tag means the stream was cut short
    if extended.len() % 2 != 0 {
        return Err(NutCodeError::UnexpectedEndOfData);
    }

    tracing::trace!(
        "Decoding nut code v{} with {} extended pairs",
        version,
        extended.len() / 2
    );

    let mut food = Food::default();
    for (nutrient, &byte) in Nutrient::STANDARD.iter().zip(standard) {
        nutrient.set(&mut food, mass_for_linear_byte(byte));
    }

    let mut serving_mass: Option<Mass> = None;
    for pair in extended.chunks_exact(2) {
        let (code, value) = (pair[0], pair[1]);

        match Nutrient::from_code(code) {
            Some(nutrient) => {
                nutrient.set(&mut food, mass_for_log_byte(nutrient, value));
            }
            _ if code == SERVING_MASS_CODE => {
                serving_mass = Some(mass_for_linear_byte(value));
            }
            _ if options.strict_nutrient_codes => {
                return Err(NutCodeError::UnrecognizedNutrientCode(code));
            }
            _ => {
                tracing::debug!("Skipping unrecognized nutrient code {:#04x}", code);
            }
        }
    }

    Ok(match serving_mass {
        Some(mass) => FoodOrServing::Serving(Serving::new(food, mass)),
        None => FoodOrServing::Food(food),
    })
}
