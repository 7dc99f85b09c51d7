//! Nut Codes
//!
//! Compact, lossy encoding of nutrition records into `nut://` URLs.

pub mod build_info;
pub mod codec;
pub mod models;
pub mod nutrition;

pub use codec::{
    decode, encode, parse, parse_str, urlify, DecodeOptions, NutCodeError, NutCodeResult,
};
pub use models::{Food, FoodOrServing, Mass, Serving};
pub use nutrition::Nutrient;
