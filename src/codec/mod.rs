//! Nut code codec
//!
//! Quantization, byte layout and URL transport of nutrition records.

pub mod error;
pub mod quantize;
pub mod record;
pub mod transport;

pub use error::{NutCodeError, NutCodeResult};
pub use quantize::{linear_byte_for, log_byte_for, mass_for_linear_byte, mass_for_log_byte};
pub use record::{decode, decode_with, encode, encode_food, encode_serving, DecodeOptions, VERSION};
pub use transport::{parse, parse_str, parse_with, urlify, urlify_food, urlify_serving, SCHEME};
