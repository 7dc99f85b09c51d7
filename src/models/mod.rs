//! Data models
//!
//! The records a nut code carries.

mod food;
mod serving;

pub use food::{Food, Mass, REFERENCE_TOTAL_MASS};
pub use serving::{FoodOrServing, Serving};
