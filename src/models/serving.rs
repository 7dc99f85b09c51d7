//! Serving model
//!
//! A food paired with a concrete serving mass, and the decoded record type.

use serde::{Deserialize, Serialize};

use super::{Food, Mass};
use crate::nutrition::Nutrient;

/// A concrete amount of a food
///
/// Only `food` and `mass` travel in a nut code; `description` and `count`
/// are local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serving {
    pub food: Food,
    pub mass: Mass,
    #[serde(default = "default_description")]
    pub description: Option<String>,
    #[serde(default = "default_count")]
    pub count: Option<u32>,
}

fn default_description() -> Option<String> {
    Some("Serving".to_string())
}

fn default_count() -> Option<u32> {
    Some(1)
}

impl Serving {
    pub fn new(food: Food, mass: Mass) -> Self {
        Self {
            food,
            mass,
            description: default_description(),
            count: default_count(),
        }
    }

    /// Nutrient masses contained in this serving
    pub fn nutrients(&self) -> impl Iterator<Item = (Nutrient, Mass)> + '_ {
        let multiplier = if self.food.total_mass > 0.0 {
            self.mass / self.food.total_mass
        } else {
            0.0
        };
        self.food
            .nutrients()
            .map(move |(nutrient, mass)| (nutrient, mass * multiplier))
    }
}

/// Result of decoding a nut code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FoodOrServing {
    Food(Food),
    Serving(Serving),
}

impl FoodOrServing {
    /// The underlying food, whichever variant this is
    pub fn food(&self) -> &Food {
        match self {
            FoodOrServing::Food(food) => food,
            FoodOrServing::Serving(serving) => &serving.food,
        }
    }

    pub fn into_food(self) -> Food {
        match self {
            FoodOrServing::Food(food) => food,
            FoodOrServing::Serving(serving) => serving.food,
        }
    }

    pub fn as_serving(&self) -> Option<&Serving> {
        match self {
            FoodOrServing::Food(_) => None,
            FoodOrServing::Serving(serving) => Some(serving),
        }
    }
}

impl From<Food> for FoodOrServing {
    fn from(food: Food) -> Self {
        FoodOrServing::Food(food)
    }
}

impl From<Serving> for FoodOrServing {
    fn from(serving: Serving) -> Self {
        FoodOrServing::Serving(serving)
    }
}
