//! Food model
//!
//! Nutrient composition of a food, in grams relative to `total_mass`.

use serde::{Deserialize, Serialize};

use crate::nutrition::Nutrient;

/// Mass in grams
pub type Mass = f64;

/// Basis every nut code is expressed against
pub const REFERENCE_TOTAL_MASS: Mass = 100.0;

/// Nutrient composition of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Food {
    // Macronutrients
    pub fat_total: Mass,
    pub carbohydrates: Mass,
    pub protein: Mass,

    // Carbohydrate detail
    pub fiber: Mass,
    pub sugar: Mass,
    pub sugar_added: Mass,
    pub sugar_alcohols: Mass,

    // Fat detail
    pub fat_saturated: Mass,
    pub fat_monounsaturated: Mass,
    pub fat_polyunsaturated: Mass,
    pub cholesterol: Mass,

    // Vitamins
    pub vitamin_a: Mass,
    pub thiamin: Mass,
    pub riboflavin: Mass,
    pub niacin: Mass,
    pub pantothenic_acid: Mass,
    pub vitamin_b6: Mass,
    pub biotin: Mass,
    pub vitamin_b12: Mass,
    pub vitamin_c: Mass,
    pub vitamin_d: Mass,
    pub vitamin_e: Mass,
    pub vitamin_k: Mass,
    pub folate: Mass,
    pub choline: Mass,

    // Minerals
    pub calcium: Mass,
    pub chloride: Mass,
    pub iron: Mass,
    pub magnesium: Mass,
    pub phosphorus: Mass,
    pub potassium: Mass,
    pub sodium: Mass,
    pub zinc: Mass,
    pub fluoride: Mass,

    // Ultratrace minerals
    pub chromium: Mass,
    pub copper: Mass,
    pub iodine: Mass,
    pub manganese: Mass,
    pub molybdenum: Mass,
    pub selenium: Mass,

    pub water: Mass,
    pub caffeine: Mass,

    /// Mass the nutrient values are relative to. Also the unit mass of a
    /// serving where one applies (e.g. the mass of one cookie).
    pub total_mass: Mass,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            fat_total: 0.0,
            carbohydrates: 0.0,
            protein: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            sugar_added: 0.0,
            sugar_alcohols: 0.0,
            fat_saturated: 0.0,
            fat_monounsaturated: 0.0,
            fat_polyunsaturated: 0.0,
            cholesterol: 0.0,
            vitamin_a: 0.0,
            thiamin: 0.0,
            riboflavin: 0.0,
            niacin: 0.0,
            pantothenic_acid: 0.0,
            vitamin_b6: 0.0,
            biotin: 0.0,
            vitamin_b12: 0.0,
            vitamin_c: 0.0,
            vitamin_d: 0.0,
            vitamin_e: 0.0,
            vitamin_k: 0.0,
            folate: 0.0,
            choline: 0.0,
            calcium: 0.0,
            chloride: 0.0,
            iron: 0.0,
            magnesium: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            sodium: 0.0,
            zinc: 0.0,
            fluoride: 0.0,
            chromium: 0.0,
            copper: 0.0,
            iodine: 0.0,
            manganese: 0.0,
            molybdenum: 0.0,
            selenium: 0.0,
            water: 0.0,
            caffeine: 0.0,
            total_mass: REFERENCE_TOTAL_MASS,
        }
    }
}

impl Food {
    /// Create a food per 100 g from its macronutrients
    pub fn new(fat: Mass, carbohydrates: Mass, protein: Mass) -> Self {
        Self {
            fat_total: fat,
            carbohydrates,
            protein,
            ..Self::default()
        }
    }

    /// Builder-style setter for a single nutrient
    pub fn with(mut self, nutrient: Nutrient, mass: Mass) -> Self {
        nutrient.set(&mut self, mass);
        self
    }

    /// Scale every nutrient and the total mass by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        let mut scaled = self.clone();
        for nutrient in Nutrient::ALL {
            nutrient.set(&mut scaled, nutrient.get(self) * multiplier);
        }
        scaled.total_mass = self.total_mass * multiplier;
        scaled
    }

    /// Re-express the composition per 100 g
    ///
    /// A food with a non-positive or non-finite total mass is returned as is.
    pub fn normalized(&self) -> Self {
        if self.total_mass == REFERENCE_TOTAL_MASS
            || !self.total_mass.is_finite()
            || self.total_mass <= 0.0
        {
            return self.clone();
        }
        self.scale(REFERENCE_TOTAL_MASS / self.total_mass)
    }

    /// Nutrients with a nonzero mass, in ascending code order
    pub fn nutrients(&self) -> impl Iterator<Item = (Nutrient, Mass)> + '_ {
        Nutrient::ALL
            .into_iter()
            .map(move |n| (n, n.get(self)))
            .filter(|(_, mass)| *mass > 0.0)
    }
}
