//! Nutrient catalog
//!
//! Identity, display name and representable mass bounds of every nutrient a
//! nut code can carry, plus the accessor binding each nutrient to its field
//! in a [`Food`].

use serde::{Deserialize, Serialize};

use crate::models::{Food, Mass};

/// Extended tag reserved for the serving mass. Never a nutrient code.
pub const SERVING_MASS_CODE: u8 = 0xF0;

/// Upper bound of every nutrient, in grams
pub const MAXIMUM_REPRESENTABLE_MASS: Mass = 255.0;

/// A nutrient known to the nut code format
///
/// The discriminant is the nutrient's wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Nutrient {
    Water = 0x00,

    FatTotal = 0x01,
    Carbohydrates = 0x02,
    Protein = 0x03,
    Fiber = 0x04,
    Sugar = 0x05,
    FatSaturated = 0x06,
    FatMonounsaturated = 0x07,
    FatPolyunsaturated = 0x08,

    Cholesterol = 0x09,
    SugarAdded = 0x0A,
    SugarAlcohols = 0x0B,

    VitaminA = 0x20,
    Thiamin = 0x21,
    Riboflavin = 0x22,
    Niacin = 0x23,
    PantothenicAcid = 0x24,
    VitaminB6 = 0x25,
    Biotin = 0x26,
    VitaminB12 = 0x27,
    VitaminC = 0x28,
    VitaminD = 0x29,
    VitaminE = 0x2A,
    VitaminK = 0x2B,
    Folate = 0x2C,
    Choline = 0x2D,

    Calcium = 0x30,
    Chloride = 0x31,
    Iron = 0x32,
    Magnesium = 0x33,
    Phosphorus = 0x34,
    Potassium = 0x35,
    Sodium = 0x36,
    Zinc = 0x37,
    Chromium = 0x38,
    Copper = 0x39,
    Iodine = 0x3A,
    Manganese = 0x3B,
    Molybdenum = 0x3C,
    Selenium = 0x3D,
    Fluoride = 0x3E,

    Caffeine = 0xD0,
}

impl Nutrient {
    /// Every nutrient, in ascending code order
    pub const ALL: [Nutrient; 42] = [
        Nutrient::Water,
        Nutrient::FatTotal,
        Nutrient::Carbohydrates,
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::FatSaturated,
        Nutrient::FatMonounsaturated,
        Nutrient::FatPolyunsaturated,
        Nutrient::Cholesterol,
        Nutrient::SugarAdded,
        Nutrient::SugarAlcohols,
        Nutrient::VitaminA,
        Nutrient::Thiamin,
        Nutrient::Riboflavin,
        Nutrient::Niacin,
        Nutrient::PantothenicAcid,
        Nutrient::VitaminB6,
        Nutrient::Biotin,
        Nutrient::VitaminB12,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Folate,
        Nutrient::Choline,
        Nutrient::Calcium,
        Nutrient::Chloride,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Sodium,
        Nutrient::Zinc,
        Nutrient::Chromium,
        Nutrient::Copper,
        Nutrient::Iodine,
        Nutrient::Manganese,
        Nutrient::Molybdenum,
        Nutrient::Selenium,
        Nutrient::Fluoride,
        Nutrient::Caffeine,
    ];

    /// Nutrients stored at fixed positions after the version byte, in wire order
    pub const STANDARD: [Nutrient; 8] = [
        Nutrient::FatTotal,
        Nutrient::Carbohydrates,
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::FatSaturated,
        Nutrient::FatMonounsaturated,
        Nutrient::FatPolyunsaturated,
    ];

    /// Nutrients stored as tagged pairs, in ascending code order
    pub fn extended() -> impl Iterator<Item = Nutrient> {
        Self::ALL.into_iter().filter(|n| !n.is_standard())
    }

    /// Wire code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a nutrient by wire code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.code() == code)
    }

    pub fn is_standard(self) -> bool {
        Self::STANDARD.contains(&self)
    }

    /// Record field name, also used as the JSON key and CLI argument
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Water => "water",
            Nutrient::FatTotal => "fat_total",
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Protein => "protein",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::FatSaturated => "fat_saturated",
            Nutrient::FatMonounsaturated => "fat_monounsaturated",
            Nutrient::FatPolyunsaturated => "fat_polyunsaturated",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::SugarAdded => "sugar_added",
            Nutrient::SugarAlcohols => "sugar_alcohols",
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::Thiamin => "thiamin",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Niacin => "niacin",
            Nutrient::PantothenicAcid => "pantothenic_acid",
            Nutrient::VitaminB6 => "vitamin_b6",
            Nutrient::Biotin => "biotin",
            Nutrient::VitaminB12 => "vitamin_b12",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminD => "vitamin_d",
            Nutrient::VitaminE => "vitamin_e",
            Nutrient::VitaminK => "vitamin_k",
            Nutrient::Folate => "folate",
            Nutrient::Choline => "choline",
            Nutrient::Calcium => "calcium",
            Nutrient::Chloride => "chloride",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
            Nutrient::Sodium => "sodium",
            Nutrient::Zinc => "zinc",
            Nutrient::Chromium => "chromium",
            Nutrient::Copper => "copper",
            Nutrient::Iodine => "iodine",
            Nutrient::Manganese => "manganese",
            Nutrient::Molybdenum => "molybdenum",
            Nutrient::Selenium => "selenium",
            Nutrient::Fluoride => "fluoride",
            Nutrient::Caffeine => "caffeine",
        }
    }

    /// Parse from a record field name (case-insensitive)
    pub fn from_key(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|n| n.key() == lower)
    }

    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Water => "Water",
            Nutrient::FatTotal => "Total Fat",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Protein => "Protein",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::FatSaturated => "Saturated Fat",
            Nutrient::FatMonounsaturated => "Monounsaturated Fat",
            Nutrient::FatPolyunsaturated => "Polyunsaturated Fat",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::SugarAdded => "Added Sugar",
            Nutrient::SugarAlcohols => "Sugar Alcohols",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::Thiamin => "Thiamin",
            Nutrient::Riboflavin => "Riboflavin",
            Nutrient::Niacin => "Niacin",
            Nutrient::PantothenicAcid => "Pantothenic Acid",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::Biotin => "Biotin",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::Folate => "Folate",
            Nutrient::Choline => "Choline",
            Nutrient::Calcium => "Calcium",
            Nutrient::Chloride => "Chloride",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
            Nutrient::Sodium => "Sodium",
            Nutrient::Zinc => "Zinc",
            Nutrient::Chromium => "Chromium",
            Nutrient::Copper => "Copper",
            Nutrient::Iodine => "Iodine",
            Nutrient::Manganese => "Manganese",
            Nutrient::Molybdenum => "Molybdenum",
            Nutrient::Selenium => "Selenium",
            Nutrient::Fluoride => "Fluoride",
            Nutrient::Caffeine => "Caffeine",
        }
    }

    /// Smallest nonzero mass the log scale can express, in grams
    pub fn minimum_mass(self) -> Mass {
        match self {
            Nutrient::Cholesterol => 0.001,
            Nutrient::VitaminA => 0.000001,
            Nutrient::Thiamin => 0.000001,
            Nutrient::Riboflavin => 0.000001,
            Nutrient::Niacin => 0.00001,
            Nutrient::PantothenicAcid => 0.0001,
            Nutrient::VitaminB6 => 0.000001,
            Nutrient::Biotin => 0.00001,
            Nutrient::VitaminB12 => 0.00000001,
            Nutrient::VitaminC => 0.0001,
            Nutrient::VitaminD => 0.00000001,
            Nutrient::VitaminE => 0.00001,
            Nutrient::VitaminK => 0.0000001,
            Nutrient::Folate => 0.000001,
            Nutrient::Choline => 0.001,
            Nutrient::Calcium => 0.001,
            Nutrient::Chloride => 0.001,
            Nutrient::Iron => 0.001,
            Nutrient::Magnesium => 0.001,
            Nutrient::Phosphorus => 0.001,
            Nutrient::Potassium => 0.01,
            Nutrient::Sodium => 0.001,
            Nutrient::Zinc => 0.00001,
            Nutrient::Chromium => 0.0000001,
            Nutrient::Copper => 0.000001,
            Nutrient::Iodine => 0.000001,
            Nutrient::Manganese => 0.00001,
            Nutrient::Molybdenum => 0.0000001,
            Nutrient::Selenium => 0.0000001,
            Nutrient::Fluoride => 0.00001,
            Nutrient::Caffeine => 0.001,
            // Macronutrients, sugars and water are counted in whole grams
            Nutrient::Water
            | Nutrient::FatTotal
            | Nutrient::Carbohydrates
            | Nutrient::Protein
            | Nutrient::Fiber
            | Nutrient::Sugar
            | Nutrient::FatSaturated
            | Nutrient::FatMonounsaturated
            | Nutrient::FatPolyunsaturated
            | Nutrient::SugarAdded
            | Nutrient::SugarAlcohols => 1.0,
        }
    }

    /// Largest mass either quantization can express, in grams
    pub fn maximum_mass(self) -> Mass {
        MAXIMUM_REPRESENTABLE_MASS
    }

    /// Read this nutrient's mass from a food
    pub fn get(self, food: &Food) -> Mass {
        match self {
            Nutrient::Water => food.water,
            Nutrient::FatTotal => food.fat_total,
            Nutrient::Carbohydrates => food.carbohydrates,
            Nutrient::Protein => food.protein,
            Nutrient::Fiber => food.fiber,
            Nutrient::Sugar => food.sugar,
            Nutrient::FatSaturated => food.fat_saturated,
            Nutrient::FatMonounsaturated => food.fat_monounsaturated,
            Nutrient::FatPolyunsaturated => food.fat_polyunsaturated,
            Nutrient::Cholesterol => food.cholesterol,
            Nutrient::SugarAdded => food.sugar_added,
            Nutrient::SugarAlcohols => food.sugar_alcohols,
            Nutrient::VitaminA => food.vitamin_a,
            Nutrient::Thiamin => food.thiamin,
            Nutrient::Riboflavin => food.riboflavin,
            Nutrient::Niacin => food.niacin,
            Nutrient::PantothenicAcid => food.pantothenic_acid,
            Nutrient::VitaminB6 => food.vitamin_b6,
            Nutrient::Biotin => food.biotin,
            Nutrient::VitaminB12 => food.vitamin_b12,
            Nutrient::VitaminC => food.vitamin_c,
            Nutrient::VitaminD => food.vitamin_d,
            Nutrient::VitaminE => food.vitamin_e,
            Nutrient::VitaminK => food.vitamin_k,
            Nutrient::Folate => food.folate,
            Nutrient::Choline => food.choline,
            Nutrient::Calcium => food.calcium,
            Nutrient::Chloride => food.chloride,
            Nutrient::Iron => food.iron,
            Nutrient::Magnesium => food.magnesium,
            Nutrient::Phosphorus => food.phosphorus,
            Nutrient::Potassium => food.potassium,
            Nutrient::Sodium => food.sodium,
            Nutrient::Zinc => food.zinc,
            Nutrient::Chromium => food.chromium,
            Nutrient::Copper => food.copper,
            Nutrient::Iodine => food.iodine,
            Nutrient::Manganese => food.manganese,
            Nutrient::Molybdenum => food.molybdenum,
            Nutrient::Selenium => food.selenium,
            Nutrient::Fluoride => food.fluoride,
            Nutrient::Caffeine => food.caffeine,
        }
    }

    /// Write this nutrient's mass into a food
    pub fn set(self, food: &mut Food, mass: Mass) {
        let field = match self {
            Nutrient::Water => &mut food.water,
            Nutrient::FatTotal => &mut food.fat_total,
            Nutrient::Carbohydrates => &mut food.carbohydrates,
            Nutrient::Protein => &mut food.protein,
            Nutrient::Fiber => &mut food.fiber,
            Nutrient::Sugar => &mut food.sugar,
            Nutrient::FatSaturated => &mut food.fat_saturated,
            Nutrient::FatMonounsaturated => &mut food.fat_monounsaturated,
            Nutrient::FatPolyunsaturated => &mut food.fat_polyunsaturated,
            Nutrient::Cholesterol => &mut food.cholesterol,
            Nutrient::SugarAdded => &mut food.sugar_added,
            Nutrient::SugarAlcohols => &mut food.sugar_alcohols,
            Nutrient::VitaminA => &mut food.vitamin_a,
            Nutrient::Thiamin => &mut food.thiamin,
            Nutrient::Riboflavin => &mut food.riboflavin,
            Nutrient::Niacin => &mut food.niacin,
            Nutrient::PantothenicAcid => &mut food.pantothenic_acid,
            Nutrient::VitaminB6 => &mut food.vitamin_b6,
            Nutrient::Biotin => &mut food.biotin,
            Nutrient::VitaminB12 => &mut food.vitamin_b12,
            Nutrient::VitaminC => &mut food.vitamin_c,
            Nutrient::VitaminD => &mut food.vitamin_d,
            Nutrient::VitaminE => &mut food.vitamin_e,
            Nutrient::VitaminK => &mut food.vitamin_k,
            Nutrient::Folate => &mut food.folate,
            Nutrient::Choline => &mut food.choline,
            Nutrient::Calcium => &mut food.calcium,
            Nutrient::Chloride => &mut food.chloride,
            Nutrient::Iron => &mut food.iron,
            Nutrient::Magnesium => &mut food.magnesium,
            Nutrient::Phosphorus => &mut food.phosphorus,
            Nutrient::Potassium => &mut food.potassium,
            Nutrient::Sodium => &mut food.sodium,
            Nutrient::Zinc => &mut food.zinc,
            Nutrient::Chromium => &mut food.chromium,
            Nutrient::Copper => &mut food.copper,
            Nutrient::Iodine => &mut food.iodine,
            Nutrient::Manganese => &mut food.manganese,
            Nutrient::Molybdenum => &mut food.molybdenum,
            Nutrient::Selenium => &mut food.selenium,
            Nutrient::Fluoride => &mut food.fluoride,
            Nutrient::Caffeine => &mut food.caffeine,
        };
        *field = mass;
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
