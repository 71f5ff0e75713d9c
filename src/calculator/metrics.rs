// ABOUTME: Core body-metric formulas: BMI, BMR, TDEE, calorie goal, macro split, calorie burn
// ABOUTME: Each operation validates inputs and rounds results to a fixed precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Body-metric calculation operations
//!
//! # Formulas
//!
//! - BMI: weight / height_m², classified at 18.5 / 25 / 30
//! - BMR: revised Harris-Benedict, sex-specific linear formula
//! - TDEE: BMR × activity factor
//! - Calorie goal: TDEE ± fixed daily offset
//! - Macro split: calorie share per macro, divided by caloric density
//! - Calorie burn: MET × weight × hours

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroSplitConfig, MetConfig,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Round half-away-from-zero to `precision` decimal places
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision.min(12) as i32);
    (value * factor).round() / factor
}

fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Biological sex for the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    // Case-insensitive, no trimming: "male " is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(AppError::invalid_sex(s)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Activity level for the TDEE multiplier table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (×1.2)
    Sedentary,
    /// Exercise 1-3 days/week (×1.375)
    LightlyActive,
    /// Exercise 3-5 days/week (×1.55)
    ModeratelyActive,
    /// Exercise 6-7 days/week (×1.725)
    VeryActive,
    /// Hard training twice a day (×1.9)
    ExtraActive,
}

impl ActivityLevel {
    /// Canonical tokens, in multiplier order
    pub const VALID_TOKENS: [&'static str; 5] = [
        "sedentary",
        "lightly_active",
        "moderately_active",
        "very_active",
        "extra_active",
    ];

    /// Look up this level's multiplier in the factor table
    #[must_use]
    pub const fn multiplier(self, factors: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => factors.sedentary,
            Self::LightlyActive => factors.lightly_active,
            Self::ModeratelyActive => factors.moderately_active,
            Self::VeryActive => factors.very_active,
            Self::ExtraActive => factors.extra_active,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    // Accepts both the canonical snake_case tokens and the space-separated
    // spellings ("lightly active"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "lightly active" => Ok(Self::LightlyActive),
            "moderately_active" | "moderately active" => Ok(Self::ModeratelyActive),
            "very_active" | "very active" => Ok(Self::VeryActive),
            "extra_active" | "extra active" => Ok(Self::ExtraActive),
            _ => Err(AppError::invalid_activity_level(s, &Self::VALID_TOKENS)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        };
        write!(f, "{token}")
    }
}

/// Weight goal for calorie-target adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit (−500 kcal/day)
    Lose,
    /// Caloric balance
    Maintain,
    /// Caloric surplus (+500 kcal/day)
    Gain,
}

impl Goal {
    /// Accepted tokens
    pub const VALID_TOKENS: [&'static str; 3] = ["lose", "maintain", "gain"];
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(AppError::invalid_goal(s, &Self::VALID_TOKENS)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Maintain => write!(f, "maintain"),
            Self::Gain => write!(f, "gain"),
        }
    }
}

/// Workout intensity for MET-based calorie burn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Light effort (MET 3.5)
    Low,
    /// Moderate effort (MET 6.0)
    Moderate,
    /// Vigorous effort (MET 9.0)
    High,
}

impl Intensity {
    /// Accepted tokens
    pub const VALID_TOKENS: [&'static str; 3] = ["low", "moderate", "high"];

    /// Look up this intensity's MET value
    #[must_use]
    pub const fn met(self, config: &MetConfig) -> f64 {
        match self {
            Self::Low => config.low,
            Self::Moderate => config.moderate,
            Self::High => config.high,
        }
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(AppError::invalid_input(format!(
                "Invalid intensity \"{s}\". Must be one of: {}",
                Self::VALID_TOKENS.join(", ")
            ))),
        }
    }
}

/// BMI classification bands (lower-inclusive at 18.5 / 25 / 30)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value into its band
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value < 18.5 {
            Self::Underweight
        } else if value < 25.0 {
            Self::Normal
        } else if value < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Body mass index result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiResult {
    /// BMI value in kg/m², rounded to 2 decimals
    pub value: f64,
    /// Classification band of the rounded value
    pub category: BmiCategory,
    /// Input weight in kilograms
    pub weight_kg: f64,
    /// Input height in centimeters
    pub height_cm: f64,
}

/// TDEE result with the inputs that produced it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TdeeResult {
    /// TDEE in kcal/day, rounded to 2 decimals
    pub value: f64,
    /// Input BMR in kcal/day
    pub bmr: f64,
    /// Activity level used
    pub activity_level: ActivityLevel,
    /// Multiplier applied
    pub multiplier: f64,
}

/// One macro's share of the calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPart {
    /// Grams of this macro
    pub grams: f64,
    /// Share of the calorie target, as supplied
    pub percent: f64,
    /// Calories allocated to this macro
    pub calories: f64,
}

/// Macronutrient distribution across protein, carbohydrates, and fat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroDistribution {
    /// The calorie target the split was computed from
    pub calorie_target: f64,
    pub protein: MacroPart,
    pub carbs: MacroPart,
    pub fat: MacroPart,
}

/// Calories burned during a physical activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CaloriesBurned {
    /// Estimated calories burned, rounded to 2 decimals
    pub calories: f64,
    /// MET value applied
    pub met: f64,
    /// Input weight in kilograms
    pub weight_kg: f64,
    /// Input duration in minutes
    pub duration_min: f64,
    /// Intensity used
    pub intensity: Intensity,
}

/// Calculate the body mass index and its classification band
///
/// Height is centimeters; the engine converts to meters. The category is
/// derived from the rounded value, so the published band boundaries apply to
/// the number the caller actually sees.
///
/// # Errors
///
/// Returns `InvalidInput` when weight or height is not strictly positive.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> AppResult<BmiResult> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("Height must be positive"));
    }

    let height_m = height_cm / 100.0;
    let value = round2(weight_kg / (height_m * height_m));

    Ok(BmiResult {
        value,
        category: BmiCategory::classify(value),
        weight_kg,
        height_cm,
    })
}

/// Calculate the Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Male:   88.362 + 13.397·weight + 4.799·height − 5.677·age
/// - Female: 447.593 + 9.247·weight + 3.098·height − 4.330·age
///
/// Result in kcal/day, rounded to 2 decimals.
///
/// # Errors
///
/// Returns `InvalidInput` when weight, height, or age is not strictly
/// positive. (`InvalidSex` is produced when parsing the sex token, before
/// this function is reached.)
pub fn basal_metabolic_rate(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::invalid_input(
            "Weight and height must be positive",
        ));
    }
    if age == 0 {
        return Err(AppError::invalid_input("Age must be positive"));
    }

    let age = f64::from(age);
    let bmr = match sex {
        Sex::Male => {
            config.male_base + config.male_weight_coef * weight_kg
                + config.male_height_coef * height_cm
                - config.male_age_coef * age
        }
        Sex::Female => {
            config.female_base + config.female_weight_coef * weight_kg
                + config.female_height_coef * height_cm
                - config.female_age_coef * age
        }
    };

    Ok(round2(bmr))
}

/// Calculate the Total Daily Energy Expenditure
///
/// TDEE = BMR × activity factor, rounded to 2 decimals.
///
/// # Errors
///
/// Returns `InvalidInput` when BMR is not positive. (`InvalidActivityLevel`
/// is produced when parsing the level token.)
pub fn total_daily_energy_expenditure(
    bmr: f64,
    activity_level: ActivityLevel,
    factors: &ActivityFactorsConfig,
) -> AppResult<TdeeResult> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    let multiplier = activity_level.multiplier(factors);
    Ok(TdeeResult {
        value: round2(bmr * multiplier),
        bmr,
        activity_level,
        multiplier,
    })
}

/// Calculate the daily calorie goal from TDEE and a weight goal
///
/// Lose subtracts the configured offset, gain adds it, maintain leaves the
/// TDEE untouched. Rounded to 2 decimals.
///
/// # Errors
///
/// Returns `InvalidInput` when TDEE is not positive. (`InvalidGoal` is
/// produced when parsing the goal token.)
pub fn calorie_goal(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> AppResult<f64> {
    if tdee <= 0.0 {
        return Err(AppError::invalid_input("TDEE must be positive"));
    }

    let value = match goal {
        Goal::Lose => tdee - config.daily_offset_kcal,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + config.daily_offset_kcal,
    };

    Ok(round2(value))
}

/// Calculate the macronutrient distribution for a calorie target
///
/// Per-macro calories are the percentage share of the target; grams divide
/// those calories by the macro's caloric density (4 kcal/g for protein and
/// carbohydrates, 9 kcal/g for fat). Grams and calories round to the
/// configured precision (default 2 decimals).
///
/// The percentages must sum to exactly 100: strict `f64` equality, no
/// tolerance band. 30.5 + 30.5 + 39 passes; 30.5 + 30.5 + 39.000001 fails.
///
/// # Errors
///
/// Returns `InvalidRatios` when the percentages do not sum to 100.
pub fn macro_distribution(
    calorie_target: f64,
    protein_pct: f64,
    fat_pct: f64,
    carb_pct: f64,
    config: &MacroSplitConfig,
) -> AppResult<MacroDistribution> {
    let sum = protein_pct + fat_pct + carb_pct;
    if sum != 100.0 {
        return Err(AppError::invalid_ratios(sum));
    }

    let precision = config.precision;
    let part = |pct: f64, kcal_per_g: f64| {
        let calories = calorie_target * pct / 100.0;
        MacroPart {
            grams: round_to(calories / kcal_per_g, precision),
            percent: pct,
            calories: round_to(calories, precision),
        }
    };

    Ok(MacroDistribution {
        calorie_target,
        protein: part(protein_pct, config.protein_kcal_per_g),
        carbs: part(carb_pct, config.carb_kcal_per_g),
        fat: part(fat_pct, config.fat_kcal_per_g),
    })
}

/// Estimate calories burned during a physical activity
///
/// calories = MET × weight × duration in hours, rounded to 2 decimals.
///
/// # Errors
///
/// Returns `InvalidInput` when weight or duration is not strictly positive.
pub fn calories_burned(
    weight_kg: f64,
    duration_min: f64,
    intensity: Intensity,
    config: &MetConfig,
) -> AppResult<CaloriesBurned> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if duration_min <= 0.0 {
        return Err(AppError::invalid_input("Duration must be positive"));
    }

    let met = intensity.met(config);
    Ok(CaloriesBurned {
        calories: round2(met * weight_kg * (duration_min / 60.0)),
        met,
        weight_kg,
        duration_min,
        intensity,
    })
}
