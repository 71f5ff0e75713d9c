// ABOUTME: Nutrition advice operations: protein recommendations and daily intake analysis
// ABOUTME: Pure functions over caller-supplied profiles and meal entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition advice operations
//!
//! Recommendations layered on top of the core formulas: protein needs from a
//! goal × training-intensity grid, and aggregate analysis of a day's meals.

use crate::calculator::metrics::{round_to, Goal};
use crate::config::nutrition::ProteinNeedsConfig;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training intensity for protein recommendations
///
/// Distinct from [`super::ActivityLevel`]: the protein grid uses three
/// coarse buckets, not the five TDEE multiplier levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrainingIntensity {
    /// Little or no training
    Sedentary,
    /// Regular moderate training
    Moderate,
    /// Heavy or daily training
    Intense,
}

impl TrainingIntensity {
    /// Accepted tokens
    pub const VALID_TOKENS: [&'static str; 3] = ["sedentary", "moderate", "intense"];
}

impl FromStr for TrainingIntensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "intense" => Ok(Self::Intense),
            _ => Err(AppError::invalid_input(format!(
                "Invalid training intensity \"{s}\". Must be one of: {}",
                Self::VALID_TOKENS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for TrainingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Moderate => write!(f, "moderate"),
            Self::Intense => write!(f, "intense"),
        }
    }
}

/// Recommended daily protein intake
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProteinNeeds {
    /// Recommended grams per day, rounded to 1 decimal
    pub recommended_g: f64,
    /// Grams per kg bodyweight applied
    pub g_per_kg: f64,
    /// Protein calories (grams × 4), rounded to whole kcal
    pub calories: f64,
    /// Input weight in kilograms
    pub weight_kg: f64,
    /// Goal used
    pub goal: Goal,
    /// Training intensity used
    pub intensity: TrainingIntensity,
}

/// One meal's nutrient contribution for daily analysis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
}

/// Summed nutrient totals for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTotals {
    /// Total calories, rounded to whole kcal
    pub calories: f64,
    /// Total protein grams, rounded to 1 decimal
    pub protein_g: f64,
    /// Total carbohydrate grams, rounded to 1 decimal
    pub carbs_g: f64,
    /// Total fat grams, rounded to 1 decimal
    pub fat_g: f64,
}

/// Per-macro share of total grams, as whole percentages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroShare {
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fat_percent: f64,
}

/// Aggregate analysis of a day's meals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyAnalysis {
    pub totals: DailyTotals,
    pub distribution: MacroShare,
    pub meal_count: usize,
}

/// Calculate recommended daily protein intake
///
/// Applies a grams-per-kg factor from the goal × intensity grid
/// (0.8 g/kg sedentary maintenance up to 2.4 g/kg intense muscle gain).
///
/// # Errors
///
/// Returns `InvalidInput` when weight is not strictly positive.
pub fn protein_needs(
    weight_kg: f64,
    goal: Goal,
    intensity: TrainingIntensity,
    config: &ProteinNeedsConfig,
) -> AppResult<ProteinNeeds> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("Weight must be positive"));
    }

    let g_per_kg = match (goal, intensity) {
        (Goal::Maintain, TrainingIntensity::Sedentary) => config.maintain_sedentary,
        (Goal::Maintain, TrainingIntensity::Moderate) => config.maintain_moderate,
        (Goal::Maintain, TrainingIntensity::Intense) => config.maintain_intense,
        (Goal::Lose, TrainingIntensity::Sedentary) => config.lose_sedentary,
        (Goal::Lose, TrainingIntensity::Moderate) => config.lose_moderate,
        (Goal::Lose, TrainingIntensity::Intense) => config.lose_intense,
        (Goal::Gain, TrainingIntensity::Sedentary) => config.gain_sedentary,
        (Goal::Gain, TrainingIntensity::Moderate) => config.gain_moderate,
        (Goal::Gain, TrainingIntensity::Intense) => config.gain_intense,
    };

    let grams = weight_kg * g_per_kg;
    Ok(ProteinNeeds {
        recommended_g: round_to(grams, 1),
        g_per_kg,
        calories: (grams * 4.0).round(),
        weight_kg,
        goal,
        intensity,
    })
}

/// Analyze a day's meal entries
///
/// Sums calories and macro grams across entries and derives each macro's
/// share of total grams. An empty list is valid and yields zero totals with
/// zero percentages.
#[must_use]
pub fn analyze_day(entries: &[MealEntry]) -> DailyAnalysis {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;

    for entry in entries {
        calories += entry.calories;
        protein += entry.protein_g;
        carbs += entry.carbs_g;
        fat += entry.fat_g;
    }

    let total_grams = protein + carbs + fat;
    let share = |grams: f64| {
        if total_grams > 0.0 {
            (grams / total_grams * 100.0).round()
        } else {
            0.0
        }
    };

    DailyAnalysis {
        totals: DailyTotals {
            calories: calories.round(),
            protein_g: round_to(protein, 1),
            carbs_g: round_to(carbs, 1),
            fat_g: round_to(fat, 1),
        },
        distribution: MacroShare {
            protein_percent: share(protein),
            carbs_percent: share(carbs),
            fat_percent: share(fat),
        },
        meal_count: entries.len(),
    }
}
