// ABOUTME: Nutrition calculation configuration with formula coefficients and multiplier tables
// ABOUTME: Configures BMR coefficients, activity factors, goal offsets, macro densities, and MET values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition calculation configuration
//!
//! Formula coefficients and lookup tables for the metric calculator. Defaults
//! reproduce the published values; a deployment can override them by
//! constructing its own [`NutritionConfig`].
//!
//! # Scientific References
//!
//! - BMR: revised Harris-Benedict equation, Roza & Shizgal (1984)
//!   DOI: 10.1093/ajcn/40.1.168
//! - Activity factors: `McArdle` et al. (2010), Exercise Physiology
//! - MET values: Ainsworth et al. (2011) Compendium of Physical Activities

use serde::{Deserialize, Serialize};

/// Top-level nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie-goal adjustment offsets
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macronutrient split settings (caloric densities and rounding)
    pub macro_split: MacroSplitConfig,
    /// MET values for activity calorie burn
    pub met: MetConfig,
    /// Protein recommendation grid (g per kg bodyweight)
    pub protein_needs: ProteinNeedsConfig,
}

/// BMR coefficients for the revised Harris-Benedict equation
///
/// Male:   base + `weight_coef`·kg + `height_coef`·cm − `age_coef`·years
/// Female: same shape with the female coefficient set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male base constant (88.362)
    pub male_base: f64,
    /// Male weight coefficient (13.397 kcal per kg)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799 kcal per cm)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677 kcal per year, subtracted)
    pub male_age_coef: f64,
    /// Female base constant (447.593)
    pub female_base: f64,
    /// Female weight coefficient (9.247 kcal per kg)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098 kcal per cm)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330 kcal per year, subtracted)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_base: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_base: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Daily calorie offset applied on top of TDEE for weight goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit/surplus in kcal/day (lose subtracts, gain adds): 500
    pub daily_offset_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            daily_offset_kcal: 500.0,
        }
    }
}

/// Caloric densities and rounding policy for the macronutrient split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein caloric density (4 kcal/g)
    pub protein_kcal_per_g: f64,
    /// Carbohydrate caloric density (4 kcal/g)
    pub carb_kcal_per_g: f64,
    /// Fat caloric density (9 kcal/g)
    pub fat_kcal_per_g: f64,
    /// Decimal places for gram and calorie values in the split (default 2)
    pub precision: u32,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: 4.0,
            carb_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
            precision: 2,
        }
    }
}

/// MET (Metabolic Equivalent of Task) values per workout intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetConfig {
    /// Low intensity: 3.5
    pub low: f64,
    /// Moderate intensity: 6.0
    pub moderate: f64,
    /// High intensity: 9.0
    pub high: f64,
}

impl Default for MetConfig {
    fn default() -> Self {
        Self {
            low: 3.5,
            moderate: 6.0,
            high: 9.0,
        }
    }
}

/// Protein recommendation grid in grams per kg bodyweight,
/// keyed by goal and training intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinNeedsConfig {
    /// Maintain weight, sedentary: 0.8 (DRI minimum)
    pub maintain_sedentary: f64,
    /// Maintain weight, moderate training: 1.2
    pub maintain_moderate: f64,
    /// Maintain weight, intense training: 1.6
    pub maintain_intense: f64,
    /// Weight loss, sedentary: 1.2
    pub lose_sedentary: f64,
    /// Weight loss, moderate training: 1.6
    pub lose_moderate: f64,
    /// Weight loss, intense training: 2.0
    pub lose_intense: f64,
    /// Muscle gain, sedentary: 1.6
    pub gain_sedentary: f64,
    /// Muscle gain, moderate training: 2.0
    pub gain_moderate: f64,
    /// Muscle gain, intense training: 2.4
    pub gain_intense: f64,
}

impl Default for ProteinNeedsConfig {
    fn default() -> Self {
        Self {
            maintain_sedentary: 0.8,
            maintain_moderate: 1.2,
            maintain_intense: 1.6,
            lose_sedentary: 1.2,
            lose_moderate: 1.6,
            lose_intense: 2.0,
            gain_sedentary: 1.6,
            gain_moderate: 2.0,
            gain_intense: 2.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_activity_factors_match_published_values() {
        let factors = ActivityFactorsConfig::default();
        assert!((factors.sedentary - 1.2).abs() < f64::EPSILON);
        assert!((factors.lightly_active - 1.375).abs() < f64::EPSILON);
        assert!((factors.moderately_active - 1.55).abs() < f64::EPSILON);
        assert!((factors.very_active - 1.725).abs() < f64::EPSILON);
        assert!((factors.extra_active - 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_macro_densities() {
        let split = MacroSplitConfig::default();
        assert!((split.protein_kcal_per_g - 4.0).abs() < f64::EPSILON);
        assert!((split.carb_kcal_per_g - 4.0).abs() < f64::EPSILON);
        assert!((split.fat_kcal_per_g - 9.0).abs() < f64::EPSILON);
        assert_eq!(split.precision, 2);
    }
}
