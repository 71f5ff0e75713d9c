// ABOUTME: Metric calculation engine module with body-metric formulas and nutrition advice
// ABOUTME: Pure, stateless operations: BMI, BMR, TDEE, calorie goal, macro split, burn, protein
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Metric Calculation Engine
//!
//! Deterministic, side-effect-free transformations of body-metric inputs into
//! derived health metrics. Each operation validates its inputs, computes a
//! closed-form result, and rounds to a fixed precision. The operations
//! compose in dependency order: BMR feeds TDEE feeds the calorie goal feeds
//! the macronutrient split, but every operation is independently callable.
//!
//! ## Conventions
//!
//! - Weight is kilograms, height is **centimeters** at every boundary (the
//!   engine converts to meters internally where a formula needs it).
//! - Results round half-away-from-zero to 2 decimal places unless a config
//!   struct says otherwise.
//! - Vocabulary tokens (sex, activity level, goal, intensity) match
//!   case-insensitively and are never trimmed: `"male "` is rejected.
//!
//! All operations are pure and synchronous: no shared state, no I/O, safe to
//! call concurrently from any number of request handlers.

mod advisor;
mod metrics;

pub use advisor::{
    analyze_day, protein_needs, DailyAnalysis, DailyTotals, MacroShare, MealEntry, ProteinNeeds,
    TrainingIntensity,
};
pub use metrics::{
    basal_metabolic_rate, body_mass_index, calorie_goal, calories_burned, macro_distribution,
    round_to, total_daily_energy_expenditure, ActivityLevel, BmiCategory, BmiResult,
    CaloriesBurned, Goal, Intensity, MacroDistribution, MacroPart, Sex, TdeeResult,
};
