// Comprehensive tests for the nutrition metric engine
// Covers BMI, BMR, TDEE, calorie goals, macro splits, calorie burn, and protein needs

use gainstracker::calculator::{
    analyze_day, basal_metabolic_rate, body_mass_index, calorie_goal, calories_burned,
    macro_distribution, protein_needs, total_daily_energy_expenditure, ActivityLevel, BmiCategory,
    Goal, Intensity, MealEntry, Sex, TrainingIntensity,
};
use gainstracker::config::NutritionConfig;
use gainstracker::errors::ErrorCode;

fn config() -> NutritionConfig {
    NutritionConfig::default()
}

// ============================================================================
// Body mass index
// ============================================================================

#[test]
fn test_bmi_reference_value() {
    let result = body_mass_index(70.0, 175.0).unwrap();
    assert!((result.value - 22.86).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::Normal);
}

#[test]
fn test_bmi_classifies_rounded_value_at_band_edge() {
    // 18.5 kg at 100 cm computes to exactly 18.5, the lower-inclusive
    // boundary of the normal band
    let result = body_mass_index(18.5, 100.0).unwrap();
    assert!((result.value - 18.5).abs() < 1e-9);
    assert_eq!(result.category, BmiCategory::Normal);
}

#[test]
fn test_bmi_bands() {
    assert_eq!(
        body_mass_index(50.0, 175.0).unwrap().category,
        BmiCategory::Underweight
    );
    assert_eq!(
        body_mass_index(80.0, 175.0).unwrap().category,
        BmiCategory::Overweight
    );
    assert_eq!(
        body_mass_index(100.0, 175.0).unwrap().category,
        BmiCategory::Obese
    );
}

#[test]
fn test_bmi_rejects_non_positive_measurements() {
    assert_eq!(
        body_mass_index(0.0, 175.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        body_mass_index(70.0, -1.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

// ============================================================================
// Basal metabolic rate
// ============================================================================

#[test]
fn test_bmr_male_reference_value() {
    // 88.362 + 13.397*70 + 4.799*175 - 5.677*30 = 1695.667
    let bmr = basal_metabolic_rate(70.0, 175.0, 30, Sex::Male, &config().bmr).unwrap();
    assert!((bmr - 1695.67).abs() < 1e-9);
}

#[test]
fn test_bmr_female_reference_value() {
    // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
    let bmr = basal_metabolic_rate(60.0, 165.0, 25, Sex::Female, &config().bmr).unwrap();
    assert!((bmr - 1405.33).abs() < 1e-9);
}

#[test]
fn test_bmr_rejects_zero_age() {
    assert_eq!(
        basal_metabolic_rate(70.0, 175.0, 0, Sex::Male, &config().bmr)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
}

#[test]
fn test_bmr_is_deterministic() {
    let config = config();
    let first = basal_metabolic_rate(82.3, 179.5, 41, Sex::Female, &config.bmr).unwrap();
    let second = basal_metabolic_rate(82.3, 179.5, 41, Sex::Female, &config.bmr).unwrap();
    assert!((first - second).abs() < f64::EPSILON);
}

// ============================================================================
// Total daily energy expenditure
// ============================================================================

#[test]
fn test_tdee_sedentary_reference_value() {
    let result =
        total_daily_energy_expenditure(1695.1, ActivityLevel::Sedentary, &config().activity_factors)
            .unwrap();
    assert!((result.value - 2034.12).abs() < 1e-9);
    assert!((result.multiplier - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_tdee_all_multipliers() {
    let factors = config().activity_factors;
    let cases = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtraActive, 1.9),
    ];
    for (level, multiplier) in cases {
        let result = total_daily_energy_expenditure(2000.0, level, &factors).unwrap();
        assert!((result.value - 2000.0 * multiplier).abs() < 1e-9);
        assert_eq!(result.activity_level, level);
    }
}

#[test]
fn test_unknown_activity_level_error_lists_accepted_tokens() {
    let error = "couch_potato".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidActivityLevel);
    for token in ActivityLevel::VALID_TOKENS {
        assert!(error.message.contains(token), "missing token {token}");
    }
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    assert_eq!(
        total_daily_energy_expenditure(0.0, ActivityLevel::Sedentary, &config().activity_factors)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
}

// ============================================================================
// Calorie goal
// ============================================================================

#[test]
fn test_calorie_goal_offsets() {
    let adjustment = config().goal_adjustment;
    assert!((calorie_goal(2000.0, Goal::Lose, &adjustment).unwrap() - 1500.0).abs() < 1e-9);
    assert!((calorie_goal(2000.0, Goal::Maintain, &adjustment).unwrap() - 2000.0).abs() < 1e-9);
    assert!((calorie_goal(2000.0, Goal::Gain, &adjustment).unwrap() - 2500.0).abs() < 1e-9);
}

#[test]
fn test_goal_parsing() {
    assert_eq!("LOSE".parse::<Goal>().unwrap(), Goal::Lose);
    let error = "bulk".parse::<Goal>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidGoal);
}

// ============================================================================
// Macro distribution
// ============================================================================

#[test]
fn test_macro_distribution_reference_split() {
    // 2000 kcal at 30/30/40 protein/fat/carb
    let result = macro_distribution(2000.0, 30.0, 30.0, 40.0, &config().macro_split).unwrap();

    assert!((result.protein.grams - 150.0).abs() < 1e-9);
    assert!((result.protein.calories - 600.0).abs() < 1e-9);

    assert!((result.fat.grams - 66.67).abs() < 1e-9);
    assert!((result.fat.calories - 600.0).abs() < 1e-9);

    assert!((result.carbs.grams - 200.0).abs() < 1e-9);
    assert!((result.carbs.calories - 800.0).abs() < 1e-9);
}

#[test]
fn test_macro_ratios_must_sum_to_exactly_one_hundred() {
    let split = config().macro_split;
    assert_eq!(
        macro_distribution(2000.0, 30.0, 30.0, 39.0, &split)
            .unwrap_err()
            .code,
        ErrorCode::InvalidRatios
    );
    assert_eq!(
        macro_distribution(2000.0, 30.0, 30.0, 41.0, &split)
            .unwrap_err()
            .code,
        ErrorCode::InvalidRatios
    );
    // Fractional percentages are fine as long as the sum is exact
    assert!(macro_distribution(2000.0, 30.5, 30.5, 39.0, &split).is_ok());
    // One-third each does not sum to 100 in f64 and is rejected
    assert!(macro_distribution(2000.0, 33.3, 33.3, 33.3, &split).is_err());
}

#[test]
fn test_macro_distribution_is_idempotent() {
    let split = config().macro_split;
    let first = macro_distribution(1847.0, 25.0, 35.0, 40.0, &split).unwrap();
    let second = macro_distribution(1847.0, 25.0, 35.0, 40.0, &split).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Calories burned
// ============================================================================

#[test]
fn test_calories_burned_moderate_hour() {
    // MET 6.0 * 70 kg * 1 h = 420 kcal
    let result = calories_burned(70.0, 60.0, Intensity::Moderate, &config().met).unwrap();
    assert!((result.calories - 420.0).abs() < 1e-9);
    assert!((result.met - 6.0).abs() < f64::EPSILON);
}

#[test]
fn test_calories_burned_scales_with_duration() {
    let met = config().met;
    let half = calories_burned(70.0, 30.0, Intensity::High, &met).unwrap();
    let full = calories_burned(70.0, 60.0, Intensity::High, &met).unwrap();
    assert!((full.calories - 2.0 * half.calories).abs() < 1e-9);
}

#[test]
fn test_calories_burned_rejects_zero_duration() {
    assert_eq!(
        calories_burned(70.0, 0.0, Intensity::Low, &config().met)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
}

// ============================================================================
// Protein needs
// ============================================================================

#[test]
fn test_protein_needs_maintain_sedentary() {
    // 0.8 g/kg * 70 kg = 56 g
    let result = protein_needs(
        70.0,
        Goal::Maintain,
        TrainingIntensity::Sedentary,
        &config().protein_needs,
    )
    .unwrap();
    assert!((result.recommended_g - 56.0).abs() < 1e-9);
    assert!((result.g_per_kg - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_protein_needs_grid_is_monotonic_in_intensity() {
    let needs = config().protein_needs;
    for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
        let sedentary =
            protein_needs(70.0, goal, TrainingIntensity::Sedentary, &needs).unwrap();
        let moderate = protein_needs(70.0, goal, TrainingIntensity::Moderate, &needs).unwrap();
        let intense = protein_needs(70.0, goal, TrainingIntensity::Intense, &needs).unwrap();
        assert!(sedentary.recommended_g < moderate.recommended_g);
        assert!(moderate.recommended_g < intense.recommended_g);
    }
}

// ============================================================================
// Daily intake analysis
// ============================================================================

#[test]
fn test_analyze_day_sums_and_distributes() {
    let meals = vec![
        MealEntry {
            calories: 600.0,
            protein_g: 40.0,
            carbs_g: 50.0,
            fat_g: 20.0,
        },
        MealEntry {
            calories: 400.0,
            protein_g: 10.0,
            carbs_g: 50.0,
            fat_g: 30.0,
        },
    ];

    let analysis = analyze_day(&meals);
    assert_eq!(analysis.meal_count, 2);
    assert!((analysis.totals.calories - 1000.0).abs() < 1e-9);
    assert!((analysis.totals.protein_g - 50.0).abs() < 1e-9);
    assert!((analysis.totals.carbs_g - 100.0).abs() < 1e-9);
    assert!((analysis.totals.fat_g - 50.0).abs() < 1e-9);
    // 200 g total: 25% protein, 50% carbs, 25% fat
    assert!((analysis.distribution.protein_percent - 25.0).abs() < 1e-9);
    assert!((analysis.distribution.carbs_percent - 50.0).abs() < 1e-9);
    assert!((analysis.distribution.fat_percent - 25.0).abs() < 1e-9);
}

#[test]
fn test_analyze_day_empty_is_all_zero() {
    let analysis = analyze_day(&[]);
    assert_eq!(analysis.meal_count, 0);
    assert!((analysis.totals.calories).abs() < f64::EPSILON);
    assert!((analysis.distribution.protein_percent).abs() < f64::EPSILON);
}
