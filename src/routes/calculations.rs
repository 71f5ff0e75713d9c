// ABOUTME: Nutrition calculation route handlers exposing the metric engine over HTTP
// ABOUTME: Provides BMI, BMR, TDEE, calorie goal, macro split, and analysis endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition and energy calculation routes
//!
//! Thin handlers that parse query parameters, delegate to the pure
//! calculation functions in [`crate::calculator`], and wrap results
//! in the standard response envelope.

use crate::calculator::{
    analyze_day, basal_metabolic_rate, body_mass_index, calorie_goal, calories_burned,
    macro_distribution, protein_needs, total_daily_energy_expenditure, ActivityLevel,
    Goal, Intensity, MealEntry, Sex, TrainingIntensity,
};
use crate::errors::{AppError, AppResult};
use crate::routes::ApiResponse;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Reject a missing query parameter with a field-specific error
fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

/// Query parameters for body mass index
#[derive(Deserialize, Default)]
struct BmiQuery {
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
}

/// Query parameters for basal metabolic rate
#[derive(Deserialize, Default)]
struct BmrQuery {
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    sex: Option<String>,
}

/// Query parameters for total daily energy expenditure
///
/// `bmr` is the primary input; the full profile parameters are accepted as
/// an alternative and the BMR is computed from them when `bmr` is absent.
#[derive(Deserialize, Default)]
struct TdeeQuery {
    bmr: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    sex: Option<String>,
    activity_level: Option<String>,
}

impl TdeeQuery {
    fn has_profile(&self) -> bool {
        self.weight_kg.is_some() || self.height_cm.is_some() || self.age.is_some()
            || self.sex.is_some()
    }
}

/// Query parameters for the calorie goal endpoint
///
/// `tdee` is the primary input; the full profile parameters are accepted as
/// an alternative and the TDEE is computed from them when `tdee` is absent.
#[derive(Deserialize, Default)]
struct CalorieGoalQuery {
    tdee: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    sex: Option<String>,
    activity_level: Option<String>,
    goal: Option<String>,
}

impl CalorieGoalQuery {
    fn has_profile(&self) -> bool {
        self.weight_kg.is_some() || self.height_cm.is_some() || self.age.is_some()
            || self.sex.is_some() || self.activity_level.is_some()
    }
}

/// Query parameters for the macro split endpoint
#[derive(Deserialize, Default)]
struct MacrosQuery {
    #[serde(alias = "calorie_target")]
    calories: Option<f64>,
    protein_pct: Option<f64>,
    carb_pct: Option<f64>,
    fat_pct: Option<f64>,
}

/// Query parameters for exercise energy expenditure
#[derive(Deserialize, Default)]
struct CaloriesBurnedQuery {
    weight_kg: Option<f64>,
    duration_min: Option<f64>,
    intensity: Option<String>,
}

/// Query parameters for protein intake recommendations
#[derive(Deserialize, Default)]
struct ProteinNeedsQuery {
    weight_kg: Option<f64>,
    goal: Option<String>,
    intensity: Option<String>,
}

/// Request body for the daily intake analysis endpoint
#[derive(Deserialize, Default)]
struct DailyAnalysisRequest {
    #[serde(default)]
    meals: Vec<MealEntry>,
}

/// Nutrition calculation routes
pub struct CalculationRoutes;

impl CalculationRoutes {
    /// Create all calculation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculations/bmi", get(Self::handle_bmi))
            .route("/api/calculations/bmr", get(Self::handle_bmr))
            .route("/api/calculations/tdee", get(Self::handle_tdee))
            .route("/api/calculations/calorie-goal", get(Self::handle_calorie_goal))
            .route("/api/calculations/macros", get(Self::handle_macros))
            .route(
                "/api/calculations/calories-burned",
                get(Self::handle_calories_burned),
            )
            .route(
                "/api/calculations/protein-needs",
                get(Self::handle_protein_needs),
            )
            .route(
                "/api/calculations/daily-analysis",
                post(Self::handle_daily_analysis),
            )
            .with_state(resources)
    }

    async fn handle_bmi(Query(params): Query<BmiQuery>) -> Result<Response, AppError> {
        let weight_kg = require(params.weight_kg, "weight_kg")?;
        let height_cm = require(params.height_cm, "height_cm")?;

        let result = body_mass_index(weight_kg, height_cm)?;
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }

    async fn handle_bmr(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<BmrQuery>,
    ) -> Result<Response, AppError> {
        let weight_kg = require(params.weight_kg, "weight_kg")?;
        let height_cm = require(params.height_cm, "height_cm")?;
        let age = require(params.age, "age")?;
        let sex: Sex = require(params.sex, "sex")?.parse()?;

        let bmr = basal_metabolic_rate(weight_kg, height_cm, age, sex, &resources.nutrition.bmr)?;
        Ok((
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::json!({
                "bmr": bmr,
                "weight_kg": weight_kg,
                "height_cm": height_cm,
                "age": age,
                "sex": sex,
            }))),
        )
            .into_response())
    }

    async fn handle_tdee(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<TdeeQuery>,
    ) -> Result<Response, AppError> {
        let level: ActivityLevel =
            require(params.activity_level.clone(), "activity_level")?.parse()?;

        let bmr = if let Some(bmr) = params.bmr {
            bmr
        } else if params.has_profile() {
            let weight_kg = require(params.weight_kg, "weight_kg")?;
            let height_cm = require(params.height_cm, "height_cm")?;
            let age = require(params.age, "age")?;
            let sex: Sex = require(params.sex, "sex")?.parse()?;
            basal_metabolic_rate(weight_kg, height_cm, age, sex, &resources.nutrition.bmr)?
        } else {
            return Err(AppError::missing_field("bmr"));
        };

        let result =
            total_daily_energy_expenditure(bmr, level, &resources.nutrition.activity_factors)?;
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }

    async fn handle_calorie_goal(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CalorieGoalQuery>,
    ) -> Result<Response, AppError> {
        let goal: Goal = require(params.goal.clone(), "goal")?.parse()?;

        let tdee = if let Some(tdee) = params.tdee {
            tdee
        } else if params.has_profile() {
            let weight_kg = require(params.weight_kg, "weight_kg")?;
            let height_cm = require(params.height_cm, "height_cm")?;
            let age = require(params.age, "age")?;
            let sex: Sex = require(params.sex, "sex")?.parse()?;
            let level: ActivityLevel =
                require(params.activity_level, "activity_level")?.parse()?;
            let bmr =
                basal_metabolic_rate(weight_kg, height_cm, age, sex, &resources.nutrition.bmr)?;
            total_daily_energy_expenditure(bmr, level, &resources.nutrition.activity_factors)?
                .value
        } else {
            return Err(AppError::missing_field("tdee"));
        };

        let target = calorie_goal(tdee, goal, &resources.nutrition.goal_adjustment)?;

        Ok((
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::json!({
                "calorie_target": target,
                "tdee": tdee,
                "goal": goal,
            }))),
        )
            .into_response())
    }

    async fn handle_macros(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<MacrosQuery>,
    ) -> Result<Response, AppError> {
        let calorie_target = require(params.calories, "calories")?;
        let protein_pct = params.protein_pct.unwrap_or(30.0);
        let carb_pct = params.carb_pct.unwrap_or(40.0);
        let fat_pct = params.fat_pct.unwrap_or(30.0);

        let result = macro_distribution(
            calorie_target,
            protein_pct,
            fat_pct,
            carb_pct,
            &resources.nutrition.macro_split,
        )?;
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }

    async fn handle_calories_burned(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<CaloriesBurnedQuery>,
    ) -> Result<Response, AppError> {
        let weight_kg = require(params.weight_kg, "weight_kg")?;
        let duration_min = require(params.duration_min, "duration_min")?;
        let intensity: Intensity = require(params.intensity, "intensity")?.parse()?;

        let result = calories_burned(weight_kg, duration_min, intensity, &resources.nutrition.met)?;
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }

    async fn handle_protein_needs(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ProteinNeedsQuery>,
    ) -> Result<Response, AppError> {
        let weight_kg = require(params.weight_kg, "weight_kg")?;
        let goal: Goal = require(params.goal, "goal")?.parse()?;
        let intensity: TrainingIntensity = require(params.intensity, "intensity")?.parse()?;

        let result = protein_needs(weight_kg, goal, intensity, &resources.nutrition.protein_needs)?;
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }

    async fn handle_daily_analysis(
        Json(request): Json<DailyAnalysisRequest>,
    ) -> Result<Response, AppError> {
        let result = analyze_day(&request.meals);
        Ok((StatusCode::OK, Json(ApiResponse::new(result))).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::require;

    #[test]
    fn missing_parameter_yields_field_specific_error() {
        let err = require::<f64>(None, "weight_kg").unwrap_err();
        assert!(err.message.contains("weight_kg"));
    }

    #[test]
    fn present_parameter_passes_through() {
        assert!((require(Some(72.5_f64), "weight_kg").unwrap() - 72.5).abs() < f64::EPSILON);
    }
}
