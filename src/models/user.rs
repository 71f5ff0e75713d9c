// ABOUTME: User profile model with precondition validation and server-side BMI derivation
// ABOUTME: Collects every violation so clients see the complete error list at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User profile model

use crate::calculator::{body_mass_index, BmiResult};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;

// RFC-lite: one @, no whitespace, a dot in the domain part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const MIN_USERNAME_LEN: usize = 3;

/// A stored user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Unique username (min 3 chars)
    pub username: String,
    /// Optional unique email address
    pub email: Option<String>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Body mass index, recomputed server-side whenever weight and height
    /// are both present
    pub bmi: Option<f64>,
    /// Daily calorie target in kcal
    pub calorie_target: Option<f64>,
    /// Daily protein target in grams
    pub protein_target_g: Option<f64>,
    /// Daily carbohydrate target in grams
    pub carb_target_g: Option<f64>,
    /// Daily fat target in grams
    pub fat_target_g: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied profile data for create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub calorie_target: Option<f64>,
    #[serde(default)]
    pub protein_target_g: Option<f64>,
    #[serde(default)]
    pub carb_target_g: Option<f64>,
    #[serde(default)]
    pub fat_target_g: Option<f64>,
}

impl UserProfile {
    /// Validate the profile's preconditions
    ///
    /// Collects every violation instead of stopping at the first, so the
    /// client sees the complete list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` with the violation list in the details
    /// payload.
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.username.len() < MIN_USERNAME_LEN {
            errors.push(format!(
                "Username must be at least {MIN_USERNAME_LEN} characters"
            ));
        }
        if let Some(email) = &self.email {
            if !EMAIL_RE.is_match(email) {
                errors.push("Email is not valid".into());
            }
        }
        if let Some(weight) = self.weight_kg {
            if weight <= 0.0 {
                errors.push("Weight must be positive".into());
            }
        }
        if let Some(height) = self.height_cm {
            if height <= 0.0 {
                errors.push("Height must be positive".into());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }

    /// Derive the BMI when both measurements are present
    ///
    /// Called after [`Self::validate`], so the measurements are known to be
    /// positive and the calculation cannot fail.
    #[must_use]
    pub fn derived_bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(weight), Some(height)) => body_mass_index(weight, height)
                .ok()
                .map(|result: BmiResult| result.value),
            _ => None,
        }
    }
}

impl User {
    /// Build a new record from a validated profile
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::with_id(Uuid::new_v4(), profile)
    }

    /// Build a record with a known id, used for updates
    #[must_use]
    pub fn with_id(id: Uuid, profile: &UserProfile) -> Self {
        Self {
            id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            bmi: profile.derived_bmi(),
            calorie_target: profile.calorie_target,
            protein_target_g: profile.protein_target_g,
            carb_target_g: profile.carb_target_g,
            fat_target_g: profile.fat_target_g,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> UserProfile {
        UserProfile {
            username: username.into(),
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_username_min_length() {
        assert!(profile("ab").validate().is_err());
        assert!(profile("abc").validate().is_ok());
    }

    #[test]
    fn test_email_format() {
        let mut p = profile("alice");
        p.email = Some("not-an-email".into());
        assert!(p.validate().is_err());

        p.email = Some("alice@example.com".into());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let p = UserProfile {
            username: "x".into(),
            email: Some("bad".into()),
            weight_kg: Some(-1.0),
            ..UserProfile::default()
        };
        let err = p.validate().unwrap_err();
        let errors = err.details["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_bmi_derived_on_build() {
        let mut p = profile("alice");
        p.weight_kg = Some(70.0);
        p.height_cm = Some(175.0);

        let user = User::from_profile(&p);
        assert!((user.bmi.unwrap() - 22.86).abs() < 1e-9);
    }

    #[test]
    fn test_bmi_absent_without_measurements() {
        let user = User::from_profile(&profile("alice"));
        assert!(user.bmi.is_none());
    }
}
