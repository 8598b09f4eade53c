//! Anthropometric measurement input types.

use serde::{Deserialize, Serialize};

/// Biological sex, used to select waist-to-hip risk thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// The other value, for toggle-style form inputs.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// One set of body measurements entered by the user.
///
/// Not stored on its own; a snapshot is embedded in `HistoryRecord` when the
/// user saves a computed result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Age in years (10-100)
    pub age: u32,

    /// Biological sex
    pub sex: Sex,

    /// Height in cm (over 100, up to 250)
    pub height_cm: f64,

    /// Weight in kg (over 30, up to 300)
    pub weight_kg: f64,

    /// Waist circumference in cm (over 40, up to 200)
    pub waist_cm: f64,

    /// Hip circumference in cm (over 40, up to 200)
    pub hip_cm: f64,
}

impl Measurement {
    /// Validate that all measurements are within clinically plausible ranges.
    ///
    /// The ranges live here rather than in the form layer so the same bounds
    /// apply when the crate is driven without a UI (tests, other frontends).
    /// `compute` itself does not re-check them; it only refuses inputs that
    /// would divide by zero.
    ///
    /// # Errors
    /// Returns all violations as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(10..=100).contains(&self.age) {
            errors.push(format!("Age {} out of range [10, 100]", self.age));
        }
        if self.height_cm <= 100.0 || self.height_cm > 250.0 {
            errors.push(format!(
                "Height {} cm out of range (100, 250]",
                self.height_cm
            ));
        }
        if self.weight_kg <= 30.0 || self.weight_kg > 300.0 {
            errors.push(format!(
                "Weight {} kg out of range (30, 300]",
                self.weight_kg
            ));
        }
        if self.waist_cm <= 40.0 || self.waist_cm > 200.0 {
            errors.push(format!(
                "Waist circumference {} cm out of range (40, 200]",
                self.waist_cm
            ));
        }
        if self.hip_cm <= 40.0 || self.hip_cm > 200.0 {
            errors.push(format!(
                "Hip circumference {} cm out of range (40, 200]",
                self.hip_cm
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical() -> Measurement {
        Measurement {
            age: 30,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            waist_cm: 80.0,
            hip_cm: 100.0,
        }
    }

    #[test]
    fn test_typical_measurement_is_valid() {
        assert!(typical().validate().is_ok());
    }

    #[test]
    fn test_validation_reports_each_violation() {
        let invalid = Measurement {
            age: 5,
            weight_kg: 10.0,
            ..typical()
        };

        let errors = invalid.validate().expect_err("Should be invalid");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Age"));
        assert!(errors[1].contains("Weight"));
    }

    #[test]
    fn test_validation_bounds_are_exclusive_below() {
        // 100 cm is outside (100, 250]; 250 is inside.
        let at_lower = Measurement {
            height_cm: 100.0,
            ..typical()
        };
        assert!(at_lower.validate().is_err());

        let at_upper = Measurement {
            height_cm: 250.0,
            ..typical()
        };
        assert!(at_upper.validate().is_ok());
    }

    #[test]
    fn test_sex_toggle() {
        assert_eq!(Sex::Male.toggled(), Sex::Female);
        assert_eq!(Sex::Female.toggled(), Sex::Male);
    }
}
