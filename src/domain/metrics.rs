//! Derived health indices and their clinical classification.
//!
//! BMI bands follow the WHO classification; waist-to-hip risk thresholds
//! differ by sex. All bands are half-open with an inclusive lower bound.

use serde::{Deserialize, Serialize};

use super::{Measurement, Sex};

/// Errors raised by metrics computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    /// Height or hip circumference would lead to a division by zero.
    #[error("height and hip must be positive, got height={height_cm} cm, hip={hip_cm} cm")]
    InvalidInput { height_cm: f64, hip_cm: f64 },
}

/// WHO body-mass-index band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Underweight => "Below the healthy weight range",
            Self::Normal => "Within the healthy weight range",
            Self::Overweight => "Above the healthy weight range",
            Self::Obese => "Well above the healthy weight range",
        }
    }

    /// Recommendation text shown alongside the result.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Underweight => {
                "Your BMI is below the healthy range. Consider consulting a nutritionist \
                 to review your diet and make sure you are getting all required nutrients."
            }
            Self::Normal => {
                "Your BMI is in the healthy range. Keep up balanced eating and regular \
                 physical activity."
            }
            Self::Overweight => {
                "Your BMI indicates overweight. Consider increasing physical activity and \
                 reviewing your diet to reduce health risks."
            }
            Self::Obese => {
                "Your BMI indicates obesity. Medical and nutritional guidance is \
                 recommended to build an adequate health plan."
            }
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Underweight => (59, 130, 246), // Blue (#3B82F6)
            Self::Normal => (16, 185, 129),      // Emerald (#10B981)
            Self::Overweight => (251, 191, 36),  // Amber (#FBBF24)
            Self::Obese => (244, 63, 94),        // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// Cardiovascular risk band for the waist-to-hip ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhrRisk {
    /// Low cardiovascular risk
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, consultation recommended
    High,
}

impl WhrRisk {
    /// Classify a waist-to-hip ratio for the given sex.
    ///
    /// Male thresholds: 0.9 and 1.0. Female thresholds: 0.8 and 0.85.
    #[must_use]
    pub fn from_ratio(sex: Sex, whr: f64) -> Self {
        let (moderate, high) = match sex {
            Sex::Male => (0.9, 1.0),
            Sex::Female => (0.8, 0.85),
        };

        if whr < moderate {
            Self::Low
        } else if whr < high {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Consultation advised",
        }
    }

    /// Recommendation text shown alongside the result.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Low => {
                "Your waist-to-hip ratio is in a healthy band. Keep up your current \
                 lifestyle habits."
            }
            Self::Moderate => {
                "Your waist-to-hip ratio indicates moderate cardiovascular risk. Regular \
                 physical activity and a healthy diet can help reduce it."
            }
            Self::High => {
                "Your waist-to-hip ratio indicates high cardiovascular risk. Consider \
                 consulting a physician for a complete evaluation."
            }
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),      // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),      // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for WhrRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Derived indices and their classifications for one measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComputedMetrics {
    /// Body mass index in kg/m²
    pub bmi: f64,

    /// WHO band for the BMI value
    pub bmi_category: BmiCategory,

    /// Waist-to-hip ratio
    pub whr: f64,

    /// Cardiovascular risk band for the ratio
    pub whr_risk: WhrRisk,
}

/// Compute BMI and waist-to-hip ratio for a measurement and classify both.
///
/// Clinical range validation is the caller's job (`Measurement::validate`);
/// extreme but positive inputs classify into the extreme band rather than
/// erroring. Deterministic and side-effect free.
///
/// # Errors
/// Returns `MetricsError::InvalidInput` if height or hip is non-positive,
/// which would make the ratios undefined.
pub fn compute(measurement: &Measurement) -> Result<ComputedMetrics, MetricsError> {
    if measurement.height_cm <= 0.0 || measurement.hip_cm <= 0.0 {
        return Err(MetricsError::InvalidInput {
            height_cm: measurement.height_cm,
            hip_cm: measurement.hip_cm,
        });
    }

    let height_m = measurement.height_cm / 100.0;
    let bmi = measurement.weight_kg / (height_m * height_m);
    let whr = measurement.waist_cm / measurement.hip_cm;

    Ok(ComputedMetrics {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        whr,
        whr_risk: WhrRisk::from_ratio(measurement.sex, whr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(sex: Sex, height_cm: f64, weight_kg: f64, waist_cm: f64, hip_cm: f64) -> Measurement {
        Measurement {
            age: 30,
            sex,
            height_cm,
            weight_kg,
            waist_cm,
            hip_cm,
        }
    }

    #[test]
    fn test_bmi_formula() {
        let m = measurement(Sex::Male, 170.0, 70.0, 80.0, 100.0);
        let computed = compute(&m).expect("Should compute");

        let expected = 70.0 / (1.7_f64 * 1.7);
        assert!((computed.bmi - expected).abs() < 1e-9);
        assert!((computed.bmi - 24.22).abs() < 0.005);
        assert_eq!(computed.bmi_category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_band_boundaries_are_lower_inclusive() {
        assert_eq!(BmiCategory::from_bmi(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_whr_band_boundaries_by_sex() {
        assert_eq!(WhrRisk::from_ratio(Sex::Male, 0.899), WhrRisk::Low);
        assert_eq!(WhrRisk::from_ratio(Sex::Male, 0.9), WhrRisk::Moderate);
        assert_eq!(WhrRisk::from_ratio(Sex::Male, 1.0), WhrRisk::High);

        assert_eq!(WhrRisk::from_ratio(Sex::Female, 0.799), WhrRisk::Low);
        assert_eq!(WhrRisk::from_ratio(Sex::Female, 0.8), WhrRisk::Moderate);
        assert_eq!(WhrRisk::from_ratio(Sex::Female, 0.85), WhrRisk::High);
    }

    #[test]
    fn test_whr_ratio() {
        let m = measurement(Sex::Male, 170.0, 70.0, 80.0, 100.0);
        let computed = compute(&m).expect("Should compute");

        assert!((computed.whr - 0.80).abs() < 1e-9);
        assert_eq!(computed.whr_risk, WhrRisk::Low);
    }

    #[test]
    fn test_female_boundary_scenario() {
        let m = measurement(Sex::Female, 165.0, 60.0, 85.0, 100.0);
        let computed = compute(&m).expect("Should compute");

        assert!((computed.whr - 0.85).abs() < 1e-9);
        assert_eq!(computed.whr_risk, WhrRisk::High);
    }

    #[test]
    fn test_non_positive_height_or_hip_is_rejected() {
        let zero_height = measurement(Sex::Male, 0.0, 70.0, 80.0, 100.0);
        assert!(matches!(
            compute(&zero_height),
            Err(MetricsError::InvalidInput { .. })
        ));

        let negative_hip = measurement(Sex::Female, 170.0, 70.0, 80.0, -1.0);
        assert!(matches!(
            compute(&negative_hip),
            Err(MetricsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_extreme_positive_inputs_still_classify() {
        // Outside the clinical validation range, but computable.
        let m = measurement(Sex::Male, 150.0, 500.0, 190.0, 50.0);
        let computed = compute(&m).expect("Should compute");

        assert_eq!(computed.bmi_category, BmiCategory::Obese);
        assert_eq!(computed.whr_risk, WhrRisk::High);
        assert!(computed.bmi.is_finite());
        assert!(computed.whr.is_finite());
    }
}
