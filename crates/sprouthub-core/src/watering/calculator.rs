//! Smart watering schedule calculator.
//!
//! Starts from a base interval (usually the catalog's suggested watering
//! days) and sums the deltas of the seven factors in evaluation order:
//!
//! ```text
//! recommended = clamp(base + Σ delta, min_days, max_days)
//! ```
//!
//! | abs(Σ delta)                   | Confidence |
//! |--------------------------------|------------|
//! | ≤ high_confidence_max (2)      | High       |
//! | ≤ medium_confidence_max (4)    | Medium     |
//! | otherwise                      | Low        |
//!
//! The calculation is pure: no clock, no I/O, no shared state.

use serde::{Deserialize, Serialize};

use super::factors::WateringFactors;
use crate::error::{ConfigError, Result, ValidationError};

/// Shortest interval ever recommended, in days.
pub const DEFAULT_MIN_DAYS: u32 = 2;
/// Longest interval ever recommended, in days.
pub const DEFAULT_MAX_DAYS: u32 = 45;
/// Largest absolute adjustment still rated high confidence.
pub const DEFAULT_HIGH_CONFIDENCE_MAX: u32 = 2;
/// Largest absolute adjustment still rated medium confidence.
pub const DEFAULT_MEDIUM_CONFIDENCE_MAX: u32 = 4;

/// How a base interval outside `min_days..=max_days` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseIntervalPolicy {
    /// Accept it; the final clamp pulls the result back into range.
    #[default]
    Clamp,
    /// Refuse to calculate.
    Reject,
}

/// Tunable constants of the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringPolicy {
    pub min_days: u32,
    pub max_days: u32,
    pub high_confidence_max: u32,
    pub medium_confidence_max: u32,
    pub base_interval: BaseIntervalPolicy,
}

impl Default for WateringPolicy {
    fn default() -> Self {
        Self {
            min_days: DEFAULT_MIN_DAYS,
            max_days: DEFAULT_MAX_DAYS,
            high_confidence_max: DEFAULT_HIGH_CONFIDENCE_MAX,
            medium_confidence_max: DEFAULT_MEDIUM_CONFIDENCE_MAX,
            base_interval: BaseIntervalPolicy::Clamp,
        }
    }
}

impl WateringPolicy {
    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the clamp range is empty or
    /// starts at zero, or if the confidence thresholds are out of order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "watering.min_days".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.min_days > self.max_days {
            return Err(ConfigError::InvalidValue {
                key: "watering.max_days".into(),
                message: format!(
                    "max_days ({}) must not be less than min_days ({})",
                    self.max_days, self.min_days
                ),
            });
        }
        if self.high_confidence_max > self.medium_confidence_max {
            return Err(ConfigError::InvalidValue {
                key: "watering.medium_confidence_max".into(),
                message: format!(
                    "medium_confidence_max ({}) must not be less than high_confidence_max ({})",
                    self.medium_confidence_max, self.high_confidence_max
                ),
            });
        }
        Ok(())
    }

    /// Whether `days` lies inside the clamp range.
    pub fn in_range(&self, days: u32) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }

    fn clamp(&self, days: i64) -> u32 {
        // min/max are u32, so the clamped value always fits
        days.clamp(i64::from(self.min_days), i64::from(self.max_days)) as u32
    }
}

/// How much the recommendation can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Rate a total adjustment against the policy thresholds.
    pub fn from_adjustment(total_adjustment: i32, policy: &WateringPolicy) -> Self {
        let magnitude = total_adjustment.unsigned_abs();
        if magnitude <= policy.high_confidence_max {
            Confidence::High
        } else if magnitude <= policy.medium_confidence_max {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a schedule calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartScheduleResult {
    /// Final interval, clamped to the policy range
    pub recommended_days: u32,
    /// The base interval as supplied
    pub base_days: u32,
    /// One sentence per factor with a non-zero delta, in evaluation order
    pub adjustment_reasons: Vec<String>,
    /// Sum of all deltas before clamping
    pub total_adjustment: i32,
    pub confidence: Confidence,
}

impl SmartScheduleResult {
    /// Whether the clamp changed the raw `base + adjustment` value.
    pub fn was_clamped(&self) -> bool {
        i64::from(self.base_days) + i64::from(self.total_adjustment)
            != i64::from(self.recommended_days)
    }
}

/// Computes watering recommendations under a fixed [`WateringPolicy`].
#[derive(Debug, Clone, Default)]
pub struct WateringScheduleCalculator {
    policy: WateringPolicy,
}

impl WateringScheduleCalculator {
    /// Create a calculator with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy fails [`WateringPolicy::validate`].
    pub fn with_policy(policy: WateringPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &WateringPolicy {
        &self.policy
    }

    /// Calculate the recommended interval for `factors`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `base_days` is zero, or if it lies
    /// outside the clamp range while the policy is
    /// [`BaseIntervalPolicy::Reject`].
    pub fn calculate(
        &self,
        base_days: u32,
        factors: &WateringFactors,
    ) -> Result<SmartScheduleResult> {
        self.check_base(base_days)?;

        let mut total_adjustment = 0i32;
        let mut adjustment_reasons = Vec::new();
        for (_, adjustment) in factors.adjustments() {
            if adjustment.is_neutral() {
                continue;
            }
            total_adjustment += adjustment.delta;
            adjustment_reasons.extend(adjustment.reason.map(str::to_string));
        }

        let recommended_days =
            self.policy.clamp(i64::from(base_days) + i64::from(total_adjustment));
        let confidence = Confidence::from_adjustment(total_adjustment, &self.policy);

        tracing::debug!(
            base_days,
            total_adjustment,
            recommended_days,
            %confidence,
            "calculated watering schedule"
        );

        Ok(SmartScheduleResult {
            recommended_days,
            base_days,
            adjustment_reasons,
            total_adjustment,
            confidence,
        })
    }

    fn check_base(&self, base_days: u32) -> Result<(), ValidationError> {
        if base_days == 0 {
            return Err(ValidationError::invalid(
                "base_days",
                "base interval must be a positive number of days",
            ));
        }
        if self.policy.in_range(base_days) {
            return Ok(());
        }
        match self.policy.base_interval {
            BaseIntervalPolicy::Reject => Err(ValidationError::BaseIntervalOutOfRange {
                base_days,
                min: self.policy.min_days,
                max: self.policy.max_days,
            }),
            BaseIntervalPolicy::Clamp => {
                tracing::warn!(
                    base_days,
                    min_days = self.policy.min_days,
                    max_days = self.policy.max_days,
                    "base interval outside clamp range; result will be clamped"
                );
                Ok(())
            }
        }
    }
}

/// Calculate with the default policy.
///
/// # Errors
///
/// Returns a validation error if `base_days` is zero.
pub fn calculate_smart_schedule(
    base_days: u32,
    factors: &WateringFactors,
) -> Result<SmartScheduleResult> {
    WateringScheduleCalculator::new().calculate(base_days, factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::watering::factors::*;

    #[test]
    fn test_baseline_is_unchanged() {
        let result = calculate_smart_schedule(7, &WateringFactors::default()).unwrap();
        assert_eq!(result.total_adjustment, 0);
        assert_eq!(result.recommended_days, 7);
        assert!(result.adjustment_reasons.is_empty());
        assert_eq!(result.confidence, Confidence::High);
        assert!(!result.was_clamped());
    }

    #[test]
    fn test_winter_dormant_succulent() {
        let factors = WateringFactors {
            plant_size: PlantSize::Large,
            light_level: LightLevel::Low,
            temperature: Temperature::Cool,
            humidity: Humidity::Normal,
            season: Season::Winter,
            care_style: CareStyle::Minimal,
            soil_type: SoilType::Retaining,
        };
        let result = calculate_smart_schedule(14, &factors).unwrap();
        assert_eq!(result.total_adjustment, 6);
        assert_eq!(result.recommended_days, 20);
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(
            result.adjustment_reasons,
            vec![
                "Large plants have more soil volume and retain moisture longer",
                "Low light reduces plant metabolism and water consumption",
                "Cool temperatures slow down water evaporation",
                "Winter dormancy significantly reduces water needs",
                "Adjusted for low-maintenance care style",
                "Moisture-retaining soil stays wet longer",
            ]
        );
    }

    #[test]
    fn test_deltas_cancel_out() {
        let factors = WateringFactors {
            plant_size: PlantSize::Small,
            light_level: LightLevel::High,
            temperature: Temperature::Warm,
            humidity: Humidity::Dry,
            season: Season::Summer,
            care_style: CareStyle::Frequent,
            soil_type: SoilType::Draining,
        };
        let result = calculate_smart_schedule(7, &factors).unwrap();
        assert_eq!(result.total_adjustment, 0);
        assert_eq!(result.recommended_days, 7);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.adjustment_reasons.len(), 7);
    }

    #[test]
    fn test_lower_clamp() {
        let factors = WateringFactors {
            plant_size: PlantSize::Small,
            light_level: LightLevel::Low,
            temperature: Temperature::Cool,
            humidity: Humidity::Humid,
            season: Season::Summer,
            care_style: CareStyle::Frequent,
            soil_type: SoilType::Draining,
        };
        let result = calculate_smart_schedule(2, &factors).unwrap();
        assert_eq!(result.total_adjustment, -7);
        assert_eq!(result.recommended_days, 2);
        assert!(result.was_clamped());
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn test_upper_clamp() {
        let factors = WateringFactors {
            plant_size: PlantSize::Large,
            light_level: LightLevel::High,
            temperature: Temperature::Warm,
            humidity: Humidity::Dry,
            season: Season::Winter,
            care_style: CareStyle::Minimal,
            soil_type: SoilType::Retaining,
        };
        let result = calculate_smart_schedule(40, &factors).unwrap();
        assert_eq!(result.total_adjustment, 12);
        assert_eq!(result.recommended_days, 45);
        assert_eq!(result.base_days, 40);
    }

    #[test]
    fn test_confidence_thresholds() {
        let policy = WateringPolicy::default();
        assert_eq!(Confidence::from_adjustment(0, &policy), Confidence::High);
        assert_eq!(Confidence::from_adjustment(-2, &policy), Confidence::High);
        assert_eq!(Confidence::from_adjustment(3, &policy), Confidence::Medium);
        assert_eq!(Confidence::from_adjustment(-4, &policy), Confidence::Medium);
        assert_eq!(Confidence::from_adjustment(5, &policy), Confidence::Low);
        assert_eq!(Confidence::from_adjustment(-12, &policy), Confidence::Low);
    }

    #[test]
    fn test_zero_base_days_rejected() {
        let err = calculate_smart_schedule(0, &WateringFactors::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidValue { ref field, .. }) if field == "base_days"
        ));
    }

    #[test]
    fn test_out_of_range_base_is_clamped_by_default() {
        let result = calculate_smart_schedule(60, &WateringFactors::default()).unwrap();
        assert_eq!(result.recommended_days, 45);
        assert_eq!(result.base_days, 60);
        assert!(result.was_clamped());
    }

    #[test]
    fn test_out_of_range_base_rejected_under_strict_policy() {
        let calc = WateringScheduleCalculator::with_policy(WateringPolicy {
            base_interval: BaseIntervalPolicy::Reject,
            ..WateringPolicy::default()
        })
        .unwrap();
        let err = calc.calculate(60, &WateringFactors::default()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::BaseIntervalOutOfRange {
                base_days: 60,
                min: 2,
                max: 45
            })
        ));
        assert!(calc.calculate(1, &WateringFactors::default()).is_err());
        assert!(calc.calculate(45, &WateringFactors::default()).is_ok());
    }

    #[test]
    fn test_custom_policy_bounds() {
        let calc = WateringScheduleCalculator::with_policy(WateringPolicy {
            min_days: 3,
            max_days: 10,
            ..WateringPolicy::default()
        })
        .unwrap();
        let factors = WateringFactors {
            season: Season::Winter,
            soil_type: SoilType::Retaining,
            ..WateringFactors::default()
        };
        let result = calc.calculate(9, &factors).unwrap();
        assert_eq!(result.recommended_days, 10);
        assert_eq!(result.total_adjustment, 5);
    }

    #[test]
    fn test_invalid_policies_rejected() {
        let empty_range = WateringPolicy {
            min_days: 10,
            max_days: 5,
            ..WateringPolicy::default()
        };
        assert!(WateringScheduleCalculator::with_policy(empty_range).is_err());

        let inverted = WateringPolicy {
            high_confidence_max: 5,
            medium_confidence_max: 4,
            ..WateringPolicy::default()
        };
        assert!(inverted.validate().is_err());

        let zero_min = WateringPolicy {
            min_days: 0,
            ..WateringPolicy::default()
        };
        assert!(zero_min.validate().is_err());
    }

    #[test]
    fn test_result_json_shape() {
        let result = calculate_smart_schedule(7, &WateringFactors::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["recommendedDays"], 7);
        assert_eq!(json["baseDays"], 7);
        assert_eq!(json["totalAdjustment"], 0);
        assert_eq!(json["confidence"], "high");
        assert!(json["adjustmentReasons"].as_array().unwrap().is_empty());
    }
}
