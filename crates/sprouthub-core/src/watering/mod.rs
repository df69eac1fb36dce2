//! Smart watering schedule engine.
//!
//! Combines a plant's base watering interval with seven environmental and
//! behavioural factors into a recommended interval, a confidence rating and
//! the reasons behind each adjustment.

mod calculator;
mod due;
mod factors;
mod labels;
mod season;
mod selection;

pub use calculator::{
    calculate_smart_schedule, BaseIntervalPolicy, Confidence, SmartScheduleResult,
    WateringPolicy, WateringScheduleCalculator, DEFAULT_HIGH_CONFIDENCE_MAX, DEFAULT_MAX_DAYS,
    DEFAULT_MEDIUM_CONFIDENCE_MAX, DEFAULT_MIN_DAYS,
};
pub use due::{days_until_watering, next_watering_date, watering_status, WateringStatus};
pub use factors::{
    Adjustment, CareStyle, Factor, FactorKind, Humidity, LightLevel, PlantSize, Season, SoilType,
    Temperature, WateringFactors,
};
pub use labels::{factor_table, FactorChoices, FactorOption};
pub use season::current_season;
pub use selection::FactorSelection;
