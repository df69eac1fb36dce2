//! # SproutHub Core Library
//!
//! Plant-care logic for SproutHub. The web front end and the CLI are thin
//! layers over the same library.
//!
//! ## Architecture
//!
//! - **Watering engine**: a pure calculator that adjusts a base watering
//!   interval by seven categorical factors and explains each adjustment
//! - **Seasons**: calendar month to meteorological season, used to default
//!   the season factor
//! - **Storage**: TOML-based configuration of the engine's policy constants
//!
//! ## Key Components
//!
//! - [`WateringScheduleCalculator`]: the schedule engine
//! - [`FactorSelection`]: factor values gathered step by step
//! - [`Config`]: application configuration management

pub mod error;
pub mod storage;
pub mod watering;

pub use error::{ConfigError, CoreError, ValidationError};
pub use storage::Config;
pub use watering::{
    calculate_smart_schedule, current_season, factor_table, next_watering_date, watering_status,
    BaseIntervalPolicy, CareStyle, Confidence, Factor, FactorKind, FactorSelection, Humidity,
    LightLevel, PlantSize, Season, SmartScheduleResult, SoilType, Temperature, WateringFactors,
    WateringPolicy, WateringScheduleCalculator, WateringStatus,
};
