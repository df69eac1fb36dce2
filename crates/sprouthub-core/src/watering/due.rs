//! Next-watering date arithmetic.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Where a plant stands relative to its next watering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WateringStatus {
    /// Past due by `days`.
    Overdue { days: u32 },
    DueToday,
    /// Due in `days`.
    Upcoming { days: u32 },
}

impl WateringStatus {
    pub fn needs_water(&self) -> bool {
        !matches!(self, WateringStatus::Upcoming { .. })
    }
}

impl std::fmt::Display for WateringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WateringStatus::Overdue { days: 1 } => write!(f, "overdue by 1 day"),
            WateringStatus::Overdue { days } => write!(f, "overdue by {days} days"),
            WateringStatus::DueToday => write!(f, "due today"),
            WateringStatus::Upcoming { days: 1 } => write!(f, "due in 1 day"),
            WateringStatus::Upcoming { days } => write!(f, "due in {days} days"),
        }
    }
}

/// Date the plant should next be watered.
pub fn next_watering_date(last_watered: NaiveDate, interval_days: u32) -> NaiveDate {
    last_watered + Duration::days(i64::from(interval_days))
}

/// Days from `today` until the next watering; negative when overdue.
pub fn days_until_watering(last_watered: NaiveDate, interval_days: u32, today: NaiveDate) -> i64 {
    (next_watering_date(last_watered, interval_days) - today).num_days()
}

pub fn watering_status(last_watered: NaiveDate, interval_days: u32, today: NaiveDate) -> WateringStatus {
    let days = days_until_watering(last_watered, interval_days, today);
    match days {
        0 => WateringStatus::DueToday,
        d if d < 0 => WateringStatus::Overdue {
            days: u32::try_from(-d).unwrap_or(u32::MAX),
        },
        d => WateringStatus::Upcoming {
            days: u32::try_from(d).unwrap_or(u32::MAX),
        },
    }
}
