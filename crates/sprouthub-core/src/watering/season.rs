//! Calendar season resolution.
//!
//! Meteorological boundaries: March-May spring, June-August summer,
//! September-November fall, December-February winter.

use chrono::{Datelike, Local};

use super::factors::Season;

impl Season {
    /// Season for a 1-indexed calendar month. `None` outside `1..=12`.
    pub fn from_month(month: u32) -> Option<Season> {
        match month {
            3..=5 => Some(Season::Spring),
            6..=8 => Some(Season::Summer),
            9..=11 => Some(Season::Fall),
            12 | 1 | 2 => Some(Season::Winter),
            _ => None,
        }
    }

    /// Season of today's date on the local clock.
    pub fn current() -> Season {
        current_season(Local::now().date_naive())
    }
}

/// Season containing `date`.
pub fn current_season<D: Datelike>(date: D) -> Season {
    // chrono guarantees month() is in 1..=12
    Season::from_month(date.month()).unwrap_or(Season::Winter)
}
