//! Incremental factor selection.
//!
//! A wizard collects one factor per step. [`FactorSelection`] holds the
//! partial state and turns it into [`WateringFactors`] only once every
//! factor has been chosen. The one exception is season, which can be filled
//! in from the calendar.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::factors::{
    CareStyle, FactorKind, Humidity, LightLevel, PlantSize, Season, SoilType, Temperature,
    WateringFactors,
};
use super::season::current_season;
use crate::error::ValidationError;

/// Factor values chosen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorSelection {
    pub plant_size: Option<PlantSize>,
    pub light_level: Option<LightLevel>,
    pub temperature: Option<Temperature>,
    pub humidity: Option<Humidity>,
    pub season: Option<Season>,
    pub care_style: Option<CareStyle>,
    pub soil_type: Option<SoilType>,
}

impl FactorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plant_size(mut self, value: PlantSize) -> Self {
        self.plant_size = Some(value);
        self
    }

    pub fn with_light_level(mut self, value: LightLevel) -> Self {
        self.light_level = Some(value);
        self
    }

    pub fn with_temperature(mut self, value: Temperature) -> Self {
        self.temperature = Some(value);
        self
    }

    pub fn with_humidity(mut self, value: Humidity) -> Self {
        self.humidity = Some(value);
        self
    }

    pub fn with_season(mut self, value: Season) -> Self {
        self.season = Some(value);
        self
    }

    pub fn with_care_style(mut self, value: CareStyle) -> Self {
        self.care_style = Some(value);
        self
    }

    pub fn with_soil_type(mut self, value: SoilType) -> Self {
        self.soil_type = Some(value);
        self
    }

    /// Record a textual choice for `kind`, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] if `value` is not in the
    /// factor's domain. The selection is left unchanged in that case.
    pub fn set(&mut self, kind: FactorKind, value: &str) -> Result<(), ValidationError> {
        match kind {
            FactorKind::PlantSize => self.plant_size = Some(value.parse()?),
            FactorKind::LightLevel => self.light_level = Some(value.parse()?),
            FactorKind::Temperature => self.temperature = Some(value.parse()?),
            FactorKind::Humidity => self.humidity = Some(value.parse()?),
            FactorKind::Season => self.season = Some(value.parse()?),
            FactorKind::CareStyle => self.care_style = Some(value.parse()?),
            FactorKind::SoilType => self.soil_type = Some(value.parse()?),
        }
        Ok(())
    }

    fn is_set(&self, kind: FactorKind) -> bool {
        match kind {
            FactorKind::PlantSize => self.plant_size.is_some(),
            FactorKind::LightLevel => self.light_level.is_some(),
            FactorKind::Temperature => self.temperature.is_some(),
            FactorKind::Humidity => self.humidity.is_some(),
            FactorKind::Season => self.season.is_some(),
            FactorKind::CareStyle => self.care_style.is_some(),
            FactorKind::SoilType => self.soil_type.is_some(),
        }
    }

    /// Factors not chosen yet, in evaluation order.
    pub fn missing(&self) -> Vec<FactorKind> {
        FactorKind::ALL
            .into_iter()
            .filter(|k| !self.is_set(*k))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Finish the selection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFactor`] for the first factor that
    /// has not been chosen. No default is ever substituted.
    pub fn build(&self) -> Result<WateringFactors, ValidationError> {
        use ValidationError::MissingFactor;
        Ok(WateringFactors {
            plant_size: self.plant_size.ok_or(MissingFactor(FactorKind::PlantSize))?,
            light_level: self.light_level.ok_or(MissingFactor(FactorKind::LightLevel))?,
            temperature: self.temperature.ok_or(MissingFactor(FactorKind::Temperature))?,
            humidity: self.humidity.ok_or(MissingFactor(FactorKind::Humidity))?,
            season: self.season.ok_or(MissingFactor(FactorKind::Season))?,
            care_style: self.care_style.ok_or(MissingFactor(FactorKind::CareStyle))?,
            soil_type: self.soil_type.ok_or(MissingFactor(FactorKind::SoilType))?,
        })
    }

    /// Like [`build`](Self::build), but an unset season is taken from `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFactor`] for any other unset factor.
    pub fn build_with_season_default<D: Datelike>(
        &self,
        date: D,
    ) -> Result<WateringFactors, ValidationError> {
        let mut filled = *self;
        if filled.season.is_none() {
            filled.season = Some(current_season(date));
        }
        filled.build()
    }
}

impl From<WateringFactors> for FactorSelection {
    fn from(f: WateringFactors) -> Self {
        Self {
            plant_size: Some(f.plant_size),
            light_level: Some(f.light_level),
            temperature: Some(f.temperature),
            humidity: Some(f.humidity),
            season: Some(f.season),
            care_style: Some(f.care_style),
            soil_type: Some(f.soil_type),
        }
    }
}
