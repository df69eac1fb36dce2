//! Choice lists for UI collaborators.
//!
//! Pure presentation data: every factor value paired with its display label.

use serde::Serialize;

use super::factors::{
    CareStyle, Factor, FactorKind, Humidity, LightLevel, PlantSize, Season, SoilType, Temperature,
};

/// One selectable value of a factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A factor with its full list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorChoices {
    pub key: &'static str,
    pub title: &'static str,
    pub options: Vec<FactorOption>,
}

fn options_of<F: Factor>() -> Vec<FactorOption> {
    F::all()
        .iter()
        .map(|v| FactorOption {
            value: v.as_str(),
            label: v.label(),
        })
        .collect()
}

impl FactorKind {
    /// Every value of this factor with its label, in declaration order.
    pub fn options(&self) -> Vec<FactorOption> {
        match self {
            FactorKind::PlantSize => options_of::<PlantSize>(),
            FactorKind::LightLevel => options_of::<LightLevel>(),
            FactorKind::Temperature => options_of::<Temperature>(),
            FactorKind::Humidity => options_of::<Humidity>(),
            FactorKind::Season => options_of::<Season>(),
            FactorKind::CareStyle => options_of::<CareStyle>(),
            FactorKind::SoilType => options_of::<SoilType>(),
        }
    }

    /// Label of `value` for this factor, if `value` belongs to its domain.
    pub fn label_for(&self, value: &str) -> Option<&'static str> {
        self.options()
            .into_iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }
}

/// The complete label table, factors in evaluation order.
pub fn factor_table() -> Vec<FactorChoices> {
    FactorKind::ALL
        .iter()
        .map(|kind| FactorChoices {
            key: kind.key(),
            title: kind.title(),
            options: kind.options(),
        })
        .collect()
}
