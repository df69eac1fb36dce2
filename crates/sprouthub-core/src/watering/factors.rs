//! Watering factors and their adjustment table.
//!
//! Each of the seven factors is a small enum. Every value carries its display
//! label and its [`Adjustment`]: the number of days it adds to (or removes
//! from) the base interval, plus the sentence explaining why. The baseline
//! value of each factor has a zero delta and no reason.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Day delta contributed by a single factor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// Signed number of days added to the base interval
    pub delta: i32,
    /// Explanation shown to the user, `None` for the baseline value
    pub reason: Option<&'static str>,
}

impl Adjustment {
    /// Baseline adjustment: no change, nothing to explain.
    pub const NONE: Adjustment = Adjustment {
        delta: 0,
        reason: None,
    };

    const fn days(delta: i32, reason: &'static str) -> Self {
        Self {
            delta,
            reason: Some(reason),
        }
    }

    /// Whether this adjustment changes the interval.
    pub fn is_neutral(&self) -> bool {
        self.delta == 0
    }
}

/// Behaviour shared by every factor enum.
pub trait Factor: Copy + Sized + 'static {
    /// Which of the seven factors this is.
    const KIND: FactorKind;

    /// All values of the factor, baseline included.
    fn all() -> &'static [Self];

    /// Machine name used in config files, JSON and CLI arguments.
    fn as_str(&self) -> &'static str;

    /// Human-readable label for choice lists.
    fn label(&self) -> &'static str;

    /// Delta and reason for this value.
    fn adjustment(&self) -> Adjustment;
}

/// Parses a factor value case-insensitively, rejecting anything outside the domain.
fn parse_factor<F: Factor>(s: &str) -> Result<F, ValidationError> {
    let wanted = s.trim().to_ascii_lowercase();
    F::all()
        .iter()
        .copied()
        .find(|v| v.as_str() == wanted)
        .ok_or_else(|| {
            let expected: Vec<&str> = F::all().iter().map(|v| v.as_str()).collect();
            ValidationError::invalid(
                F::KIND.key(),
                format!("unknown value '{}' (expected one of: {})", s, expected.join(", ")),
            )
        })
}

// Generates a factor enum together with its value table. Each row is
// `Variant => "name", "label", adjustment`.
macro_rules! factor_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, $label:literal, $adj:expr; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All values in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl Factor for $name {
            const KIND: FactorKind = $kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $key, )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn adjustment(&self) -> Adjustment {
                match self {
                    $( $name::$variant => $adj, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_factor(s)
            }
        }
    };
}

factor_enum! {
    /// Pot size, used as a proxy for soil volume.
    PlantSize, FactorKind::PlantSize, default = Medium {
        Small => "small", "Small (up to 6\")",
            Adjustment::days(-1, "Small plants have less soil volume and dry out faster");
        Medium => "medium", "Medium (6-12\")", Adjustment::NONE;
        Large => "large", "Large (12\"+)",
            Adjustment::days(2, "Large plants have more soil volume and retain moisture longer");
    }
}

factor_enum! {
    /// Light exposure at the plant's spot.
    LightLevel, FactorKind::LightLevel, default = Medium {
        Low => "low", "Low light",
            Adjustment::days(-1, "Low light reduces plant metabolism and water consumption");
        Medium => "medium", "Medium/indirect light", Adjustment::NONE;
        High => "high", "Bright/direct light",
            Adjustment::days(1, "High light increases photosynthesis and water evaporation");
    }
}

factor_enum! {
    /// Ambient temperature band.
    Temperature, FactorKind::Temperature, default = Normal {
        Cool => "cool", "Cool (below 65°F)",
            Adjustment::days(-1, "Cool temperatures slow down water evaporation");
        Normal => "normal", "Normal (65-75°F)", Adjustment::NONE;
        Warm => "warm", "Warm (above 75°F)",
            Adjustment::days(1, "Warm temperatures increase evaporation rate");
    }
}

factor_enum! {
    /// Ambient humidity band.
    Humidity, FactorKind::Humidity, default = Normal {
        Dry => "dry", "Dry (below 40%)",
            Adjustment::days(2, "Dry air increases water loss through transpiration");
        Normal => "normal", "Normal (40-60%)", Adjustment::NONE;
        Humid => "humid", "Humid (above 60%)",
            Adjustment::days(-1, "High humidity reduces water loss");
    }
}

factor_enum! {
    /// Meteorological season; `Season::from_month` gives the month mapping.
    Season, FactorKind::Season, default = Spring {
        Winter => "winter", "Winter",
            Adjustment::days(3, "Winter dormancy significantly reduces water needs");
        Spring => "spring", "Spring", Adjustment::NONE;
        Summer => "summer", "Summer",
            Adjustment::days(-1, "Summer growth phase increases water consumption");
        Fall => "fall", "Fall",
            Adjustment::days(1, "Fall season begins to slow plant metabolism");
    }
}

factor_enum! {
    /// How hands-on the owner wants to be.
    CareStyle, FactorKind::CareStyle, default = Balanced {
        Frequent => "frequent", "Frequent - I love checking on my plants",
            Adjustment::days(-1, "Adjusted for hands-on care preference");
        Balanced => "balanced", "Balanced - Regular care routine", Adjustment::NONE;
        Minimal => "minimal", "Minimal - I prefer low-maintenance",
            Adjustment::days(1, "Adjusted for low-maintenance care style");
    }
}

factor_enum! {
    /// Moisture-retention class of the potting soil.
    SoilType, FactorKind::SoilType, default = Regular {
        Regular => "regular", "Regular potting mix", Adjustment::NONE;
        Draining => "draining", "Well-draining (cactus/succulent mix)",
            Adjustment::days(-1, "Well-draining soil dries out faster");
        Retaining => "retaining", "Moisture-retaining (peat-based)",
            Adjustment::days(2, "Moisture-retaining soil stays wet longer");
    }
}

/// The seven watering factors, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    PlantSize,
    LightLevel,
    Temperature,
    Humidity,
    Season,
    CareStyle,
    SoilType,
}

impl FactorKind {
    /// All factors in the order the calculator evaluates them.
    pub const ALL: [FactorKind; 7] = [
        FactorKind::PlantSize,
        FactorKind::LightLevel,
        FactorKind::Temperature,
        FactorKind::Humidity,
        FactorKind::Season,
        FactorKind::CareStyle,
        FactorKind::SoilType,
    ];

    /// Snake-case key, as used in config and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            FactorKind::PlantSize => "plant_size",
            FactorKind::LightLevel => "light_level",
            FactorKind::Temperature => "temperature",
            FactorKind::Humidity => "humidity",
            FactorKind::Season => "season",
            FactorKind::CareStyle => "care_style",
            FactorKind::SoilType => "soil_type",
        }
    }

    /// Heading for the factor's choice list.
    pub fn title(&self) -> &'static str {
        match self {
            FactorKind::PlantSize => "Plant size",
            FactorKind::LightLevel => "Light level",
            FactorKind::Temperature => "Temperature",
            FactorKind::Humidity => "Humidity",
            FactorKind::Season => "Season",
            FactorKind::CareStyle => "Care style",
            FactorKind::SoilType => "Soil type",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title().to_lowercase())
    }
}

impl FromStr for FactorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        FactorKind::ALL
            .into_iter()
            .find(|k| k.key() == wanted)
            .ok_or_else(|| ValidationError::invalid("factor", format!("unknown factor '{s}'")))
    }
}

/// A complete set of factor values, ready for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WateringFactors {
    pub plant_size: PlantSize,
    pub light_level: LightLevel,
    pub temperature: Temperature,
    pub humidity: Humidity,
    pub season: Season,
    pub care_style: CareStyle,
    pub soil_type: SoilType,
}

impl WateringFactors {
    /// Per-factor adjustments in evaluation order.
    pub fn adjustments(&self) -> [(FactorKind, Adjustment); 7] {
        [
            (FactorKind::PlantSize, self.plant_size.adjustment()),
            (FactorKind::LightLevel, self.light_level.adjustment()),
            (FactorKind::Temperature, self.temperature.adjustment()),
            (FactorKind::Humidity, self.humidity.adjustment()),
            (FactorKind::Season, self.season.adjustment()),
            (FactorKind::CareStyle, self.care_style.adjustment()),
            (FactorKind::SoilType, self.soil_type.adjustment()),
        ]
    }

    /// Iterates every one of the 2916 possible factor combinations.
    pub fn all_combinations() -> impl Iterator<Item = WateringFactors> {
        PlantSize::ALL.iter().flat_map(|&plant_size| {
            LightLevel::ALL.iter().flat_map(move |&light_level| {
                Temperature::ALL.iter().flat_map(move |&temperature| {
                    Humidity::ALL.iter().flat_map(move |&humidity| {
                        Season::ALL.iter().flat_map(move |&season| {
                            CareStyle::ALL.iter().flat_map(move |&care_style| {
                                SoilType::ALL.iter().map(move |&soil_type| WateringFactors {
                                    plant_size,
                                    light_level,
                                    temperature,
                                    humidity,
                                    season,
                                    care_style,
                                    soil_type,
                                })
                            })
                        })
                    })
                })
            })
        })
    }
}
