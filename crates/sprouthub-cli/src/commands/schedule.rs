//! Watering schedule commands.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::Serialize;

use sprouthub_core::watering::{days_until_watering, next_watering_date, watering_status};
use sprouthub_core::{
    CareStyle, Config, FactorSelection, Humidity, LightLevel, PlantSize, Season,
    SmartScheduleResult, SoilType, Temperature, WateringScheduleCalculator, WateringStatus,
};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Recommend a watering interval from the plant's conditions
    Calculate {
        /// Base interval in days (defaults to `defaults.base_days` from config)
        #[arg(long)]
        base_days: Option<u32>,
        /// small, medium or large
        #[arg(long)]
        plant_size: PlantSize,
        /// low, medium or high
        #[arg(long)]
        light_level: LightLevel,
        /// cool, normal or warm
        #[arg(long)]
        temperature: Temperature,
        /// dry, normal or humid
        #[arg(long)]
        humidity: Humidity,
        /// winter, spring, summer or fall (defaults to the current season)
        #[arg(long)]
        season: Option<Season>,
        /// frequent, balanced or minimal
        #[arg(long)]
        care_style: CareStyle,
        /// regular, draining or retaining
        #[arg(long)]
        soil_type: SoilType,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show when a plant is next due for water
    Next {
        /// Date of the last watering (YYYY-MM-DD)
        #[arg(long)]
        last_watered: NaiveDate,
        /// Watering interval in days
        #[arg(long)]
        interval: u32,
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NextWatering {
    next_watering_date: NaiveDate,
    days_until: i64,
    needs_water: bool,
    #[serde(flatten)]
    status: WateringStatus,
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Calculate {
            base_days,
            plant_size,
            light_level,
            temperature,
            humidity,
            season,
            care_style,
            soil_type,
            json,
        } => {
            let mut selection = FactorSelection::new()
                .with_plant_size(plant_size)
                .with_light_level(light_level)
                .with_temperature(temperature)
                .with_humidity(humidity)
                .with_care_style(care_style)
                .with_soil_type(soil_type);
            if let Some(season) = season {
                selection = selection.with_season(season);
            }
            calculate(base_days, selection, season.is_none(), json)
        }
        ScheduleAction::Next {
            last_watered,
            interval,
            today,
            json,
        } => next(last_watered, interval, today, json),
    }
}

fn calculate(
    base_days: Option<u32>,
    selection: FactorSelection,
    season_defaulted: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let calculator = WateringScheduleCalculator::with_policy(config.watering_policy()?)?;
    let base_days = base_days.unwrap_or(config.defaults.base_days);

    let factors = selection.build_with_season_default(Local::now().date_naive())?;
    let result = calculator.calculate(base_days, &factors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if season_defaulted {
        println!("Season: {} (from today's date)", factors.season);
    }
    print_result(&result);
    Ok(())
}

fn print_result(result: &SmartScheduleResult) {
    println!(
        "Recommended: water every {} days (base {}, adjustment {:+})",
        result.recommended_days, result.base_days, result.total_adjustment
    );
    if result.was_clamped() {
        println!("  (limited to the allowed range)");
    }
    println!("Confidence: {}", result.confidence);
    if result.adjustment_reasons.is_empty() {
        println!("No adjustments: conditions match the base schedule.");
    } else {
        println!("Why:");
        for reason in &result.adjustment_reasons {
            println!("  - {reason}");
        }
    }
}

fn next(
    last_watered: NaiveDate,
    interval: u32,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if interval == 0 {
        return Err("interval must be at least 1 day".into());
    }
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let status = watering_status(last_watered, interval, today);
    let report = NextWatering {
        next_watering_date: next_watering_date(last_watered, interval),
        days_until: days_until_watering(last_watered, interval, today),
        needs_water: status.needs_water(),
        status,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Next watering: {}", report.next_watering_date.format("%Y-%m-%d"));
        println!("Status: {}", report.status);
        if report.needs_water {
            println!("Water now");
        }
    }
    Ok(())
}
