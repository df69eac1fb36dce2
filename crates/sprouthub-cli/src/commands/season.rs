use chrono::NaiveDate;
use clap::Subcommand;
use sprouthub_core::{current_season, Factor, Season};

#[derive(Subcommand)]
pub enum SeasonAction {
    /// Show the season for a date
    Current {
        /// Date to resolve (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: SeasonAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SeasonAction::Current { date } => {
            let season = date.map(current_season).unwrap_or_else(Season::current);
            println!("{season}");
            tracing::debug!(?date, label = season.label(), "resolved season");
        }
    }
    Ok(())
}
