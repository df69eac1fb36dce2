use clap::Subcommand;
use sprouthub_core::factor_table;

#[derive(Subcommand)]
pub enum FactorsAction {
    /// List every factor with its choices and labels
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: FactorsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        FactorsAction::List { json } => {
            let table = factor_table();
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
                return Ok(());
            }
            for factor in table {
                println!("{} ({})", factor.title, factor.key);
                for option in factor.options {
                    println!("  {:<10} {}", option.value, option.label);
                }
            }
        }
    }
    Ok(())
}
