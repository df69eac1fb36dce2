mod config;

pub use config::{Config, DefaultsConfig, WateringConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the config directory, creating it if needed.
///
/// `SPROUTHUB_CONFIG_DIR` overrides the location outright. Otherwise this is
/// `~/.config/sprouthub[-dev]/`, with `SPROUTHUB_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("SPROUTHUB_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("SPROUTHUB_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("sprouthub-dev")
            } else {
                base_dir.join("sprouthub")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
