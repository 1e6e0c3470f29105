mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::Config;

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::{WeightConfig, WeightTemplate};

/// Get the config directory path (~/.config/quote-rank/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("quote-rank")
}

/// Get the default config file path (~/.config/quote-rank/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// An explicitly passed path must exist. A missing file at the default
/// path is not an error: the tool runs fine on templates alone, so it
/// falls back to the default configuration.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Pick the effective weights for a run.
///
/// Precedence: `--template` flag, then custom `weights` from the config,
/// then the config's `template`, then `equilibrado`. Returns the weights
/// together with a label for display ("custom" or the template name).
pub fn resolve_weights(
    cli_template: Option<&str>,
    config: &Config,
) -> Result<(WeightConfig, String)> {
    if let Some(name) = cli_template {
        let template = lookup_template(name)?;
        return Ok((template.weights(), template.name().to_string()));
    }

    if let Some(ref weights) = config.weights {
        return Ok((weights.clone(), "custom".to_string()));
    }

    if let Some(ref name) = config.template {
        let template = lookup_template(name)?;
        return Ok((template.weights(), template.name().to_string()));
    }

    let template = WeightTemplate::Equilibrado;
    Ok((template.weights(), template.name().to_string()))
}

fn lookup_template(name: &str) -> Result<WeightTemplate> {
    WeightTemplate::from_name(name).ok_or_else(|| {
        let available: Vec<&str> = WeightTemplate::ALL.iter().map(|t| t.name()).collect();
        anyhow::anyhow!(
            "Unknown weight template '{}'. Available: {}",
            name,
            available.join(", ")
        )
    })
}
