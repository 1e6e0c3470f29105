use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::scoring::{validate_weights, Dimension, WeightConfig, WeightTemplate};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Prompt for one weight, looping until a valid percentage is entered.
fn prompt_weight(dimension: Dimension, default: f64) -> Result<f64> {
    loop {
        let input = prompt_with_default(
            &format!("  {} weight", dimension.label()),
            &format!("{}", default),
        )?;
        match input.parse::<f64>() {
            Ok(v) if (0.0..=100.0).contains(&v) => break Ok(v),
            Ok(_) => println!("  Invalid: must be between 0 and 100. Try again."),
            Err(_) => println!("  Invalid: must be a number. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("quote-rank configuration wizard");
    println!("===============================");
    println!();

    // 1. Starting template
    println!("Weight templates decide how much each criterion counts toward the");
    println!("composite score. Available templates:");
    for template in WeightTemplate::ALL {
        println!("  {:<15} {}", template.name(), template.description());
    }
    println!();

    let template = loop {
        let input = prompt_with_default("Start from template", "equilibrado")?;
        match WeightTemplate::from_name(&input) {
            Some(t) => break t,
            None => println!("  Unknown template '{}'. Try again.", input),
        }
    };

    // 2. Optional manual adjustment
    println!();
    let customize = prompt_yes_no("Adjust the weights manually?", false)?;

    let (config_template, config_weights) = if customize {
        println!();
        println!("Enter a percentage for each criterion. The six weights must sum");
        println!("to 100 so scores land on a 0-100 scale.");
        let weights = loop {
            let defaults = template.weights();
            let weights = WeightConfig {
                price: prompt_weight(Dimension::Price, defaults.price)?,
                delivery_time: prompt_weight(Dimension::DeliveryTime, defaults.delivery_time)?,
                shipping_cost: prompt_weight(Dimension::ShippingCost, defaults.shipping_cost)?,
                sla: prompt_weight(Dimension::Sla, defaults.sla)?,
                warranty: prompt_weight(Dimension::Warranty, defaults.warranty)?,
                reputation: prompt_weight(Dimension::Reputation, defaults.reputation)?,
            };
            if validate_weights(&weights) {
                break weights;
            }
            println!(
                "  Weights sum to {}, not 100. Let's try again.",
                weights.total()
            );
            println!();
        };
        (None, Some(weights))
    } else {
        (Some(template.name().to_string()), None)
    };

    // 3. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config {
        template: config_template,
        weights: config_weights,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `quote-rank rank <quotation-file>` to score a proposal set.");

    Ok(())
}
