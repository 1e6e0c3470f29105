use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use quote_rank::input::QuotationFile;
use quote_rank::scoring::{Dimension, RankedProposal, WeightConfig, WeightTemplate};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank the proposals in a quotation file
    Rank {
        /// Path to the quotation file (YAML or JSON)
        file: PathBuf,

        /// Output tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show one proposal's score breakdown by its rank position
    Show {
        /// Path to the quotation file (YAML or JSON)
        file: PathBuf,

        /// Rank position of the proposal to show (1-based, as shown in rank)
        position: usize,
    },
    /// List the built-in weight templates
    Templates,
    /// Export the ranking as a JSON comparison report
    Export {
        /// Path to the quotation file (YAML or JSON)
        file: PathBuf,

        /// Where to write the report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "quote-rank")]
#[command(about = "Supplier proposal ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/quote-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Weight template to apply, overriding the config
    #[arg(short, long, global = true)]
    template: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match quote_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Init never scores anything, run it before weight resolution
    if let Commands::Init = cli.command {
        if let Err(e) = quote_rank::config::run_init_wizard(None) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Resolve and validate weights at startup
    let (weights, weights_source) =
        match quote_rank::config::resolve_weights(cli.template.as_deref(), &config) {
            Ok(resolved) => resolved,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };

    if let Err(errors) = quote_rank::scoring::validate_weight_config(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Using '{}' weights (sum {})",
            weights_source,
            weights.total()
        );
    }

    let use_colors = quote_rank::output::should_use_colors();

    match cli.command {
        Commands::Rank { ref file, tsv } => {
            let (quotation, ranked) = load_and_rank(file, &weights, cli.verbose);

            if tsv {
                println!("{}", quote_rank::output::format_tsv(&ranked));
            } else if cli.verbose {
                // Verbose mode: detailed output with score breakdowns
                for entry in &ranked {
                    println!(
                        "{}",
                        quote_rank::output::format_proposal_detail(entry, use_colors)
                    );
                    println!();
                }
            } else {
                // Normal mode: ranked table
                println!(
                    "{}",
                    quote_rank::output::format_ranked_table(&ranked, use_colors)
                );
            }

            if cli.verbose {
                if let Some(title) = quotation.quotation.title {
                    eprintln!();
                    eprintln!("Quotation: {} ({} proposals)", title, ranked.len());
                }
            }
        }
        Commands::Show { ref file, position } => {
            let (_, ranked) = load_and_rank(file, &weights, cli.verbose);

            // Validate position bounds (1-based)
            if position < 1 || position > ranked.len() {
                eprintln!(
                    "Invalid position {}. Must be between 1 and {}.",
                    position,
                    ranked.len()
                );
                std::process::exit(EXIT_INPUT);
            }

            println!(
                "{}",
                quote_rank::output::format_proposal_detail(&ranked[position - 1], use_colors)
            );
        }
        Commands::Templates => {
            for template in WeightTemplate::ALL {
                println!("{:<15} {}", template.name(), template.description());
                let w = template.weights();
                let line = Dimension::ALL
                    .iter()
                    .map(|d| format!("{} {}", d.key(), w.get(*d)))
                    .collect::<Vec<_>>()
                    .join("  ");
                println!("{:<15} {}", "", line);
            }
        }
        Commands::Export {
            ref file,
            ref output,
        } => {
            let (quotation, ranked) = load_and_rank(file, &weights, cli.verbose);

            let report =
                quote_rank::output::build_report(&quotation, &ranked, &weights, &weights_source);
            if let Err(e) = quote_rank::output::save_report(output, &report) {
                eprintln!("Export error: {}", e);
                std::process::exit(EXIT_INPUT);
            }

            println!("Report written to {}", output.display());
        }
        Commands::Init => unreachable!("handled before weight resolution"),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load a quotation file, validate its proposals and rank them.
/// Exits with `EXIT_INPUT` on any failure, printing every collected error.
fn load_and_rank(
    path: &Path,
    weights: &WeightConfig,
    verbose: bool,
) -> (QuotationFile, Vec<RankedProposal>) {
    let quotation = match quote_rank::input::load_quotation(path) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if let Err(errors) = quote_rank::input::validate_proposals(&quotation.proposals) {
        eprintln!("Quotation file errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    if verbose {
        eprintln!(
            "Loaded {} proposals from {}",
            quotation.proposals.len(),
            path.display()
        );
    }

    let ranked = match quote_rank::scoring::rank_proposals(&quotation.proposals, weights) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    (quotation, ranked)
}
