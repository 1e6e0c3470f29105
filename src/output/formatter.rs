use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::RankedProposal;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a composite score with its fixed one-decimal precision
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a monetary amount in compact notation (1.5k, 2.3M, 847)
pub fn format_amount(amount: f64) -> String {
    let formatted = if amount >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{:.1}k", amount / 1_000.0)
    } else {
        format!("{:.0}", amount)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Format a lead time in days ("5d"; fractional days keep one decimal)
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{:.0}d", days)
    } else {
        format!("{:.1}d", days)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a supplier name to fit available width, accounting for Unicode
fn truncate_supplier(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the ranking as a table with columns: Index, Score, Supplier,
/// Price, Delivery. No headers.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 5 chars wide (fits "100.0")
pub fn format_ranked_table(ranked: &[RankedProposal], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No proposals found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    ranked
        .iter()
        .map(|entry| {
            let index_str = format!("{:>2}.", entry.position);
            let score_padded = format!(
                "{:>width$}",
                format_score(entry.result.score),
                width = score_width
            );
            let price_str = format!("{:>6}", format_amount(entry.proposal.metrics.price));
            let delivery_str = format!("{:>4}", format_days(entry.proposal.metrics.delivery_time));

            // Fixed columns around the supplier name decide how much room
            // is left for it
            let fixed_width = index_width
                + 1
                + score_width
                + separator.len() * 3
                + price_str.len()
                + delivery_str.len();

            let supplier = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_supplier(&entry.proposal.supplier, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_supplier(&entry.proposal.supplier, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                entry.proposal.supplier.clone()
            };
            let supplier_padded = format!("{:<24}", supplier);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    supplier_padded,
                    separator,
                    price_str.cyan(),
                    separator,
                    delivery_str.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str,
                    score_padded,
                    separator,
                    supplier_padded,
                    separator,
                    price_str,
                    separator,
                    delivery_str
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single ranked proposal with detailed multi-line output,
/// including the per-dimension score breakdown
pub fn format_proposal_detail(entry: &RankedProposal, use_colors: bool) -> String {
    let metrics = &entry.proposal.metrics;

    let header = if use_colors {
        format!(
            "{}  (rank {}, score {})",
            entry.proposal.supplier.bold(),
            entry.position,
            format_score(entry.result.score).bold()
        )
    } else {
        format!(
            "{}  (rank {}, score {})",
            entry.proposal.supplier,
            entry.position,
            format_score(entry.result.score)
        )
    };

    let mut lines = vec![
        header,
        format!(
            "  Price: {:.2}  Shipping: {:.2}  Delivery: {}",
            metrics.price,
            metrics.shipping_cost,
            format_days(metrics.delivery_time)
        ),
        format!(
            "  SLA: {}  Warranty: {}mo  Reputation: {}",
            metrics.sla, metrics.warranty, metrics.reputation
        ),
    ];

    for dim in &entry.result.breakdown.dimensions {
        let line = format!(
            "  {:<14} {:>10.2} -> {:>5.1}  x {:>4.1}% = {:>5.1} pts",
            dim.label, dim.raw, dim.normalized, dim.weight, dim.points
        );
        if use_colors {
            lines.push(line.dimmed().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format the ranking as tab-separated values for scripting
/// Columns: position, score, supplier, price, delivery_time (no headers, no colors)
pub fn format_tsv(ranked: &[RankedProposal]) -> String {
    if ranked.is_empty() {
        return String::new();
    }

    ranked
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                entry.position,
                format_score(entry.result.score),
                entry.proposal.supplier,
                entry.proposal.metrics.price,
                entry.proposal.metrics.delivery_time
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
