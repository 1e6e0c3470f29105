pub mod formatter;
pub mod report;

pub use formatter::{
    format_amount, format_days, format_proposal_detail, format_ranked_table, format_score,
    format_tsv, should_use_colors,
};
pub use report::{build_report, save_report, ComparisonReport};
