//! Ranking and report rendering
//!
//! This module orders a frequency map into ranked entries and renders them
//! as top-N, full and persisted listings.

pub mod formatter;
pub mod parse;
pub mod ranking;

pub use formatter::{
    render_full, render_report, render_summary, render_top_n, save_report, write_report,
    ReportMetadata,
};
pub use parse::parse_report;
pub use ranking::rank;
