//! Text rendering for the interactive console.
//!
//! Everything here is pure: functions take service results and return the
//! strings the binary prints, so the output format can be tested without a
//! terminal.

use std::fmt::Write as _;

use crate::application::dto::UrlStatistics;
use crate::domain::entities::UrlMapping;
use crate::error::ServiceError;

const CODE_COLUMN_WIDTH: usize = 15;
const CLICKS_COLUMN_WIDTH: usize = 8;
const URL_RULE_WIDTH: usize = 40;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    Resolve,
    Delete,
    Statistics,
    List,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Create,
        MenuAction::Resolve,
        MenuAction::Delete,
        MenuAction::Statistics,
        MenuAction::List,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Create => "Create short URL",
            MenuAction::Resolve => "Resolve short URL (counts as click)",
            MenuAction::Delete => "Delete short URL",
            MenuAction::Statistics => "View URL statistics",
            MenuAction::List => "List all URLs",
            MenuAction::Exit => "Exit",
        }
    }
}

pub fn render_created(mapping: &UrlMapping) -> String {
    format!("Created: {} -> {}", mapping.short_code(), mapping.long_url())
}

pub fn render_resolved(long_url: &str) -> String {
    format!("Redirects to: {long_url}")
}

pub fn render_deleted(short_code: &str) -> String {
    format!("Deleted: {short_code}")
}

pub fn render_error(error: &ServiceError) -> String {
    format!("Error: {}", error.message())
}

/// Renders a statistics snapshot as aligned `label: value` lines.
pub fn render_statistics(stats: &UrlStatistics) -> String {
    format!(
        "Short Code:  {}\nLong URL:    {}\nClick Count: {}\nCreated:     {} UTC",
        stats.short_code,
        stats.long_url,
        stats.click_count,
        stats.created_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Renders mappings as a code / clicks / URL table with a total line.
pub fn render_table(stats: &[UrlStatistics]) -> String {
    if stats.is_empty() {
        return "No URLs found.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<code_w$} {:<clicks_w$} Long URL",
        "Short Code",
        "Clicks",
        code_w = CODE_COLUMN_WIDTH,
        clicks_w = CLICKS_COLUMN_WIDTH,
    );
    let _ = writeln!(
        out,
        "{} {} {}",
        "-".repeat(CODE_COLUMN_WIDTH),
        "-".repeat(CLICKS_COLUMN_WIDTH),
        "-".repeat(URL_RULE_WIDTH),
    );

    for s in stats {
        let _ = writeln!(
            out,
            "{:<code_w$} {:<clicks_w$} {}",
            s.short_code,
            s.click_count,
            s.long_url,
            code_w = CODE_COLUMN_WIDTH,
            clicks_w = CLICKS_COLUMN_WIDTH,
        );
    }

    let _ = write!(out, "\nTotal: {} URL(s)", stats.len());
    out
}

/// Renders a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
