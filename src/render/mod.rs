// file: src/render/mod.rs
// description: terminal presentation of catalog views and statistics
// reference: internal module structure

pub mod cards;
pub mod dashboard;
pub mod table;

use crate::catalog::{CatalogView, LoadStatus};
use crate::config::{DisplayConfig, Layout};
use colored::Colorize;

pub use cards::render_cards;
pub use dashboard::render_dashboard;
pub use table::render_table;

/// Below this width the card layout replaces the table.
pub const NARROW_WIDTH: usize = 80;
pub const DEFAULT_WIDTH: usize = 100;

/// Configured width, else `COLUMNS`, else a fixed default.
pub fn terminal_width(display: &DisplayConfig) -> usize {
    if display.width > 0 {
        return display.width;
    }

    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

pub fn resolve_layout(layout: Layout, width: usize) -> Layout {
    match layout {
        Layout::Auto if width < NARROW_WIDTH => Layout::Cards,
        Layout::Auto => Layout::Table,
        fixed => fixed,
    }
}

pub fn render_view(view: &CatalogView<'_>, display: &DisplayConfig) -> String {
    let width = terminal_width(display);
    let mut out = String::new();

    out.push_str(&view.summary_line().bold().to_string());
    if view.is_filtered() {
        out.push_str(&format!(" ({})", view.filters.describe()));
    }
    out.push_str("\n\n");

    if view.books.is_empty() {
        out.push_str("No books found matching your criteria.\n");
        return out;
    }

    let body = match resolve_layout(display.layout, width) {
        Layout::Cards => render_cards(&view.books, display.max_tags),
        _ => render_table(&view.books, width, display.max_tags),
    };
    out.push_str(&body);
    out
}

/// Placeholder text for a collection that is not ready.
pub fn render_status(status: &LoadStatus) -> Option<String> {
    match status {
        LoadStatus::Loading => Some("Loading books...".to_string()),
        LoadStatus::Failed(message) => Some(format!(
            "{}\n{}",
            "Error loading books".red().bold(),
            message
        )),
        LoadStatus::Ready => None,
    }
}

pub(crate) fn tag_list(tags: &[String], max_tags: usize) -> String {
    let shown: Vec<&str> = tags.iter().take(max_tags).map(String::as_str).collect();
    let mut out = shown.join(", ");
    if tags.len() > max_tags {
        out.push_str(&format!(" +{}", tags.len() - max_tags));
    }
    out
}
