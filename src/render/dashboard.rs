// file: src/render/dashboard.rs
// description: statistics dashboard with ranked bar charts

use crate::stats::{FrequencyTable, StatsReport};
use colored::Colorize;

const BAR_WIDTH: usize = 32;

pub fn render_dashboard(report: &StatsReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Bookshelf Statistics".bold()));
    out.push_str(&format!(
        "Total Books: {}   Unique Tags: {}   Languages: {}\n\n",
        report.total_books.to_string().bold(),
        report.unique_tags.to_string().bold(),
        report.unique_languages.to_string().bold()
    ));

    out.push_str(&section("Top Tags", &ranked(&report.top_tags)));
    out.push_str(&section("Languages", &ranked(&report.languages)));

    let authors = report
        .top_authors
        .iter()
        .map(|(author, count)| {
            let noun = if *count == 1 { "book" } else { "books" };
            format!("{}  {} {}", author, count, noun)
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&section("Most Popular Authors", &authors));

    let breakdown = format!(
        "Fiction         {} books\nNon-Fiction     {} books\nMulti-language  {} books",
        report.breakdown.fiction, report.breakdown.non_fiction, report.breakdown.multi_language
    );
    out.push_str(&section("Collection Breakdown", &breakdown));

    out
}

fn section(title: &str, body: &str) -> String {
    let body = if body.is_empty() { "(none)" } else { body };
    format!("{}\n{}\n\n", title.bold().underline(), body)
}

/// One numbered line per entry, bars scaled to the largest count.
fn ranked(table: &FrequencyTable) -> String {
    let max = table.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = table
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    table
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let pad = label_width - label.chars().count();
            format!(
                "{:>2}. {}{}  {} {}",
                i + 1,
                label,
                " ".repeat(pad),
                bar(*count, max).cyan(),
                count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * BAR_WIDTH).div_ceil(max);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
