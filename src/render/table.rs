// file: src/render/table.rs
// description: fixed-width table layout for wide terminals

use crate::models::Book;
use crate::render::tag_list;
use crate::utils::validation::Validator;
use colored::Colorize;

const HEADERS: [&str; 5] = ["Title", "Author", "Genres", "Language", "Link"];

// Share of the flexible width given to Title, Author, Genres, Language.
const WEIGHTS: [usize; 4] = [30, 22, 28, 20];
const MIN_COLUMN: usize = 6;

pub fn render_table(books: &[&Book], width: usize, max_tags: usize) -> String {
    let link_width = books
        .iter()
        .map(|b| b.goodreads.chars().count())
        .max()
        .unwrap_or(0)
        .max(HEADERS[4].len());
    let widths = column_widths(width, link_width);

    let mut out = String::new();
    let header = format_row(&HEADERS.map(str::to_string), &widths);
    out.push_str(&header.bold().to_string());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for book in books {
        let cells = [
            book.title.clone(),
            book.author.clone(),
            tag_list(&book.tags, max_tags),
            book.language.clone(),
            book.goodreads.clone(),
        ];
        out.push_str(&format_row(&cells, &widths));
        out.push('\n');
    }

    out
}

fn column_widths(width: usize, link_width: usize) -> [usize; 5] {
    let gaps = 2 * (HEADERS.len() - 1);
    let flexible = width.saturating_sub(link_width + gaps);
    let total: usize = WEIGHTS.iter().sum();

    let mut widths = [0; 5];
    for (slot, weight) in widths.iter_mut().zip(WEIGHTS) {
        *slot = (flexible * weight / total).max(MIN_COLUMN);
    }
    widths[4] = link_width;
    widths
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let last = cells.len() - 1;
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            let text = Validator::truncate_text(cell, w);
            if i == last {
                text
            } else {
                let pad = w.saturating_sub(text.chars().count());
                format!("{}{}", text, " ".repeat(pad))
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
