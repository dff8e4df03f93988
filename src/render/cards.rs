// file: src/render/cards.rs
// description: stacked card layout for narrow terminals

use crate::models::Book;
use crate::render::tag_list;
use colored::Colorize;

pub fn render_cards(books: &[&Book], max_tags: usize) -> String {
    let mut out = String::new();

    for book in books {
        out.push_str(&format!("{}\n", book.title.bold()));
        out.push_str(&format!("  by {}\n", book.author));

        if !book.tags.is_empty() {
            out.push_str(&format!("  {}\n", tag_list(&book.tags, max_tags).blue()));
        }
        if !book.language.is_empty() {
            out.push_str(&format!("  {}\n", book.language));
        }
        if !book.goodreads.is_empty() {
            out.push_str(&format!("  {}\n", book.goodreads.underline()));
        }
        out.push('\n');
    }

    out
}
