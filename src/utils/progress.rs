// file: src/utils/progress.rs
// description: spinner shown while the bookshelf document loads
// reference: https://docs.rs/indicatif

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct LoadSpinner {
    bar: ProgressBar,
}

impl LoadSpinner {
    pub fn new(location: &str, colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] {msg}"
        } else {
            "{spinner} [{elapsed_precise}] {msg}"
        };

        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style);
        }

        bar.set_message(format!("Loading books from {}", location));
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Drop for LoadSpinner {
    fn drop(&mut self) {
        self.finish();
    }
}
