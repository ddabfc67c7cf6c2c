//! Terminal implementation of the frontend port.

use colored::Colorize;
use ladle_app::{Frontend, Page};
use std::sync::Mutex;

/// Renders workflow output to the terminal.
///
/// "Navigation" is a page banner plus a mode switch the REPL prompt picks
/// up; notifications are colored lines; the list is printed row by row.
/// There are no persistent form inputs in a REPL, so `clear_form` has
/// nothing to do.
pub struct TerminalFrontend {
    current_page: Mutex<Page>,
}

impl TerminalFrontend {
    pub fn new(start_page: Page) -> Self {
        Self {
            current_page: Mutex::new(start_page),
        }
    }

    pub fn current_page(&self) -> Page {
        *self.current_page.lock().unwrap()
    }
}

impl Frontend for TerminalFrontend {
    fn notify(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn render_rows(&self, rows: &[String]) {
        if rows.is_empty() {
            println!("{}", "(nothing here)".bright_black());
            return;
        }
        for row in rows {
            println!("  {}", row.bright_blue());
        }
    }

    fn navigate(&self, page: Page) {
        *self.current_page.lock().unwrap() = page;
        println!("{}", format!("=== {} ===", page.title()).bright_magenta());
    }

    fn clear_form(&self) {}
}
