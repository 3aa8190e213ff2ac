//! Interactive confirmation on stdin

use std::io::{self, BufRead, Write};

use gradebook::{DeletePrompter, Record};

/// Ask a yes/no question; anything but an explicit yes is a no
pub fn confirm(message: &str) -> bool {
    print!("{} [y/N] ", message);
    io::stdout().flush().ok();
    let stdin = io::stdin();
    let mut line = String::new();
    if stdin.lock().read_line(&mut line).is_err() {
        eprintln!("Failed to read input");
        return false;
    }
    is_yes(&line)
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "д" | "да"
    )
}

/// CLI prompter for row deletion
pub struct CliPrompter;

impl DeletePrompter for CliPrompter {
    fn confirm_delete(&self, row: usize, record: &Record) -> bool {
        let name = if record.identity.is_empty() {
            "<unnamed>"
        } else {
            record.identity.as_str()
        };
        confirm(&format!("Delete row {} \"{}\"?", row + 1, name))
    }
}
