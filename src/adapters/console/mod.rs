// Console adapter - Prompts on stdout, answers from stdin

use std::io::{self, BufRead, Write};

use crate::domain::errors::*;
use crate::ports::*;

/// Terminal-backed prompt adapter
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptPort for ConsoleAdapter {
    fn ask(&self, prompt: &str) -> Result<String, DomainError> {
        let mut stdout = io::stdout().lock();
        // A failed flush only delays the prompt text
        let _ = write!(stdout, "{}", prompt).and_then(|_| stdout.flush());
        drop(stdout);

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| DomainError::BadArgs(format!("Failed to read answer: {}", e)))?;
        if read == 0 {
            return Err(DomainError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&self, line: &str) {
        println!("{}", line);
    }
}
