//! Password prompting.

use std::io::{self, BufRead, Write};

/// Source of interactively entered passwords.
pub trait PasswordPrompt {
    /// Shows `prompt` and returns the entered password without its line ending.
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompts on stderr and reads one line from stdin. Input is echoed.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl PasswordPrompt for StdinPrompt {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        let mut err = io::stderr().lock();
        err.write_all(prompt.as_bytes())?;
        err.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        writeln!(err)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
