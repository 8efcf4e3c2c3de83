use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Password};

use crate::domain::AppError;
use crate::ports::Console;

/// Console bound to the process's standard streams.
///
/// Generic over its streams so prompts can be driven from buffers.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
    interactive: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over stdin/stdout. Secrets are read with hidden input when
    /// stdin is a terminal.
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        Self { input: stdin.lock(), output: io::stdout(), interactive }
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, interactive: false }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_secret(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if !self.interactive {
            return self.prompt_line(prompt);
        }

        let label = prompt.trim_end().trim_end_matches(':');
        match Password::new().with_prompt(label).allow_empty_password(true).interact() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::config_error(format!("Failed to read token: {}", err))),
        }
    }
}
