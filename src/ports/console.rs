use crate::domain::AppError;

/// Port for operator-facing terminal I/O.
pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), AppError>;

    /// Show `prompt` without a trailing newline and read one line of input.
    ///
    /// Returns `None` when input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Read a secret value such as an access token.
    fn prompt_secret(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompt_line(prompt)
    }
}
