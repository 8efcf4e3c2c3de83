use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console fake that replays scripted answers and captures output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
