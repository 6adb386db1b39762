use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of the single line answering the deletion prompt
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads the answer from the terminal, or from piped stdin when there is no terminal
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other);
        }

        print!("{prompt}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
        }
        Ok(line)
    }
}

/// Replays canned answers and records the prompts it was shown
#[cfg(test)]
pub struct ScriptedReader {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedReader {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer"))
    }
}
