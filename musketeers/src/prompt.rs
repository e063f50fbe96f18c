use std::{
    collections::VecDeque,
    io::{self, BufRead, Stdout, Write},
};

use crate::error::GameError;

/// Source of whitespace separated input tokens.
pub trait InputSource {
    /// Returns `None` once the input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Reads tokens from standard input a line at a time.
#[derive(Debug, Default)]
pub struct StdinSource {
    pending: VecDeque<String>,
}

impl InputSource for StdinSource {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Fixed list of tokens, handed out in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(script: &str) -> Self {
        Self {
            tokens: script.split_whitespace().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self.tokens.pop_front())
    }
}

/// Interactive console seen by the game: tokens in, text out.
pub trait Prompt {
    fn next_token(&mut self) -> Result<String, GameError>;

    fn out(&mut self) -> &mut dyn Write;

    /// Reads single letter tokens until one of `options` is entered,
    /// printing `retry` after every rejected token.
    /// `options` are upper case, matching is case-insensitive.
    fn choose(&mut self, options: &str, retry: &str) -> Result<char, GameError> {
        self.out().flush()?;
        loop {
            let token = self.next_token()?;
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                let c = c.to_ascii_uppercase();
                if options.contains(c) {
                    return Ok(c);
                }
            }
            log::debug!("rejected input {token:?}, expected one of {options}");
            write!(self.out(), "{retry}")?;
            self.out().flush()?;
        }
    }
}

pub struct Console<I, W> {
    input: I,
    out: W,
}

impl Console<StdinSource, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(StdinSource::default(), io::stdout())
    }
}

impl<I: InputSource, W: Write> Console<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self { input, out }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: InputSource> Console<I, Vec<u8>> {
    /// Everything written so far, for inspecting scripted sessions.
    #[must_use]
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<I: InputSource, W: Write> Prompt for Console<I, W> {
    fn next_token(&mut self) -> Result<String, GameError> {
        self.input.next_token()?.ok_or(GameError::InputClosed)
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(script: &str) -> Console<ScriptedInput, Vec<u8>> {
        Console::new(ScriptedInput::new(script), Vec::new())
    }

    #[test]
    fn choose_is_case_insensitive() {
        let mut console = console("r");
        assert_eq!(console.choose("URQ", "again: ").unwrap(), 'R');
        assert_eq!(console.transcript(), "");
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut console = console("x undo 7 Q");
        assert_eq!(console.choose("URQ", "again: ").unwrap(), 'Q');
        assert_eq!(console.transcript(), "again: again: again: ");
        assert_eq!(console.input().remaining(), 0);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut console = console("x");
        assert!(matches!(
            console.choose("YN", "again: "),
            Err(GameError::InputClosed)
        ));
    }
}
