use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::render::{colorize, render_status_line, section_style, OutputStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Choice<T> {
    pub(crate) display: String,
    pub(crate) value: T,
}

impl<T> Choice<T> {
    pub(crate) fn new(display: impl Into<String>, value: T) -> Self {
        Self {
            display: display.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuItem<T> {
    Choice(Choice<T>),
    Separator(String),
}

/// The interactive surface the flows talk to.
pub(crate) trait Prompter {
    /// Single-select; separators are shown but never returned.
    fn select<T: Clone>(&mut self, message: &str, items: &[MenuItem<T>]) -> Result<T>;

    /// Returns the checked values in menu order; may be empty.
    fn multi_select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<Vec<T>>;

    fn input(&mut self, message: &str) -> Result<String>;

    fn notify(&mut self, status: &str, message: &str) -> Result<()>;
}

/// Numbered-menu prompts over a line reader, re-asking until the answer
/// parses.
pub(crate) struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
    style: OutputStyle,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub(crate) fn new(reader: R, writer: W, style: OutputStyle) -> Self {
        Self {
            reader,
            writer,
            style,
        }
    }

    fn write_question(&mut self, message: &str) -> Result<()> {
        let line = match self.style {
            OutputStyle::Plain => format!("? {message}"),
            OutputStyle::Rich => colorize(section_style(), &format!("? {message}")),
        };
        writeln!(self.writer, "{line}").context("failed writing prompt")
    }

    fn read_answer(&mut self, hint: &str) -> Result<String> {
        write!(self.writer, "{hint}> ").context("failed writing prompt")?;
        self.writer.flush().context("failed flushing prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed reading prompt answer")?;
        if read == 0 {
            bail!("input closed before the prompt was answered");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select<T: Clone>(&mut self, message: &str, items: &[MenuItem<T>]) -> Result<T> {
        let choices = items
            .iter()
            .filter_map(|item| match item {
                MenuItem::Choice(choice) => Some(choice),
                MenuItem::Separator(_) => None,
            })
            .collect::<Vec<_>>();
        if choices.is_empty() {
            bail!("no choices to select from: {message}");
        }

        self.write_question(message)?;
        let mut number = 0_usize;
        for item in items {
            let written = match item {
                MenuItem::Choice(choice) => {
                    number += 1;
                    writeln!(self.writer, "  {number}) {}", choice.display)
                }
                MenuItem::Separator(label) => writeln!(self.writer, "  -- {label} --"),
            };
            written.context("failed writing menu")?;
        }

        loop {
            let answer = self.read_answer("")?;
            match parse_menu_number(&answer, choices.len()) {
                Some(index) => return Ok(choices[index].value.clone()),
                None => writeln!(self.writer, "enter a number from 1 to {}", choices.len())
                    .context("failed writing prompt")?,
            }
        }
    }

    fn multi_select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<Vec<T>> {
        self.write_question(message)?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, choice.display)
                .context("failed writing menu")?;
        }

        loop {
            let answer = self.read_answer("numbers separated by spaces, empty for none ")?;
            match parse_menu_numbers(&answer, choices.len()) {
                Some(indices) => {
                    return Ok(indices
                        .into_iter()
                        .map(|index| choices[index].value.clone())
                        .collect())
                }
                None => writeln!(self.writer, "enter numbers from 1 to {}", choices.len())
                    .context("failed writing prompt")?,
            }
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        self.write_question(message)?;
        loop {
            let answer = self.read_answer("")?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    fn notify(&mut self, status: &str, message: &str) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            render_status_line(self.style, status, message)
        )
        .context("failed writing message")
    }
}

fn parse_menu_number(answer: &str, len: usize) -> Option<usize> {
    let number = answer.parse::<usize>().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

/// Parses `"1, 3 2"` into sorted, distinct zero-based indices.
pub(crate) fn parse_menu_numbers(answer: &str, len: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for token in answer
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        indices.push(parse_menu_number(token, len)?);
    }
    indices.sort_unstable();
    indices.dedup();
    Some(indices)
}
