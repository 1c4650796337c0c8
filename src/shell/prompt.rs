//! Line-oriented prompting
//!
//! Every read goes through [`Prompter`], which turns end of input into
//! [`ShellError::EndOfInput`] so the menu loops can unwind with `?`.

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::models::ExpenseDate;

/// Why the shell stopped early
#[derive(Error, Debug)]
pub enum ShellError {
    /// Input was closed at a prompt
    #[error("end of input")]
    EndOfInput,

    /// Reading or writing the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Reads answers from `R` and writes prompts to `W`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Input is a real terminal, so passwords can be read without echo
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// The output sink, for messages that are not prompts
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a label and read one line, without its line ending
    pub fn line(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(ShellError::EndOfInput);
        }

        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    /// Read a password, hidden when attached to a terminal
    pub fn password(&mut self, label: &str) -> ShellResult<String> {
        if !self.interactive {
            return self.line(label);
        }

        self.output.flush()?;
        match rpassword::prompt_password(label) {
            Ok(password) => Ok(password),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Err(ShellError::EndOfInput)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read a value, re-prompting until it parses
    pub fn parsed<T: FromStr>(&mut self, label: &str, retry_message: &str) -> ShellResult<T> {
        loop {
            let answer = self.line(label)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{}", retry_message)?,
            }
        }
    }

    /// Read a finite amount, re-prompting until one is given
    pub fn amount(&mut self, label: &str) -> ShellResult<f64> {
        loop {
            let value: f64 = self.parsed(label, "Invalid amount. Please enter a number.")?;
            if value.is_finite() {
                return Ok(value);
            }
            writeln!(self.output, "Invalid amount. Please enter a number.")?;
        }
    }

    /// Read a calendar date, re-prompting until one is valid
    pub fn date(&mut self, label: &str) -> ShellResult<ExpenseDate> {
        loop {
            let answer = self.line(label)?;
            match ExpenseDate::parse(answer.trim()) {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?,
            }
        }
    }

    /// Read a menu choice; `None` if the answer is not a number
    pub fn choice(&mut self) -> ShellResult<Option<u32>> {
        let answer = self.line("Enter your choice: ")?;
        Ok(answer.trim().parse().ok())
    }
}
