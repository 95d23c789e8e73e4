//! Validating reads of scalar values from a token stream.
//!
//! Input is consumed the way stream extraction does it: tokens are separated by
//! any whitespace, and a line carrying several tokens feeds several reads.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Printed after a token that could not be parsed into the requested type.
pub const MALFORMED_HINT: &str = "Invalid input. Try again";

/// Prompting reader over an input stream and the console output it echoes to.
pub struct InputSession<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    max_retries: Option<u32>,
}

impl<R: BufRead, W: Write> InputSession<R, W> {
    /// Create a session that retries indefinitely.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            max_retries: None,
        }
    }

    /// Limit how many times a single read may be re-prompted.
    ///
    /// `None` keeps the interactive behavior (retry forever).
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Output stream for reports.
    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the session and return its output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prompt until a token parses and satisfies `predicate`.
    ///
    /// The prompt is written verbatim before every attempt. A malformed token
    /// is discarded and answered with [`MALFORMED_HINT`]; a parsed value that
    /// fails `predicate` is answered with `hint`, when one is given.
    pub fn read_validated<T, E, P, V>(
        &mut self,
        prompt: &str,
        parse: P,
        predicate: V,
        hint: Option<&str>,
    ) -> Result<T>
    where
        P: Fn(&str) -> Result<T, E>,
        E: Display,
        V: Fn(&T) -> bool,
    {
        let mut rejections: u32 = 0;
        loop {
            self.write_prompt(prompt)?;
            let token = self.next_token()?;
            match parse(&token) {
                Ok(value) if predicate(&value) => return Ok(value),
                Ok(_) => {
                    debug!(token = %token, "input rejected");
                    if let Some(hint) = hint {
                        writeln!(self.writer, "{hint}").context("write hint")?;
                    }
                }
                Err(err) => {
                    debug!(token = %token, error = %err, "discarding malformed token");
                    writeln!(self.writer, "{MALFORMED_HINT}").context("write hint")?;
                }
            }
            rejections += 1;
            if let Some(limit) = self.max_retries
                && rejections > limit
            {
                bail!("no valid input after {rejections} attempts");
            }
        }
    }

    /// Read any value of type `T`, re-prompting on malformed tokens only.
    pub fn read<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.read_validated(prompt, str::parse::<T>, |_| true, None)
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        self.read(prompt)
    }

    /// Read a finite float. `nan` and `inf` parse but are rejected.
    pub fn read_float(&mut self, prompt: &str) -> Result<f64> {
        self.read_validated(prompt, str::parse::<f64>, |value| value.is_finite(), None)
    }

    /// Read a single non-whitespace character.
    ///
    /// Anything after the first character of the token stays buffered and is
    /// seen by the next read.
    pub fn read_char(&mut self, prompt: &str) -> Result<char> {
        let (first, rest) = self.read_validated(prompt, split_first_char, |_| true, None)?;
        if !rest.is_empty() {
            self.pending.push_front(rest);
        }
        Ok(first)
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{prompt}").context("write prompt")?;
        self.writer.flush().context("flush prompt")?;
        Ok(())
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("read standard input")?;
            if read == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Split a token into its first character and the remainder.
///
/// Tokens come from `split_whitespace`, so an empty one only reaches here if
/// that invariant is broken; it is then treated as malformed.
fn split_first_char(token: &str) -> Result<(char, String), &'static str> {
    let mut chars = token.chars();
    let first = chars.next().ok_or("empty token")?;
    Ok((first, chars.as_str().to_string()))
}
