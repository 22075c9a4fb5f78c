//! Line-oriented input provider with a re-prompt-until-valid discipline.
//!
//! Invalid input is never an error here: empty lines, non-numeric text and
//! out-of-range numbers each get their own rejection message and another
//! prompt. The only failures are a closed stream and real I/O errors.

use std::io::{BufRead, Write};

use error::GameError;

/// Reads validated choices from `reader`, echoing prompts and rejection
/// messages to `writer`. Generic over its streams so tests can drive it
/// from byte buffers.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// Show a numbered menu (1-based) and read a selection. Returns the
    /// 0-based index of the chosen option, guaranteed in range.
    pub fn menu_choice(&mut self, prompt: &str, options: &[&str]) -> Result<usize, GameError> {
        loop {
            writeln!(self.writer, "{prompt}")?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, option)?;
            }
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            let raw = self.read_line()?;
            if raw.is_empty() {
                writeln!(self.writer, "Please enter a number matching one of the options")?;
                continue;
            }
            if !raw.chars().all(|c| c.is_ascii_digit()) {
                writeln!(self.writer, "Invalid input: enter a number (e.g. 1, 2, 3)")?;
                continue;
            }
            match raw.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => {
                    writeln!(
                        self.writer,
                        "Please choose a number between 1 and {}",
                        options.len()
                    )?;
                }
            }
        }
    }

    /// Read an integer, optionally bounded to `[min, max]`. Negative values
    /// are accepted when the bounds allow them.
    pub fn bounded_int(
        &mut self,
        prompt: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<i64, GameError> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;

            let raw = self.read_line()?;
            if raw.is_empty() {
                writeln!(self.writer, "Please enter a whole number")?;
                continue;
            }
            let value = match raw.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(self.writer, "Invalid input: enter a whole number")?;
                    continue;
                }
            };
            if min.is_some_and(|m| value < m) {
                writeln!(self.writer, "Value too small (min: {})", min.unwrap())?;
                continue;
            }
            if max.is_some_and(|m| value > m) {
                writeln!(self.writer, "Value too large (max: {})", max.unwrap())?;
                continue;
            }
            return Ok(value);
        }
    }
}
