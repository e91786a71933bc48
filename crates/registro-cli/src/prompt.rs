use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

const INVALID_INTEGER: &str = "Error: Ingrese un número entero válido.";
const INVALID_DECIMAL: &str = "Error: Ingrese un número decimal válido.";

/// Failures while talking to the console.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input reached end of file before a value was read.
    #[error("input closed")]
    Closed,
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for everything that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` without a newline and read one raw line.
    pub fn read_line(&mut self, message: &str) -> Result<String, InputError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompt until the line parses as an integer.
    pub fn read_int(&mut self, message: &str) -> Result<i32, InputError> {
        self.read_parsed(message, INVALID_INTEGER, |line| line.parse().ok())
    }

    /// Prompt until the line parses as a decimal number (see [`parse_decimal`]).
    pub fn read_float(&mut self, message: &str) -> Result<f64, InputError> {
        self.read_parsed(message, INVALID_DECIMAL, parse_decimal)
    }

    fn read_parsed<T, F>(
        &mut self,
        message: &str,
        error_message: &str,
        parse: F,
    ) -> Result<T, InputError>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let line = self.read_line(message)?;
            match parse(&line) {
                Some(value) => return Ok(value),
                None => {
                    debug!(input = %line, "rejected numeric input");
                    writeln!(self.output, "{error_message}")?;
                }
            }
        }
    }
}

/// Parse a decimal the way the JVM's `Double.parseDouble` reads it:
/// surrounding whitespace is ignored, an optional `d`/`D`/`f`/`F` suffix is
/// allowed, and the only non-finite spellings are `NaN` and `Infinity`.
/// Hexadecimal literals are not supported.
pub fn parse_decimal(line: &str) -> Option<f64> {
    let text = line.trim();
    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned.len() + 1 < text.len() {
        return None;
    }
    let negative = text.starts_with('-');
    match unsigned {
        "NaN" => return Some(f64::NAN),
        "Infinity" if negative => return Some(f64::NEG_INFINITY),
        "Infinity" => return Some(f64::INFINITY),
        _ => {}
    }

    let number = text.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(text);
    let plain = number
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !plain || !number.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}
