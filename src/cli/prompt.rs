//! Line-oriented user input.

use crate::error::{PhoneBookError, PhoneBookResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const YES: [&str; 2] = ["yes", "y"];
const NO: [&str; 2] = ["no", "n"];

/// Reads answers from `input` and writes questions and output to `output`.
///
/// Generic over the streams so a session can be driven from a script in
/// tests and from stdin/stdout in the binary.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> PhoneBookResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show `message` and read one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedEof` I/O error once the input is exhausted.
    pub fn ask(&mut self, message: &str) -> PhoneBookResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Like [`ask`](Self::ask), but a blank answer means "no value".
    pub fn ask_optional(&mut self, message: &str) -> PhoneBookResult<Option<String>> {
        let answer = self.ask(message)?;
        Ok(Some(answer).filter(|a| !a.trim().is_empty()))
    }

    /// Ask a yes/no question. Accepts `yes`, `y`, `no`, `n` in any case.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::InvalidInput` for any other answer.
    pub fn ask_yes_no(&mut self, message: &str) -> PhoneBookResult<bool> {
        let answer = self.ask(message)?.trim().to_lowercase();
        if YES.contains(&answer.as_str()) {
            Ok(true)
        } else if NO.contains(&answer.as_str()) {
            Ok(false)
        } else {
            Err(PhoneBookError::InvalidInput(format!(
                "Expected 'yes' or 'no', got '{}'",
                answer
            )))
        }
    }

    /// Ask for a UTC date or date-time; a blank answer clears the value.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::InvalidInput` if the answer is not a date.
    pub fn ask_datetime(&mut self, message: &str) -> PhoneBookResult<Option<DateTime<Utc>>> {
        match self.ask_optional(message)? {
            Some(answer) => parse_datetime(&answer).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339 input as UTC.
pub fn parse_datetime(input: &str) -> PhoneBookResult<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.and_utc());
    }
    if let Some(datetime) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(datetime.and_utc());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.with_timezone(&Utc));
    }

    Err(PhoneBookError::InvalidInput(format!(
        "'{}' is not a date (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)",
        input
    )))
}

/// Whether an error means the input stream has ended.
pub fn is_end_of_input(error: &PhoneBookError) -> bool {
    matches!(error, PhoneBookError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

/// Whether an error means one input line was not valid UTF-8.
///
/// The offending line has already been consumed, so the next `ask` reads
/// the line after it.
pub fn is_unreadable_line(error: &PhoneBookError) -> bool {
    matches!(error, PhoneBookError::Io(e) if e.kind() == io::ErrorKind::InvalidData)
}
