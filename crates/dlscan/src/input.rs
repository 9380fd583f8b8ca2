//! Scan input: hidden terminal lines when interactive, plain stdin lines
//! otherwise.

use std::io::{BufRead, IsTerminal};

use console::Term;

/// A source of raw scan lines. `Ok(None)` means the input is exhausted.
pub trait ScanSource {
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Reads from the terminal with echo disabled, so scanned payloads never
/// appear on screen.
pub struct HiddenTerminal {
    term: Term,
}

impl ScanSource for HiddenTerminal {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.term.read_secure_line().map(Some)
    }
}

/// Reads newline-terminated lines from any buffered reader.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ScanSource for LineReader<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Pick the hidden terminal reader when a person is at the keyboard, and a
/// plain line reader when input is piped.
pub fn open_source() -> Box<dyn ScanSource> {
    let term = Term::stderr();
    if std::io::stdin().is_terminal() && term.is_term() {
        Box::new(HiddenTerminal { term })
    } else {
        tracing::debug!("stdin is not a terminal, reading plain lines");
        Box::new(LineReader::new(std::io::stdin().lock()))
    }
}

// ==============================================================================
// Line Classification
// ==============================================================================

#[derive(Debug, PartialEq, Eq)]
pub enum InputLine<'a> {
    Quit,
    Blank,
    Payload(&'a str),
}

/// `q` and `quit` (any case) end the session; blank lines are skipped.
pub fn classify(line: &str) -> InputLine<'_> {
    let command = line.trim();
    if command.is_empty() {
        InputLine::Blank
    } else if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
        InputLine::Quit
    } else {
        InputLine::Payload(line)
    }
}
