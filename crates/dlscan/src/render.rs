//! Console rendering for scan reports.

use std::io::{self, Write};

use console::style;

use dlscan_core::ledger::{ScanDecision, ScanOutcome};
use dlscan_core::{DriverLicense, ScanReport};

pub const READY_PROMPT: &str = "Ready for Scan";

const PASS: &str = "\u{2705}";
const FAIL: &str = "\u{1f6ab}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn banner() -> String {
    [
        "=== Driver License PDF417 Text Reader (hidden input) ===",
        "Scan the barcode – the raw data will NOT be shown on screen.",
        "Type 'q' (or Ctrl-C) to quit.",
        "Pass --json to get JSON output.",
        "",
    ]
    .join("\n")
}

/// The notice to show for a ledger outcome, if any.
pub fn ledger_notice(outcome: &ScanOutcome) -> Option<String> {
    match outcome {
        ScanOutcome::NoIdentifier => {
            Some("\u{26a0}\u{fe0f}  No license number found – skipping count check.".to_string())
        }
        ScanOutcome::Recorded(record) if record.decision == ScanDecision::Deny => Some(format!(
            "{FAIL}  License {} has been scanned {} times – entry denied.",
            record.license_number, record.count
        )),
        ScanOutcome::Recorded(_) => None,
    }
}

/// The multi-line text summary for an allowed or uncounted scan.
pub fn render_text(report: &ScanReport) -> String {
    let license = &report.license;
    let eligibility = &report.eligibility;

    let age_line = format!("Age             : {}", eligibility.age);
    let age_line = if eligibility.is_adult {
        style(format!("{age_line} {PASS}")).green()
    } else {
        style(format!("{age_line} {FAIL}")).red()
    };

    let expires_line = format!("Expires         : {}", license.expiration_date);
    let expires_line = if eligibility.is_currently_valid {
        style(format!("{expires_line} {PASS}")).green()
    } else {
        style(format!("{expires_line} {FAIL}")).red()
    };

    [
        String::new(),
        "--- Parsed License ---".to_string(),
        format!("Full Name       : {}", license.full_name),
        format!("License Number  : {}", license.license_number),
        age_line.to_string(),
        format!("DOB             : {}", license.date_of_birth),
        format!("Issued          : {}", license.issue_date),
        expires_line.to_string(),
        "-----------------------".to_string(),
        String::new(),
    ]
    .join("\n")
}

pub fn render_json(license: &DriverLicense) -> serde_json::Result<String> {
    serde_json::to_string_pretty(license)
}

// ==============================================================================
// Printer
// ==============================================================================

/// Routes session output to the right stream for the output mode.
///
/// Records always go to `out`. Status text (banner, prompts, notices,
/// farewell) goes to `out` in text mode and to `err` in JSON mode, so
/// stdout stays a clean stream of JSON documents.
pub struct Printer<O, E> {
    mode: OutputMode,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn new(mode: OutputMode, out: O, err: E) -> Self {
        Self { mode, out, err }
    }

    pub fn status(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.out, "{text}"),
            OutputMode::Json => writeln!(self.err, "{text}"),
        }
    }

    pub fn report(&mut self, report: &ScanReport) -> io::Result<()> {
        match self.mode {
            OutputMode::Json => match render_json(&report.license) {
                Ok(json) => writeln!(self.out, "{json}"),
                Err(err) => {
                    tracing::error!(error = %err, "could not encode scan as JSON");
                    Ok(())
                }
            },
            OutputMode::Text => {
                writeln!(self.out, "{}", render_text(report))?;
                writeln!(self.out, "{READY_PROMPT}")
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
