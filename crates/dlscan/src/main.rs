mod cli;
mod input;
mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;

use dlscan_core::eligibility::{today_local, EligibilityPolicy};
use dlscan_core::ledger::{ScanLedger, ScanLimit};
use dlscan_core::{Scanner, TagBindings, TagCatalog};

use input::{classify, InputLine, ScanSource};
use render::{OutputMode, Printer};

const LEDGER_FILE_NAME: &str = "scanned.json";

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let ledger_path = match &args.ledger {
        Some(path) => path.clone(),
        None => default_ledger_path().context("locate scan ledger next to the executable")?,
    };
    let limit = ScanLimit {
        max_allowed: args.max_scans,
    };
    let ledger = ScanLedger::load(&ledger_path, limit).context("load scan ledger")?;
    tracing::info!(
        path = %ledger_path.display(),
        entries = ledger.len(),
        "loaded scan ledger"
    );

    let bindings = TagBindings {
        suffix: args.suffix_tag,
        endorsements: args.endorsements_tag,
        ..TagBindings::default()
    };
    let policy = EligibilityPolicy {
        minimum_age: args.min_age,
    };
    let mut scanner = Scanner::new(TagCatalog::reference(), bindings, policy, ledger);

    let mut source = input::open_source();
    let mut printer = Printer::new(mode, std::io::stdout(), std::io::stderr());
    run(source.as_mut(), &mut scanner, &mut printer)
}

/// The scan loop: one line is fully processed and rendered before the next
/// is read. Only a failed read or write ends it with an error.
fn run<O: Write, E: Write>(
    source: &mut dyn ScanSource,
    scanner: &mut Scanner,
    printer: &mut Printer<O, E>,
) -> eyre::Result<()> {
    printer.status(&render::banner()).context("write banner")?;
    printer.status(render::READY_PROMPT).context("write banner")?;

    while let Some(line) = source.next_line().context("read scan input")? {
        let raw = match classify(&line) {
            InputLine::Quit => {
                printer.status("Bye!").context("write farewell")?;
                return Ok(());
            }
            InputLine::Blank => continue,
            InputLine::Payload(raw) => raw,
        };

        let report = scanner.process(raw, today_local());

        if let Some(notice) = render::ledger_notice(&report.ledger) {
            printer.status(&notice).context("write ledger notice")?;
        }
        if report.ledger.is_denied() {
            continue;
        }
        printer.report(&report).context("write scan report")?;
    }

    tracing::debug!("scan input closed");
    Ok(())
}

fn default_ledger_path() -> eyre::Result<PathBuf> {
    let exe = std::env::current_exe().context("resolve current executable")?;
    Ok(exe.with_file_name(LEDGER_FILE_NAME))
}
