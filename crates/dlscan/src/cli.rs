use std::path::PathBuf;

use clap::Parser;

use dlscan_core::Tag;

/// dlscan — hidden-input driver license barcode reader with age, expiration,
/// and repeat-scan checks.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Print each scan as a JSON object instead of the text summary.
    #[arg(long, env = "DLSCAN_JSON")]
    pub json: bool,

    /// Scan-count ledger file. Defaults to `scanned.json` next to the executable.
    #[arg(long, env = "DLSCAN_LEDGER")]
    pub ledger: Option<PathBuf>,

    /// Earlier scans of one license tolerated before entry is denied.
    #[arg(long, default_value = "2", env = "DLSCAN_MAX_SCANS")]
    pub max_scans: u64,

    /// Minimum age in whole years.
    #[arg(long, default_value = "21", env = "DLSCAN_MIN_AGE")]
    pub min_age: u32,

    /// Element tag holding the name suffix.
    #[arg(long, default_value = "DCE", value_parser = parse_tag)]
    pub suffix_tag: Tag,

    /// Element tag holding the endorsement codes.
    #[arg(long, default_value = "DDE", value_parser = parse_tag)]
    pub endorsements_tag: Tag,
}

fn parse_tag(value: &str) -> Result<Tag, String> {
    value.parse().map_err(|err: dlscan_core::CatalogError| err.to_string())
}
