//! End-to-end scanning against a ledger file on disk, across simulated
//! process restarts.

use std::path::PathBuf;

use dlscan_core::eligibility::EligibilityPolicy;
use dlscan_core::ledger::{SaveOutcome, ScanDecision, ScanLedger, ScanLimit, ScanOutcome};
use dlscan_core::{Scanner, Tag, TagBindings, TagCatalog};
use time::macros::date;

fn scratch_dir(prefix: &str) -> PathBuf {
    let unique = format!(
        "{prefix}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos()
    );
    let dir = std::path::Path::new("tmp").join(unique);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn scanner_at(path: &std::path::Path) -> Scanner {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dlscan_core=debug")),
        )
        .with_test_writer()
        .try_init();

    let ledger = ScanLedger::load(path, ScanLimit::default()).expect("load ledger");
    Scanner::new(
        TagCatalog::reference(),
        TagBindings::default(),
        EligibilityPolicy::default(),
        ledger,
    )
}

// Fields deliberately out of the usual order.
const PAYLOAD: &str = "@ANSI DBB07041999DAQS9988776DAK12345-6789DCSROEDACRICHARDDADNONEDBA07042030DBD07042022DAJCA";

#[test]
fn scans_are_counted_across_restarts() {
    let dir = scratch_dir("scan-flow-restart");
    let path = dir.join("scanned.json");
    let today = date!(2025 - 07 - 03);

    {
        let mut scanner = scanner_at(&path);
        for expected in [1, 2] {
            let report = scanner.process(PAYLOAD, today);
            match report.ledger {
                ScanOutcome::Recorded(record) => {
                    assert_eq!(record.count, expected);
                    assert_eq!(record.decision, ScanDecision::Allow);
                    assert_eq!(record.save, SaveOutcome::Saved);
                }
                ScanOutcome::NoIdentifier => panic!("license number should be found"),
            }
        }
    }

    let mut scanner = scanner_at(&path);
    assert_eq!(scanner.ledger().count("S9988776"), 2);
    let report = scanner.process(PAYLOAD, today);
    assert!(report.ledger.is_denied());
    drop(scanner);

    let persisted = std::fs::read_to_string(&path).expect("read ledger file");
    let counts: std::collections::BTreeMap<String, u64> =
        serde_json::from_str(&persisted).expect("ledger is JSON");
    assert_eq!(counts.get("S9988776"), Some(&3));

    std::fs::remove_dir_all(&dir).expect("cleanup test dir");
}

#[test]
fn record_fields_and_eligibility_from_unordered_payload() {
    let dir = scratch_dir("scan-flow-fields");
    let mut scanner = scanner_at(&dir.join("scanned.json"));

    // The day before the 26th birthday.
    let report = scanner.process(PAYLOAD, date!(2025 - 07 - 03));
    let license = &report.license;
    assert_eq!(license.full_name, "ROE, RICHARD");
    assert_eq!(license.middle_name, "NONE");
    assert_eq!(license.postal_code, "12345");
    assert_eq!(license.postal_code_ext, "6789");
    assert_eq!(license.state, "CA");
    assert_eq!(license.issue_date, "07042022");
    assert_eq!(report.eligibility.age, 25);
    assert!(report.eligibility.is_adult);
    assert!(report.eligibility.is_currently_valid);

    let json = serde_json::to_value(license).expect("serialize license");
    assert_eq!(json["license_number"], "S9988776");
    assert!(json.get("street_line1").is_none());

    std::fs::remove_dir_all(&dir).expect("cleanup test dir");
}

#[test]
fn tag_parse_errors_are_reported() {
    assert!("dcu".parse::<Tag>().is_err());
    assert_eq!("DCU".parse::<Tag>().expect("valid tag").as_str(), "DCU");
}
