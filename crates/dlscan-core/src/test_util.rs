//! Shared test helpers for `dlscan-core` unit tests.
//!
//! Builds scan payloads and license records so that parser, mapper,
//! eligibility, and ledger tests share one source of dummy data.

use std::path::PathBuf;

use crate::catalog::Tag;
use crate::types::DriverLicense;

/// Five-character format header used by the payload builders.
pub const HEADER: &str = "ANSI ";

// ==============================================================================
// Payload Builders
// ==============================================================================

/// Concatenate `pairs` behind a start marker and header, the way a scanner
/// in keyboard-wedge mode delivers them.
pub fn payload(pairs: &[(Tag, &str)]) -> String {
    let mut raw = format!("@{HEADER}");
    for (tag, value) in pairs {
        raw.push_str(tag.as_str());
        raw.push_str(value);
    }
    raw
}

/// A complete, well-formed payload for one license holder.
pub fn sample_payload() -> String {
    payload(&[
        (Tag::LICENSE_NUMBER, "D1234567"),
        (Tag::LAST_NAME, "DOE"),
        (Tag::FIRST_NAME, "JOHN"),
        (Tag::MIDDLE_NAME, "QUINCY"),
        (Tag::SUFFIX, "JR"),
        (Tag::ISSUE_DATE, "06012020"),
        (Tag::EXPIRATION_DATE, "06012028"),
        (Tag::DATE_OF_BIRTH, "06011990"),
        (Tag::STREET_LINE1, "123 MAIN ST"),
        (Tag::CITY, "AUSTIN"),
        (Tag::STATE, "TX"),
        (Tag::POSTAL_CODE, "787010000"),
        (Tag::COUNTRY, "USA"),
        (Tag::SEX, "1"),
        (Tag::EYE_COLOR, "BRO"),
        (Tag::HEIGHT, "070 IN"),
        (Tag::VEHICLE_CLASS, "C"),
        (Tag::RESTRICTIONS, "B"),
        (Tag::ENDORSEMENTS, "M"),
        (Tag::ISSUER_ID, "636015"),
    ])
}

/// A license with only the date fields set.
pub fn license_with_dates(birth: &str, expiration: &str) -> DriverLicense {
    DriverLicense {
        date_of_birth: birth.to_string(),
        expiration_date: expiration.to_string(),
        ..DriverLicense::default()
    }
}

// ==============================================================================
// Filesystem
// ==============================================================================

/// A unique scratch directory under `tmp/`. The caller removes it.
pub fn scratch_dir(prefix: &str) -> PathBuf {
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
