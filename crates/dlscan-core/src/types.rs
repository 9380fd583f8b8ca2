//! Domain types produced per scan: the normalized license record and the
//! result of the age and expiration checks.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Driver License
// ==============================================================================

/// A normalized license record built from one scan.
///
/// Every field is either empty or copied/derived from the parsed payload.
/// Dates stay as the `MMDDYYYY` text found on the card; they are only
/// parsed when eligibility is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverLicense {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    /// `LAST, FIRST MIDDLE SUFFIX`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub license_number: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub expiration_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date_of_birth: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub street_line1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub street_line2: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    /// ZIP+4 extension, when the postal code carried one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code_ext: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub sex: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub eye_color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub height: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub weight_kg: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vehicle_class: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub restrictions: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endorsements: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issuer_id: String,

    /// The payload exactly as scanned.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw_data: String,
}

// ==============================================================================
// Eligibility
// ==============================================================================

/// Outcome of the age and expiration checks for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    /// Whole years elapsed since birth; 0 when the birth date is unusable.
    pub age: u32,
    pub is_adult: bool,
    /// The expiration date is strictly after the evaluation day.
    pub is_currently_valid: bool,
}
