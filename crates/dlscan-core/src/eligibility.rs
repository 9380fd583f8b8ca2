//! Age and expiration checks against the current calendar day.
//!
//! Card dates are `MMDDYYYY` text. A date that does not parse is treated as
//! missing, and a missing date always evaluates to the ineligible outcome.

use time::{Date, Month, OffsetDateTime};

use crate::types::{DriverLicense, Eligibility};

const DATE_LEN: usize = 8;

/// Minimum age policy applied by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityPolicy {
    pub minimum_age: u32,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self { minimum_age: 21 }
    }
}

/// Evaluate `license` as of `today`.
pub fn evaluate(license: &DriverLicense, today: Date, policy: &EligibilityPolicy) -> Eligibility {
    let birth_date = parse_mmddyyyy(&license.date_of_birth);
    let expiration_date = parse_mmddyyyy(&license.expiration_date);

    let (age, is_adult) = match birth_date {
        Some(birth) => {
            let age = age_on(birth, today);
            (age, age >= policy.minimum_age)
        }
        None => (0, false),
    };

    let is_currently_valid = match expiration_date {
        Some(expires) => expires > today,
        None => false,
    };

    Eligibility {
        age,
        is_adult,
        is_currently_valid,
    }
}

/// Parse an `MMDDYYYY` date. Anything other than eight ASCII digits forming
/// a real calendar date yields `None`.
pub fn parse_mmddyyyy(value: &str) -> Option<Date> {
    if value.len() != DATE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u8 = value[0..2].parse().ok()?;
    let day: u8 = value[2..4].parse().ok()?;
    let year: i32 = value[4..8].parse().ok()?;

    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Whole years elapsed between `birth` and `today`. Birth dates in the
/// future give 0.
pub fn age_on(birth: Date, today: Date) -> u32 {
    let mut age = today.year() - birth.year();
    let birthday_pending = (u8::from(today.month()), today.day())
        < (u8::from(birth.month()), birth.day());
    if birthday_pending {
        age -= 1;
    }
    u32::try_from(age).unwrap_or(0)
}

/// The current local calendar day, or the UTC day when the local offset
/// cannot be determined.
pub fn today_local() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "local offset unavailable, using UTC");
            OffsetDateTime::now_utc()
        })
        .date()
}
