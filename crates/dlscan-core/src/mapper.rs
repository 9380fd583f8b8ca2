//! Converts a parsed [`FieldMap`] into a normalized [`DriverLicense`].

use crate::catalog::TagBindings;
use crate::parser::FieldMap;
use crate::types::DriverLicense;

/// Middle-name placeholder printed on cards that have none.
const NO_MIDDLE_NAME: &str = "NONE";

const POSTAL_BASE_LEN: usize = 5;
const ZIP_PLUS_FOUR_LEN: usize = 9;

/// Map `fields` with the default tag bindings.
pub fn map_record(fields: &FieldMap, raw: &str) -> DriverLicense {
    map_record_with(fields, raw, &TagBindings::default())
}

/// Map `fields` into a record, reading each field through `bindings`.
/// Total: absent tags become empty fields.
pub fn map_record_with(fields: &FieldMap, raw: &str, bindings: &TagBindings) -> DriverLicense {
    let field = |tag| fields.get(tag).to_string();

    let first_name = field(bindings.first_name);
    let middle_name = field(bindings.middle_name);
    let last_name = field(bindings.last_name);
    let suffix = field(bindings.suffix);
    let full_name = compose_full_name(&last_name, &first_name, &middle_name, &suffix);

    let (postal_code, postal_code_ext) = split_postal_code(fields.get(bindings.postal_code));

    DriverLicense {
        first_name,
        middle_name,
        last_name,
        suffix,
        full_name,
        license_number: field(bindings.license_number),
        issue_date: field(bindings.issue_date),
        expiration_date: field(bindings.expiration_date),
        date_of_birth: field(bindings.date_of_birth),
        street_line1: field(bindings.street_line1),
        street_line2: field(bindings.street_line2),
        city: field(bindings.city),
        state: field(bindings.state),
        postal_code,
        postal_code_ext,
        country: field(bindings.country),
        sex: field(bindings.sex),
        eye_color: field(bindings.eye_color),
        height: field(bindings.height),
        weight_kg: field(bindings.weight),
        vehicle_class: field(bindings.vehicle_class),
        restrictions: field(bindings.restrictions),
        endorsements: field(bindings.endorsements),
        issuer_id: field(bindings.issuer_id),
        raw_data: raw.to_string(),
    }
}

/// `LAST, FIRST`, then the middle name unless it is the `NONE` placeholder,
/// then the suffix.
pub fn compose_full_name(last: &str, first: &str, middle: &str, suffix: &str) -> String {
    let mut full = format!("{last}, {first}").trim().to_string();
    if !middle.is_empty() && middle != NO_MIDDLE_NAME {
        full.push(' ');
        full.push_str(middle);
    }
    if !suffix.is_empty() {
        full.push(' ');
        full.push_str(suffix);
    }
    full
}

/// Split a postal code into its base and ZIP+4 extension.
///
/// Values longer than five characters split on the first hyphen, or at
/// position five when exactly nine characters long. Anything else is kept
/// whole with an empty extension.
pub fn split_postal_code(value: &str) -> (String, String) {
    if value.len() > POSTAL_BASE_LEN {
        if let Some((base, ext)) = value.split_once('-') {
            return (base.to_string(), ext.to_string());
        }
        if value.len() == ZIP_PLUS_FOUR_LEN {
            if let (Some(base), Some(ext)) =
                (value.get(..POSTAL_BASE_LEN), value.get(POSTAL_BASE_LEN..))
            {
                return (base.to_string(), ext.to_string());
            }
        }
    }
    (value.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Tag, TagCatalog};
    use crate::parser::parse;
    use crate::test_util::sample_payload;

    #[test]
    fn postal_code_splits() {
        assert_eq!(split_postal_code("123456789"), ("12345".into(), "6789".into()));
        assert_eq!(split_postal_code("12345-6789"), ("12345".into(), "6789".into()));
        assert_eq!(split_postal_code("12345"), ("12345".into(), String::new()));
        assert_eq!(split_postal_code(""), (String::new(), String::new()));
    }

    #[test]
    fn postal_code_without_split_rule_is_kept_whole() {
        // Longer than five, no hyphen, not nine long.
        assert_eq!(
            split_postal_code("1234567"),
            ("1234567".into(), String::new())
        );
        // Canadian-style codes keep their space.
        assert_eq!(
            split_postal_code("K1A 0B1"),
            ("K1A 0B1".into(), String::new())
        );
        // Short hyphenated values are not split.
        assert_eq!(split_postal_code("12-34"), ("12-34".into(), String::new()));
    }

    #[test]
    fn full_name_variants() {
        assert_eq!(compose_full_name("DOE", "JOHN", "", ""), "DOE, JOHN");
        assert_eq!(compose_full_name("DOE", "JOHN", "Q", ""), "DOE, JOHN Q");
        assert_eq!(compose_full_name("DOE", "JOHN", "NONE", ""), "DOE, JOHN");
        assert_eq!(
            compose_full_name("DOE", "JOHN", "Q", "III"),
            "DOE, JOHN Q III"
        );
        assert_eq!(compose_full_name("DOE", "JOHN", "NONE", "JR"), "DOE, JOHN JR");
    }

    #[test]
    fn full_name_trims_when_parts_are_missing() {
        assert_eq!(compose_full_name("", "", "", ""), ",");
        assert_eq!(compose_full_name("DOE", "", "", ""), "DOE,");
        assert_eq!(compose_full_name("", "JANE", "", ""), ", JANE");
    }

    #[test]
    fn maps_every_field_from_sample_payload() {
        let raw = sample_payload();
        let fields = parse(&raw, &TagCatalog::reference());
        let license = map_record(&fields, &raw);

        assert_eq!(license.full_name, "DOE, JOHN QUINCY JR");
        assert_eq!(license.license_number, "D1234567");
        assert_eq!(license.issue_date, "06012020");
        assert_eq!(license.expiration_date, "06012028");
        assert_eq!(license.date_of_birth, "06011990");
        assert_eq!(license.street_line1, "123 MAIN ST");
        assert_eq!(license.street_line2, "");
        assert_eq!(license.city, "AUSTIN");
        assert_eq!(license.state, "TX");
        assert_eq!(license.postal_code, "78701");
        assert_eq!(license.postal_code_ext, "0000");
        assert_eq!(license.country, "USA");
        assert_eq!(license.sex, "1");
        assert_eq!(license.eye_color, "BRO");
        assert_eq!(license.height, "070 IN");
        assert_eq!(license.vehicle_class, "C");
        assert_eq!(license.restrictions, "B");
        assert_eq!(license.endorsements, "M");
        assert_eq!(license.issuer_id, "636015");
        assert_eq!(license.raw_data, raw);
    }

    #[test]
    fn empty_map_gives_empty_record_with_raw_kept() {
        let license = map_record(&FieldMap::new(), "garbage");
        assert_eq!(license.license_number, "");
        assert_eq!(license.postal_code, "");
        assert_eq!(license.raw_data, "garbage");
    }

    #[test]
    fn suffix_and_endorsements_follow_bindings() {
        let mut fields = FieldMap::new();
        fields.insert(Tag::LAST_NAME, "DOE");
        fields.insert(Tag::FIRST_NAME, "JOHN");
        fields.insert(Tag::SUFFIX, "5");

        // Reference-compatible binding: both read the same source tag.
        let shared = TagBindings {
            endorsements: Tag::SUFFIX,
            ..TagBindings::default()
        };
        let license = map_record_with(&fields, "", &shared);
        assert_eq!(license.suffix, "5");
        assert_eq!(license.endorsements, "5");
        assert_eq!(license.full_name, "DOE, JOHN 5");

        // Rebinding the suffix elsewhere keeps the full name clean.
        let rebound = TagBindings {
            suffix: Tag::new("DCU").unwrap(),
            ..shared
        };
        let license = map_record_with(&fields, "", &rebound);
        assert_eq!(license.suffix, "");
        assert_eq!(license.full_name, "DOE, JOHN");
        assert_eq!(license.endorsements, "5");
    }
}
