//! AAMVA element tags, the ordered catalog the parser recognizes, and the
//! field-to-tag bindings the record mapper reads through.

use std::str::FromStr;

use regex::Regex;

use crate::error::CatalogError;

/// Every element identifier is exactly this many bytes.
pub const TAG_LEN: usize = 3;

// ==============================================================================
// Tag
// ==============================================================================

/// A three-character AAMVA data element identifier such as `DAQ`.
///
/// Only uppercase ASCII letters and digits are accepted, so a tag is always
/// valid UTF-8 and always sits on character boundaries inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag([u8; TAG_LEN]);

impl Tag {
    pub const FIRST_NAME: Tag = Tag(*b"DAC");
    pub const MIDDLE_NAME: Tag = Tag(*b"DAD");
    pub const LAST_NAME: Tag = Tag(*b"DCS");
    pub const SUFFIX: Tag = Tag(*b"DCE");
    /// Recognized only so it ends the preceding value; no field reads it.
    pub const UNMAPPED_DDF: Tag = Tag(*b"DDF");
    /// Recognized only so it ends the preceding value; no field reads it.
    pub const UNMAPPED_DDG: Tag = Tag(*b"DDG");

    pub const LICENSE_NUMBER: Tag = Tag(*b"DAQ");
    pub const ISSUE_DATE: Tag = Tag(*b"DBD");
    pub const EXPIRATION_DATE: Tag = Tag(*b"DBA");
    pub const DATE_OF_BIRTH: Tag = Tag(*b"DBB");

    pub const STREET_LINE1: Tag = Tag(*b"DAG");
    pub const STREET_LINE2: Tag = Tag(*b"DAH");
    pub const CITY: Tag = Tag(*b"DAI");
    pub const STATE: Tag = Tag(*b"DAJ");
    pub const POSTAL_CODE: Tag = Tag(*b"DAK");
    pub const COUNTRY: Tag = Tag(*b"DCF");

    pub const SEX: Tag = Tag(*b"DBC");
    pub const EYE_COLOR: Tag = Tag(*b"DAY");
    pub const HEIGHT: Tag = Tag(*b"DAU");
    pub const WEIGHT: Tag = Tag(*b"DAW");
    pub const VEHICLE_CLASS: Tag = Tag(*b"DCB");
    pub const RESTRICTIONS: Tag = Tag(*b"DCR");
    pub const ENDORSEMENTS: Tag = Tag(*b"DDE");
    pub const ISSUER_ID: Tag = Tag(*b"DDI");

    pub fn new(code: &str) -> Result<Self, CatalogError> {
        let bytes = code.as_bytes();
        let valid = bytes.len() == TAG_LEN
            && bytes
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid {
            return Err(CatalogError::InvalidTag(code.to_string()));
        }
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(bytes);
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Tag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// Tag Catalog
// ==============================================================================

/// The ordered, immutable set of tags the parser may extract.
///
/// The tags are compiled into one alternation so a payload is searched for
/// all of them in a single pass.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    ordered: Vec<Tag>,
    /// `None` only for an empty catalog.
    matcher: Option<Regex>,
}

impl TagCatalog {
    /// Build a catalog from `tags`. Repeats keep their first position.
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        let mut ordered: Vec<Tag> = Vec::new();
        for tag in tags {
            if !ordered.contains(&tag) {
                ordered.push(tag);
            }
        }
        let matcher = build_matcher(&ordered);
        Self { ordered, matcher }
    }

    /// The element set of the reference reader.
    pub fn reference() -> Self {
        Self::new([
            Tag::FIRST_NAME,
            Tag::MIDDLE_NAME,
            Tag::LAST_NAME,
            Tag::SUFFIX,
            Tag::UNMAPPED_DDF,
            Tag::UNMAPPED_DDG,
            Tag::LICENSE_NUMBER,
            Tag::ISSUE_DATE,
            Tag::EXPIRATION_DATE,
            Tag::DATE_OF_BIRTH,
            Tag::STREET_LINE1,
            Tag::STREET_LINE2,
            Tag::CITY,
            Tag::STATE,
            Tag::POSTAL_CODE,
            Tag::COUNTRY,
            Tag::SEX,
            Tag::EYE_COLOR,
            Tag::HEIGHT,
            Tag::WEIGHT,
            Tag::VEHICLE_CLASS,
            Tag::RESTRICTIONS,
            Tag::ENDORSEMENTS,
            Tag::ISSUER_ID,
        ])
    }

    pub fn with_tag(self, tag: Tag) -> Self {
        if self.contains(&tag) {
            return self;
        }
        Self::new(self.ordered.into_iter().chain(std::iter::once(tag)))
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.ordered.contains(tag)
    }

    /// Byte offsets of every non-overlapping catalog tag in `text`, left to
    /// right. Tags are ASCII, so both ends of a match are char boundaries.
    pub(crate) fn find_tags<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, Tag)> + 'a {
        self.matcher
            .iter()
            .flat_map(move |matcher| matcher.find_iter(text))
            .filter_map(|found| Tag::new(found.as_str()).ok().map(|tag| (found.start(), tag)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Compile `tags` into a `DAC|DAD|...` alternation.
fn build_matcher(tags: &[Tag]) -> Option<Regex> {
    if tags.is_empty() {
        return None;
    }
    let pattern = tags
        .iter()
        .map(|tag| regex::escape(tag.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&pattern) {
        Ok(matcher) => Some(matcher),
        Err(err) => {
            tracing::error!(%pattern, error = %err, "could not compile tag matcher");
            None
        }
    }
}

// ==============================================================================
// Field Bindings
// ==============================================================================

/// Which tag feeds each field of a `DriverLicense`.
///
/// Jurisdictions disagree on where the name suffix and the endorsement codes
/// live, so both are plain fields here rather than fixed in the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBindings {
    pub first_name: Tag,
    pub middle_name: Tag,
    pub last_name: Tag,
    pub suffix: Tag,
    pub license_number: Tag,
    pub issue_date: Tag,
    pub expiration_date: Tag,
    pub date_of_birth: Tag,
    pub street_line1: Tag,
    pub street_line2: Tag,
    pub city: Tag,
    pub state: Tag,
    pub postal_code: Tag,
    pub country: Tag,
    pub sex: Tag,
    pub eye_color: Tag,
    pub height: Tag,
    pub weight: Tag,
    pub vehicle_class: Tag,
    pub restrictions: Tag,
    pub endorsements: Tag,
    pub issuer_id: Tag,
}

impl TagBindings {
    /// Every tag some field reads from, in field order.
    pub fn catalog_tags(&self) -> Vec<Tag> {
        vec![
            self.first_name,
            self.middle_name,
            self.last_name,
            self.suffix,
            self.license_number,
            self.issue_date,
            self.expiration_date,
            self.date_of_birth,
            self.street_line1,
            self.street_line2,
            self.city,
            self.state,
            self.postal_code,
            self.country,
            self.sex,
            self.eye_color,
            self.height,
            self.weight,
            self.vehicle_class,
            self.restrictions,
            self.endorsements,
            self.issuer_id,
        ]
    }

    /// Extend `catalog` so every bound tag is recognized by the parser.
    pub fn extend_catalog(&self, catalog: TagCatalog) -> TagCatalog {
        self.catalog_tags()
            .into_iter()
            .fold(catalog, TagCatalog::with_tag)
    }
}

impl Default for TagBindings {
    fn default() -> Self {
        Self {
            first_name: Tag::FIRST_NAME,
            middle_name: Tag::MIDDLE_NAME,
            last_name: Tag::LAST_NAME,
            suffix: Tag::SUFFIX,
            license_number: Tag::LICENSE_NUMBER,
            issue_date: Tag::ISSUE_DATE,
            expiration_date: Tag::EXPIRATION_DATE,
            date_of_birth: Tag::DATE_OF_BIRTH,
            street_line1: Tag::STREET_LINE1,
            street_line2: Tag::STREET_LINE2,
            city: Tag::CITY,
            state: Tag::STATE,
            postal_code: Tag::POSTAL_CODE,
            country: Tag::COUNTRY,
            sex: Tag::SEX,
            eye_color: Tag::EYE_COLOR,
            height: Tag::HEIGHT,
            weight: Tag::WEIGHT,
            vehicle_class: Tag::VEHICLE_CLASS,
            restrictions: Tag::RESTRICTIONS,
            endorsements: Tag::ENDORSEMENTS,
            issuer_id: Tag::ISSUER_ID,
        }
    }
}
