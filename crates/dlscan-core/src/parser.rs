//! Order-agnostic parser for AAMVA tagged-field payloads.
//!
//! A payload is a run of `TAG+VALUE` segments with no separator between a
//! value and the next tag. Values are recovered by locating every catalog
//! tag in a single left-to-right pass; each value runs from the end of its
//! tag to the start of the next located tag, or to the end of the payload.

use std::collections::HashMap;

use crate::catalog::{Tag, TagCatalog, TAG_LEN};

/// Leading start marker some scanners emit before the header.
const START_MARKER: char = '@';

/// Length of the format header that follows the start marker.
const HEADER_LEN: usize = 5;

/// Control characters scanners append to element values.
const TRAILING_CONTROL: [char; 3] = ['\r', '\n', '\0'];

// ==============================================================================
// Field Map
// ==============================================================================

/// Tag-to-value mapping produced by [`parse`].
///
/// Absent tags read as the empty string; an empty value that was present in
/// the payload is still reported by [`FieldMap::contains`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: HashMap<Tag, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: Tag) -> &str {
        self.values.get(&tag).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.values.contains_key(&tag)
    }

    pub fn insert(&mut self, tag: Tag, value: impl Into<String>) -> Option<String> {
        self.values.insert(tag, value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &str)> {
        self.values.iter().map(|(tag, value)| (tag, value.as_str()))
    }
}

impl FromIterator<(Tag, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (Tag, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// ==============================================================================
// Parsing
// ==============================================================================

/// Parse `raw` into a [`FieldMap`] using the tags in `catalog`.
///
/// Never fails: text without recognized tags yields an empty map.
pub fn parse(raw: &str, catalog: &TagCatalog) -> FieldMap {
    let body = strip_header(raw);
    let hits = locate_tags(body, catalog);

    let mut fields = FieldMap::new();
    for (idx, &(start, tag)) in hits.iter().enumerate() {
        let value_start = start + TAG_LEN;
        let value_end = hits.get(idx + 1).map_or(body.len(), |&(next, _)| next);
        let value = body[value_start..value_end].trim_end_matches(TRAILING_CONTROL);

        if let Some(previous) = fields.insert(tag, value) {
            tracing::debug!(
                tag = %tag,
                previous = %previous,
                "repeated tag overwrites previous value"
            );
        }
    }
    fields
}

/// Drop the optional start marker and the fixed-length format header.
fn strip_header(raw: &str) -> &str {
    let body = raw.strip_prefix(START_MARKER).unwrap_or(raw);
    if body.len() <= HEADER_LEN {
        return body;
    }
    body.get(HEADER_LEN..).unwrap_or(body)
}

/// Byte offsets of every non-overlapping catalog tag, in payload order.
fn locate_tags(body: &str, catalog: &TagCatalog) -> Vec<(usize, Tag)> {
    catalog.find_tags(body).collect()
}
