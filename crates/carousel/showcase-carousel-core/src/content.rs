//! Content records shown on the carousel cards.
//!
//! The controller treats records as opaque payload; they are only carried
//! through to the surface via [`crate::Slide`].

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// One project card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Opaque image reference resolved by the surface (URL, asset key, ...).
    #[serde(rename = "imageRef", alias = "image_ref", alias = "image")]
    pub image_ref: String,
    /// Technology badges, in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    pub link: String,
}

/// Non-empty, ordered list of records. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContentRecord>", into = "Vec<ContentRecord>")]
pub struct ContentSet {
    records: Vec<ContentRecord>,
}

#[allow(clippy::len_without_is_empty)]
impl ContentSet {
    pub fn new(records: Vec<ContentRecord>) -> Result<Self, CarouselError> {
        if records.is_empty() {
            return Err(CarouselError::EmptyContentSet);
        }
        Ok(Self { records })
    }

    /// Number of real slides (N). Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ContentRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> &ContentRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &ContentRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }
}

impl TryFrom<Vec<ContentRecord>> for ContentSet {
    type Error = CarouselError;

    fn try_from(records: Vec<ContentRecord>) -> Result<Self, Self::Error> {
        ContentSet::new(records)
    }
}

impl From<ContentSet> for Vec<ContentRecord> {
    fn from(set: ContentSet) -> Self {
        set.records
    }
}

/// Accepted JSON shapes: a bare array of records or `{ "projects": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    List(Vec<ContentRecord>),
    Wrapped { projects: Vec<ContentRecord> },
}

/// Parse content JSON into a validated [`ContentSet`].
pub fn parse_content_json(s: &str) -> Result<ContentSet, CarouselError> {
    let raw: RawContent =
        serde_json::from_str(s).map_err(|e| CarouselError::ContentParse(e.to_string()))?;
    let records = match raw {
        RawContent::List(records) => records,
        RawContent::Wrapped { projects } => projects,
    };
    ContentSet::new(records)
}
