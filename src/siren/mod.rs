//! Siren hypermedia documents.
//!
//! Only the parts of Siren the lesson plan needs are modelled: a root
//! entity with a title and embedded sub-entities carrying a relation,
//! classes, a title and properties.

mod build;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub use build::build_document;

/// Relation of every embedded lesson.
pub const REL_ITEM: &str = "item";

/// Class of every embedded lesson.
pub const CLASS_LESSON: &str = "lesson";

/// Entity properties. Ordered so documents serialize identically across runs.
pub type Properties = BTreeMap<String, Value>;

/// A top-level Siren entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SirenEntity {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    pub title: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
    pub entities: Vec<SirenEmbed>,
}

impl SirenEntity {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append `embed` as a sub-entity related to this one by `rel`.
    pub fn add_embed(&mut self, rel: &[&str], mut embed: SirenEmbed) {
        embed.rel = rel.iter().map(|r| r.to_string()).collect();
        self.entities.push(embed);
    }
}

/// An embedded (sub-)entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SirenEmbed {
    pub rel: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    pub title: String,
    pub properties: Properties,
}
