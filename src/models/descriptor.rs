use serde::Deserialize;

/// The contents of an `index.json` descriptor.
///
/// The root descriptor names the lesson directories in `contents`. Lesson
/// descriptors usually only carry a `title`; their `contents` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlanDescriptor {
    #[serde(default)]
    pub title: String,
    /// Lesson directory names, relative to the directory holding this descriptor.
    #[serde(default)]
    pub contents: Vec<String>,
}
