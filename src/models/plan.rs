use super::Lesson;

/// Every lesson that loaded from a root directory.
///
/// `lessons` follows the order of the root descriptor's `contents`, with
/// skipped entries left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub title: String,
    pub lessons: Vec<Lesson>,
}
