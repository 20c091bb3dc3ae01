use std::path::Path;

use crate::error::Result;
use crate::models::{Asset, Lesson};

use super::{load_index, read_optional};

/// Load the lesson in `dir`.
///
/// Returns `Ok(None)` when the directory has no `index.json`. Assets that
/// cannot be read are logged and left out; they never fail the lesson.
pub fn load_lesson(dir: &Path) -> Result<Option<Lesson>> {
    let Some(index) = load_index(dir)? else {
        return Ok(None);
    };

    let mut lesson = Lesson::new(index.title);
    for asset in Asset::ALL {
        let path = dir.join(asset.file_name());
        match read_optional(&path) {
            Ok(content) => lesson.set_asset(asset, content),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "error reading lesson asset, leaving it out"
                );
            }
        }
    }

    Ok(Some(lesson))
}
