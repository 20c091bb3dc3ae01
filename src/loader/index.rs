use std::path::Path;

use crate::error::{LessonPlanError, Result};
use crate::models::PlanDescriptor;

use super::read_optional;

/// File name of the descriptor in every plan and lesson directory.
pub const INDEX_FILE: &str = "index.json";

/// Load `<dir>/index.json`, returning `None` if the file does not exist.
pub fn load_index(dir: &Path) -> Result<Option<PlanDescriptor>> {
    let path = dir.join(INDEX_FILE);
    let Some(content) = read_optional(&path)? else {
        return Ok(None);
    };

    let descriptor = serde_json::from_str(&content)
        .map_err(|source| LessonPlanError::Decode { path, source })?;
    Ok(Some(descriptor))
}
