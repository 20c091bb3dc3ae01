use std::path::Path;

use crate::error::{LessonPlanError, Result};
use crate::models::Plan;

use super::{load_index, load_lesson};

/// Load the plan rooted at `root`.
///
/// The root `index.json` must exist and decode. Each entry of its
/// `contents` is loaded as a lesson; entries with no descriptor or with
/// a broken one are skipped with a warning, so the plan may be empty.
pub fn load_plan(root: &Path) -> Result<Plan> {
    let index = load_index(root)?.ok_or_else(|| LessonPlanError::MissingRootIndex {
        dir: root.to_path_buf(),
    })?;

    let mut plan = Plan {
        title: index.title,
        lessons: Vec::with_capacity(index.contents.len()),
    };

    for name in &index.contents {
        match load_lesson(&root.join(name)) {
            Ok(Some(lesson)) => {
                tracing::debug!(lesson = %name, title = %lesson.title, "loaded lesson");
                plan.lessons.push(lesson);
            }
            Ok(None) => {
                tracing::warn!(lesson = %name, "no lesson found (missing index.json?), skipping");
            }
            Err(e) => {
                tracing::warn!(lesson = %name, error = %e, "error searching for lesson, skipping");
            }
        }
    }

    tracing::info!(
        title = %plan.title,
        lessons = plan.lessons.len(),
        declared = index.contents.len(),
        "loaded lesson plan"
    );
    Ok(plan)
}
