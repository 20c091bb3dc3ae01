use serde_json::Value;

use crate::models::{Lesson, Plan};

use super::{Properties, SirenEmbed, SirenEntity, CLASS_LESSON, REL_ITEM};

/// Build the Siren document for `plan`.
///
/// Each lesson becomes one `item` embed of class `lesson`, in plan order.
/// Only assets that were found appear in its properties.
pub fn build_document(plan: &Plan) -> SirenEntity {
    let mut document = SirenEntity::new(plan.title.clone());
    for lesson in &plan.lessons {
        document.add_embed(&[REL_ITEM], lesson_embed(lesson));
    }
    document
}

fn lesson_embed(lesson: &Lesson) -> SirenEmbed {
    let properties: Properties = lesson
        .present_assets()
        .map(|(asset, content)| {
            (
                asset.as_str().to_string(),
                Value::String(content.to_string()),
            )
        })
        .collect();

    SirenEmbed {
        rel: Vec::new(),
        class: vec![CLASS_LESSON.to_string()],
        title: lesson.title.clone(),
        properties,
    }
}
