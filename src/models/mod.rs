//! Domain models for lesson plans.
//!
//! # Core Concepts
//!
//! - [`PlanDescriptor`]: The `index.json` found in every plan and lesson directory.
//! - [`Lesson`]: One lesson directory: a title plus up to four optional text assets.
//! - [`Asset`]: The fixed set of asset files a lesson may carry.
//! - [`Plan`]: The root title and every lesson that loaded, in declared order.

mod descriptor;
mod lesson;
mod plan;

pub use descriptor::*;
pub use lesson::*;
pub use plan::*;
