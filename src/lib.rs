//! Build Modelica Playground lesson plans.
//!
//! A lesson plan is a directory with an `index.json` naming lesson
//! subdirectories. [`loader::load_plan`] gathers it into a [`models::Plan`],
//! [`siren::build_document`] maps that onto a Siren document, and
//! [`output::write_document`] writes it out.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod output;
pub mod siren;

pub use error::{LessonPlanError, Result};

use config::RunConfig;

/// Load the plan under `config.root` and write its document to `config.output`.
pub fn run(config: &RunConfig) -> Result<()> {
    let plan = loader::load_plan(&config.root)?;
    let document = siren::build_document(&plan);
    output::write_document(&document, &config.output)
}
