//! Loading a lesson plan from a directory tree.
//!
//! ```text
//! <root>/
//!   index.json            { "title": ..., "contents": [dir, ...] }
//!   <dir>/
//!     index.json          { "title": ... }
//!     explanation.md      (optional)
//!     model.mo            (optional)
//!     report.md           (optional)
//!     preamble.md         (optional)
//! ```
//!
//! Only a missing or unreadable root descriptor is fatal. Problems with
//! individual lessons or assets are logged and skipped.

mod file;
mod index;
mod lesson;
mod plan;

pub use file::read_optional;
pub use index::{load_index, INDEX_FILE};
pub use lesson::load_lesson;
pub use plan::load_plan;
