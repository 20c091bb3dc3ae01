//! Serializing and writing the generated document.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::OutputTarget;
use crate::error::{LessonPlanError, Result};
use crate::siren::SirenEntity;

/// Mode given to a newly created output file on Unix.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o777;

/// Path reported in write errors for standard output.
const STDOUT_PATH: &str = "<stdout>";

/// Render `document` as pretty-printed JSON.
pub fn render_document(document: &SirenEntity) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Render `document` and send it to `target`.
///
/// Rendering finishes before the target is opened, so a failed render
/// never leaves a truncated file behind.
pub fn write_document(document: &SirenEntity, target: &OutputTarget) -> Result<()> {
    let rendered = render_document(document)?;
    match target {
        OutputTarget::File(path) => {
            write_file(path, rendered.as_bytes()).map_err(|source| LessonPlanError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote lesson plan");
        }
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{}", rendered)
                .and_then(|_| lock.flush())
                .map_err(|source| LessonPlanError::Write {
                    path: STDOUT_PATH.into(),
                    source,
                })?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)
}
