//! Rendering and persisting results.
//!
//! # Responsibilities
//! - Serialize the result table as quoted, comma-delimited text
//! - Render the human-readable summary table
//! - Overwrite the output file

pub mod csv;
pub mod summary;

use std::path::Path;

use crate::error::OutputWriteError;

pub use self::csv::to_delimited_text;
pub use summary::render_summary;

/// Write `text` to `path`, replacing any previous content.
pub async fn write_output(path: &Path, text: &str) -> Result<(), OutputWriteError> {
    tokio::fs::write(path, text)
        .await
        .map_err(|source| OutputWriteError {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), bytes = text.len(), "File written successfully");
    Ok(())
}
