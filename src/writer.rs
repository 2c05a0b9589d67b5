use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{LinksError, Result};

/// Writes the page as UTF-8, replacing any existing file.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| LinksError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "Wrote page");
    Ok(())
}
