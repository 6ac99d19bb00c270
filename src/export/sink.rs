//! Destinations for a finished [`CsvExport`].

use super::CsvExport;
use crate::error::ExportError;
use std::path::{Component, Path, PathBuf};

/// The "download" seam: hands a finished export to whatever stores it.
pub trait FileSink {
    fn save(&mut self, export: &CsvExport) -> Result<(), ExportError>;
}

/// Writes exports as files inside a directory, named by
/// [`CsvExport::filename`]. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `export` will be written.
    ///
    /// The file name must be one normal path component, so an export can
    /// never land outside [`dir`](Self::dir).
    pub fn path_for(&self, export: &CsvExport) -> Result<PathBuf, ExportError> {
        let name = Path::new(&export.filename);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dir.join(name)),
            _ => Err(ExportError::InvalidFileName(export.filename.clone())),
        }
    }
}

impl FileSink for DirectorySink {
    fn save(&mut self, export: &CsvExport) -> Result<(), ExportError> {
        let path = self.path_for(export)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, export.contents.as_bytes())?;
        tracing::info!(path = %path.display(), bytes = export.contents.len(), "Saved CSV export");
        Ok(())
    }
}
