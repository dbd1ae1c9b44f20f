use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::DdlError;
use crate::types::DdlObject;

/// Writes one `.sql` file per object into a fixed directory.
#[derive(Debug, Clone)]
pub struct DdlWriter {
    dir: PathBuf,
}

impl DdlWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `ddl` as the whole content of the object's file, replacing any
    /// previous file of the same name. Returns the written path.
    pub fn write(&self, object: &DdlObject, ddl: &str) -> Result<PathBuf, DdlError> {
        let path = self.dir.join(object.file_name());
        debug!("Writing {} bytes to {}", ddl.len(), path.display());

        fs::write(&path, ddl).map_err(|source| DdlError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
