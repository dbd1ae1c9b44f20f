use std::path::PathBuf;

use crate::errors::DdlError;

/// Resolves the output directory, which must already exist.
pub fn validate_dir(path: &str) -> Result<PathBuf, DdlError> {
    let pb = PathBuf::from(path);
    if !path.is_empty() && pb.is_dir() {
        Ok(pb)
    } else {
        Err(DdlError::OutputDirNotFound {
            path: path.to_string(),
        })
    }
}
