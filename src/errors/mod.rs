use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DdlError {
    #[error("No database object types specified")]
    NoObjectsSpecified,

    #[error("Invalid path: {path}")]
    OutputDirNotFound { path: String },

    #[error("DB URL is not in proper format. Should be: 'username/password@alias'")]
    BadConnectionStringFormat,

    #[error("Invalid database alias, check your alias configuration (tnsnames.ora)")]
    BadAlias,

    #[error("Invalid username or password")]
    BadCredentials,

    #[error("{message}")]
    Connection { message: String },

    #[error(transparent)]
    Database(#[from] oracle::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to find query template '{name}'")]
    QueryTemplate { name: String },
}
