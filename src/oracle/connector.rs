use tracing::{debug, warn};

use crate::errors::DdlError;
use crate::oracle::{CatalogSession, OracleClient};
use crate::types::ConnectString;

/// ORA-12154: TNS could not resolve the connect identifier.
pub const ALIAS_RESOLUTION_ERROR: i32 = 12154;
/// ORA-01017: invalid username/password.
pub const AUTHENTICATION_ERROR: i32 = 1017;

/// Opens the single session used for a whole extraction run.
pub trait Connector {
    type Session: CatalogSession;

    fn connect(&self, connect_string: &ConnectString) -> Result<Self::Session, DdlError>;
}

/// Maps a driver error code to the error kinds callers can act on.
pub fn map_connect_error(code: Option<i32>, message: String) -> DdlError {
    match code {
        Some(ALIAS_RESOLUTION_ERROR) => DdlError::BadAlias,
        Some(AUTHENTICATION_ERROR) => DdlError::BadCredentials,
        _ => DdlError::Connection { message },
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OracleConnector;

impl Connector for OracleConnector {
    type Session = OracleClient;

    fn connect(&self, connect_string: &ConnectString) -> Result<OracleClient, DdlError> {
        debug!("Connecting to {}", connect_string);

        OracleClient::connect(
            &connect_string.username,
            &connect_string.password,
            &connect_string.alias,
        )
        .map_err(|e| {
            let code = e.db_error().map(|db| db.code());
            warn!("Connection to {} failed: {}", connect_string, e);
            map_connect_error(code, e.to_string())
        })
    }
}
