mod client;
mod connector;
mod session;

pub use client::OracleClient;
pub use connector::{
    ALIAS_RESOLUTION_ERROR, AUTHENTICATION_ERROR, Connector, OracleConnector, map_connect_error,
};
pub use session::CatalogSession;
