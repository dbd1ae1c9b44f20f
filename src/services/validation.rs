use std::path::PathBuf;

use tracing::info;

use crate::errors::DdlError;
use crate::oracle::Connector;
use crate::types::{ConnectString, NameSelection, ObjectRequest, ObjectType};
use crate::utils::{ProgressReporter, validate_dir};

/// Raw command line input, object flags in command line order.
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    pub object_flags: Vec<(ObjectType, String)>,
    pub dburl: String,
    pub output_path: String,
}

/// Validated extraction settings, built once per run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub connect_string: ConnectString,
    pub output_dir: PathBuf,
    pub requests: Vec<ObjectRequest>,
}

impl ExtractConfig {
    pub fn schema(&self) -> String {
        self.connect_string.schema()
    }
}

/// Turns the object flags into requests, skipping empty ones.
pub fn object_requests(flags: &[(ObjectType, String)]) -> Result<Vec<ObjectRequest>, DdlError> {
    let requests: Vec<ObjectRequest> = flags
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(object_type, value)| ObjectRequest {
            object_type: *object_type,
            selection: NameSelection::parse(value),
        })
        .filter(|request| request.selection != NameSelection::Names(vec![]))
        .collect();

    if requests.is_empty() {
        return Err(DdlError::NoObjectsSpecified);
    }
    Ok(requests)
}

/// Checks everything that can be checked without a database.
pub fn validate(args: &ExtractArgs, progress: ProgressReporter) -> Result<ExtractConfig, DdlError> {
    let requests = object_requests(&args.object_flags)?;
    let types = requests
        .iter()
        .map(|r| r.object_type.to_colored_string())
        .collect::<Vec<_>>()
        .join(",");
    progress.report(format!("Getting database objects that are {}", types));

    let output_dir = validate_dir(&args.output_path)?;
    progress.report(format!(
        "DDL output destination set to {}",
        output_dir.display()
    ));

    let connect_string: ConnectString = args.dburl.parse()?;
    info!(
        "Validated {} object type(s) for {}",
        requests.len(),
        connect_string
    );

    Ok(ExtractConfig {
        connect_string,
        output_dir,
        requests,
    })
}

/// Validates the arguments and opens the session used for the run.
pub fn validate_and_connect<C: Connector>(
    args: &ExtractArgs,
    connector: &C,
    progress: ProgressReporter,
) -> Result<(ExtractConfig, C::Session), DdlError> {
    let config = validate(args, progress)?;
    let session = connector.connect(&config.connect_string)?;
    progress.success("Database connection set");
    Ok((config, session))
}
