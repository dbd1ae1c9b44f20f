use std::path::PathBuf;

use tracing::{info, info_span};

use crate::errors::DdlError;
use crate::oracle::{CatalogSession, Connector};
use crate::services::catalog::{fetch_ddl, list_object_names};
use crate::services::validation::{ExtractArgs, validate_and_connect};
use crate::types::{DdlObject, NameSelection, ObjectRequest};
use crate::utils::{DdlWriter, ProgressReporter};

/// Files written by a run, in write order. Rewritten duplicates appear once per write.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub written: Vec<PathBuf>,
}

/// Fetches DDL for the requested objects and writes one file per object.
pub struct ExtractService<'a, S: CatalogSession + ?Sized> {
    session: &'a S,
    schema: String,
    writer: DdlWriter,
    progress: ProgressReporter,
}

impl<'a, S: CatalogSession + ?Sized> ExtractService<'a, S> {
    pub fn new(session: &'a S, schema: &str, writer: DdlWriter, progress: ProgressReporter) -> Self {
        Self {
            session,
            schema: schema.to_string(),
            writer,
            progress,
        }
    }

    /// Object names for one request. `All` asks the catalog; explicit names
    /// are used as given.
    pub fn resolve_names(&self, request: &ObjectRequest) -> Result<Vec<String>, DdlError> {
        match &request.selection {
            NameSelection::All => list_object_names(self.session, &self.schema, request.object_type),
            NameSelection::Names(names) => Ok(names.clone()),
        }
    }

    /// Processes the requests in order. The first error aborts the run;
    /// files already written stay on disk.
    pub fn run(&self, requests: &[ObjectRequest]) -> Result<ExtractSummary, DdlError> {
        let mut summary = ExtractSummary::default();

        for request in requests {
            let _span = info_span!("extract", object_type = %request.object_type).entered();

            for name in self.resolve_names(request)? {
                let object = DdlObject::new(&self.schema, request.object_type, &name);
                let path = self.extract_one(&object)?;
                summary.written.push(path);
            }
        }

        info!(
            "Wrote {} DDL file(s) to {}",
            summary.written.len(),
            self.writer.dir().display()
        );
        Ok(summary)
    }

    fn extract_one(&self, object: &DdlObject) -> Result<PathBuf, DdlError> {
        self.progress.report(format!(
            "Processing {} {}",
            object.object_type.ddl_label().to_lowercase(),
            object.qualified_name()
        ));

        let ddl = fetch_ddl(
            self.session,
            object.object_type,
            &object.object_name,
            &object.owner,
        )?;

        self.progress
            .report(format!("Writing file {}", object.file_name()));
        self.writer.write(object, &ddl)
    }
}

/// Validates, connects and extracts in one go.
pub fn extract_all<C: Connector>(
    args: &ExtractArgs,
    connector: &C,
    progress: ProgressReporter,
) -> Result<ExtractSummary, DdlError> {
    let (config, session) = validate_and_connect(args, connector, progress)?;
    let service = ExtractService::new(
        &session,
        &config.schema(),
        DdlWriter::new(&config.output_dir),
        progress,
    );
    service.run(&config.requests)
}
