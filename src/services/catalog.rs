use tracing::debug;

use crate::errors::DdlError;
use crate::oracle::CatalogSession;
use crate::types::ObjectType;
use crate::utils::get_query;

/// Object types ddlgen can extract, in the order `--info` lists them.
pub const SUPPORTED_OBJECT_TYPES: [ObjectType; 10] = [
    ObjectType::DbLink,
    ObjectType::Function,
    ObjectType::Index,
    ObjectType::Package,
    ObjectType::Procedure,
    ObjectType::Sequence,
    ObjectType::Synonym,
    ObjectType::Table,
    ObjectType::Trigger,
    ObjectType::View,
];

pub const DDL_FUNCTION: &str = "dbms_metadata.get_ddl";

const OBJECT_NAMES_QUERY: &str = "object_names.sql";

/// Names of all objects of `object_type` owned by `schema`, ascending.
pub fn list_object_names<S: CatalogSession + ?Sized>(
    session: &S,
    schema: &str,
    object_type: ObjectType,
) -> Result<Vec<String>, DdlError> {
    let query = get_query(OBJECT_NAMES_QUERY)?;
    let names = session.query_strings(&query, &[schema, object_type.catalog_label()])?;
    debug!(
        "Found {} {} objects in {}",
        names.len(),
        object_type.catalog_label(),
        schema
    );
    Ok(names)
}

/// DDL text generated by the database for one object, returned verbatim.
pub fn fetch_ddl<S: CatalogSession + ?Sized>(
    session: &S,
    object_type: ObjectType,
    object_name: &str,
    schema: &str,
) -> Result<String, DdlError> {
    session.call_function(
        DDL_FUNCTION,
        &[object_type.ddl_label(), object_name, schema],
    )
}
