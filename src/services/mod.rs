pub mod catalog;
pub mod extract;
pub mod validation;

pub use catalog::{DDL_FUNCTION, SUPPORTED_OBJECT_TYPES, fetch_ddl, list_object_names};
pub use extract::{ExtractService, ExtractSummary, extract_all};
pub use validation::{ExtractArgs, ExtractConfig, object_requests, validate, validate_and_connect};
