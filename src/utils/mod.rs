pub mod ddl_writer;
pub mod fs;
pub mod logger;
pub mod progress;
pub mod queries;

pub use ddl_writer::DdlWriter;
pub use fs::validate_dir;
pub use progress::ProgressReporter;
pub use queries::get_query;
