mod connect_string;
mod object_type;
mod oracle;
mod selection;

pub use connect_string::ConnectString;
pub use object_type::ObjectType;
pub use oracle::DdlObject;
pub use selection::{ALL_OBJECTS, NameSelection, ObjectRequest};
