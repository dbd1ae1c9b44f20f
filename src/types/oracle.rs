use crate::types::ObjectType;

/// A schema object whose DDL is fetched, identified by owner, type and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlObject {
    pub owner: String,
    pub object_type: ObjectType,
    pub object_name: String,
}

impl DdlObject {
    pub fn new(owner: &str, object_type: ObjectType, object_name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            object_type,
            object_name: object_name.to_string(),
        }
    }

    /// `<OWNER>_<TYPE>_<NAME>.sql`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.sql",
            self.owner,
            self.object_type.ddl_label(),
            self.object_name
        )
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner, self.object_name)
    }
}
