use crate::types::ObjectType;

/// Sentinel requesting every object of a type.
pub const ALL_OBJECTS: &str = "ALL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameSelection {
    /// Every object of the type owned by the schema.
    All,
    /// Exactly these names, in the order given. Duplicates are kept.
    Names(Vec<String>),
}

impl NameSelection {
    /// Parses a comma separated flag value. Names are uppercased; empty
    /// segments are dropped. Any `ALL` entry wins over the other names.
    pub fn parse(value: &str) -> Self {
        let names: Vec<String> = value
            .split(',')
            .map(|name| name.trim().to_uppercase())
            .filter(|name| !name.is_empty())
            .collect();

        if names.iter().any(|name| name == ALL_OBJECTS) {
            NameSelection::All
        } else {
            NameSelection::Names(names)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRequest {
    pub object_type: ObjectType,
    pub selection: NameSelection,
}
