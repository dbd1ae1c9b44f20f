use colored::*;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Database object kinds ddlgen knows how to extract.
///
/// The string form is the label `dbms_metadata.get_ddl` expects. The catalog
/// views store database links under a different label, see
/// [`ObjectType::catalog_label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    Table,
    DbLink,
    Package,
    Procedure,
    Function,
    Sequence,
    Trigger,
    View,
    Synonym,
    Index,
}

impl ObjectType {
    /// Label used by `all_objects.object_type`.
    pub fn catalog_label(&self) -> &'static str {
        match self {
            ObjectType::DbLink => "DATABASE LINK",
            other => other.ddl_label(),
        }
    }

    /// Label passed to `dbms_metadata.get_ddl`.
    pub fn ddl_label(&self) -> &'static str {
        match self {
            ObjectType::Table => "TABLE",
            ObjectType::DbLink => "DB_LINK",
            ObjectType::Package => "PACKAGE",
            ObjectType::Procedure => "PROCEDURE",
            ObjectType::Function => "FUNCTION",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Trigger => "TRIGGER",
            ObjectType::View => "VIEW",
            ObjectType::Synonym => "SYNONYM",
            ObjectType::Index => "INDEX",
        }
    }

    /// Name of the command line flag selecting this type.
    pub fn cli_flag(&self) -> &'static str {
        match self {
            ObjectType::Table => "tables",
            ObjectType::DbLink => "dblinks",
            ObjectType::Package => "pkgs",
            ObjectType::Procedure => "procs",
            ObjectType::Function => "funcs",
            ObjectType::Sequence => "seqs",
            ObjectType::Trigger => "trigs",
            ObjectType::View => "views",
            ObjectType::Synonym => "syns",
            ObjectType::Index => "idxs",
        }
    }

    pub fn to_colored_string(&self) -> String {
        self.ddl_label().cyan().bold().to_string()
    }
}
