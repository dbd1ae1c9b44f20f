use std::cell::{Cell, RefCell};

use ddlgen::errors::DdlError;
use ddlgen::oracle::{CatalogSession, Connector};
use ddlgen::types::{ConnectString, ObjectType};

/// In-memory catalog standing in for an Oracle session.
#[derive(Default, Clone)]
pub struct FakeCatalog {
    objects: Vec<(String, ObjectType, String, String)>,
    pub ddl_calls: RefCell<Vec<Vec<String>>>,
    pub name_queries: RefCell<Vec<Vec<String>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, owner: &str, object_type: ObjectType, name: &str, ddl: &str) -> Self {
        self.objects.push((
            owner.to_string(),
            object_type,
            name.to_string(),
            ddl.to_string(),
        ));
        self
    }

    /// Names passed to the DDL function, in call order.
    pub fn fetched_names(&self) -> Vec<String> {
        self.ddl_calls
            .borrow()
            .iter()
            .map(|args| args[1].clone())
            .collect()
    }
}

impl CatalogSession for FakeCatalog {
    fn query_strings(&self, _sql: &str, params: &[&str]) -> Result<Vec<String>, DdlError> {
        self.name_queries
            .borrow_mut()
            .push(params.iter().map(|p| p.to_string()).collect());

        let (owner, label) = (params[0], params[1]);
        let mut names: Vec<String> = self
            .objects
            .iter()
            .filter(|(o, t, _, _)| o == owner && t.catalog_label() == label)
            .map(|(_, _, n, _)| n.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    fn call_function(&self, _function: &str, args: &[&str]) -> Result<String, DdlError> {
        self.ddl_calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        let (label, name, owner) = (args[0], args[1], args[2]);
        self.objects
            .iter()
            .find(|(o, t, n, _)| o == owner && n == name && t.ddl_label() == label)
            .map(|(_, _, _, ddl)| ddl.clone())
            .ok_or_else(|| {
                DdlError::Database(oracle::Error::new(
                    oracle::ErrorKind::NoDataFound,
                    format!(
                        "ORA-31603: object \"{}\" of type {} not found in schema \"{}\"",
                        name, label, owner
                    ),
                ))
            })
    }
}

/// Hands out clones of a fake catalog and counts connection attempts.
pub struct FakeConnector {
    pub catalog: FakeCatalog,
    pub attempts: Cell<usize>,
    pub fail_with_code: Option<i32>,
}

impl FakeConnector {
    pub fn new(catalog: FakeCatalog) -> Self {
        Self {
            catalog,
            attempts: Cell::new(0),
            fail_with_code: None,
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            fail_with_code: Some(code),
            ..Self::new(FakeCatalog::new())
        }
    }
}

impl Connector for FakeConnector {
    type Session = FakeCatalog;

    fn connect(&self, _connect_string: &ConnectString) -> Result<FakeCatalog, DdlError> {
        self.attempts.set(self.attempts.get() + 1);
        match self.fail_with_code {
            Some(code) => Err(ddlgen::oracle::map_connect_error(
                Some(code),
                format!("ORA-{:05}: simulated failure", code),
            )),
            None => Ok(self.catalog.clone()),
        }
    }
}
