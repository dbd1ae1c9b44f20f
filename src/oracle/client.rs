use oracle::Connection;
use oracle::sql_type::ToSql;
use tracing::debug;

use crate::errors::DdlError;
use crate::oracle::CatalogSession;

pub struct OracleClient {
    pub conn: Connection,
}

/// `SELECT f(:1, .., :n) FROM dual`
fn function_query(function: &str, arg_count: usize) -> String {
    let binds = (1..=arg_count)
        .map(|i| format!(":{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {}({}) FROM dual", function, binds)
}

fn bind_values(params: &[&str]) -> Vec<String> {
    params.iter().map(|p| p.to_string()).collect()
}

impl OracleClient {
    pub fn connect(username: &str, password: &str, alias: &str) -> Result<Self, oracle::Error> {
        let conn = Connection::connect(username, password, alias)?;
        Ok(Self { conn })
    }

    pub fn execute(&self, sql: &str) -> Result<(), DdlError> {
        self.conn.execute(sql, &[])?;
        Ok(())
    }
}

impl CatalogSession for OracleClient {
    fn query_strings(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, DdlError> {
        debug!("Query: {} {:?}", sql, params);

        let values = bind_values(params);
        let binds: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();

        let rows = self.conn.query(sql, &binds)?;
        let mut results = Vec::new();
        for row_result in rows {
            let row = row_result?;
            results.push(row.get(0)?);
        }
        Ok(results)
    }

    fn call_function(&self, function: &str, args: &[&str]) -> Result<String, DdlError> {
        let query = function_query(function, args.len());
        debug!("Function query: {} {:?}", query, args);

        let values = bind_values(args);
        let binds: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();

        let text: String = self.conn.query_row(&query, &binds)?.get(0)?;
        Ok(text)
    }
}
