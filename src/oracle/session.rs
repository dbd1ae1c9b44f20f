use crate::errors::DdlError;

/// The two things extraction needs from an open database session.
pub trait CatalogSession {
    /// Runs `sql` with positional binds `:1..:n` and returns the first column
    /// of every row, in result order.
    fn query_strings(&self, sql: &str, params: &[&str]) -> Result<Vec<String>, DdlError>;

    /// Calls a scalar function returning a character LOB and returns its
    /// value as text.
    fn call_function(&self, function: &str, args: &[&str]) -> Result<String, DdlError>;
}
