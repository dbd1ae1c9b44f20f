use rust_embed::RustEmbed;

use crate::errors::DdlError;

#[derive(RustEmbed)]
#[folder = "src/assets/sql/"]
struct Queries;

/// Returns the embedded catalog query with the given file name.
pub fn get_query(name: &str) -> Result<String, DdlError> {
    let paths_to_try = vec![name.to_string(), format!("src/assets/sql/{}", name)];

    for path in paths_to_try {
        if let Some(file) = Queries::get(&path) {
            return Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned());
        }
    }

    Err(DdlError::QueryTemplate {
        name: name.to_string(),
    })
}
