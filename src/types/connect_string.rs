use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::DdlError;

static CONNECT_STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)/(.+)@(.+)$").expect("Invalid connect string pattern")
});

/// `user/password@alias` as given on the command line.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectString {
    pub username: String,
    pub password: String,
    pub alias: String,
}

impl ConnectString {
    /// Schema owning the extracted objects, the uppercased login user.
    pub fn schema(&self) -> String {
        self.username.to_uppercase()
    }
}

impl FromStr for ConnectString {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = CONNECT_STRING_PATTERN
            .captures(s)
            .ok_or(DdlError::BadConnectionStringFormat)?;

        Ok(Self {
            username: caps[1].to_string(),
            password: caps[2].to_string(),
            alias: caps[3].to_string(),
        })
    }
}

impl fmt::Display for ConnectString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/****@{}", self.username, self.alias)
    }
}

// password stays out of logs and panics
impl fmt::Debug for ConnectString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectString")
            .field("username", &self.username)
            .field("password", &"****")
            .field("alias", &self.alias)
            .finish()
    }
}
