//! Personal-access-token handling.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A personal access token.
///
/// Neither `Debug` nor `Display` reveal more than the first and last two
/// characters; tokens of four characters or fewer are masked entirely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `Basic` authorization header value: base64 of `:token`.
    pub fn basic_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!(":{}", self.0)))
    }

    /// Masked rendition for logs and error output.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len().max(4));
        }
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
