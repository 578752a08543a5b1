//! The fixed set of HTTP verbs the router understands.

use std::fmt;

/// One of the seven HTTP methods a route may be declared for. Parsed
/// case-insensitively from a route file and displayed in uppercase.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
}

impl HttpMethod {
    /// The canonical uppercase spelling of this verb.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Parse a verb token case-insensitively. Returns `None` for any token
    /// outside the fixed set.
    pub fn parse(token: &str) -> Option<HttpMethod> {
        if token.eq_ignore_ascii_case("GET") {
            Some(HttpMethod::Get)
        } else if token.eq_ignore_ascii_case("POST") {
            Some(HttpMethod::Post)
        } else if token.eq_ignore_ascii_case("PUT") {
            Some(HttpMethod::Put)
        } else if token.eq_ignore_ascii_case("DELETE") {
            Some(HttpMethod::Delete)
        } else if token.eq_ignore_ascii_case("PATCH") {
            Some(HttpMethod::Patch)
        } else if token.eq_ignore_ascii_case("HEAD") {
            Some(HttpMethod::Head)
        } else if token.eq_ignore_ascii_case("OPTIONS") {
            Some(HttpMethod::Options)
        } else {
            None
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
