use std::fmt;
use std::str::FromStr;

use crate::error::{RequestError, RequestErrorKind};

/// HTTP method of an inbound request.
///
/// Method tokens are case-sensitive: `"get"` parses as an extension
/// method, not as [`Method::Get`].
///
/// # Examples
///
/// ```
/// use kernel_bridge::Method;
///
/// assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
/// assert_eq!(Method::Get.to_string(), "GET");
/// assert_eq!("PROPFIND".parse::<Method>().unwrap().as_str(), "PROPFIND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP HEAD method
    Head,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP PATCH method
    Patch,
    /// HTTP OPTIONS method
    Options,
    /// HTTP CONNECT method
    Connect,
    /// HTTP TRACE method
    Trace,
    /// Any other syntactically valid method token (WebDAV and friends)
    Extension(String),
}

impl Method {
    /// Returns the method token as it appears on the request line.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
            Method::Extension(token) => token.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "PATCH" => Method::Patch,
            "OPTIONS" => Method::Options,
            "CONNECT" => Method::Connect,
            "TRACE" => Method::Trace,
            other if is_token(other) => Method::Extension(other.to_string()),
            other => {
                return Err(RequestError::new(
                    RequestErrorKind::InvalidMethod,
                    format!("'{}' is not a valid method token", other),
                ))
            }
        };
        Ok(method)
    }
}

/// Ordered, case-insensitive header multimap.
///
/// Names keep the spelling of their first insertion; lookups ignore ASCII
/// case. Values for one name keep their arrival order. `Debug` output
/// replaces the values of credential-bearing headers with `[REDACTED]`.
///
/// # Examples
///
/// ```
/// use kernel_bridge::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.append("Accept", "text/html").unwrap();
/// headers.append("accept", "application/json").unwrap();
///
/// assert_eq!(headers.get("ACCEPT"), Some("text/html"));
/// assert_eq!(headers.get_all("Accept").len(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value after any existing values for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::InvalidHeaderName`] if `name` is not an
    /// HTTP token.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), RequestError> {
        let name = checked_name(name.into())?;
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1.push(value),
            None => self.entries.push((name, vec![value])),
        }
        Ok(())
    }

    /// Replaces every value for `name` with the single `value`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::InvalidHeaderName`] if `name` is not an
    /// HTTP token.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), RequestError> {
        let name = checked_name(name.into())?;
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1 = vec![value],
            None => self.entries.push((name, vec![value])),
        }
        Ok(())
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns every value for `name` in arrival order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.position(name)
            .map(|idx| self.entries[idx].1.as_slice())
            .unwrap_or(&[])
    }

    /// Removes `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Vec<String> {
        match self.position(name) {
            Some(idx) => self.entries.remove(idx).1,
            None => Vec::new(),
        }
    }

    /// Returns true if at least one value exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }
}

const REDACTED_HEADERS: [&str; 3] = ["authorization", "proxy-authorization", "cookie"];

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, values) in &self.entries {
            if REDACTED_HEADERS
                .iter()
                .any(|redacted| name.eq_ignore_ascii_case(redacted))
            {
                map.entry(name, &"[REDACTED]");
            } else {
                map.entry(name, values);
            }
        }
        map.finish()
    }
}

fn checked_name(name: String) -> Result<String, RequestError> {
    if is_token(&name) {
        Ok(name)
    } else {
        Err(RequestError::new(
            RequestErrorKind::InvalidHeaderName,
            format!("'{}' is not a valid header name", name),
        ))
    }
}

// RFC 9110 token: 1*tchar
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        })
}
