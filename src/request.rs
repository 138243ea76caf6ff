use crate::error::{RequestError, RequestErrorKind};
use crate::http::{HeaderMap, Method};
use crate::secret::Secret;

/// Name of the header carrying client credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// An inbound HTTP request as handed over by the worker loop.
///
/// Method, URI and headers are fixed once the request reaches the adapter.
/// The credential fields start out empty and are filled in during
/// normalization, before the engine sees the request; engine code reads
/// [`user`](Self::user) and [`password`](Self::password) instead of
/// parsing the raw `Authorization` header itself.
///
/// # Examples
///
/// ```
/// use kernel_bridge::{Method, Request};
///
/// let request = Request::get("http://example.org/")
///     .unwrap()
///     .with_header("Authorization", "Bearer token")
///     .unwrap();
///
/// assert_eq!(request.method(), &Method::Get);
/// assert_eq!(request.uri(), "http://example.org/");
/// assert_eq!(request.authorization(), Some("Bearer token"));
/// assert!(request.user().is_none());
/// ```
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: String,
    headers: HeaderMap,
    username: Option<String>,
    password: Option<Secret<String>>,
}

impl Request {
    /// Creates a request with no headers and no credentials.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::EmptyUri`] if `uri` is empty.
    pub fn new(method: Method, uri: impl Into<String>) -> Result<Self, RequestError> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(RequestError::new(
                RequestErrorKind::EmptyUri,
                "request URI must not be empty",
            ));
        }

        Ok(Self {
            method,
            uri,
            headers: HeaderMap::new(),
            username: None,
            password: None,
        })
    }

    /// Shorthand for a `GET` request.
    pub fn get(uri: impl Into<String>) -> Result<Self, RequestError> {
        Self::new(Method::Get, uri)
    }

    /// Appends a header value, returning the request for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::InvalidHeaderName`] if `name` is not an
    /// HTTP token.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, RequestError> {
        self.headers.append(name, value)?;
        Ok(self)
    }

    /// Replaces the whole header map.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI as received.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the request headers for modification by the worker loop.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the first `Authorization` header value, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION)
    }

    /// Returns the user name decoded from the request credentials.
    pub fn user(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password decoded from the request credentials.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret().as_str())
    }

    /// Overwrites both credential fields.
    pub fn set_credentials(&mut self, username: Option<String>, password: Option<String>) {
        self.username = username;
        self.password = password.map(Secret::new);
    }
}
