//! HTTP Basic credential decoding (RFC 7617).
//!
//! A conventional request-parsing runtime exposes the user and password of
//! an `Authorization: Basic ...` header as ready-made request fields. A
//! long-lived worker receives the raw header instead, so the adapter runs
//! [`extract_basic_credentials`] on every request before handing it to the
//! engine.
//!
//! Malformed input is never an error here: a header with another scheme,
//! invalid base64, or a payload that is not UTF-8 simply yields no
//! credentials, and the engine's access control sees an anonymous request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::secret::Secret;

/// Scheme prefix, including the separating space. Matched case-sensitively.
pub const BASIC_PREFIX: &str = "Basic ";

/// User name and password decoded from an `Authorization` header.
///
/// Either part may be absent. The password is held as a [`Secret`] so the
/// value never shows up in `Debug` output.
///
/// # Examples
///
/// ```
/// use kernel_bridge::auth::extract_basic_credentials;
///
/// // "the-user:the-password"
/// let creds = extract_basic_credentials(Some("Basic dGhlLXVzZXI6dGhlLXBhc3N3b3Jk"));
/// assert_eq!(creds.username(), Some("the-user"));
/// assert_eq!(creds.password(), Some("the-password"));
/// assert_eq!(format!("{:?}", creds).contains("the-password"), false);
/// ```
#[derive(Debug, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<Secret<String>>,
}

impl Credentials {
    /// Credentials with neither user nor password.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the decoded user name.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the decoded password.
    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret().as_str())
    }

    /// Returns true if neither part is present.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Splits into `(username, password)`, exposing the password.
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.username, self.password.map(Secret::into_inner))
    }
}

/// Decodes an `Authorization` header value per the Basic scheme.
///
/// | input                               | result                  |
/// |-------------------------------------|-------------------------|
/// | `None`                              | (none, none)            |
/// | scheme other than `Basic `          | (none, none)            |
/// | invalid base64 or non-UTF-8 payload | (none, none)            |
/// | payload without `:`                 | (payload, none)         |
/// | `user:pa:ss`                        | (`user`, `pa:ss`)       |
///
/// Only the first colon separates user from password.
///
/// # Examples
///
/// ```
/// use kernel_bridge::auth::extract_basic_credentials;
///
/// assert!(extract_basic_credentials(None).is_empty());
/// assert!(extract_basic_credentials(Some("Bearer token")).is_empty());
/// assert!(extract_basic_credentials(Some("Basic not-base64")).is_empty());
///
/// // "the-user"
/// let (user, password) = extract_basic_credentials(Some("Basic dGhlLXVzZXI=")).into_parts();
/// assert_eq!(user.as_deref(), Some("the-user"));
/// assert_eq!(password, None);
/// ```
pub fn extract_basic_credentials(header: Option<&str>) -> Credentials {
    let Some(value) = header else {
        return Credentials::none();
    };

    let Some(encoded) = value.strip_prefix(BASIC_PREFIX) else {
        tracing::trace!("ignoring non-Basic authorization scheme");
        return Credentials::none();
    };

    let decoded = match STANDARD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::trace!(error = %err, "ignoring undecodable Basic credentials");
            return Credentials::none();
        }
    };

    let Ok(text) = String::from_utf8(decoded) else {
        tracing::trace!("ignoring non-UTF-8 Basic credentials");
        return Credentials::none();
    };

    match text.split_once(':') {
        Some((user, password)) => Credentials {
            username: Some(user.to_string()),
            password: Some(Secret::new(password.to_string())),
        },
        None => Credentials {
            username: Some(text),
            password: None,
        },
    }
}
