use std::fmt;

/// A value that must never show up in logs or formatted output.
///
/// The password decoded from an `Authorization: Basic` header is stored
/// as `Secret<String>` on the [`Request`](crate::Request), so that
/// `{:?}` on a request, or on a `Handling` holding one, prints
/// `[REDACTED]` in its place. The value is reachable only through
/// [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use kernel_bridge::Secret;
///
/// let password = Secret::new("hunter2".to_string());
/// assert_eq!(format!("{:?}", password), "[REDACTED]");
/// assert_eq!(password.expose_secret(), "hunter2");
/// ```
// Do NOT derive Clone, Copy, or Default: a password should have one owner.
pub struct Secret<T> {
    // Must stay private, the whole point is that the field cannot be named.
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Returns a reference to the wrapped value.
    ///
    /// Callers are responsible for not logging what they get back.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Unwraps the secret, handing ownership of the value to the caller.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// No Deref, AsRef, or Borrow: access is always spelled expose_secret().

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
