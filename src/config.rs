/// Options controlling how the [`RequestAdapter`](crate::worker::RequestAdapter)
/// normalizes requests.
///
/// The defaults reproduce what a conventional request-parsing runtime does:
/// credentials are always decoded from the `Authorization` header and
/// replace whatever the request carried.
///
/// # Examples
///
/// ```
/// use kernel_bridge::HandlerConfig;
///
/// let config = HandlerConfig::default().with_preserve_existing_credentials(true);
/// assert!(config.basic_auth());
/// assert!(config.preserve_existing_credentials());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerConfig {
    basic_auth: bool,
    preserve_existing_credentials: bool,
}

impl HandlerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            basic_auth: true,
            preserve_existing_credentials: false,
        }
    }

    /// Enables or disables decoding of `Authorization: Basic` headers.
    ///
    /// When disabled the credential fields are left exactly as the worker
    /// loop set them.
    pub fn with_basic_auth(mut self, enabled: bool) -> Self {
        self.basic_auth = enabled;
        self
    }

    /// Keeps credentials the worker loop already attached to the request.
    ///
    /// Intended for transports that authenticate clients themselves (TLS
    /// client certificates, a trusted front proxy). A request is left
    /// untouched if it already has a user name.
    pub fn with_preserve_existing_credentials(mut self, preserve: bool) -> Self {
        self.preserve_existing_credentials = preserve;
        self
    }

    /// Returns whether Basic credentials are decoded.
    pub fn basic_auth(&self) -> bool {
        self.basic_auth
    }

    /// Returns whether pre-set credentials survive normalization.
    pub fn preserve_existing_credentials(&self) -> bool {
        self.preserve_existing_credentials
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_decode_and_overwrite() {
        let config = HandlerConfig::default();
        assert!(config.basic_auth());
        assert!(!config.preserve_existing_credentials());
        assert_eq!(config, HandlerConfig::new());
    }

    #[test]
    fn builder_methods_chain() {
        let config = HandlerConfig::new()
            .with_basic_auth(false)
            .with_preserve_existing_credentials(true);
        assert!(!config.basic_auth());
        assert!(config.preserve_existing_credentials());
    }
}
