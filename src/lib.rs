//! Two-phase request adapter for long-lived HTTP worker processes.
//!
//! A worker that keeps its application booted between requests still has to
//! do the per-request work a conventional entry point would have done, and
//! it has to get the response to the client before any deferred cleanup
//! runs. This crate provides:
//! - **Credential normalization**: `Authorization: Basic` headers decoded
//!   onto the request, the way a request-parsing runtime would
//! - **Two-phase execution**: the engine's response is exposed first, its
//!   `finalize` step runs only when the worker loop resumes
//! - **A sequence driver**: [`worker::drain`] runs the deferred step
//!
//! # Core Types
//!
//! - [`Request`]: Inbound request with method, URI, headers and credentials
//! - [`worker::Engine`]: The application code the adapter delegates to
//! - [`worker::RequestAdapter`]: Normalizes requests and starts handling
//! - [`worker::Handling`]: One in-flight request between its two phases
//! - [`auth::extract_basic_credentials`]: RFC 7617 header decoding
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use kernel_bridge::Request;
//! use kernel_bridge::worker::{drain, Engine, RequestAdapter};
//!
//! struct Kernel {
//!     terminated: Cell<bool>,
//! }
//!
//! impl Engine for Kernel {
//!     type Response = String;
//!     type Error = std::convert::Infallible;
//!
//!     fn process(&self, _request: &Request) -> Result<String, Self::Error> {
//!         Ok("hello".to_string())
//!     }
//!
//!     fn finalize(&self, _request: &Request, _response: &String) -> Result<(), Self::Error> {
//!         self.terminated.set(true);
//!         Ok(())
//!     }
//! }
//!
//! let adapter = RequestAdapter::new(Kernel { terminated: Cell::new(false) });
//! let mut handling = adapter.start(Request::get("http://example.org/").unwrap()).unwrap();
//!
//! // Send this to the client first...
//! assert_eq!(handling.current().map(String::as_str), Some("hello"));
//! assert!(!adapter.engine().terminated.get());
//!
//! // ...then let the engine finish up.
//! drain(&mut handling).unwrap();
//! assert!(adapter.engine().terminated.get());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
mod config;
mod error;
mod http;
mod logging;
mod request;
mod secret;
pub mod worker;

pub use config::HandlerConfig;
pub use error::{Error, RequestError, RequestErrorKind};
pub use http::{HeaderMap, Method};
pub use request::{Request, AUTHORIZATION};
pub use secret::Secret;
