//! Worker-loop integration surface.
//!
//! This module is what a long-lived worker process drives for every request
//! it receives. It handles:
//! - Normalizing the inbound request (Basic credentials onto request fields)
//! - Running the engine's `process` step and exposing the response
//! - Deferring the engine's `finalize` step until the worker loop resumes
//!
//! # Design Principles
//!
//! 1. **No Transport**: Nothing here reads sockets or writes responses. The
//!    worker loop owns the connection; this module only hands it a response.
//!
//! 2. **Response First**: `finalize` never runs before the response is
//!    available to the caller, and never runs at all unless the caller
//!    resumes the [`Handling`].
//!
//! 3. **Transparent Errors**: Engine failures come back as the engine's own
//!    error type. Nothing is caught, wrapped, or retried.
//!
//! # Example Flow
//!
//! ```ignore
//! // Inside the worker's receive loop:
//! let request = Request::new(method, uri)?.with_headers(headers);
//!
//! let mut handling = adapter.start(request)?;
//! if let Some(response) = handling.current() {
//!     transport.send(response)?;
//! }
//!
//! // Response is on the wire; now run session flushing and the like.
//! drain(&mut handling)?;
//! ```

mod adapter;
mod engine;
mod sequence;

pub use adapter::{Handling, RequestAdapter, Stage};
pub use engine::Engine;
pub use sequence::{drain, drain_all, Sequence};
