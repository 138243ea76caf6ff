//! The capability boundary between the adapter and application code.
//!
//! This module defines the one trait the adapter depends on. Whatever
//! actually turns a request into a response (a router, a framework kernel,
//! a test double) implements [`Engine`].

use std::rc::Rc;
use std::sync::Arc;

use crate::request::Request;

/// Request-processing unit the adapter delegates to.
///
/// The adapter calls [`process`](Self::process) exactly once per request and,
/// only after the response has been handed to the worker loop and the
/// sequence is resumed, [`finalize`](Self::finalize) at most once with the
/// same request and response.
///
/// # Design Notes
///
/// Both methods take `&self`: one engine instance serves many sequential
/// requests. Engines that record per-request state use interior mutability;
/// the adapter never runs two requests at once on the same thread, so a
/// `Cell` or `RefCell` is enough.
///
/// Errors are the engine's own type and reach the worker loop unchanged.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use kernel_bridge::Request;
/// use kernel_bridge::worker::Engine;
///
/// struct Hello {
///     sessions_flushed: Cell<u32>,
/// }
///
/// impl Engine for Hello {
///     type Response = String;
///     type Error = std::convert::Infallible;
///
///     fn process(&self, request: &Request) -> Result<String, Self::Error> {
///         Ok(format!("hello {}", request.user().unwrap_or("anonymous")))
///     }
///
///     fn finalize(&self, _request: &Request, _response: &String) -> Result<(), Self::Error> {
///         self.sessions_flushed.set(self.sessions_flushed.get() + 1);
///         Ok(())
///     }
/// }
/// ```
pub trait Engine {
    /// What `process` produces; opaque to the adapter.
    type Response;
    /// Failure type shared by both phases.
    type Error;

    /// Turns a normalized request into a response.
    ///
    /// Credential fields on `request` are already populated.
    fn process(&self, request: &Request) -> Result<Self::Response, Self::Error>;

    /// Post-response work such as flushing sessions or sending mail.
    ///
    /// Runs only after the response was exposed to the worker loop. The
    /// default does nothing, for engines without deferred work.
    fn finalize(&self, request: &Request, response: &Self::Response) -> Result<(), Self::Error> {
        let _ = (request, response);
        Ok(())
    }
}

impl<E: Engine + ?Sized> Engine for &E {
    type Response = E::Response;
    type Error = E::Error;

    fn process(&self, request: &Request) -> Result<Self::Response, Self::Error> {
        (**self).process(request)
    }

    fn finalize(&self, request: &Request, response: &Self::Response) -> Result<(), Self::Error> {
        (**self).finalize(request, response)
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    type Response = E::Response;
    type Error = E::Error;

    fn process(&self, request: &Request) -> Result<Self::Response, Self::Error> {
        (**self).process(request)
    }

    fn finalize(&self, request: &Request, response: &Self::Response) -> Result<(), Self::Error> {
        (**self).finalize(request, response)
    }
}

impl<E: Engine + ?Sized> Engine for Rc<E> {
    type Response = E::Response;
    type Error = E::Error;

    fn process(&self, request: &Request) -> Result<Self::Response, Self::Error> {
        (**self).process(request)
    }

    fn finalize(&self, request: &Request, response: &Self::Response) -> Result<(), Self::Error> {
        (**self).finalize(request, response)
    }
}

impl<E: Engine + ?Sized> Engine for Arc<E> {
    type Response = E::Response;
    type Error = E::Error;

    fn process(&self, request: &Request) -> Result<Self::Response, Self::Error> {
        (**self).process(request)
    }

    fn finalize(&self, request: &Request, response: &Self::Response) -> Result<(), Self::Error> {
        (**self).finalize(request, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::convert::Infallible;

    // Engine without deferred work relies on the default finalize
    struct Echo;

    impl Engine for Echo {
        type Response = String;
        type Error = Infallible;

        fn process(&self, request: &Request) -> Result<String, Infallible> {
            Ok(request.uri().to_string())
        }
    }

    struct Counting {
        finalized: Cell<u32>,
    }

    impl Engine for Counting {
        type Response = ();
        type Error = Infallible;

        fn process(&self, _request: &Request) -> Result<(), Infallible> {
            Ok(())
        }

        fn finalize(&self, _request: &Request, _response: &()) -> Result<(), Infallible> {
            self.finalized.set(self.finalized.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn default_finalize_is_a_no_op() {
        let request = Request::get("/echo").unwrap();
        let response = Echo.process(&request).unwrap();
        assert_eq!(response, "/echo");
        assert!(Echo.finalize(&request, &response).is_ok());
    }

    #[test]
    fn smart_pointers_forward_both_phases() {
        let request = Request::get("/").unwrap();
        let engine = Rc::new(Counting {
            finalized: Cell::new(0),
        });

        let boxed: Box<dyn Engine<Response = (), Error = Infallible>> = Box::new(Rc::clone(&engine));
        boxed.process(&request).unwrap();
        boxed.finalize(&request, &()).unwrap();

        assert_eq!(engine.finalized.get(), 1);
    }

    #[test]
    fn arc_forwards_to_inner_engine() {
        let engine = Arc::new(Echo);
        let request = Request::get("/arc").unwrap();
        assert_eq!(engine.process(&request).unwrap(), "/arc");
    }
}
