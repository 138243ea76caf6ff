//! Integration tests driving the adapter the way a worker loop does.
//!
//! These tests simulate the receive → start → send → drain cycle and check
//! the ordering between the response leaving the worker and the engine's
//! deferred work.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use kernel_bridge::worker::{drain, drain_all, Engine, Handling, RequestAdapter};
use kernel_bridge::{HandlerConfig, HeaderMap, Method, Request};

type Timeline = Rc<RefCell<Vec<String>>>;

#[derive(Debug, PartialEq)]
enum AppError {
    NotFound(String),
    SessionStore,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(uri) => write!(f, "no route for {}", uri),
            AppError::SessionStore => write!(f, "session store unavailable"),
        }
    }
}

impl std::error::Error for AppError {}

// Application with one protected route and a session flush on finalize.
struct App {
    timeline: Timeline,
    session_store_down: bool,
}

impl Engine for App {
    type Response = (u16, String);
    type Error = AppError;

    fn process(&self, request: &Request) -> Result<(u16, String), AppError> {
        self.timeline
            .borrow_mut()
            .push(format!("process {}", request.uri()));
        match request.uri() {
            "/admin" => match (request.user(), request.password()) {
                (Some("admin"), Some("s3cret")) => Ok((200, "welcome admin".to_string())),
                _ => Ok((401, "unauthorized".to_string())),
            },
            "/" => Ok((200, "home".to_string())),
            other => Err(AppError::NotFound(other.to_string())),
        }
    }

    fn finalize(&self, request: &Request, response: &(u16, String)) -> Result<(), AppError> {
        self.timeline
            .borrow_mut()
            .push(format!("finalize {} {}", request.uri(), response.0));
        if self.session_store_down {
            return Err(AppError::SessionStore);
        }
        Ok(())
    }
}

struct Transport {
    timeline: Timeline,
    connected: bool,
}

impl Transport {
    fn send(&self, response: &(u16, String)) {
        self.timeline
            .borrow_mut()
            .push(format!("send {}", response.0));
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn raw_request(method: &str, uri: &str, headers: &[(&str, &str)]) -> Request {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.append(*name, *value).unwrap();
    }
    Request::new(method.parse::<Method>().unwrap(), uri)
        .unwrap()
        .with_headers(map)
}

/// One iteration of the worker's receive loop.
fn serve(
    adapter: &RequestAdapter<App>,
    transport: &Transport,
    request: Request,
) -> Result<(), AppError> {
    let mut handling: Handling<'_, App> = adapter.start(request)?;

    if !transport.connected {
        // Client went away; deferred work is simply skipped.
        return Ok(());
    }
    if let Some(response) = handling.current() {
        transport.send(response);
    }
    drain(&mut handling)
}

fn app(timeline: &Timeline) -> App {
    App {
        timeline: Rc::clone(timeline),
        session_store_down: false,
    }
}

#[test]
fn response_is_sent_before_finalize() {
    init_tracing();
    let timeline = Timeline::default();
    let adapter = RequestAdapter::new(app(&timeline));
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: true,
    };

    serve(&adapter, &transport, raw_request("GET", "/", &[])).unwrap();

    assert_eq!(
        *timeline.borrow(),
        ["process /", "send 200", "finalize / 200"]
    );
}

#[test]
fn basic_credentials_reach_access_control() {
    init_tracing();
    let timeline = Timeline::default();
    let adapter = RequestAdapter::new(app(&timeline));
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: true,
    };

    // "admin:s3cret"
    let good = raw_request("GET", "/admin", &[("Authorization", "Basic YWRtaW46czNjcmV0")]);
    // "admin:wrong"
    let bad = raw_request("GET", "/admin", &[("Authorization", "Basic YWRtaW46d3Jvbmc=")]);
    let bearer = raw_request("GET", "/admin", &[("Authorization", "Bearer s3cret")]);

    serve(&adapter, &transport, good).unwrap();
    serve(&adapter, &transport, bad).unwrap();
    serve(&adapter, &transport, bearer).unwrap();

    let sends: Vec<String> = timeline
        .borrow()
        .iter()
        .filter(|e| e.starts_with("send"))
        .cloned()
        .collect();
    assert_eq!(sends, ["send 200", "send 401", "send 401"]);
}

#[test]
fn disconnected_client_skips_finalize() {
    init_tracing();
    let timeline = Timeline::default();
    let adapter = RequestAdapter::new(app(&timeline));
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: false,
    };

    serve(&adapter, &transport, raw_request("GET", "/", &[])).unwrap();

    assert_eq!(*timeline.borrow(), ["process /"]);
}

#[test]
fn process_error_reaches_worker_loop_unchanged() {
    init_tracing();
    let timeline = Timeline::default();
    let adapter = RequestAdapter::new(app(&timeline));
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: true,
    };

    let err = serve(&adapter, &transport, raw_request("GET", "/missing", &[])).unwrap_err();

    assert_eq!(err, AppError::NotFound("/missing".to_string()));
    assert_eq!(err.to_string(), "no route for /missing");
    assert_eq!(*timeline.borrow(), ["process /missing"]);
}

#[test]
fn finalize_error_comes_after_response_was_sent() {
    init_tracing();
    let timeline = Timeline::default();
    let adapter = RequestAdapter::new(App {
        timeline: Rc::clone(&timeline),
        session_store_down: true,
    });
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: true,
    };

    let err = serve(&adapter, &transport, raw_request("POST", "/", &[])).unwrap_err();

    assert_eq!(err, AppError::SessionStore);
    assert_eq!(
        *timeline.borrow(),
        ["process /", "send 200", "finalize / 200"]
    );

    // The worker keeps serving after a failed finalize
    serve(&adapter, &transport, raw_request("GET", "/", &[])).unwrap_err();
    assert_eq!(timeline.borrow().len(), 6);
}

#[test]
fn worker_without_sequence_drains_nothing() {
    let mut none: Option<Handling<'_, App>> = None;
    assert!(drain_all(none.as_mut()).is_ok());
}

#[test]
fn preconfigured_transport_credentials_survive() {
    init_tracing();
    let timeline = Timeline::default();
    let config = HandlerConfig::default().with_preserve_existing_credentials(true);
    let adapter = RequestAdapter::with_config(app(&timeline), config);
    let transport = Transport {
        timeline: Rc::clone(&timeline),
        connected: true,
    };

    // mTLS-authenticated client also sends a stale Basic header ("guest:guest")
    let mut request = raw_request("GET", "/admin", &[("Authorization", "Basic Z3Vlc3Q6Z3Vlc3Q=")]);
    request.set_credentials(Some("admin".to_string()), Some("s3cret".to_string()));

    serve(&adapter, &transport, request).unwrap();

    assert!(timeline.borrow().contains(&"send 200".to_string()));
}
