use tracing::Span;

use crate::request::Request;

/// Opens the span every adapter event for one request is recorded under.
///
/// The span carries method and URI only. Credentials are reported through
/// [`record_credentials`] as presence flags, never as values.
pub(crate) fn request_span(request: &Request) -> Span {
    tracing::debug_span!(
        "kernel_request",
        method = %request.method(),
        uri = %request.uri(),
        has_user = tracing::field::Empty,
        has_password = tracing::field::Empty,
    )
}

/// Records which credential parts normalization produced.
pub(crate) fn record_credentials(span: &Span, request: &Request) {
    span.record("has_user", request.user().is_some());
    span.record("has_password", request.password().is_some());
}
