//! Resumable sequences and the driver that runs them to completion.
//!
//! A worker loop reads the value a sequence currently exposes, sends it to
//! the client, and then calls [`drain`] to run whatever work the sequence
//! deferred until after that point.
//!
//! # Integration Flow
//!
//! ```text
//! RequestAdapter::start(request)
//!   ↓
//! Handling in ResponseReady: current() == Some(&response)
//!   ↓
//! worker loop writes the response to the client
//!   ↓
//! drain(&mut handling)  →  Engine::finalize(&request, &response)
//!   ↓
//! Handling in Finalized: current() == None
//! ```

/// A lazy, forward-only computation that exposes values one at a time.
///
/// Implementors decide what a step does; the driver only relies on three
/// rules:
/// - `current` is `None` once `is_complete` returns true,
/// - `resume` on a complete sequence is a no-op returning `Ok(())`,
/// - a sequence that returns `Err` from `resume` is complete afterwards or
///   can be resumed again; it never loops forever on the same error.
pub trait Sequence {
    /// Values exposed between suspensions.
    type Item;
    /// Failure raised while running a step.
    type Error;

    /// Returns the value exposed at the current suspension point.
    fn current(&self) -> Option<&Self::Item>;

    /// Runs the sequence up to its next suspension point or to completion.
    fn resume(&mut self) -> Result<(), Self::Error>;

    /// Returns true once the sequence has run to its end.
    fn is_complete(&self) -> bool;
}

/// Resumes `sequence` until it completes, discarding exposed values.
///
/// Draining a sequence that is already complete does nothing. The first
/// error raised by a step is returned immediately.
///
/// # Errors
///
/// Returns whatever error the sequence's `resume` raised.
///
/// # Examples
///
/// ```
/// use kernel_bridge::Request;
/// use kernel_bridge::worker::{drain, Engine, RequestAdapter, Sequence};
///
/// struct Static;
///
/// impl Engine for Static {
///     type Response = &'static str;
///     type Error = std::convert::Infallible;
///
///     fn process(&self, _request: &Request) -> Result<&'static str, Self::Error> {
///         Ok("hello")
///     }
/// }
///
/// let adapter = RequestAdapter::new(Static);
/// let mut handling = adapter.start(Request::get("http://example.org/").unwrap()).unwrap();
/// assert_eq!(handling.current(), Some(&"hello"));
///
/// drain(&mut handling).unwrap();
/// assert!(handling.is_complete());
///
/// // Second drain is a no-op
/// drain(&mut handling).unwrap();
/// ```
pub fn drain<S>(sequence: &mut S) -> Result<(), S::Error>
where
    S: Sequence + ?Sized,
{
    while !sequence.is_complete() {
        sequence.resume()?;
    }
    Ok(())
}

/// Drains `sequence` if there is one.
///
/// A worker loop that failed before starting the adapter has no sequence to
/// finalize; passing `None` is treated as already done.
pub fn drain_all<S>(sequence: Option<&mut S>) -> Result<(), S::Error>
where
    S: Sequence + ?Sized,
{
    match sequence {
        Some(sequence) => drain(sequence),
        None => Ok(()),
    }
}
