//! Request-scoped context passed explicitly to storage operations.
//!
//! A [`RequestContext`] carries the request identifier used in log records and
//! an optional deadline. Storage backends wrap their I/O in
//! [`RequestContext::run`] so a slow backend cannot hold a request past its
//! deadline. Cancellation by the caller needs no extra plumbing: dropping the
//! request future drops the in-flight store future with it.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, error::Elapsed};
use uuid::Uuid;

/// Identifier attached to every log record emitted while serving a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Wraps an identifier received from a client or an upstream proxy.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request metadata threaded through service and storage calls.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: RequestId,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context whose deadline is `timeout` from now.
    ///
    /// `None` means store calls may take as long as the backend needs.
    pub fn new(request_id: RequestId, timeout: Option<Duration>) -> Self {
        Self {
            request_id,
            deadline: timeout.map(|t| Instant::now() + t),
        }
    }

    /// Context for work that is not tied to an HTTP request (CLI, tests).
    pub fn background() -> Self {
        Self::new(RequestId::generate(), None)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `fut` to completion unless the deadline passes first.
    ///
    /// # Errors
    ///
    /// Returns [`Elapsed`] if the deadline is reached before `fut` completes;
    /// `fut` is dropped at that point.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, Elapsed>
    where
        F: Future,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, fut).await,
            None => Ok(fut.await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_request_ids_differ() {
        let a = RequestId::generate();
        let b = RequestId::generate();

        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_background_context_has_no_deadline() {
        let ctx = RequestContext::background();
        assert!(ctx.deadline().is_none());
    }

    #[tokio::test]
    async fn test_run_completes_within_deadline() {
        let ctx = RequestContext::new(RequestId::new("req-1"), Some(Duration::from_secs(5)));

        let result = ctx.run(async { 42 }).await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_run_aborts_after_deadline() {
        let ctx = RequestContext::new(RequestId::new("req-2"), Some(Duration::from_millis(10)));

        let result = ctx
            .run(tokio::time::sleep(Duration::from_secs(30)))
            .await;

        assert!(result.is_err());
    }
}
