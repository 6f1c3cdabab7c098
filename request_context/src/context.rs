//! Task-scoped correlation context
//!
//! One logical request owns one context value: the request's entry point
//! constructs it once and runs the handler inside [`scope`]. The value is
//! visible to every await point under that scope and to tasks started with
//! this module's [`spawn`], and is dropped with the scope when the request
//! completes. Concurrent requests never observe each other's value.

use crate::errors::ContextError;
use tokio::task::JoinHandle;

tokio::task_local! {
    static CURRENT_CONTEXT: CorrelationContext;
}

/// Correlation identifier and the wire header it travels under.
///
/// Immutable once constructed; both fields are required to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationContext {
    correlation_id: String,
    header_key: String,
}

impl CorrelationContext {
    /// Create a context from an extracted or generated correlation id and
    /// the header name it was carried under.
    pub fn new(
        correlation_id: impl Into<String>,
        header_key: impl Into<String>,
    ) -> Result<Self, ContextError> {
        let correlation_id = correlation_id.into();
        if correlation_id.is_empty() {
            return Err(ContextError::EmptyCorrelationId);
        }

        let header_key = header_key.into();
        if header_key.is_empty() {
            return Err(ContextError::EmptyHeaderKey);
        }

        Ok(Self {
            correlation_id,
            header_key,
        })
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn header_key(&self) -> &str {
        &self.header_key
    }
}

/// Run `future` with `context` as the current correlation context.
///
/// Transport middleware wraps each request's handler in one `scope` call.
/// Scopes may nest; the innermost value wins, which is how an in-request
/// overwrite is expressed.
pub async fn scope<F>(context: CorrelationContext, future: F) -> F::Output
where
    F: Future,
{
    CURRENT_CONTEXT.scope(context, future).await
}

/// The current request's correlation context, if one is in scope.
///
/// Outside any scope this returns `None`, never a value left over from a
/// previous request.
pub fn try_current() -> Option<CorrelationContext> {
    CURRENT_CONTEXT.try_with(|context| context.clone()).ok()
}

/// Spawn a task that observes the caller's correlation context.
///
/// Task-local values do not cross `tokio::spawn` on their own; background
/// work belonging to a request is started through this function so the
/// request's context follows it without being passed as a parameter.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match try_current() {
        Some(context) => tokio::spawn(CURRENT_CONTEXT.scope(context, future)),
        None => tokio::spawn(future),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::DEFAULT_CORRELATION_HEADER;

    fn context(id: &str) -> CorrelationContext {
        CorrelationContext::new(id, DEFAULT_CORRELATION_HEADER).unwrap()
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(matches!(
            CorrelationContext::new("", "X-Correlation-Id"),
            Err(ContextError::EmptyCorrelationId)
        ));
        assert!(matches!(
            CorrelationContext::new("abc-123", ""),
            Err(ContextError::EmptyHeaderKey)
        ));
    }

    #[tokio::test]
    async fn no_context_outside_a_scope() {
        assert_eq!(try_current(), None);
    }

    #[tokio::test]
    async fn scope_makes_context_current() {
        let observed = scope(context("abc-123"), async {
            tokio::task::yield_now().await;
            try_current()
        })
        .await;

        assert_eq!(observed, Some(context("abc-123")));
        assert_eq!(try_current(), None, "context must not outlive its scope");
    }

    #[tokio::test]
    async fn concurrent_requests_are_isolated() {
        // Two "requests" interleaving on the same runtime; each must observe
        // only its own id at every read.
        let request = |id: &'static str| {
            scope(context(id), async move {
                for _ in 0..32 {
                    tokio::task::yield_now().await;
                    let current = try_current().expect("context lost mid-request");
                    assert_eq!(current.correlation_id(), id);
                }
                try_current().map(|c| c.correlation_id().to_string())
            })
        };

        let (a, b) = tokio::join!(request("abc-123"), request("def-456"));

        assert_eq!(a.as_deref(), Some("abc-123"));
        assert_eq!(b.as_deref(), Some("def-456"));
    }

    #[tokio::test]
    async fn spawned_work_observes_parent_context() {
        let observed = scope(context("abc-123"), async {
            spawn(async { try_current() }).await.unwrap()
        })
        .await;

        assert_eq!(observed, Some(context("abc-123")));
    }

    #[tokio::test]
    async fn spawn_without_context_runs_bare() {
        let observed = spawn(async { try_current() }).await.unwrap();
        assert_eq!(observed, None);
    }

    #[tokio::test]
    async fn nested_scope_overrides_within_a_request() {
        let observed = scope(context("outer"), async {
            scope(context("inner"), async { try_current() }).await
        })
        .await;

        assert_eq!(observed, Some(context("inner")));
    }
}
