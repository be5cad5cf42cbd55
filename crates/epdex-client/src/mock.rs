//! Scripted transport for development and testing.
//!
//! [`MockTransport`] decouples driver and integration tests from any real
//! backend: calls are answered from a queued plan (outcome plus an optional
//! simulated latency) and every fetch is recorded for assertions. With the
//! tokio clock paused, per-call delays give tests deterministic control over
//! response arrival order.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use epdex_core::{ListError, QuerySpec, RecordPage};

use crate::endpoint::{ListTransport, TransportFuture};

/// One planned response.
#[derive(Debug, Clone)]
pub struct MockCall<R> {
    /// Simulated latency before the outcome resolves.
    pub delay_ms: u64,
    /// Outcome handed to the controller.
    pub outcome: Result<RecordPage<R>, ListError>,
}

/// One recorded fetch.
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    /// Query the controller issued.
    pub query: QuerySpec,
    /// Bearer token the fetch carried.
    pub token: String,
}

/// Plan-driven [`ListTransport`] implementation.
///
/// Calls beyond the plan resolve immediately with an empty page, so tests
/// only script the responses they assert on.
#[derive(Debug)]
pub struct MockTransport<R> {
    endpoint: String,
    plan: Mutex<VecDeque<MockCall<R>>>,
    recorded: Mutex<Vec<RecordedFetch>>,
}

impl<R> MockTransport<R> {
    /// Create a mock answering for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            plan: Mutex::new(VecDeque::new()),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Queue the next planned response.
    pub fn enqueue(&self, delay_ms: u64, outcome: Result<RecordPage<R>, ListError>) {
        self.plan
            .lock()
            .expect("mock plan lock")
            .push_back(MockCall { delay_ms, outcome });
    }

    /// Every fetch seen so far, in call order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedFetch> {
        self.recorded.lock().expect("mock record lock").clone()
    }

    /// Number of fetches seen so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.recorded.lock().expect("mock record lock").len()
    }
}

impl<R> ListTransport<R> for MockTransport<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn fetch(&self, query: QuerySpec, token: String) -> TransportFuture<'_, R> {
        Box::pin(async move {
            let call = {
                self.recorded
                    .lock()
                    .expect("mock record lock")
                    .push(RecordedFetch { query, token });
                self.plan.lock().expect("mock plan lock").pop_front()
            };
            let call = call.unwrap_or(MockCall {
                delay_ms: 0,
                outcome: Ok(RecordPage::empty()),
            });
            if call.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(call.delay_ms)).await;
            }
            call.outcome
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
