//! List-endpoint transport: the boundary between the controller and the
//! backend REST API.
//!
//! [`ListTransport`] is the seam the driver fetches through; the provided
//! [`HttpListEndpoint`] speaks the `{count, results}` contract over HTTP
//! with bearer authentication. Every failure mode resolves into a
//! [`ListError`]; nothing here panics or retries.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use epdex_core::{ListError, ListOutcome, QuerySpec, RecordPage};
use serde::de::DeserializeOwned;

/// Boxed future returned by transport implementations.
pub type TransportFuture<'a, R> = Pin<Box<dyn Future<Output = ListOutcome<RecordPage<R>>> + Send + 'a>>;

/// A list endpoint the driver can fetch one page from.
///
/// Implementations must be soft-cancel safe: a superseded fetch simply has
/// its completion discarded by the controller's epoch gate, so there is no
/// cancellation callback to implement.
pub trait ListTransport<R>: Send + Sync {
    /// Fetch one page for `query`, authenticating with `token`.
    fn fetch(&self, query: QuerySpec, token: String) -> TransportFuture<'_, R>;

    /// Endpoint name used in error messages and logs.
    fn endpoint(&self) -> &str;
}

/// Request timeout applied to every list fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest response-body excerpt carried into an error message.
const BODY_EXCERPT_LEN: usize = 256;

/// HTTP implementation of [`ListTransport`] for endpoints returning
/// `{ count, results }`.
#[derive(Debug, Clone)]
pub struct HttpListEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpListEndpoint {
    /// Create an endpoint for `base_url` + `path` with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, path: &str) -> ListOutcome<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ListError::Transport {
                endpoint: path.to_owned(),
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self::with_client(client, base_url, path))
    }

    /// Create an endpoint reusing an existing client (connection pooling
    /// across endpoints).
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str, path: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        Self { client, url }
    }

    /// Full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<R> ListTransport<R> for HttpListEndpoint
where
    R: DeserializeOwned + Send + Sync + 'static,
{
    fn fetch(&self, query: QuerySpec, token: String) -> TransportFuture<'_, R> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.url.as_str())
                .query(&query.to_pairs())
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| ListError::Transport {
                    endpoint: self.url.clone(),
                    detail: e.to_string(),
                })?;

            let status = response.status();
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(ListError::Unauthorized {
                    endpoint: self.url.clone(),
                });
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ListError::UpstreamStatus {
                    endpoint: self.url.clone(),
                    status: status.as_u16(),
                    body: excerpt(&body),
                });
            }

            response
                .json::<RecordPage<R>>()
                .await
                .map_err(|e| ListError::MalformedResponse {
                    endpoint: self.url.clone(),
                    detail: e.to_string(),
                })
        })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LEN {
        return body.to_owned();
    }
    let mut cut = BODY_EXCERPT_LEN;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    body[..cut].to_owned()
}
