/// Unified error type covering all failure modes of the list controller and
/// its fetch layer.
///
/// Every variant carries an actionable message. Fetch-layer variants are
/// stored in controller state and cloned into view snapshots, so they hold
/// rendered detail strings rather than boxed sources. None of these are
/// fatal: the controller absorbs them into its `error` field and the next
/// user-triggered fetch starts clean.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    // === Fetch errors ===
    /// The request could not complete (DNS, connect, timeout, ...).
    #[error("Transport failure contacting {endpoint}: {detail}. Check connectivity and retry.")]
    Transport {
        /// Endpoint the request was addressed to.
        endpoint: String,
        /// Rendered cause from the HTTP client.
        detail: String,
    },

    /// The server rejected the credential (HTTP 401).
    ///
    /// Surfaced distinctly from other upstream failures because the session
    /// collaborator must re-authenticate before a retry can succeed.
    #[error("Unauthorized at {endpoint}. The session token is missing or expired; re-authenticate and retry.")]
    Unauthorized {
        /// Endpoint that rejected the credential.
        endpoint: String,
    },

    /// The server answered with a non-success status other than 401.
    #[error("Upstream error ({status}) at {endpoint}: {body}")]
    UpstreamStatus {
        /// Endpoint that produced the status.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt, possibly empty.
        body: String,
    },

    /// The response body did not match the `{count, results}` contract.
    #[error("Malformed list response from {endpoint}: {detail}. Expected an object with count and results.")]
    MalformedResponse {
        /// Endpoint that produced the body.
        endpoint: String,
        /// What failed to parse.
        detail: String,
    },

    // === Configuration errors ===
    /// A configuration value is invalid.
    #[error("Invalid config: {field} = \"{value}\" {reason}")]
    InvalidConfig {
        /// Which config field.
        field: &'static str,
        /// The invalid value.
        value: String,
        /// Why it is invalid.
        reason: &'static str,
    },
}

impl ListError {
    /// Whether this failure signals the session collaborator must
    /// re-authenticate before any retry can succeed.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Whether this failure came from the fetch layer (as opposed to
    /// configuration).
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::InvalidConfig { .. })
    }
}

/// Convenience alias used throughout the epdex crates.
pub type ListOutcome<T> = Result<T, ListError>;
