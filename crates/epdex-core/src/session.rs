//! Session boundary: the credential state injected by the host.
//!
//! The controller never fetches or refreshes credentials itself. The session
//! collaborator (out of scope here) pushes [`SessionState`] values in via
//! `Intent::SessionChanged`; while the session is not ready the controller
//! stays idle and queues its pending fetch trigger.

use serde::{Deserialize, Serialize};

/// Authentication status reported by the session collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// No credential; fetching is gated off.
    #[default]
    Unauthenticated,
    /// Credential resolution in progress; fetching is gated off.
    Loading,
    /// Credential available; fetching may proceed.
    Authenticated,
}

impl AuthStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Loading => "loading",
            Self::Authenticated => "authenticated",
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Credential snapshot as injected by the host.
///
/// The token is opaque to the controller: it is read once per initiated
/// fetch and passed through to the transport untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// Current authentication status.
    pub status: AuthStatus,
    /// Opaque bearer token, present when authenticated.
    pub token: Option<String>,
}

impl SessionState {
    /// No credential.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            token: None,
        }
    }

    /// Credential resolution in progress.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            status: AuthStatus::Loading,
            token: None,
        }
    }

    /// Authenticated with the given bearer token.
    #[must_use]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            token: Some(token.into()),
        }
    }

    /// Whether fetches may be initiated with this session.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.token.is_some()
    }
}
