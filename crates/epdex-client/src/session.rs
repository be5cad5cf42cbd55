//! Token providers: how hosts source the session state they inject.
//!
//! Credential refresh is the session collaborator's responsibility; the
//! implementations here cover the trivial cases (fixed token, anonymous) and
//! the trait is the seam for anything richer. Hosts read the provider and
//! push the result into the controller via `Intent::SessionChanged`.

use epdex_core::SessionState;

/// Source of the current session state.
pub trait TokenProvider: Send + Sync {
    /// Current credential snapshot.
    fn session(&self) -> SessionState;
}

/// A fixed bearer token (service accounts, tests).
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Provider that always reports `token` as authenticated.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticToken {
    fn session(&self) -> SessionState {
        SessionState::authenticated(self.token.clone())
    }
}

/// No credential; controllers stay idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn session(&self) -> SessionState {
        SessionState::unauthenticated()
    }
}
