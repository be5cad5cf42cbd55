//! Configuration for one list-controller instance.
//!
//! [`ControllerConfig`] carries the per-instance constants (page size,
//! debounce delay, pager width, basket capacity, declared filter keys) and
//! the optional [`ShortCircuit`] policy. All fields have defaults; override
//! selectively, via environment variables, or load from a TOML file.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListOutcome};
use crate::filter::FilterState;
use crate::query::FILTER_ALL;

/// Policy deciding that a filter combination is known to yield an empty
/// result set, so the network call can be skipped entirely.
///
/// This encodes backend data-shape knowledge, not a business rule; it is
/// injected at configuration time precisely so it can be removed once the
/// backend starts populating the bucket in question.
pub trait ShortCircuit: Send + Sync + std::fmt::Debug {
    /// Whether the current filter state is known to produce no results.
    fn applies(&self, filters: &FilterState) -> bool;
}

/// Short-circuit on one filter key holding one specific value.
///
/// The observed case: a `status` bucket (`"pending"`) the backend never
/// populates because every served record is pre-verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownEmptyStatus {
    key: String,
    value: String,
}

impl KnownEmptyStatus {
    /// Short-circuit whenever `key` is set to `value`.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl ShortCircuit for KnownEmptyStatus {
    fn applies(&self, filters: &FilterState) -> bool {
        filters.value(&self.key) == Some(self.value.as_str())
    }
}

/// Per-instance controller configuration.
///
/// # Environment Variable Overrides
///
/// | Variable              | Field          | Default |
/// |-----------------------|----------------|---------|
/// | `EPDEX_DEBOUNCE_MS`   | `debounce_ms`  | `400`   |
/// | `EPDEX_WINDOW_DELTA`  | `window_delta` | `1`     |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Records per page. Fixed for the lifetime of the controller.
    /// Default: 10.
    pub page_size: u32,

    /// Search stabilization delay in milliseconds. Default: 400.
    pub debounce_ms: u64,

    /// Pager window half-width around the current page. Default: 1.
    pub window_delta: u32,

    /// Selection basket capacity. Default: 3.
    pub basket_capacity: usize,

    /// Declared filter keys, in query serialization order.
    pub filter_keys: Vec<String>,

    /// Optional known-empty policy.
    ///
    /// `None` means every trigger goes to the network.
    #[serde(skip)]
    pub short_circuit: Option<Arc<dyn ShortCircuit>>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            debounce_ms: 400,
            window_delta: 1,
            basket_capacity: 3,
            filter_keys: Vec::new(),
            short_circuit: None,
        }
    }
}

impl ControllerConfig {
    /// Load overrides from environment variables.
    ///
    /// Only overrides fields for which variables are set; invalid values are
    /// silently ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("EPDEX_DEBOUNCE_MS")
            && let Ok(ms) = val.parse::<u64>()
        {
            self.debounce_ms = ms;
        }
        if let Ok(val) = std::env::var("EPDEX_WINDOW_DELTA")
            && let Ok(delta) = val.parse::<u32>()
        {
            self.window_delta = delta;
        }
        self
    }

    /// Load from a TOML file, falling back to defaults when the file is
    /// missing or unparseable.
    #[must_use]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        std::fs::read_to_string(path).map_or_else(
            |_| Self::default(),
            |contents| match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        target: "epdex",
                        path = %path.display(),
                        error = %e,
                        "failed to parse controller config, using defaults"
                    );
                    Self::default()
                }
            },
        )
    }

    /// Validate invariants that defaults cannot guarantee once fields are
    /// overridden.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] on the first violated invariant.
    pub fn validate(&self) -> ListOutcome<()> {
        if self.page_size == 0 {
            return Err(ListError::InvalidConfig {
                field: "page_size",
                value: self.page_size.to_string(),
                reason: "must be at least 1",
            });
        }
        if self.basket_capacity == 0 {
            return Err(ListError::InvalidConfig {
                field: "basket_capacity",
                value: self.basket_capacity.to_string(),
                reason: "must be at least 1",
            });
        }
        if self.filter_keys.iter().any(|k| k.is_empty()) {
            return Err(ListError::InvalidConfig {
                field: "filter_keys",
                value: String::new(),
                reason: "keys must be non-empty strings",
            });
        }
        if self.filter_keys.iter().any(|k| k == FILTER_ALL) {
            return Err(ListError::InvalidConfig {
                field: "filter_keys",
                value: FILTER_ALL.to_string(),
                reason: "the sentinel value cannot be used as a key",
            });
        }
        Ok(())
    }

    /// Build the initial filter state for this configuration.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.page_size, self.filter_keys.iter().cloned())
    }
}
