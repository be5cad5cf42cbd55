//! Registry presets: the three list views as data.
//!
//! Each preset captures one backend list endpoint together with the
//! controller constants its view uses (page size, debounce delay, pager
//! width, declared filter axes). Hosts turn a preset into a
//! [`ControllerConfig`] and an [`HttpListEndpoint`] and wire them into a
//! driver.

use std::sync::Arc;

use epdex_core::{ControllerConfig, KnownEmptyStatus, ListOutcome, ShortCircuit};

use crate::endpoint::HttpListEndpoint;

/// One list view's endpoint and controller constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryPreset {
    /// Stable preset identifier.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Endpoint path under the API base URL.
    pub path: &'static str,
    /// Records per page.
    pub page_size: u32,
    /// Search stabilization delay in milliseconds.
    pub debounce_ms: u64,
    /// Pager window half-width.
    pub window_delta: u32,
    /// Comparison basket capacity.
    pub basket_capacity: usize,
    /// Declared filter axes, in query order.
    pub filter_keys: &'static [&'static str],
    /// Filter key/value combination the backend is known to serve empty,
    /// answered locally instead of fetched.
    known_empty: Option<(&'static str, &'static str)>,
}

impl RegistryPreset {
    /// All presets.
    pub const ALL: [Self; 3] = [epd_records(), product_portfolio(), company_users()];

    /// Build the controller configuration for this preset.
    #[must_use]
    pub fn controller_config(&self) -> ControllerConfig {
        let short_circuit = self.known_empty.map(|(key, value)| {
            Arc::new(KnownEmptyStatus::new(key, value)) as Arc<dyn ShortCircuit>
        });
        ControllerConfig {
            page_size: self.page_size,
            debounce_ms: self.debounce_ms,
            window_delta: self.window_delta,
            basket_capacity: self.basket_capacity,
            filter_keys: self.filter_keys.iter().map(|&k| k.to_owned()).collect(),
            short_circuit,
        }
    }

    /// Build the HTTP endpoint for this preset under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`epdex_core::ListError::Transport`] if the HTTP client
    /// cannot be built.
    pub fn endpoint(&self, base_url: &str) -> ListOutcome<HttpListEndpoint> {
        HttpListEndpoint::new(base_url, self.path)
    }
}

/// The declaration registry list.
///
/// The `pending` status bucket is answered locally: the backend currently
/// serves only pre-verified records, so that bucket is always empty. Remove
/// the policy once pending records exist server-side.
#[must_use]
pub const fn epd_records() -> RegistryPreset {
    RegistryPreset {
        id: "epd_records",
        label: "Declaration registry",
        path: "/api/v1/epds",
        page_size: 10,
        debounce_ms: 400,
        window_delta: 2,
        basket_capacity: 3,
        filter_keys: &["classification", "year", "status", "user"],
        known_empty: Some(("status", "pending")),
    }
}

/// The product portfolio grid.
#[must_use]
pub const fn product_portfolio() -> RegistryPreset {
    RegistryPreset {
        id: "product_portfolio",
        label: "Product portfolio",
        path: "/api/v1/products",
        page_size: 9,
        debounce_ms: 300,
        window_delta: 1,
        basket_capacity: 3,
        filter_keys: &["industry", "classification"],
        known_empty: None,
    }
}

/// The company user administration list.
#[must_use]
pub const fn company_users() -> RegistryPreset {
    RegistryPreset {
        id: "company_users",
        label: "Company users",
        path: "/api/v1/company/users",
        page_size: 10,
        debounce_ms: 500,
        window_delta: 1,
        basket_capacity: 3,
        filter_keys: &["role"],
        known_empty: None,
    }
}
