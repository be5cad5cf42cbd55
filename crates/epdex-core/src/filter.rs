//! Filter-state store: named filter values plus the current page.
//!
//! The store enforces the pagination-reset invariant at its single mutation
//! entry point: any change to a filter value resets the page to 1 in the
//! same call, so two same-tick filter changes can never lose the reset.
//! Filter keys are a closed set declared at construction; writes to unknown
//! keys are rejected as no-ops.

use std::collections::BTreeMap;

use tracing::warn;

use crate::query::{FILTER_ALL, QuerySpec};

/// Named filter values and pagination for one list instance.
///
/// `page_size` is fixed at construction and never changes. Every declared
/// filter starts at the [`FILTER_ALL`] sentinel (no constraint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    page: u32,
    page_size: u32,
    /// Declaration order of filter keys, used for query serialization.
    keys: Vec<String>,
    values: BTreeMap<String, String>,
}

impl FilterState {
    /// Create a store with the given fixed page size and declared filter
    /// keys, all initially unconstrained.
    #[must_use]
    pub fn new<K: Into<String>>(page_size: u32, keys: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let values = keys
            .iter()
            .map(|k| (k.clone(), FILTER_ALL.to_owned()))
            .collect();
        Self {
            page: 1,
            page_size,
            keys,
            values,
        }
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Fixed page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Declared filter keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Current value of a declared filter, or `None` for unknown keys.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a named filter value, resetting the page to 1 in the same
    /// transition.
    ///
    /// Returns `true` when the stored value actually changed. Unknown keys
    /// are rejected as no-ops so the outgoing query stays a closed set.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> bool {
        let Some(slot) = self.values.get_mut(key) else {
            warn!(
                target: "epdex",
                key,
                "ignoring write to undeclared filter key"
            );
            return false;
        };
        let value = value.into();
        if *slot == value {
            return false;
        }
        *slot = value;
        self.page = 1;
        true
    }

    /// Reset every filter to the sentinel and the page to 1.
    ///
    /// Returns `true` when anything changed.
    pub fn clear_filters(&mut self) -> bool {
        let mut changed = false;
        for slot in self.values.values_mut() {
            if slot.as_str() != FILTER_ALL {
                *slot = FILTER_ALL.to_owned();
                changed = true;
            }
        }
        if changed {
            self.page = 1;
        }
        changed
    }

    /// Set the page directly. Bounds are the caller's responsibility; the
    /// controller validates against `total_pages` before calling.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Reset pagination to the first page (used when the effective search
    /// term changes).
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Active (non-sentinel) filters in declaration order.
    #[must_use]
    pub fn active_filters(&self) -> Vec<(String, String)> {
        self.keys
            .iter()
            .filter_map(|k| {
                let v = self.values.get(k)?;
                (v != FILTER_ALL).then(|| (k.clone(), v.clone()))
            })
            .collect()
    }

    /// Build the outgoing query for the current state and committed search
    /// term.
    #[must_use]
    pub fn query(&self, search: &str) -> QuerySpec {
        QuerySpec {
            page: self.page,
            page_size: self.page_size,
            search: (!search.is_empty()).then(|| search.to_owned()),
            filters: self.active_filters(),
        }
    }
}
