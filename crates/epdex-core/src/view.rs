//! View-facing projections: the wire page shape and the owned snapshot the
//! presentation layer renders.

use serde::{Deserialize, Serialize};

use crate::error::ListError;
use crate::pagewin::PageToken;

/// Fetch lifecycle phase.
///
/// `Idle` only exists before the first fetch (typically while the session is
/// not yet authenticated); each terminal phase transitions back to `Loading`
/// on the next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch initiated yet.
    #[default]
    Idle,
    /// A fetch is in flight for the latest epoch.
    Loading,
    /// The latest fetch resolved with a result page.
    Success,
    /// The latest fetch resolved with a failure.
    Error,
}

/// One page of records as returned by a list endpoint.
///
/// Deserialization is strict: a body missing `count` or `results` is a
/// malformed response, not an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage<R> {
    /// Total matching records across all pages.
    pub count: u64,
    /// Records for the requested page, in server order.
    pub results: Vec<R>,
}

impl<R> RecordPage<R> {
    /// The canonical empty page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
        }
    }
}

/// Owned snapshot of controller state for the presentation layer.
///
/// Produced after every applied intent or event; rendering never reaches
/// back into the controller.
#[derive(Debug, Clone)]
pub struct ListViewState<R> {
    /// Current page of records, server order preserved.
    pub items: Vec<R>,
    /// Total matching records.
    pub total_count: u64,
    /// Total pages, at least 1 even when empty.
    pub total_pages: u32,
    /// Current page, 1-based.
    pub current_page: u32,
    /// Fetch lifecycle phase.
    pub phase: FetchPhase,
    /// Latest fetch failure, cleared when a new fetch starts.
    pub error: Option<ListError>,
    /// Pager tokens for the current position.
    pub visible_pages: Vec<PageToken>,
    /// Number of placeholder rows to render while loading (zero otherwise).
    pub skeleton_count: u32,
    /// Raw search input (echoed back to the input field).
    pub search_raw: String,
    /// Committed search term (what the current result set reflects).
    pub search_committed: String,
    /// Staged record ids, insertion order.
    pub selected_ids: Vec<String>,
    /// Whether the comparison view is active.
    pub comparing: bool,
    /// Whether comparison may be entered (two or more staged records).
    pub comparison_allowed: bool,
}

impl<R> ListViewState<R> {
    /// Whether a loading indicator should be rendered.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Whether a record id is staged for comparison.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|s| s == id)
    }
}
