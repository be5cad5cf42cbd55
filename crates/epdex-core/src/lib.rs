//! Deterministic filtered-result controller core.
//!
//! This crate defines the state machine behind paginated, filterable,
//! debounced list views: the debounce buffer ([`DebouncedInput`]), the
//! filter-state store ([`FilterState`]), epoch-gated fetch coordination and
//! the composition root ([`ListController`]), the bounded selection basket
//! ([`SelectionBasket`]), and the pure pagination window
//! ([`visible_window`]).
//!
//! The core owns no timers, sockets, or runtime: hosts apply [`Intent`]s and
//! [`HostEvent`]s, drain [`Command`]s, and render [`ListViewState`]
//! snapshots. It is intended to be depended on by every async host and has
//! minimal external dependencies.

pub mod basket;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod pagewin;
pub mod query;
pub mod session;
pub mod tracing_support;
pub mod view;

pub use basket::{SelectionBasket, ToggleOutcome};
pub use config::{ControllerConfig, KnownEmptyStatus, ShortCircuit};
pub use controller::{Command, HostEvent, Intent, ListController, ListRecord};
pub use debounce::{DebounceOutcome, DebounceTicket, DebouncedInput};
pub use error::{ListError, ListOutcome};
pub use filter::FilterState;
pub use metrics::{ControllerMetrics, MetricsSnapshot};
pub use pagewin::{PageToken, visible_window};
pub use query::{FILTER_ALL, QuerySpec};
pub use session::{AuthStatus, SessionState};
pub use view::{FetchPhase, ListViewState, RecordPage};
