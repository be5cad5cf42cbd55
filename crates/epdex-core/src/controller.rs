//! The list controller: composition root wiring the debounce buffer, the
//! filter store, epoch-gated fetch coordination, and the selection basket.
//!
//! The controller is a deterministic state machine with no timers or I/O of
//! its own. The host applies [`Intent`]s (user actions, session changes) and
//! [`HostEvent`]s (timer elapses, fetch completions), then drains
//! [`Command`]s to execute. Draining is what coalesces same-tick changes: a
//! batch of intents produces at most one debounce schedule and one fetch,
//! built from the latest state snapshot.
//!
//! The single most important property lives here: a fetch completion is
//! applied only when its epoch equals the latest issued epoch, so an older
//! request's response can never overwrite a newer one's, regardless of
//! network arrival order.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::basket::{SelectionBasket, ToggleOutcome};
use crate::config::ControllerConfig;
use crate::debounce::{DebounceOutcome, DebounceTicket, DebouncedInput};
use crate::error::{ListError, ListOutcome};
use crate::filter::FilterState;
use crate::metrics::ControllerMetrics;
use crate::pagewin::visible_window;
use crate::query::QuerySpec;
use crate::session::SessionState;
use crate::view::{FetchPhase, ListViewState, RecordPage};

/// A record that can be listed and staged for comparison.
pub trait ListRecord: Clone + Send + Sync + 'static {
    /// Stable identifier used for selection membership.
    fn record_id(&self) -> &str;
}

/// User- and host-originated inputs.
#[derive(Debug, Clone)]
pub enum Intent<R> {
    /// Raw search input changed (one keystroke's worth).
    SearchInput(String),
    /// A named filter changed; resets pagination.
    SetFilter {
        /// Declared filter key.
        key: String,
        /// New value, possibly the `"all"` sentinel.
        value: String,
    },
    /// Reset every named filter to the sentinel.
    ClearFilters,
    /// Jump to a page. Out-of-range requests are rejected silently.
    SetPage(u32),
    /// Stage or unstage a record for comparison.
    ToggleSelection(R),
    /// Unstage everything.
    ClearSelection,
    /// Enter the comparison view (requires two or more staged records).
    EnterComparison,
    /// Leave the comparison view.
    ExitComparison,
    /// Re-run the current query after a failure.
    Retry,
    /// The session collaborator reported a new credential state.
    SessionChanged(SessionState),
}

/// Asynchronous completions delivered by the host.
#[derive(Debug, Clone)]
pub enum HostEvent<R> {
    /// A debounce timer fired.
    DebounceElapsed {
        /// Generation the timer was armed for.
        generation: u64,
    },
    /// A fetch resolved.
    FetchCompleted {
        /// Epoch the fetch was issued with.
        epoch: u64,
        /// Result page or absorbed failure.
        outcome: Result<RecordPage<R>, ListError>,
    },
}

/// Work the host must execute after a drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Arm (or re-arm) the search debounce timer. Supersedes any earlier
    /// timer; the host should cancel the previous one.
    ScheduleDebounce {
        /// Generation to report back on elapse.
        generation: u64,
        /// Delay before the elapse.
        delay_ms: u64,
    },
    /// Issue a list request for `query`, reporting back with `epoch`.
    StartFetch {
        /// Epoch to report back on completion.
        epoch: u64,
        /// Fully resolved query parameters.
        query: QuerySpec,
        /// Opaque bearer token for the request.
        token: String,
    },
}

/// Deterministic controller for one paginated, filterable list view.
#[derive(Debug)]
pub struct ListController<R: ListRecord> {
    config: ControllerConfig,
    filters: FilterState,
    search: DebouncedInput,
    session: SessionState,
    basket: SelectionBasket<R>,
    comparing: bool,

    phase: FetchPhase,
    items: Vec<R>,
    total_count: u64,
    error: Option<ListError>,

    epoch: u64,
    fetch_queued: bool,
    pending_debounce: Option<DebounceTicket>,

    metrics: Arc<ControllerMetrics>,
}

impl<R: ListRecord> ListController<R> {
    /// Create a controller for the given configuration.
    ///
    /// The first fetch is queued immediately and issued on the first drain
    /// with a ready session.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidConfig`] when the configuration fails
    /// validation.
    pub fn new(config: ControllerConfig) -> ListOutcome<Self> {
        config.validate()?;
        let filters = config.filter_state();
        let search = DebouncedInput::new(config.debounce_ms);
        let basket = SelectionBasket::new(config.basket_capacity);
        Ok(Self {
            config,
            filters,
            search,
            session: SessionState::unauthenticated(),
            basket,
            comparing: false,
            phase: FetchPhase::Idle,
            items: Vec::new(),
            total_count: 0,
            error: None,
            epoch: 0,
            fetch_queued: true,
            pending_debounce: None,
            metrics: Arc::new(ControllerMetrics::default()),
        })
    }

    /// Shared metrics handle.
    #[must_use]
    pub fn metrics(&self) -> Arc<ControllerMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Current fetch phase.
    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.filters.page()
    }

    /// Total pages for the current result set, at least 1.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let page_size = u64::from(self.filters.page_size());
        let pages = self.total_count.div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Committed (debounced) search term.
    #[must_use]
    pub fn committed_search(&self) -> &str {
        self.search.committed()
    }

    /// Staged records, insertion order.
    #[must_use]
    pub fn basket(&self) -> &SelectionBasket<R> {
        &self.basket
    }

    /// Whether the comparison view may be entered.
    #[must_use]
    pub fn comparison_allowed(&self) -> bool {
        self.basket.len() >= 2
    }

    /// Apply one intent. Commands are produced later by
    /// [`Self::drain_commands`], which coalesces a whole batch.
    pub fn apply_intent(&mut self, intent: Intent<R>) {
        match intent {
            Intent::SearchInput(raw) => {
                self.pending_debounce = Some(self.search.update(raw));
            }
            Intent::SetFilter { key, value } => {
                if self.filters.set_filter(&key, value) {
                    self.fetch_queued = true;
                }
            }
            Intent::ClearFilters => {
                if self.filters.clear_filters() {
                    self.fetch_queued = true;
                }
            }
            Intent::SetPage(page) => self.jump_to_page(page),
            Intent::ToggleSelection(record) => self.toggle_selection(record),
            Intent::ClearSelection => {
                self.basket.clear();
                if self.comparing {
                    self.exit_comparison();
                }
            }
            Intent::EnterComparison => {
                if self.comparison_allowed() {
                    self.comparing = true;
                } else {
                    debug!(
                        target: "epdex",
                        staged = self.basket.len(),
                        "comparison requires at least two staged records"
                    );
                }
            }
            Intent::ExitComparison => self.exit_comparison(),
            Intent::Retry => {
                self.fetch_queued = true;
            }
            Intent::SessionChanged(session) => {
                self.session = session;
            }
        }
    }

    /// Apply one asynchronous completion from the host.
    pub fn apply_event(&mut self, event: HostEvent<R>) {
        match event {
            HostEvent::DebounceElapsed { generation } => match self.search.elapse(generation) {
                DebounceOutcome::Stale => {
                    ControllerMetrics::bump(&self.metrics.debounce_stale);
                    debug!(target: "epdex", generation, "ignoring superseded debounce elapse");
                }
                DebounceOutcome::Unchanged => {}
                DebounceOutcome::Committed => {
                    self.filters.reset_page();
                    self.fetch_queued = true;
                }
            },
            HostEvent::FetchCompleted { epoch, outcome } => self.complete_fetch(epoch, outcome),
        }
    }

    /// Drain the commands implied by everything applied since the last
    /// drain: at most one debounce schedule and at most one fetch.
    ///
    /// While the session is not ready the fetch trigger stays queued and the
    /// controller remains idle.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(2);

        if let Some(ticket) = self.pending_debounce.take() {
            ControllerMetrics::bump(&self.metrics.debounce_scheduled);
            commands.push(Command::ScheduleDebounce {
                generation: ticket.generation,
                delay_ms: ticket.delay_ms,
            });
        }

        if !self.fetch_queued {
            return commands;
        }
        let Some(token) = self.session.token.clone().filter(|_| self.session.is_ready()) else {
            return commands;
        };

        self.fetch_queued = false;

        if let Some(policy) = &self.config.short_circuit
            && policy.applies(&self.filters)
        {
            ControllerMetrics::bump(&self.metrics.short_circuits);
            debug!(
                target: "epdex",
                page = self.filters.page(),
                "filter combination known empty, answering locally"
            );
            // A local answer supersedes any fetch still in flight.
            self.epoch += 1;
            self.items.clear();
            self.total_count = 0;
            self.phase = FetchPhase::Success;
            self.error = None;
            return commands;
        }

        self.epoch += 1;
        self.phase = FetchPhase::Loading;
        self.error = None;
        ControllerMetrics::bump(&self.metrics.fetches_started);
        let query = self.filters.query(self.search.committed());
        debug!(
            target: "epdex",
            epoch = self.epoch,
            page = query.page,
            "starting fetch"
        );
        commands.push(Command::StartFetch {
            epoch: self.epoch,
            query,
            token,
        });
        commands
    }

    /// Build the view snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> ListViewState<R> {
        let total_pages = self.total_pages();
        ListViewState {
            items: self.items.clone(),
            total_count: self.total_count,
            total_pages,
            current_page: self.filters.page(),
            phase: self.phase,
            error: self.error.clone(),
            visible_pages: visible_window(
                self.filters.page(),
                total_pages,
                self.config.window_delta,
            ),
            skeleton_count: if self.phase == FetchPhase::Loading {
                self.filters.page_size()
            } else {
                0
            },
            search_raw: self.search.raw().to_owned(),
            search_committed: self.search.committed().to_owned(),
            selected_ids: self.basket.ids(),
            comparing: self.comparing,
            comparison_allowed: self.comparison_allowed(),
        }
    }

    fn jump_to_page(&mut self, page: u32) {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            ControllerMetrics::bump(&self.metrics.page_jumps_rejected);
            debug!(
                target: "epdex",
                page,
                total_pages,
                "rejecting out-of-range page jump"
            );
            return;
        }
        if page == self.filters.page() {
            return;
        }
        self.filters.set_page(page);
        self.fetch_queued = true;
    }

    fn toggle_selection(&mut self, record: R) {
        let id = record.record_id().to_owned();
        match self.basket.toggle(id, record) {
            ToggleOutcome::Added | ToggleOutcome::RejectedFull => {}
            ToggleOutcome::Removed => {
                if self.comparing && !self.comparison_allowed() {
                    self.exit_comparison();
                }
            }
        }
    }

    fn exit_comparison(&mut self) {
        if self.comparing {
            self.comparing = false;
            debug!(target: "epdex", staged = self.basket.len(), "leaving comparison view");
        }
    }

    fn complete_fetch(&mut self, epoch: u64, outcome: Result<RecordPage<R>, ListError>) {
        if epoch != self.epoch {
            ControllerMetrics::bump(&self.metrics.responses_discarded_stale);
            debug!(
                target: "epdex",
                epoch,
                latest = self.epoch,
                "discarding stale fetch completion"
            );
            return;
        }
        match outcome {
            Ok(page) => {
                ControllerMetrics::bump(&self.metrics.responses_applied);
                self.total_count = page.count;
                self.items = page.results;
                self.phase = FetchPhase::Success;
                self.error = None;
            }
            Err(error) => {
                ControllerMetrics::bump(&self.metrics.fetch_failures);
                warn!(target: "epdex", epoch, error = %error, "fetch failed");
                self.items.clear();
                self.total_count = 0;
                self.phase = FetchPhase::Error;
                self.error = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KnownEmptyStatus;
    use crate::pagewin::PageToken;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Rec {
        id: String,
    }

    impl Rec {
        fn new(id: &str) -> Self {
            Self { id: id.into() }
        }
    }

    impl ListRecord for Rec {
        fn record_id(&self) -> &str {
            &self.id
        }
    }

    fn config() -> ControllerConfig {
        ControllerConfig {
            filter_keys: vec!["classification".into(), "year".into(), "status".into()],
            ..ControllerConfig::default()
        }
    }

    fn authed(controller: &mut ListController<Rec>) {
        controller.apply_intent(Intent::SessionChanged(SessionState::authenticated("tok")));
    }

    fn page(count: u64, ids: &[&str]) -> RecordPage<Rec> {
        RecordPage {
            count,
            results: ids.iter().map(|id| Rec::new(id)).collect(),
        }
    }

    fn single_fetch(commands: &[Command]) -> (u64, QuerySpec) {
        let fetches: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                Command::StartFetch { epoch, query, .. } => Some((*epoch, query.clone())),
                Command::ScheduleDebounce { .. } => None,
            })
            .collect();
        assert_eq!(fetches.len(), 1, "expected exactly one fetch in {commands:?}");
        fetches[0].clone()
    }

    #[test]
    fn idle_until_session_ready() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        assert!(c.drain_commands().is_empty());
        assert_eq!(c.phase(), FetchPhase::Idle);

        authed(&mut c);
        let (epoch, query) = single_fetch(&c.drain_commands());
        assert_eq!(epoch, 1);
        assert_eq!(query.page, 1);
        assert_eq!(query.search, None);
        assert_eq!(c.phase(), FetchPhase::Loading);
    }

    #[test]
    fn fetch_carries_session_token() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        let commands = c.drain_commands();
        match &commands[0] {
            Command::StartFetch { token, .. } => assert_eq!(token, "tok"),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn same_tick_changes_coalesce_into_one_fetch() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(30, &["a"])),
        });

        c.apply_intent(Intent::SetFilter {
            key: "year".into(),
            value: "2024".into(),
        });
        c.apply_intent(Intent::SetFilter {
            key: "classification".into(),
            value: "cement".into(),
        });
        let (epoch, query) = single_fetch(&c.drain_commands());
        assert_eq!(epoch, 2, "one epoch for the whole batch");
        assert_eq!(query.filter_value("year"), Some("2024"));
        assert_eq!(query.filter_value("classification"), Some("cement"));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn filter_change_resets_page() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(50, &["a"])),
        });

        c.apply_intent(Intent::SetPage(3));
        c.drain_commands();
        assert_eq!(c.current_page(), 3);

        c.apply_intent(Intent::SetFilter {
            key: "status".into(),
            value: "verified".into(),
        });
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn out_of_range_page_jump_rejected_without_fetch() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(25, &["a"])),
        });
        assert_eq!(c.total_pages(), 3);

        c.apply_intent(Intent::SetPage(4));
        c.apply_intent(Intent::SetPage(0));
        assert!(c.drain_commands().is_empty());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.metrics().snapshot().page_jumps_rejected, 2);
    }

    #[test]
    fn debounce_commits_once_per_burst() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(0, &[])),
        });

        c.apply_intent(Intent::SearchInput("a".into()));
        c.apply_intent(Intent::SearchInput("ac".into()));
        c.apply_intent(Intent::SearchInput("acme".into()));
        let commands = c.drain_commands();
        assert_eq!(
            commands,
            vec![Command::ScheduleDebounce {
                generation: 3,
                delay_ms: 400
            }],
            "a burst schedules only the newest generation and no fetch"
        );

        c.apply_event(HostEvent::DebounceElapsed { generation: 1 });
        assert!(c.drain_commands().is_empty(), "stale elapse is inert");

        c.apply_event(HostEvent::DebounceElapsed { generation: 3 });
        let (_, query) = single_fetch(&c.drain_commands());
        assert_eq!(query.search.as_deref(), Some("acme"));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn committed_empty_search_still_fetches() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(0, &[])),
        });

        c.apply_intent(Intent::SearchInput("acme".into()));
        c.drain_commands();
        c.apply_event(HostEvent::DebounceElapsed { generation: 1 });
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 2,
            outcome: Ok(page(1, &["a"])),
        });

        c.apply_intent(Intent::SearchInput(String::new()));
        c.drain_commands();
        c.apply_event(HostEvent::DebounceElapsed { generation: 2 });
        let (_, query) = single_fetch(&c.drain_commands());
        assert_eq!(query.search, None, "cleared search issues an unfiltered fetch");
    }

    #[test]
    fn stale_epoch_response_is_discarded() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();

        // Second trigger supersedes the first before it resolves.
        c.apply_intent(Intent::SetPage(1));
        c.apply_intent(Intent::SetFilter {
            key: "year".into(),
            value: "2023".into(),
        });
        c.drain_commands();

        c.apply_event(HostEvent::FetchCompleted {
            epoch: 2,
            outcome: Ok(page(2, &["new-a", "new-b"])),
        });
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(9, &["old"])),
        });

        let view = c.view();
        assert_eq!(view.total_count, 2, "late stale response must not win");
        assert_eq!(view.items, vec![Rec::new("new-a"), Rec::new("new-b")]);
        assert_eq!(c.metrics().snapshot().responses_discarded_stale, 1);
    }

    #[test]
    fn failure_resets_to_empty_and_records_error() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(12, &["a", "b"])),
        });

        c.apply_intent(Intent::Retry);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 2,
            outcome: Err(ListError::Transport {
                endpoint: "/api/epds".into(),
                detail: "timeout".into(),
            }),
        });

        let view = c.view();
        assert_eq!(view.phase, FetchPhase::Error);
        assert!(view.items.is_empty(), "stale data is not retained past a failure");
        assert_eq!(view.total_count, 0);
        assert_eq!(view.total_pages, 1);
        assert!(view.error.as_ref().is_some_and(ListError::is_fetch_failure));
    }

    #[test]
    fn retry_after_failure_clears_error_and_reloads() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Err(ListError::Transport {
                endpoint: "/api/epds".into(),
                detail: "refused".into(),
            }),
        });

        c.apply_intent(Intent::Retry);
        let (epoch, _) = single_fetch(&c.drain_commands());
        assert_eq!(epoch, 2);
        let view = c.view();
        assert_eq!(view.phase, FetchPhase::Loading);
        assert_eq!(view.error, None, "no stale error next to a spinner");
        assert_eq!(view.skeleton_count, 10);
    }

    #[test]
    fn short_circuit_answers_locally() {
        let mut cfg = config();
        cfg.short_circuit = Some(Arc::new(KnownEmptyStatus::new("status", "pending")));
        let mut c = ListController::<Rec>::new(cfg).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(40, &["a"])),
        });

        c.apply_intent(Intent::SetFilter {
            key: "status".into(),
            value: "pending".into(),
        });
        let commands = c.drain_commands();
        assert!(commands.is_empty(), "no network call for a known-empty bucket");

        let view = c.view();
        assert_eq!(view.phase, FetchPhase::Success);
        assert!(view.items.is_empty());
        assert_eq!(view.total_count, 0);
        assert!(!view.is_loading());
        assert_eq!(c.metrics().snapshot().short_circuits, 1);

        // Leaving the bucket resumes plain fetching.
        c.apply_intent(Intent::SetFilter {
            key: "status".into(),
            value: "verified".into(),
        });
        single_fetch(&c.drain_commands());
    }

    #[test]
    fn short_circuit_supersedes_in_flight_fetch() {
        let mut cfg = config();
        cfg.short_circuit = Some(Arc::new(KnownEmptyStatus::new("status", "pending")));
        let mut c = ListController::<Rec>::new(cfg).expect("config");
        authed(&mut c);
        c.drain_commands();

        c.apply_intent(Intent::SetFilter {
            key: "status".into(),
            value: "pending".into(),
        });
        assert!(c.drain_commands().is_empty());

        // The fetch issued before the policy kicked in resolves late; it
        // must not clobber the locally answered empty result.
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(50, &["late"])),
        });
        let view = c.view();
        assert_eq!(view.total_count, 0);
        assert!(view.items.is_empty());
        assert_eq!(view.phase, FetchPhase::Success);
        assert_eq!(c.metrics().snapshot().responses_discarded_stale, 1);
    }

    #[test]
    fn basket_toggle_and_capacity_via_intents() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        for id in ["a", "b", "c", "d"] {
            c.apply_intent(Intent::ToggleSelection(Rec::new(id)));
        }
        let view = c.view();
        assert_eq!(view.selected_ids, ["a", "b", "c"]);
        assert!(!view.is_selected("d"));

        c.apply_intent(Intent::ToggleSelection(Rec::new("b")));
        assert_eq!(c.view().selected_ids, ["a", "c"]);
    }

    #[test]
    fn comparison_requires_two_and_auto_exits() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        c.apply_intent(Intent::ToggleSelection(Rec::new("a")));
        c.apply_intent(Intent::EnterComparison);
        assert!(!c.view().comparing, "one record is not comparable");

        c.apply_intent(Intent::ToggleSelection(Rec::new("b")));
        c.apply_intent(Intent::EnterComparison);
        assert!(c.view().comparing);

        c.apply_intent(Intent::ToggleSelection(Rec::new("b")));
        let view = c.view();
        assert!(!view.comparing, "dropping below two leaves comparison");
        assert!(!view.comparison_allowed);
    }

    #[test]
    fn clear_selection_exits_comparison() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        c.apply_intent(Intent::ToggleSelection(Rec::new("a")));
        c.apply_intent(Intent::ToggleSelection(Rec::new("b")));
        c.apply_intent(Intent::EnterComparison);
        c.apply_intent(Intent::ClearSelection);
        let view = c.view();
        assert!(!view.comparing);
        assert!(view.selected_ids.is_empty());
    }

    #[test]
    fn selection_is_independent_of_fetching() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_intent(Intent::ToggleSelection(Rec::new("a")));
        assert!(
            c.drain_commands().is_empty(),
            "toggles must not trigger fetches"
        );
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(3, &["x"])),
        });
        assert!(c.view().is_selected("a"), "selection survives result replacement");
    }

    #[test]
    fn view_reports_pager_window() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(100, &["a"])),
        });
        c.apply_intent(Intent::SetPage(5));
        c.drain_commands();
        let view = c.view();
        assert_eq!(view.total_pages, 10);
        assert_eq!(
            view.visible_pages,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn session_loss_queues_retry_until_ready() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(1, &["a"])),
        });

        c.apply_intent(Intent::SessionChanged(SessionState::unauthenticated()));
        c.apply_intent(Intent::Retry);
        assert!(c.drain_commands().is_empty(), "no fetch without a credential");

        c.apply_intent(Intent::SessionChanged(SessionState::authenticated("tok2")));
        let (epoch, _) = single_fetch(&c.drain_commands());
        assert_eq!(epoch, 2, "queued trigger fires once the session is ready");
    }

    #[test]
    fn total_pages_rounds_up() {
        let mut c = ListController::<Rec>::new(config()).expect("config");
        authed(&mut c);
        c.drain_commands();
        c.apply_event(HostEvent::FetchCompleted {
            epoch: 1,
            outcome: Ok(page(21, &["a"])),
        });
        assert_eq!(c.total_pages(), 3);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let cfg = ControllerConfig {
            page_size: 0,
            ..ControllerConfig::default()
        };
        assert!(ListController::<Rec>::new(cfg).is_err());
    }
}
