//! Debounced input buffer for rapidly-changing text values.
//!
//! [`DebouncedInput`] separates the raw value (every keystroke) from the
//! committed value (what fetching uses). Each raw update bumps a generation
//! counter and hands back a [`DebounceTicket`] for the host to schedule; a
//! later elapse event is honored only if its generation is still current, so
//! no timer ever commits a stale value. The host may additionally cancel the
//! superseded timer outright; correctness does not depend on it.
//!
//! An empty committed string is a valid value: clearing a previous search
//! must still propagate.

/// Scheduling request produced by a raw update.
///
/// The host arms a timer for `delay_ms` and reports back with the same
/// `generation` when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    /// Generation this timer belongs to.
    pub generation: u64,
    /// Delay before the value may commit.
    pub delay_ms: u64,
}

/// Result of an elapse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// The generation was superseded by a newer raw update; nothing commits.
    Stale,
    /// The generation was current but the raw value equals what is already
    /// committed; nothing changes.
    Unchanged,
    /// The raw value committed; the effective value changed.
    Committed,
}

/// Raw/committed string pair with generation-counted timer semantics.
#[derive(Debug, Clone)]
pub struct DebouncedInput {
    raw: String,
    committed: String,
    generation: u64,
    delay_ms: u64,
}

impl DebouncedInput {
    /// Create an empty buffer with the given stabilization delay.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            raw: String::new(),
            committed: String::new(),
            generation: 0,
            delay_ms,
        }
    }

    /// Latest raw value (pre-debounce).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Committed value (what fetching uses).
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Generation of the most recent raw update.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a raw update and return the timer to schedule.
    ///
    /// Invalidates any previously issued ticket: its elapse will report
    /// [`DebounceOutcome::Stale`].
    pub fn update(&mut self, raw: impl Into<String>) -> DebounceTicket {
        self.raw = raw.into();
        self.generation += 1;
        DebounceTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
        }
    }

    /// Handle a timer elapse for `generation`.
    ///
    /// Commits the raw value only when the generation is still current and
    /// the value differs from what is already committed.
    pub fn elapse(&mut self, generation: u64) -> DebounceOutcome {
        if generation != self.generation {
            return DebounceOutcome::Stale;
        }
        if self.raw == self.committed {
            return DebounceOutcome::Unchanged;
        }
        self.committed = self.raw.clone();
        DebounceOutcome::Committed
    }
}
