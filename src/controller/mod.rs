// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke-driven search state machine.
//!
//! The controller sits between a text field and a [`RankingSession`]. The
//! host forwards input events (query changes, arrow keys, hover, confirm,
//! focus changes) and reads back plain state: the ranked items, a loading
//! flag, whether the result list should be shown, and which row is
//! highlighted. Drawing any of that is the host's business.
//!
//! ```text
//!            query >= min                    commit
//!   Idle ─────────────────▶ Searching ──▶ Results ──────▶ Committed
//!    ▲                         │   ▲          │               │
//!    └──── query < min ────────┘   └─ query ──┘               │
//!    ▲                                                        │
//!    └────────── next user edit (programmatic echo skipped) ──┘
//! ```
//!
//! With a debounce window configured, a query change only schedules a
//! pass. The host calls [`SearchController::poll`] (or `poll_at`) from its
//! event loop; the pass runs against whatever the query is at that moment
//! and writes its results into the session. Nothing reads a return value
//! from a deferred pass.

mod cursor;
mod debounce;

pub use cursor::SelectionCursor;
pub use debounce::Debouncer;

use crate::options::SearchOptions;
use crate::session::RankingSession;
use crate::types::{Corpus, Item};
use std::fmt;
use std::time::Instant;

/// Listener for committed selections.
pub type SelectedHandler = Box<dyn FnMut(&Item)>;

/// Listener echoing every query change back to the host.
pub type QueryHandler = Box<dyn FnMut(&str)>;

/// Read-only view of the controller for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState<'a> {
    pub query: &'a str,
    pub results: Vec<&'a Item>,
    pub loading: bool,
    pub focused: bool,
    pub selected_index: Option<usize>,
}

/// Builder capturing options and optional listeners.
///
/// Listeners can only be registered here; a controller built without one
/// never emits that event.
pub struct SearchControllerBuilder {
    corpus: Corpus,
    options: SearchOptions,
    on_selected: Option<SelectedHandler>,
    on_query_changed: Option<QueryHandler>,
}

impl SearchControllerBuilder {
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn on_selected(mut self, handler: impl FnMut(&Item) + 'static) -> Self {
        self.on_selected = Some(Box::new(handler));
        self
    }

    pub fn on_query_changed(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_query_changed = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> SearchController {
        let debouncer = self.options.debounce_wait().map(Debouncer::new);
        tracing::debug!(
            items = self.corpus.len(),
            debounce = ?debouncer.as_ref().map(Debouncer::wait),
            limit = ?self.options.result_limit,
            min_length = self.options.minimum_trigger_length,
            "search controller ready"
        );
        SearchController {
            session: RankingSession::new(self.corpus, &self.options),
            query_text: String::new(),
            focused: false,
            cursor: SelectionCursor::none(),
            suppress_next_trigger: false,
            debouncer,
            on_selected: self.on_selected,
            on_query_changed: self.on_query_changed,
        }
    }
}

pub struct SearchController {
    session: RankingSession,
    query_text: String,
    focused: bool,
    cursor: SelectionCursor,
    /// Set by a commit so the echo of the label written into the field does
    /// not start a new search.
    suppress_next_trigger: bool,
    debouncer: Option<Debouncer>,
    on_selected: Option<SelectedHandler>,
    on_query_changed: Option<QueryHandler>,
}

impl fmt::Debug for SearchController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController")
            .field("session", &self.session)
            .field("query_text", &self.query_text)
            .field("focused", &self.focused)
            .field("cursor", &self.cursor)
            .field("suppress_next_trigger", &self.suppress_next_trigger)
            .field("debouncer", &self.debouncer)
            .field("on_selected", &self.on_selected.is_some())
            .field("on_query_changed", &self.on_query_changed.is_some())
            .finish()
    }
}

impl SearchController {
    pub fn builder(corpus: impl Into<Corpus>) -> SearchControllerBuilder {
        SearchControllerBuilder {
            corpus: corpus.into(),
            options: SearchOptions::default(),
            on_selected: None,
            on_query_changed: None,
        }
    }

    /// Controller with the given options and no listeners.
    pub fn new(corpus: impl Into<Corpus>, options: SearchOptions) -> Self {
        Self::builder(corpus).options(options).build()
    }

    // ========================================================================
    // INPUT EVENTS
    // ========================================================================

    /// The query field changed to `text`.
    pub fn on_query_changed(&mut self, text: impl Into<String>) {
        self.on_query_changed_at(text, Instant::now());
    }

    /// Same as [`Self::on_query_changed`] with an explicit timestamp for the
    /// debounce window.
    pub fn on_query_changed_at(&mut self, text: impl Into<String>, now: Instant) {
        self.query_text = text.into();
        if let Some(echo) = self.on_query_changed.as_mut() {
            echo(&self.query_text);
        }

        if self.suppress_next_trigger {
            self.suppress_next_trigger = false;
            tracing::trace!(query = %self.query_text, "skipping programmatic query change");
            return;
        }

        self.focused = true;
        self.cursor.reset();

        if !self.session.triggers(&self.query_text) {
            if let Some(debouncer) = self.debouncer.as_mut() {
                debouncer.cancel();
            }
            self.session.clear();
            return;
        }

        self.session.begin_loading();
        match self.debouncer.as_mut() {
            Some(debouncer) => {
                if debouncer.schedule(now) {
                    tracing::trace!(query = %self.query_text, "rescheduled pending ranking pass");
                }
            }
            None => {
                self.session.run(&self.query_text);
            }
        }
    }

    /// Run a debounced pass if its window has elapsed. Returns `true` if a
    /// pass ran.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        let due = self
            .debouncer
            .as_mut()
            .is_some_and(|debouncer| debouncer.poll(now));
        if due {
            self.run_deferred();
        }
        due
    }

    /// Run a pending debounced pass right away. Returns `true` if one ran.
    pub fn flush(&mut self) -> bool {
        let pending = self.debouncer.as_mut().is_some_and(Debouncer::flush);
        if pending {
            self.run_deferred();
        }
        pending
    }

    /// A deferred pass replaces the list the cursor was moving over.
    fn run_deferred(&mut self) {
        self.session.run(&self.query_text);
        self.cursor.reset();
    }

    /// Whether a debounced pass is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.debouncer.as_ref().is_some_and(Debouncer::is_pending)
    }

    /// Time at which the pending debounced pass becomes due.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.as_ref().and_then(Debouncer::deadline)
    }

    pub fn move_selection_down(&mut self) -> Option<usize> {
        let selected = self.cursor.move_down(self.session.len());
        tracing::trace!(?selected, "selection down");
        selected
    }

    pub fn move_selection_up(&mut self) -> Option<usize> {
        let selected = self.cursor.move_up(self.session.len());
        tracing::trace!(?selected, "selection up");
        selected
    }

    /// Highlight the row at `index` (pointer hover). Out-of-range indices are
    /// ignored and return `false`.
    pub fn set_selection(&mut self, index: usize) -> bool {
        self.cursor.set(index, self.session.len())
    }

    /// Confirm the highlighted result.
    ///
    /// Writes its label into the query, hides the list, arms suppression for
    /// the echo of that write, and notifies the `on_selected` listener.
    /// Returns the committed item, or `None` when nothing is highlighted.
    pub fn commit_selection(&mut self) -> Option<&Item> {
        let position = self.cursor.index()?;
        let item = self.session.result_mut(position)?;
        item.clear_match_offset();
        let label = item.label.clone();

        if self.debouncer.as_mut().is_some_and(Debouncer::cancel) {
            self.session.cancel_loading();
        }

        if let Some(handler) = self.on_selected.as_mut() {
            if let Some(item) = self.session.result(position) {
                handler(item);
            }
        }

        tracing::debug!(position, label = %label, "selection committed");
        self.query_text = label;
        self.focused = false;
        // INVARIANT: COMMIT_SUPPRESSES_ONE_TRIGGER
        self.suppress_next_trigger = true;
        self.session.result(position)
    }

    /// The field gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// The field lost focus. Results and cursor are kept for a later refocus.
    pub fn unfocus(&mut self) {
        self.focused = false;
    }

    // ========================================================================
    // OBSERVABLE STATE
    // ========================================================================

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn results(&self) -> impl Iterator<Item = &Item> + '_ {
        self.session.result_items()
    }

    pub fn result_count(&self) -> usize {
        self.session.len()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.cursor
            .index()
            .and_then(|position| self.session.result(position))
    }

    pub fn session(&self) -> &RankingSession {
        &self.session
    }

    pub fn state(&self) -> SearchState<'_> {
        SearchState {
            query: &self.query_text,
            results: self.session.result_items().collect(),
            loading: self.session.is_loading(),
            focused: self.focused,
            selected_index: self.cursor.index(),
        }
    }
}
