// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models for each screen of the client.
//!
//! A view owns its list exclusively, replaces it wholesale on `load()`, and
//! applies confirmed mutations through [`crate::reconcile`]. Failures are
//! handled here: logged, turned into a notification or an explicit failed
//! state, and never propagated further.

pub mod challenges;
pub mod events;
pub mod my_challenges;
pub mod stats;
pub mod tips;

pub use challenges::{
    ChallengeDetailView, ChallengeFilterView, ChallengesView, MyCreatedChallengesView,
    RunningChallengesView,
};
pub use events::{EventScope, EventsView};
pub use my_challenges::MyChallengesView;
pub use stats::StatsView;
pub use tips::{MyTipsView, RecentTipsView, TipsView};

use crate::error::ClientError;
use std::fmt;

/// Result of a user action after all error handling is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Backend confirmed and local state was patched
    Applied,
    /// Nothing to do; no request was sent
    Skipped,
    /// Backend confirmed but no loaded record had that ID
    Unmatched,
    /// Refused locally or by the backend; the user was notified
    Rejected,
}

impl ActionOutcome {
    /// Outcome of a confirmed write, given whether the local patch found
    /// its record.
    pub(crate) fn confirmed(matched: bool) -> Self {
        if matched {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Unmatched
        }
    }
}

/// Load state of a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    /// Loaded successfully with no entries
    Empty,
    Loaded,
    /// Load failed; carries the message shown to the user
    Failed(String),
}

impl LoadState {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

/// A list plus its load state.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    state: LoadState,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
        }
    }
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub(crate) fn begin(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Replace the list with a load result. On error the list is emptied
    /// and `failure` is what the user sees.
    pub(crate) fn finish(
        &mut self,
        result: Result<Vec<T>, ClientError>,
        what: &'static str,
        failure: &str,
    ) {
        match result {
            Ok(items) => {
                tracing::debug!(what, count = items.len(), "Loaded");
                self.items = items;
                self.refresh_state();
            }
            Err(e) => {
                tracing::error!(what, error = %e, "Load failed");
                self.items.clear();
                self.state = LoadState::Failed(failure.to_string());
            }
        }
    }

    pub(crate) fn fail(&mut self, failure: &str) {
        self.items.clear();
        self.state = LoadState::Failed(failure.to_string());
    }

    /// Recompute empty/loaded after the list changed.
    pub(crate) fn refresh_state(&mut self) {
        self.state = if self.items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Loaded
        };
    }

    /// Render the state, or each item with `item` when loaded.
    pub(crate) fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        empty: &str,
        limit: usize,
        mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        match &self.state {
            LoadState::Idle | LoadState::Loading => writeln!(f, "{}: loading...", heading),
            LoadState::Empty => writeln!(f, "{}: {}", heading, empty),
            LoadState::Failed(msg) => writeln!(f, "{}: error: {}", heading, msg),
            LoadState::Loaded => {
                writeln!(f, "{} ({})", heading, self.items.len())?;
                for entry in self.items.iter().take(limit) {
                    item(f, entry)?;
                }
                Ok(())
            }
        }
    }
}
