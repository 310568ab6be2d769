// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tip lists: all tips, the latest few, and the signed-in user's own.

use super::{ActionOutcome, ListView, LoadState};
use crate::models::{Tip, TipUpdate};
use crate::reconcile;
use crate::validation::TipInput;
use crate::AppState;
use std::fmt;

const RECENT_TIPS: usize = 5;

/// Toggle the signed-in user's vote and apply the server's echo.
async fn upvote_in(list: &mut ListView<Tip>, state: &AppState, tip_id: &str) -> ActionOutcome {
    let session = match state.auth.require() {
        Ok(s) => s,
        Err(_) => {
            tracing::warn!(tip_id, "Vote attempted while signed out");
            state.notifier.error("Please login to vote!");
            return ActionOutcome::Rejected;
        }
    };

    match state.api.toggle_upvote(session, tip_id).await {
        Ok(vote) => {
            let matched =
                reconcile::apply_vote(list.items_mut(), tip_id, session.email(), vote.voted);
            if matched {
                tracing::info!(tip_id, voted = vote.voted, "Vote toggled");
            } else {
                tracing::warn!(tip_id, voted = vote.voted, "Vote confirmed for a tip not in the list");
            }
            ActionOutcome::confirmed(matched)
        }
        Err(e) => {
            tracing::error!(tip_id, error = %e, "Vote failed");
            state.notifier.client_error(&e);
            ActionOutcome::Rejected
        }
    }
}

fn render_tip(f: &mut fmt::Formatter<'_>, tip: &Tip) -> fmt::Result {
    writeln!(f, "  - {}", tip)
}

// ─── All Tips ────────────────────────────────────────────────

/// Every community tip.
#[derive(Debug, Default)]
pub struct TipsView {
    list: ListView<Tip>,
}

impl TipsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tips(&self) -> &[Tip] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        self.list.begin();
        let result = state.api.list_tips().await;
        self.list.finish(result, "tips", "Could not load tips.");
    }

    pub async fn upvote(&mut self, state: &AppState, tip_id: &str) -> ActionOutcome {
        upvote_in(&mut self.list, state, tip_id).await
    }
}

impl fmt::Display for TipsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list
            .render(f, "All Community Tips", "No tips found.", usize::MAX, render_tip)
    }
}

// ─── Recent Tips ─────────────────────────────────────────────

/// The newest few tips, as shown on the home page.
#[derive(Debug, Default)]
pub struct RecentTipsView {
    list: ListView<Tip>,
}

impl RecentTipsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tips(&self) -> &[Tip] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        self.list.begin();
        let result = state.api.list_tips().await.map(|mut tips| {
            // Newest first; tips without a timestamp sort last.
            tips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            tips.truncate(RECENT_TIPS);
            tips
        });
        self.list.finish(result, "recent tips", "Could not load tips.");
    }

    pub async fn upvote(&mut self, state: &AppState, tip_id: &str) -> ActionOutcome {
        upvote_in(&mut self.list, state, tip_id).await
    }
}

impl fmt::Display for RecentTipsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list
            .render(f, "Latest Community Tips", "No tips found.", RECENT_TIPS, render_tip)
    }
}

// ─── My Tips ─────────────────────────────────────────────────

/// Tips authored by the signed-in user, with edit and delete.
#[derive(Debug, Default)]
pub struct MyTipsView {
    list: ListView<Tip>,
}

impl MyTipsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tips(&self) -> &[Tip] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                self.list
                    .fail("Please log in to view and manage your tips.");
                return;
            }
        };

        self.list.begin();
        let result = state.api.my_tips(session).await;
        self.list.finish(
            result,
            "my tips",
            "Could not load your tips. Please try again later.",
        );
    }

    /// Save an edited tip. Invalid input is refused without a request.
    pub async fn update(&mut self, state: &AppState, tip_id: &str, input: &TipInput) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        let category = match (input.check(), input.category) {
            (Ok(()), Some(category)) => category,
            (result, _) => {
                tracing::warn!(tip_id, errors = ?result.err(), "Tip edit failed validation");
                state.notifier.error("Please ensure all fields are valid.");
                return ActionOutcome::Rejected;
            }
        };

        let update = TipUpdate {
            title: input.title.clone(),
            category,
            content: input.content.clone(),
        };

        match state.api.update_tip(session, tip_id, &update).await {
            Ok(()) => {
                let matched = reconcile::merge_by_id(self.list.items_mut(), tip_id, |tip| {
                    tip.title = update.title.clone();
                    tip.category = update.category;
                    tip.content = update.content.clone();
                });
                if !matched {
                    tracing::warn!(tip_id, "Updated tip is not in the list");
                }
                tracing::info!(tip_id, "Tip updated");
                state.notifier.success("Tip updated successfully!");
                ActionOutcome::confirmed(matched)
            }
            Err(e) => {
                tracing::error!(tip_id, error = %e, "Tip update failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }

    pub async fn delete(&mut self, state: &AppState, tip_id: &str) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        match state.api.delete_tip(session, tip_id).await {
            Ok(()) => {
                reconcile::remove_by_id(self.list.items_mut(), tip_id);
                self.list.refresh_state();
                tracing::info!(tip_id, "Tip deleted");
                state.notifier.success("Tip deleted successfully!");
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(tip_id, error = %e, "Tip delete failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }
}

impl fmt::Display for MyTipsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "My Shared Tips",
            "You haven't shared any tips yet.",
            usize::MAX,
            render_tip,
        )
    }
}
