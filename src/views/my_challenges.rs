// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenges the signed-in user joined, with step and progress tracking.

use super::{ActionOutcome, ListView, LoadState};
use crate::models::UserChallenge;
use crate::reconcile;
use crate::AppState;
use std::fmt;

/// Joined challenges of the signed-in user.
#[derive(Debug, Default)]
pub struct MyChallengesView {
    list: ListView<UserChallenge>,
}

impl MyChallengesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &[UserChallenge] {
        self.list.items()
    }

    pub fn get(&self, id: &str) -> Option<&UserChallenge> {
        self.list.items().iter().find(|uc| uc.id == id)
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                self.list.fail("Please log in to see your challenges.");
                return;
            }
        };

        self.list.begin();
        let result = state.api.user_challenges(session).await;
        self.list.finish(
            result,
            "user challenges",
            "Error fetching your challenges. Please try again.",
        );
    }

    /// Mark step `step` of a joined challenge complete.
    ///
    /// A step that is already complete (or out of range) is skipped
    /// without contacting the backend.
    pub async fn complete_step(
        &mut self,
        state: &AppState,
        user_challenge_id: &str,
        step: u32,
    ) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                state
                    .notifier
                    .error("Please log in to update your progress.");
                return ActionOutcome::Rejected;
            }
        };

        match self.get(user_challenge_id) {
            Some(uc) if uc.can_complete_step(step) => {}
            Some(_) => {
                tracing::debug!(user_challenge_id, step, "Step already complete; skipping");
                return ActionOutcome::Skipped;
            }
            None => {
                tracing::warn!(user_challenge_id, "Unknown user challenge");
                return ActionOutcome::Skipped;
            }
        }

        match state
            .api
            .complete_step(session, user_challenge_id, step)
            .await
        {
            Ok(canonical) => {
                let matched =
                    reconcile::merge_by_id(self.list.items_mut(), user_challenge_id, |uc| {
                        // Keep the embedded challenge when the echo omits it.
                        let challenge =
                            canonical.challenge.clone().or_else(|| uc.challenge.take());
                        *uc = UserChallenge {
                            challenge,
                            ..canonical
                        };
                    });
                if !matched {
                    tracing::warn!(user_challenge_id, "Completed step for a record no longer listed");
                }
                tracing::info!(user_challenge_id, step, "Step completed");
                state.notifier.success("Progress updated successfully!");
                ActionOutcome::confirmed(matched)
            }
            Err(e) => {
                tracing::error!(user_challenge_id, step, error = %e, "Step completion failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }

    /// Add `delta` percentage points of progress, capped at 100.
    pub async fn add_progress(
        &mut self,
        state: &AppState,
        user_challenge_id: &str,
        delta: i32,
    ) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                state
                    .notifier
                    .error("Please log in to update your progress.");
                return ActionOutcome::Rejected;
            }
        };

        let Some(current) = self.get(user_challenge_id).map(|uc| uc.progress) else {
            tracing::warn!(user_challenge_id, "Unknown user challenge");
            return ActionOutcome::Skipped;
        };
        let progress = reconcile::next_progress(current, delta);

        match state
            .api
            .set_progress(session, user_challenge_id, progress)
            .await
        {
            Ok(()) => {
                let matched =
                    reconcile::apply_progress(self.list.items_mut(), user_challenge_id, progress);
                if !matched {
                    tracing::warn!(user_challenge_id, "Progress saved for a record no longer listed");
                }
                tracing::info!(user_challenge_id, progress, "Progress updated");
                ActionOutcome::confirmed(matched)
            }
            Err(e) => {
                tracing::error!(user_challenge_id, error = %e, "Progress update failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }
}

impl fmt::Display for MyChallengesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "My Challenges",
            "Zero missions active. Start your first eco challenge and make an impact today!",
            usize::MAX,
            |f, uc| writeln!(f, "  - {}", uc),
        )
    }
}
