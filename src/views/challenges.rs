// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge lists, the filter screen, the detail page and the creator's
//! own challenges.

use super::{ActionOutcome, ListView, LoadState};
use crate::models::{Challenge, ChallengeFilter};
use crate::reconcile;
use crate::AppState;
use std::fmt;

const RUNNING_SHOWN: usize = 6;

fn render_challenge(f: &mut fmt::Formatter<'_>, challenge: &Challenge) -> fmt::Result {
    writeln!(f, "  - {}", challenge)
}

// ─── All Challenges ──────────────────────────────────────────

#[derive(Debug, Default)]
pub struct ChallengesView {
    list: ListView<Challenge>,
}

impl ChallengesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &[Challenge] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        self.list.begin();
        let result = state.api.list_challenges().await;
        self.list
            .finish(result, "challenges", "Error loading challenges.");
    }
}

impl fmt::Display for ChallengesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "Challenges",
            "No challenges found. Check back soon!",
            usize::MAX,
            render_challenge,
        )
    }
}

// ─── Running Challenges ──────────────────────────────────────

/// Challenges in progress right now.
#[derive(Debug, Default)]
pub struct RunningChallengesView {
    list: ListView<Challenge>,
}

impl RunningChallengesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &[Challenge] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        self.list.begin();
        let result = state.api.running_challenges().await;
        self.list
            .finish(result, "running challenges", "Error loading eco missions.");
    }
}

impl fmt::Display for RunningChallengesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "Ongoing Eco Missions",
            "No missions running. Start your first eco mission today!",
            RUNNING_SHOWN,
            render_challenge,
        )
    }
}

// ─── Filtered Challenges ─────────────────────────────────────

/// Challenges matching a user-entered filter.
#[derive(Debug, Default)]
pub struct ChallengeFilterView {
    pub filter: ChallengeFilter,
    list: ListView<Challenge>,
}

impl ChallengeFilterView {
    pub fn new(filter: ChallengeFilter) -> Self {
        Self {
            filter,
            list: ListView::default(),
        }
    }

    pub fn challenges(&self) -> &[Challenge] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    /// Fetch with the current filter, replacing previous results.
    pub async fn load(&mut self, state: &AppState) {
        tracing::debug!(filter = ?self.filter, "Filtering challenges");
        self.list.begin();
        let result = state.api.filter_challenges(&self.filter).await;
        self.list
            .finish(result, "filtered challenges", "Error fetching challenges");
    }
}

impl fmt::Display for ChallengeFilterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "Filtered Challenges",
            "No challenges found",
            usize::MAX,
            render_challenge,
        )
    }
}

// ─── Challenge Detail ────────────────────────────────────────

/// One challenge with a join action.
#[derive(Debug)]
pub struct ChallengeDetailView {
    id: String,
    challenge: Option<Challenge>,
    state: LoadState,
}

impl ChallengeDetailView {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            challenge: None,
            state: LoadState::Idle,
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub async fn load(&mut self, state: &AppState) {
        self.state = LoadState::Loading;
        match state.api.get_challenge(&self.id).await {
            Ok(challenge) => {
                self.challenge = Some(challenge);
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!(id = %self.id, error = %e, "Failed to fetch challenge");
                self.challenge = None;
                let message = if e.is_not_found() {
                    "Challenge not found".to_string()
                } else {
                    e.user_message()
                };
                self.state = LoadState::Failed(message);
            }
        }
    }

    /// Join this challenge as the signed-in user.
    pub async fn join(&self, state: &AppState) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                state.notifier.error("Please log in to join this challenge.");
                return ActionOutcome::Rejected;
            }
        };

        match state.api.join_challenge(session, &self.id).await {
            Ok(()) => {
                tracing::info!(challenge_id = %self.id, user_id = %session.user.id, "Joined challenge");
                state.notifier.success("Join Challenge Successfully!");
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(challenge_id = %self.id, error = %e, "Join failed");
                state.notifier.error(format!("Failed to join challenge: {}", e.user_message()));
                ActionOutcome::Rejected
            }
        }
    }
}

impl fmt::Display for ChallengeDetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.state, &self.challenge) {
            (LoadState::Failed(msg), _) => writeln!(f, "Error: {} (id {})", msg, self.id),
            (_, None) => writeln!(f, "Loading challenge {}...", self.id),
            (_, Some(c)) => {
                writeln!(f, "{}", c.title)?;
                writeln!(f, "{}", c.category.as_deref().unwrap_or("General Challenge"))?;
                if !c.description.is_empty() {
                    writeln!(f, "{}", c.description)?;
                }
                if let Some(days) = c.duration {
                    writeln!(f, "Duration: {} days", days)?;
                }
                writeln!(f, "Active Participants: {} People", c.participants)?;
                if let Some(target) = &c.target {
                    writeln!(f, "Challenge Goal: {}", target)?;
                }
                if let Some(metric) = &c.impact_metric {
                    writeln!(f, "Impact Metric: {}", metric)?;
                }
                let fmt_date = |d: Option<chrono::NaiveDate>| {
                    d.map(|d| d.format("%B %-d, %Y").to_string())
                        .unwrap_or_else(|| "N/A".to_string())
                };
                writeln!(f, "Starts: {}", fmt_date(c.start()))?;
                writeln!(f, "Ends: {}", fmt_date(c.end()))?;
                for step in &c.steps {
                    writeln!(f, "  {}. {}", step.step_number, step.title)?;
                }
                Ok(())
            }
        }
    }
}

// ─── Created Challenges ──────────────────────────────────────

/// Challenges created by the signed-in user, with edit and delete.
#[derive(Debug, Default)]
pub struct MyCreatedChallengesView {
    list: ListView<Challenge>,
}

impl MyCreatedChallengesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &[Challenge] {
        self.list.items()
    }

    pub fn state(&self) -> &LoadState {
        self.list.state()
    }

    pub async fn load(&mut self, state: &AppState) {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(_) => {
                self.list.fail("Please log in to manage your challenges.");
                return;
            }
        };

        self.list.begin();
        let email = session.email();
        let result = state.api.list_challenges().await.map(|all| {
            all.into_iter()
                .filter(|c| c.is_created_by(email))
                .collect()
        });
        self.list.finish(
            result,
            "created challenges",
            "Failed to fetch your challenges",
        );
    }

    /// Save an edited challenge and replace the local copy with it.
    pub async fn update(&mut self, state: &AppState, edited: Challenge) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        match state.api.update_challenge(session, &edited).await {
            Ok(()) => {
                let id = edited.id.clone();
                let matched = reconcile::replace_by_id(self.list.items_mut(), edited);
                if !matched {
                    tracing::warn!(challenge_id = %id, "Updated challenge is not in the list");
                }
                tracing::info!(challenge_id = %id, "Challenge updated");
                state.notifier.success("Updated successfully!");
                ActionOutcome::confirmed(matched)
            }
            Err(e) => {
                tracing::error!(challenge_id = %edited.id, error = %e, "Challenge update failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }

    pub async fn delete(&mut self, state: &AppState, id: &str) -> ActionOutcome {
        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        match state.api.delete_challenge(session, id).await {
            Ok(()) => {
                reconcile::remove_by_id(self.list.items_mut(), id);
                self.list.refresh_state();
                tracing::info!(challenge_id = %id, "Challenge deleted");
                state.notifier.success("Deleted successfully!");
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(challenge_id = %id, error = %e, "Challenge delete failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }
}

impl fmt::Display for MyCreatedChallengesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.render(
            f,
            "My Created Challenges",
            "No challenges yet! Start one and inspire others.",
            usize::MAX,
            render_challenge,
        )
    }
}
