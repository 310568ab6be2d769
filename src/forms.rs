// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submission forms for tips, challenges, events and signup.
//!
//! Every form validates locally first. Invalid input records field errors
//! and aborts before any request; a failed request keeps the typed input
//! so the user can retry.

use crate::models::{NewChallenge, NewEvent, NewTip, UserProfile};
use crate::validation::{positive_int, ChallengeInput, EventInput, FieldErrors, SignupInput, TipInput};
use crate::views::ActionOutcome;
use crate::AppState;
use chrono::{NaiveDate, Utc};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ─── Tip ─────────────────────────────────────────────────────

/// "Share Your Eco-Tip" form.
#[derive(Debug, Default)]
pub struct TipForm {
    pub input: TipInput,
    errors: FieldErrors,
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Edit one field, clearing its stale error.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut TipInput)) {
        apply(&mut self.input);
        self.errors.clear(field);
    }

    pub async fn submit(&mut self, state: &AppState) -> ActionOutcome {
        if let Err(errors) = self.input.check() {
            tracing::warn!(%errors, "Tip form failed validation");
            self.errors = errors;
            return ActionOutcome::Rejected;
        }
        self.errors = FieldErrors::new();

        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };
        let Some(category) = self.input.category else {
            return ActionOutcome::Rejected;
        };

        let tip = NewTip {
            title: self.input.title.clone(),
            content: self.input.content.clone(),
            category,
            author: session.email().to_string(),
            author_name: session.user.display_name.clone(),
            user_db_id: session.user.id.clone(),
            upvotes: 0,
            upvoted_users: Vec::new(),
        };

        match state.api.create_tip(session, &tip).await {
            Ok(()) => {
                tracing::info!(title = %tip.title, "Tip submitted");
                state.notifier.success("Tip submitted successfully!");
                self.input = TipInput::default();
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Tip submission failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }
}

// ─── Challenge ───────────────────────────────────────────────

/// "Initiate New Mission" form.
#[derive(Debug, Default)]
pub struct ChallengeForm {
    pub input: ChallengeInput,
    errors: FieldErrors,
}

impl ChallengeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut ChallengeInput)) {
        apply(&mut self.input);
        self.errors.clear(field);
    }

    pub async fn submit(&mut self, state: &AppState) -> ActionOutcome {
        self.submit_at(state, today()).await
    }

    /// Submit, judging date rules against `today`.
    pub async fn submit_at(&mut self, state: &AppState, today: NaiveDate) -> ActionOutcome {
        if let Err(errors) = self.input.check_at(today) {
            tracing::warn!(%errors, "Challenge form failed validation");
            self.errors = errors;
            return ActionOutcome::Rejected;
        }
        self.errors = FieldErrors::new();

        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        let input = &self.input;
        let challenge = NewChallenge {
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            image_url: input.image_url.trim().to_string(),
            category: input.category.trim().to_string(),
            created_by: session.email().to_string(),
            target: input.target.trim().to_string(),
            total_actions: positive_int(&input.total_actions).unwrap_or(0),
            participants: 0,
            impact_metric: input.impact_metric.trim().to_string(),
            duration: positive_int(&input.duration).unwrap_or(0),
            start_date: input.start_date.trim().to_string(),
            end_date: input.end_date.trim().to_string(),
            steps: Vec::new(),
        };

        match state.api.create_challenge(session, &challenge).await {
            Ok(()) => {
                tracing::info!(title = %challenge.title, "Challenge posted");
                state
                    .notifier
                    .success("Challenge Posted Successfully! Go check it out.");
                self.input = ChallengeInput::default();
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Challenge submission failed");
                state.notifier.error(format!(
                    "Failed to post challenge. Error: {}",
                    e.user_message()
                ));
                ActionOutcome::Rejected
            }
        }
    }
}

// ─── Event ───────────────────────────────────────────────────

/// "Create New Event" form.
#[derive(Debug, Default)]
pub struct EventForm {
    pub input: EventInput,
    errors: FieldErrors,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub async fn submit(&mut self, state: &AppState) -> ActionOutcome {
        if let Err(errors) = self.input.check() {
            tracing::warn!(%errors, "Event form failed validation");
            self.errors = errors;
            return ActionOutcome::Rejected;
        }
        self.errors = FieldErrors::new();

        let session = match state.auth.require() {
            Ok(s) => s,
            Err(e) => {
                state.notifier.client_error(&e);
                return ActionOutcome::Rejected;
            }
        };

        let event = NewEvent {
            title: self.input.title.trim().to_string(),
            description: self.input.description.trim().to_string(),
            date: self.input.date.trim().to_string(),
            location: self.input.location.trim().to_string(),
            max_participants: positive_int(&self.input.max_participants).unwrap_or(0),
            current_participants: 0,
        };

        match state.api.create_event(session, &event).await {
            Ok(()) => {
                tracing::info!(title = %event.title, "Event created");
                state.notifier.success("Event created successfully!");
                self.input = EventInput::default();
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Event creation failed");
                state.notifier.error("Failed to create event.");
                ActionOutcome::Rejected
            }
        }
    }
}

// ─── Signup ──────────────────────────────────────────────────

/// Signup form. The auth provider creates the account; this form checks
/// the input first and registers the profile with the backend once a
/// token was issued.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub input: SignupInput,
    errors: FieldErrors,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Local checks to run before handing credentials to the provider.
    pub fn check(&mut self) -> bool {
        match self.input.check() {
            Ok(()) => {
                self.errors = FieldErrors::new();
                true
            }
            Err(errors) => {
                tracing::warn!(%errors, "Signup form failed validation");
                self.errors = errors;
                false
            }
        }
    }

    /// Upsert the new user's profile using the provider-issued `token`.
    pub async fn register(&mut self, state: &AppState, token: &str) -> ActionOutcome {
        if !self.check() {
            return ActionOutcome::Rejected;
        }

        let name = self.input.name.trim();
        let profile = UserProfile {
            name: if name.is_empty() {
                "Anonymous".to_string()
            } else {
                name.to_string()
            },
            email: self.input.email.trim().to_string(),
            photo_url: self.input.photo_url.clone().filter(|p| !p.trim().is_empty()),
        };

        match state.api.upsert_user(token, &profile).await {
            Ok(()) => {
                tracing::info!(email = %profile.email, "Profile registered");
                state.notifier.success("Account created successfully");
                ActionOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "Profile registration failed");
                state.notifier.client_error(&e);
                ActionOutcome::Rejected
            }
        }
    }
}
