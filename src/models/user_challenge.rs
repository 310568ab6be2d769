// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Join record tracking one user's progress on one challenge.

use super::{lenient_i32, lenient_u32, null_default, Challenge, Identified};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Progress is a percentage.
pub const MAX_PROGRESS: i32 = 100;

/// Lifecycle status of a joined challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChallengeStatus {
    #[default]
    Pending,
    Active,
    Paused,
    Completed,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::Pending => "pending",
            ChallengeStatus::Active => "active",
            ChallengeStatus::Paused => "paused",
            ChallengeStatus::Completed => "completed",
        }
    }

    /// Parse a status leniently. Older records use "In Progress" for
    /// active; anything unrecognized is pending.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" | "in progress" | "in-progress" | "ongoing" => ChallengeStatus::Active,
            "paused" => ChallengeStatus::Paused,
            "completed" | "complete" => ChallengeStatus::Completed,
            _ => ChallengeStatus::Pending,
        }
    }

    /// Status implied by a progress percentage.
    pub fn from_progress(progress: i32) -> Self {
        if progress >= MAX_PROGRESS {
            ChallengeStatus::Completed
        } else {
            ChallengeStatus::Active
        }
    }
}

impl Serialize for ChallengeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChallengeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| ChallengeStatus::parse(&s)).unwrap_or_default())
    }
}

/// Display-only badge derived from status. Never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
}

impl From<ChallengeStatus> for StatusDisplay {
    fn from(status: ChallengeStatus) -> Self {
        let label = match status {
            ChallengeStatus::Completed => "Completed",
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Paused => "Paused",
            ChallengeStatus::Pending => "Pending",
        };
        StatusDisplay { label }
    }
}

/// User-challenge join record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChallenge {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Embedded challenge, when the backend populates it
    #[serde(default)]
    pub challenge: Option<Challenge>,
    #[serde(default)]
    pub challenge_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Percentage complete as stored by the backend
    #[serde(default, deserialize_with = "lenient_i32")]
    pub progress: i32,
    #[serde(default)]
    pub status: ChallengeStatus,
    /// Zero-based indices of completed steps
    #[serde(default, deserialize_with = "null_default")]
    pub completed_steps: BTreeSet<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_actions: u32,
    #[serde(default)]
    pub join_date: Option<String>,
}

impl Identified for UserChallenge {
    fn id(&self) -> &str {
        &self.id
    }
}

impl UserChallenge {
    /// Progress clamped into 0..=100 for display.
    pub fn display_progress(&self) -> u8 {
        self.progress.clamp(0, MAX_PROGRESS) as u8
    }

    pub fn status_display(&self) -> StatusDisplay {
        self.status.into()
    }

    pub fn title(&self) -> &str {
        self.challenge
            .as_ref()
            .map(|c| c.title.as_str())
            .unwrap_or("Unnamed Challenge")
    }

    pub fn is_step_completed(&self, step: u32) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Whether completing `step` would change anything.
    pub fn can_complete_step(&self, step: u32) -> bool {
        step < self.total_actions && !self.is_step_completed(step)
    }
}

impl fmt::Display for UserChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}% ({}) - daily actions {}/{}",
            self.title(),
            self.display_progress(),
            self.status_display().label,
            self.completed_steps.len(),
            self.total_actions
        )
    }
}

/// Body for `PATCH /api/user-challenges/:id/complete-step`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepCompletion {
    pub step_id: u32,
}

/// Body for `PATCH /api/userChallenges/:id/progress`.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    pub progress: i32,
}

/// Body for `POST /api/challenges/join/:id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub user_id: String,
}
