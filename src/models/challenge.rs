// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Challenge model and the payloads used to create, edit and filter them.

use super::{lenient_opt_u32, lenient_u32, null_default, parse_date, Identified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sustainability challenge as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Backend document ID
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Duration in days
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub impact_metric: Option<String>,
    /// Number of users who joined
    #[serde(default, deserialize_with = "lenient_u32")]
    pub participants: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Email of the creator
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub steps: Vec<Step>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_actions: u32,
}

/// One ordered step of a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_number: u32,
    #[serde(default)]
    pub title: String,
}

impl Identified for Challenge {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Challenge {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Whether `email` created this challenge.
    pub fn is_created_by(&self, email: &str) -> bool {
        self.created_by
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(email))
    }

    /// Append a step numbered after the current last one.
    pub fn add_step(&mut self, title: &str) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(Step {
            step_number,
            title: title.to_string(),
        });
    }

    /// Remove the step at `index` and renumber the rest from 1.
    pub fn remove_step(&mut self, index: usize) -> Option<Step> {
        if index >= self.steps.len() {
            return None;
        }
        let removed = self.steps.remove(index);
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.step_number = i as u32 + 1;
        }
        Some(removed)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} participants",
            self.title,
            self.category.as_deref().unwrap_or("General Challenge"),
            self.participants
        )?;
        if let Some(days) = self.duration {
            write!(f, ", {} days", days)?;
        }
        Ok(())
    }
}

/// Payload for `POST /api/challenges`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub created_by: String,
    pub target: String,
    pub total_actions: u32,
    pub participants: u32,
    pub impact_metric: String,
    pub duration: u32,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Query for `GET /api/challenges/filter`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeFilter {
    pub categories: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_participants: Option<u32>,
    pub max_participants: Option<u32>,
}

impl ChallengeFilter {
    /// Query pairs for the set fields; unset fields are omitted.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        let categories: Vec<&str> = self
            .categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if !categories.is_empty() {
            query.push(("categories", categories.join(",")));
        }
        if let Some(d) = self.start_date {
            query.push(("startDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.end_date {
            query.push(("endDate", d.format("%Y-%m-%d").to_string()));
        }
        if let Some(n) = self.min_participants {
            query.push(("minParticipants", n.to_string()));
        }
        if let Some(n) = self.max_participants {
            query.push(("maxParticipants", n.to_string()));
        }
        query
    }

    /// Parse a comma separated category list as typed into the filter box.
    pub fn with_categories(mut self, raw: &str) -> Self {
        self.categories = raw
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }
}
