// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Community events.

use super::{lenient_opt_u32, lenient_u32, parse_date, Identified};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled eco event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Event date/time as entered (ISO 8601 or datetime-local)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub max_participants: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub current_participants: u32,
}

impl Identified for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .as_deref()
            .and_then(parse_date)
            .map(|d| d.format("%a, %b %-d, %Y").to_string())
            .unwrap_or_else(|| "date TBA".to_string());
        write!(f, "{} - {}", self.title, date)?;
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            write!(f, " @ {}", location)?;
        }
        if let Some(max) = self.max_participants {
            write!(f, " ({}/{} going)", self.current_participants, max)?;
        }
        Ok(())
    }
}

/// Payload for `POST /api/events`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub max_participants: u32,
    pub current_participants: u32,
}
