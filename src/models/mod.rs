// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models exchanged with the challenge backend.

pub mod challenge;
pub mod event;
pub mod stats;
pub mod tip;
pub mod user;
pub mod user_challenge;

pub use challenge::{Challenge, ChallengeFilter, NewChallenge, Step};
pub use event::{Event, NewEvent};
pub use stats::{GlobalStats, PlatformStatistics, TotalJoined};
pub use tip::{NewTip, Tip, TipCategory, TipUpdate, VoteResponse};
pub use user::UserProfile;
pub use user_challenge::{
    ChallengeStatus, JoinRequest, ProgressUpdate, StatusDisplay, StepCompletion, UserChallenge,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// A backend record addressable by its string ID.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Parse a date the way the backend stores them: either a full RFC 3339
/// timestamp or a bare `YYYY-MM-DD` from a date input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Treat an explicit null like a missing key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a count that may arrive as a number, a numeric string
/// (form inputs are posted verbatim) or null.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_u32(deserializer)?.unwrap_or(0))
}

pub(crate) fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .map(|n| n.min(u32::MAX as u64) as u32),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .map(|n| n.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .unwrap_or(0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
