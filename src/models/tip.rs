//! Community tips and their vote toggle.

use super::{lenient_u32, null_default, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const EXCERPT_CHARS: usize = 80;

/// Fixed set of tip categories offered by the tip forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TipCategory {
    #[serde(rename = "Energy Saving")]
    EnergySaving,
    #[serde(rename = "Waste Reduction")]
    WasteReduction,
    #[serde(rename = "Water Conservation")]
    WaterConservation,
    #[serde(rename = "Sustainable Food")]
    SustainableFood,
    #[serde(rename = "DIY & Upcycling")]
    DiyUpcycling,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Gardening & Nature")]
    GardeningNature,
    /// Anything the backend holds outside the fixed list
    #[serde(other)]
    #[default]
    Other,
}

impl TipCategory {
    pub const ALL: [TipCategory; 7] = [
        TipCategory::EnergySaving,
        TipCategory::WasteReduction,
        TipCategory::WaterConservation,
        TipCategory::SustainableFood,
        TipCategory::DiyUpcycling,
        TipCategory::Transportation,
        TipCategory::GardeningNature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::EnergySaving => "Energy Saving",
            TipCategory::WasteReduction => "Waste Reduction",
            TipCategory::WaterConservation => "Water Conservation",
            TipCategory::SustainableFood => "Sustainable Food",
            TipCategory::DiyUpcycling => "DIY & Upcycling",
            TipCategory::Transportation => "Transportation",
            TipCategory::GardeningNature => "Gardening & Nature",
            TipCategory::Other => "Other",
        }
    }

    /// Look up a selectable category by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label.trim())
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A community tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub category: TipCategory,
    #[serde(default, deserialize_with = "null_default")]
    pub content: String,
    /// Author email
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub upvotes: u32,
    /// Emails of users who upvoted
    #[serde(default, deserialize_with = "null_default")]
    pub upvoted_users: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Tip {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tip {
    pub fn is_voted_by(&self, email: &str) -> bool {
        self.upvoted_users.iter().any(|u| u == email)
    }

    pub fn display_author(&self) -> &str {
        self.author_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.author)
    }

    /// First 80 characters of the content.
    pub fn excerpt(&self) -> &str {
        match self.content.char_indices().nth(EXCERPT_CHARS) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) by {} - {} upvotes\n  {}...",
            self.title,
            self.category,
            self.display_author(),
            self.upvotes,
            self.excerpt()
        )
    }
}

/// Payload for `POST /api/tips`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTip {
    pub title: String,
    pub content: String,
    pub category: TipCategory,
    pub author: String,
    pub author_name: Option<String>,
    pub user_db_id: String,
    pub upvotes: u32,
    pub upvoted_users: Vec<String>,
}

/// Payload for `PUT /api/tips/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipUpdate {
    pub title: String,
    pub category: TipCategory,
    pub content: String,
}

/// Response of `PUT /api/tips/:id/upvote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VoteResponse {
    /// Whether the acting user has voted after the toggle
    pub voted: bool,
}
