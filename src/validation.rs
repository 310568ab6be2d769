// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side form validation.
//!
//! Everything here is pure and synchronous: no check ever touches the
//! network. Field rules are declared with `validator`; rules it cannot
//! express (trimmed presence, date relationships) are checked by hand
//! against an explicit `today` so results are reproducible.

use crate::models::{parse_date, TipCategory};
use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

pub const PASSWORD_MIN_CHARS: usize = 6;

const TIP_TITLE_MSG: &str = "Title must be at least 5 characters long.";
const TIP_CATEGORY_MSG: &str = "Please select a category.";
const TIP_CONTENT_MSG: &str = "Tip content must be at least 50 characters long.";

/// Absolute http(s) URL with no whitespace.
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://\S+$").expect("HTTP_URL pattern is valid"));

/// Field-indexed validation messages. The first message recorded for a
/// field wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Clear one field, as a form does when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn from_validator(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::new(),
            Err(errors) => errors.into(),
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                out.insert(&field.to_string(), &message);
            }
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

// ─── Tips ─────────────────────────────────────────────────────

/// Tip fields as typed into the add/edit tip forms.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct TipInput {
    #[validate(length(min = 5, message = "Title must be at least 5 characters long."))]
    pub title: String,
    #[validate(required(message = "Please select a category."))]
    pub category: Option<TipCategory>,
    #[validate(length(min = 50, message = "Tip content must be at least 50 characters long."))]
    pub content: String,
}

impl TipInput {
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::from_validator(self.validate());
        // Lengths count the text as typed; only all-blank input is refused
        // on top of the derived rules.
        if self.title.trim().is_empty() {
            errors.insert("title", TIP_TITLE_MSG);
        }
        if self.content.trim().is_empty() {
            errors.insert("content", TIP_CONTENT_MSG);
        }
        if self.category == Some(TipCategory::Other) {
            errors.insert("category", TIP_CATEGORY_MSG);
        }
        errors.into_result()
    }
}

// ─── Challenges ───────────────────────────────────────────────

/// Challenge fields as typed into the post-challenge form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ChallengeInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(regex(path = *HTTP_URL, message = "Please enter a valid image URL (jpg, png, gif)"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Target is required"))]
    pub target: String,
    #[validate(length(min = 1, message = "Impact Metric is required"))]
    pub impact_metric: String,
    /// Days, as typed
    pub duration: String,
    /// Number of daily actions, as typed; may be left blank
    pub total_actions: String,
    pub start_date: String,
    pub end_date: String,
}

impl ChallengeInput {
    /// Validate against `today`. Start may be today; end must be after
    /// both today and the start date.
    pub fn check_at(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::from_validator(self.validate());

        for (field, value, message) in [
            ("title", &self.title, "Title is required"),
            ("description", &self.description, "Description is required"),
            ("category", &self.category, "Category is required"),
            ("target", &self.target, "Target is required"),
            ("impact_metric", &self.impact_metric, "Impact Metric is required"),
        ] {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }

        if self.image_url.trim().is_empty() {
            errors.clear("image_url");
            errors.insert("image_url", "Image URL is required");
        }

        if positive_int(&self.duration).is_none() {
            errors.insert("duration", "Duration must be greater than 0 days");
        }

        if !self.total_actions.trim().is_empty() && positive_int(&self.total_actions).is_none() {
            errors.insert("total_actions", "Total actions must be a positive number");
        }

        let start = if self.start_date.trim().is_empty() {
            errors.insert("start_date", "Start Date is required");
            None
        } else {
            match parse_date(&self.start_date) {
                None => {
                    errors.insert("start_date", "Start Date is not a valid date");
                    None
                }
                Some(d) if d < today => {
                    errors.insert("start_date", "Start Date cannot be in the past");
                    None
                }
                Some(d) => Some(d),
            }
        };

        if self.end_date.trim().is_empty() {
            errors.insert("end_date", "End Date is required");
        } else {
            match parse_date(&self.end_date) {
                None => errors.insert("end_date", "End Date is not a valid date"),
                Some(end) if end <= today => {
                    errors.insert("end_date", "End Date must be in the future")
                }
                Some(end) if start.is_some_and(|s| end <= s) => {
                    errors.insert("end_date", "End Date must be after Start Date")
                }
                Some(_) => {}
            }
        }

        errors.into_result()
    }
}

// ─── Events ───────────────────────────────────────────────────

/// Event fields as typed into the add-event form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct EventInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    pub max_participants: String,
}

impl EventInput {
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::from_validator(self.validate());
        if !self.date.trim().is_empty() && parse_date(&self.date).is_none() {
            errors.insert("date", "Date is not a valid date");
        }
        if positive_int(&self.max_participants).is_none() {
            errors.insert(
                "max_participants",
                "Max participants must be greater than 0",
            );
        }
        errors.into_result()
    }
}

// ─── Signup ───────────────────────────────────────────────────

/// Signup fields. Credentials go to the auth provider; only the profile
/// reaches the backend.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SignupInput {
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    #[validate(url(message = "Please enter a valid photo URL"))]
    pub photo_url: Option<String>,
}

impl SignupInput {
    pub fn check(&self) -> Result<(), FieldErrors> {
        FieldErrors::from_validator(self.validate()).into_result()
    }
}

/// Password rule: one uppercase, one lowercase, at least six characters.
/// Only the first failing rule is reported.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let fail = |code: &'static str, message: &'static str| {
        Err(ValidationError::new(code).with_message(Cow::Borrowed(message)))
    };
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return fail(
            "password_uppercase",
            "Password must contain at least one uppercase letter",
        );
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return fail(
            "password_lowercase",
            "Password must contain at least one lowercase letter",
        );
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return fail(
            "password_length",
            "Password must be at least 6 characters long",
        );
    }
    Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────

/// Parse a strictly positive integer typed into a number input.
pub fn positive_int(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn valid_challenge() -> ChallengeInput {
        ChallengeInput {
            title: "Zero Waste Week".to_string(),
            description: "Avoid single-use packaging for a week".to_string(),
            image_url: "https://img.example.com/zero.png".to_string(),
            category: "Waste Reduction".to_string(),
            target: "0 kg landfill".to_string(),
            impact_metric: "kg plastic saved".to_string(),
            duration: "7".to_string(),
            total_actions: "7".to_string(),
            start_date: "2026-03-10".to_string(),
            end_date: "2026-03-17".to_string(),
        }
    }

    fn valid_tip() -> TipInput {
        TipInput {
            title: "Cold washes".to_string(),
            category: Some(TipCategory::EnergySaving),
            content: "Washing clothes at 30 degrees saves most of the energy a hot cycle uses."
                .to_string(),
        }
    }

    #[test]
    fn test_valid_tip_passes() {
        assert!(valid_tip().check().is_ok());
    }

    #[test]
    fn test_short_tip_fields_rejected() {
        let tip = TipInput {
            title: "Tip".to_string(),
            category: None,
            content: "Too short".to_string(),
        };
        let errors = tip.check().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("title"), Some(TIP_TITLE_MSG));
        assert_eq!(errors.get("category"), Some(TIP_CATEGORY_MSG));
        assert_eq!(errors.get("content"), Some(TIP_CONTENT_MSG));
    }

    #[test]
    fn test_blank_tip_title_rejected_even_if_long() {
        let tip = TipInput {
            title: "       ".to_string(),
            ..valid_tip()
        };
        let errors = tip.check().unwrap_err();
        assert!(errors.contains("title"));
        assert!(!errors.contains("content"));
    }

    #[test]
    fn test_tip_length_counts_text_as_typed() {
        let padded = TipInput {
            title: "  Tap".to_string(),
            content: format!("   {}", "w".repeat(48)),
            ..valid_tip()
        };
        assert_eq!(padded.check(), Ok(()));

        let short = TipInput {
            content: "w".repeat(49),
            ..valid_tip()
        };
        assert_eq!(short.check().unwrap_err().get("content"), Some(TIP_CONTENT_MSG));
    }

    #[test]
    fn test_valid_challenge_passes() {
        assert_eq!(valid_challenge().check_at(today()), Ok(()));
    }

    #[test]
    fn test_challenge_end_not_after_start_rejected() {
        let same_day = ChallengeInput {
            start_date: "2026-03-12".to_string(),
            end_date: "2026-03-12".to_string(),
            ..valid_challenge()
        };
        let errors = same_day.check_at(today()).unwrap_err();
        assert_eq!(errors.get("end_date"), Some("End Date must be after Start Date"));

        let earlier = ChallengeInput {
            start_date: "2026-03-20".to_string(),
            end_date: "2026-03-15".to_string(),
            ..valid_challenge()
        };
        assert!(earlier.check_at(today()).unwrap_err().contains("end_date"));
    }

    #[test]
    fn test_challenge_start_in_past_rejected() {
        let input = ChallengeInput {
            start_date: "2026-03-09".to_string(),
            ..valid_challenge()
        };
        let errors = input.check_at(today()).unwrap_err();
        assert_eq!(errors.get("start_date"), Some("Start Date cannot be in the past"));
    }

    #[test]
    fn test_challenge_numeric_and_url_rules() {
        let input = ChallengeInput {
            duration: "0".to_string(),
            total_actions: "-2".to_string(),
            image_url: "ftp://img.example.com/x.png".to_string(),
            ..valid_challenge()
        };
        let errors = input.check_at(today()).unwrap_err();
        assert!(errors.contains("duration"));
        assert!(errors.contains("total_actions"));
        assert!(errors.contains("image_url"));
    }

    #[test]
    fn test_challenge_required_fields() {
        let errors = ChallengeInput::default().check_at(today()).unwrap_err();
        for field in [
            "title",
            "description",
            "image_url",
            "category",
            "target",
            "impact_metric",
            "duration",
            "start_date",
            "end_date",
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert!(!errors.contains("total_actions"));
    }

    #[test]
    fn test_event_rules() {
        let input = EventInput {
            title: "River cleanup".to_string(),
            description: "Bring gloves".to_string(),
            date: "2026-04-01T09:00".to_string(),
            location: "Riverside park".to_string(),
            max_participants: "25".to_string(),
        };
        assert!(input.check().is_ok());

        let input = EventInput {
            max_participants: "".to_string(),
            location: String::new(),
            ..input
        };
        let errors = input.check().unwrap_err();
        assert!(errors.contains("max_participants"));
        assert_eq!(errors.get("location"), Some("Location is required"));
    }

    #[test]
    fn test_password_reports_first_failure() {
        let msg = |p: &str| validate_password(p).unwrap_err().message.unwrap().to_string();

        assert_eq!(msg("lowercase1"), "Password must contain at least one uppercase letter");
        assert_eq!(msg("UPPER"), "Password must contain at least one lowercase letter");
        assert_eq!(msg("Abc"), "Password must be at least 6 characters long");
        assert!(validate_password("Abcdef").is_ok());
    }

    #[test]
    fn test_signup_input_maps_password_error() {
        let input = SignupInput {
            name: "Fern".to_string(),
            email: "fern@example.com".to_string(),
            password: "abcdef".to_string(),
            photo_url: None,
        };
        let errors = input.check().unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_image_url_pattern() {
        let with_url = |url: &str| ChallengeInput {
            image_url: url.to_string(),
            ..valid_challenge()
        };
        assert_eq!(with_url("HTTP://example.com/a.png").check_at(today()), Ok(()));
        for bad in ["https://", "https://exa mple.com", "example.com"] {
            let errors = with_url(bad).check_at(today()).unwrap_err();
            assert_eq!(
                errors.get("image_url"),
                Some("Please enter a valid image URL (jpg, png, gif)"),
                "{}",
                bad
            );
        }
        let errors = with_url("   ").check_at(today()).unwrap_err();
        assert_eq!(errors.get("image_url"), Some("Image URL is required"));
    }
}
