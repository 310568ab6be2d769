// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Merge server-confirmed mutations into in-memory lists.
//!
//! Each function touches at most one record, located by ID. Order is
//! preserved and nothing is dropped except by [`remove_by_id`]. Every
//! function reports whether a record matched; on a miss the list is
//! unchanged. Callers only reconcile after the backend confirmed the
//! mutation, so there is never anything to roll back.

use crate::models::user_challenge::MAX_PROGRESS;
use crate::models::{ChallengeStatus, Identified, Tip, UserChallenge};

/// Replace the record with the same ID by the server's canonical copy.
pub fn replace_by_id<T: Identified>(list: &mut [T], canonical: T) -> bool {
    match list.iter_mut().find(|item| item.id() == canonical.id()) {
        Some(slot) => {
            *slot = canonical;
            true
        }
        None => false,
    }
}

/// Apply `patch` to the record with ID `id`.
pub fn merge_by_id<T, F>(list: &mut [T], id: &str, patch: F) -> bool
where
    T: Identified,
    F: FnOnce(&mut T),
{
    match list.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/// Drop the record with ID `id` after a confirmed delete.
pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &str) -> bool {
    match list.iter().position(|item| item.id() == id) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

/// Apply the echoed result of a vote toggle.
///
/// `voted == true` adds exactly one vote and records `user_email` once;
/// `voted == false` removes them. The count never goes below zero.
pub fn apply_vote(tips: &mut [Tip], tip_id: &str, user_email: &str, voted: bool) -> bool {
    merge_by_id(tips, tip_id, |tip| {
        if voted {
            tip.upvotes = tip.upvotes.saturating_add(1);
            if !tip.is_voted_by(user_email) {
                tip.upvoted_users.push(user_email.to_string());
            }
        } else {
            tip.upvotes = tip.upvotes.saturating_sub(1);
            tip.upvoted_users.retain(|u| u != user_email);
        }
    })
}

/// Set a confirmed progress value, clamped to 0..=100, and derive the
/// matching status.
pub fn apply_progress(list: &mut [UserChallenge], id: &str, progress: i32) -> bool {
    let progress = progress.clamp(0, MAX_PROGRESS);
    merge_by_id(list, id, |uc| {
        uc.progress = progress;
        uc.status = ChallengeStatus::from_progress(progress);
    })
}

/// Progress after adding `delta` percentage points to `current`.
pub fn next_progress(current: i32, delta: i32) -> i32 {
    current.saturating_add(delta).clamp(0, MAX_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TipCategory;
    use std::collections::BTreeSet;

    fn tip(id: &str, upvotes: u32, voters: &[&str]) -> Tip {
        Tip {
            id: id.to_string(),
            title: format!("Tip {}", id),
            category: TipCategory::WaterConservation,
            content: "Turn off the tap while brushing your teeth.".to_string(),
            author: "author@example.com".to_string(),
            author_name: None,
            upvotes,
            upvoted_users: voters.iter().map(|v| v.to_string()).collect(),
            created_at: None,
        }
    }

    fn user_challenge(id: &str, progress: i32) -> UserChallenge {
        UserChallenge {
            id: id.to_string(),
            challenge: None,
            challenge_id: Some(format!("c-{}", id)),
            user_id: Some("u1".to_string()),
            progress,
            status: ChallengeStatus::Active,
            completed_steps: BTreeSet::new(),
            total_actions: 5,
            join_date: None,
        }
    }

    #[test]
    fn test_vote_increments_once_and_records_user() {
        let mut tips = vec![tip("a", 3, &[]), tip("b", 1, &["x@example.com"])];
        let before_b = tips[1].clone();

        assert!(apply_vote(&mut tips, "a", "me@example.com", true));

        assert_eq!(tips[0].upvotes, 4);
        assert_eq!(tips[0].upvoted_users, vec!["me@example.com".to_string()]);
        assert_eq!(tips[1], before_b);
    }

    #[test]
    fn test_vote_then_unvote_restores_tip() {
        let original = tip("a", 2, &["x@example.com"]);
        let mut tips = vec![original.clone()];

        apply_vote(&mut tips, "a", "me@example.com", true);
        apply_vote(&mut tips, "a", "me@example.com", false);

        assert_eq!(tips[0], original);
    }

    #[test]
    fn test_vote_does_not_duplicate_user() {
        let mut tips = vec![tip("a", 1, &["me@example.com"])];
        apply_vote(&mut tips, "a", "me@example.com", true);

        assert_eq!(tips[0].upvotes, 2);
        assert_eq!(tips[0].upvoted_users.len(), 1);
    }

    #[test]
    fn test_unvote_saturates_at_zero() {
        let mut tips = vec![tip("a", 0, &[])];
        apply_vote(&mut tips, "a", "me@example.com", false);
        assert_eq!(tips[0].upvotes, 0);
    }

    #[test]
    fn test_unknown_id_leaves_list_untouched() {
        let mut tips = vec![tip("a", 1, &[])];
        let before = tips.clone();

        assert!(!apply_vote(&mut tips, "missing", "me@example.com", true));
        assert!(!remove_by_id(&mut tips, "missing"));
        assert_eq!(tips, before);
    }

    #[test]
    fn test_replace_by_id_keeps_order() {
        let mut list = vec![
            user_challenge("1", 10),
            user_challenge("2", 20),
            user_challenge("3", 30),
        ];
        let mut canonical = user_challenge("2", 40);
        canonical.completed_steps.insert(1);

        assert!(replace_by_id(&mut list, canonical.clone()));

        let ids: Vec<&str> = list.iter().map(|uc| uc.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(list[1], canonical);
        assert_eq!(list[0].progress, 10);
    }

    #[test]
    fn test_apply_progress_clamps_and_derives_status() {
        let mut list = vec![user_challenge("1", 90)];

        apply_progress(&mut list, "1", 130);
        assert_eq!(list[0].progress, 100);
        assert_eq!(list[0].status, ChallengeStatus::Completed);

        apply_progress(&mut list, "1", -5);
        assert_eq!(list[0].progress, 0);
        assert_eq!(list[0].status, ChallengeStatus::Active);
    }

    #[test]
    fn test_next_progress() {
        assert_eq!(next_progress(85, 10), 95);
        assert_eq!(next_progress(95, 10), 100);
        assert_eq!(next_progress(100, 10), 100);
    }

    #[test]
    fn test_remove_by_id() {
        let mut tips = vec![tip("a", 0, &[]), tip("b", 0, &[]), tip("c", 0, &[])];
        assert!(remove_by_id(&mut tips, "b"));
        let ids: Vec<&str> = tips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
