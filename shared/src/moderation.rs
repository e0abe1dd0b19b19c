//! Moderation actions and their status transitions.
//!
//! The server performs the actual state change; the client only mirrors it
//! locally once the server has confirmed success. Failures leave the local
//! record untouched.

use serde::{Deserialize, Serialize};

use crate::{Post, PostStatus};

/// A status-changing operation the client asks the server to perform on a
/// post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    /// Soft-delete the post.
    Delete,
    /// Bring a deleted post back as published.
    Restore,
    /// Publish a draft.
    Publish,
    /// Send a published post back to draft.
    Unpublish,
}

impl ModerationAction {
    /// Path segment used by the moderation endpoint
    /// (`POST /posts/{id}/{action}`).
    pub fn slug(self) -> &'static str {
        match self {
            ModerationAction::Delete => "delete",
            ModerationAction::Restore => "restore",
            ModerationAction::Publish => "publish",
            ModerationAction::Unpublish => "unpublish",
        }
    }

    /// Status the post ends up in once the server confirms the action.
    pub fn target_status(self) -> PostStatus {
        match self {
            ModerationAction::Delete => PostStatus::Deleted,
            ModerationAction::Restore | ModerationAction::Publish => PostStatus::Published,
            ModerationAction::Unpublish => PostStatus::Draft,
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ModerationAction::Delete => "Delete",
            ModerationAction::Restore => "Restore",
            ModerationAction::Publish => "Publish",
            ModerationAction::Unpublish => "Unpublish",
        }
    }

    /// Actions offered for a post currently in `status`.
    pub fn available_for(status: PostStatus) -> &'static [ModerationAction] {
        match status {
            PostStatus::Draft => &[ModerationAction::Publish, ModerationAction::Delete],
            PostStatus::Published => &[ModerationAction::Unpublish, ModerationAction::Delete],
            PostStatus::Deleted => &[ModerationAction::Restore],
        }
    }
}

/// Apply a confirmed action to the matching post in place.
///
/// Returns the new status, or `None` when no post has `post_id` (the list
/// may have been reloaded while the request was in flight). Transitions
/// are plain assignments, so applying the same action twice is harmless.
pub fn apply_action(
    posts: &mut [Post],
    post_id: &str,
    action: ModerationAction,
) -> Option<PostStatus> {
    let post = posts.iter_mut().find(|post| post.id == post_id)?;
    post.status = action.target_status();
    tracing::debug!(id = %post.id, action = action.slug(), status = post.status.slug(), "applied moderation action");
    Some(post.status)
}

/// What one dispatch ended up doing to the local list.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The server confirmed the action and the local record now carries
    /// the new status.
    Applied(PostStatus),
    /// The server confirmed the action but the post is gone from the
    /// local list.
    Missing,
    /// Transport or application failure. The local record is untouched
    /// and the message belongs in a transient notice.
    Failed(String),
}

/// Settle one awaited dispatch against the server's reply.
///
/// Only a confirmed success mutates the list; failures are returned for
/// the caller to surface and never escalate past the dispatch boundary.
pub fn settle_dispatch(
    posts: &mut [Post],
    post_id: &str,
    action: ModerationAction,
    confirmation: Result<(), String>,
) -> DispatchOutcome {
    match confirmation {
        Ok(()) => match apply_action(posts, post_id, action) {
            Some(status) => DispatchOutcome::Applied(status),
            None => DispatchOutcome::Missing,
        },
        Err(err) => {
            tracing::warn!(id = %post_id, action = action.slug(), error = %err, "moderation dispatch failed");
            DispatchOutcome::Failed(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::{apply_action, settle_dispatch, DispatchOutcome, ModerationAction};
    use crate::filter::{visible_ids, FilterCriteria};
    use crate::{Post, PostStatus};

    // Stand-in for the remote moderation endpoint.
    async fn endpoint(succeed: bool) -> Result<(), String> {
        if succeed {
            Ok(())
        } else {
            Err("Server reported failure: script exited 1".to_string())
        }
    }

    fn post(id: &str, status: PostStatus) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            subtitle: None,
            author: "Nick".to_string(),
            date: "2025-04-21".to_string(),
            status,
            concept: None,
            tags: Vec::new(),
            clan_status: None,
        }
    }

    #[test]
    fn each_action_reaches_its_target_status() {
        assert_eq!(ModerationAction::Delete.target_status(), PostStatus::Deleted);
        assert_eq!(ModerationAction::Restore.target_status(), PostStatus::Published);
        assert_eq!(ModerationAction::Publish.target_status(), PostStatus::Published);
        assert_eq!(ModerationAction::Unpublish.target_status(), PostStatus::Draft);
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let mut posts = vec![post("1", PostStatus::Deleted)];
        let first = apply_action(&mut posts, "1", ModerationAction::Restore);
        let second = apply_action(&mut posts, "1", ModerationAction::Restore);
        assert_eq!(first, Some(PostStatus::Published));
        assert_eq!(second, Some(PostStatus::Published));
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[test]
    fn restored_post_becomes_visible_without_show_deleted() {
        let mut posts = vec![post("1", PostStatus::Published), post("2", PostStatus::Deleted)];
        let criteria = FilterCriteria::default();
        assert_eq!(visible_ids(&posts, &criteria), ["1"]);

        // The mock server confirmed the restore; mirror it locally.
        let status = apply_action(&mut posts, "2", ModerationAction::Restore);
        assert_eq!(status, Some(PostStatus::Published));
        assert_eq!(visible_ids(&posts, &criteria), ["1", "2"]);
    }

    #[test]
    fn failed_dispatch_leaves_the_record_untouched() {
        // On a failed or missing confirmation the caller never applies the
        // transition; an unknown id must also leave the list as-is.
        let mut posts = vec![post("1", PostStatus::Published)];
        let before = posts.clone();
        assert_eq!(apply_action(&mut posts, "missing", ModerationAction::Delete), None);
        assert_eq!(posts, before);
    }

    #[test]
    fn a_confirmed_dispatch_settles_into_the_new_status() {
        let mut posts = vec![post("2", PostStatus::Deleted)];
        let outcome = block_on(async {
            let confirmation = endpoint(true).await;
            settle_dispatch(&mut posts, "2", ModerationAction::Restore, confirmation)
        });
        assert_eq!(outcome, DispatchOutcome::Applied(PostStatus::Published));
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[test]
    fn a_failed_dispatch_settles_into_a_notice_without_mutating() {
        let mut posts = vec![post("2", PostStatus::Deleted)];
        let before = posts.clone();
        let outcome = block_on(async {
            let confirmation = endpoint(false).await;
            settle_dispatch(&mut posts, "2", ModerationAction::Restore, confirmation)
        });
        let DispatchOutcome::Failed(message) = outcome else {
            panic!("expected a failed outcome");
        };
        assert!(message.contains("script exited 1"));
        assert_eq!(posts, before);
    }

    #[test]
    fn a_confirmed_dispatch_for_a_reloaded_list_is_a_noop() {
        let mut posts = vec![post("1", PostStatus::Published)];
        let outcome =
            settle_dispatch(&mut posts, "gone", ModerationAction::Delete, Ok(()));
        assert_eq!(outcome, DispatchOutcome::Missing);
        assert_eq!(posts[0].status, PostStatus::Published);
    }

    #[test]
    fn offered_actions_follow_the_current_status() {
        assert_eq!(
            ModerationAction::available_for(PostStatus::Deleted),
            [ModerationAction::Restore]
        );
        assert!(ModerationAction::available_for(PostStatus::Draft)
            .contains(&ModerationAction::Publish));
        assert!(!ModerationAction::available_for(PostStatus::Published)
            .contains(&ModerationAction::Publish));
    }
}
