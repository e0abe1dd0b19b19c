//! Post list filtering.
//!
//! The admin list combines several independent filter controls. Their
//! current values are snapshotted into a [`FilterCriteria`] on every input
//! event and the visible set is recomputed from scratch; there is no
//! incremental update and no reordering.

use std::collections::BTreeSet;

use crate::{Post, PostStatus};

/// Snapshot of every active filter control.
///
/// A pure value: matching has no side effects, so identical
/// `(posts, criteria)` pairs always produce identical visible sets.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring required in the author field.
    pub author: String,
    /// Substring required in the `YYYY-MM-DD` date field.
    pub date: String,
    /// Exact status to show; `None` shows every status.
    pub status: Option<PostStatus>,
    /// Case-insensitive substring searched in title, subtitle and concept.
    pub search: String,
    /// Tag that must be present, matched exactly.
    pub tag: Option<String>,
    /// Show soft-deleted posts.
    pub show_deleted: bool,
    /// Show drafts. On by default, so an otherwise empty criteria set
    /// shows every non-deleted post.
    pub show_drafts: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            author: String::new(),
            date: String::new(),
            status: None,
            search: String::new(),
            tag: None,
            show_deleted: false,
            show_drafts: true,
        }
    }
}

impl FilterCriteria {
    /// Whether `post` passes every active predicate.
    pub fn matches(&self, post: &Post) -> bool {
        let author_ok = contains_ci(&post.author, &self.author);
        let date_ok = self.date.is_empty() || post.date.contains(&self.date);
        let status_ok = self.status.map_or(true, |status| post.status == status);
        let search_ok = self.search.is_empty()
            || contains_ci(&post.title, &self.search)
            || post
                .subtitle
                .as_deref()
                .map_or(false, |subtitle| contains_ci(subtitle, &self.search))
            || post
                .concept
                .as_deref()
                .map_or(false, |concept| contains_ci(concept, &self.search));
        let tag_ok = self
            .tag
            .as_deref()
            .map_or(true, |tag| post.tags.iter().any(|candidate| candidate == tag));
        let deleted_ok = self.show_deleted || post.status != PostStatus::Deleted;
        let drafts_ok = self.show_drafts || post.status != PostStatus::Draft;

        let visible =
            author_ok && date_ok && status_ok && search_ok && tag_ok && deleted_ok && drafts_ok;

        if post.status == PostStatus::Deleted {
            tracing::debug!(
                id = %post.id,
                show_deleted = self.show_deleted,
                visible,
                "deleted post filter decision"
            );
        }

        visible
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Identifiers of the posts `criteria` permits, in the order they appear
/// in `posts`.
pub fn visible_ids(posts: &[Post], criteria: &FilterCriteria) -> Vec<String> {
    posts
        .iter()
        .filter(|post| criteria.matches(post))
        .map(|post| post.id.clone())
        .collect()
}

/// Sorted distinct tags across the full unfiltered list.
///
/// Populates the tag selector once per list load, not on every filter
/// pass.
pub fn tag_vocabulary(posts: &[Post]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for post in posts {
        for tag in &post.tags {
            tags.insert(tag.clone());
        }
    }
    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{tag_vocabulary, visible_ids, FilterCriteria};
    use crate::{Post, PostStatus};

    fn post(id: &str, status: PostStatus, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {id}"),
            subtitle: None,
            author: "Nick".to_string(),
            date: "2025-04-21".to_string(),
            status,
            concept: None,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            clan_status: None,
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("1", PostStatus::Draft, &["x"]),
            post("2", PostStatus::Deleted, &["y"]),
            post("3", PostStatus::Published, &["x", "y"]),
        ]
    }

    #[test]
    fn empty_criteria_hides_only_deleted() {
        let posts = sample();
        let visible = visible_ids(&posts, &FilterCriteria::default());
        assert_eq!(visible, ["1", "3"]);
    }

    #[test]
    fn show_deleted_reveals_deleted_posts() {
        let posts = sample();
        let criteria = FilterCriteria {
            show_deleted: true,
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["1", "2", "3"]);
    }

    #[test]
    fn tag_filter_requires_exact_membership() {
        let posts = sample();
        let criteria = FilterCriteria {
            tag: Some("x".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["1", "3"]);

        let criteria = FilterCriteria {
            tag: Some("X".to_string()),
            ..FilterCriteria::default()
        };
        assert!(visible_ids(&posts, &criteria).is_empty(), "tag match is exact, not case-folded");
    }

    #[test]
    fn author_and_search_match_case_insensitive_substrings() {
        let mut posts = sample();
        posts[0].subtitle = Some("A gentle Introduction".to_string());
        posts[2].concept = Some("Deep dive into tartan weaving".to_string());

        let criteria = FilterCriteria {
            author: "nIcK".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["1", "3"]);

        let criteria = FilterCriteria {
            search: "TARTAN".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["3"]);

        let criteria = FilterCriteria {
            search: "introduction".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["1"]);
    }

    #[test]
    fn date_filter_is_a_plain_substring() {
        let mut posts = sample();
        posts[0].date = "2024-12-31".to_string();

        let criteria = FilterCriteria {
            date: "2025-04".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["3"]);
    }

    #[test]
    fn status_filter_overrides_nothing_else() {
        let posts = sample();
        let criteria = FilterCriteria {
            status: Some(PostStatus::Deleted),
            show_deleted: true,
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["2"]);

        // Status filter alone cannot reveal deleted posts.
        let criteria = FilterCriteria {
            status: Some(PostStatus::Deleted),
            ..FilterCriteria::default()
        };
        assert!(visible_ids(&posts, &criteria).is_empty());
    }

    #[test]
    fn hiding_drafts_is_opt_in() {
        let posts = sample();
        let criteria = FilterCriteria {
            show_drafts: false,
            ..FilterCriteria::default()
        };
        assert_eq!(visible_ids(&posts, &criteria), ["3"]);
    }

    #[test]
    fn visibility_is_pure_and_order_preserving() {
        let posts = sample();
        let criteria = FilterCriteria {
            show_deleted: true,
            ..FilterCriteria::default()
        };
        let first = visible_ids(&posts, &criteria);
        let second = visible_ids(&posts, &criteria);
        assert_eq!(first, second);

        // The result is a subsequence of the input order.
        let order: Vec<&str> = posts.iter().map(|post| post.id.as_str()).collect();
        let mut cursor = 0;
        for id in &first {
            let position = order[cursor..]
                .iter()
                .position(|candidate| *candidate == id.as_str())
                .expect("visible id present in input order");
            cursor += position + 1;
        }
    }

    #[test]
    fn tag_vocabulary_is_sorted_and_distinct() {
        let posts = sample();
        assert_eq!(tag_vocabulary(&posts), ["x", "y"]);
        assert!(tag_vocabulary(&[]).is_empty());
    }
}
