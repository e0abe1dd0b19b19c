//! Shared data model and client-side rules for the Draftboard admin UI.
//!
//! Everything here is plain Rust with no web dependencies, so the filter
//! and moderation logic can be unit tested on the host while the frontend
//! crate reuses the same types against the real server.

pub mod filter;
pub mod moderation;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a post as reported by the server.
///
/// Serialized lowercase to match the wire format and the status slugs used
/// by the admin markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Written but not yet live.
    Draft,
    /// Live on the site.
    Published,
    /// Soft-deleted. Deleted posts stay in the list and are hidden by
    /// default; they are never removed client-side.
    Deleted,
}

impl PostStatus {
    /// Lowercase identifier used in URLs and filter controls.
    pub fn slug(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Deleted => "deleted",
        }
    }

    /// Parse a filter-control value. Empty or unknown input means "no
    /// status filter", not an error.
    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "deleted" => Some(PostStatus::Deleted),
            _ => None,
        }
    }

    /// Badge label shown in the post table.
    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
            PostStatus::Deleted => "Deleted",
        }
    }
}

/// One post as displayed by the admin list.
///
/// Created server-side and fetched as a list. The only field the client
/// ever mutates is `status`, and only after the server has confirmed a
/// moderation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier (the post slug).
    pub id: String,
    /// Working title.
    pub title: String,
    /// Optional subtitle shown under the title.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Author display name.
    pub author: String,
    /// Publish date as a plain `YYYY-MM-DD` string.
    pub date: String,
    /// Current lifecycle state.
    pub status: PostStatus,
    /// Concept / body excerpt, Markdown.
    #[serde(default)]
    pub concept: Option<String>,
    /// Tag set. Kept in server order; membership tests are exact.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Syndication status line from the server, e.g. `Published (ID: 123)`.
    #[serde(default)]
    pub clan_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::PostStatus;

    #[test]
    fn status_uses_lowercase_wire_format() {
        let encoded = serde_json::to_string(&PostStatus::Deleted).expect("serialize status");
        assert_eq!(encoded, "\"deleted\"");

        let decoded: PostStatus = serde_json::from_str("\"draft\"").expect("deserialize status");
        assert_eq!(decoded, PostStatus::Draft);
    }

    #[test]
    fn from_slug_ignores_case_and_padding() {
        assert_eq!(PostStatus::from_slug(" Published "), Some(PostStatus::Published));
        assert_eq!(PostStatus::from_slug(""), None);
        assert_eq!(PostStatus::from_slug("archived"), None);
    }
}
