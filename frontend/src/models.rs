//! Mock data so the admin UI can run without the server (`--features mock`).

use draftboard_shared::{Post, PostStatus};

use crate::api::{LlmAction, NewPostRequest, PromptTemplate};

fn post(
    id: &str,
    title: &str,
    subtitle: Option<&str>,
    author: &str,
    date: &str,
    status: PostStatus,
    concept: &str,
    tags: &[&str],
    clan_status: Option<&str>,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.map(str::to_string),
        author: author.to_string(),
        date: date.to_string(),
        status,
        concept: if concept.is_empty() {
            None
        } else {
            Some(concept.to_string())
        },
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        clan_status: clan_status.map(str::to_string),
    }
}

/// A small, varied post list: every status represented, overlapping tags,
/// a couple of authors.
pub fn mock_posts() -> Vec<Post> {
    vec![
        post(
            "kilt-evolution",
            "The Evolution of the Modern Kilt",
            Some("From great plaid to tailored garment"),
            "Nick",
            "2025-04-18",
            PostStatus::Published,
            "# The Evolution of the Modern Kilt\n\nThe kilt as we know it is a \
             surprisingly recent invention.\n\n![Great plaid](images/great-plaid.jpg)\n\n\
             - The *féileadh mòr*, or great plaid\n- The tailored *féileadh beag*\n",
            &["kilts", "history", "highland-dress"],
            Some("Published (ID: 312)"),
        ),
        post(
            "tartan-dyes",
            "Natural Dyes in Early Tartan",
            None,
            "Caitlin",
            "2025-03-02",
            PostStatus::Published,
            "Lichen, heather and alder bark gave early weavers their palette.",
            &["tartan", "history"],
            Some("Published (ID: 298)"),
        ),
        post(
            "quaich-traditions",
            "The Quaich: Scotland's Cup of Friendship",
            Some("A two-handled toast"),
            "Nick",
            "2025-04-21",
            PostStatus::Draft,
            "Draft notes on quaich etiquette at weddings and clan gatherings.",
            &["traditions", "whisky"],
            None,
        ),
        post(
            "clan-crest-law",
            "Who May Wear a Clan Crest?",
            None,
            "Caitlin",
            "2025-01-15",
            PostStatus::Draft,
            "",
            &["heraldry", "clans"],
            None,
        ),
        post(
            "burns-night-menu",
            "A Burns Night Menu Beyond Haggis",
            Some("Cock-a-leekie to cranachan"),
            "Nick",
            "2024-12-30",
            PostStatus::Deleted,
            "Superseded by the 2025 supper guide.",
            &["food", "traditions"],
            None,
        ),
        post(
            "highland-games-guide",
            "A Spectator's Guide to the Highland Games",
            None,
            "Moira",
            "2025-02-09",
            PostStatus::Published,
            "Caber, hammer and the tug o' war, explained for first-time visitors.",
            &["highland-games", "traditions"],
            Some("Published (ID: 305)"),
        ),
    ]
}

/// Fabricate the post the server would return for a create request.
pub fn mock_created_post(request: &NewPostRequest) -> Post {
    Post {
        id: slug_for_title(&request.working_title),
        title: request.working_title.clone(),
        subtitle: None,
        author: request.author.clone(),
        date: "2025-04-21".to_string(),
        status: PostStatus::Draft,
        concept: Some(request.concept.clone()),
        tags: Vec::new(),
        clan_status: None,
    }
}

/// Slug used as the mock post id: lowercased, spaces collapsed to dashes,
/// everything else alphanumeric kept.
pub fn slug_for_title(title: &str) -> String {
    let mut slug = String::new();
    for ch in title.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Canned prompt templates.
pub fn mock_prompts() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            id: "summary".to_string(),
            name: "Post summary".to_string(),
            content: "Summarise the following blog post in two sentences:\n\n{content}"
                .to_string(),
        },
        PromptTemplate {
            id: "tags".to_string(),
            name: "Tag suggestions".to_string(),
            content: "Suggest up to five lowercase tags for this post:\n\n{content}".to_string(),
        },
    ]
}

/// Canned pipeline actions.
pub fn mock_actions() -> Vec<LlmAction> {
    vec![
        LlmAction {
            name: "generate_metadata".to_string(),
            description: "Fill in missing summary and tags from the concept".to_string(),
        },
        LlmAction {
            name: "expand_concept".to_string(),
            description: "Draft full sections from the concept outline".to_string(),
        },
    ]
}

/// Echo-style test response.
pub fn mock_test_response(prompt: &str) -> String {
    format!("(mock provider) You asked: {}", prompt.trim())
}

#[cfg(test)]
mod tests {
    use super::slug_for_title;

    #[test]
    fn titles_become_url_safe_slugs() {
        assert_eq!(slug_for_title("The Quaich: Scotland's Cup"), "the-quaich-scotlands-cup");
        assert_eq!(slug_for_title("  Burns  Night  "), "burns-night");
    }
}
