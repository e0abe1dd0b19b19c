#![allow(dead_code)]

pub mod common {
    pub const LOADING: &str = "Loading…";
}

pub mod header {
    pub const BRAND: &str = "Draftboard";
    pub const NAV_ARIA: &str = "Main navigation";
    pub const NAV_POSTS: &str = "Posts";
    pub const NAV_NEW_POST: &str = "New Post";
    pub const NAV_LLM: &str = "LLM Settings";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod notice_banner {
    pub const CLOSE_ARIA: &str = "Dismiss notice";
}

pub mod posts_page {
    pub const TITLE: &str = "Posts";
    pub const FILTER_AUTHOR: &str = "Filter by author";
    pub const FILTER_DATE: &str = "Filter by date";
    pub const FILTER_SEARCH: &str = "Search title, subtitle, concept…";
    pub const STATUS_ANY: &str = "All statuses";
    pub const TAG_ANY: &str = "All tags";
    pub const SHOW_DELETED: &str = "Show Deleted";
    pub const HIDE_DELETED: &str = "Hide Deleted";
    pub const SHOW_DRAFTS: &str = "Show Drafts";
    pub const HIDE_DRAFTS: &str = "Hide Drafts";
    pub const HELP: &str = "Help";
    pub const EMPTY: &str = "No posts match the current filters.";
    pub const COUNT_TEMPLATE: &str = "Showing {} of {} posts";
    pub const ACTION_ARIA_TEMPLATE: &str = "{} this post";
    pub const HELP_DELETED: &str =
        "Deleted posts are kept on the server and can be restored at any time.";
    pub const HELP_DRAFTS: &str = "Drafts are only visible in the admin, never on the site.";
    pub const HELP_TAG: &str = "The tag list covers every tag in the full, unfiltered post list.";
}

pub mod post_detail {
    pub const BACK: &str = "Back to posts";
    pub const NOT_FOUND: &str = "Post not found.";
    pub const STAGE_CONCEPT: &str = "Concept";
    pub const STAGE_METADATA: &str = "Metadata";
    pub const STAGE_SYNDICATION: &str = "Syndication";
    pub const NO_CONCEPT: &str = "No concept written yet.";
    pub const NO_TAGS: &str = "No tags yet.";
    pub const NOT_SYNDICATED: &str = "Not published to clan.com yet.";
    pub const VIEW_RAW: &str = "View Markdown";
    pub const VIEW_RENDERED: &str = "View rendered";
}

pub mod post_form {
    pub const TITLE: &str = "New Post";
    pub const LABEL_TITLE: &str = "Working title";
    pub const LABEL_AUTHOR: &str = "Author";
    pub const LABEL_CONCEPT: &str = "Concept";
    pub const HINT_REQUIRED: &str = "All fields are required before saving.";
    pub const SAVE: &str = "Save";
    pub const SAVING: &str = "Saving…";
}

pub mod llm_page {
    pub const TITLE: &str = "LLM Settings";
    pub const SETTINGS_HEADING: &str = "Provider settings";
    pub const LABEL_PROVIDER: &str = "Provider";
    pub const LABEL_MODEL: &str = "Model";
    pub const LABEL_API_BASE: &str = "API base URL";
    pub const SAVE_SETTINGS: &str = "Update settings";
    pub const SAVING_SETTINGS: &str = "Updating…";
    pub const SETTINGS_SAVED: &str = "Settings updated successfully";
    pub const CURRENT_HEADING: &str = "Current settings";
    pub const CURRENT_NONE: &str = "No settings saved in this session yet.";
    pub const TEST_HEADING: &str = "Test prompt";
    pub const TEST_PLACEHOLDER: &str = "Enter a test prompt… (Enter sends, Shift+Enter breaks)";
    pub const TEST_BUTTON: &str = "Test LLM";
    pub const TESTING: &str = "Testing…";
    pub const ACTIONS_HEADING: &str = "Actions";
    pub const ACTIONS_EMPTY: &str = "No actions configured.";
    pub const PROMPTS_HEADING: &str = "Prompt templates";
    pub const PROMPTS_EMPTY: &str = "No prompt templates configured.";
    pub const PROMPT_SAVED: &str = "Prompt template updated successfully";
    pub const EDIT: &str = "Edit";
    pub const SAVE: &str = "Save";
    pub const CANCEL: &str = "Cancel";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "The page you are looking for does not exist.";
}
