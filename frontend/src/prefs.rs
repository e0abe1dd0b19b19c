use web_sys::{window, Storage};

/// Theme preference key; holds `"light"` or `"dark"`.
pub const THEME: &str = "theme";
/// Show soft-deleted posts in the admin list.
pub const SHOW_DELETED: &str = "showDeleted";
/// Show draft posts in the admin list.
pub const SHOW_DRAFTS: &str = "showDrafts";
/// Show inline help tips.
pub const SHOW_HELP: &str = "showHelp";

fn storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// Stored value for `key`, if any. An absent key means "use the default",
/// never an error; a host without storage behaves like an empty store.
pub fn get(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Store `value` under `key` immediately and synchronously. Writes into an
/// unavailable or full storage are dropped; concurrent tabs race and the
/// last writer wins.
pub fn set(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Boolean preference with `default` when the key is absent.
pub fn flag_or(key: &str, default: bool) -> bool {
    parse_flag(get(key).as_deref(), default)
}

/// Boolean preference defaulting to off.
pub fn flag(key: &str) -> bool {
    flag_or(key, false)
}

/// Persist a boolean preference.
pub fn set_flag(key: &str, value: bool) {
    set(key, encode_flag(value));
}

/// Storage key for one collapsible workflow stage.
pub fn workflow_stage_key(stage: &str) -> String {
    format!("workflow-{stage}")
}

// Only the literal "true" counts as set; anything else stored under a flag
// key reads as false.
fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(value) => value == "true",
        None => default,
    }
}

fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_flag, parse_flag, workflow_stage_key};

    #[test]
    fn absent_keys_fall_back_to_the_default() {
        assert!(!parse_flag(None, false));
        assert!(parse_flag(None, true));
    }

    #[test]
    fn only_the_literal_true_reads_as_set() {
        assert!(parse_flag(Some("true"), false));
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some("TRUE"), true));
        assert!(!parse_flag(Some("1"), true));
    }

    #[test]
    fn flags_round_trip_through_their_encoding() {
        assert!(parse_flag(Some(encode_flag(true)), false));
        assert!(!parse_flag(Some(encode_flag(false)), true));
    }

    #[test]
    fn workflow_keys_are_namespaced_by_stage() {
        assert_eq!(workflow_stage_key("authoring"), "workflow-authoring");
    }
}
