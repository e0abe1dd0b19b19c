use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Resolve a post image reference. Relative `images/` paths live on the
/// server; anything else passes through untouched.
pub fn image_url(path: &str) -> String {
    match path.strip_prefix("images/") {
        Some(filename) => image_endpoint(filename),
        None => path.to_string(),
    }
}

#[cfg(not(feature = "mock"))]
fn image_endpoint(filename: &str) -> String {
    format!("{}/images/{}", crate::api::API_BASE, filename)
}

#[cfg(feature = "mock")]
fn image_endpoint(filename: &str) -> String {
    format!("/images/{filename}")
}

/// Convert a concept body from Markdown into HTML with the common
/// extensions enabled. Relative image paths are rewritten to the server's
/// image endpoint.
pub fn markdown_to_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = CowStr::from(image_url(&dest_url));
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            })
        },
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::{image_url, markdown_to_html};

    #[test]
    fn relative_images_are_routed_to_the_server() {
        assert!(image_url("images/kilt.jpg").ends_with("/images/kilt.jpg"));
        assert_ne!(image_url("images/kilt.jpg"), "images/kilt.jpg");
        assert_eq!(image_url("https://example.com/kilt.jpg"), "https://example.com/kilt.jpg");
    }

    #[test]
    fn markdown_renders_paragraphs_and_tables() {
        let rendered = markdown_to_html("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(rendered.contains("<h1>"));
        assert!(rendered.contains("<table>"));
        assert_eq!(markdown_to_html("   \n"), "");
    }
}
