//! Rich-text sanitization for user-authored HTML (summaries, descriptions).

use std::collections::HashSet;
use std::sync::OnceLock;

use ammonia::Builder;

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "strong", "b", "em", "i", "u", "s", "mark", "sub", "sup", "code", "pre",
    "blockquote", "ul", "ol", "li", "a", "span", "h1", "h2", "h3", "h4", "h5", "h6",
];

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

fn cleaner() -> &'static Builder<'static> {
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER.get_or_init(|| {
        let mut builder = Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
            .url_schemes(ALLOWED_SCHEMES.iter().copied().collect::<HashSet<_>>())
            .add_tag_attributes("a", &["target"])
            .link_rel(Some("noopener noreferrer nofollow"));
        builder
    })
}

/// Strips unsafe markup while keeping basic formatting. Scripts and styles are
/// removed with their content; event handlers, inline styles and
/// non-web URL schemes are dropped.
pub fn sanitize(html: &str) -> String {
    cleaner().clean(html).to_string()
}

/// True for editor output that carries no text: blank, or a lone empty paragraph.
pub fn is_empty_string(s: &str) -> bool {
    s == "<p></p>" || s.trim().is_empty()
}

/// Returns `href` when it is relative or uses a web-safe scheme, otherwise an
/// empty string so the link is omitted.
pub fn safe_href(href: &str) -> &str {
    let trimmed = href.trim();
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));

    match scheme_end {
        Some(idx) if trimmed[idx..].starts_with(':') => {
            let scheme = &trimmed[..idx];
            if ALLOWED_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
            {
                trimmed
            } else {
                ""
            }
        }
        _ => trimmed,
    }
}
