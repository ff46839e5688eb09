use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Strip tag-like substrings, then escape HTML-special characters.
///
/// `&` is escaped first so entities produced by the later substitutions are
/// left alone. The result is not idempotent: running it again escapes the
/// `&` of every entity a second time.
pub fn sanitize_text(text: &str) -> String {
    RE_TAG
        .replace_all(text, "")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
}

/// [`sanitize_text`] with line breaks rendered as `<br>`, for HTML bodies.
pub fn sanitize_multiline(text: &str) -> String {
    sanitize_text(text).replace('\n', "<br>")
}
