/// Escape text for embedding into HTML element content or a quoted
/// attribute value.
///
/// ```not_rust
/// "<b>Tom & Jerry's</b>" -> "&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;"
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
