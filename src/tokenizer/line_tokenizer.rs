/// Characters that end a line, on top of the `\r\n` pair.
const LINE_BOUNDARIES: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into lines on universal newlines, dropping the line endings.
/// A trailing line ending does not produce a trailing empty line.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "Line 1\r\nLine 2\n" -> ["Line 1", "Line 2"]
/// "a\n\nb" -> ["a", "", "b"]
/// ```
pub fn line_tokenizer(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !LINE_BOUNDARIES.contains(&c) {
            continue;
        }

        result.push(text[line_start..i].to_owned());
        line_start = i + c.len_utf8();

        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            line_start += 1;
        }
    }

    if line_start < text.len() {
        result.push(text[line_start..].to_owned());
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("", &[]; "empty")]
    #[test_case("Hello", &["Hello"]; "single line")]
    #[test_case("Hello\nWorld", &["Hello", "World"]; "two lines")]
    #[test_case("Hello\nWorld\n", &["Hello", "World"]; "trailing newline")]
    #[test_case("Line 1\r\nLine 2", &["Line 1", "Line 2"]; "crlf")]
    #[test_case("old\rmac", &["old", "mac"]; "lone carriage return")]
    #[test_case("\n", &[""]; "only newline")]
    #[test_case("\n\n", &["", ""]; "two newlines")]
    #[test_case("Start\n\nEnd", &["Start", "", "End"]; "blank line")]
    #[test_case("\r\n\r\n", &["", ""]; "blank crlf lines")]
    #[test_case("a\u{2028}b\u{85}c\u{0c}", &["a", "b", "c"]; "unicode separators")]
    fn test_line_tokenizer(text: &str, expected: &[&str]) {
        assert_eq!(line_tokenizer(text), expected);
    }
}
