/// Splits a line into words on runs of whitespace. Leading and trailing
/// whitespace is ignored, a blank line has no words.
///
/// ## Example
///
/// ```not_rust
/// "  Hi   there! " -> ["Hi", "there!"]
/// ```
pub fn word_tokenizer(line: &str) -> Vec<&str> { line.split_whitespace().collect() }
