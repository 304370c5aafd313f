use pretty_assertions::assert_eq;
use revision_diff::{
    DiffOptions, FieldValue, LineKind, Question, TokenKind, diff_field, diff_words, escape_html,
    line_tokenizer, split_words_diff,
};

fn corpus() -> Vec<(FieldValue, FieldValue)> {
    vec![
        ("line one".into(), "line one\nline two".into()),
        (
            "line number one has changed".into(),
            "line one has actually changed".into(),
        ),
        (
            "line one\nline two\n\nline_four\nline five".into(),
            "line one\nline two\nline three".into(),
        ),
        (
            "Only born male transubstantial heir of Rudolf Virag".into(),
            "Only born male transubstantial heir of Rudolf Bloom".into(),
        ),
        (
            "To reflect that each <del> who enters\n\"imagines\" himself".into(),
            "To reflect that each <ins> who enters\n'imagines' himself to be the first".into(),
        ),
        ("GENTLEMEN\u{2751}OF".into(), "GENTLEMEN \u{2751} OF".into()),
        ("a b c d".into(), "a x d".into()),
        ("colour".into(), "cool colours".into()),
        ("\n\n".into(), "\nsomething\n".into()),
        (
            vec!["Burke", "Joseph Cuffe", "Dr Francis Brady"].into(),
            vec!["Burke", "Joseph Cuff", "Dr. Francis Brady", "Father Sebastian"].into(),
        ),
        (
            vec!["The lateness of the hour", "The obscurity of the night"].into(),
            vec!["The obscurity of the night"].into(),
        ),
        (vec!["", "Wisdom Hely"].into(), vec!["Wisdom Hely", ""].into()),
    ]
}

fn question() -> Question { Question::new("field", "Field") }

fn with_unchanged() -> DiffOptions { DiffOptions::new().with_include_unchanged_lines(true) }

fn lines(value: &FieldValue) -> Vec<String> {
    match value {
        FieldValue::Text(text) => line_tokenizer(text),
        FieldValue::List(items) => items.clone(),
        FieldValue::Unsupported => panic!("corpus values are comparable"),
    }
}

/// Splits rendered text into its emphasized and plain words.
fn emphasized_and_plain(text: &str) -> (Vec<String>, Vec<String>) {
    let mut emphasized = Vec::new();
    let mut plain = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("<strong>") {
        plain.extend(rest[..start].split_whitespace().map(str::to_owned));
        let inside = &rest[start + "<strong>".len()..];
        let end = inside.find("</strong>").expect("every span is closed");
        emphasized.extend(inside[..end].split_whitespace().map(str::to_owned));
        rest = &inside[end + "</strong>".len()..];
    }
    plain.extend(rest.split_whitespace().map(str::to_owned));

    (emphasized, plain)
}

#[test]
fn test_comparing_a_value_with_itself_shows_no_change() {
    for (before, after) in corpus() {
        for value in [before, after] {
            assert_eq!(
                diff_field(&question(), &value, &value, &DiffOptions::default()),
                None
            );

            if let Some(diff) = diff_field(&question(), &value, &value, &with_unchanged()) {
                assert!(
                    diff.rows()
                        .all(|(before, after)| !before.kind.is_change() && !after.kind.is_change()),
                    "{value:?}"
                );
            }
        }
    }
}

#[test]
fn test_every_line_position_is_shown_with_unchanged_lines() {
    for (before, after) in corpus() {
        let line_count = lines(&before).len().max(lines(&after).len());
        let diff = diff_field(&question(), &before, &after, &with_unchanged()).unwrap();

        assert_eq!(diff.before.len(), line_count, "{before:?} / {after:?}");
        assert_eq!(diff.after.len(), line_count, "{before:?} / {after:?}");
        assert_eq!(
            diff.before
                .iter()
                .map(|row| row.line_number)
                .collect::<Vec<_>>(),
            (1..=line_count).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_only_changed_positions_are_shown_by_default() {
    for (before, after) in corpus() {
        let Some(diff) = diff_field(&question(), &before, &after, &DiffOptions::default()) else {
            continue;
        };

        for (before_row, after_row) in diff.rows() {
            assert_eq!(before_row.line_number, after_row.line_number);
            assert!(
                before_row.kind.is_change() || after_row.kind.is_change(),
                "line {} of {before:?} / {after:?}",
                before_row.line_number
            );
        }
    }
}

#[test]
fn test_emphasis_only_covers_each_sides_own_changes() {
    for (before, after) in corpus() {
        let before_lines = lines(&before);
        let after_lines = lines(&after);
        let diff = diff_field(&question(), &before, &after, &with_unchanged()).unwrap();

        for (before_row, after_row) in diff.rows() {
            let index = before_row.line_number - 1;
            let tokens = diff_words(
                before_lines.get(index).map_or("", String::as_str),
                after_lines.get(index).map_or("", String::as_str),
            );
            let (before_tokens, after_tokens) = split_words_diff(&tokens);

            for (row, side_tokens, own_kind) in [
                (before_row, &before_tokens, TokenKind::Removal),
                (after_row, &after_tokens, TokenKind::Addition),
            ] {
                let words_of = |kind: TokenKind| -> Vec<String> {
                    side_tokens
                        .iter()
                        .filter(|token| token.kind == kind)
                        .map(|token| escape_html(&token.text))
                        .collect()
                };

                let (emphasized, plain) = emphasized_and_plain(&row.text);
                assert_eq!(emphasized, words_of(own_kind), "{}", row.text);
                assert_eq!(plain, words_of(TokenKind::Unchanged), "{}", row.text);
            }
        }
    }
}

#[test]
fn test_detail_hints_never_reach_the_rows() {
    for (before, after) in corpus() {
        let diff = diff_field(&question(), &before, &after, &with_unchanged()).unwrap();

        for row in diff.before.iter().chain(&diff.after) {
            let (emphasized, plain) = emphasized_and_plain(&row.text);
            let word_count = emphasized.len() + plain.len();

            assert_eq!(word_count == 0, row.kind == LineKind::Empty, "{row:?}");
            assert!(!row.text.contains('?'), "{row:?}");
            assert!(!row.text.contains('^'), "{row:?}");
        }
    }
}
