use crate::{
    types::{
        line_kind::LineKind,
        rendered_line_row::RenderedLineRow,
        word_token::{TokenKind, WordToken},
    },
    utils::escape_html::escape_html,
};

const EMPHASIS_START: &str = "<strong>";
const EMPHASIS_END: &str = "</strong>";

/// Renders one side of a line position. Words are escaped and joined with
/// single spaces; words of the line's own kind are emphasized, with adjacent
/// emphasized words sharing one span. Unchanged words are shown as-is and
/// words of any other kind are left out.
///
/// ```
/// use revision_diff::{LineKind, WordToken, render_line};
///
/// let row = render_line(
///     &[
///         WordToken::unchanged("in"),
///         WordToken::addition("space"),
///         WordToken::addition("&"),
///         WordToken::unchanged("time"),
///     ],
///     3,
///     LineKind::Addition,
/// );
///
/// assert_eq!(row.text, "in <strong>space &amp;</strong> time");
/// ```
#[must_use]
pub fn render_line(tokens: &[WordToken], line_number: usize, kind: LineKind) -> RenderedLineRow {
    let mut text = String::new();
    let mut is_emphasis_open = false;
    let mut is_first_word = true;

    for token in tokens {
        let is_emphasized = match token.kind {
            TokenKind::Unchanged => false,
            TokenKind::Addition | TokenKind::Removal if token.kind.line_kind() == Some(kind) => true,
            TokenKind::Addition | TokenKind::Removal | TokenKind::Detail => continue,
        };

        match (is_emphasis_open, is_emphasized) {
            (false, true) => {
                if !is_first_word {
                    text.push(' ');
                }
                text.push_str(EMPHASIS_START);
            }
            (true, false) => {
                text.push_str(EMPHASIS_END);
                text.push(' ');
            }
            _ => {
                if !is_first_word {
                    text.push(' ');
                }
            }
        }

        text.push_str(&escape_html(&token.text));
        is_emphasis_open = is_emphasized;
        is_first_word = false;
    }

    if is_emphasis_open {
        text.push_str(EMPHASIS_END);
    }

    RenderedLineRow {
        line_number,
        kind,
        text,
    }
}
