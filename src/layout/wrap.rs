use crate::layout::truncate_lines;
use crate::{FontSpec, Measurer, Pt, WrapConfig, WrapError};

/// A single line of wrapped output along with its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub content: String,
    pub width: Pt,
}

/// Wraps `text` to fit within `config.max_width` when set in `font`, then cuts the
/// result down to `config.max_line_count` lines (if non-zero), eliding the last
/// kept line.
///
/// # Wrapping Behavior
///
/// Hard newlines (`\n`) always start a new line, and blank input lines are kept as
/// empty output lines. Within a line, words are packed greedily: a word goes on the
/// current line if the line (ignoring leading and trailing whitespace) still fits,
/// otherwise it starts the next line. Whitespace between words on the same line is
/// kept verbatim.
///
/// Words that are wider than the line on their own are broken character by
/// character, and every piece after the first is prefixed with
/// `config.long_word_continuation`. A single character that is wider than
/// `max_width` can't be broken any further and is emitted on its own anyway, so
/// it is the only way a line can end up wider than `max_width`.
///
/// # Errors
///
/// Fails with [`WrapError::InvalidMaxWidth`] if `max_width` is NaN. Any font is
/// accepted, including an empty one; it is up to the measurer to make sense of it.
pub fn wrap_text<M: Measurer + ?Sized>(
    text: &str,
    font: &FontSpec,
    config: &WrapConfig,
    measurer: &M,
) -> Result<Vec<WrappedLine>, WrapError> {
    let lines = wrap_lines(text, font, config, measurer)?;
    Ok(truncate_lines(lines, font, config, measurer))
}

/// The wrapping half of [wrap_text]: breaks `text` into lines without applying the
/// line limit or measuring the final lines.
pub fn wrap_lines<M: Measurer + ?Sized>(
    text: &str,
    font: &FontSpec,
    config: &WrapConfig,
    measurer: &M,
) -> Result<Vec<String>, WrapError> {
    if config.max_width.is_nan() {
        return Err(WrapError::InvalidMaxWidth(config.max_width.0));
    }

    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let fragments = split_long_words(Tokens { rest: raw }, font, config, measurer);
        pack_fragments(fragments, font, config.max_width, measurer, &mut lines);
    }

    tracing::debug!(
        bytes = text.len(),
        lines = lines.len(),
        max_width = %config.max_width,
        font = %font,
        "wrapped text"
    );

    Ok(lines)
}

/// Splits a line into alternating runs of whitespace and non-whitespace, keeping
/// the whitespace runs as tokens of their own
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let whitespace = first.is_whitespace();
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() != whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Breaks every token that doesn't fit within `max_width` into fragments that do.
/// Whitespace tokens go through the same process.
fn split_long_words<'t, M: Measurer + ?Sized>(
    tokens: impl Iterator<Item = &'t str>,
    font: &FontSpec,
    config: &WrapConfig,
    measurer: &M,
) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    for token in tokens {
        let mut fragment = String::new();
        for ch in token.chars() {
            let was_empty = fragment.is_empty();
            fragment.push(ch);

            if !was_empty && measurer.measure(&fragment, font) > config.max_width {
                // the character doesn't fit: finish this fragment and carry the
                // character over to the next one
                fragment.pop();
                fragments.push(std::mem::take(&mut fragment));
                fragment.push_str(&config.long_word_continuation);
                fragment.push(ch);
            }
        }

        if !fragment.is_empty() {
            fragments.push(fragment);
        }
    }

    fragments
}

/// Greedily fills lines with fragments, appending completed (trimmed) lines to `lines`
fn pack_fragments<M: Measurer + ?Sized>(
    fragments: Vec<String>,
    font: &FontSpec,
    max_width: Pt,
    measurer: &M,
    lines: &mut Vec<String>,
) {
    let mut line = String::new();

    for fragment in fragments {
        if line.trim().is_empty() {
            line = fragment;
            continue;
        }

        let candidate = format!("{line}{fragment}");
        if measurer.measure(candidate.trim(), font) > max_width {
            lines.push(line.trim().to_string());
            line = fragment;
        } else {
            line = candidate;
        }
    }

    if !line.trim().is_empty() {
        lines.push(line.trim().to_string());
    }
}
