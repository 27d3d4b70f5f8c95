use super::value_objects::{RenderState, CURSOR_GLYPH};
use crate::domain::errors::{AppError, RenderResult};

/// Outcome of one reveal step over a stage's string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Partial reveal: a markup-safe prefix with the cursor glyph appended.
    Frame { html: String, next: RenderState },
    /// The string is fully revealed and committed without the glyph.
    Done { html: String },
}

/// Domain service for the character-by-character reveal.
///
/// A step advances over exactly one visible character, or over one whole
/// `<...>` tag so markup never renders half-open.
pub struct Typewriter;

impl Typewriter {
    /// One reveal step from `state` over `text`.
    pub fn advance(state: RenderState, text: &str) -> RenderResult<StepOutcome> {
        let cursor = state.value();
        if cursor >= text.len() {
            return Ok(StepOutcome::Done {
                html: text.to_string(),
            });
        }

        let rest = &text[cursor..];
        let next_cursor = match rest.chars().next() {
            Some('<') => match rest.find('>') {
                Some(close) => cursor + close + 1,
                None => {
                    return Err(AppError::MalformedMarkup(format!(
                        "unmatched '<' at byte {cursor} of {text:?}"
                    )));
                }
            },
            Some(ch) => cursor + ch.len_utf8(),
            None => {
                return Ok(StepOutcome::Done {
                    html: text.to_string(),
                });
            }
        };

        let mut html = String::with_capacity(next_cursor + CURSOR_GLYPH.len_utf8());
        html.push_str(&text[..next_cursor]);
        html.push(CURSOR_GLYPH);
        Ok(StepOutcome::Frame {
            html,
            next: RenderState::new(next_cursor),
        })
    }

    /// Every frame of one stage in order, ending with the committed text.
    pub fn reveal_sequence(text: &str) -> RenderResult<Vec<String>> {
        let mut frames = Vec::new();
        let mut state = RenderState::default();
        loop {
            match Self::advance(state, text)? {
                StepOutcome::Frame { html, next } => {
                    frames.push(html);
                    state = next;
                }
                StepOutcome::Done { html } => {
                    frames.push(html);
                    return Ok(frames);
                }
            }
        }
    }

    /// Text of an HTML fragment with complete tags stripped.
    /// A dangling `<` and everything after it is treated as invisible.
    pub fn visible_text(html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            match rest[open..].find('>') {
                Some(close) => rest = &rest[open + close + 1..],
                None => return out,
            }
        }
        out.push_str(rest);
        out
    }

    /// True when every `<` in the fragment has a matching `>` after it.
    pub fn markup_is_balanced(html: &str) -> bool {
        let mut rest = html;
        while let Some(open) = rest.find('<') {
            match rest[open..].find('>') {
                Some(close) => rest = &rest[open + close + 1..],
                None => return false,
            }
        }
        true
    }
}
