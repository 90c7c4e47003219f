//! SGR Decorator
//!
//! Scans text left to right, applies every well-terminated SGR sequence to a
//! style register and emits the visible text as styled [`Run`]s. The scan is
//! total: unknown codes are ignored and an introducer that is never
//! terminated is kept as literal text.

use crate::color::Palette;
use crate::sgr::{SgrSequence, CSI, ESC};
use crate::style::{Run, Style};
use std::borrow::Cow;

/// Decorate `input` with the built-in palette
pub fn decorate(input: &str) -> Vec<Run<'_>> {
    Decorator::default().decorate(input)
}

/// Remove every recognized SGR sequence from `input`.
///
/// Borrows the input unchanged when it contains no recognized sequence.
pub fn strip(input: &str) -> Cow<'_, str> {
    let runs = decorate(input);
    match runs.as_slice() {
        [] => Cow::Borrowed(""),
        [run] => run.text.clone(),
        _ => Cow::Owned(runs.iter().map(Run::text).collect()),
    }
}

/// Converts escape-coded text into styled runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decorator {
    palette: Palette,
}

impl Decorator {
    /// Create a decorator that resolves color codes through `palette`
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Style in effect before any code and after a full reset
    pub fn base_style(&self) -> Style {
        Style::plain(self.palette.default_foreground)
    }

    /// Split `input` into styled runs.
    ///
    /// Adjacent runs never share a style. Concatenating the run texts gives
    /// `input` minus its recognized SGR sequences.
    pub fn decorate<'a>(&self, input: &'a str) -> Vec<Run<'a>> {
        let mut runs = RunBuilder::new(input);
        let mut style = self.base_style();
        let mut cursor = 0;

        while cursor < input.len() {
            let rest = &input[cursor..];

            if rest.as_bytes()[0] == ESC {
                if let Some(sequence) = SgrSequence::find(rest) {
                    sequence.apply(&mut style, &self.palette);
                    cursor += sequence.len();
                    continue;
                }

                if rest.starts_with(CSI) {
                    // No `m` anywhere after this point, so nothing further
                    // can terminate either.
                    debug!(
                        "Unterminated SGR introducer at byte {}, keeping {} bytes as text",
                        cursor,
                        rest.len()
                    );
                    runs.push(cursor..input.len(), style);
                    break;
                }
            }

            // Visible text runs up to the next escape character
            let next = rest.as_bytes()[1..]
                .iter()
                .position(|&b| b == ESC)
                .map_or(input.len(), |offset| cursor + 1 + offset);
            runs.push(cursor..next, style);
            cursor = next;
        }

        runs.finish()
    }
}

/// Accumulates runs, merging each new piece into the previous run when the
/// styles match
struct RunBuilder<'a> {
    input: &'a str,
    runs: Vec<Run<'a>>,
    /// Source range of the last run while its text is still one borrowed slice
    last_span: Option<std::ops::Range<usize>>,
}

impl<'a> RunBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            runs: Vec::new(),
            last_span: None,
        }
    }

    fn push(&mut self, span: std::ops::Range<usize>, style: Style) {
        if span.is_empty() {
            return;
        }

        let input = self.input;
        let piece = &input[span.clone()];
        if let Some(last) = self.runs.last_mut().filter(|last| last.style == style) {
            self.last_span = match self.last_span.take() {
                Some(prev) if prev.end == span.start => {
                    let merged = prev.start..span.end;
                    last.text = Cow::Borrowed(&input[merged.clone()]);
                    Some(merged)
                }
                _ => {
                    last.text.to_mut().push_str(piece);
                    None
                }
            };
            return;
        }

        self.runs.push(Run::new(piece, style));
        self.last_span = Some(span);
    }

    fn finish(self) -> Vec<Run<'a>> {
        self.runs
    }
}
