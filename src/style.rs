//! Text styles and styled runs
//!
//! A [`Style`] is the register the decorator mutates while scanning; every
//! [`Run`] carries a copy of it taken when the run's text was emitted.

use crate::color::{AnsiColor, Color, Palette};
use crate::render::RenderOptions;
use serde::Serialize;
use std::borrow::Cow;

/// Visual attributes applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Style {
    /// Foreground color
    pub foreground: Color,
    /// Background color, `None` when no background is painted
    pub background: Option<Color>,
    /// ANSI color name the background was set from, `None` for a direct color
    #[serde(skip)]
    pub background_ansi: Option<AnsiColor>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// Reset style for a palette whose default foreground is `foreground`
    pub const fn plain(foreground: Color) -> Self {
        Self {
            foreground,
            background: None,
            background_ansi: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self.background_ansi = None;
        self
    }

    /// Set the background from a named color resolved through `palette`
    pub fn with_ansi_background(mut self, color: AnsiColor, palette: &Palette) -> Self {
        self.background = Some(palette.get(color));
        self.background_ansi = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Background a renderer should paint for this style.
    ///
    /// A background set by the ANSI black code (`40`) is dropped when
    /// [`RenderOptions::suppress_black_background`] is set, whatever RGB
    /// value the palette gives black. It then looks the same as a
    /// background that was never set.
    pub fn paint_background(&self, options: &RenderOptions) -> Option<Color> {
        match self.background_ansi {
            Some(AnsiColor::Black) if options.suppress_black_background => None,
            _ => self.background,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain(Palette::STANDARD.default_foreground)
    }
}

/// A slice of visible text paired with the style it is drawn in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run<'a> {
    /// Visible text, borrowed from the input when contiguous there
    pub text: Cow<'a, str>,
    pub style: Style,
}

impl<'a> Run<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detach the run from the input it was decorated from
    pub fn into_owned(self) -> Run<'static> {
        Run {
            text: Cow::Owned(self.text.into_owned()),
            style: self.style,
        }
    }
}
