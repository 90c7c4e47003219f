//! SGR escape sequence tokens
//!
//! An SGR sequence has the form `ESC [ <params> m`. [`SgrSequence`] is a
//! borrowed view of one such sequence in the source text and [`SgrCode`] is
//! one decoded parameter.

use crate::color::{AnsiColor, Palette};
use crate::style::Style;

/// Escape character that starts every control sequence
pub const ESC: u8 = 0x1b;

/// Control sequence introducer, `ESC [`
pub const CSI: &str = "\x1b[";

/// Final byte of a Select Graphic Rendition sequence
pub const SGR_TERMINATOR: u8 = b'm';

/// One `ESC [ ... m` sequence located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrSequence<'a> {
    /// Full sequence, introducer and terminator included
    raw: &'a str,
    /// Text between the introducer and the terminator
    params: &'a str,
}

impl<'a> SgrSequence<'a> {
    /// Locate the sequence starting at the beginning of `text`.
    ///
    /// The terminator is the first `m` anywhere after the introducer, so any
    /// other bytes in between become (ignored) parameters. Returns `None`
    /// when `text` does not start with the introducer or no `m` follows it.
    pub fn find(text: &'a str) -> Option<Self> {
        let rest = text.strip_prefix(CSI)?;
        let end = rest.bytes().position(|b| b == SGR_TERMINATOR)?;

        Some(Self {
            raw: &text[..CSI.len() + end + 1],
            params: &rest[..end],
        })
    }

    /// The whole sequence as it appeared in the source
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Byte length of the sequence in the source
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false: a located sequence holds at least `ESC [ m`
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw parameter string, e.g. `"1;31"`
    pub fn params(&self) -> &'a str {
        self.params
    }

    /// Decoded parameters, in order
    pub fn codes(&self) -> impl Iterator<Item = SgrCode> + 'a {
        self.params.split(';').map(SgrCode::parse)
    }

    /// Apply every parameter to `style`, later ones overriding earlier ones
    pub fn apply(&self, style: &mut Style, palette: &Palette) {
        for code in self.codes() {
            code.apply(style, palette);
        }
    }
}

/// A single decoded SGR parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    NormalIntensity,
    NotItalic,
    NotUnderlined,
    Foreground(AnsiColor),
    Background(AnsiColor),
    /// Numeric code outside the supported table
    Unsupported(u16),
    /// Parameter that is not a decimal number
    Malformed,
}

impl SgrCode {
    /// Decode one parameter. An empty parameter means reset.
    pub fn parse(param: &str) -> Self {
        if param.is_empty() {
            return SgrCode::Reset;
        }
        if !param.bytes().all(|b| b.is_ascii_digit()) {
            return SgrCode::Malformed;
        }
        match param.parse::<u16>() {
            Ok(code) => Self::from_code(code),
            Err(_) => SgrCode::Malformed,
        }
    }

    /// Decode a numeric parameter
    pub fn from_code(code: u16) -> Self {
        let color = match code {
            30..=37 => AnsiColor::from_ansi_code(code - 30).map(SgrCode::Foreground),
            40..=47 => AnsiColor::from_ansi_code(code - 40).map(SgrCode::Background),
            90..=97 => AnsiColor::from_bright_ansi_code(code - 90).map(SgrCode::Foreground),
            100..=107 => AnsiColor::from_bright_ansi_code(code - 100).map(SgrCode::Background),
            _ => None,
        };
        if let Some(color) = color {
            return color;
        }

        match code {
            0 => SgrCode::Reset,
            1 => SgrCode::Bold,
            3 => SgrCode::Italic,
            4 => SgrCode::Underline,
            22 => SgrCode::NormalIntensity,
            23 => SgrCode::NotItalic,
            24 => SgrCode::NotUnderlined,
            other => SgrCode::Unsupported(other),
        }
    }

    /// Mutate `style` according to this code. Unsupported and malformed
    /// codes leave it untouched.
    pub fn apply(self, style: &mut Style, palette: &Palette) {
        match self {
            SgrCode::Reset => *style = Style::plain(palette.default_foreground),
            SgrCode::Bold => style.bold = true,
            SgrCode::Italic => style.italic = true,
            SgrCode::Underline => style.underline = true,
            SgrCode::NormalIntensity => style.bold = false,
            SgrCode::NotItalic => style.italic = false,
            SgrCode::NotUnderlined => style.underline = false,
            SgrCode::Foreground(color) => style.foreground = palette.get(color),
            SgrCode::Background(color) => {
                *style = style.with_ansi_background(color, palette);
            }
            SgrCode::Unsupported(code) => trace!("Ignoring unsupported SGR code {}", code),
            SgrCode::Malformed => trace!("Ignoring malformed SGR parameter"),
        }
    }
}
