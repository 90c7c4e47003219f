//! Colors and the ANSI color palette
//!
//! SGR color codes name one of 16 conventional terminal colors. The
//! [`Palette`] maps each name to a fixed RGB value; bright variants are
//! their own constants rather than a brightened copy of the base color.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create color from hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHexColor(hex.to_string()))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// The 16 named ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Create color from standard ANSI code offset (0-7)
    pub fn from_ansi_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(AnsiColor::Black),
            1 => Some(AnsiColor::Red),
            2 => Some(AnsiColor::Green),
            3 => Some(AnsiColor::Yellow),
            4 => Some(AnsiColor::Blue),
            5 => Some(AnsiColor::Magenta),
            6 => Some(AnsiColor::Cyan),
            7 => Some(AnsiColor::White),
            _ => None,
        }
    }

    /// Create color from bright ANSI code offset (0-7)
    pub fn from_bright_ansi_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(AnsiColor::BrightBlack),
            1 => Some(AnsiColor::BrightRed),
            2 => Some(AnsiColor::BrightGreen),
            3 => Some(AnsiColor::BrightYellow),
            4 => Some(AnsiColor::BrightBlue),
            5 => Some(AnsiColor::BrightMagenta),
            6 => Some(AnsiColor::BrightCyan),
            7 => Some(AnsiColor::BrightWhite),
            _ => None,
        }
    }

    pub fn is_bright(&self) -> bool {
        matches!(
            self,
            AnsiColor::BrightBlack
                | AnsiColor::BrightRed
                | AnsiColor::BrightGreen
                | AnsiColor::BrightYellow
                | AnsiColor::BrightBlue
                | AnsiColor::BrightMagenta
                | AnsiColor::BrightCyan
                | AnsiColor::BrightWhite
        )
    }
}

/// RGB values for the ANSI colors, shared by foreground and background codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Foreground used when no color code is active
    pub default_foreground: Color,
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub magenta: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_magenta: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl Palette {
    /// Built-in palette, usable in const contexts
    pub const STANDARD: Palette = Palette {
        default_foreground: Color::WHITE,
        black: Color::BLACK,
        red: Color::rgb(0xFF, 0x00, 0x00),
        green: Color::rgb(0x00, 0xFF, 0x00),
        yellow: Color::rgb(0xFF, 0xFF, 0x00),
        blue: Color::rgb(0x00, 0x00, 0xFF),
        magenta: Color::rgb(0xFF, 0x00, 0xFF),
        cyan: Color::rgb(0x00, 0xFF, 0xFF),
        white: Color::WHITE,
        bright_black: Color::rgb(0x88, 0x88, 0x88),
        bright_red: Color::rgb(0xFF, 0x66, 0x66),
        bright_green: Color::rgb(0x66, 0xFF, 0x66),
        bright_yellow: Color::rgb(0xFF, 0xFF, 0x66),
        bright_blue: Color::rgb(0x66, 0x66, 0xFF),
        bright_magenta: Color::rgb(0xFF, 0x66, 0xFF),
        bright_cyan: Color::rgb(0x66, 0xFF, 0xFF),
        bright_white: Color::WHITE,
    };

    /// Look up the RGB value of a named color
    pub fn get(&self, color: AnsiColor) -> Color {
        match color {
            AnsiColor::Black => self.black,
            AnsiColor::Red => self.red,
            AnsiColor::Green => self.green,
            AnsiColor::Yellow => self.yellow,
            AnsiColor::Blue => self.blue,
            AnsiColor::Magenta => self.magenta,
            AnsiColor::Cyan => self.cyan,
            AnsiColor::White => self.white,
            AnsiColor::BrightBlack => self.bright_black,
            AnsiColor::BrightRed => self.bright_red,
            AnsiColor::BrightGreen => self.bright_green,
            AnsiColor::BrightYellow => self.bright_yellow,
            AnsiColor::BrightBlue => self.bright_blue,
            AnsiColor::BrightMagenta => self.bright_magenta,
            AnsiColor::BrightCyan => self.bright_cyan,
            AnsiColor::BrightWhite => self.bright_white,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
