//! SGR Decorator - styled text runs from ANSI-colored text
//!
//! This library converts text containing ANSI SGR escape sequences
//! (`ESC [ ... m`) into an ordered list of styled runs that a renderer can
//! draw without knowing anything about escape syntax.
//!
//! ## Module Organization
//!
//! - [`decorator`] - The scanner that produces runs
//! - [`sgr`] - Escape sequence tokens and SGR code decoding
//! - [`style`] - `Style` and `Run` data types
//! - [`color`] - RGB colors, ANSI color names and the palette
//! - [`render`] - Renderer trait with plain text and HTML adapters
//! - [`config`] - Palette and renderer configuration files
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```
//! use sgr_decorator::{decorate, Palette};
//!
//! let runs = decorate("\x1b[31mHello\x1b[0m World");
//!
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text(), "Hello");
//! assert_eq!(runs[0].style.foreground, Palette::STANDARD.red);
//! assert_eq!(runs[1].text(), " World");
//! ```
//!
//! ## Supported codes
//!
//! Reset (`0` or empty), bold/italic/underline on (`1`, `3`, `4`) and off
//! (`22`, `23`, `24`), and the 16-color foreground (`30`-`37`, `90`-`97`) and
//! background (`40`-`47`, `100`-`107`) ranges. Other codes are ignored.
//!
//! ## Robustness
//!
//! Decoration never fails. An introducer with no terminating `m` anywhere
//! after it stays in the output as literal text.

#[macro_use]
extern crate tracing;

pub mod color;
pub mod config;
pub mod decorator;
pub mod error;
pub mod render;
pub mod sgr;
pub mod style;

// Re-exports for core functionality
pub use color::{AnsiColor, Color, Palette};
pub use config::{ConfigLoader, DecoratorConfig};
pub use decorator::{decorate, strip, Decorator};
pub use error::{Error, Result};
pub use render::{HtmlRenderer, PlainRenderer, RenderOptions, Renderer};
pub use sgr::{SgrCode, SgrSequence};
pub use style::{Run, Style};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
