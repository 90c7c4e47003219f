//! Configuration for the decorator
//!
//! A configuration file can override palette colors and renderer options.
//! Every field is optional; missing fields keep their built-in defaults.

pub mod loader;

use crate::color::Palette;
use crate::decorator::Decorator;
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};

pub use loader::{ConfigFormat, ConfigLoader};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoratorConfig {
    /// Colors used for SGR color codes and the default foreground
    pub palette: Palette,

    /// Options for the bundled renderers
    pub render: RenderOptions,
}

impl DecoratorConfig {
    /// Build a decorator using this configuration's palette
    pub fn decorator(&self) -> Decorator {
        Decorator::new(self.palette.clone())
    }
}
