//! Rendering adapters
//!
//! Renderers turn a run sequence into some concrete output. They keep run
//! order and apply each run's style on its own; nothing here looks at escape
//! syntax.

use crate::style::{Run, Style};
use serde::{Deserialize, Serialize};

/// Options shared by the bundled renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Treat an explicit black background (`40`) like an unset one and
    /// skip painting it
    pub suppress_black_background: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            suppress_black_background: true,
        }
    }
}

/// Converts decorated runs into a rendered form
pub trait Renderer {
    type Output;

    fn render(&self, runs: &[Run<'_>]) -> Self::Output;
}

/// Renders the visible text only
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    type Output = String;

    fn render(&self, runs: &[Run<'_>]) -> String {
        runs.iter().map(Run::text).collect()
    }
}

/// Renders runs as inline-styled HTML `<span>` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Inline CSS for one style
    pub fn css(&self, style: &Style) -> String {
        let mut css = format!("color:{}", style.foreground);
        if let Some(background) = style.paint_background(&self.options) {
            css.push_str(&format!(";background-color:{}", background));
        }
        if style.bold {
            css.push_str(";font-weight:bold");
        }
        if style.italic {
            css.push_str(";font-style:italic");
        }
        if style.underline {
            css.push_str(";text-decoration:underline");
        }
        css
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, runs: &[Run<'_>]) -> String {
        let mut html = String::new();
        for run in runs {
            html.push_str("<span style=\"");
            html.push_str(&self.css(&run.style));
            html.push_str("\">");
            escape_html_into(run.text(), &mut html);
            html.push_str("</span>");
        }
        html
    }
}

fn escape_html_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
