//! sgrdeco - decorate ANSI-colored text from the command line
//!
//! Reads text from a file or stdin and prints the styled runs it decodes
//! to, as JSON, plain text, HTML or a readable listing.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use sgr_decorator::{
    ConfigLoader, DecoratorConfig, HtmlRenderer, PlainRenderer, Renderer, Run,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "sgrdeco", version, about = "Split ANSI SGR-styled text into styled runs")]
struct CliArgs {
    /// Input file, stdin when absent or `-`
    file: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Debug)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Runs as a JSON array
    Json,
    /// Visible text with escape sequences removed
    Plain,
    /// Inline-styled HTML spans
    Html,
    /// One line per run
    Debug,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(args.debug);
    debug!("Starting sgrdeco v{}", sgr_decorator::VERSION);

    let config = load_configuration(args.config.as_deref())?;
    let input = read_input(args.file.as_deref())?;

    let runs = config.decorator().decorate(&input);
    info!("Decorated {} bytes into {} runs", input.len(), runs.len());

    let output = render(&runs, args.format, &config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;
    Ok(())
}

/// Initialize logging to stderr; `RUST_LOG` overrides the level
fn init_logging(debug: bool) {
    let debug_env = env::var("SGRDECO_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn load_configuration(path: Option<&Path>) -> Result<DecoratorConfig> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(runs: &[Run<'_>], format: OutputFormat, config: &DecoratorConfig) -> Result<String> {
    let output = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(runs).context("Failed to serialize runs")?;
            json.push('\n');
            json
        }
        OutputFormat::Plain => PlainRenderer.render(runs),
        OutputFormat::Html => {
            let mut html = HtmlRenderer::new(config.render).render(runs);
            html.push('\n');
            html
        }
        OutputFormat::Debug => runs
            .iter()
            .map(|run| {
                let style = &run.style;
                let background = style
                    .paint_background(&config.render)
                    .map_or_else(|| "none".to_string(), |color| color.to_hex());
                format!(
                    "{:?} fg={} bg={} bold={} italic={} underline={}\n",
                    run.text(),
                    style.foreground,
                    background,
                    style.bold,
                    style.italic,
                    style.underline
                )
            })
            .collect(),
    };
    Ok(output)
}
