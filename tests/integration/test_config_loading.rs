//! Integration Tests for configuration loading
//!
//! Writes configuration files to temporary directories and loads them back.

use sgr_decorator::config::{ConfigFormat, ConfigLoader};
use sgr_decorator::{Color, DecoratorConfig, Error, Palette, RenderOptions};
use std::fs;
use tempfile::TempDir;

fn sample_config() -> DecoratorConfig {
    DecoratorConfig {
        palette: Palette {
            default_foreground: Color::rgb(0xE5, 0xE5, 0xE5),
            red: Color::rgb(0xCD, 0x31, 0x31),
            ..Palette::default()
        },
        render: RenderOptions {
            suppress_black_background: false,
        },
    }
}

#[test]
fn test_toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigLoader::save_to_path(&sample_config(), &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("default_foreground = \"#E5E5E5\""));

    let loaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(loaded, sample_config());
}

#[test]
fn test_json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    ConfigLoader::save_to_path(&sample_config(), &path).unwrap();
    let loaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(loaded, sample_config());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "palette: {}").unwrap();

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedConfigFormat { .. }));

    let err = ConfigLoader::save_to_path(&DecoratorConfig::default(), &path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedConfigFormat { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_path(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, Error::ConfigLoadFailed { .. }));
}

#[test]
fn test_invalid_color_in_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[palette]\nred = \"#12345\"\n").unwrap();

    let err = ConfigLoader::load_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParseFailed { ref format, .. } if format == "TOML"));
}

#[test]
fn test_search_paths_use_first_existing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.json");

    fs::write(&first, "[palette]\nred = \"#010203\"\n").unwrap();
    fs::write(&second, r##"{ "palette": { "red": "#040506" } }"##).unwrap();

    let loader = ConfigLoader::with_search_paths(vec![missing, first.clone(), second]);
    assert_eq!(loader.find_config(), Some(first));

    let config = loader.load_or_default().unwrap();
    assert_eq!(config.palette.red, Color::rgb(1, 2, 3));
}

#[test]
fn test_loaded_palette_drives_decoration() {
    let config = ConfigLoader::parse(
        "[palette]\nred = \"#CD3131\"\ndefault_foreground = \"#CCCCCC\"\n",
        ConfigFormat::Toml,
    )
    .unwrap();

    let runs = config.decorator().decorate("\x1b[31mred\x1b[0m plain");
    assert_eq!(runs[0].style.foreground, Color::rgb(0xCD, 0x31, 0x31));
    assert_eq!(runs[1].style.foreground, Color::rgb(0xCC, 0xCC, 0xCC));
}
