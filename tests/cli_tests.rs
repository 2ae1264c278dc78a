//! End-to-end tests for the cascade host: settings file in, report out.

use cascade::app::{self, load_globals, terminal_settings_for};
use cascade::cli::Cli;
use cascade_config::{AppKeyBindings, ColorScheme, SettingsError, ShortcutAction};
use cascade_keybindings::{KeyChord, KeyModifiers, default_table};
use clap::Parser;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let mut out = Vec::new();
    app::run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn prints_normalized_globals() {
    let file = settings_file(r#"{ "alwaysShowTabs": true, "initialCols": 120.5 }"#);
    let path = file.path().to_str().expect("utf-8 path");

    let output = run_cli(&["cascade", "--settings", path]).expect("run succeeds");
    let printed: serde_json::Value = serde_json::from_str(output.trim()).expect("json output");

    assert_eq!(
        printed,
        json!({
            "defaultProfile": "{00000000-0000-0000-0000-000000000000}",
            "initialRows": 30,
            "initialCols": 120,
            "alwaysShowTabs": true,
        })
    );
}

#[test]
fn apply_reports_terminal_settings() {
    let file = settings_file(r#"{ "initialRows": 50 }"#);
    let path = file.path().to_str().expect("utf-8 path");

    let output = run_cli(&[
        "cascade",
        "--settings",
        path,
        "--apply",
        "--color-scheme",
        "Solarized Dark",
    ])
    .expect("run succeeds");

    assert!(output.contains("terminal.initialRows = 50"));
    assert!(output.contains("terminal.initialCols = 80"));
    assert!(output.contains("terminal.keyBindings = 21 bindings (shared)"));
    assert!(output.contains("terminal.background = #002b36"));
}

#[test]
fn unknown_color_scheme_is_an_error() {
    let file = settings_file("{}");
    let path = file.path().to_str().expect("utf-8 path");

    let err = run_cli(&["cascade", "-s", path, "--apply", "--color-scheme", "Nope"])
        .expect_err("unknown scheme");
    let message = format!("{err:#}");
    assert!(message.contains("Unknown color scheme 'Nope'"));
    assert!(message.contains("Campbell"));
}

#[test]
fn malformed_guid_surfaces_settings_error() {
    let file = settings_file(r#"{ "defaultProfile": "not-a-guid" }"#);
    let path = file.path().to_str().expect("utf-8 path");

    let err = run_cli(&["cascade", "--settings", path]).expect_err("bad guid");
    assert!(matches!(
        err.downcast_ref::<SettingsError>(),
        Some(SettingsError::InvalidGuid { .. })
    ));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let err = run_cli(&["cascade", "--settings", path.to_str().expect("utf-8 path")])
        .expect_err("missing file");
    assert!(format!("{err:#}").contains("Failed to read settings file"));
}

#[test]
fn host_bindings_are_shared_with_terminals() {
    let host = AppKeyBindings::from_table(default_table());
    let globals = load_globals("{}", &host).expect("globals");
    let terminal = terminal_settings_for(&globals, None).expect("terminal settings");

    let chord = KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'N');
    host.write().set_binding(ShortcutAction::NewTab, chord);

    let bindings = terminal.key_bindings.expect("bindings applied");
    assert!(bindings.same_table(&host));
    assert_eq!(bindings.try_key_chord(&chord), Some(ShortcutAction::NewTab));
}

#[test]
fn host_attaches_builtin_schemes() {
    let globals = load_globals("{}", &AppKeyBindings::new()).expect("globals");
    assert_eq!(globals.color_schemes(), ColorScheme::builtin().as_slice());

    let terminal = terminal_settings_for(&globals, None).expect("terminal settings");
    assert_eq!(terminal.color_table, ColorScheme::campbell().table());
}
