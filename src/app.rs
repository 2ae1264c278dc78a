//! The cascade host: loads the globals, wires in the shared key bindings and
//! built-in color schemes, and reports what a new terminal would receive.

use crate::cli::Cli;
use anyhow::{Context, Result, anyhow};
use cascade_config::{
    AppKeyBindings, ColorScheme, GlobalAppSettings, TerminalSettings, guid_to_string,
};
use std::fs;
use std::io::Write;

/// Build the host-side globals from JSON text.
///
/// The host owns the key-binding table and the built-in schemes; neither is
/// part of the globals JSON, so they are attached after parsing.
pub fn load_globals(text: &str, keybindings: &AppKeyBindings) -> Result<GlobalAppSettings> {
    let mut globals = GlobalAppSettings::from_json_str(text)?;
    globals.set_keybindings(keybindings.clone());
    globals.color_schemes_mut().extend(ColorScheme::builtin());
    Ok(globals)
}

/// Project the globals and an optional named scheme onto fresh terminal settings.
pub fn terminal_settings_for(
    globals: &GlobalAppSettings,
    color_scheme: Option<&str>,
) -> Result<TerminalSettings> {
    let mut terminal = TerminalSettings::default();
    globals.apply_settings(&mut terminal);

    if let Some(name) = color_scheme {
        let scheme = globals.find_color_scheme(name).ok_or_else(|| {
            let available: Vec<&str> = globals
                .color_schemes()
                .iter()
                .map(|scheme| scheme.name.as_str())
                .collect();
            anyhow!(
                "Unknown color scheme '{}' (available: {})",
                name,
                available.join(", ")
            )
        })?;
        log::debug!("Applying color scheme '{}'", scheme.name);
        scheme.apply_scheme(&mut terminal);
    }

    Ok(terminal)
}

/// Run the CLI: print the normalized globals JSON, then optionally the
/// terminal settings it projects onto.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    log::info!("Loading globals from {:?}", cli.settings);
    let text = fs::read_to_string(&cli.settings)
        .with_context(|| format!("Failed to read settings file {:?}", cli.settings))?;

    let keybindings = AppKeyBindings::from_table(cascade_keybindings::default_table());
    let globals = load_globals(&text, &keybindings)
        .with_context(|| format!("Invalid globals in {:?}", cli.settings))?;

    log::info!(
        "Default profile {}, {} color schemes, {} key bindings",
        guid_to_string(&globals.default_profile()),
        globals.color_schemes().len(),
        globals.keybindings().read().len()
    );

    writeln!(out, "{}", globals.to_json_string())?;

    if cli.apply {
        let terminal = terminal_settings_for(&globals, cli.color_scheme.as_deref())?;
        write_terminal_settings(&terminal, out)?;
    }

    Ok(())
}

fn write_terminal_settings(terminal: &TerminalSettings, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "terminal.initialRows = {}", terminal.initial_rows)?;
    writeln!(out, "terminal.initialCols = {}", terminal.initial_cols)?;
    match &terminal.key_bindings {
        Some(bindings) => writeln!(
            out,
            "terminal.keyBindings = {} bindings (shared)",
            bindings.read().len()
        )?,
        None => writeln!(out, "terminal.keyBindings = none")?,
    }
    writeln!(out, "terminal.foreground = {}", terminal.default_foreground)?;
    writeln!(out, "terminal.background = {}", terminal.default_background)?;
    let table: Vec<String> = terminal
        .color_table
        .iter()
        .map(|color| color.to_string())
        .collect();
    writeln!(out, "terminal.colorTable = {}", table.join(" "))?;
    Ok(())
}
