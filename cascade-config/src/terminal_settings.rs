//! Per-terminal settings filled in by the global settings and a color scheme.

use crate::color_scheme::{Color, ColorScheme};
use crate::defaults;
use cascade_keybindings::AppKeyBindings;

/// Settings handed to a terminal control when it is created.
///
/// The host fills this from several sources; see
/// [`GlobalAppSettings::apply_settings`](crate::GlobalAppSettings::apply_settings)
/// and [`ColorScheme::apply_scheme`].
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSettings {
    /// Shared key-binding table, if the host has supplied one.
    pub key_bindings: Option<AppKeyBindings>,
    pub initial_rows: i32,
    pub initial_cols: i32,
    pub default_foreground: Color,
    pub default_background: Color,
    pub color_table: [Color; 16],
}

impl Default for TerminalSettings {
    fn default() -> Self {
        let scheme = ColorScheme::campbell();
        Self {
            key_bindings: None,
            initial_rows: defaults::rows(),
            initial_cols: defaults::cols(),
            default_foreground: scheme.foreground,
            default_background: scheme.background,
            color_table: scheme.table(),
        }
    }
}
