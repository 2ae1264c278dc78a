//! Global settings for the cascade terminal host.
//!
//! This crate holds the application-wide settings record and converts it
//! to and from JSON. It includes:
//!
//! - `GlobalAppSettings`, the record and its JSON contract
//! - `TerminalSettings`, the per-terminal values it projects onto
//! - Named color schemes
//! - Braced GUID helpers for profile identifiers
//!
//! Locating or persisting the settings document is left to the host.

pub mod color_scheme;
pub mod defaults;
pub mod error;
pub mod global_settings;
pub mod guid;
pub mod terminal_settings;

// Re-export main types for convenience
pub use color_scheme::{Color, ColorScheme};
pub use error::SettingsError;
pub use global_settings::GlobalAppSettings;
pub use guid::{guid_from_string, guid_to_string};
pub use terminal_settings::TerminalSettings;

// The key-binding types appear in this crate's public API.
pub use cascade_keybindings::{
    AppKeyBindings, KeyBindingTable, KeyChord, KeyModifiers, ShortcutAction,
};
pub use uuid::Uuid;
