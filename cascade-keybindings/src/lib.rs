//! Key-binding table for the cascade terminal host.
//!
//! The table itself is owned by the host application. Everything else,
//! including the global settings record and each terminal's settings,
//! holds an [`AppKeyBindings`] handle to it, so a rebinding made through any
//! handle is visible through all of them.
//!
//! Parsing chord strings and dispatching key events are left to the host.

mod action;
mod chord;
mod defaults;
mod table;

pub use action::ShortcutAction;
pub use chord::{KeyChord, KeyModifiers};
pub use defaults::default_table;
pub use table::KeyBindingTable;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared handle to a [`KeyBindingTable`].
///
/// Cloning the handle never copies the table. Two handles compare equal
/// only when they point at the same table.
#[derive(Debug, Clone, Default)]
pub struct AppKeyBindings {
    table: Arc<RwLock<KeyBindingTable>>,
}

impl AppKeyBindings {
    /// Create a handle to a new, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `table` and return the first handle to it.
    pub fn from_table(table: KeyBindingTable) -> Self {
        log::debug!("Sharing key-binding table with {} bindings", table.len());
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Borrow the table for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, KeyBindingTable> {
        self.table.read()
    }

    /// Borrow the table for writing. Changes are seen by every handle.
    pub fn write(&self) -> RwLockWriteGuard<'_, KeyBindingTable> {
        self.table.write()
    }

    /// Look up the action bound to `chord`.
    pub fn try_key_chord(&self, chord: &KeyChord) -> Option<ShortcutAction> {
        self.table.read().action_for(chord)
    }

    /// Returns true if both handles refer to the same table.
    pub fn same_table(&self, other: &AppKeyBindings) -> bool {
        Arc::ptr_eq(&self.table, &other.table)
    }
}

impl PartialEq for AppKeyBindings {
    fn eq(&self, other: &Self) -> bool {
        self.same_table(other)
    }
}

impl Eq for AppKeyBindings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_table() {
        let bindings = AppKeyBindings::new();
        let copy = bindings.clone();
        let chord = KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'T');

        bindings.write().set_binding(ShortcutAction::NewTab, chord);

        assert!(bindings.same_table(&copy));
        assert_eq!(copy.try_key_chord(&chord), Some(ShortcutAction::NewTab));
    }

    #[test]
    fn test_equality_is_identity() {
        let a = AppKeyBindings::new();
        let b = AppKeyBindings::new();
        // Both tables are empty, but they are different tables.
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_from_table() {
        let mut table = KeyBindingTable::new();
        table.set_binding(
            ShortcutAction::OpenSettings,
            KeyChord::new(KeyModifiers::CTRL, 0xBC),
        );
        let bindings = AppKeyBindings::from_table(table);
        assert_eq!(bindings.read().len(), 1);
    }
}
