//! The key-binding table: a map from key chords to actions.

use crate::{KeyChord, ShortcutAction};
use std::collections::HashMap;

/// Table mapping key chords to shortcut actions.
///
/// A chord maps to at most one action. An action may be reachable from
/// several chords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBindingTable {
    bindings: HashMap<KeyChord, ShortcutAction>,
}

impl KeyBindingTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `chord` to `action`, replacing whatever the chord was bound to.
    pub fn set_binding(&mut self, action: ShortcutAction, chord: KeyChord) {
        match self.bindings.insert(chord, action) {
            Some(previous) if previous != action => {
                log::debug!("Rebound {} from {} to {}", chord, previous, action);
            }
            _ => log::debug!("Bound {} -> {}", chord, action),
        }
    }

    /// Remove every chord bound to `action`. Returns how many were removed.
    pub fn clear_binding(&mut self, action: ShortcutAction) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|_, bound| *bound != action);
        before - self.bindings.len()
    }

    /// Look up the action bound to a chord.
    pub fn action_for(&self, chord: &KeyChord) -> Option<ShortcutAction> {
        self.bindings.get(chord).copied()
    }

    /// Find one chord bound to `action`, if any.
    ///
    /// When several chords map to the same action the smallest virtual key
    /// wins, so the answer is stable across runs.
    pub fn chord_for(&self, action: ShortcutAction) -> Option<KeyChord> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(chord, _)| *chord)
            .min_by_key(|chord| {
                (
                    chord.vkey,
                    chord.modifiers.ctrl,
                    chord.modifiers.alt,
                    chord.modifiers.shift,
                )
            })
    }

    /// Check if the table has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of bound chords.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyModifiers;

    #[test]
    fn test_empty_table() {
        let table = KeyBindingTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_set_and_lookup() {
        let mut table = KeyBindingTable::new();
        let chord = KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'T');
        table.set_binding(ShortcutAction::NewTab, chord);

        assert_eq!(table.action_for(&chord), Some(ShortcutAction::NewTab));
        assert_eq!(table.chord_for(ShortcutAction::NewTab), Some(chord));
        assert_eq!(
            table.action_for(&KeyChord::from_char(KeyModifiers::CTRL, 'T')),
            None
        );
    }

    #[test]
    fn test_rebinding_replaces_action() {
        let mut table = KeyBindingTable::new();
        let chord = KeyChord::from_char(KeyModifiers::CTRL, 'W');
        table.set_binding(ShortcutAction::CloseTab, chord);
        table.set_binding(ShortcutAction::DuplicateTab, chord);

        assert_eq!(table.len(), 1);
        assert_eq!(table.action_for(&chord), Some(ShortcutAction::DuplicateTab));
        assert_eq!(table.chord_for(ShortcutAction::CloseTab), None);
    }

    #[test]
    fn test_clear_binding_removes_all_chords() {
        let mut table = KeyBindingTable::new();
        table.set_binding(
            ShortcutAction::CopyText,
            KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'C'),
        );
        table.set_binding(
            ShortcutAction::CopyText,
            KeyChord::new(KeyModifiers::CTRL, 0x2D),
        );
        table.set_binding(
            ShortcutAction::PasteText,
            KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'V'),
        );

        assert_eq!(table.clear_binding(ShortcutAction::CopyText), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.clear_binding(ShortcutAction::CopyText), 0);
    }

    #[test]
    fn test_chord_for_is_stable() {
        let mut table = KeyBindingTable::new();
        let insert = KeyChord::new(KeyModifiers::CTRL, 0x2D);
        let letter = KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'C');
        table.set_binding(ShortcutAction::CopyText, letter);
        table.set_binding(ShortcutAction::CopyText, insert);

        assert_eq!(table.chord_for(ShortcutAction::CopyText), Some(insert));
    }
}
