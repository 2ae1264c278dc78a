//! The key bindings a fresh installation starts with.

use crate::{KeyBindingTable, KeyChord, KeyModifiers, ShortcutAction};

const VK_TAB: u16 = 0x09;
const VK_PRIOR: u16 = 0x21;
const VK_NEXT: u16 = 0x22;
const VK_UP: u16 = 0x26;
const VK_DOWN: u16 = 0x28;
const VK_OEM_COMMA: u16 = 0xBC;

/// Build the default key-binding table.
pub fn default_table() -> KeyBindingTable {
    let mut table = KeyBindingTable::new();
    let ctrl_shift = |key| KeyChord::from_char(KeyModifiers::CTRL_SHIFT, key);

    table.set_binding(ShortcutAction::CopyText, ctrl_shift('C'));
    table.set_binding(ShortcutAction::PasteText, ctrl_shift('V'));
    table.set_binding(ShortcutAction::NewTab, ctrl_shift('T'));
    table.set_binding(ShortcutAction::DuplicateTab, ctrl_shift('D'));
    table.set_binding(ShortcutAction::CloseTab, ctrl_shift('W'));
    table.set_binding(
        ShortcutAction::NextTab,
        KeyChord::new(KeyModifiers::CTRL, VK_TAB),
    );
    table.set_binding(
        ShortcutAction::PrevTab,
        KeyChord::new(KeyModifiers::CTRL_SHIFT, VK_TAB),
    );
    table.set_binding(
        ShortcutAction::ScrollUp,
        KeyChord::new(KeyModifiers::CTRL_SHIFT, VK_UP),
    );
    table.set_binding(
        ShortcutAction::ScrollDown,
        KeyChord::new(KeyModifiers::CTRL_SHIFT, VK_DOWN),
    );
    table.set_binding(
        ShortcutAction::ScrollUpPage,
        KeyChord::new(KeyModifiers::CTRL_SHIFT, VK_PRIOR),
    );
    table.set_binding(
        ShortcutAction::ScrollDownPage,
        KeyChord::new(KeyModifiers::CTRL_SHIFT, VK_NEXT),
    );
    table.set_binding(
        ShortcutAction::OpenSettings,
        KeyChord::new(KeyModifiers::CTRL, VK_OEM_COMMA),
    );

    // Ctrl+1 .. Ctrl+9
    for index in 0..9u8 {
        table.set_binding(
            ShortcutAction::SwitchToTab(index),
            KeyChord::from_char(KeyModifiers::CTRL, char::from(b'1' + index)),
        );
    }

    table
}
