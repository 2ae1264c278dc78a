//! Key chords: a set of modifiers plus a virtual key code.

use std::fmt;

/// Set of modifiers held down for a key chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
    };

    /// Returns true if no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift)
    }
}

/// A single key press together with its modifiers.
///
/// `vkey` is a platform virtual-key code. Letters and digits use their
/// uppercase ASCII value, matching the usual virtual-key layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: KeyModifiers,
    pub vkey: u16,
}

impl KeyChord {
    pub const fn new(modifiers: KeyModifiers, vkey: u16) -> Self {
        Self { modifiers, vkey }
    }

    /// Chord for an ASCII letter or digit; letters are normalized to uppercase.
    pub fn from_char(modifiers: KeyModifiers, key: char) -> Self {
        Self {
            modifiers,
            vkey: key.to_ascii_uppercase() as u16,
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        match char::from_u32(u32::from(self.vkey)) {
            Some(c) if c.is_ascii_alphanumeric() => parts.push(c.to_string()),
            _ => parts.push(format!("VK(0x{:02X})", self.vkey)),
        }

        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_uppercases() {
        let chord = KeyChord::from_char(KeyModifiers::CTRL, 't');
        assert_eq!(chord.vkey, u16::from(b'T'));
    }

    #[test]
    fn test_display() {
        let chord = KeyChord::from_char(KeyModifiers::CTRL_SHIFT, 'w');
        assert_eq!(chord.to_string(), "Ctrl+Shift+W");

        let tab = KeyChord::new(KeyModifiers::CTRL, 0x09);
        assert_eq!(tab.to_string(), "Ctrl+VK(0x09)");
    }

    #[test]
    fn test_modifiers_empty() {
        assert!(KeyModifiers::NONE.is_empty());
        assert!(KeyModifiers::default().is_empty());
        assert!(!KeyModifiers::CTRL.is_empty());
    }
}
