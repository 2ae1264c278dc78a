//! Actions that a key chord can be bound to.

use std::fmt;

/// An application-level action triggered by a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    CopyText,
    PasteText,
    NewTab,
    DuplicateTab,
    CloseTab,
    NextTab,
    PrevTab,
    /// Switch to the tab at the given zero-based index.
    SwitchToTab(u8),
    ScrollUp,
    ScrollDown,
    ScrollUpPage,
    ScrollDownPage,
    OpenSettings,
}

impl ShortcutAction {
    /// Stable snake_case name, used for logging.
    pub fn name(&self) -> String {
        match self {
            ShortcutAction::CopyText => "copy_text".to_string(),
            ShortcutAction::PasteText => "paste_text".to_string(),
            ShortcutAction::NewTab => "new_tab".to_string(),
            ShortcutAction::DuplicateTab => "duplicate_tab".to_string(),
            ShortcutAction::CloseTab => "close_tab".to_string(),
            ShortcutAction::NextTab => "next_tab".to_string(),
            ShortcutAction::PrevTab => "prev_tab".to_string(),
            ShortcutAction::SwitchToTab(index) => format!("switch_to_tab_{index}"),
            ShortcutAction::ScrollUp => "scroll_up".to_string(),
            ShortcutAction::ScrollDown => "scroll_down".to_string(),
            ShortcutAction::ScrollUpPage => "scroll_up_page".to_string(),
            ShortcutAction::ScrollDownPage => "scroll_down_page".to_string(),
            ShortcutAction::OpenSettings => "open_settings".to_string(),
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
