//! Default values for global settings.

/// Initial terminal height, in rows.
pub const DEFAULT_ROWS: i32 = 30;

/// Initial terminal width, in columns.
pub const DEFAULT_COLS: i32 = 80;

pub fn rows() -> i32 {
    DEFAULT_ROWS
}

pub fn cols() -> i32 {
    DEFAULT_COLS
}

pub fn always_show_tabs() -> bool {
    false
}
