//! Key codes returned by the `getch` family for special keys.
//!
//! These match the native library's `KEY_` definitions and are what
//! [`keyok`](crate::Curses::keyok) and
//! [`define_key`](crate::Curses::define_key) operate on.

/// Minimum curses key value.
pub const KEY_MIN: i32 = 0o401;

/// Break key (unreliable).
pub const KEY_BREAK: i32 = 0o401;

/// Down arrow key.
pub const KEY_DOWN: i32 = 0o402;

/// Up arrow key.
pub const KEY_UP: i32 = 0o403;

/// Left arrow key.
pub const KEY_LEFT: i32 = 0o404;

/// Right arrow key.
pub const KEY_RIGHT: i32 = 0o405;

/// Home key.
pub const KEY_HOME: i32 = 0o406;

/// Backspace key.
pub const KEY_BACKSPACE: i32 = 0o407;

/// Function key F0.
pub const KEY_F0: i32 = 0o410;

/// Function key F(n).
#[inline]
pub const fn key_f(n: i32) -> i32 {
    KEY_F0 + n
}

/// Delete line key.
pub const KEY_DL: i32 = 0o510;

/// Insert line key.
pub const KEY_IL: i32 = 0o511;

/// Delete character key.
pub const KEY_DC: i32 = 0o512;

/// Insert character key.
pub const KEY_IC: i32 = 0o513;

/// Next page key.
pub const KEY_NPAGE: i32 = 0o522;

/// Previous page key.
pub const KEY_PPAGE: i32 = 0o523;

/// Enter key.
pub const KEY_ENTER: i32 = 0o527;

/// Mouse event pseudo-key.
#[cfg(feature = "mouse")]
pub const KEY_MOUSE: i32 = 0o631;

/// Terminal resize pseudo-key.
pub const KEY_RESIZE: i32 = 0o632;

/// End key.
pub const KEY_END: i32 = 0o550;

/// Maximum key value.
pub const KEY_MAX: i32 = 0o777;
