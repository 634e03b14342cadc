//! Core type definitions for ncurses-bridge.
//!
//! These mirror the C types of the native ncurses ABI so that values can
//! cross the FFI boundary unchanged.

/// Character type with embedded attributes.
///
/// In ncurses, `chtype` is a 32-bit value where:
/// - Bits 0-7: The character
/// - Bits 8-31: Attributes and color pair
pub type ChType = u32;

/// Attribute type. Must be at least as wide as `ChType`.
pub type AttrT = ChType;

/// Mouse event mask type.
pub type MmaskT = u32;

/// Color value type.
///
/// The native library uses `short` for color values, which are indices
/// into the terminal's color palette.
pub type ColorT = i16;

/// Color pair index type.
pub type PairT = i16;

/// Window coordinate type.
pub type Coord = i32;

/// OK return value of the native library (success).
pub const OK: i32 = 0;

/// ERR return value of the native library (failure).
pub const ERR: i32 = -1;

/// Blocking-input delay value accepted by `timeout`.
pub const DELAY_BLOCKING: i32 = -1;

/// Non-blocking delay value accepted by `timeout`.
pub const DELAY_NONE: i32 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_constants() {
        assert_eq!(OK, 0);
        assert_eq!(ERR, -1);
    }
}
