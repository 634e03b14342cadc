//! Video attributes.
//!
//! These match the bit layout of the native library's `chtype`:
//! characters occupy bits 0-7, the color pair bits 8-15, and video
//! attributes the bits above. Values are passed through to the native
//! calls unchanged.

use crate::types::{AttrT, ChType, PairT};

/// Attribute shift - characters occupy bits 0-7.
pub const NCURSES_ATTR_SHIFT: u32 = 8;

/// Helper function for attribute bit positioning.
#[inline]
pub const fn ncurses_bits(mask: u32, shift: u32) -> ChType {
    (mask as ChType) << (shift + NCURSES_ATTR_SHIFT)
}

/// Normal display (no attributes).
pub const A_NORMAL: AttrT = 0;

/// Mask for extracting the character portion of a chtype.
pub const A_CHARTEXT: AttrT = (1 << NCURSES_ATTR_SHIFT) - 1;

/// Mask for extracting the color pair portion of a chtype.
pub const A_COLOR: AttrT = ((1 << 8) - 1) << NCURSES_ATTR_SHIFT;

/// Mask for extracting all attributes (everything except the character).
pub const A_ATTRIBUTES: AttrT = !A_CHARTEXT;

/// Standout mode (typically reverse video).
pub const A_STANDOUT: AttrT = ncurses_bits(1, 8);

/// Underline mode.
pub const A_UNDERLINE: AttrT = ncurses_bits(1, 9);

/// Reverse video mode.
pub const A_REVERSE: AttrT = ncurses_bits(1, 10);

/// Blinking text.
pub const A_BLINK: AttrT = ncurses_bits(1, 11);

/// Half-bright or dim text.
pub const A_DIM: AttrT = ncurses_bits(1, 12);

/// Bold or extra-bright text.
pub const A_BOLD: AttrT = ncurses_bits(1, 13);

/// Alternate character set (line drawing characters).
pub const A_ALTCHARSET: AttrT = ncurses_bits(1, 14);

/// Invisible text.
pub const A_INVIS: AttrT = ncurses_bits(1, 15);

/// Protected text (cannot be modified).
pub const A_PROTECT: AttrT = ncurses_bits(1, 16);

/// Compose the attribute bits selecting a color pair.
///
/// This is the native `COLOR_PAIR` macro; it performs no native call.
#[inline]
pub const fn color_pair(pair: PairT) -> AttrT {
    ncurses_bits(pair as u32, 0) & A_COLOR
}

/// Extract the color pair number from an attribute value.
///
/// Inverse of [`color_pair`], the native `PAIR_NUMBER` macro.
#[inline]
pub const fn pair_number(attrs: AttrT) -> PairT {
    ((attrs & A_COLOR) >> NCURSES_ATTR_SHIFT) as PairT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_bits_are_distinct() {
        let all = [
            A_STANDOUT,
            A_UNDERLINE,
            A_REVERSE,
            A_BLINK,
            A_DIM,
            A_BOLD,
            A_ALTCHARSET,
            A_INVIS,
            A_PROTECT,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_eq!(a & b, 0);
            }
            // Attributes never collide with the character or pair bits.
            assert_eq!(a & (A_CHARTEXT | A_COLOR), 0);
        }
    }

    #[test]
    fn test_color_pair_round_trip() {
        for pair in [0, 1, 7, 255] {
            assert_eq!(pair_number(color_pair(pair)), pair);
        }
    }

    #[test]
    fn test_color_pair_is_masked() {
        assert_eq!(color_pair(1), 1 << 8);
        assert_eq!(color_pair(255) & !A_COLOR, 0);
    }
}
