//! Character classification used by the scanner.

pub use scribe_core::text::is_line_terminator as is_line_break;

/// Check if a character is whitespace (not line break).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// The value of `ch` as a digit in `radix`, if it is one.
#[inline]
pub fn digit_value(ch: char, radix: u32) -> Option<u32> {
    ch.to_digit(radix)
}

/// The value of a hex digit.
#[inline]
pub fn hex_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}
