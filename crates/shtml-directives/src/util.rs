//! Byte classification shared by the scanner and tokenizers.

/// ASCII whitespace in the C `isspace` sense: space, horizontal tab, line
/// feed, vertical tab, form feed, carriage return.
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
