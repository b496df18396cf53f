//! Byte classifiers used by the head parser.

/// ASCII letter.
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// ASCII digit.
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Letter or digit.
pub fn is_word(b: u8) -> bool {
    is_letter(b) || is_digit(b)
}

/// `_` or `-`, allowed inside keys and urlids.
pub fn is_connector(b: u8) -> bool {
    b == b'_' || b == b'-'
}

/// Any byte that may continue a key (and every byte of a valid urlid).
pub fn is_key_byte(b: u8) -> bool {
    is_word(b) || is_connector(b)
}

/// Whitespace skipped between a key's `:` and its value.
///
/// Newline counts, so a key with an empty value takes the next line as its value.
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b' ' | b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert!(is_letter(b'a'));
        assert!(is_letter(b'Z'));
        assert!(!is_letter(b'0'));
        assert!(!is_letter(b'_'));
        assert!(!is_letter(0xC3));
    }

    #[test]
    fn test_key_bytes() {
        for b in b"abcXYZ019_-" {
            assert!(is_key_byte(*b), "{} should be a key byte", *b as char);
        }
        for b in b" :+#.\n\t" {
            assert!(!is_key_byte(*b), "{:?} should not be a key byte", *b as char);
        }
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(is_whitespace(b'\n'));
        assert!(!is_whitespace(b'\r'));
        assert!(!is_whitespace(b'x'));
    }
}
