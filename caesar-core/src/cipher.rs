//! Whole-text Caesar transform built on the letter shifter

use crate::shift::{Shift, shift_letter};

/// Shift that is its own inverse
pub const ROT13: Shift = Shift::new(13);

/// Shifts every ASCII letter in `text` by `shift`, copying everything else
///
/// Output has the same number of chars as the input, position for position.
pub fn caesar_cipher(text: &str, shift: impl Into<Shift>) -> String {
    let shift: Shift = shift.into();

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                shift_letter(c, shift)
            } else {
                c
            }
        })
        .collect()
}

/// Undoes [`caesar_cipher`] for the same shift
pub fn decipher(text: &str, shift: impl Into<Shift>) -> String {
    let shift: Shift = shift.into();
    caesar_cipher(text, shift.inverse())
}

/// Applies [`ROT13`]; calling it twice returns the input
pub fn rot13(text: &str) -> String {
    caesar_cipher(text, ROT13)
}

/// A fixed key for repeated encrypt/decrypt calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caesar {
    shift: Shift,
}

impl Caesar {
    /// Key for `shift`, truncated and stored as given
    pub fn new(shift: impl Into<Shift>) -> Self {
        Self { shift: shift.into() }
    }

    /// The stored shift
    pub fn shift(&self) -> Shift {
        self.shift
    }

    /// Shifts `plain` forward by the key
    pub fn encrypt(&self, plain: &str) -> String {
        caesar_cipher(plain, self.shift)
    }

    /// Shifts `cipher` back by the key
    pub fn decrypt(&self, cipher: &str) -> String {
        decipher(cipher, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(caesar_cipher("abc", 3), "def");
        assert_eq!(caesar_cipher("xyz", 3), "abc");
        assert_eq!(caesar_cipher("hello", 0), "hello");
    }

    #[test]
    fn test_case_preservation() {
        assert_eq!(caesar_cipher("ABC", 3), "DEF");
        assert_eq!(caesar_cipher("HeLLo", 1), "IfMMp");
        assert_eq!(caesar_cipher("XYZ", 3), "ABC");
    }

    #[test]
    fn test_shift_values() {
        assert_eq!(caesar_cipher("abc", 29), "def");
        assert_eq!(caesar_cipher("def", -3), "abc");
        assert_eq!(caesar_cipher("hello", 13), "uryyb");
        assert_eq!(caesar_cipher("test", 26), "test");
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(caesar_cipher("", 5), "");
        assert_eq!(caesar_cipher("a", 1), "b");
        assert_eq!(caesar_cipher("Z", 1), "A");
        assert_eq!(caesar_cipher("Hello World!", 5), "Mjqqt Btwqi!");
    }

    #[test]
    fn test_full_sentences_and_alphabets() {
        assert_eq!(caesar_cipher("The Quick Brown Fox", 13), "Gur Dhvpx Oebja Sbk");
        assert_eq!(
            caesar_cipher("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 1),
            "BCDEFGHIJKLMNOPQRSTUVWXYZA"
        );
        assert_eq!(
            caesar_cipher("abcdefghijklmnopqrstuvwxyz", 25),
            "zabcdefghijklmnopqrstuvwxy"
        );
    }

    #[test]
    fn test_fractional_shift_truncates() {
        assert_eq!(caesar_cipher("hello", 3.5), caesar_cipher("hello", 3));
        assert_eq!(caesar_cipher("hello", 3.9), "khoor");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(caesar_cipher("café 42 ñ", 1), "dbgé 42 ñ");
        assert_eq!(caesar_cipher("Ωmega", 2), "Ωogic");
    }

    #[test]
    fn test_rot13_is_involution() {
        let text = "The Quick Brown Fox";
        assert_eq!(rot13(&rot13(text)), text);
        assert_eq!(rot13("hello"), "uryyb");
    }

    #[test]
    fn test_decipher_and_key() {
        assert_eq!(decipher("Mjqqt Btwqi!", 5), "Hello World!");
        assert_eq!(decipher("abc", -3), "def");

        let key = Caesar::new(-7);
        assert_eq!(key.shift(), Shift::new(-7));
        let enc = key.encrypt("Attack at dawn");
        assert_ne!(enc, "Attack at dawn");
        assert_eq!(key.decrypt(&enc), "Attack at dawn");
        assert_eq!(Caesar::default().encrypt("same"), "same");
    }
}
