//! Letter rotation within a single 26-letter case alphabet

/// Number of letters in each case alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Floor-style modulo, always in `[0, m)` for a positive `m`
#[inline]
pub fn floor_mod(n: i64, m: i64) -> i64 {
    n.rem_euclid(m)
}

/// Shift amount, already truncated to a whole number of positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Shift(i64);

impl Shift {
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Stored amount (real shifts are kept already reduced mod 26)
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Shift reduced into `[0, 26)`, e.g. `-3` becomes `23`
    pub fn normalized(self) -> u8 {
        floor_mod(self.0, ALPHABET_LEN) as u8
    }

    /// Shift that undoes this one
    pub fn inverse(self) -> Self {
        // negating the residue, never the raw amount: -i64::MIN overflows
        Self(-i64::from(self.normalized()))
    }

    /// Truncates a real shift toward zero (`3.9` -> `3`, `-3.9` -> `-3`)
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_real(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        // reduce before the cast so magnitudes beyond i64 stay exact mod 26
        let reduced = amount.trunc() % ALPHABET_LEN as f64;
        Some(Self(reduced as i64))
    }
}

impl From<i64> for Shift {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<i32> for Shift {
    fn from(amount: i32) -> Self {
        Self(i64::from(amount))
    }
}

impl From<f64> for Shift {
    /// Non-finite values fall back to a zero shift; use [`Shift::from_real`]
    /// to reject them instead.
    fn from(amount: f64) -> Self {
        Self::from_real(amount).unwrap_or_default()
    }
}

/// Rotates an ASCII letter `shift` positions within its own case alphabet
///
/// Anything that is not an ASCII letter is returned unchanged.
pub fn shift_letter(letter: char, shift: impl Into<Shift>) -> char {
    if !letter.is_ascii_alphabetic() {
        return letter;
    }

    let shift: Shift = shift.into();
    let base = if letter == letter.to_ascii_uppercase() { b'A' } else { b'a' };
    let offset = letter as u8 - base;
    let rotated = (offset + shift.normalized()) % ALPHABET_LEN as u8;

    (base + rotated) as char
}
