//! core functionality for Caesar shift enciphering
//!
//! # Modules
//!
//! - `shift`: single-letter rotation and shift normalization
//! - `cipher`: whole-text transform, inverse and ROT13
//! - `value`: validation of loosely typed arguments
//! - `error`: invalid-argument errors

pub mod cipher;
pub mod error;
pub mod shift;
pub mod value;

// Re-export commonly used items
pub use cipher::{Caesar, ROT13, caesar_cipher, decipher, rot13};
pub use error::CipherError;
pub use shift::{ALPHABET_LEN, Shift, floor_mod, shift_letter};
pub use value::{Value, transform};
