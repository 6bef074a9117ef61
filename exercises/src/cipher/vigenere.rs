//! Vigenère cipher with a key cursor that skips spaces.
//!
//! The key is cycled over the non-space characters of the message only:
//! for "ATTACK AT DAWN" and key "LEMON" the space after ATTACK leaves the
//! cursor on the second 'E' of the key stream, not the first.

use crate::error::CipherError;

use super::shift::{shift_by_letter, unshift_by_letter};

pub fn vigenere_cipher(message: &str, key: &str) -> Result<String, CipherError> {
    apply_key(message, key, shift_by_letter)
}

pub fn vigenere_decipher(message: &str, key: &str) -> Result<String, CipherError> {
    apply_key(message, key, unshift_by_letter)
}

fn apply_key(
    message: &str,
    key: &str,
    shift: fn(char, char) -> char,
) -> Result<String, CipherError> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(CipherError::InvalidKey(key.to_string()));
    }
    let key = key.as_bytes();
    let mut cursor = 0usize;

    let out = message
        .chars()
        .map(|c| {
            if c == ' ' {
                return c;
            }
            let k = char::from(key[cursor % key.len()]);
            cursor += 1;
            shift(c, k)
        })
        .collect();
    Ok(out)
}
