//! Scytale transposition defined by index arithmetic.
//!
//! Variables:
//!   S    = shift (column count), S > 0
//!   n    = padded length, a multiple of S
//!   rows = n / S
//!
//! Equations:
//!   src(i)           = (i / rows) + (i % rows) * S      for i in 0..n
//!   encoded[i]       = padded[src(i)]
//!   decoded[src(i)]  = encoded[i]
//!
//! `src` is a permutation of 0..n, so deciphering is the exact positional
//! inverse and returns the padded text.

use tracing::trace;

use crate::error::CipherError;

pub const PADDING: char = '_';

pub fn scytale_cipher(message: &str, shift: usize) -> Result<String, CipherError> {
    if shift == 0 {
        return Err(CipherError::ZeroShift);
    }
    let mut padded: Vec<char> = message.chars().collect();
    let pad = (shift - padded.len() % shift) % shift;
    if pad > 0 {
        trace!(pad, shift, "padding scytale plaintext");
    }
    padded.extend(std::iter::repeat(PADDING).take(pad));

    let rows = padded.len() / shift;
    Ok((0..padded.len())
        .map(|i| padded[source_index(i, rows, shift)])
        .collect())
}

pub fn scytale_decipher(message: &str, shift: usize) -> Result<String, CipherError> {
    if shift == 0 {
        return Err(CipherError::ZeroShift);
    }
    let encoded: Vec<char> = message.chars().collect();
    if encoded.len() % shift != 0 {
        return Err(CipherError::MisalignedLength {
            len: encoded.len(),
            shift,
        });
    }

    let rows = encoded.len() / shift;
    let mut decoded = vec![PADDING; encoded.len()];
    for (i, &c) in encoded.iter().enumerate() {
        decoded[source_index(i, rows, shift)] = c;
    }
    Ok(decoded.into_iter().collect())
}

#[inline]
fn source_index(i: usize, rows: usize, shift: usize) -> usize {
    i / rows + (i % rows) * shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_multiple_of_shift() {
        let encoded = scytale_cipher("HELLOWORLD", 3).unwrap();
        assert_eq!(encoded.len(), 12);
        assert_eq!(encoded, "HLODEOR_LWL_");
    }

    #[test]
    fn decipher_keeps_padding() {
        assert_eq!(scytale_decipher("HLODEOR_LWL_", 3).unwrap(), "HELLOWORLD__");
    }

    #[test]
    fn aligned_message_needs_no_padding() {
        let encoded = scytale_cipher("INFORMATION_AGE", 5).unwrap();
        assert_eq!(encoded.len(), 15);
        assert_eq!(scytale_decipher(&encoded, 5).unwrap(), "INFORMATION_AGE");
    }

    #[test]
    fn shift_of_one_is_identity() {
        assert_eq!(scytale_cipher("ABC", 1).unwrap(), "ABC");
    }

    #[test]
    fn empty_message() {
        assert_eq!(scytale_cipher("", 4).unwrap(), "");
        assert_eq!(scytale_decipher("", 4).unwrap(), "");
    }

    #[test]
    fn rejects_zero_shift_and_misaligned_ciphertext() {
        assert_eq!(scytale_cipher("ABC", 0), Err(CipherError::ZeroShift));
        assert_eq!(scytale_decipher("ABC", 0), Err(CipherError::ZeroShift));
        assert_eq!(
            scytale_decipher("ABCDE", 3),
            Err(CipherError::MisalignedLength { len: 5, shift: 3 })
        );
    }
}
