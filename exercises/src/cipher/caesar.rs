use super::shift::{shift_letter, ALPHABET_LEN};

pub fn caesar_cipher(message: &str, shift: i64) -> String {
    message.chars().map(|c| shift_letter(c, shift)).collect()
}

pub fn caesar_decipher(message: &str, shift: i64) -> String {
    // negate after reducing so i64::MIN has an inverse
    caesar_cipher(message, -shift.rem_euclid(ALPHABET_LEN))
}
