pub mod caesar;
pub mod scytale;
pub mod shift;
pub mod vigenere;

pub use caesar::{caesar_cipher, caesar_decipher};
pub use scytale::{scytale_cipher, scytale_decipher};
pub use shift::{shift_by_letter, shift_letter, unshift_by_letter};
pub use vigenere::{vigenere_cipher, vigenere_decipher};
