//! Single-letter shift primitives shared by the Caesar and Vigenère ciphers.
//!
//! Letters are positions 0..26 from 'A'; a shift moves the position and
//! wraps with a Euclidean modulo, so negative shifts rotate left.
//! A space is never shifted.

pub const ALPHABET_LEN: i64 = 26;

/// Shift `letter` right by `shift` places, wrapping inside `A..=Z`.
pub fn shift_letter(letter: char, shift: i64) -> char {
    if letter == ' ' {
        return ' ';
    }
    let position = letter as i64 - 'A' as i64;
    // reduce the shift first so extreme values cannot overflow
    let shifted = (position + shift.rem_euclid(ALPHABET_LEN)).rem_euclid(ALPHABET_LEN);
    char::from(b'A' + shifted as u8)
}

/// Shift `letter` by the alphabet position of `letter_shift` (A=0 .. Z=25).
pub fn shift_by_letter(letter: char, letter_shift: char) -> char {
    if letter == ' ' {
        return ' ';
    }
    shift_letter(letter, letter_offset(letter_shift))
}

/// Inverse of [`shift_by_letter`].
pub fn unshift_by_letter(letter: char, letter_shift: char) -> char {
    if letter == ' ' {
        return ' ';
    }
    shift_letter(letter, -letter_offset(letter_shift))
}

fn letter_offset(letter: char) -> i64 {
    letter as i64 - 'A' as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_within_alphabet() {
        assert_eq!(shift_letter('A', 0), 'A');
        assert_eq!(shift_letter('A', 2), 'C');
        assert_eq!(shift_letter('Z', 1), 'A');
        assert_eq!(shift_letter('X', 29), 'A');
    }

    #[test]
    fn negative_shift_wraps_left() {
        assert_eq!(shift_letter('A', -1), 'Z');
        assert_eq!(shift_letter('C', -55), 'Z');
    }

    #[test]
    fn space_is_untouched() {
        assert_eq!(shift_letter(' ', 5), ' ');
        assert_eq!(shift_by_letter(' ', 'Q'), ' ');
        assert_eq!(unshift_by_letter(' ', 'Q'), ' ');
    }

    #[test]
    fn extreme_shifts_do_not_overflow() {
        assert_eq!(shift_letter('A', i64::MAX), shift_letter('A', i64::MAX % 26));
        assert_eq!(shift_letter('A', i64::MIN), shift_letter('A', i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn letter_shift_uses_alphabet_position() {
        assert_eq!(shift_by_letter('A', 'A'), 'A');
        assert_eq!(shift_by_letter('B', 'K'), 'L');
        assert_eq!(shift_by_letter('Y', 'C'), 'A');
        assert_eq!(unshift_by_letter('L', 'K'), 'B');
    }
}
