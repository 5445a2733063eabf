use crate::domain::model::{LetterValue, NameBreakdown};

/// A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8.
pub const LETTER_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Table value of an uppercase letter; anything outside A-Z is 0.
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_alphabetic() {
        LETTER_VALUES[(letter.to_ascii_uppercase() as u8 - b'A') as usize]
    } else {
        0
    }
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

/// A-Z letters that are not vowels. `Y` is a consonant.
pub fn is_consonant(letter: char) -> bool {
    letter.is_ascii_alphabetic() && !is_vowel(letter)
}

/// Upper-cased characters of `name`; `ß` becomes `SS` and so on.
pub fn upper_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_uppercase)
}

pub fn breakdown(part: &str) -> NameBreakdown {
    NameBreakdown {
        part: part.to_string(),
        letters: upper_letters(part)
            .map(|letter| LetterValue {
                letter,
                value: letter_value(letter),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_in_range() {
        for letter in 'A'..='Z' {
            let value = letter_value(letter);
            assert!((1..=9).contains(&value), "{} -> {}", letter, value);
        }
    }

    #[test]
    fn test_cycle_boundaries() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn test_lowercase_and_non_letters() {
        assert_eq!(letter_value('z'), 8);
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('-'), 0);
        assert_eq!(letter_value('É'), 0);
        assert_eq!(letter_value('7'), 0);
    }

    #[test]
    fn test_vowels_and_consonants() {
        assert!(is_vowel('e'));
        assert!(!is_vowel('Y'));
        assert!(is_consonant('Y'));
        assert!(!is_consonant(' '));
        assert!(!is_consonant('A'));
    }

    #[test]
    fn test_breakdown_keeps_separators() {
        let b = breakdown("Costas Perez");
        assert_eq!(b.letters.len(), 12);
        assert_eq!(b.letters[0], LetterValue { letter: 'C', value: 3 });
        assert_eq!(b.letters[6], LetterValue { letter: ' ', value: 0 });
        assert_eq!(b.total(), 48);
    }
}
