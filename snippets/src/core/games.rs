//! Rules shared by the random games.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Correct,
    /// The guess is below the secret.
    TooLow,
    /// The guess is above the secret.
    TooHigh,
}

pub fn judge_guess(secret: i64, guess: i64) -> Guess {
    match guess.cmp(&secret) {
        std::cmp::Ordering::Equal => Guess::Correct,
        std::cmp::Ordering::Less => Guess::TooLow,
        std::cmp::Ordering::Greater => Guess::TooHigh,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    /// `0` is heads, anything else tails.
    pub fn from_draw(draw: i64) -> Self {
        if draw == 0 { Self::Heads } else { Self::Tails }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// Uppercase vowels only; letters are drawn from `'A'..='Z'`.
pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}
