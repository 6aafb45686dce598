// Character set constants and whole-string membership checks.

use crate::ascii;

/// Decimal digits.
pub const NUMS: &str = "0123456789";

/// Uppercase ASCII letters.
pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII letters, uppercase first.
pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Decimal digits followed by ASCII letters.
pub const ALPHA_NUMS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Special characters used in passwords. `<` and `>` may cause issues on
/// some systems.
pub const SPECIAL: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lowercase vowels.
pub const VOWELS: &str = "aeiou";

/// Lowercase consonants.
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Returns true if `s` is non-empty and consists exclusively of decimal
/// digits.
pub fn is_nums_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(ascii::is_digit)
}

/// Returns true if `s` is non-empty and consists exclusively of lowercase
/// ASCII letters.
pub fn is_alpha_lower_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(ascii::is_lower)
}

/// Returns true if `s` is non-empty and consists exclusively of uppercase
/// ASCII letters.
pub fn is_alpha_upper_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(ascii::is_upper)
}

/// Returns true if `s` is non-empty and consists exclusively of ASCII
/// letters.
pub fn is_alpha_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(ascii::is_letter)
}

/// Returns true if `s` is non-empty and consists exclusively of ASCII
/// letters and decimal digits.
pub fn is_alpha_nums_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(ascii::is_alphanumeric)
}
