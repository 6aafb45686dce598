// Random string generation from fixed character sets.
//
// Entropy comes from `rand::rng()`, the thread-local generator. Character
// sets are indexed by byte and are meant to be the ASCII constants from
// `strkit_core::charset`.

use rand::Rng;

use strkit_core::charset::{ALPHA_LOWER, ALPHA_UPPER, CONSONANTS, NUMS, SPECIAL, VOWELS};

use crate::case::pascal_case;

// One random byte of a non-empty ASCII set.
fn pick(set: &str) -> char {
    let bytes = set.as_bytes();
    char::from(bytes[rand::rng().random_range(0..bytes.len())])
}

/// Returns one random character from `set`, or `None` when `set` is empty.
pub fn random_char(set: &str) -> Option<char> {
    if set.is_empty() {
        return None;
    }
    Some(pick(set))
}

/// Returns a string of `len` random characters drawn from `set`. An empty
/// `set` yields an empty string.
pub fn randoms(set: &str, len: usize) -> String {
    if set.is_empty() {
        return String::new();
    }
    let bytes = set.as_bytes();
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(bytes[rng.random_range(0..bytes.len())]))
        .collect()
}

/// Returns a random decimal digit.
pub fn random_num() -> char {
    pick(NUMS)
}

/// Returns a string of `len` random decimal digits.
pub fn random_nums(len: usize) -> String {
    randoms(NUMS, len)
}

/// Returns a random uppercase letter.
pub fn random_upper() -> char {
    pick(ALPHA_UPPER)
}

/// Returns a string of `len` random uppercase letters.
pub fn random_uppers(len: usize) -> String {
    randoms(ALPHA_UPPER, len)
}

/// Returns a random lowercase letter.
pub fn random_lower() -> char {
    pick(ALPHA_LOWER)
}

/// Returns a string of `len` random lowercase letters.
pub fn random_lowers(len: usize) -> String {
    randoms(ALPHA_LOWER, len)
}

/// Returns a random password special character.
pub fn random_special() -> char {
    pick(SPECIAL)
}

/// Returns a string of `len` random password special characters.
pub fn random_specials(len: usize) -> String {
    randoms(SPECIAL, len)
}

/// Returns a random string of `len` characters drawn from the enabled sets:
/// lowercase letters, uppercase letters, decimal digits. With every flag off
/// the result is empty.
pub fn random_string(lower: bool, upper: bool, nums: bool, len: usize) -> String {
    // The generator list is rebuilt per call from the flags; there is no
    // process-wide registry.
    let mut sets: Vec<&str> = Vec::with_capacity(3);
    if lower {
        sets.push(ALPHA_LOWER);
    }
    if upper {
        sets.push(ALPHA_UPPER);
    }
    if nums {
        sets.push(NUMS);
    }
    if sets.is_empty() {
        return String::new();
    }

    let mut rng = rand::rng();
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let set = sets[rng.random_range(0..sets.len())].as_bytes();
        out.push(char::from(set[rng.random_range(0..set.len())]));
    }
    out
}

/// Generates various random placeholder texts.
#[derive(Debug, Clone)]
pub struct Fake {
    /// Minimum length for generated names.
    pub min_name: usize,
    /// Maximum length (exclusive) for generated names.
    pub max_name: usize,
    /// Domain suffixes used for generated email addresses.
    pub domains: Vec<String>,
}

impl Default for Fake {
    fn default() -> Self {
        Fake {
            min_name: 2,
            max_name: 10,
            domains: vec![".com".to_owned(), ".net".to_owned(), ".org".to_owned()],
        }
    }
}

impl Fake {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // A pronounceable word: vowels and consonants with at most two
    // consonants and one vowel in a row.
    fn word(&self, len: usize) -> String {
        let mut rng = rand::rng();
        let mut out = String::with_capacity(len);
        let mut vowels = 0;
        let mut consonants = 0;
        for _ in 0..len {
            let vowel = if consonants == 2 {
                true
            } else if vowels == 1 {
                false
            } else {
                rng.random_bool(0.5)
            };
            if vowel {
                out.push(pick(VOWELS));
                vowels += 1;
                consonants = 0;
            } else {
                out.push(pick(CONSONANTS));
                consonants += 1;
                vowels = 0;
            }
        }
        out
    }

    fn name_len(&self) -> usize {
        if self.min_name >= self.max_name {
            return self.min_name;
        }
        rand::rng().random_range(self.min_name..self.max_name)
    }

    /// Returns a random capitalized name.
    pub fn name(&self) -> String {
        pascal_case(&self.word(self.name_len()))
    }

    /// Returns a random boolean.
    pub fn boolean(&self) -> bool {
        rand::rng().random_bool(0.5)
    }

    /// Returns a random email address under one of the configured domains.
    pub fn email(&self) -> String {
        let mut out = self.word(self.name_len());
        out.push('@');
        out.push_str(&self.word(self.name_len()));
        if !self.domains.is_empty() {
            let i = rand::rng().random_range(0..self.domains.len());
            out.push_str(&self.domains[i]);
        }
        out
    }
}
