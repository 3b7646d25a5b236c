//! Deterministic attacks that drop characters.

/// Remove every vowel (`a e i o u`, any case) from `word`.
///
/// Words shorter than three characters and words made only of vowels are
/// returned unchanged.
///
/// ```rust
/// use libperturb::transform::disemvowel;
///
/// assert_eq!(disemvowel("apples"), "ppls");
/// assert_eq!(disemvowel("EUOUAE"), "EUOUAE");
/// assert_eq!(disemvowel("an"), "an");
/// ```
pub fn disemvowel(word: &str) -> String {
    let len = word.chars().count();
    if len < 3 {
        return word.to_string();
    }

    let vowels = word.chars().filter(|&c| is_vowel(c)).count();
    if vowels == len {
        return word.to_string();
    }

    word.chars().filter(|&c| !is_vowel(c)).collect()
}

/// Whether `c` is one of `AEIOU`, case-insensitively.
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Cut up to `cutoff` trailing characters without going below `min_len`.
///
/// ```rust
/// use libperturb::transform::truncate;
///
/// assert_eq!(truncate("apples", 3, 1), "apple");
/// assert_eq!(truncate("apples", 3, 5), "app");
/// assert_eq!(truncate("cat", 3, 1), "cat");
/// ```
pub fn truncate(word: &str, min_len: usize, cutoff: usize) -> String {
    let len = word.chars().count();
    let removed = cutoff.min(len.saturating_sub(min_len));
    word.chars().take(len - removed).collect()
}
