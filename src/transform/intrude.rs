//! Punctuation intruders.

use rand::seq::SliceRandom;
use rand::Rng;

/// ASCII punctuation characters an intruder is drawn from.
pub const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Insert one randomly chosen punctuation character between letters of `word`.
///
/// A single intruder is picked per call. Two-letter words always get it
/// between their letters. For longer words each gap between two original
/// characters receives the intruder with probability `probability`; when no
/// gap was chosen the scan is repeated, at most `max_attempts` times, after
/// which the word is returned unchanged.
///
/// Words made only of punctuation and words shorter than two characters are
/// left alone.
pub fn intrude<R: Rng + ?Sized>(
    word: &str,
    probability: f64,
    max_attempts: usize,
    rng: &mut R,
) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 || is_punctuation(word) {
        return word.to_string();
    }

    let Some(&punct) = PUNCTUATION.choose(rng) else {
        return word.to_string();
    };

    if chars.len() == 2 {
        return [chars[0], punct, chars[1]].iter().collect();
    }

    for _ in 0..max_attempts {
        let mut perturbed = String::with_capacity(word.len() + chars.len());
        let mut inserted = false;

        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && rng.gen::<f64>() < probability {
                perturbed.push(punct);
                inserted = true;
            }
            perturbed.push(c);
        }

        if inserted {
            return perturbed;
        }
    }

    word.to_string()
}

/// Whether `word` consists only of ASCII punctuation.
pub fn is_punctuation(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strip(word: &str) -> String {
        word.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    #[test]
    fn test_punctuation_table_matches_ascii() {
        assert_eq!(PUNCTUATION.len(), 32);
        assert!(PUNCTUATION.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_two_letter_word_always_intruded() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let out = intrude("is", 0.0, 10, &mut rng);
            let chars: Vec<char> = out.chars().collect();
            assert_eq!(chars.len(), 3);
            assert_eq!(chars[0], 'i');
            assert_eq!(chars[2], 's');
            assert!(PUNCTUATION.contains(&chars[1]));
        }
    }

    #[test]
    fn test_skips_short_and_punctuation_words() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(intrude("a", 1.0, 10, &mut rng), "a");
        assert_eq!(intrude(".", 1.0, 10, &mut rng), ".");
        assert_eq!(intrude("...", 1.0, 10, &mut rng), "...");
        assert_eq!(intrude("?!", 1.0, 10, &mut rng), "?!");
    }

    #[test]
    fn test_full_probability_fills_every_gap() {
        let mut rng = StdRng::seed_from_u64(4);
        let out = intrude("apple", 1.0, 10, &mut rng);
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars.len(), 9);
        let punct = chars[1];
        assert!(PUNCTUATION.contains(&punct));
        assert_eq!(out, format!("a{p}p{p}p{p}l{p}e", p = punct));
    }

    #[test]
    fn test_single_intruder_kind_per_word() {
        let mut rng = StdRng::seed_from_u64(21);
        let out = intrude("intruders", 0.5, 10, &mut rng);
        assert_eq!(strip(&out), "intruders");
        let mut kinds: Vec<char> = out.chars().filter(|c| c.is_ascii_punctuation()).collect();
        kinds.dedup();
        assert_eq!(kinds.len(), 1);
        assert!(!out.starts_with(kinds[0]));
        assert!(!out.ends_with(kinds[0]));
    }

    #[test]
    fn test_zero_probability_terminates_unchanged() {
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(intrude("apple", 0.0, 10, &mut rng), "apple");
    }
}
