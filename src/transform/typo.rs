//! Table-driven typo attacks.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::tables::{KeyboardTable, NaturalTypoTable};

/// Replace one random character of `word` by a keyboard neighbor.
///
/// The attack fires with probability `probability`. One position is drawn
/// uniformly; if its character has neighbors in `table` it is replaced by a
/// random neighbor, uppercased when the original was uppercase. Otherwise
/// the word is returned unchanged.
pub fn keyboard_typo<R: Rng + ?Sized>(
    word: &str,
    table: &KeyboardTable,
    probability: f64,
    rng: &mut R,
) -> String {
    if rng.gen::<f64>() > probability {
        return word.to_string();
    }

    let mut chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return word.to_string();
    }

    let i = rng.gen_range(0..chars.len());
    let original = chars[i];
    let Some(&neighbor) = table.neighbors(original).and_then(|ns| ns.choose(rng)) else {
        return word.to_string();
    };

    chars[i] = if original.is_uppercase() {
        to_upper_single(neighbor)
    } else {
        neighbor
    };
    chars.into_iter().collect()
}

/// Replace `word` by one of its attested misspellings.
///
/// Fires with probability `probability`; the lookup is case-sensitive and
/// unknown words are returned unchanged.
pub fn natural_typo<R: Rng + ?Sized>(
    word: &str,
    table: &NaturalTypoTable,
    probability: f64,
    rng: &mut R,
) -> String {
    if rng.gen::<f64>() > probability {
        return word.to_string();
    }

    table
        .variants(word)
        .and_then(|variants| variants.choose(rng))
        .cloned()
        .unwrap_or_else(|| word.to_string())
}

// Characters whose uppercase form spans several chars (`ß`) stay as they are.
fn to_upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
