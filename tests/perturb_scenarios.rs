//! End-to-end scenarios for the perturbation engine.

use libperturb::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SENTENCE: &str = "I like apples very much.";

fn perturber() -> Perturber {
    Perturber::builtin().expect("bundled tables load")
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_disemvowel_every_eligible_word() {
    let out = perturber()
        .perturb(SENTENCE, "disemvowel", 1.0, &mut rng(0))
        .unwrap();
    assert_eq!(out, "I lk ppls vry mch.");
}

#[test]
fn test_truncate_keeps_three_letter_word() {
    let out = perturber().perturb("cat", "truncate", 1.0, &mut rng(0)).unwrap();
    assert_eq!(out, "cat");
}

#[test]
fn test_truncate_full_sentence() {
    let out = perturber().perturb(SENTENCE, "truncate", 1.0, &mut rng(0)).unwrap();
    assert_eq!(out, "I lik apple ver muc.");
}

#[test]
fn test_full_swap_zero_level_unchanged() {
    for seed in 0..5 {
        let out = perturber()
            .perturb(SENTENCE, "full-swap", 0.0, &mut rng(seed))
            .unwrap();
        assert_eq!(out, SENTENCE);
    }
}

#[test]
fn test_zero_level_keeps_quotes_and_signs() {
    let perturber = perturber();
    for text in [
        "She said \"hi\" to me.",
        "The students' books are here.",
        "It costs $5 today.",
    ] {
        for kind in AttackKind::ALL {
            let out = perturber.perturb(text, kind, 0.0, &mut rng(3)).unwrap();
            assert_eq!(out, text, "{kind} at level 0");
        }
    }
}

#[test]
fn test_unknown_method_fails() {
    let err = perturber()
        .perturb(SENTENCE, "reverse", 0.3, &mut rng(0))
        .unwrap_err();
    assert!(matches!(err, PerturbError::UnknownAttack(ref m) if m == "reverse"));
    assert_eq!(err.to_string(), "Unknown attack method: reverse");
}

#[test]
fn test_out_of_range_level_fails() {
    let p = perturber();
    for level in [1.5, -0.01, f64::NAN, f64::INFINITY] {
        let err = p.perturb(SENTENCE, "intrude", level, &mut rng(0)).unwrap_err();
        assert!(matches!(err, PerturbError::InvalidLevel(_)));
    }
}

#[test]
fn test_inner_swap_word_by_word() {
    let text = "perturbation engines generate adversarial sentences";
    let out = perturber()
        .with_tokenizer(WhitespaceTokenizer)
        .perturb(text, AttackKind::SwapInner, 1.0, &mut rng(12))
        .unwrap();

    let originals: Vec<&str> = text.split(' ').collect();
    let perturbed: Vec<&str> = out.split(' ').collect();
    assert_eq!(originals.len(), perturbed.len());
    for (o, p) in originals.iter().zip(&perturbed) {
        assert_eq!(o.len(), p.len());
        assert_eq!(o.chars().next(), p.chars().next());
        assert_eq!(o.chars().last(), p.chars().last());
        assert_ne!(o, p, "every word here has a shuffleable interior");
    }
}

#[test]
fn test_segment_only_removes_spaces() {
    let p = perturber();
    for seed in 0..10 {
        let out = p.perturb(SENTENCE, "segment", 0.5, &mut rng(seed)).unwrap();
        assert_eq!(out.replace(' ', ""), SENTENCE.replace(' ', ""));
    }
}

#[test]
fn test_segment_full_level_fuses_sentence() {
    let out = perturber().perturb(SENTENCE, "segment", 1.0, &mut rng(0)).unwrap();
    assert_eq!(out, "Ilikeapplesverymuch.");
}

#[test]
fn test_intrude_full_level() {
    let out = perturber()
        .with_tokenizer(WhitespaceTokenizer)
        .perturb("my apples", "intrude", 1.0, &mut rng(5))
        .unwrap();
    let words: Vec<&str> = out.split(' ').collect();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].chars().count(), 3);
    assert_eq!(words[1].chars().count(), 11);
    let stripped: String = out.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    assert_eq!(stripped, "my apples");
}

#[test]
fn test_natural_typo_with_bundled_table() {
    let out = perturber()
        .with_tokenizer(WhitespaceTokenizer)
        .perturb("because", "natural-typo", 1.0, &mut rng(1))
        .unwrap();
    assert!(["becuase", "beacuse", "becasue", "becouse"].contains(&out.as_str()));
}

#[test]
fn test_keyboard_typo_changes_one_letter_per_word() {
    let text = "keyboard typing errors";
    let out = perturber()
        .with_tokenizer(WhitespaceTokenizer)
        .perturb(text, "keyboard-typo", 1.0, &mut rng(8))
        .unwrap();
    for (o, p) in text.split(' ').zip(out.split(' ')) {
        assert_eq!(o.chars().count(), p.chars().count());
        let diff = o.chars().zip(p.chars()).filter(|(a, b)| a != b).count();
        assert!(diff <= 1, "{o} -> {p}");
    }
}

#[test]
fn test_budget_counts_successes_not_attempts() {
    let p = perturber();
    let report = p
        .perturb_detailed("a b c d word", "disemvowel", 0.2, &mut rng(3))
        .unwrap();
    let selection = report.selection.unwrap();
    assert_eq!(selection.target, 1);
    assert_eq!(selection.perturbed, 1);
    assert_eq!(report.text, "a b c d wrd");
}

#[test]
fn test_all_short_words_exhaust_pool() {
    let report = perturber()
        .perturb_detailed("a b c d e", "full-swap", 1.0, &mut rng(3))
        .unwrap();
    let selection = report.selection.unwrap();
    assert_eq!(selection.attempted, 5);
    assert_eq!(selection.perturbed, 0);
    assert_eq!(report.text, "a b c d e");
}

#[test]
fn test_empty_text() {
    let p = perturber();
    for kind in AttackKind::ALL {
        assert_eq!(p.perturb("", kind, 1.0, &mut rng(0)).unwrap(), "");
    }
}

#[test]
fn test_same_seed_same_output() {
    let p = perturber();
    for kind in AttackKind::ALL {
        let a = p.perturb(SENTENCE, kind, 0.6, &mut rng(2024)).unwrap();
        let b = p.perturb(SENTENCE, kind, 0.6, &mut rng(2024)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_custom_transform_config() {
    let config = TransformConfig {
        truncate_cutoff: 2,
        ..TransformConfig::default()
    };
    let out = perturber()
        .with_config(config)
        .perturb(SENTENCE, "truncate", 1.0, &mut rng(0))
        .unwrap();
    assert_eq!(out, "I lik appl ver muc.");
}
