use glossa_phonology::Inventory;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn inventory() -> Inventory {
	let mut inv = Inventory::new();
	inv.add_consonant("b", "voiced", "bilabial", "plosive");
	inv.add_consonant("p", "voiceless", "bilabial", "plosive");
	inv.add_consonant("t", "voiceless", "dental", "plosive");
	inv.add_consonant("k", "voiceless", "velar", "plosive");
	inv.add_consonant("h", "voiceless", "glottal", "fricative");
	inv.add_consonant("s", "voiceless", "alveolar", "fricative");
	inv.add_vowel("a", "unrounded", "open", "central");
	inv.add_vowel("e", "unrounded", "mid", "front");
	inv
}

fn word(letters: &str) -> Vec<String> {
	letters.chars().map(String::from).collect()
}

fn apply(rules: &RuleSet, inv: &Inventory, input: &str) -> String {
	let mut rng = ChaCha8Rng::seed_from_u64(0);
	rules.apply(&word(input), inv, &mut rng).concat()
}

fn rules(specs: &[(&str, &str, &str)]) -> RuleSet {
	let mut set = RuleSet::new();
	for (source, target, environment) in specs {
		set.add_rule(source, target, environment).unwrap();
	}
	set
}

#[test]
fn empty_rule_set_is_identity() {
	let inv = inventory();
	assert_eq!(apply(&RuleSet::new(), &inv, "bates"), "bates");
	assert_eq!(apply(&RuleSet::new(), &inv, ""), "");
}

#[test]
fn deletion_before_consonant() {
	let inv = inventory();
	let set = rules(&[("h", "", "_ C")]);
	assert_eq!(apply(&set, &inv, "ahta"), "ata");
	assert_eq!(apply(&set, &inv, "aha"), "aha");
	assert_eq!(apply(&set, &inv, "ah"), "ah");
}

#[test]
fn feature_target_resolves_against_inventory() {
	let inv = inventory();
	let set = rules(&[("voiced,plosive", "voiceless,bilabial", "_ voiceless")]);
	assert_eq!(apply(&set, &inv, "absa"), "apsa");
	// not followed by a voiceless sound
	assert_eq!(apply(&set, &inv, "aba"), "aba");
}

#[test]
fn unresolvable_target_deletes() {
	let inv = inventory();
	let set = rules(&[("b", "nasal", "")]);
	assert_eq!(apply(&set, &inv, "aba"), "aa");
}

#[test]
fn misspelled_tag_target_deletes() {
	let inv = inventory();
	let set = rules(&[("p", "fricativ", "V _ V")]);
	let mut rng = ChaCha8Rng::seed_from_u64(0);
	assert_eq!(set.apply(&word("apa"), &inv, &mut rng), word("aa"));
}

#[test]
fn boundary_insertion_at_word_start() {
	let inv = inventory();
	let set = rules(&[("", "e", "# _ s")]);
	assert_eq!(apply(&set, &inv, "sta"), "esta");
	assert_eq!(apply(&set, &inv, "asta"), "asta");
}

#[test]
fn insertion_at_word_end() {
	let inv = inventory();
	let set = rules(&[("", "a", "C _ #")]);
	assert_eq!(apply(&set, &inv, "kat"), "kata");
	assert_eq!(apply(&set, &inv, "ka"), "ka");
}

#[test]
fn word_final_deletion() {
	let inv = inventory();
	let set = rules(&[("V", "", "_ #")]);
	assert_eq!(apply(&set, &inv, "kaka"), "kak");
	assert_eq!(apply(&set, &inv, "a"), "");
}

#[test]
fn lengthening_does_not_reapply() {
	let inv = inventory();
	let set = rules(&[("a", "a a", "")]);
	assert_eq!(apply(&set, &inv, "ka"), "kaa");
	assert_eq!(apply(&set, &inv, "kaa"), "kaaaa");
}

#[test]
fn context_is_read_from_the_pass_input() {
	let inv = inventory();
	let set = rules(&[("a", "", "_ a")]);
	assert_eq!(apply(&set, &inv, "aaa"), "a");
}

#[test]
fn longer_source_than_target() {
	let inv = inventory();
	let set = rules(&[("a t", "o", "")]);
	assert_eq!(apply(&set, &inv, "kata"), "koa");
}

#[test]
fn rules_apply_in_registration_order() {
	let inv = inventory();
	let drop_then_voice = rules(&[("a", "", "_ #"), ("t", "b", "_ #")]);
	let voice_then_drop = rules(&[("t", "b", "_ #"), ("a", "", "_ #")]);
	assert_eq!(apply(&drop_then_voice, &inv, "ata"), "ab");
	assert_eq!(apply(&voice_then_drop, &inv, "ata"), "at");
}

#[test]
fn left_context_longer_than_word_prefix_fails() {
	let inv = inventory();
	let set = rules(&[("t", "s", "V V _")]);
	assert_eq!(apply(&set, &inv, "at"), "at");
	assert_eq!(apply(&set, &inv, "aet"), "aes");
}

#[test]
fn unregistered_letters_never_match_patterns() {
	let inv = inventory();
	let set = rules(&[("C", "", "")]);
	assert_eq!(apply(&set, &inv, "xax"), "xax");
}

#[test]
fn caller_word_is_untouched() {
	let inv = inventory();
	let set = rules(&[("h", "", "_ C")]);
	let original = word("ahta");
	let mut rng = ChaCha8Rng::seed_from_u64(0);
	let rewritten = set.apply(&original, &inv, &mut rng);
	assert_eq!(original, word("ahta"));
	assert_eq!(rewritten, word("ata"));
}

fn letters() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::sample::select(vec!["b", "p", "t", "k", "h", "s", "a", "e"]), 0..12)
		.prop_map(|letters| letters.into_iter().map(String::from).collect())
}

proptest! {
	#[test]
	fn prop_empty_rule_set_is_identity(input in letters(), seed in any::<u64>()) {
		let inv = inventory();
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		prop_assert_eq!(RuleSet::new().apply(&input, &inv, &mut rng), input);
	}

	#[test]
	fn prop_deletion_never_grows(input in letters(), seed in any::<u64>()) {
		let inv = inventory();
		let set = rules(&[("V", "", "C _ C"), ("h", "", "")]);
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		let output = set.apply(&input, &inv, &mut rng);
		prop_assert!(output.len() <= input.len());
		prop_assert!(!output.iter().any(|l| l == "h"));
	}
}
