use pretty_assertions::assert_eq;

use super::*;

#[test]
fn print_sorts_by_gloss_case_sensitively() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["b", "a"]), "food");
	dict.add_entry(Word::from(vec!["T", "i", "d"]), "Wolf");
	assert_eq!(dict.print(), "Wolf: Tid\nfood: ba\n");
}

#[test]
fn lookups_in_both_directions() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["g", "u", "d"]), "human");
	assert_eq!(dict.word_for("human").map(Word::form), Some("gud".to_string()));
	assert_eq!(dict.gloss_for("gud"), Some("human"));
	assert_eq!(dict.gloss_for("dug"), None);
}

#[test]
fn regloss_replaces_both_sides() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["k", "a"]), "stone");
	dict.add_entry(Word::from(vec!["p", "u"]), "stone");
	assert_eq!(dict.len(), 1);
	assert_eq!(dict.gloss_for("ka"), None);
	assert_eq!(dict.gloss_for("pu"), Some("stone"));
}

#[test]
fn shared_form_keeps_both_glosses() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["b", "a"]), "food");
	dict.add_entry(Word::from(vec!["b", "a"]), "water");
	assert_eq!(dict.len(), 2);
	assert_eq!(dict.word_for("food").map(Word::form), Some("ba".to_string()));
	assert_eq!(dict.gloss_for("ba"), Some("water"));
	assert_eq!(dict.print(), "food: ba\nwater: ba\n");
}

#[test]
fn regloss_keeps_shared_form_of_other_gloss() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["b", "a"]), "food");
	dict.add_entry(Word::from(vec!["b", "a"]), "water");
	dict.add_entry(Word::from(vec!["k", "a"]), "food");
	assert_eq!(dict.gloss_for("ba"), Some("water"));
	assert_eq!(dict.gloss_for("ka"), Some("food"));
	assert_eq!(dict.print(), "food: ka\nwater: ba\n");
}

#[test]
fn same_pair_twice_is_one_entry() {
	let mut dict = Dictionary::new();
	dict.add_entry(Word::from(vec!["k", "a"]), "stone");
	dict.add_entry(Word::from(vec!["k", "a"]), "stone");
	assert_eq!(dict.len(), 1);
	assert_eq!(dict.gloss_for("ka"), Some("stone"));
}

#[test]
fn empty_dictionary_prints_nothing() {
	assert_eq!(Dictionary::new().print(), "");
	assert!(Dictionary::new().is_empty());
}
