use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn inventory() -> Inventory {
	let mut inv = Inventory::new();
	inv.add_consonant("k", "voiceless", "velar", "plosive");
	inv.add_consonant("m", "voiced", "bilabial", "nasal");
	inv.add_vowel("a", "unrounded", "open", "central");
	inv.add_vowel("o", "rounded", "mid", "back");
	inv
}

#[test]
fn empty_template_is_rejected() {
	let mut syllables = SyllableInventory::new();
	assert_eq!(syllables.add_structure(Vec::<&str>::new()), Err(SyllableError::EmptyTemplate));
	assert!(syllables.is_empty());
}

#[test]
fn template_display() {
	let template = SyllableTemplate::new(["C", "voiced,nasal", "V"]).unwrap();
	assert_eq!(template.to_string(), "C voiced,nasal V");
}

#[test]
fn realize_follows_slot_kinds() {
	let inv = inventory();
	let template = SyllableTemplate::new(["C", "V", "nasal"]).unwrap();
	let mut rng = ChaCha8Rng::seed_from_u64(1);
	for _ in 0..20 {
		let syllable = template.realize(&inv, &mut rng);
		assert_eq!(syllable.len(), 3);
		assert!(inv.consonants().contains(&syllable[0]));
		assert!(inv.vowels().contains(&syllable[1]));
		assert_eq!(syllable[2], "m");
	}
}

#[test]
fn unresolvable_slots_are_dropped() {
	let inv = inventory();
	let template = SyllableTemplate::new(["", "C", "fricative", "V", "zz"]).unwrap();
	let mut rng = ChaCha8Rng::seed_from_u64(3);
	let syllable = template.realize(&inv, &mut rng);
	assert_eq!(syllable.len(), 2);
}

#[test]
fn choose_covers_every_template() {
	let mut syllables = SyllableInventory::new();
	syllables.add_structure(["C", "V"]).unwrap();
	syllables.add_structure(["V"]).unwrap();
	let mut rng = ChaCha8Rng::seed_from_u64(11);
	let mut seen = [false; 2];
	for _ in 0..64 {
		let template = syllables.choose(&mut rng).unwrap();
		let index = syllables.templates().iter().position(|t| t == template).unwrap();
		seen[index] = true;
	}
	assert_eq!(seen, [true, true]);
}

#[test]
fn no_templates_no_syllable() {
	let inv = inventory();
	let mut rng = ChaCha8Rng::seed_from_u64(0);
	assert!(SyllableInventory::new().build(&inv, &mut rng).is_none());
}
