use glossa_phonology::{Inventory, SyllableError, SyllableInventory};
use glossa_sound_change::{RuleError, RuleSet};
use rand::Rng;

use crate::affix::{AffixError, AffixKind, AffixTable};
use crate::dictionary::Dictionary;
use crate::word::Word;


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	#[error("language has no syllable templates")]
	NoSyllables,
	#[error(transparent)]
	Affix(#[from] AffixError),
}

/// A configured language: phonemes, syllable shapes, affixes and ordered
/// sound changes, plus the dictionary of words glossed so far.
///
/// Configuration methods are meant to run before generation. Building words
/// only borrows the language, so one configured language can serve several
/// generators, each with its own rng.
#[derive(Debug, Clone, Default)]
pub struct Language {
	pub(crate) name: String,
	pub(crate) inventory: Inventory,
	pub(crate) syllables: SyllableInventory,
	pub(crate) rules: RuleSet,
	pub(crate) affixes: AffixTable,
	dictionary: Dictionary,
}

impl Language {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn inventory(&self) -> &Inventory {
		&self.inventory
	}

	pub fn syllables(&self) -> &SyllableInventory {
		&self.syllables
	}

	pub fn rules(&self) -> &RuleSet {
		&self.rules
	}

	pub fn affixes(&self) -> &AffixTable {
		&self.affixes
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	/// See [`Inventory::add_consonant`].
	pub fn add_consonant(&mut self, letter: &str, voicing: &str, place: &str, manner: &str) -> bool {
		self.inventory.add_consonant(letter, voicing, place, manner)
	}

	/// See [`Inventory::add_vowel`].
	pub fn add_vowel(&mut self, letter: &str, rounding: &str, height: &str, backness: &str) -> bool {
		self.inventory.add_vowel(letter, rounding, height, backness)
	}

	pub fn add_structure<I, S>(&mut self, slots: I) -> Result<(), SyllableError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.syllables.add_structure(slots)
	}

	pub fn add_rule(&mut self, source: &str, target: &str, environment: &str) -> Result<(), RuleError> {
		self.rules.add_rule(source, target, environment)
	}

	pub fn add_affix<I, S>(&mut self, property: &str, sequence: I) -> Result<AffixKind, AffixError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.affixes.add_affix(property, sequence)
	}

	/// Concatenates `syllables` randomly built syllables.
	///
	/// # Errors
	///
	/// [`BuildError::NoSyllables`] when at least one syllable is requested and
	/// no template is registered.
	pub fn build_root<R: Rng + ?Sized>(&self, syllables: usize, rng: &mut R) -> Result<Word, BuildError> {
		let mut letters = Vec::new();
		for _ in 0..syllables {
			let syllable = self
				.syllables
				.build(&self.inventory, rng)
				.ok_or(BuildError::NoSyllables)?;
			letters.extend(syllable);
		}
		let root = Word::new(letters);
		tracing::debug!(%root, "built root");
		Ok(root)
	}

	/// Builds one word: a root of `syllables` syllables, each of `affixes`
	/// attached in order, the sound changes applied, and name formatting
	/// when `proper` is set.
	///
	/// Affixes are attached before the sound changes run, so rules may
	/// rewrite or delete affix letters as well as root letters.
	///
	/// # Errors
	///
	/// [`BuildError::NoSyllables`] as for [`Language::build_root`], and
	/// [`BuildError::Affix`] for an affix property that is not registered.
	pub fn build_word<R: Rng + ?Sized>(
		&self,
		syllables: usize,
		proper: bool,
		affixes: &[&str],
		rng: &mut R,
	) -> Result<Word, BuildError> {
		let _span = tracing::trace_span!("language.build_word", language = %self.name, syllables, proper).entered();

		let mut word = self.build_root(syllables, rng)?;
		for property in affixes {
			word = self.affixes.attach(&word, property)?;
		}
		word = self.apply_rules(&word, rng);
		if proper {
			word = word.format_as_name();
		}

		tracing::debug!(%word, "built word");
		Ok(word)
	}

	/// See [`AffixTable::attach`].
	pub fn attach_affix(&self, word: &Word, property: &str) -> Result<Word, AffixError> {
		self.affixes.attach(word, property)
	}

	/// Rewrites `word` through every sound change in order.
	pub fn apply_rules<R: Rng + ?Sized>(&self, word: &Word, rng: &mut R) -> Word {
		Word::new(self.rules.apply(word.letters(), &self.inventory, rng))
	}

	pub fn add_entry(&mut self, word: Word, gloss: impl Into<String>) {
		self.dictionary.add_entry(word, gloss);
	}

	pub fn print_dictionary(&self) -> String {
		self.dictionary.print()
	}
}
