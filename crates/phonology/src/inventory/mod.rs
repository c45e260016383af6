//! Phoneme storage keyed by feature matrices.
//!
//! The inventory keeps four views of the same registrations in sync:
//! letter to matrix, matrix to letter, tag to letters, and the consonant and
//! vowel sets. Every set is insertion ordered so that sampling with a seeded
//! random source is reproducible.

use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::feature::{
	Backness, Category, Feature, FeatureError, FeatureMatrix, Height, Manner, PhonemeKind, Place, Rounding, Voicing,
};
use crate::symbol::{self, Symbol};


/// Longest letter accepted, in grapheme clusters.
pub const MAX_LETTER_GRAPHEMES: usize = 3;

/// Attachment marker used by affix tables; never a letter.
const AFFIX_MARKER: &str = "-";

/// Reasons a phoneme registration is rejected. The inventory is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
	#[error(transparent)]
	Feature(#[from] FeatureError),
	#[error("letter must not be empty")]
	EmptyLetter,
	#[error("letter {0:?} is longer than {MAX_LETTER_GRAPHEMES} graphemes")]
	TooLong(String),
	#[error("letter {0:?} is reserved for patterns")]
	Reserved(String),
}

/// Letters and their feature matrices.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
	matrices: IndexMap<String, FeatureMatrix>,
	letters: FxHashMap<FeatureMatrix, String>,
	by_feature: FxHashMap<Feature, IndexSet<String>>,
	consonants: IndexSet<String>,
	vowels: IndexSet<String>,
}

impl Inventory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a consonant from tag names given as (voicing, place, manner).
	///
	/// Returns `false` and leaves the inventory unchanged when a tag is unknown
	/// or belongs to another category, or when the letter is unusable.
	pub fn add_consonant(&mut self, letter: &str, voicing: &str, place: &str, manner: &str) -> bool {
		let matrix = consonant_matrix(voicing, place, manner);
		self.add_parsed(letter, matrix)
	}

	/// Registers a vowel from tag names given as (rounding, height, backness).
	///
	/// Same failure behavior as [`Inventory::add_consonant`].
	pub fn add_vowel(&mut self, letter: &str, rounding: &str, height: &str, backness: &str) -> bool {
		let matrix = vowel_matrix(rounding, height, backness);
		self.add_parsed(letter, matrix)
	}

	fn add_parsed(&mut self, letter: &str, matrix: Result<FeatureMatrix, FeatureError>) -> bool {
		match matrix.map_err(RegistrationError::from).and_then(|m| self.insert(letter, m)) {
			Ok(_) => true,
			Err(error) => {
				tracing::debug!(letter, %error, "rejected phoneme registration");
				false
			}
		}
	}

	pub fn insert_consonant(
		&mut self,
		letter: &str,
		voicing: Voicing,
		place: Place,
		manner: Manner,
	) -> Result<Option<String>, RegistrationError> {
		self.insert(letter, FeatureMatrix::consonant(voicing, place, manner))
	}

	pub fn insert_vowel(
		&mut self,
		letter: &str,
		rounding: Rounding,
		height: Height,
		backness: Backness,
	) -> Result<Option<String>, RegistrationError> {
		self.insert(letter, FeatureMatrix::vowel(rounding, height, backness))
	}

	/// Registers `letter` under `matrix`.
	///
	/// Registration is last-write-wins on both keys. Re-registering a letter
	/// drops its previous matrix, and a letter already holding `matrix` is
	/// unregistered entirely and returned as `Ok(Some(displaced))`.
	///
	/// # Errors
	///
	/// Returns a [`RegistrationError`] for empty, overlong, or reserved letters.
	pub fn insert(&mut self, letter: &str, matrix: FeatureMatrix) -> Result<Option<String>, RegistrationError> {
		validate_letter(letter)?;

		if self.matrices.get(letter) == Some(&matrix) {
			return Ok(None);
		}

		self.unregister(letter);
		let displaced = self.letters.get(&matrix).cloned();
		if let Some(previous) = &displaced {
			tracing::debug!(letter, displaced = %previous, %matrix, "feature matrix reassigned");
			self.unregister(previous);
		}

		for tag in matrix.tags() {
			self.by_feature.entry(tag).or_default().insert(letter.to_string());
		}
		self.letters.insert(matrix, letter.to_string());
		self.matrices.insert(letter.to_string(), matrix);
		match matrix.kind() {
			PhonemeKind::Consonant => self.consonants.insert(letter.to_string()),
			PhonemeKind::Vowel => self.vowels.insert(letter.to_string()),
		};

		tracing::trace!(letter, %matrix, "registered phoneme");
		Ok(displaced)
	}

	/// Removes `letter` from every view. Returns its matrix if it was known.
	pub fn unregister(&mut self, letter: &str) -> Option<FeatureMatrix> {
		let matrix = self.matrices.shift_remove(letter)?;
		if self.letters.get(&matrix).is_some_and(|owner| owner == letter) {
			self.letters.remove(&matrix);
		}
		for tag in matrix.tags() {
			if let Some(set) = self.by_feature.get_mut(&tag) {
				set.shift_remove(letter);
			}
		}
		self.consonants.shift_remove(letter);
		self.vowels.shift_remove(letter);
		Some(matrix)
	}

	pub fn features(&self, letter: &str) -> Option<FeatureMatrix> {
		self.matrices.get(letter).copied()
	}

	/// The letter's tags in registration order, or an empty list for letters
	/// that were never registered.
	pub fn feature_tags(&self, letter: &str) -> Vec<Feature> {
		self.features(letter).map(|m| m.tags().to_vec()).unwrap_or_default()
	}

	/// Looks up the letter for three tag names in any order.
	pub fn letter(&self, f0: &str, f1: &str, f2: &str) -> Option<&str> {
		let matrix = FeatureMatrix::parse([f0, f1, f2]).ok()?;
		self.letter_for(&matrix)
	}

	/// [`Inventory::letter`] with a caller-supplied miss value.
	pub fn letter_or<'a>(&'a self, f0: &str, f1: &str, f2: &str, default: &'a str) -> &'a str {
		self.letter(f0, f1, f2).unwrap_or(default)
	}

	pub fn letter_for(&self, matrix: &FeatureMatrix) -> Option<&str> {
		self.letters.get(matrix).map(String::as_str)
	}

	pub fn consonants(&self) -> &IndexSet<String> {
		&self.consonants
	}

	pub fn vowels(&self) -> &IndexSet<String> {
		&self.vowels
	}

	pub fn contains(&self, letter: &str) -> bool {
		self.matrices.contains_key(letter)
	}

	pub fn kind_of(&self, letter: &str) -> Option<PhonemeKind> {
		self.features(letter).map(|m| m.kind())
	}

	pub fn len(&self) -> usize {
		self.matrices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matrices.is_empty()
	}

	/// Registered letters with their matrices, in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureMatrix)> {
		self.matrices.iter().map(|(letter, matrix)| (letter.as_str(), *matrix))
	}

	pub fn letters_with(&self, feature: Feature) -> impl Iterator<Item = &str> {
		self.by_feature.get(&feature).into_iter().flatten().map(String::as_str)
	}

	/// Letters carrying every tag in `features`, ordered by the first tag's
	/// registration order.
	pub fn candidates(&self, features: &[Feature]) -> Vec<&str> {
		let Some((first, rest)) = features.split_first() else {
			return Vec::new();
		};
		self.letters_with(*first)
			.filter(|letter| {
				rest.iter()
					.all(|tag| self.by_feature.get(tag).is_some_and(|set| set.contains(*letter)))
			})
			.collect()
	}

	/// Tests whether `letter` satisfies `symbol`.
	///
	/// `C`/`V` test set membership, a literal must equal a registered letter,
	/// and tags require the letter's matrix to carry all of them. Empty,
	/// anchor, boundary and unknown symbols never match a letter.
	pub fn matches(&self, symbol: &Symbol, letter: &str) -> bool {
		match symbol {
			Symbol::AnyConsonant => self.consonants.contains(letter),
			Symbol::AnyVowel => self.vowels.contains(letter),
			Symbol::Letter(expected) => expected == letter && self.contains(letter),
			Symbol::Features(features) => self
				.features(letter)
				.is_some_and(|matrix| features.iter().all(|f| matrix.contains(*f))),
			Symbol::Empty | Symbol::Anchor | Symbol::Boundary | Symbol::Unknown(_) => false,
		}
	}

	/// String form of [`Inventory::matches`].
	pub fn matches_str(&self, symbol: &str, letter: &str) -> bool {
		self.matches(&Symbol::parse(symbol), letter)
	}

	/// Resolves a slot symbol to a concrete letter.
	///
	/// `C`/`V` and tag symbols pick uniformly among matching letters. A
	/// registered letter passes through. Everything else, including unknown
	/// tags, unregistered letters and empty candidate sets, yields `None`:
	/// sparse inventories simply produce shorter syllables.
	pub fn resolve<R: Rng + ?Sized>(&self, symbol: &Symbol, rng: &mut R) -> Option<String> {
		let resolved = match symbol {
			Symbol::AnyConsonant => pick_from_set(&self.consonants, rng),
			Symbol::AnyVowel => pick_from_set(&self.vowels, rng),
			Symbol::Letter(letter) if self.contains(letter) => Some(letter.as_str()),
			Symbol::Features(features) => pick(&self.candidates(features), rng),
			_ => None,
		};
		if resolved.is_none() && !symbol.is_empty() {
			tracing::trace!(%symbol, "symbol resolved to no letter");
		}
		resolved.map(str::to_string)
	}
}

fn pick<'a, R: Rng + ?Sized>(candidates: &[&'a str], rng: &mut R) -> Option<&'a str> {
	if candidates.is_empty() {
		return None;
	}
	Some(candidates[rng.random_range(0..candidates.len())])
}

fn pick_from_set<'a, R: Rng + ?Sized>(set: &'a IndexSet<String>, rng: &mut R) -> Option<&'a str> {
	if set.is_empty() {
		return None;
	}
	set.get_index(rng.random_range(0..set.len())).map(String::as_str)
}

fn consonant_matrix(voicing: &str, place: &str, manner: &str) -> Result<FeatureMatrix, FeatureError> {
	Ok(FeatureMatrix::consonant(
		parse_tag(Category::Voicing, voicing)?,
		parse_tag(Category::Place, place)?,
		parse_tag(Category::Manner, manner)?,
	))
}

fn vowel_matrix(rounding: &str, height: &str, backness: &str) -> Result<FeatureMatrix, FeatureError> {
	Ok(FeatureMatrix::vowel(
		parse_tag(Category::Rounding, rounding)?,
		parse_tag(Category::Height, height)?,
		parse_tag(Category::Backness, backness)?,
	))
}

/// Parses `tag` as a `T`, reporting tags of other categories distinctly from
/// names outside the taxonomy.
fn parse_tag<T: FromStr>(expected: Category, tag: &str) -> Result<T, FeatureError> {
	tag.trim()
		.parse::<T>()
		.map_err(|_| match tag.parse::<Feature>() {
			Ok(found) => FeatureError::WrongCategory { expected, found },
			Err(error) => error,
		})
}

fn validate_letter(letter: &str) -> Result<(), RegistrationError> {
	if letter.is_empty() {
		return Err(RegistrationError::EmptyLetter);
	}
	let reserved = matches!(
		letter,
		symbol::CONSONANT | symbol::VOWEL | symbol::ANCHOR | symbol::BOUNDARY | AFFIX_MARKER
	) || letter.contains(|ch: char| ch == ',' || ch.is_whitespace())
		|| letter.parse::<Feature>().is_ok();
	if reserved {
		return Err(RegistrationError::Reserved(letter.to_string()));
	}
	if letter.graphemes(true).count() > MAX_LETTER_GRAPHEMES {
		return Err(RegistrationError::TooLong(letter.to_string()));
	}
	Ok(())
}
