//! Declarative language definitions.
//!
//! A definition is a TOML document describing everything a [`Language`] is
//! configured with:
//!
//! ```toml
//! name = "demo"
//! syllables = [["C", "V"], ["C", "V", "C"]]
//!
//! [[consonants]]
//! letter = "b"
//! features = ["voiced", "bilabial", "plosive"]
//!
//! [[vowels]]
//! letter = "a"
//! features = ["open", "central", "unrounded"]
//!
//! [[rules]]
//! source = "h"
//! environment = "_ C"
//!
//! [affixes]
//! strong = ["t", "-"]
//! ```
//!
//! Feature tags may be listed in any order. Rules are applied in the order
//! they are listed; a missing `target` deletes and a missing `environment`
//! applies everywhere.
//!
//! Loading is stricter than the programmatic API: two letters declaring the
//! same feature matrix are rejected instead of the later one replacing the
//! earlier.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use glossa_phonology::{FeatureMatrix, PhonemeKind, RegistrationError, SyllableError};
use glossa_sound_change::RuleError;
use serde::Deserialize;

use crate::affix::AffixError;
use crate::language::Language;


/// The built-in demo language.
const DEMO_TOML: &str = include_str!("../../assets/demo.toml");

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
	#[error("failed to parse language definition: {0}")]
	Toml(#[from] toml::de::Error),
	#[error("failed to read {}: {error}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: io::Error,
	},
	#[error("invalid {kind} {letter:?}: {error}")]
	Phoneme {
		kind: PhonemeKind,
		letter: String,
		#[source]
		error: RegistrationError,
	},
	#[error("{letter:?} is listed as a {expected} but its features describe a {found}")]
	WrongKind {
		letter: String,
		expected: PhonemeKind,
		found: PhonemeKind,
	},
	#[error("{second:?} repeats the features of {first:?} ({matrix})")]
	DuplicateMatrix {
		first: String,
		second: String,
		matrix: FeatureMatrix,
	},
	#[error("syllable {index}: {error}")]
	Syllable {
		index: usize,
		#[source]
		error: SyllableError,
	},
	#[error("rule {index}: {error}")]
	Rule {
		index: usize,
		#[source]
		error: RuleError,
	},
	#[error(transparent)]
	Affix(#[from] AffixError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDefinition {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub consonants: Vec<PhonemeDefinition>,
	#[serde(default)]
	pub vowels: Vec<PhonemeDefinition>,
	#[serde(default)]
	pub syllables: Vec<Vec<String>>,
	#[serde(default)]
	pub rules: Vec<RuleDefinition>,
	#[serde(default)]
	pub affixes: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhonemeDefinition {
	pub letter: String,
	pub features: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
	pub source: String,
	#[serde(default)]
	pub target: String,
	#[serde(default)]
	pub environment: String,
}

impl LanguageDefinition {
	pub fn from_toml_str(source: &str) -> Result<Self, DefinitionError> {
		Ok(toml::from_str(source)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|error| DefinitionError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		tracing::debug!(path = %path.display(), "loading language definition");
		Self::from_toml_str(&source)
	}

	/// The embedded demo language.
	pub fn demo() -> Result<Self, DefinitionError> {
		Self::from_toml_str(DEMO_TOML)
	}

	/// Validates every entry and builds the configured language.
	///
	/// # Errors
	///
	/// Returns the first invalid entry, checked in the order phonemes,
	/// syllables, rules, affixes.
	pub fn into_language(self) -> Result<Language, DefinitionError> {
		let mut language = Language::new(self.name);

		let phonemes = self
			.consonants
			.into_iter()
			.map(|p| (PhonemeKind::Consonant, p))
			.chain(self.vowels.into_iter().map(|p| (PhonemeKind::Vowel, p)));
		for (kind, phoneme) in phonemes {
			register(&mut language, kind, phoneme)?;
		}

		for (index, slots) in self.syllables.into_iter().enumerate() {
			language
				.syllables
				.add_structure(slots)
				.map_err(|error| DefinitionError::Syllable { index, error })?;
		}

		for (index, rule) in self.rules.into_iter().enumerate() {
			language
				.rules
				.add_rule(&rule.source, &rule.target, &rule.environment)
				.map_err(|error| DefinitionError::Rule { index, error })?;
		}

		for (property, sequence) in self.affixes {
			language.affixes.add_affix(&property, sequence)?;
		}

		tracing::debug!(
			language = %language.name,
			phonemes = language.inventory.len(),
			syllables = language.syllables.len(),
			rules = language.rules.len(),
			affixes = language.affixes.len(),
			"language configured"
		);
		Ok(language)
	}
}

fn register(language: &mut Language, kind: PhonemeKind, phoneme: PhonemeDefinition) -> Result<(), DefinitionError> {
	let PhonemeDefinition { letter, features } = phoneme;
	let [a, b, c] = &features;

	let matrix = FeatureMatrix::parse([a.as_str(), b.as_str(), c.as_str()]).map_err(|error| DefinitionError::Phoneme {
		kind,
		letter: letter.clone(),
		error: error.into(),
	})?;
	if matrix.kind() != kind {
		return Err(DefinitionError::WrongKind {
			letter,
			expected: kind,
			found: matrix.kind(),
		});
	}
	if let Some(first) = language.inventory.letter_for(&matrix)
		&& first != letter
	{
		return Err(DefinitionError::DuplicateMatrix {
			first: first.to_string(),
			second: letter,
			matrix,
		});
	}

	language
		.inventory
		.insert(&letter, matrix)
		.map_err(|error| DefinitionError::Phoneme { kind, letter, error })?;
	Ok(())
}
