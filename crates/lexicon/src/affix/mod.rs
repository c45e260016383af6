//! Named affixes attached as prefixes or suffixes.
//!
//! An affix is written as its letters plus one `-` marker standing for the
//! root: `["t", "-"]` is the prefix `t-`, `["-", "i", "d"]` the suffix `-id`.

use indexmap::IndexMap;
use strum::{Display, IntoStaticStr};

use crate::word::Word;

#[cfg(test)]
mod tests;

/// The attachment marker.
pub const MARKER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AffixKind {
	Prefix,
	Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffixError {
	#[error("no affix registered for property {0:?}")]
	UnknownProperty(String),
	#[error("affix {property:?} has no `-` marker")]
	MissingMarker { property: String },
	#[error("affix {property:?} has more than one `-` marker")]
	MultipleMarkers { property: String },
	#[error("affix {property:?} must start or end with its `-` marker")]
	MisplacedMarker { property: String },
	#[error("affix {property:?} has no letters")]
	Empty { property: String },
}

/// A validated affix: its letters without the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affix {
	kind: AffixKind,
	letters: Vec<String>,
}

impl Affix {
	/// Validates a marked letter sequence.
	///
	/// # Errors
	///
	/// The sequence needs exactly one marker, at the first or last position,
	/// and at least one letter.
	pub fn parse<I, S>(property: &str, sequence: I) -> Result<Self, AffixError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut letters: Vec<String> = sequence.into_iter().map(|s| s.as_ref().to_string()).collect();
		let property = property.to_string();

		let markers = letters.iter().filter(|l| *l == MARKER).count();
		match markers {
			0 => return Err(AffixError::MissingMarker { property }),
			1 => {}
			_ => return Err(AffixError::MultipleMarkers { property }),
		}
		if letters.len() == 1 {
			return Err(AffixError::Empty { property });
		}

		let kind = if letters.last().is_some_and(|l| l == MARKER) {
			letters.pop();
			AffixKind::Prefix
		} else if letters.first().is_some_and(|l| l == MARKER) {
			letters.remove(0);
			AffixKind::Suffix
		} else {
			return Err(AffixError::MisplacedMarker { property });
		};

		Ok(Self { kind, letters })
	}

	pub fn kind(&self) -> AffixKind {
		self.kind
	}

	pub fn letters(&self) -> &[String] {
		&self.letters
	}

	pub fn attach(&self, word: &Word) -> Word {
		let (head, tail) = match self.kind {
			AffixKind::Prefix => (self.letters.as_slice(), word.letters()),
			AffixKind::Suffix => (word.letters(), self.letters.as_slice()),
		};
		head.iter().chain(tail).cloned().collect()
	}
}

/// Affixes keyed by the property they express.
#[derive(Debug, Clone, Default)]
pub struct AffixTable {
	affixes: IndexMap<String, Affix>,
}

impl AffixTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the affix for `property`, replacing any previous one.
	///
	/// # Errors
	///
	/// See [`Affix::parse`]; the table is unchanged on error.
	pub fn add_affix<I, S>(&mut self, property: &str, sequence: I) -> Result<AffixKind, AffixError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let affix = Affix::parse(property, sequence)?;
		let kind = affix.kind();
		self.affixes.insert(property.to_string(), affix);
		Ok(kind)
	}

	pub fn get(&self, property: &str) -> Option<&Affix> {
		self.affixes.get(property)
	}

	/// Registered properties in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Affix)> {
		self.affixes.iter().map(|(property, affix)| (property.as_str(), affix))
	}

	pub fn len(&self) -> usize {
		self.affixes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.affixes.is_empty()
	}

	/// Attaches the affix for `property` to `word`.
	///
	/// # Errors
	///
	/// Returns [`AffixError::UnknownProperty`] when nothing is registered for
	/// `property`.
	pub fn attach(&self, word: &Word, property: &str) -> Result<Word, AffixError> {
		let affix = self
			.get(property)
			.ok_or_else(|| AffixError::UnknownProperty(property.to_string()))?;
		let attached = affix.attach(word);
		tracing::debug!(property, kind = %affix.kind(), word = %attached, "attached affix");
		Ok(attached)
	}
}
