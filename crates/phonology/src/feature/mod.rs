use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[cfg(test)]
mod tests;

/// Whether a phoneme is built from consonant or vowel categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PhonemeKind {
	Consonant,
	Vowel,
}

/// One of the six mutually exclusive feature categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
	Voicing,
	Place,
	Manner,
	Height,
	Backness,
	Rounding,
}

impl Category {
	/// The phoneme kind whose matrices use this category.
	pub fn kind(self) -> PhonemeKind {
		match self {
			Self::Voicing | Self::Place | Self::Manner => PhonemeKind::Consonant,
			Self::Height | Self::Backness | Self::Rounding => PhonemeKind::Vowel,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Voicing {
	Voiced,
	Voiceless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Place {
	Bilabial,
	Labiodental,
	Dental,
	Alveolar,
	Palatal,
	Velar,
	Uvular,
	Pharyngeal,
	Glottal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Manner {
	Nasal,
	Plosive,
	Affricate,
	Fricative,
	Approximant,
	Lateral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Height {
	Close,
	Mid,
	Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Backness {
	Front,
	Central,
	Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Rounding {
	Rounded,
	Unrounded,
}

/// A single articulatory feature tag, tagged with its category.
///
/// Tags parse from and display as their lowercase names (`"voiced"`,
/// `"bilabial"`, `"open"`, ...). Tag names are unique across categories, so
/// a bare name identifies its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
	Voicing(Voicing),
	Place(Place),
	Manner(Manner),
	Height(Height),
	Backness(Backness),
	Rounding(Rounding),
}

impl Feature {
	pub fn category(self) -> Category {
		match self {
			Self::Voicing(_) => Category::Voicing,
			Self::Place(_) => Category::Place,
			Self::Manner(_) => Category::Manner,
			Self::Height(_) => Category::Height,
			Self::Backness(_) => Category::Backness,
			Self::Rounding(_) => Category::Rounding,
		}
	}

	pub fn kind(self) -> PhonemeKind {
		self.category().kind()
	}

	pub fn name(self) -> &'static str {
		match self {
			Self::Voicing(v) => v.into(),
			Self::Place(p) => p.into(),
			Self::Manner(m) => m.into(),
			Self::Height(h) => h.into(),
			Self::Backness(b) => b.into(),
			Self::Rounding(r) => r.into(),
		}
	}

	/// Iterates every tag of every category.
	pub fn all() -> impl Iterator<Item = Feature> {
		Voicing::iter()
			.map(Self::Voicing)
			.chain(Place::iter().map(Self::Place))
			.chain(Manner::iter().map(Self::Manner))
			.chain(Height::iter().map(Self::Height))
			.chain(Backness::iter().map(Self::Backness))
			.chain(Rounding::iter().map(Self::Rounding))
	}

	/// Parses `tag` and requires it to belong to `expected`.
	///
	/// # Errors
	///
	/// Returns [`FeatureError::UnknownTag`] for names outside the taxonomy and
	/// [`FeatureError::WrongCategory`] for tags of another category.
	pub fn parse_in(expected: Category, tag: &str) -> Result<Self, FeatureError> {
		let feature: Feature = tag.parse()?;
		if feature.category() != expected {
			return Err(FeatureError::WrongCategory { expected, found: feature });
		}
		Ok(feature)
	}
}

impl fmt::Display for Feature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Feature {
	type Err = FeatureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if let Ok(v) = s.parse() {
			return Ok(Self::Voicing(v));
		}
		if let Ok(p) = s.parse() {
			return Ok(Self::Place(p));
		}
		if let Ok(m) = s.parse() {
			return Ok(Self::Manner(m));
		}
		if let Ok(h) = s.parse() {
			return Ok(Self::Height(h));
		}
		if let Ok(b) = s.parse() {
			return Ok(Self::Backness(b));
		}
		if let Ok(r) = s.parse() {
			return Ok(Self::Rounding(r));
		}
		Err(FeatureError::UnknownTag(s.to_string()))
	}
}

macro_rules! feature_from {
	($($variant:ident),*) => {
		$(impl From<$variant> for Feature {
			fn from(value: $variant) -> Self {
				Self::$variant(value)
			}
		})*
	};
}

feature_from!(Voicing, Place, Manner, Height, Backness, Rounding);

/// Errors produced while classifying feature tags or assembling matrices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
	#[error("unknown feature tag: {0:?}")]
	UnknownTag(String),
	#[error("expected a {expected} tag, found {found} ({})", .found.category())]
	WrongCategory { expected: Category, found: Feature },
	#[error("{feature} repeats the {} category", .feature.category())]
	DuplicateCategory { feature: Feature },
	#[error("features mix consonant and vowel categories")]
	MixedKinds,
}

/// The typed feature triple identifying one phoneme.
///
/// Equality and hashing are by category identity, so two matrices built from
/// the same tags in different orders are the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureMatrix {
	Consonant { voicing: Voicing, place: Place, manner: Manner },
	Vowel { rounding: Rounding, height: Height, backness: Backness },
}

impl FeatureMatrix {
	pub fn consonant(voicing: Voicing, place: Place, manner: Manner) -> Self {
		Self::Consonant { voicing, place, manner }
	}

	pub fn vowel(rounding: Rounding, height: Height, backness: Backness) -> Self {
		Self::Vowel { rounding, height, backness }
	}

	pub fn kind(&self) -> PhonemeKind {
		match self {
			Self::Consonant { .. } => PhonemeKind::Consonant,
			Self::Vowel { .. } => PhonemeKind::Vowel,
		}
	}

	/// Tags in registration order: (voicing, place, manner) for consonants,
	/// (rounding, height, backness) for vowels.
	pub fn tags(&self) -> [Feature; 3] {
		match *self {
			Self::Consonant { voicing, place, manner } => [voicing.into(), place.into(), manner.into()],
			Self::Vowel { rounding, height, backness } => [rounding.into(), height.into(), backness.into()],
		}
	}

	pub fn contains(&self, feature: Feature) -> bool {
		self.tags().contains(&feature)
	}

	/// Builds a matrix from three tags given in any order.
	///
	/// # Errors
	///
	/// Fails when a category repeats or the tags mix consonant and vowel
	/// categories.
	pub fn from_features(features: [Feature; 3]) -> Result<Self, FeatureError> {
		let (mut voicing, mut place, mut manner) = (None, None, None);
		let (mut rounding, mut height, mut backness) = (None, None, None);

		for feature in features {
			let taken = match feature {
				Feature::Voicing(v) => voicing.replace(v).is_some(),
				Feature::Place(p) => place.replace(p).is_some(),
				Feature::Manner(m) => manner.replace(m).is_some(),
				Feature::Height(h) => height.replace(h).is_some(),
				Feature::Backness(b) => backness.replace(b).is_some(),
				Feature::Rounding(r) => rounding.replace(r).is_some(),
			};
			if taken {
				return Err(FeatureError::DuplicateCategory { feature });
			}
		}

		match (voicing, place, manner, rounding, height, backness) {
			(Some(voicing), Some(place), Some(manner), None, None, None) => Ok(Self::consonant(voicing, place, manner)),
			(None, None, None, Some(rounding), Some(height), Some(backness)) => Ok(Self::vowel(rounding, height, backness)),
			_ => Err(FeatureError::MixedKinds),
		}
	}

	/// Parses three tag names given in any order.
	///
	/// # Errors
	///
	/// See [`FeatureMatrix::from_features`]; unknown names fail with
	/// [`FeatureError::UnknownTag`].
	pub fn parse(tags: [&str; 3]) -> Result<Self, FeatureError> {
		let [a, b, c] = tags;
		Self::from_features([a.parse()?, b.parse()?, c.parse()?])
	}
}

impl fmt::Display for FeatureMatrix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [a, b, c] = self.tags();
		write!(f, "{a},{b},{c}")
	}
}
