//! # Symbols
//!
//! Syllable slots and sound-change patterns share one small grammar:
//!
//! ```text
//! symbol   = ""            (empty: nothing / deletion)
//!          | "C" | "V"     (any consonant / any vowel)
//!          | "_"           (environment anchor)
//!          | "#"           (word boundary)
//!          | features      (one tag or a conjunction)
//!          | letter        (one token of at most three graphemes)
//! features = tag (sep tag)*
//! sep      = "," | whitespace
//! ```
//!
//! Classification is context free: tag names are reserved and can never be
//! registered as letters, so a symbol never needs an inventory to be parsed.

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::feature::Feature;
use crate::inventory::MAX_LETTER_GRAPHEMES;


/// Reserved symbol for "any consonant".
pub const CONSONANT: &str = "C";
/// Reserved symbol for "any vowel".
pub const VOWEL: &str = "V";
/// Reserved environment anchor.
pub const ANCHOR: &str = "_";
/// Reserved word-boundary marker.
pub const BOUNDARY: &str = "#";

/// A classified slot or pattern symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
	Empty,
	AnyConsonant,
	AnyVowel,
	Anchor,
	Boundary,
	/// One or more tags; a letter matches when its matrix carries all of them.
	Features(Vec<Feature>),
	/// A literal letter.
	Letter(String),
	/// A token that is neither a tag list nor letter-shaped, such as a
	/// misspelled tag. Never matches and never resolves.
	Unknown(String),
}

impl Symbol {
	/// Classifies `raw`. Surrounding whitespace is ignored.
	pub fn parse(raw: &str) -> Self {
		let raw = raw.trim();
		match raw {
			"" => return Self::Empty,
			CONSONANT => return Self::AnyConsonant,
			VOWEL => return Self::AnyVowel,
			ANCHOR => return Self::Anchor,
			BOUNDARY => return Self::Boundary,
			_ => {}
		}

		let parts: Vec<&str> = raw.split(is_tag_separator).filter(|p| !p.is_empty()).collect();
		let features: Result<Vec<Feature>, _> = parts.iter().map(|p| p.parse::<Feature>()).collect();
		match features {
			Ok(features) => Self::Features(features),
			Err(_) if parts.len() > 1 || !is_letter_shaped(raw) => Self::Unknown(raw.to_string()),
			Err(_) => Self::Letter(raw.to_string()),
		}
	}

	/// Splits a whitespace-separated pattern (`"V plosive _"`) into symbols.
	///
	/// A blank pattern yields a single [`Symbol::Empty`], which is how rules
	/// spell deletion (`""`).
	pub fn parse_seq(pattern: &str) -> Vec<Self> {
		let symbols: Vec<Self> = pattern.split_whitespace().map(Self::parse).collect();
		if symbols.is_empty() { vec![Self::Empty] } else { symbols }
	}

	/// Whether the symbol stands for a class of letters rather than one letter.
	pub fn is_class(&self) -> bool {
		matches!(self, Self::AnyConsonant | Self::AnyVowel | Self::Features(_))
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

fn is_letter_shaped(raw: &str) -> bool {
	!raw.contains(is_tag_separator) && raw.graphemes(true).count() <= MAX_LETTER_GRAPHEMES
}

fn is_tag_separator(ch: char) -> bool {
	ch == ',' || ch.is_whitespace()
}

impl FromStr for Symbol {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}

impl From<&str> for Symbol {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

impl From<Feature> for Symbol {
	fn from(value: Feature) -> Self {
		Self::Features(vec![value])
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => Ok(()),
			Self::AnyConsonant => f.write_str(CONSONANT),
			Self::AnyVowel => f.write_str(VOWEL),
			Self::Anchor => f.write_str(ANCHOR),
			Self::Boundary => f.write_str(BOUNDARY),
			Self::Features(features) => {
				for (i, feature) in features.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{feature}")?;
				}
				Ok(())
			}
			Self::Letter(s) | Self::Unknown(s) => f.write_str(s),
		}
	}
}
