use std::fmt;
use std::ops::Deref;

use unicode_segmentation::UnicodeSegmentation;


/// An ordered sequence of letters (graphemes).
///
/// Segments may be empty; they contribute nothing to the written form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word(Vec<String>);

impl Word {
	pub fn new(letters: Vec<String>) -> Self {
		Self(letters)
	}

	pub fn letters(&self) -> &[String] {
		&self.0
	}

	pub fn into_letters(self) -> Vec<String> {
		self.0
	}

	/// The concatenated written form.
	pub fn form(&self) -> String {
		self.0.concat()
	}

	/// Formats the word as a proper name.
	///
	/// The first grapheme of the first non-empty segment is uppercased and
	/// every later segment is lowercased. A word with no non-empty segment is
	/// returned unchanged.
	pub fn format_as_name(&self) -> Word {
		let Some(first) = self.0.iter().position(|segment| !segment.is_empty()) else {
			return self.clone();
		};

		let mut letters = self.0.clone();
		letters[first] = capitalize(&letters[first]);
		for segment in &mut letters[first + 1..] {
			*segment = segment.to_lowercase();
		}
		Word(letters)
	}
}

fn capitalize(segment: &str) -> String {
	let mut graphemes = segment.graphemes(true);
	match graphemes.next() {
		Some(head) => head.to_uppercase() + graphemes.as_str(),
		None => String::new(),
	}
}

impl Deref for Word {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for letter in &self.0 {
			f.write_str(letter)?;
		}
		Ok(())
	}
}

impl From<Vec<String>> for Word {
	fn from(letters: Vec<String>) -> Self {
		Self(letters)
	}
}

impl From<Vec<&str>> for Word {
	fn from(letters: Vec<&str>) -> Self {
		Self(letters.into_iter().map(String::from).collect())
	}
}

impl From<Word> for Vec<String> {
	fn from(word: Word) -> Self {
		word.0
	}
}

impl<S: Into<String>> FromIterator<S> for Word {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}
