use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::word::Word;

#[cfg(test)]
mod tests;

/// Two-way store between words and their glosses.
///
/// Every gloss maps to one word; re-glossing replaces its word. Several
/// glosses may share a written form, in which case the form looks up the
/// gloss added last.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
	by_gloss: BTreeMap<String, Word>,
	by_form: FxHashMap<String, String>,
}

impl Dictionary {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_entry(&mut self, word: Word, gloss: impl Into<String>) {
		let gloss = gloss.into();
		let form = word.form();

		if let Some(previous) = self.by_gloss.get(&gloss) {
			let previous_form = previous.form();
			if self.by_form.get(&previous_form) == Some(&gloss) {
				self.by_form.remove(&previous_form);
			}
		}

		tracing::debug!(%gloss, %form, "dictionary entry");
		self.by_form.insert(form, gloss.clone());
		self.by_gloss.insert(gloss, word);
	}

	pub fn word_for(&self, gloss: &str) -> Option<&Word> {
		self.by_gloss.get(gloss)
	}

	pub fn gloss_for(&self, form: &str) -> Option<&str> {
		self.by_form.get(form).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.by_gloss.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_gloss.is_empty()
	}

	/// Entries ordered by gloss. Ordering is byte-wise and case-sensitive, so
	/// `"Wolf"` sorts before `"food"`.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Word)> {
		self.by_gloss.iter().map(|(gloss, word)| (gloss.as_str(), word))
	}

	/// One `gloss: word` line per entry, in [`Dictionary::iter`] order.
	pub fn print(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Dictionary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (gloss, word) in self.iter() {
			writeln!(f, "{gloss}: {word}")?;
		}
		Ok(())
	}
}
