use std::fmt;

use rand::Rng;

use crate::inventory::Inventory;
use crate::symbol::Symbol;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllableError {
	#[error("syllable template has no slots")]
	EmptyTemplate,
}

/// An ordered slot sequence, e.g. `C V C` or `voiceless,plosive V`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableTemplate {
	slots: Vec<Symbol>,
}

impl SyllableTemplate {
	/// # Errors
	///
	/// Returns [`SyllableError::EmptyTemplate`] when `slots` is empty.
	pub fn new<I, S>(slots: I) -> Result<Self, SyllableError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let slots: Vec<Symbol> = slots.into_iter().map(|s| Symbol::parse(s.as_ref())).collect();
		if slots.is_empty() {
			return Err(SyllableError::EmptyTemplate);
		}
		Ok(Self { slots })
	}

	pub fn slots(&self) -> &[Symbol] {
		&self.slots
	}

	/// Resolves every slot in order, dropping slots that resolve to nothing.
	pub fn realize<R: Rng + ?Sized>(&self, inventory: &Inventory, rng: &mut R) -> Vec<String> {
		self.slots.iter().filter_map(|slot| inventory.resolve(slot, rng)).collect()
	}
}

impl fmt::Display for SyllableTemplate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, slot) in self.slots.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{slot}")?;
		}
		Ok(())
	}
}

/// The templates a language draws its syllables from.
#[derive(Debug, Clone, Default)]
pub struct SyllableInventory {
	templates: Vec<SyllableTemplate>,
}

impl SyllableInventory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a template built from slot strings.
	///
	/// # Errors
	///
	/// Returns [`SyllableError::EmptyTemplate`] for an empty slot list.
	pub fn add_structure<I, S>(&mut self, slots: I) -> Result<(), SyllableError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.templates.push(SyllableTemplate::new(slots)?);
		Ok(())
	}

	pub fn push(&mut self, template: SyllableTemplate) {
		self.templates.push(template);
	}

	pub fn templates(&self) -> &[SyllableTemplate] {
		&self.templates
	}

	pub fn len(&self) -> usize {
		self.templates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}

	/// Picks a template uniformly at random.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&SyllableTemplate> {
		if self.templates.is_empty() {
			return None;
		}
		self.templates.get(rng.random_range(0..self.templates.len()))
	}

	/// Builds one syllable from a randomly chosen template.
	pub fn build<R: Rng + ?Sized>(&self, inventory: &Inventory, rng: &mut R) -> Option<Vec<String>> {
		let template = self.choose(rng)?;
		let syllable = template.realize(inventory, rng);
		tracing::trace!(%template, syllable = %syllable.concat(), "built syllable");
		Some(syllable)
	}
}
