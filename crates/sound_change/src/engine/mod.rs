//! Contextual pattern matching and rewriting.
//!
//! A rule pass walks the word left to right. At each position it tests the
//! source span and its flanking context against the *input* of the pass, so
//! rewrites made earlier in the same pass never feed later matches. After a
//! match the scan resumes right after the consumed span.
//!
//! Context is read from the word padded with a boundary on each side:
//!
//! ```text
//! padded index   0   1   2   3   4   5
//!                #   a   h   t   a   #
//! ```

use glossa_phonology::{Inventory, Symbol};
use rand::Rng;

use crate::rule::{Rule, RuleError};

#[cfg(test)]
mod tests;

/// One position of the boundary-padded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<'a> {
	Boundary,
	Letter(&'a str),
}

fn padded(word: &[String], index: usize) -> Option<Slot<'_>> {
	if index == 0 || index == word.len() + 1 {
		return Some(Slot::Boundary);
	}
	word.get(index - 1).map(|letter| Slot::Letter(letter.as_str()))
}

fn context_matches(inventory: &Inventory, symbol: &Symbol, slot: Option<Slot<'_>>) -> bool {
	match (symbol, slot) {
		(Symbol::Boundary, Some(Slot::Boundary)) => true,
		(_, Some(Slot::Letter(letter))) => inventory.matches(symbol, letter),
		_ => false,
	}
}

impl Rule {
	/// Whether the source matches at word index `start` in its environment.
	fn matches_at(&self, word: &[String], start: usize, inventory: &Inventory) -> bool {
		let width = self.source.len();
		let Some(span) = word.get(start..start + width) else {
			return false;
		};
		if !self.source.iter().zip(span).all(|(symbol, letter)| inventory.matches(symbol, letter)) {
			return false;
		}

		// padded index of the letter just left of the span is `start`
		let before_ok = self.environment.before().iter().rev().enumerate().all(|(k, symbol)| {
			let slot = start.checked_sub(k).and_then(|index| padded(word, index));
			context_matches(inventory, symbol, slot)
		});
		if !before_ok {
			return false;
		}

		let after_start = start + width + 1;
		self.environment
			.after()
			.iter()
			.enumerate()
			.all(|(k, symbol)| context_matches(inventory, symbol, padded(word, after_start + k)))
	}

	/// Appends the resolved target to `out`.
	///
	/// Literal target letters are written verbatim, classes and tags are
	/// resolved against the inventory, and anything unresolvable is dropped.
	fn emit<R: Rng + ?Sized>(&self, out: &mut Vec<String>, inventory: &Inventory, rng: &mut R) {
		for symbol in &self.target {
			match symbol {
				Symbol::Letter(letter) => out.push(letter.clone()),
				other => out.extend(inventory.resolve(other, rng)),
			}
		}
	}

	/// Applies this rule once over the whole word.
	///
	/// Never fails: spans that do not match are copied unchanged.
	pub fn apply<R: Rng + ?Sized>(&self, word: &[String], inventory: &Inventory, rng: &mut R) -> Vec<String> {
		let width = self.source.len();
		let mut out = Vec::with_capacity(word.len() + self.target.len());
		let mut i = 0;

		if width == 0 {
			// insertion points sit before every letter and after the last one
			loop {
				if self.matches_at(word, i, inventory) {
					self.emit(&mut out, inventory, rng);
				}
				let Some(letter) = word.get(i) else { break };
				out.push(letter.clone());
				i += 1;
			}
			return out;
		}

		while i < word.len() {
			if self.matches_at(word, i, inventory) {
				self.emit(&mut out, inventory, rng);
				i += width;
			} else {
				out.push(word[i].clone());
				i += 1;
			}
		}
		out
	}
}

/// Ordered sound-change rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	rules: Vec<Rule>,
}

impl RuleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses and appends a rule. See [`Rule::parse`].
	///
	/// # Errors
	///
	/// Returns the [`RuleError`] from parsing; the set is unchanged.
	pub fn add_rule(&mut self, source: &str, target: &str, environment: &str) -> Result<(), RuleError> {
		self.rules.push(Rule::parse(source, target, environment)?);
		Ok(())
	}

	pub fn push(&mut self, rule: Rule) {
		self.rules.push(rule);
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Applies every rule in registration order, each to the previous
	/// rule's output. The input word is not modified.
	pub fn apply<R: Rng + ?Sized>(&self, word: &[String], inventory: &Inventory, rng: &mut R) -> Vec<String> {
		let mut current = word.to_vec();
		for rule in &self.rules {
			let next = rule.apply(&current, inventory, rng);
			if next != current {
				tracing::debug!(%rule, before = %current.concat(), after = %next.concat(), "applied sound change");
			}
			current = next;
		}
		current
	}
}

impl FromIterator<Rule> for RuleSet {
	fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
		Self {
			rules: iter.into_iter().collect(),
		}
	}
}

impl Extend<Rule> for RuleSet {
	fn extend<T: IntoIterator<Item = Rule>>(&mut self, iter: T) {
		self.rules.extend(iter);
	}
}

impl<'a> IntoIterator for &'a RuleSet {
	type Item = &'a Rule;
	type IntoIter = std::slice::Iter<'a, Rule>;

	fn into_iter(self) -> Self::IntoIter {
		self.rules.iter()
	}
}
