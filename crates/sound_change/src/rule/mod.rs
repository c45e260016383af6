use std::fmt;

use glossa_phonology::Symbol;


/// Rule registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
	#[error("environment {0:?} has no `_` anchor")]
	MissingAnchor(String),
	#[error("environment {0:?} has more than one `_` anchor")]
	MultipleAnchors(String),
	#[error("`{symbol}` is only allowed in environments, found in the {part}")]
	ReservedInPattern { symbol: Symbol, part: &'static str },
}

/// Context a rule's source must appear in.
///
/// `before` holds the symbols left of the `_` anchor and `after` those right
/// of it, both in reading order. An environment with no symbols matches
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
	before: Vec<Symbol>,
	after: Vec<Symbol>,
}

impl Environment {
	pub fn unconditioned() -> Self {
		Self::default()
	}

	/// Parses `"V _ V"`, `"_ #"`, `"# s _"`, ... A blank pattern is
	/// unconditioned.
	///
	/// # Errors
	///
	/// A non-blank pattern needs exactly one `_`.
	pub fn parse(pattern: &str) -> Result<Self, RuleError> {
		let symbols: Vec<Symbol> = pattern.split_whitespace().map(Symbol::parse).collect();
		Self::from_symbols(symbols).map_err(|error| match error {
			RuleError::MissingAnchor(_) => RuleError::MissingAnchor(pattern.to_string()),
			RuleError::MultipleAnchors(_) => RuleError::MultipleAnchors(pattern.to_string()),
			other => other,
		})
	}

	/// # Errors
	///
	/// See [`Environment::parse`].
	pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, RuleError> {
		let symbols: Vec<Symbol> = symbols.into_iter().filter(|s| !s.is_empty()).collect();
		if symbols.is_empty() {
			return Ok(Self::unconditioned());
		}

		let rendered = || symbols.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
		let mut anchors = symbols.iter().enumerate().filter(|(_, s)| **s == Symbol::Anchor);
		let Some((anchor, _)) = anchors.next() else {
			return Err(RuleError::MissingAnchor(rendered()));
		};
		if anchors.next().is_some() {
			return Err(RuleError::MultipleAnchors(rendered()));
		}

		let after = symbols[anchor + 1..].to_vec();
		let mut before = symbols;
		before.truncate(anchor);
		Ok(Self { before, after })
	}

	pub fn before(&self) -> &[Symbol] {
		&self.before
	}

	pub fn after(&self) -> &[Symbol] {
		&self.after
	}

	pub fn is_unconditioned(&self) -> bool {
		self.before.is_empty() && self.after.is_empty()
	}

	/// Renders the environment as prose: `"between a vowel and a vowel"`,
	/// `"before a consonant"`, `"after the word edge"`.
	pub fn describe(&self) -> String {
		match (self.before.is_empty(), self.after.is_empty()) {
			(true, true) => "everywhere".to_string(),
			(true, false) => format!("before {}", describe_seq(&self.after)),
			(false, true) => format!("after {}", describe_seq(&self.before)),
			(false, false) => format!("between {} and {}", describe_seq(&self.before), describe_seq(&self.after)),
		}
	}
}

fn describe_seq(symbols: &[Symbol]) -> String {
	symbols.iter().map(describe_symbol).collect::<Vec<_>>().join(" followed by ")
}

fn describe_symbol(symbol: &Symbol) -> String {
	match symbol {
		Symbol::AnyConsonant => "a consonant".to_string(),
		Symbol::AnyVowel => "a vowel".to_string(),
		Symbol::Boundary => "the word edge".to_string(),
		Symbol::Features(features) => {
			let names: Vec<&str> = features.iter().map(|f| f.name()).collect();
			let article = match names.first().and_then(|n| n.chars().next()) {
				Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
				_ => "a",
			};
			format!("{article} {} sound", names.join(" "))
		}
		Symbol::Letter(letter) => format!("\"{letter}\""),
		other => other.to_string(),
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for symbol in &self.before {
			write!(f, "{symbol} ")?;
		}
		f.write_str("_")?;
		for symbol in &self.after {
			write!(f, " {symbol}")?;
		}
		Ok(())
	}
}

/// One contextual rewrite: `source -> target / environment`.
///
/// Empty symbols are dropped from source and target on construction, so an
/// empty source marks an insertion point and an empty target a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	pub(crate) source: Vec<Symbol>,
	pub(crate) target: Vec<Symbol>,
	pub(crate) environment: Environment,
}

impl Rule {
	/// # Errors
	///
	/// Returns [`RuleError::ReservedInPattern`] when `_` or `#` appears in the
	/// source or target.
	pub fn new(source: Vec<Symbol>, target: Vec<Symbol>, environment: Environment) -> Result<Self, RuleError> {
		Ok(Self {
			source: pattern(source, "source")?,
			target: pattern(target, "target")?,
			environment,
		})
	}

	/// Parses whitespace-separated source, target and environment patterns.
	/// Conjunctions inside one symbol are comma-joined (`"voiced,plosive"`).
	///
	/// # Errors
	///
	/// See [`Rule::new`] and [`Environment::parse`].
	pub fn parse(source: &str, target: &str, environment: &str) -> Result<Self, RuleError> {
		Self::new(Symbol::parse_seq(source), Symbol::parse_seq(target), Environment::parse(environment)?)
	}

	pub fn source(&self) -> &[Symbol] {
		&self.source
	}

	pub fn target(&self) -> &[Symbol] {
		&self.target
	}

	pub fn environment(&self) -> &Environment {
		&self.environment
	}

	/// Prose rendering, e.g. `"plosive becomes fricative between a vowel and a vowel"`.
	pub fn describe(&self) -> String {
		let action = match (self.source.is_empty(), self.target.is_empty()) {
			(true, true) => "nothing changes".to_string(),
			(true, false) => format!("insert {}", join(&self.target)),
			(false, true) => format!("delete {}", join(&self.source)),
			(false, false) => format!("{} becomes {}", join(&self.source), join(&self.target)),
		};
		format!("{action} {}", self.environment.describe())
	}
}

fn pattern(symbols: Vec<Symbol>, part: &'static str) -> Result<Vec<Symbol>, RuleError> {
	let mut kept = Vec::with_capacity(symbols.len());
	for symbol in symbols {
		match symbol {
			Symbol::Empty => {}
			Symbol::Anchor | Symbol::Boundary => return Err(RuleError::ReservedInPattern { symbol, part }),
			other => kept.push(other),
		}
	}
	Ok(kept)
}

fn join(symbols: &[Symbol]) -> String {
	if symbols.is_empty() {
		return "0".to_string();
	}
	symbols.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {} / {}", join(&self.source), join(&self.target), self.environment)
	}
}
