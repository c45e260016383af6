//! Sound-change rules for generated languages.
//!
//! A [`Rule`] rewrites every non-overlapping span of a word that matches its
//! source pattern inside its [`Environment`]. A [`RuleSet`] applies rules in
//! registration order, each consuming the previous rule's output.
//!
//! Rules are written as whitespace-separated symbol strings:
//!
//! ```
//! use glossa_sound_change::Rule;
//!
//! // lenition: plosives become fricatives between vowels
//! let rule = Rule::parse("plosive", "fricative", "V _ V").unwrap();
//! assert_eq!(rule.to_string(), "plosive -> fricative / V _ V");
//! ```

mod engine;
mod rule;

pub use engine::RuleSet;
pub use rule::{Environment, Rule, RuleError};
