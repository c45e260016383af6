//! Word generation for procedurally built languages.
//!
//! A [`Language`] combines a phoneme inventory, syllable templates, an
//! [`AffixTable`] and ordered sound-change rules. Building a word resolves
//! random syllables into a root, splices the requested affixes, rewrites the
//! result through every rule and optionally formats it as a proper name.
//! Built words can be glossed into the language's [`Dictionary`].
//!
//! Randomness is always supplied by the caller, so a seeded generator makes
//! generation reproducible:
//!
//! ```
//! use glossa_lexicon::LanguageDefinition;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let language = LanguageDefinition::demo().unwrap().into_language().unwrap();
//! let a = language.build_word(2, false, &[], &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
//! let b = language.build_word(2, false, &[], &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
//! assert_eq!(a, b);
//! ```

/// Prefix and suffix tables.
pub mod affix;
/// Declarative TOML language definitions.
pub mod definition;
/// Bidirectional word/gloss store.
pub mod dictionary;
/// The word building pipeline.
pub mod language;
/// Letter sequences and name formatting.
pub mod word;

pub use affix::{Affix, AffixError, AffixKind, AffixTable};
pub use definition::{DefinitionError, LanguageDefinition};
pub use dictionary::Dictionary;
pub use language::{BuildError, Language};
pub use word::Word;
