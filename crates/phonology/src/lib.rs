//! Phonological building blocks for generated languages.
//!
//! Provides the closed articulatory feature taxonomy, the phoneme [`Inventory`]
//! that maps letters to feature matrices, the [`Symbol`] grammar shared by
//! syllable templates and sound-change rules, and [`SyllableInventory`].

/// Articulatory feature categories and tags.
pub mod feature;
/// Letter/feature-matrix storage and symbol resolution.
pub mod inventory;
/// Syllable slot templates.
pub mod syllable;
/// Pattern symbols used by templates and rules.
pub mod symbol;

pub use feature::{
	Backness, Category, Feature, FeatureError, FeatureMatrix, Height, Manner, PhonemeKind, Place,
	Rounding, Voicing,
};
pub use inventory::{Inventory, RegistrationError};
pub use syllable::{SyllableError, SyllableInventory, SyllableTemplate};
pub use symbol::Symbol;

/// Default miss value for [`Inventory::letter_or`].
pub const NON_LETTER: &str = "";
