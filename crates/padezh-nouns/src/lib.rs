//! Rule-based declension and pluralization of Russian nouns.
//!
//! Given a nominative-singular spelling plus declared grammatical
//! attributes (gender, animacy, indeclinability, plurale-tantum status,
//! proper-noun flags), the engine computes the inflected forms for the
//! seven cases in singular and plural, including the colloquial second
//! prepositional («в лесу»). Forms whose spelling depends on stress
//! placement are disambiguated through a runtime-editable stress
//! dictionary.
//!
//! # Architecture
//!
//! - [`declension`] -- declension-class classification
//! - [`stem`] -- stem extraction and word-shape predicates
//! - [`stress`] -- the 13-slot stress-pattern dictionary
//! - [`locative`] -- the second-prepositional dictionary
//! - [`engine`] -- the [`Engine`] facade tying it all together
//!
//! # Example
//!
//! ```
//! use padezh_nouns::{Case, Engine, Gender, Lemma};
//!
//! let engine = Engine::new();
//! let mountain = Lemma::builder("гора").gender(Gender::Feminine).build()?;
//!
//! assert_eq!(engine.decline(&mountain, Case::Genitive), ["горы"]);
//! assert_eq!(
//!     engine.decline(&mountain, Case::Instrumental),
//!     ["горой", "горою"]
//! );
//!
//! let plural = engine.pluralize(&mountain);
//! assert_eq!(plural, ["горы"]);
//! assert_eq!(
//!     engine.decline_plural(&mountain, Case::Genitive, &plural[0]),
//!     ["гор"]
//! );
//! # Ok::<(), padezh_nouns::LemmaError>(())
//! ```

pub mod declension;
pub mod engine;
pub mod locative;
pub mod stem;
pub mod stress;

mod forms;
mod plural;
mod singular;

pub use declension::{Declension, declension_of, school_declension_of};
pub use engine::Engine;
pub use locative::{
    LocativeAttribute, LocativeConfig, LocativeDictionary, LocativeForm, LocativePreposition,
    LocativeVariant,
};
pub use stress::{
    ALL_ENDING_STRESSED, ALL_STEM_STRESSED, StressDictionary, StressDictionaryError,
};

// The shared value types are part of this crate's public surface.
pub use padezh_core::{Case, Gender, Lemma, LemmaBuilder, LemmaError};
