// The Lemma value object: a citation form plus grammatical attributes.
//
// A Lemma is immutable once built. Derived spellings (recursive
// half-compound rewriting, extended stems) are produced with `with_text`,
// which returns a fresh instance and never mutates the original.

use std::hash::{Hash, Hasher};

use crate::character::{fold_yo, is_cyrillic_word};
use crate::gender::Gender;

/// Error building a [`Lemma`] from a descriptor.
///
/// The two variants are the only constraint violations representable in
/// Rust; malformed gender values and non-boolean flags are ruled out by
/// the type system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LemmaError {
    /// The citation form is empty or not a Cyrillic word.
    #[error("lemma text must be a non-empty Cyrillic word, got {0:?}")]
    InvalidText(String),

    /// A grammatical gender is required unless the noun is plurale tantum.
    #[error("a grammatical gender is required for non-plurale-tantum lemmas")]
    MissingGender,
}

/// A noun's citation form (nominative singular, or the plural-only form)
/// together with its grammatical and semantic attributes.
#[derive(Debug, Clone)]
pub struct Lemma {
    text: String,
    lower: String,
    gender: Option<Gender>,
    plurale_tantum: bool,
    indeclinable: bool,
    animate: bool,
    surname: bool,
    name: bool,
    transport: bool,
}

impl Lemma {
    /// Start building a lemma from its citation-form spelling.
    pub fn builder(text: impl Into<String>) -> LemmaBuilder {
        LemmaBuilder {
            text: text.into(),
            gender: None,
            plurale_tantum: false,
            indeclinable: false,
            animate: false,
            surname: false,
            name: false,
            transport: false,
        }
    }

    /// Citation-form spelling, case-preserving.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded spelling, computed once at construction.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Grammatical gender. `None` exactly when the noun is plurale tantum.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Whether the noun exists only in plural form (ножницы, ворота).
    pub fn is_plurale_tantum(&self) -> bool {
        self.plurale_tantum
    }

    /// Whether every case equals the citation form (пальто).
    pub fn is_indeclinable(&self) -> bool {
        self.indeclinable
    }

    /// Animacy for case selection. Surnames and personal names denote
    /// people, so they count as animate regardless of the explicit flag.
    pub fn is_animate(&self) -> bool {
        self.animate || self.surname || self.name
    }

    /// Whether the noun is a surname (Иванов, Кузнецова).
    pub fn is_surname(&self) -> bool {
        self.surname
    }

    /// Whether the noun is a personal name (Любовь the name declines
    /// differently from любовь the noun).
    pub fn is_name(&self) -> bool {
        self.name
    }

    /// Whether the noun denotes a vehicle/vessel (affects the plural of
    /// судно).
    pub fn is_transport(&self) -> bool {
        self.transport
    }

    /// A copy of this lemma with a different spelling and the same
    /// attributes. The caller is responsible for passing a Cyrillic word;
    /// the engine only ever passes spellings derived from validated ones.
    pub fn with_text(&self, text: impl Into<String>) -> Lemma {
        let text = text.into();
        let lower = text.to_lowercase();
        Lemma {
            text,
            lower,
            ..self.clone()
        }
    }

    /// A copy of this lemma with a different gender.
    pub fn with_gender(&self, gender: Gender) -> Lemma {
        Lemma {
            gender: Some(gender),
            ..self.clone()
        }
    }

    /// Relaxed equality for dictionary lookup when no exact homonym
    /// matches: spellings are compared with ё folded to е, and the finer
    /// animate/surname/name/transport distinctions are ignored.
    pub fn fuzzy_eq(&self, other: &Lemma) -> bool {
        fold_yo(&self.lower) == fold_yo(&other.lower)
            && self.plurale_tantum == other.plurale_tantum
            && self.gender == other.gender
            && self.indeclinable == other.indeclinable
    }
}

impl PartialEq for Lemma {
    /// Equality over the folded spelling and all grammatical attributes;
    /// the case-preserving `text` does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower
            && self.plurale_tantum == other.plurale_tantum
            && self.gender == other.gender
            && self.indeclinable == other.indeclinable
            && self.animate == other.animate
            && self.surname == other.surname
            && self.name == other.name
            && self.transport == other.transport
    }
}

impl Eq for Lemma {}

impl Hash for Lemma {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash(state);
        self.plurale_tantum.hash(state);
        self.gender.hash(state);
        self.indeclinable.hash(state);
        self.animate.hash(state);
        self.surname.hash(state);
        self.name.hash(state);
        self.transport.hash(state);
    }
}

/// Builder for [`Lemma`]; validation happens in [`LemmaBuilder::build`].
#[derive(Debug, Clone)]
pub struct LemmaBuilder {
    text: String,
    gender: Option<Gender>,
    plurale_tantum: bool,
    indeclinable: bool,
    animate: bool,
    surname: bool,
    name: bool,
    transport: bool,
}

impl LemmaBuilder {
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn plurale_tantum(mut self) -> Self {
        self.plurale_tantum = true;
        self
    }

    pub fn indeclinable(mut self) -> Self {
        self.indeclinable = true;
        self
    }

    pub fn animate(mut self) -> Self {
        self.animate = true;
        self
    }

    pub fn surname(mut self) -> Self {
        self.surname = true;
        self
    }

    pub fn name(mut self) -> Self {
        self.name = true;
        self
    }

    pub fn transport(mut self) -> Self {
        self.transport = true;
        self
    }

    /// Validate and freeze. Text is checked first, then the gender
    /// requirement. A plurale-tantum lemma has no gender: the invariant
    /// wins over a gender supplied alongside the flag.
    pub fn build(self) -> Result<Lemma, LemmaError> {
        if !is_cyrillic_word(&self.text) {
            return Err(LemmaError::InvalidText(self.text));
        }
        let gender = if self.plurale_tantum {
            None
        } else {
            match self.gender {
                Some(g) => Some(g),
                None => return Err(LemmaError::MissingGender),
            }
        };
        let lower = self.text.to_lowercase();
        Ok(Lemma {
            text: self.text,
            lower,
            gender,
            plurale_tantum: self.plurale_tantum,
            indeclinable: self.indeclinable,
            animate: self.animate,
            surname: self.surname,
            name: self.name,
            transport: self.transport,
        })
    }
}
