//! Shared types for the padezh inflection engine.
//!
//! This crate holds the value types and Cyrillic utilities that the noun
//! engine builds on:
//!
//! - [`case`] -- the seven grammatical cases in canonical order
//! - [`gender`] -- the four grammatical genders
//! - [`character`] -- Cyrillic phonology and string-shape helpers
//! - [`lemma`] -- the immutable [`Lemma`](lemma::Lemma) value object

pub mod case;
pub mod character;
pub mod gender;
pub mod lemma;

pub use case::Case;
pub use gender::Gender;
pub use lemma::{Lemma, LemmaBuilder, LemmaError};
