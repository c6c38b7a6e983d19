// Singular case inflection.
//
// One inflector per declension class; this module dispatches on the
// classifier and handles the cases that do not depend on the class at all
// (indeclinables).

mod first;
mod irregular;
mod second;
mod third;

use padezh_core::{Case, Lemma};

use crate::declension::{Declension, declension_of};
use crate::locative::LocativeDictionary;
use crate::stress::StressDictionary;

/// Decline a non-plurale-tantum lemma in the singular. Returns the ordered
/// list of co-valid forms (index 0 is the preferred one).
///
/// # Panics
///
/// Panics when called with a plurale-tantum lemma (those inflect through
/// the plural path) or when the irregular inflector receives a word
/// outside its paradigm; both are classification defects, not data errors.
pub(crate) fn decline(
    lemma: &Lemma,
    case: Case,
    stress: &StressDictionary,
    locative: &LocativeDictionary,
) -> Vec<String> {
    if lemma.is_indeclinable() {
        return vec![lemma.text().to_string()];
    }
    let class = declension_of(lemma)
        .expect("plurale-tantum lemmas are inflected through the plural path");
    match class {
        Declension::Indeclinable => vec![lemma.text().to_string()],
        Declension::Irregular => irregular::decline(lemma, case),
        Declension::First => first::decline(lemma, case, stress, locative),
        Declension::Second => second::decline(lemma, case, stress),
        Declension::Third => third::decline(lemma, case),
    }
}
