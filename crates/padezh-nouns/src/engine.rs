// The engine facade.
//
// An Engine owns one stress dictionary and one locative dictionary, both
// pre-seeded with the built-in word lists and editable at runtime. All
// inflection entry points live here; the per-class algorithms are pure
// functions parameterized by the dictionaries.
//
// Mutation of the dictionaries is not synchronized: an Engine belongs to
// one logical owner, and separate engines never share dictionary state.

use padezh_core::{Case, Lemma};

use crate::locative::{LocativeDictionary, LocativeForm, LocativeVariant, special_u_form};
use crate::stress::StressDictionary;
use crate::{plural, singular};

/// Facade over the classifier, the case inflectors, the pluralizer and
/// the dictionaries.
pub struct Engine {
    /// The stress dictionary; editable through `put`/`remove`.
    pub stress: StressDictionary,
    /// The locative dictionary; editable through `put`/`remove`.
    pub locative: LocativeDictionary,
}

impl Engine {
    /// An engine with the built-in dictionaries.
    pub fn new() -> Self {
        Self {
            stress: StressDictionary::with_defaults(),
            locative: LocativeDictionary::with_defaults(),
        }
    }

    /// Decline a lemma in the singular. Plurale-tantum lemmas inflect as
    /// plural with their citation form as the anchor. The result is a
    /// non-empty ordered list of co-valid forms, preferred form first.
    pub fn decline(&self, lemma: &Lemma, case: Case) -> Vec<String> {
        if lemma.is_plurale_tantum() {
            return plural::decline(lemma, case, lemma.text(), &self.stress);
        }
        singular::decline(lemma, case, &self.stress, &self.locative)
    }

    /// Decline in the plural, anchored on an explicit nominative-plural
    /// spelling (usually one of [`Engine::pluralize`]'s results).
    pub fn decline_plural(&self, lemma: &Lemma, case: Case, anchor: &str) -> Vec<String> {
        plural::decline(lemma, case, anchor, &self.stress)
    }

    /// The nominative plural form(s) of a lemma.
    pub fn pluralize(&self, lemma: &Lemma) -> Vec<String> {
        plural::pluralize(lemma, &self.stress)
    }

    /// All locative configurations of a lemma with their computed surface
    /// words. Empty for nouns outside the locative dictionary.
    pub fn locative_forms(&self, lemma: &Lemma) -> Vec<LocativeForm> {
        let Some(configs) = self.locative.get(lemma) else {
            return Vec::new();
        };
        configs
            .iter()
            .map(|config| {
                let word = match config.variant {
                    LocativeVariant::SpecialU => special_u_form(lemma),
                    LocativeVariant::Prepositional => {
                        let mut forms = self.decline(lemma, Case::Prepositional);
                        forms.remove(0)
                    }
                };
                LocativeForm {
                    preposition: config.preposition,
                    word,
                    attributes: config.attributes.clone(),
                }
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
