// The locative dictionary.
//
// The colloquial second prepositional («в лесу», «на мосту») exists only
// for certain masculine first-declension nouns, with a specific
// preposition and a specific semantic reading. The dictionary records,
// per noun, which prepositions apply, whether the form is the special
// -у/-ю one or just the ordinary prepositional, and the semantic classes
// involved.

use std::fmt;

use hashbrown::HashMap;

use padezh_core::character::{fold_yo, init, last_char};
use padezh_core::{Gender, Lemma};

use crate::declension::{Declension, declension_of};
use crate::stem::noun_stem;

/// Preposition governing a locative form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocativePreposition {
    /// «в» (its phonological variant «во» is left to the caller).
    V,
    /// «на».
    Na,
}

impl fmt::Display for LocativePreposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocativePreposition::V => "в",
            LocativePreposition::Na => "на",
        })
    }
}

/// Which surface form the configuration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocativeVariant {
    /// The ordinary prepositional form (в отпуске).
    Prepositional,
    /// The special stressed -у/-ю form (в отпуску).
    SpecialU,
}

/// Semantic classes that license the locative (after Plungian's
/// classification of the Russian locative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocativeAttribute {
    /// Spatial location (в лесу, на мосту).
    Place,
    /// Temporal reading (в году, в котором часу).
    Time,
    /// A state the referent is in (в плену, в бою).
    State,
    /// Substance covering or filling (в снегу, в пуху).
    Substance,
}

/// One dictionary configuration: preposition, form variant, and the
/// conjunction of semantic attributes it applies under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocativeConfig {
    pub preposition: LocativePreposition,
    pub variant: LocativeVariant,
    pub attributes: Vec<LocativeAttribute>,
}

/// A computed locative: the configuration plus the surface word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocativeForm {
    pub preposition: LocativePreposition,
    pub word: String,
    pub attributes: Vec<LocativeAttribute>,
}

/// The special -у/-ю locative surface form: stem + у, or -ю after й-final
/// words (лес -> лесу, лёд -> льду, край -> краю).
pub fn special_u_form(lemma: &Lemma) -> String {
    if last_char(lemma.lower()) == Some('й') {
        let mut word = init(lemma.text()).to_string();
        word.push('ю');
        word
    } else {
        let mut word = noun_stem(lemma);
        word.push('у');
        word
    }
}

/// Mapping from masculine first-declension nouns to their locative
/// configurations, keyed by the ё-folded lowercase spelling.
#[derive(Debug, Clone, Default)]
pub struct LocativeDictionary {
    entries: HashMap<String, Vec<LocativeConfig>>,
}

impl LocativeDictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary pre-seeded with the built-in word list.
    pub fn with_defaults() -> Self {
        let mut dictionary = Self::new();
        for (word, configs) in SEED {
            let owned = configs
                .iter()
                .map(|&(preposition, variant, attributes)| LocativeConfig {
                    preposition,
                    variant,
                    attributes: attributes.to_vec(),
                })
                .collect();
            dictionary.entries.insert(fold_yo(word), owned);
        }
        dictionary
    }

    /// Store the configurations for a word, replacing previous ones.
    pub fn put(&mut self, word: &str, configs: Vec<LocativeConfig>) {
        self.entries.insert(fold_yo(&word.to_lowercase()), configs);
    }

    /// Remove the configurations for a word. Returns whether an entry was
    /// removed.
    pub fn remove(&mut self, word: &str) -> bool {
        self.entries.remove(&fold_yo(&word.to_lowercase())).is_some()
    }

    /// Configurations for a lemma. Only masculine first-declension nouns
    /// qualify; anything else misses regardless of spelling.
    pub fn get(&self, lemma: &Lemma) -> Option<&[LocativeConfig]> {
        if lemma.gender() != Some(Gender::Masculine)
            || declension_of(lemma) != Some(Declension::First)
        {
            return None;
        }
        self.entries.get(&fold_yo(lemma.lower())).map(Vec::as_slice)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Built-in word list
// ---------------------------------------------------------------------------

type SeedConfig = (
    LocativePreposition,
    LocativeVariant,
    &'static [LocativeAttribute],
);

use LocativeAttribute::{Place, State, Substance, Time};
use LocativePreposition::{Na, V};
use LocativeVariant::{Prepositional, SpecialU};

/// The classic у-locative nouns with their prepositions and readings.
const SEED: &[(&str, &[SeedConfig])] = &[
    ("ад", &[(V, SpecialU, &[Place])]),
    ("аэропорт", &[(V, SpecialU, &[Place])]),
    ("бал", &[(Na, SpecialU, &[Place, Time])]),
    ("берег", &[(Na, SpecialU, &[Place])]),
    ("бок", &[(Na, SpecialU, &[Place])]),
    ("бой", &[(V, SpecialU, &[State])]),
    ("бор", &[(V, SpecialU, &[Place])]),
    ("борт", &[(Na, SpecialU, &[Place])]),
    ("быт", &[(V, SpecialU, &[State])]),
    ("вал", &[(Na, SpecialU, &[Place])]),
    ("верх", &[(Na, SpecialU, &[Place])]),
    ("вид", &[(Na, SpecialU, &[State])]),
    ("глаз", &[(V, SpecialU, &[Place])]),
    ("год", &[(V, SpecialU, &[Time])]),
    ("гроб", &[(V, SpecialU, &[Place])]),
    ("долг", &[(V, SpecialU, &[State])]),
    ("дым", &[(V, SpecialU, &[Substance])]),
    ("жар", &[(V, SpecialU, &[State])]),
    ("край", &[(Na, SpecialU, &[Place]), (V, SpecialU, &[Place])]),
    ("круг", &[(V, SpecialU, &[Place])]),
    ("лёд", &[(Na, SpecialU, &[Place])]),
    ("лес", &[(V, SpecialU, &[Place])]),
    ("лоб", &[(Na, SpecialU, &[Place])]),
    ("луг", &[(Na, SpecialU, &[Place])]),
    ("мёд", &[(V, SpecialU, &[Substance])]),
    ("мел", &[(V, SpecialU, &[Substance])]),
    ("мозг", &[(V, SpecialU, &[Place])]),
    (
        "мост",
        &[(Na, SpecialU, &[Place]), (Na, Prepositional, &[Place])],
    ),
    ("мох", &[(V, SpecialU, &[Substance])]),
    ("низ", &[(V, SpecialU, &[Place])]),
    ("нос", &[(Na, SpecialU, &[Place])]),
    (
        "отпуск",
        &[(V, SpecialU, &[State]), (V, Prepositional, &[State])],
    ),
    ("пир", &[(Na, SpecialU, &[Place, Time])]),
    ("плен", &[(V, SpecialU, &[State])]),
    ("плот", &[(Na, SpecialU, &[Place])]),
    ("пол", &[(Na, SpecialU, &[Place])]),
    ("полк", &[(V, SpecialU, &[Place])]),
    ("порт", &[(V, SpecialU, &[Place])]),
    ("пост", &[(Na, SpecialU, &[Place, State])]),
    ("пот", &[(V, SpecialU, &[Substance])]),
    ("пух", &[(V, SpecialU, &[Substance])]),
    ("рай", &[(V, SpecialU, &[Place])]),
    ("род", &[(V, SpecialU, &[Place])]),
    ("рот", &[(V, SpecialU, &[Place])]),
    ("ряд", &[(V, SpecialU, &[Place])]),
    ("сад", &[(V, SpecialU, &[Place])]),
    ("снег", &[(V, SpecialU, &[Substance])]),
    ("строй", &[(V, SpecialU, &[Place])]),
    ("сук", &[(Na, SpecialU, &[Place])]),
    ("тыл", &[(V, SpecialU, &[Place])]),
    ("угол", &[(V, SpecialU, &[Place]), (Na, SpecialU, &[Place])]),
    (
        "цех",
        &[(V, SpecialU, &[Place]), (V, Prepositional, &[Place])],
    ),
    ("час", &[(V, SpecialU, &[Time])]),
    ("шкаф", &[(V, SpecialU, &[Place])]),
    ("штаб", &[(V, SpecialU, &[Place])]),
];
