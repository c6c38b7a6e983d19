// Declension classification.
//
// The class is derived from the lemma, never stored: gender plus the last
// character(s) of the folded spelling plus the indeclinable flag decide it
// completely.

use padezh_core::character::{is_consonant_except_j, last_char, last_n};
use padezh_core::{Gender, Lemma};

/// One of the five declension paradigms.
///
/// The numbering follows the academic tradition (Kamynina 1999):
/// -1 indeclinable, 0 the irregular путь/дитя pair, 1 masculine/neuter
/// zero-ending, 2 nouns in а/я, 3 feminine zero-ending plus the -мя
/// neuters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Declension {
    Indeclinable,
    Irregular,
    First,
    Second,
    Third,
}

impl Declension {
    /// The traditional numeric label: -1, 0, 1, 2 or 3.
    pub fn index(self) -> i8 {
        match self {
            Declension::Indeclinable => -1,
            Declension::Irregular => 0,
            Declension::First => 1,
            Declension::Second => 2,
            Declension::Third => 3,
        }
    }
}

/// Classify a lemma. `None` for plurale-tantum nouns, for which the
/// singular paradigms do not apply. Out-of-range gender values are
/// unrepresentable, so every other lemma classifies.
pub fn declension_of(lemma: &Lemma) -> Option<Declension> {
    if lemma.is_plurale_tantum() {
        return None;
    }
    if lemma.is_indeclinable() {
        return Some(Declension::Indeclinable);
    }

    let word = lemma.lower();
    let last = last_char(word).expect("validated lemma text is non-empty");
    let gender = lemma.gender().expect("non-plurale-tantum lemma has a gender");

    let class = match gender {
        Gender::Feminine => {
            if last == 'а' || last == 'я' {
                Declension::Second
            } else if is_consonant_except_j(last) {
                // Rare: feminine nouns spelled with a bare final consonant
                // (мадам) do not decline.
                Declension::Indeclinable
            } else {
                Declension::Third
            }
        }
        Gender::Masculine => {
            if last == 'а' || last == 'я' {
                Declension::Second
            } else if word == "путь" {
                Declension::Irregular
            } else {
                Declension::First
            }
        }
        Gender::Neuter => {
            if word == "дитя" || word == "полудитя" {
                Declension::Irregular
            } else if last_n(word, 2) == "мя" {
                Declension::Third
            } else {
                Declension::First
            }
        }
        Gender::Common => {
            if last == 'а' || last == 'я' {
                Declension::Second
            } else if last == 'и' {
                Declension::Indeclinable
            } else {
                Declension::First
            }
        }
    };
    Some(class)
}

/// The school-grammar numbering: what the academic tradition calls the
/// second declension is taught as the first and vice versa. Purely a
/// presentation convenience.
pub fn school_declension_of(lemma: &Lemma) -> Option<i8> {
    declension_of(lemma).map(|d| match d {
        Declension::First => 2,
        Declension::Second => 1,
        other => other.index(),
    })
}
