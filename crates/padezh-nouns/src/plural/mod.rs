// Pluralization: the nominative plural from a lemma.
//
// Priority order: plurale tantum and indeclinables pass through,
// adjective shapes substitute their ending directly, the literal
// exception tables win over everything else, and only then do the
// per-gender suffix cascades apply.

mod cases;
mod words;

pub(crate) use cases::decline;

use padezh_core::character::{init, is_sibilant, is_velar, last_char, last_n};
use padezh_core::{Case, Gender, Lemma};

use crate::forms::dedup;
use crate::stem::{
    is_adjective_shaped, is_ok_word, is_ts_word, noun_stem, ts_stem, yo_variant,
};
use crate::stress::StressDictionary;

pub(crate) fn pluralize(lemma: &Lemma, stress: &StressDictionary) -> Vec<String> {
    if lemma.is_plurale_tantum() || lemma.is_indeclinable() {
        return vec![lemma.text().to_string()];
    }
    if is_adjective_shaped(lemma) {
        return vec![adjective_plural(lemma)];
    }

    let gender = lemma
        .gender()
        .expect("non-plurale-tantum lemma has a gender");

    if let Some(forms) = exceptional(lemma, gender) {
        return forms;
    }

    let mut stresses = stress.has_stressed_ending_plural(lemma, Case::Nominative);
    if stresses.is_empty() {
        stresses.push(false);
    }
    let mut forms = Vec::new();
    for stressed in stresses {
        forms.push(regular(lemma, gender, stressed));
    }
    dedup(forms)
}

/// Adjective shapes substitute the plural ending directly
/// (чистая -> чистые, лихой -> лихие).
fn adjective_plural(lemma: &Lemma) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = init(init(word));
    let stem_last = init(init(lower)).chars().next_back();
    let soft = lower.ends_with("ий") || lower.ends_with("ее") || lower.ends_with("яя");
    let husky = stem_last.is_some_and(|c| is_sibilant(c) || is_velar(c));
    format!("{stem}{}", if soft || husky { "ие" } else { "ые" })
}

/// Literal irregular plurals; checked before any rule.
fn exceptional(lemma: &Lemma, gender: Gender) -> Option<Vec<String>> {
    let lower = lemma.lower();

    // The vessel судно pluralizes as суда; the utensil keeps судна.
    if lower == "судно" && lemma.is_transport() {
        return Some(vec!["суда".to_string()]);
    }

    let table = match gender {
        Gender::Masculine => words::MASCULINE_PLURALS,
        Gender::Neuter => words::NEUTER_PLURALS,
        Gender::Feminine => words::FEMININE_PLURALS,
        Gender::Common => return None,
    };
    words::lookup(table, lower).map(|forms| forms.iter().map(|f| f.to_string()).collect())
}

/// Regular per-gender suffix cascades, first match wins.
fn regular(lemma: &Lemma, gender: Gender, stressed: bool) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let head = init(word);

    // Surnames pluralize with -ы (Ивановы), both genders; adjectival
    // surnames substitute the adjectival ending (Достоевские).
    if lemma.is_surname() {
        if lower.ends_with("ин") || lower.ends_with("ов") || lower.ends_with("ев") {
            return format!("{word}ы");
        }
        if lower.ends_with("ина") || lower.ends_with("ова") || lower.ends_with("ева") {
            return format!("{head}ы");
        }
        if lower.ends_with("ий") || lower.ends_with("ый") || lower.ends_with("ой") {
            return adjective_plural(lemma);
        }
    }

    match gender {
        Gender::Masculine if !matches!(last_char(lower), Some('а') | Some('я')) => {
            masculine(lemma, stressed)
        }
        Gender::Neuter => neuter(lemma, stressed),
        _ => feminine_like(lemma),
    }
}

fn masculine(lemma: &Lemma, stressed: bool) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = yo_variant(&noun_stem(lemma), stressed);
    let stem_lower = stem.to_lowercase();
    let head = init(word);

    if lower.ends_with("анин") || lower.ends_with("янин") {
        return format!("{}е", init(head));
    }
    if lemma.is_animate() && lower.ends_with("ёнок") {
        return format!("{}ята", init(init(init(head))));
    }
    if lemma.is_animate() && lower.ends_with("онок") {
        return format!("{}ата", init(init(init(head))));
    }
    if words::A_PLURALS.contains(&lower) {
        return format!("{stem}а");
    }
    if words::YA_PLURALS.contains(&lower) {
        if last_char(lower) == Some('й') {
            return format!("{head}я");
        }
        return format!("{stem}я");
    }
    if is_ok_word(lower) {
        return format!("{}ки", init(head));
    }
    if is_ts_word(lower) {
        return format!("{}цы", ts_stem(word));
    }
    // соловей-type: the stem already carries the softened й.
    if lower.ends_with("ей") && stem_lower.ends_with('ь') {
        return format!("{stem}и");
    }
    if last_char(lower) == Some('й') || last_n(lower, 2) == "ий" {
        return format!("{head}и");
    }
    if last_char(lower) == Some('ь') {
        return format!("{stem}и");
    }
    if last_char(&stem_lower).is_some_and(|c| is_sibilant(c) || is_velar(c)) {
        return format!("{stem}и");
    }
    format!("{stem}ы")
}

fn neuter(lemma: &Lemma, stressed: bool) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = yo_variant(&noun_stem(lemma), stressed);
    let head = init(word);

    if last_n(lower, 2) == "мя" {
        return format!("{stem}ена");
    }
    if lower.ends_with("ко") {
        return format!("{stem}и");
    }
    if lower.ends_with("ье") || lower.ends_with("ьё") {
        return format!("{stem}я");
    }
    if last_n(lower, 2) == "ие" {
        return format!("{head}я");
    }
    if lower.ends_with("це") {
        return format!("{head}а");
    }
    if matches!(last_char(lower), Some('е') | Some('ё')) {
        return format!("{stem}я");
    }
    format!("{stem}а")
}

fn feminine_like(lemma: &Lemma) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = noun_stem(lemma);
    let stem_lower = stem.to_lowercase();
    let head = init(word);

    if last_n(lower, 2) == "ия" {
        return format!("{head}и");
    }
    if last_char(lower) == Some('ь') {
        return format!("{stem}и");
    }
    if last_char(lower) == Some('я') {
        return format!("{head}и");
    }
    let husky = last_char(&stem_lower)
        .is_some_and(|c| is_sibilant(c) || is_velar(c));
    if husky {
        return format!("{head}и");
    }
    format!("{head}ы")
}
