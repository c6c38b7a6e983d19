// Second declension: nouns in -а/-я of any gender (гора, буря, мужчина,
// сирота), plus the adjective-like -ая/-яя shapes and feminine surnames.

use padezh_core::character::{init, is_sibilant, last_char, last_n};
use padezh_core::{Case, Lemma};

use crate::forms::dedup;
use crate::stem::{is_aya_word, is_yaya_word, noun_stem};
use crate::stress::StressDictionary;

pub(super) fn decline(lemma: &Lemma, case: Case, stress: &StressDictionary) -> Vec<String> {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = noun_stem(lemma);
    let stem_lower = stem.to_lowercase();
    let head = init(word);
    let head_lower = init(lower);

    let soft = last_char(lower) == Some('я');
    let aya = is_aya_word(lower, &stem_lower);
    let yaya = is_yaya_word(lower);
    // Sibilant or ц stems spell the instrumental with о under ending
    // stress and е otherwise (душой, кожей; овцой, птицей).
    let hissing_stem =
        matches!(last_char(&stem_lower), Some(c) if is_sibilant(c) || c == 'ц');
    // Adjectival stems after a sibilant take the soft endings
    // (адаптировавшая -> адаптировавшей).
    let adjective_soft = yaya || last_char(&stem_lower).is_some_and(is_sibilant);

    match case {
        Case::Nominative => vec![word.to_string()],
        Case::Genitive => {
            if aya || yaya {
                vec![format!("{stem}{}", if adjective_soft { "ей" } else { "ой" })]
            } else if lemma.is_surname() {
                vec![format!("{head}ой")]
            } else if soft
                || matches!(last_char(&stem_lower), Some(c) if is_sibilant(c) || ['г', 'к', 'х'].contains(&c))
            {
                vec![format!("{head}и")]
            } else {
                vec![format!("{head}ы")]
            }
        }
        Case::Dative => {
            if aya || yaya {
                vec![format!("{stem}{}", if adjective_soft { "ей" } else { "ой" })]
            } else if lemma.is_surname() {
                vec![format!("{head}ой")]
            } else if last_n(lower, 2) == "ия" {
                vec![format!("{head}и")]
            } else {
                vec![format!("{head}е")]
            }
        }
        Case::Accusative => {
            // Sibilant adjectival stems still take -ую (адаптировавшую);
            // only true soft stems take -юю (синюю).
            if aya || yaya {
                vec![format!("{stem}{}", if yaya { "юю" } else { "ую" })]
            } else if soft {
                vec![format!("{head}ю")]
            } else {
                vec![format!("{head}у")]
            }
        }
        Case::Instrumental => {
            if aya || yaya {
                let endings: [&str; 2] = if adjective_soft {
                    ["ей", "ею"]
                } else {
                    ["ой", "ою"]
                };
                return endings.iter().map(|e| format!("{stem}{e}")).collect();
            }
            if soft || hissing_stem {
                // и-stems have a single form (молнией); elsewhere the pair
                // depends on stress: душой/душою, кожей/кожею, землёй/землёю.
                if last_char(head_lower) == Some('и') {
                    return vec![format!("{head}ей")];
                }
                let mut stresses = stress.has_stressed_ending_singular(lemma, case);
                if stresses.is_empty() {
                    stresses.push(false);
                }
                let mut forms = Vec::new();
                for stressed in stresses {
                    let pair: [&str; 2] = match (stressed, hissing_stem) {
                        (true, true) => ["ой", "ою"],
                        (false, _) => ["ей", "ею"],
                        (true, false) => ["ёй", "ёю"],
                    };
                    forms.extend(pair.iter().map(|e| format!("{head}{e}")));
                }
                return dedup(forms);
            }
            vec![format!("{head}ой"), format!("{head}ою")]
        }
        Case::Prepositional | Case::Locative => {
            if aya || yaya {
                vec![format!("{stem}{}", if adjective_soft { "ей" } else { "ой" })]
            } else if lemma.is_surname() {
                vec![format!("{head}ой")]
            } else if last_n(lower, 2) == "ия" {
                vec![format!("{head}и")]
            } else {
                vec![format!("{head}е")]
            }
        }
    }
}
