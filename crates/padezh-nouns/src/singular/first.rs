// First declension: masculine and neuter nouns with a zero ending in the
// nominative. The richest of the inflectors: the ending depends on the
// shape of the word (soft, -й/-ий, sibilant, -ц, -ок diminutive,
// adjective-like), and several endings are spelled differently under stem
// and ending stress, which is where the stress dictionary comes in.

use padezh_core::character::{init, is_sibilant, is_velar, last_char, last_n};
use padezh_core::{Case, Gender, Lemma};

use crate::forms::dedup;
use crate::locative::{LocativeDictionary, LocativeVariant, special_u_form};
use crate::stem::{
    is_adjective_first, is_iy_word, is_ok_word, is_soft_first, is_ts_word, noun_stem, ts_stem,
    yo_variant,
};
use crate::stress::StressDictionary;

/// Half-compounds reduced to a whole-word problem: the пол- prefix widens
/// to полу- and the base noun declines in its place (с полпути -> с
/// полупути).
const HALF_COMPOUNDS: &[(&str, &str)] = &[("полпути", "путь")];

pub(super) fn decline(
    lemma: &Lemma,
    case: Case,
    stress: &StressDictionary,
    locative: &LocativeDictionary,
) -> Vec<String> {
    let lower = lemma.lower();

    if let Some(&(_, base)) = HALF_COMPOUNDS.iter().find(|(compound, _)| *compound == lower) {
        return decline_half(lemma, base, case, stress, locative);
    }

    if is_adjective_first(lower) {
        return adjective(lemma, case);
    }

    match case {
        Case::Nominative => vec![lemma.text().to_string()],
        Case::Accusative => {
            if lemma.gender() == Some(Gender::Neuter) || !lemma.is_animate() {
                vec![lemma.text().to_string()]
            } else {
                decline(lemma, Case::Genitive, stress, locative)
            }
        }
        Case::Locative => locative_forms(lemma, stress, locative),
        oblique => {
            let mut stresses = stress.has_stressed_ending_singular(lemma, oblique);
            if stresses.is_empty() {
                stresses.push(false);
            }
            let forms = stresses
                .into_iter()
                .map(|stressed| oblique_form(lemma, oblique, stressed))
                .collect();
            dedup(forms)
        }
    }
}

/// Locative: one surface form per distinct dictionary variant, in config
/// order; without a dictionary entry the prepositional stands in.
fn locative_forms(
    lemma: &Lemma,
    stress: &StressDictionary,
    locative: &LocativeDictionary,
) -> Vec<String> {
    let Some(configs) = locative.get(lemma) else {
        return decline(lemma, Case::Prepositional, stress, locative);
    };
    let mut seen: Vec<LocativeVariant> = Vec::new();
    let mut forms = Vec::new();
    for config in configs {
        if seen.contains(&config.variant) {
            continue;
        }
        seen.push(config.variant);
        match config.variant {
            LocativeVariant::SpecialU => forms.push(special_u_form(lemma)),
            LocativeVariant::Prepositional => {
                forms.extend(decline(lemma, Case::Prepositional, stress, locative));
            }
        }
    }
    dedup(forms)
}

/// One oblique form under one stress placement.
fn oblique_form(lemma: &Lemma, case: Case, stressed: bool) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = yo_variant(&noun_stem(lemma), stressed);
    let stem_lower = stem.to_lowercase();
    let stem_last = last_char(&stem_lower);
    let head = init(word);

    // соловей-type: the fleeting е is gone and the stem ends in ь.
    let soft_ey = lower.ends_with("ей") && stem_lower.ends_with('ь');
    let iy = is_iy_word(lower);
    let soft = is_soft_first(lower);
    // ч/щ stems take а/у where other soft stems take я/ю.
    let sch = matches!(stem_last, Some('ч') | Some('щ'));
    let ts = is_ts_word(lower);
    let ok = is_ok_word(lower);
    let surname_iy = iy && lemma.is_surname();
    let surname_suffix = lemma.is_surname()
        && (lower.ends_with("ин") || lower.ends_with("ов") || lower.ends_with("ев"));

    match case {
        Case::Genitive => {
            if soft_ey {
                format!("{stem}я")
            } else if surname_iy {
                format!("{stem}ого")
            } else if iy {
                format!("{head}я")
            } else if soft && !sch {
                format!("{stem}я")
            } else if ts {
                format!("{}ца", ts_stem(word))
            } else if ok {
                format!("{}ка", init(head))
            } else {
                format!("{stem}а")
            }
        }
        Case::Dative => {
            if soft_ey {
                format!("{stem}ю")
            } else if surname_iy {
                format!("{stem}ому")
            } else if iy {
                format!("{head}ю")
            } else if soft && !sch {
                format!("{stem}ю")
            } else if ts {
                format!("{}цу", ts_stem(word))
            } else if ok {
                format!("{}ку", init(head))
            } else {
                format!("{stem}у")
            }
        }
        Case::Instrumental => {
            if soft_ey {
                format!("{stem}{}", if stressed { "ём" } else { "ем" })
            } else if surname_iy {
                format!("{stem}им")
            } else if iy {
                format!("{head}{}", if stressed { "ём" } else { "ем" })
            } else if stem_last.is_some_and(is_sibilant) {
                format!("{stem}{}", if stressed { "ом" } else { "ем" })
            } else if soft {
                format!("{stem}{}", if stressed { "ём" } else { "ем" })
            } else if ts {
                format!("{}{}", ts_stem(word), if stressed { "цом" } else { "цем" })
            } else if lower.ends_with("це") {
                format!("{word}м")
            } else if ok {
                format!("{}ком", init(head))
            } else if surname_suffix {
                format!("{word}ым")
            } else {
                format!("{stem}ом")
            }
        }
        Case::Prepositional => {
            if surname_iy {
                format!("{stem}ом")
            } else if matches!(last_n(lower, 2), "ий" | "ие") {
                format!("{head}и")
            } else if soft_ey {
                format!("{stem}е")
            } else if last_char(lower) == Some('й') {
                format!("{head}е")
            } else if ts {
                format!("{}це", ts_stem(word))
            } else if ok {
                format!("{}ке", init(head))
            } else {
                format!("{stem}е")
            }
        }
        _ => unreachable!("nominative, accusative and locative are handled by the dispatcher"),
    }
}

/// Adjective-like citation forms (-ый/-ой, sibilant + -ий, -ое/-ее)
/// decline with adjectival endings.
fn adjective(lemma: &Lemma, case: Case) -> Vec<String> {
    let word = lemma.text();
    let lower = lemma.lower();
    let stem = init(init(word)).to_string();
    let stem_lower = stem.to_lowercase();
    let soft = lower.ends_with("ий") || lower.ends_with("ее");
    let neuter_form = lower.ends_with("ое") || lower.ends_with("ее");
    let husky_stem = last_char(&stem_lower).is_some_and(|c| is_sibilant(c) || is_velar(c));

    match case {
        Case::Nominative => vec![word.to_string()],
        Case::Genitive => vec![format!("{stem}{}", if soft { "его" } else { "ого" })],
        Case::Dative => vec![format!("{stem}{}", if soft { "ему" } else { "ому" })],
        Case::Accusative => {
            if neuter_form || !lemma.is_animate() {
                vec![word.to_string()]
            } else {
                adjective(lemma, Case::Genitive)
            }
        }
        Case::Instrumental => {
            vec![format!("{stem}{}", if soft || husky_stem { "им" } else { "ым" })]
        }
        Case::Prepositional | Case::Locative => {
            vec![format!("{stem}{}", if soft { "ем" } else { "ом" })]
        }
    }
}

/// пол-compounds: nominative and accusative keep the compound; the other
/// cases widen пол- to полу- around the declined base noun.
fn decline_half(
    lemma: &Lemma,
    base: &str,
    case: Case,
    stress: &StressDictionary,
    locative: &LocativeDictionary,
) -> Vec<String> {
    match case {
        Case::Nominative | Case::Accusative => vec![lemma.text().to_string()],
        _ => {
            let base_lemma = lemma.with_text(base);
            super::decline(&base_lemma, case, stress, locative)
                .into_iter()
                .map(|form| format!("полу{form}"))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> (StressDictionary, LocativeDictionary) {
        (
            StressDictionary::with_defaults(),
            LocativeDictionary::with_defaults(),
        )
    }

    fn masc(text: &str) -> Lemma {
        Lemma::builder(text).gender(Gender::Masculine).build().unwrap()
    }

    fn masc_animate(text: &str) -> Lemma {
        Lemma::builder(text)
            .gender(Gender::Masculine)
            .animate()
            .build()
            .unwrap()
    }

    fn neut(text: &str) -> Lemma {
        Lemma::builder(text).gender(Gender::Neuter).build().unwrap()
    }

    fn one(lemma: &Lemma, case: Case) -> String {
        let (stress, locative) = parts();
        let forms = decline(lemma, case, &stress, &locative);
        assert_eq!(forms.len(), 1, "{forms:?}");
        forms.into_iter().next().unwrap()
    }

    // -- hard stems --

    #[test]
    fn hard_masculine() {
        let table = masc("стол");
        assert_eq!(one(&table, Case::Nominative), "стол");
        assert_eq!(one(&table, Case::Genitive), "стола");
        assert_eq!(one(&table, Case::Dative), "столу");
        assert_eq!(one(&table, Case::Accusative), "стол");
        assert_eq!(one(&table, Case::Instrumental), "столом");
        assert_eq!(one(&table, Case::Prepositional), "столе");
    }

    #[test]
    fn animate_accusative_equals_genitive() {
        let (stress, locative) = parts();
        let wolf = masc_animate("волк");
        assert_eq!(
            decline(&wolf, Case::Accusative, &stress, &locative),
            decline(&wolf, Case::Genitive, &stress, &locative)
        );
        assert_eq!(one(&wolf, Case::Accusative), "волка");
    }

    #[test]
    fn neuter_accusative_is_nominative() {
        assert_eq!(one(&neut("окно"), Case::Accusative), "окно");
        let deity = Lemma::builder("божество")
            .gender(Gender::Neuter)
            .animate()
            .build()
            .unwrap();
        assert_eq!(one(&deity, Case::Accusative), "божество");
    }

    // -- soft stems and the stress dictionary --

    #[test]
    fn soft_instrumental_takes_yo_when_stressed() {
        assert_eq!(one(&masc_animate("конь"), Case::Instrumental), "конём");
        assert_eq!(one(&masc_animate("зверь"), Case::Instrumental), "зверем");
        assert_eq!(one(&masc_animate("нелюдь"), Case::Instrumental), "нелюдем");
    }

    #[test]
    fn soft_oblique_cases() {
        let beast = masc_animate("зверь");
        assert_eq!(one(&beast, Case::Genitive), "зверя");
        assert_eq!(one(&beast, Case::Dative), "зверю");
        assert_eq!(one(&beast, Case::Prepositional), "звере");
        assert_eq!(one(&masc("камень"), Case::Genitive), "камня");
        assert_eq!(one(&masc("день"), Case::Genitive), "дня");
        assert_eq!(one(&masc_animate("тюлень"), Case::Genitive), "тюленя");
    }

    #[test]
    fn sibilant_instrumental_follows_stress() {
        assert_eq!(one(&masc("нож"), Case::Instrumental), "ножом");
        assert_eq!(one(&masc("муж"), Case::Instrumental), "мужем");
        assert_eq!(one(&masc("плащ"), Case::Instrumental), "плащом");
        assert_eq!(one(&masc("товарищ"), Case::Instrumental), "товарищем");
        // Absent from the dictionary: the stem-stressed default.
        assert_eq!(one(&masc("кринж"), Case::Instrumental), "кринжем");
    }

    #[test]
    fn hushing_stems_take_hard_vowels() {
        assert_eq!(one(&neut("училище"), Case::Genitive), "училища");
        assert_eq!(one(&neut("училище"), Case::Dative), "училищу");
    }

    #[test]
    fn yo_stem_folds_under_ending_stress() {
        let hedgehog = masc_animate("ёж");
        assert_eq!(one(&hedgehog, Case::Genitive), "ежа");
        assert_eq!(one(&hedgehog, Case::Instrumental), "ежом");
        assert_eq!(one(&hedgehog, Case::Prepositional), "еже");
        assert_eq!(one(&hedgehog, Case::Nominative), "ёж");
    }

    // -- -й / -ий / -ие --

    #[test]
    fn iy_words() {
        let genius = masc_animate("гений");
        assert_eq!(one(&genius, Case::Genitive), "гения");
        assert_eq!(one(&genius, Case::Dative), "гению");
        assert_eq!(one(&genius, Case::Instrumental), "гением");
        assert_eq!(one(&genius, Case::Prepositional), "гении");

        let building = neut("здание");
        assert_eq!(one(&building, Case::Genitive), "здания");
        assert_eq!(one(&building, Case::Prepositional), "здании");

        let case_word = masc("случай");
        assert_eq!(one(&case_word, Case::Genitive), "случая");
        assert_eq!(one(&case_word, Case::Prepositional), "случае");
    }

    #[test]
    fn fleeting_ey_words() {
        let nightingale = masc_animate("соловей");
        assert_eq!(one(&nightingale, Case::Genitive), "соловья");
        assert_eq!(one(&nightingale, Case::Dative), "соловью");
        assert_eq!(one(&nightingale, Case::Instrumental), "соловьём");
        assert_eq!(one(&nightingale, Case::Prepositional), "соловье");
        assert_eq!(one(&masc("ручей"), Case::Genitive), "ручья");
        // Regular -ей-like nouns in -й stay regular.
        assert_eq!(one(&masc("музей"), Case::Genitive), "музея");
    }

    // -- ц and -ок --

    #[test]
    fn ts_words() {
        let father = masc_animate("отец");
        assert_eq!(one(&father, Case::Genitive), "отца");
        assert_eq!(one(&father, Case::Dative), "отцу");
        assert_eq!(one(&father, Case::Instrumental), "отцом");
        assert_eq!(one(&father, Case::Prepositional), "отце");
        assert_eq!(one(&masc("месяц"), Case::Instrumental), "месяцем");
        assert_eq!(one(&masc_animate("заяц"), Case::Genitive), "зайца");
        assert_eq!(one(&masc("палец"), Case::Genitive), "пальца");
    }

    #[test]
    fn ok_diminutives() {
        let castle = masc("замок");
        assert_eq!(one(&castle, Case::Genitive), "замка");
        assert_eq!(one(&castle, Case::Dative), "замку");
        assert_eq!(one(&castle, Case::Instrumental), "замком");
        assert_eq!(one(&castle, Case::Prepositional), "замке");
        assert_eq!(one(&masc("замочек"), Case::Genitive), "замочка");
        assert_eq!(one(&masc("урок"), Case::Genitive), "урока");
        assert_eq!(one(&masc_animate("зверёк"), Case::Genitive), "зверька");
        assert_eq!(one(&masc("паёк"), Case::Genitive), "пайка");
    }

    #[test]
    fn tse_neuters() {
        assert_eq!(one(&neut("сердце"), Case::Genitive), "сердца");
        assert_eq!(one(&neut("сердце"), Case::Instrumental), "сердцем");
        assert_eq!(one(&neut("солнце"), Case::Genitive), "солнца");
    }

    // -- surnames --

    #[test]
    fn ov_surnames() {
        let surname = Lemma::builder("Иванов")
            .gender(Gender::Masculine)
            .surname()
            .build()
            .unwrap();
        assert_eq!(one(&surname, Case::Genitive), "Иванова");
        assert_eq!(one(&surname, Case::Dative), "Иванову");
        assert_eq!(one(&surname, Case::Accusative), "Иванова");
        assert_eq!(one(&surname, Case::Instrumental), "Ивановым");
        assert_eq!(one(&surname, Case::Prepositional), "Иванове");
    }

    #[test]
    fn iy_surnames_decline_adjectivally() {
        let surname = Lemma::builder("Достоевский")
            .gender(Gender::Masculine)
            .surname()
            .build()
            .unwrap();
        assert_eq!(one(&surname, Case::Genitive), "Достоевского");
        assert_eq!(one(&surname, Case::Dative), "Достоевскому");
        assert_eq!(one(&surname, Case::Instrumental), "Достоевским");
        assert_eq!(one(&surname, Case::Prepositional), "Достоевском");
    }

    // -- adjectives --

    #[test]
    fn participle_like_masculine() {
        let lemma = masc_animate("адаптировавший");
        assert_eq!(one(&lemma, Case::Nominative), "адаптировавший");
        assert_eq!(one(&lemma, Case::Genitive), "адаптировавшего");
        assert_eq!(one(&lemma, Case::Dative), "адаптировавшему");
        assert_eq!(one(&lemma, Case::Accusative), "адаптировавшего");
        assert_eq!(one(&lemma, Case::Instrumental), "адаптировавшим");
        assert_eq!(one(&lemma, Case::Prepositional), "адаптировавшем");
    }

    #[test]
    fn participle_like_neuter() {
        let lemma = neut("адаптировавшее");
        assert_eq!(one(&lemma, Case::Genitive), "адаптировавшего");
        assert_eq!(one(&lemma, Case::Accusative), "адаптировавшее");
        assert_eq!(one(&lemma, Case::Instrumental), "адаптировавшим");
    }

    #[test]
    fn stressed_oy_adjective() {
        let lemma = masc_animate("лихой");
        assert_eq!(one(&lemma, Case::Genitive), "лихого");
        assert_eq!(one(&lemma, Case::Instrumental), "лихим");
        assert_eq!(one(&lemma, Case::Prepositional), "лихом");
    }

    #[test]
    fn oy_nouns_stay_nouns() {
        assert_eq!(one(&masc_animate("герой"), Case::Genitive), "героя");
        assert_eq!(one(&masc("строй"), Case::Genitive), "строя");
        assert_eq!(one(&masc("бой"), Case::Instrumental), "боем");
        assert_eq!(one(&masc("край"), Case::Instrumental), "краем");
    }

    // -- locative --

    #[test]
    fn dictionary_locatives() {
        assert_eq!(one(&masc("лес"), Case::Locative), "лесу");
        assert_eq!(one(&masc("снег"), Case::Locative), "снегу");
        assert_eq!(one(&masc("лёд"), Case::Locative), "льду");
        assert_eq!(one(&masc("угол"), Case::Locative), "углу");
        assert_eq!(one(&masc("рай"), Case::Locative), "раю");
        assert_eq!(one(&masc("строй"), Case::Locative), "строю");
    }

    #[test]
    fn locative_with_both_variants() {
        let (stress, locative) = parts();
        let bridge = masc("мост");
        assert_eq!(
            decline(&bridge, Case::Locative, &stress, &locative),
            vec!["мосту", "мосте"]
        );
    }

    #[test]
    fn locative_falls_back_to_prepositional() {
        assert_eq!(one(&masc("стол"), Case::Locative), "столе");
    }

    // -- half-compounds --

    #[test]
    fn half_way_widens_in_oblique_cases() {
        let half = masc("полпути");
        assert_eq!(one(&half, Case::Nominative), "полпути");
        assert_eq!(one(&half, Case::Accusative), "полпути");
        assert_eq!(one(&half, Case::Genitive), "полупути");
        assert_eq!(one(&half, Case::Instrumental), "полупутём");
    }
}
