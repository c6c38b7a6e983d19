// Third declension: feminine nouns with a zero ending (тень, лошадь,
// любовь) and the -мя neuters (имя, знамя).

use padezh_core::character::{init, last_n};
use padezh_core::{Case, Lemma};

use crate::stem::{has_fleeting_vowel, noun_stem};

pub(super) fn decline(lemma: &Lemma, case: Case) -> Vec<String> {
    let word = lemma.text();
    let lower = lemma.lower();

    // дочь and мать inflect over an extended stem in every case except
    // the nominative/accusative.
    if (lower == "мать" || lower == "дочь")
        && !matches!(case, Case::Nominative | Case::Accusative)
    {
        let extended = format!("{}ерь", init(word));
        return decline(&lemma.with_text(extended), case);
    }

    let stem = noun_stem(lemma);

    if last_n(lower, 2) == "мя" {
        return match case {
            Case::Nominative | Case::Accusative => vec![word.to_string()],
            Case::Instrumental => vec![format!("{stem}енем")],
            _ => vec![format!("{stem}ени")],
        };
    }

    match case {
        Case::Nominative | Case::Accusative => vec![word.to_string()],
        Case::Instrumental => {
            // Fleeting-vowel feminines keep the full word before -ю
            // (вошь -> вошью while the genitive is вши).
            if has_fleeting_vowel(lemma) {
                vec![format!("{word}ю")]
            } else {
                vec![format!("{stem}ью")]
            }
        }
        _ => vec![format!("{stem}и")],
    }
}
