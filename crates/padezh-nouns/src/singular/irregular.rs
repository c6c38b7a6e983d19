// The irregular («разносклоняемые») class: путь and the дитя family.
//
// Both paradigms are small enough to write out case by case; anything else
// reaching this inflector means the classifier upstream is broken, which
// is unrecoverable by design.

use padezh_core::character::init;
use padezh_core::{Case, Lemma};

pub(super) fn decline(lemma: &Lemma, case: Case) -> Vec<String> {
    let word = lemma.text();
    let lower = lemma.lower();

    if lower == "путь" {
        let stem = init(word);
        return match case {
            Case::Nominative | Case::Accusative => vec![word.to_string()],
            Case::Instrumental => vec![format!("{stem}ём")],
            _ => vec![format!("{stem}и")],
        };
    }

    // дитя and полудитя share the paradigm.
    if lower.ends_with("дитя") {
        return match case {
            Case::Nominative | Case::Accusative => vec![word.to_string()],
            Case::Instrumental => vec![format!("{word}тей"), format!("{word}тею")],
            _ => vec![format!("{word}ти")],
        };
    }

    panic!("the irregular inflector covers only путь and дитя, got {word:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use padezh_core::Gender;

    fn way() -> Lemma {
        Lemma::builder("путь").gender(Gender::Masculine).build().unwrap()
    }

    fn child() -> Lemma {
        Lemma::builder("дитя")
            .gender(Gender::Neuter)
            .animate()
            .build()
            .unwrap()
    }

    #[test]
    fn way_paradigm() {
        assert_eq!(decline(&way(), Case::Nominative), vec!["путь"]);
        assert_eq!(decline(&way(), Case::Genitive), vec!["пути"]);
        assert_eq!(decline(&way(), Case::Dative), vec!["пути"]);
        assert_eq!(decline(&way(), Case::Accusative), vec!["путь"]);
        assert_eq!(decline(&way(), Case::Instrumental), vec!["путём"]);
        assert_eq!(decline(&way(), Case::Prepositional), vec!["пути"]);
        assert_eq!(decline(&way(), Case::Locative), vec!["пути"]);
    }

    #[test]
    fn child_paradigm() {
        assert_eq!(decline(&child(), Case::Nominative), vec!["дитя"]);
        assert_eq!(decline(&child(), Case::Genitive), vec!["дитяти"]);
        assert_eq!(decline(&child(), Case::Accusative), vec!["дитя"]);
        assert_eq!(decline(&child(), Case::Instrumental), vec!["дитятей", "дитятею"]);
        assert_eq!(decline(&child(), Case::Prepositional), vec!["дитяти"]);
    }

    #[test]
    fn half_child_shares_the_paradigm() {
        let half = Lemma::builder("полудитя").gender(Gender::Neuter).build().unwrap();
        assert_eq!(decline(&half, Case::Genitive), vec!["полудитяти"]);
    }

    #[test]
    #[should_panic(expected = "irregular inflector")]
    fn unknown_word_is_fatal() {
        let stray = Lemma::builder("стол").gender(Gender::Masculine).build().unwrap();
        decline(&stray, Case::Genitive);
    }
}
