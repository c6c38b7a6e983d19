// Plural case inflection from a known nominative-plural anchor.
//
// The dative/instrumental/prepositional follow from the anchor's ending;
// the genitive (and the animate accusative, which copies it) is the
// exception-dense part: literal tables first, then suffix cascades with
// е/о epenthesis for the zero ending.

use padezh_core::character::{
    init, is_consonant_except_j, is_sibilant, last_char, last_n, simple_lower,
};
use padezh_core::{Case, Gender, Lemma};

use super::words;
use crate::forms::dedup;
use crate::stem::{is_adjective_shaped, is_ts_word, noun_stem};
use crate::stress::StressDictionary;

pub(crate) fn decline(
    lemma: &Lemma,
    case: Case,
    anchor: &str,
    stress: &StressDictionary,
) -> Vec<String> {
    if lemma.is_indeclinable() {
        return vec![anchor.to_string()];
    }
    match case {
        Case::Nominative => vec![anchor.to_string()],
        Case::Genitive => genitive(lemma, anchor, stress),
        Case::Accusative => {
            if lemma.is_animate() {
                genitive(lemma, anchor, stress)
            } else {
                vec![anchor.to_string()]
            }
        }
        Case::Instrumental => {
            if let Some(forms) = words::lookup(words::INSTRUMENTAL_PLURALS, &anchor.to_lowercase())
            {
                return forms.iter().map(|f| f.to_string()).collect();
            }
            oblique(lemma, anchor, case)
        }
        Case::Dative | Case::Prepositional | Case::Locative => oblique(lemma, anchor, case),
    }
}

/// Whether the anchor declines adjectivally (adjective-shaped lemmas and
/// adjectival surnames, Достоевские).
fn adjectival_anchor(lemma: &Lemma, anchor_lower: &str) -> bool {
    (anchor_lower.ends_with("ые") || anchor_lower.ends_with("ие"))
        && (is_adjective_shaped(lemma) || lemma.is_surname())
}

/// Dative, instrumental and prepositional from the anchor's ending.
fn oblique(lemma: &Lemma, anchor: &str, case: Case) -> Vec<String> {
    let anchor_lower = anchor.to_lowercase();

    if adjectival_anchor(lemma, &anchor_lower) {
        let stem = init(init(anchor));
        let soft = anchor_lower.ends_with("ие");
        let ending = match case {
            Case::Dative => {
                if soft {
                    "им"
                } else {
                    "ым"
                }
            }
            Case::Instrumental => {
                if soft {
                    "ими"
                } else {
                    "ыми"
                }
            }
            _ => {
                if soft {
                    "их"
                } else {
                    "ых"
                }
            }
        };
        return vec![format!("{stem}{ending}")];
    }

    // Surname plurals in -ы (Ивановы -> Ивановым).
    if lemma.is_surname() && matches!(last_char(&anchor_lower), Some('ы') | Some('и')) {
        let stem = init(anchor);
        let ending = match case {
            Case::Dative => "ым",
            Case::Instrumental => "ыми",
            _ => "ых",
        };
        return vec![format!("{stem}{ending}")];
    }

    let (stem, soft) = plural_stem(lemma, anchor);
    let ending = match (case, soft) {
        (Case::Dative, false) => "ам",
        (Case::Dative, true) => "ям",
        (Case::Instrumental, false) => "ами",
        (Case::Instrumental, true) => "ями",
        (_, false) => "ах",
        (_, true) => "ях",
    };
    vec![format!("{stem}{ending}")]
}

/// Strip the anchor's final vowel and decide between the hard and soft
/// ending series.
fn plural_stem(lemma: &Lemma, anchor: &str) -> (String, bool) {
    let anchor_lower = anchor.to_lowercase();
    match last_char(&anchor_lower) {
        Some('я') => (init(anchor).to_string(), true),
        // -ане plurals are hard (гражданам).
        Some('е') => (init(anchor).to_string(), false),
        Some('а') | Some('ы') => (init(anchor).to_string(), false),
        Some('и') => {
            let soft = words::SOFT_ANCHORS.contains(&anchor_lower.as_str())
                || singular_is_soft(lemma);
            (init(anchor).to_string(), soft)
        }
        _ => (anchor.to_string(), false),
    }
}

/// Soft-series test on the singular citation form.
fn singular_is_soft(lemma: &Lemma) -> bool {
    matches!(
        last_char(lemma.lower()),
        Some('ь') | Some('й') | Some('я') | Some('е') | Some('ё')
    )
}

/// The genitive plural: literal tables, then suffix cascades.
fn genitive(lemma: &Lemma, anchor: &str, stress: &StressDictionary) -> Vec<String> {
    let anchor_lower = anchor.to_lowercase();

    if let Some(forms) = words::lookup(words::GENITIVE_PLURALS, &anchor_lower) {
        return forms.iter().map(|f| f.to_string()).collect();
    }

    // -мя neuters: имена -> имён (семена/стремена are table entries).
    if last_n(lemma.lower(), 2) == "мя" {
        return vec![format!("{}ён", noun_stem(lemma))];
    }

    if adjectival_anchor(lemma, &anchor_lower) {
        let stem = init(init(anchor));
        let soft = anchor_lower.ends_with("ие");
        return vec![format!("{stem}{}", if soft { "их" } else { "ых" })];
    }
    if lemma.is_surname() && matches!(last_char(&anchor_lower), Some('ы') | Some('и')) {
        return vec![format!("{}ых", init(anchor))];
    }

    let mut stresses = stress.has_stressed_ending_plural(lemma, Case::Genitive);
    if stresses.is_empty() {
        stresses.push(false);
    }
    let forms = stresses
        .into_iter()
        .map(|stressed| genitive_form(lemma, anchor, stressed))
        .collect();
    dedup(forms)
}

/// One genitive-plural form under one stress placement.
fn genitive_form(lemma: &Lemma, anchor: &str, stressed: bool) -> String {
    let lower = lemma.lower();
    let anchor_lower = anchor.to_lowercase();
    let astem = init(anchor);

    if lemma.gender() == Some(Gender::Masculine)
        && !matches!(last_char(lower), Some('а') | Some('я'))
    {
        // -ане and -ата anchors take the bare stem (граждан, котят).
        if anchor_lower.ends_with("ане") || anchor_lower.ends_with("яне") {
            return astem.to_string();
        }
        if anchor_lower.ends_with("ата") || anchor_lower.ends_with("ята") {
            return astem.to_string();
        }
        if is_ts_word(lower) {
            return format!("{astem}{}", if stressed { "ов" } else { "ев" });
        }
        // й-stems: боёв under ending stress, случаев otherwise; соловьи
        // follow the same split over the softened stem.
        let soft_ey = lower.ends_with("ей") && noun_stem(lemma).to_lowercase().ends_with('ь');
        if soft_ey || last_char(lower) == Some('й') {
            return format!("{astem}{}", if stressed { "ёв" } else { "ев" });
        }
        if last_char(lower).is_some_and(is_sibilant) {
            return format!("{astem}ей");
        }
        if last_char(lower) == Some('ь') {
            return format!("{astem}ей");
        }
        return format!("{astem}ов");
    }

    // Feminine, neuter, common and plurale-tantum anchors.
    if anchor_lower.ends_with("ии") || anchor_lower.ends_with("ия") {
        return format!("{}й", init(anchor));
    }
    if anchor_lower.ends_with("нья") {
        // воскресенья -> воскресений.
        return format!("{}ий", init(init(anchor)));
    }
    if anchor_lower.ends_with("ьи") {
        return format!("{}ей", init(init(anchor)));
    }
    if anchor_lower.ends_with("ья") {
        return format!("{}ев", init(anchor));
    }
    if last_char(lower) == Some('ь') {
        return format!("{}ей", init(anchor));
    }
    if last_char(lower) == Some('я') {
        // Soft zero ending: epenthesis if the cluster asks for it (вишен),
        // a soft sign otherwise (бурь).
        let base = init(anchor);
        let with_vowel = genitive_stem(base);
        if with_vowel != base {
            return with_vowel;
        }
        return format!("{base}ь");
    }
    if matches!(last_char(lower), Some('е') | Some('ё')) {
        // Soft neuters take -ей (полей, морей); ц and sibilant stems take
        // the zero ending instead (сердец, училищ).
        let stem_last = noun_stem(lemma).to_lowercase().chars().next_back();
        if lower.ends_with("це") || stem_last.is_some_and(is_sibilant) {
            return genitive_stem(init(anchor));
        }
        return format!("{}ей", init(anchor));
    }
    if last_char(lower) == Some('а')
        && noun_stem(lemma)
            .to_lowercase()
            .chars()
            .next_back()
            .is_some_and(is_sibilant)
        && stressed
    {
        // Stressed sibilant feminines: свечей.
        return format!("{}ей", init(anchor));
    }
    genitive_stem(init(anchor))
}

/// Zero-ending stem with е/о epenthesis (гора -> гор, окно -> окон,
/// окошко -> окошек, кольцо -> колец, деньги -> денег).
pub(crate) fn genitive_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 {
        return stem.to_string();
    }
    let c1 = simple_lower(chars[n - 2]);
    let c2 = simple_lower(chars[n - 1]);
    if !is_consonant_except_j(c2) {
        return stem.to_string();
    }

    let rebuild = |insert: char, replace_penult: bool| -> String {
        let mut out: String = chars[..n - if replace_penult { 2 } else { 1 }].iter().collect();
        out.push(insert);
        out.push(chars[n - 1]);
        out
    };

    if c1 == 'ь' {
        return rebuild('е', true);
    }
    if c1 == 'й' && c2 == 'к' {
        return rebuild('е', true);
    }
    if is_consonant_except_j(c1) && c2 == 'к' {
        return rebuild(if is_sibilant(c1) { 'е' } else { 'о' }, false);
    }
    if c2 == 'н' && (c1 == 'с' || c1 == 'з' || is_sibilant(c1)) {
        return rebuild('е', false);
    }
    if c2 == 'н' && c1 == 'к' {
        return rebuild('о', false);
    }
    if c2 == 'ц' && is_consonant_except_j(c1) {
        return rebuild('е', false);
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stress() -> StressDictionary {
        StressDictionary::with_defaults()
    }

    fn lemma(text: &str, gender: Gender) -> Lemma {
        Lemma::builder(text).gender(gender).build().unwrap()
    }

    fn animate(text: &str, gender: Gender) -> Lemma {
        Lemma::builder(text).gender(gender).animate().build().unwrap()
    }

    fn one(l: &Lemma, case: Case, anchor: &str) -> String {
        let forms = decline(l, case, anchor, &stress());
        assert_eq!(forms.len(), 1, "{forms:?}");
        forms.into_iter().next().unwrap()
    }

    // -- genitive stem epenthesis --

    #[test]
    fn epenthesis() {
        assert_eq!(genitive_stem("гор"), "гор");
        assert_eq!(genitive_stem("волн"), "волн");
        assert_eq!(genitive_stem("высот"), "высот");
        assert_eq!(genitive_stem("окн"), "окон");
        assert_eq!(genitive_stem("окошк"), "окошек");
        assert_eq!(genitive_stem("сутк"), "суток");
        assert_eq!(genitive_stem("банк"), "банок");
        assert_eq!(genitive_stem("девочк"), "девочек");
        assert_eq!(genitive_stem("чайк"), "чаек");
        assert_eq!(genitive_stem("деньг"), "денег");
        assert_eq!(genitive_stem("кольц"), "колец");
        assert_eq!(genitive_stem("сердц"), "сердец");
        assert_eq!(genitive_stem("овц"), "овец");
        assert_eq!(genitive_stem("сосн"), "сосен");
        assert_eq!(genitive_stem("песн"), "песен");
        assert_eq!(genitive_stem("башн"), "башен");
        assert_eq!(genitive_stem("ножниц"), "ножниц");
    }

    // -- nominative and accusative --

    #[test]
    fn nominative_returns_the_anchor() {
        let mountain = lemma("гора", Gender::Feminine);
        assert_eq!(one(&mountain, Case::Nominative, "горы"), "горы");
    }

    #[test]
    fn accusative_follows_animacy() {
        let horse = animate("конь", Gender::Masculine);
        assert_eq!(one(&horse, Case::Accusative, "кони"), "коней");
        let wave = lemma("волна", Gender::Feminine);
        assert_eq!(one(&wave, Case::Accusative, "волны"), "волны");
    }

    // -- dative/instrumental/prepositional --

    #[test]
    fn hard_oblique_series() {
        let mountain = lemma("гора", Gender::Feminine);
        assert_eq!(one(&mountain, Case::Dative, "горы"), "горам");
        assert_eq!(one(&mountain, Case::Instrumental, "горы"), "горами");
        assert_eq!(one(&mountain, Case::Prepositional, "горы"), "горах");
        assert_eq!(one(&mountain, Case::Locative, "горы"), "горах");
    }

    #[test]
    fn soft_oblique_series() {
        let inhuman = animate("нелюдь", Gender::Masculine);
        assert_eq!(one(&inhuman, Case::Dative, "нелюди"), "нелюдям");
        assert_eq!(one(&inhuman, Case::Instrumental, "нелюди"), "нелюдями");
        assert_eq!(one(&inhuman, Case::Prepositional, "нелюди"), "нелюдях");
        let storm = lemma("буря", Gender::Feminine);
        assert_eq!(one(&storm, Case::Dative, "бури"), "бурям");
        let brother = animate("брат", Gender::Masculine);
        assert_eq!(one(&brother, Case::Dative, "братья"), "братьям");
    }

    #[test]
    fn hard_singulars_keep_hard_plurals() {
        let eye = lemma("око", Gender::Neuter);
        assert_eq!(one(&eye, Case::Instrumental, "очи"), "очами");
        let knife = lemma("нож", Gender::Masculine);
        assert_eq!(one(&knife, Case::Dative, "ножи"), "ножам");
        let cloud = lemma("облако", Gender::Neuter);
        assert_eq!(one(&cloud, Case::Instrumental, "облака"), "облаками");
        let citizen = animate("гражданин", Gender::Masculine);
        assert_eq!(one(&citizen, Case::Dative, "граждане"), "гражданам");
    }

    #[test]
    fn instrumental_exceptions() {
        let person = animate("человек", Gender::Masculine);
        assert_eq!(one(&person, Case::Instrumental, "люди"), "людьми");
        assert_eq!(one(&person, Case::Dative, "люди"), "людям");
        let child = animate("дитя", Gender::Neuter);
        assert_eq!(one(&child, Case::Instrumental, "дети"), "детьми");
        let horse = animate("лошадь", Gender::Feminine);
        assert_eq!(
            decline(&horse, Case::Instrumental, "лошади", &stress()),
            vec!["лошадьми", "лошадями"]
        );
    }

    // -- genitive --

    #[test]
    fn zero_ending_genitives() {
        assert_eq!(one(&lemma("гора", Gender::Feminine), Case::Genitive, "горы"), "гор");
        assert_eq!(one(&lemma("волна", Gender::Feminine), Case::Genitive, "волны"), "волн");
        assert_eq!(
            one(&lemma("высота", Gender::Feminine), Case::Genitive, "высоты"),
            "высот"
        );
        assert_eq!(one(&lemma("окно", Gender::Neuter), Case::Genitive, "окна"), "окон");
        assert_eq!(
            one(&lemma("окошко", Gender::Neuter), Case::Genitive, "окошки"),
            "окошек"
        );
        assert_eq!(
            one(&lemma("кольцо", Gender::Neuter), Case::Genitive, "кольца"),
            "колец"
        );
        assert_eq!(one(&lemma("дача", Gender::Feminine), Case::Genitive, "дачи"), "дач"
        );
        assert_eq!(one(&lemma("душа", Gender::Feminine), Case::Genitive, "души"), "душ");
    }

    #[test]
    fn stressed_sibilant_feminines_take_ey() {
        assert_eq!(one(&lemma("свеча", Gender::Feminine), Case::Genitive, "свечи"), "свечей");
    }

    #[test]
    fn soft_feminine_genitives() {
        assert_eq!(one(&lemma("буря", Gender::Feminine), Case::Genitive, "бури"), "бурь");
        assert_eq!(one(&lemma("няня", Gender::Feminine), Case::Genitive, "няни"), "нянь");
        assert_eq!(one(&lemma("вишня", Gender::Feminine), Case::Genitive, "вишни"), "вишен");
        assert_eq!(one(&lemma("песня", Gender::Feminine), Case::Genitive, "песни"), "песен");
        assert_eq!(
            one(&lemma("молния", Gender::Feminine), Case::Genitive, "молнии"),
            "молний"
        );
        assert_eq!(one(&lemma("тень", Gender::Feminine), Case::Genitive, "тени"), "теней");
        assert_eq!(
            one(&animate("лошадь", Gender::Feminine), Case::Genitive, "лошади"),
            "лошадей"
        );
    }

    #[test]
    fn soft_neuter_genitives() {
        assert_eq!(one(&lemma("поле", Gender::Neuter), Case::Genitive, "поля"), "полей");
        assert_eq!(one(&lemma("море", Gender::Neuter), Case::Genitive, "моря"), "морей");
        assert_eq!(
            one(&lemma("сердце", Gender::Neuter), Case::Genitive, "сердца"),
            "сердец"
        );
        assert_eq!(
            one(&lemma("училище", Gender::Neuter), Case::Genitive, "училища"),
            "училищ"
        );
        assert_eq!(
            one(&lemma("здание", Gender::Neuter), Case::Genitive, "здания"),
            "зданий"
        );
        assert_eq!(
            one(&lemma("воскресенье", Gender::Neuter), Case::Genitive, "воскресенья"),
            "воскресений"
        );
    }

    #[test]
    fn masculine_genitives() {
        assert_eq!(one(&lemma("стол", Gender::Masculine), Case::Genitive, "столы"), "столов");
        assert_eq!(one(&lemma("дом", Gender::Masculine), Case::Genitive, "дома"), "домов");
        assert_eq!(one(&lemma("снег", Gender::Masculine), Case::Genitive, "снега"), "снегов");
        assert_eq!(one(&lemma("замок", Gender::Masculine), Case::Genitive, "замки"), "замков");
        assert_eq!(one(&lemma("нож", Gender::Masculine), Case::Genitive, "ножи"), "ножей");
        assert_eq!(one(&animate("врач", Gender::Masculine), Case::Genitive, "врачи"), "врачей");
        assert_eq!(one(&animate("конь", Gender::Masculine), Case::Genitive, "кони"), "коней");
        assert_eq!(
            one(&animate("нелюдь", Gender::Masculine), Case::Genitive, "нелюди"),
            "нелюдей"
        );
        assert_eq!(
            one(&animate("учитель", Gender::Masculine), Case::Genitive, "учителя"),
            "учителей"
        );
        assert_eq!(one(&animate("отец", Gender::Masculine), Case::Genitive, "отцы"), "отцов");
        assert_eq!(
            one(&lemma("месяц", Gender::Masculine), Case::Genitive, "месяцы"),
            "месяцев"
        );
        assert_eq!(one(&lemma("случай", Gender::Masculine), Case::Genitive, "случаи"), "случаев");
        assert_eq!(one(&lemma("бой", Gender::Masculine), Case::Genitive, "бои"), "боёв");
        assert_eq!(one(&lemma("край", Gender::Masculine), Case::Genitive, "края"), "краёв");
        assert_eq!(
            one(&animate("соловей", Gender::Masculine), Case::Genitive, "соловьи"),
            "соловьёв"
        );
        assert_eq!(
            one(&animate("гражданин", Gender::Masculine), Case::Genitive, "граждане"),
            "граждан"
        );
        assert_eq!(
            one(&animate("котёнок", Gender::Masculine), Case::Genitive, "котята"),
            "котят"
        );
        assert_eq!(
            one(&animate("мужчина", Gender::Masculine), Case::Genitive, "мужчины"),
            "мужчин"
        );
    }

    #[test]
    fn table_genitives() {
        assert_eq!(one(&animate("человек", Gender::Masculine), Case::Genitive, "люди"), "людей");
        assert_eq!(one(&lemma("око", Gender::Neuter), Case::Genitive, "очи"), "очей");
        assert_eq!(one(&lemma("ухо", Gender::Neuter), Case::Genitive, "уши"), "ушей");
        assert_eq!(
            one(&lemma("облако", Gender::Neuter), Case::Genitive, "облака"),
            "облаков"
        );
        assert_eq!(one(&lemma("небо", Gender::Neuter), Case::Genitive, "небеса"), "небес");
        assert_eq!(one(&animate("сын", Gender::Masculine), Case::Genitive, "сыновья"), "сыновей");
        assert_eq!(one(&animate("брат", Gender::Masculine), Case::Genitive, "братья"), "братьев");
        assert_eq!(one(&lemma("яйцо", Gender::Neuter), Case::Genitive, "яйца"), "яиц");
        assert_eq!(one(&lemma("солнце", Gender::Neuter), Case::Genitive, "солнца"), "солнц");
    }

    #[test]
    fn mya_genitives() {
        assert_eq!(one(&lemma("имя", Gender::Neuter), Case::Genitive, "имена"), "имён");
        assert_eq!(one(&lemma("время", Gender::Neuter), Case::Genitive, "времена"), "времён");
        assert_eq!(one(&lemma("семя", Gender::Neuter), Case::Genitive, "семена"), "семян");
    }

    // -- adjectives and surnames --

    #[test]
    fn adjectival_plural_cases() {
        let dashing = animate("лихой", Gender::Masculine);
        assert_eq!(one(&dashing, Case::Genitive, "лихие"), "лихих");
        assert_eq!(one(&dashing, Case::Dative, "лихие"), "лихим");
        assert_eq!(one(&dashing, Case::Accusative, "лихие"), "лихих");
        assert_eq!(one(&dashing, Case::Instrumental, "лихие"), "лихими");
        assert_eq!(one(&dashing, Case::Prepositional, "лихие"), "лихих");

        let still = lemma("неподвижное", Gender::Neuter);
        assert_eq!(one(&still, Case::Instrumental, "неподвижные"), "неподвижными");
        assert_eq!(one(&still, Case::Accusative, "неподвижные"), "неподвижные");
    }

    #[test]
    fn surname_plural_cases() {
        let surname = Lemma::builder("Иванов")
            .gender(Gender::Masculine)
            .surname()
            .build()
            .unwrap();
        assert_eq!(one(&surname, Case::Genitive, "Ивановы"), "Ивановых");
        assert_eq!(one(&surname, Case::Dative, "Ивановы"), "Ивановым");
        assert_eq!(one(&surname, Case::Accusative, "Ивановы"), "Ивановых");
        assert_eq!(one(&surname, Case::Instrumental, "Ивановы"), "Ивановыми");
        assert_eq!(one(&surname, Case::Prepositional, "Ивановы"), "Ивановых");
    }

    // -- plurale tantum --

    #[test]
    fn plurale_tantum_cases() {
        let gate = Lemma::builder("ворота").plurale_tantum().build().unwrap();
        assert_eq!(one(&gate, Case::Genitive, "ворота"), "ворот");
        assert_eq!(one(&gate, Case::Dative, "ворота"), "воротам");
        assert_eq!(one(&gate, Case::Accusative, "ворота"), "ворота");

        let scissors = Lemma::builder("ножницы").plurale_tantum().build().unwrap();
        assert_eq!(one(&scissors, Case::Genitive, "ножницы"), "ножниц");
        assert_eq!(one(&scissors, Case::Instrumental, "ножницы"), "ножницами");

        let money = Lemma::builder("деньги").plurale_tantum().build().unwrap();
        assert_eq!(one(&money, Case::Genitive, "деньги"), "денег");
        assert_eq!(one(&money, Case::Dative, "деньги"), "деньгам");
    }
}
