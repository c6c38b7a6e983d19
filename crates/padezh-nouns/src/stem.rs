// Stem extraction and word-shape predicates.
//
// `noun_stem` turns a citation form into the consonantal stem most endings
// attach to. The rules are checked in a fixed priority order; several of
// them overlap, and reordering changes the output for the overlapping
// words, so the order is part of the contract.

use padezh_core::character::{
    fold_yo, init, is_consonant_except_j, is_sibilant, is_vowel, last_char, last_n, nth_from_end,
    simple_lower, syllable_count,
};
use padezh_core::{Gender, Lemma};

// ---------------------------------------------------------------------------
// Fleeting-vowel tables
// ---------------------------------------------------------------------------

/// Nouns whose stem drops the vowel before the final consonant
/// (лоб -> лб-, угол -> угл-). Masculine and neuter entries.
const FLEETING_VOWEL_WORDS: &[&str] = &[
    "ветер", "ковёр", "козёл", "котёл", "лоб", "мох", "овёс", "орёл", "осёл", "посол", "ров",
    "рот", "сон", "угол", "уголь", "узел", "шов", "пёс",
];

/// Feminine fleeting-vowel nouns (вошь -> вш-, любовь -> любв-).
/// Personal names keep the vowel: Любовь -> Любови.
const FLEETING_VOWEL_FEMININE: &[&str] = &["вошь", "ложь", "любовь", "рожь", "церковь"];

/// Masculine -ей nouns whose е drops and й softens (соловей -> соловь-).
const FLEETING_VOWEL_EY: &[&str] = &["воробей", "муравей", "репей", "ручей", "соловей"];

/// Masculine -ень nouns that keep the vowel (тюлень -> тюлен-я, not тюн-я).
const ENY_KEEPERS: &[&str] = &["олень", "пельмень", "ревень", "тюлень", "ячмень"];

/// Nouns in -ой that are not adjective-shaped (бой, герой, строй).
pub const OY_NOUNS: &[&str] = &[
    "бой", "гной", "герой", "зной", "конвой", "настой", "отбой", "перегной", "покой", "покрой",
    "прибой", "разбой", "рой", "слой", "строй", "удой",
];

// ---------------------------------------------------------------------------
// Stem extraction
// ---------------------------------------------------------------------------

/// Whether the fleeting-vowel table applies to this lemma. Matching folds
/// ё, so орел is recognized alongside орёл. Personal names are exempt
/// from the feminine entries (Любови, not любви).
pub(crate) fn has_fleeting_vowel(lemma: &Lemma) -> bool {
    let lower = lemma.lower();
    let folded = fold_yo(lower);
    FLEETING_VOWEL_WORDS
        .iter()
        .any(|w| *w == lower || fold_yo(w) == folded)
        || FLEETING_VOWEL_EY.contains(&lower)
        || (FLEETING_VOWEL_FEMININE.contains(&lower) && !lemma.is_name())
}

/// Extract the consonantal stem of a noun, preserving the letter case of
/// the input. Rules are tried in priority order; the first match wins.
pub fn noun_stem(lemma: &Lemma) -> String {
    let word = lemma.text();
    let lower = lemma.lower();
    let chars: Vec<char> = word.chars().collect();

    // 1. Fleeting-vowel words: strip the vowel before the last consonant.
    if has_fleeting_vowel(lemma) {
        return drop_fleeting_vowel(&chars);
    }

    // 2. лёд/лед, and the animal лев: soft sign before the final consonant,
    // preserving the case of the replaced letter (Лёд -> Льд).
    if lower == "лёд" || lower == "лед" || (lower == "лев" && lemma.is_animate()) {
        let soft = if chars[1].is_uppercase() { 'Ь' } else { 'ь' };
        return [chars[0], soft, chars[2]].into_iter().collect();
    }

    // 3. Diminutives in -ёк: зверёк -> зверьк-, паёк -> пайк-.
    if last_n(lower, 2) == "ёк" {
        if let Some(before) = nth_from_end(lower, 2) {
            if before == 'р' && syllable_count(lower) >= 2 {
                let mut stem: String = chars[..chars.len() - 2].iter().collect();
                stem.push('ь');
                stem.push(chars[chars.len() - 1]);
                return stem;
            }
            if is_vowel(before) {
                let mut stem: String = chars[..chars.len() - 2].iter().collect();
                stem.push('й');
                stem.push(chars[chars.len() - 1]);
                return stem;
            }
        }
    }

    // 4. Final hard consonant (excluding й): the word is its own stem.
    let last = last_char(lower).expect("lemma text is non-empty");
    if is_consonant_except_j(last) {
        return word.to_string();
    }

    // 5. Final soft sign. Masculine -ень nouns contract (камень -> камн-),
    // except the fixed keeper list; everything else just drops the ь.
    if last == 'ь' {
        if lemma.gender() == Some(Gender::Masculine)
            && last_n(lower, 3) == "ень"
            && !ENY_KEEPERS.contains(&lower)
        {
            let mut stem: String = chars[..chars.len() - 3].iter().collect();
            stem.push(chars[chars.len() - 2]);
            return stem;
        }
        return init(word).to_string();
    }

    // 6. Penultimate soft sign: strip the final letter only (судья -> судь-).
    if nth_from_end(lower, 1) == Some('ь') {
        return init(word).to_string();
    }

    // 7. Final о after в л м н с т х: strip it (окно -> окн-).
    if last == 'о'
        && nth_from_end(lower, 1)
            .is_some_and(|c| ['в', 'л', 'м', 'н', 'с', 'т', 'х'].contains(&simple_lower(c)))
    {
        return init(word).to_string();
    }

    // 8. Fallback on vowel shape.
    vowel_stem(word)
}

/// Fallback stem: strip a final vowel, or a vowel+vowel / vowel+й pair.
pub fn vowel_stem(word: &str) -> String {
    let lower = word.to_lowercase();
    let last = match last_char(&lower) {
        Some(c) => c,
        None => return word.to_string(),
    };
    let penult = nth_from_end(&lower, 1);
    if (last == 'й' || is_vowel(last)) && penult.is_some_and(is_vowel) {
        return init(init(word)).to_string();
    }
    if is_vowel(last) {
        return init(word).to_string();
    }
    word.to_string()
}

/// Drop the fleeting vowel of a word known to carry one.
fn drop_fleeting_vowel(chars: &[char]) -> String {
    let n = chars.len();
    match simple_lower(chars[n - 1]) {
        // соловей: drop the е, soften the й.
        'й' => {
            let mut stem: String = chars[..n - 2].iter().collect();
            stem.push('ь');
            stem
        }
        // любовь, уголь: drop the vowel and the soft sign.
        'ь' => {
            let mut stem: String = chars[..n - 3].iter().collect();
            stem.push(chars[n - 2]);
            stem
        }
        // лоб, угол: drop the vowel before the final consonant.
        _ => {
            let mut stem: String = chars[..n - 2].iter().collect();
            stem.push(chars[n - 1]);
            stem
        }
    }
}

/// Fold ё out of a stem when the ending carries the stress (ёж -> еж-а́);
/// keep the stem as written when the stress stays on it.
pub fn yo_variant(stem: &str, ending_stressed: bool) -> String {
    if ending_stressed && stem.contains(['ё', 'Ё']) {
        fold_yo(stem)
    } else {
        stem.to_string()
    }
}

// ---------------------------------------------------------------------------
// Word-shape predicates (first-declension)
// ---------------------------------------------------------------------------

/// Soft first-declension shape: final ь, or final е/ё outside -це
/// (конь, поле, but not сердце).
pub fn is_soft_first(lower: &str) -> bool {
    match last_char(lower) {
        Some('ь') => true,
        Some('е') | Some('ё') => !lower.ends_with("це"),
        _ => false,
    }
}

/// -й / -ий / -ие shape (гений, здание, случай).
pub fn is_iy_word(lower: &str) -> bool {
    last_char(lower) == Some('й') || matches!(last_n(lower, 2), "ий" | "ие")
}

/// Final ц (отец, месяц).
pub fn is_ts_word(lower: &str) -> bool {
    last_char(lower) == Some('ц')
}

/// -чек diminutives long enough to contract (замочек -> замочк-).
fn is_check_word(lower: &str) -> bool {
    lower.ends_with("чек") && lower.chars().count() >= 6
}

/// -ок diminutives that contract in oblique cases (замок -> замк-а́).
/// Guards: not -шок, not урок, a consonant before the о and a vowel
/// before that.
pub fn is_ok_word(lower: &str) -> bool {
    is_check_word(lower)
        || (lower.ends_with("ок")
            && !lower.ends_with("шок")
            && lower != "урок"
            && !nth_from_end(lower, 2).is_some_and(is_vowel)
            && nth_from_end(lower, 3).is_some_and(is_vowel)
            && lower.chars().count() >= 4)
}

/// Stem of a ц-final noun (отец -> от-, заяц -> зай-, палец -> паль-).
pub fn ts_stem(word: &str) -> String {
    let lower = word.to_lowercase();
    let head = init(word);
    let head_lower = init(&lower);
    if nth_from_end(&lower, 1) == Some('а') {
        return head.to_string();
    }
    if last_n(head_lower, 2) == "ле" {
        let mut stem = init(head).to_string();
        stem.push('ь');
        return stem;
    }
    if nth_from_end(&lower, 1).is_some_and(is_vowel) {
        if nth_from_end(&lower, 2).is_some_and(is_vowel) {
            let mut stem = init(head).to_string();
            stem.push('й');
            return stem;
        }
        return init(head).to_string();
    }
    head.to_string()
}

// ---------------------------------------------------------------------------
// Adjective shapes
// ---------------------------------------------------------------------------

/// Masculine/neuter adjective-like citation forms: -ый, -ой (outside the
/// noun list), sibilant + -ий, -ое/-ее.
pub fn is_adjective_first(lower: &str) -> bool {
    if lower.ends_with("ый") {
        return true;
    }
    if lower.ends_with("ой") && syllable_count(lower) >= 2 && !OY_NOUNS.contains(&lower) {
        return true;
    }
    if lower.ends_with("ий") && nth_from_end(lower, 2).is_some_and(is_sibilant) {
        return true;
    }
    if (lower.ends_with("ое") || lower.ends_with("ее")) && syllable_count(lower) >= 2 {
        return true;
    }
    false
}

/// Feminine adjective-like -ая shape, excluding short words and vowel
/// stems (чистая yes, стая follows the same tie-break as the source).
pub fn is_aya_word(lower: &str, stem_lower: &str) -> bool {
    lower.ends_with("ая")
        && !(lower.chars().count() < 3 || last_char(stem_lower).is_some_and(is_vowel))
}

/// Feminine adjective-like -яя shape (синяя).
pub fn is_yaya_word(lower: &str) -> bool {
    lower.ends_with("яя") && lower.chars().count() >= 3
}

/// Any adjective-shaped citation form, all genders. Drives the adjectival
/// branches of the pluralizer and the plural-case inflector.
pub fn is_adjective_shaped(lemma: &Lemma) -> bool {
    let lower = lemma.lower();
    match lemma.gender() {
        Some(Gender::Feminine) => {
            is_yaya_word(lower) || {
                let stem = noun_stem(lemma).to_lowercase();
                is_aya_word(lower, &stem)
            }
        }
        Some(_) => is_adjective_first(lower),
        None => false,
    }
}
