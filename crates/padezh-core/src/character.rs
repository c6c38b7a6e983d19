// Cyrillic character classification and string-shape utilities.
//
// Every rule in the inflection engine ultimately reduces to questions about
// the last few characters of a word, so the helpers here work on `char`
// values and on `&str` tails rather than on byte offsets.

// ---------------------------------------------------------------------------
// Russian phonological constants
// ---------------------------------------------------------------------------

/// Russian vowels (lowercase): а о у э ы я ё ю е и.
pub const RUSSIAN_VOWELS: &[char] = &['а', 'о', 'у', 'э', 'ы', 'я', 'ё', 'ю', 'е', 'и'];

/// Russian consonants except й (lowercase).
pub const CONSONANTS_EXCEPT_J: &[char] = &[
    'б', 'в', 'г', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш',
    'щ',
];

/// Hushing sibilants: ж ч ш щ.
pub const SIBILANTS: &[char] = &['ж', 'ч', 'ш', 'щ'];

/// Velars: г к х.
pub const VELARS: &[char] = &['г', 'к', 'х'];

/// Check whether a character is a Russian vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    RUSSIAN_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a Russian consonant other than й
/// (case-insensitive). The semivowel й and the signs ь/ъ are neither
/// vowels nor members of this set.
pub fn is_consonant_except_j(c: char) -> bool {
    CONSONANTS_EXCEPT_J.contains(&simple_lower(c))
}

/// Check whether a character is a hushing sibilant (ж ч ш щ).
pub fn is_sibilant(c: char) -> bool {
    SIBILANTS.contains(&simple_lower(c))
}

/// Check whether a character is a velar (г к х).
pub fn is_velar(c: char) -> bool {
    VELARS.contains(&simple_lower(c))
}

/// Check whether a string is a plausible lemma spelling: non-empty,
/// Cyrillic letters with an optional internal hyphen (пол-лимона).
pub fn is_cyrillic_word(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            matches!(simple_lower(c), 'а'..='я' | 'ё') || c == '-'
        })
        && s.chars().any(|c| c != '-')
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Cyrillic case mapping is one-to-one, so taking the first character of the
// standard-library iterator is exact here.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Fold ё to е (and Ё to Е), leaving everything else untouched.
///
/// The fold is used as a dictionary lookup key and to produce the
/// ending-stressed spelling of stems that carry ё: an unstressed stem
/// loses its ё (ёж -> ежа́).
pub fn fold_yo(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ё' => 'е',
            'Ё' => 'Е',
            other => other,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// String-shape helpers
//
// The inflectors constantly inspect and strip word tails. These helpers
// respect char boundaries, which byte slicing would not.
// ---------------------------------------------------------------------------

/// Last character of a string, if any.
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// All but the last character. Empty input yields an empty slice.
pub fn init(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The last `n` characters as a subslice; the whole string when it is
/// shorter than `n` characters.
pub fn last_n(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let skip = count - n;
    let (idx, _) = s.char_indices().nth(skip).expect("index within bounds");
    &s[idx..]
}

/// The character `n` positions from the end (0 = last), if present.
pub fn nth_from_end(s: &str, n: usize) -> Option<char> {
    s.chars().rev().nth(n)
}

/// Number of syllables, counted as the number of vowels.
pub fn syllable_count(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}
