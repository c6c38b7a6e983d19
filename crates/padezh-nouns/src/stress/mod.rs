// The stress dictionary.
//
// A 13-slot pattern per lemma records, case by case, whether stress falls
// on the stem or on the ending. The ending-selection rules consult it
// wherever the two stress placements are spelled differently (ом/ем after
// sibilants and ц, ём/ем in soft stems, ой/ей in second-declension
// sibilant stems, ё-folding, genitive-plural ей/zero and ёв/ев).

mod seed;

use hashbrown::HashMap;

use padezh_core::character::fold_yo;
use padezh_core::{Case, Lemma};

/// Pattern sentinel: stress on the stem in every form.
pub const ALL_STEM_STRESSED: &str = "SSSSSSS-SSSSSS";

/// Pattern sentinel: stress on the ending in every form.
pub const ALL_ENDING_STRESSED: &str = "EEEEEEE-EEEEEE";

/// Error storing an entry in the stress dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StressDictionaryError {
    /// The pattern does not match `[SsbeE]{7}-[SsbeE]{6}`.
    #[error("stress pattern must be 7 flags, '-', 6 flags over SsbeE, got {0:?}")]
    InvalidPattern(String),
}

/// Runtime-editable mapping from lemmas to stress patterns.
///
/// The singular half carries one flag per case in canonical order; the
/// plural half carries flags for genitive through locative. The
/// nominative-plural flag shares the singular-nominative slot: the
/// singular nominative surface form is returned verbatim and never needs
/// a stress decision, so the slot is free to carry the plural reading.
///
/// Values are multimaps keyed by the ё-folded lowercase spelling, so
/// homonyms with different attributes can coexist.
#[derive(Debug, Clone, Default)]
pub struct StressDictionary {
    entries: HashMap<String, Vec<(Lemma, String)>>,
}

/// Decode one flag into the ordered list of ending-stressed choices:
/// `S` stem only, `E` ending only, `b`/`s` both with the stem-stressed
/// form first, `e` both with the ending-stressed form first.
fn decode_flag(flag: char) -> Vec<bool> {
    match flag {
        'S' => vec![false],
        'E' => vec![true],
        'b' | 's' => vec![false, true],
        'e' => vec![true, false],
        _ => unreachable!("patterns are validated on insertion"),
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    let chars: Vec<char> = pattern.chars().collect();
    chars.len() == 14
        && chars[7] == '-'
        && chars
            .iter()
            .enumerate()
            .all(|(i, &c)| i == 7 || matches!(c, 'S' | 's' | 'b' | 'e' | 'E'))
}

impl StressDictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary pre-seeded with the built-in word list.
    pub fn with_defaults() -> Self {
        let mut dictionary = Self::new();
        seed::populate(&mut dictionary);
        dictionary
    }

    fn key(lemma: &Lemma) -> String {
        fold_yo(lemma.lower())
    }

    /// Store a pattern for a lemma, replacing any previous pattern for the
    /// same (exactly equal) lemma.
    pub fn put(&mut self, lemma: &Lemma, pattern: &str) -> Result<(), StressDictionaryError> {
        if !is_valid_pattern(pattern) {
            return Err(StressDictionaryError::InvalidPattern(pattern.to_string()));
        }
        let bucket = self.entries.entry(Self::key(lemma)).or_default();
        match bucket.iter_mut().find(|(stored, _)| stored == lemma) {
            Some((_, stored_pattern)) => *stored_pattern = pattern.to_string(),
            None => bucket.push((lemma.clone(), pattern.to_string())),
        }
        Ok(())
    }

    /// Look up the pattern for a lemma. Exact homonym match first; with
    /// `fuzzy`, falls back to the relaxed equality (ё folded, secondary
    /// attributes ignored).
    pub fn get(&self, lemma: &Lemma, fuzzy: bool) -> Option<&str> {
        let bucket = self.entries.get(&Self::key(lemma))?;
        if let Some((_, pattern)) = bucket.iter().find(|(stored, _)| stored == lemma) {
            return Some(pattern.as_str());
        }
        if fuzzy {
            if let Some((_, pattern)) = bucket.iter().find(|(stored, _)| stored.fuzzy_eq(lemma)) {
                return Some(pattern.as_str());
            }
        }
        None
    }

    /// Remove the entry for an exactly matching lemma. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, lemma: &Lemma) -> bool {
        let key = Self::key(lemma);
        let Some(bucket) = self.entries.get_mut(&key) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|(stored, _)| stored != lemma);
        let removed = bucket.len() != before;
        if bucket.is_empty() {
            self.entries.remove(&key);
        }
        removed
    }

    /// All entries stored under a surface spelling (ё-folded, lowercased
    /// before lookup).
    pub fn find(&self, surface: &str) -> Vec<(&Lemma, &str)> {
        match self.entries.get(&fold_yo(&surface.to_lowercase())) {
            Some(bucket) => bucket
                .iter()
                .map(|(lemma, pattern)| (lemma, pattern.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ending-stress choices for a singular case. Empty when the lemma has
    /// no entry; callers fall back to the stem-stressed default.
    pub fn has_stressed_ending_singular(&self, lemma: &Lemma, case: Case) -> Vec<bool> {
        match self.get(lemma, true) {
            Some(pattern) => {
                let flag = pattern.chars().nth(case.index()).expect("validated pattern");
                decode_flag(flag)
            }
            None => Vec::new(),
        }
    }

    /// Ending-stress choices for a plural case. The nominative reads the
    /// shared slot 0; the other cases read the plural half.
    pub fn has_stressed_ending_plural(&self, lemma: &Lemma, case: Case) -> Vec<bool> {
        match self.get(lemma, true) {
            Some(pattern) => {
                let slot = match case {
                    Case::Nominative => 0,
                    other => 7 + other.index(),
                };
                let flag = pattern.chars().nth(slot).expect("validated pattern");
                decode_flag(flag)
            }
            None => Vec::new(),
        }
    }

    /// Number of stored (lemma, pattern) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
