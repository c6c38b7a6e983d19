// Grammatical case identifiers.

use std::fmt;

/// The seven grammatical cases, in the canonical dictionary order.
///
/// The locative (второй предложный, «местный») is listed last; for most
/// nouns it coincides with the prepositional and is produced as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
    Locative,
}

impl Case {
    /// All cases in canonical order. Index 0..=6 matches the slot order of
    /// stress patterns and of tabular output.
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
        Case::Locative,
    ];

    /// Traditional Russian name of the case.
    pub fn name(self) -> &'static str {
        match self {
            Case::Nominative => "именительный",
            Case::Genitive => "родительный",
            Case::Dative => "дательный",
            Case::Accusative => "винительный",
            Case::Instrumental => "творительный",
            Case::Prepositional => "предложный",
            Case::Locative => "местный",
        }
    }

    /// Position in the canonical order (0 = nominative, 6 = locative).
    pub fn index(self) -> usize {
        Case::ALL.iter().position(|&c| c == self).expect("member of ALL")
    }

    /// Parse a traditional Russian case name.
    pub fn from_name(name: &str) -> Option<Case> {
        Case::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
