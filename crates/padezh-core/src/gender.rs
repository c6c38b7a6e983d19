// Grammatical gender identifiers.

use std::fmt;

/// Grammatical gender of a noun.
///
/// The common gender («общий род»: задира, сирота) covers nouns that agree
/// as masculine or feminine depending on the referent; for declension they
/// behave like the second class when ending in а/я.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Common,
    Feminine,
    Masculine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Common,
        Gender::Feminine,
        Gender::Masculine,
        Gender::Neuter,
    ];

    /// Traditional Russian name of the gender.
    pub fn name(self) -> &'static str {
        match self {
            Gender::Common => "общий",
            Gender::Feminine => "женский",
            Gender::Masculine => "мужской",
            Gender::Neuter => "средний",
        }
    }

    /// Parse a traditional Russian gender name.
    pub fn from_name(name: &str) -> Option<Gender> {
        Gender::ALL.into_iter().find(|g| g.name() == name)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
