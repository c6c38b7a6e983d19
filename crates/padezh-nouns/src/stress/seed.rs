// Built-in stress-dictionary entries.
//
// Only words where stress placement changes the written form need to be
// listed: о/е after sibilants and ц, ё/е in soft endings, ё-folding in
// stems, genitive-plural ей/zero and ёв/ев. Everything else spells the
// same under either stress and falls back to the stem-stressed default.

use padezh_core::{Gender, Lemma};

use super::StressDictionary;

struct SeedGroup {
    pattern: &'static str,
    gender: Gender,
    animate: bool,
    words: &'static [&'static str],
}

const SEED: &[SeedGroup] = &[
    // Masculine inanimate nouns stressed on the ending throughout
    // (ножом, дождём, огнём; ножи, ножей).
    SeedGroup {
        pattern: "EEEEEEE-EEEEEE",
        gender: Gender::Masculine,
        animate: false,
        words: &[
            "багаж", "борщ", "венец", "гараж", "гвоздь", "день", "дворец", "дождь", "калач",
            "календарь", "камыш", "карандаш", "ключ", "конец", "корабль", "костыль", "кремль",
            "леденец", "луч", "меч", "монастырь", "мяч", "нож", "огонь", "огурец", "пень", "плащ",
            "пузырь", "ремень", "рубль", "руль", "ручей", "словарь", "сухарь", "фонарь",
            "холодец", "шалаш", "этаж",
        ],
    },
    // Masculine animate nouns of the same stress shape
    // (конём, отцом, ежа, соловьём).
    SeedGroup {
        pattern: "EEEEEEE-EEEEEE",
        gender: Gender::Masculine,
        animate: true,
        words: &[
            "боец", "борец", "воробей", "врач", "гонец", "грач", "ёж", "ёрш", "жилец", "журавль",
            "кузнец", "конь", "король", "малыш", "молодец", "мудрец", "муравей", "отец", "палач",
            "певец", "продавец", "скрипач", "соловей", "творец", "трубач", "усач", "царь",
            "шмель",
        ],
    },
    // Masculine -й nouns with stem stress in the singular and ending
    // stress in the plural (бо́ем, бои́, боёв).
    SeedGroup {
        pattern: "ESSSSSS-EEEEEE",
        gender: Gender::Masculine,
        animate: false,
        words: &["бой", "край", "рой", "слой", "строй"],
    },
    // Feminine sibilant stems with ending stress in the singular only
    // (душой, but ду́ши, душ).
    SeedGroup {
        pattern: "SEEEEEE-SSSSSS",
        gender: Gender::Feminine,
        animate: false,
        words: &["алыча", "душа", "каланча", "лапша", "межа", "парча", "саранча"],
    },
    // Feminine sibilant/ц stems with ending stress carried into the
    // plural obliques (свечой, свечей; овцой).
    SeedGroup {
        pattern: "SEEEEEE-EEEEEE",
        gender: Gender::Feminine,
        animate: false,
        words: &["свеча"],
    },
    SeedGroup {
        pattern: "SEEEEEE-ESSSSS",
        gender: Gender::Feminine,
        animate: true,
        words: &["овца"],
    },
    // Soft feminine stems whose instrumental takes ё (землёй, семьёй).
    SeedGroup {
        pattern: "SEESEEE-EEEEEE",
        gender: Gender::Feminine,
        animate: false,
        words: &["заря", "земля", "колея", "ладья", "скамья", "статья", "струя"],
    },
    SeedGroup {
        pattern: "SEESEEE-EEEEEE",
        gender: Gender::Feminine,
        animate: true,
        words: &["змея", "свинья", "семья"],
    },
    // Common-gender судья (судьёй, судей).
    SeedGroup {
        pattern: "SEESEEE-EEEEEE",
        gender: Gender::Common,
        animate: true,
        words: &["судья"],
    },
];

/// Insert the built-in entries into a dictionary.
pub(super) fn populate(dictionary: &mut StressDictionary) {
    for group in SEED {
        for word in group.words {
            let mut builder = Lemma::builder(*word).gender(group.gender);
            if group.animate {
                builder = builder.animate();
            }
            let lemma = builder.build().expect("seed lemmas are well-formed");
            dictionary
                .put(&lemma, group.pattern)
                .expect("seed patterns are well-formed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_words_are_unique_within_groups() {
        for group in SEED {
            let mut words: Vec<&str> = group.words.to_vec();
            words.sort_unstable();
            words.dedup();
            assert_eq!(words.len(), group.words.len());
        }
    }

    #[test]
    fn populate_inserts_every_word() {
        let mut dictionary = StressDictionary::new();
        populate(&mut dictionary);
        let expected: usize = SEED.iter().map(|g| g.words.len()).sum();
        assert_eq!(dictionary.len(), expected);
    }
}
