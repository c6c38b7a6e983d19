// Literal plural tables.
//
// These lists encode lexicographic fact, not rules: membership is exact
// and an entry always wins over any suffix cascade. Forms are given in
// preference order.

/// Irregular masculine nominative plurals.
pub(crate) const MASCULINE_PLURALS: &[(&str, &[&str])] = &[
    ("брат", &["братья"]),
    ("господин", &["господа"]),
    ("друг", &["друзья"]),
    ("зять", &["зятья"]),
    ("клок", &["клочья"]),
    ("князь", &["князья"]),
    ("кол", &["колья"]),
    ("кум", &["кумовья"]),
    ("лист", &["листья", "листы"]),
    ("муж", &["мужья"]),
    ("прут", &["прутья"]),
    ("ребёнок", &["дети"]),
    ("сосед", &["соседи"]),
    ("стул", &["стулья"]),
    ("сук", &["сучья", "суки"]),
    ("сын", &["сыновья"]),
    ("хозяин", &["хозяева"]),
    ("цветок", &["цветы"]),
    ("цыган", &["цыгане"]),
    ("человек", &["люди"]),
    ("чёрт", &["черти"]),
];

/// Irregular neuter nominative plurals. судно is listed separately
/// because its plural depends on the transport flag.
pub(crate) const NEUTER_PLURALS: &[(&str, &[&str])] = &[
    ("веко", &["веки"]),
    ("войско", &["войска"]),
    ("дерево", &["деревья"]),
    ("дитя", &["дети"]),
    ("дно", &["донья"]),
    ("звено", &["звенья"]),
    ("знамя", &["знамёна"]),
    ("колено", &["колени"]),
    ("крыло", &["крылья"]),
    ("небо", &["небеса"]),
    ("облако", &["облака"]),
    ("око", &["очи"]),
    ("перо", &["перья"]),
    ("плечо", &["плечи"]),
    ("полено", &["поленья"]),
    ("ухо", &["уши"]),
    ("чудо", &["чудеса"]),
    ("шило", &["шилья"]),
    ("яблоко", &["яблоки"]),
];

/// Irregular feminine nominative plurals.
pub(crate) const FEMININE_PLURALS: &[(&str, &[&str])] = &[
    ("дочь", &["дочери"]),
    ("курица", &["куры", "курицы"]),
    ("мать", &["матери"]),
];

/// Masculine nouns whose nominative plural is a stressed -а́ (дом -> дома).
pub(crate) const A_PLURALS: &[&str] = &[
    "адрес", "берег", "бок", "век", "вечер", "глаз", "голос", "город", "директор", "доктор",
    "дом", "колокол", "купол", "лес", "луг", "мастер", "номер", "остров", "паспорт", "поезд",
    "профессор", "рог", "рукав", "снег", "сорт", "холод",
];

/// Masculine soft-stem nouns whose nominative plural is a stressed -я́
/// (учитель -> учителя, край -> края).
pub(crate) const YA_PLURALS: &[&str] = &["вексель", "край", "тополь", "учитель"];

/// Plural anchors that take soft endings even though the singular stem is
/// hard (люди -> людям).
pub(crate) const SOFT_ANCHORS: &[&str] = &["дети", "люди"];

/// Irregular genitive plurals, keyed by the nominative-plural anchor.
pub(crate) const GENITIVE_PLURALS: &[(&str, &[&str])] = &[
    ("башкиры", &["башкир"]),
    ("ботинки", &["ботинок"]),
    ("братья", &["братьев"]),
    ("весы", &["весов"]),
    ("волосы", &["волос"]),
    ("глаза", &["глаз"]),
    ("господа", &["господ"]),
    ("грузины", &["грузин"]),
    ("дети", &["детей"]),
    ("деревни", &["деревень"]),
    ("деревья", &["деревьев"]),
    ("джинсы", &["джинсов"]),
    ("донья", &["доньев"]),
    ("дочери", &["дочерей"]),
    ("дрожжи", &["дрожжей"]),
    ("друзья", &["друзей"]),
    ("духи", &["духов"]),
    ("часы", &["часов"]),
    ("звенья", &["звеньев"]),
    ("зятья", &["зятьёв"]),
    ("клочья", &["клочьев"]),
    ("князья", &["князей"]),
    ("колени", &["коленей"]),
    ("колья", &["кольев"]),
    ("крылья", &["крыльев"]),
    ("кумовья", &["кумовьёв"]),
    ("куры", &["кур"]),
    ("кухни", &["кухонь"]),
    ("ладьи", &["ладей"]),
    ("листья", &["листьев"]),
    ("люди", &["людей"]),
    ("матери", &["матерей"]),
    ("мужья", &["мужей"]),
    ("небеса", &["небес"]),
    ("облака", &["облаков"]),
    ("очи", &["очей"]),
    ("очки", &["очков"]),
    ("партизаны", &["партизан"]),
    ("перья", &["перьев"]),
    ("платья", &["платьев"]),
    ("плечи", &["плеч"]),
    ("погоны", &["погон"]),
    ("поленья", &["поленьев"]),
    ("прутья", &["прутьев"]),
    ("разы", &["раз"]),
    ("ружья", &["ружей"]),
    ("сани", &["саней"]),
    ("сапоги", &["сапог"]),
    ("свиньи", &["свиней"]),
    ("семена", &["семян"]),
    ("семьи", &["семей"]),
    ("скамьи", &["скамей"]),
    ("солдаты", &["солдат"]),
    ("солнца", &["солнц"]),
    ("соседи", &["соседей"]),
    ("статьи", &["статей"]),
    ("стремена", &["стремян"]),
    ("стулья", &["стульев"]),
    ("суда", &["судов"]),
    ("судьи", &["судей"]),
    ("сучья", &["сучьев"]),
    ("сыновья", &["сыновей"]),
    ("уши", &["ушей"]),
    ("хозяева", &["хозяев"]),
    ("цыгане", &["цыган"]),
    ("черти", &["чертей"]),
    ("чудеса", &["чудес"]),
    ("чулки", &["чулок"]),
    ("шилья", &["шильев"]),
    ("щи", &["щей"]),
    ("яйца", &["яиц"]),
];

/// Irregular instrumental plurals, keyed by the anchor.
pub(crate) const INSTRUMENTAL_PLURALS: &[(&str, &[&str])] = &[
    ("двери", &["дверями", "дверьми"]),
    ("дети", &["детьми"]),
    ("лошади", &["лошадьми", "лошадями"]),
    ("люди", &["людьми"]),
];

/// Look a word up in one of the tables above.
pub(crate) fn lookup<'t>(
    table: &'t [(&str, &'static [&'static str])],
    word: &str,
) -> Option<&'t [&'static str]> {
    table
        .iter()
        .find(|(key, _)| *key == word)
        .map(|&(_, forms)| forms)
}
