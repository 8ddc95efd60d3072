//! Curated racks and word lists
//!
//! Every preset ships with sample words that can be built from its letters;
//! `tests.rs` re-checks that property for the whole table.

use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::letter_bag::LetterBag;
use crate::domain::value_objects::{Rack, Word};

const STANDARD_PRESETS: &[(&str, &[&str])] = &[
    (
        "СТЕКЛО",
        &["СТОЛ", "ЛЕС", "СОК", "ТОК", "КОЛ", "ЛОТ", "СЕЛО", "ТЕЛО", "СТЕКЛО"],
    ),
    ("РАДИУС", &["РАД", "ДАР", "САД", "СУД", "РИС", "УДАР", "РАДИУС"]),
    (
        "ПАРТОК",
        &["ПАР", "ТОП", "РОТ", "ПОТ", "КОТ", "ТОК", "ПОРТ", "ПАРК", "КРОТ", "ТРОПА"],
    ),
    ("ЛАМПАД", &["ЛАД", "ПАЛ", "ЛАПА", "ДАМА", "ЛАМПА"]),
    ("ГРУШАН", &["ШАР", "ШАГ", "РАНГ", "УГАР", "ГРУША"]),
    ("ПЕСЧАН", &["ПЕС", "ПАН", "САН", "ЧАН", "НАС", "ПЕНА"]),
    (
        "МОДЕЛЬ",
        &["МОДЕЛЬ", "ДЕЛО", "ЛЕД", "МЕД", "ДОМ", "ЛОМ", "МОЛЬ", "МЕЛ"],
    ),
    ("ПРИМОР", &["МИР", "ПИР", "МОР", "РОМ", "ПРИОР"]),
    ("ГОЛУБЬ", &["ГОЛУБЬ", "ГОЛ", "ЛУГ", "ЛОБ", "БОЛЬ", "ГУЛ"]),
    ("КЛЕВЕР", &["КЛЕВЕР", "КЛЕВ", "ВЕК", "РЕВ", "ЛЕВ"]),
];

/// Common words accepted even with no word list file and no network.
pub const BUILTIN_WORDS: &[&str] = &[
    "ДОМ", "МОРЕ", "НОС", "СОН", "СИЛА", "ЛИСТ", "СЛОН", "РЯД", "МЯЧ", "КОТ", "ТОК", "СОЛЬ",
    "МЕЛ", "ЛОМ", "МОСТ", "ЛЕН", "ТЕЛО", "САД", "ДАР", "ГОРА", "РЕКА", "ЛУНА", "ВОДА", "ЗИМА",
    "ЛЕТО", "НОРА", "РОСА", "КОСА", "ОСА", "ОСЕЛ", "ЛОСЬ", "ЛИСА", "ВОЛК", "РЫБА", "КИТ",
    "СОК", "СЫР", "ЧАЙ", "ХЛЕБ", "МАСЛО", "СОЛОД", "МЁД", "ЛЕС", "ПОЛЕ", "НЕБО", "ОКНО",
    "СТЕНА", "ДВЕРЬ", "СТОЛ", "СТУЛ", "ПОЛ", "РОТ", "ГЛАЗ", "УХО", "РУКА", "НОГА", "ПАЛЕЦ",
    "ТРАВА", "ЦВЕТ", "ЗВЕЗДА", "ОБЛАКО", "ДОЖДЬ", "СНЕГ", "ВЕТЕР", "ОГОНЬ", "ДЫМ", "ПАР",
    "ПЕСОК", "КАМЕНЬ", "ТОПОР", "НОЖ", "ЛОЖКА", "ВИЛКА", "КРУГ", "ТОЧКА", "ЛИНИЯ", "СЛОВО",
    "КНИГА", "ПИСЬМО", "НОТА", "ТОН", "ЗВУК", "ГОЛОС", "ПЕСНЯ", "ТАНЕЦ", "ИГРА", "МИР",
    "ВРЕМЯ", "ЧАС", "ДЕНЬ", "НОЧЬ", "УТРО", "ВЕЧЕР", "ГОД", "ВЕК", "МЕСТО", "ГОРОД",
    "СЕЛО", "УЛИЦА", "ДОРОГА", "ПУТЬ", "МОСТИК", "ПОРТ", "ТРОПА", "ПАРК", "САНИ", "ЛОДКА",
    "ПЛОТ", "РУЛЬ", "ТРОС", "КОЛ", "ЛОТ", "РОЛЬ", "СОРТ", "ТОРТ", "КРОТ", "КОРТ", "РОСТ",
    "ТИР", "ПИР", "РИС", "ЛИРА", "ДИВАН", "ВАННА", "АРКА", "ПИЛА", "ЛАПА", "ПАПА", "МАМА",
    "ДЯДЯ", "ТЁТЯ", "ДРУГ", "СЫН", "ДОЧЬ", "ВНУК", "ЛИЦО", "НОЛЬ", "ЧИСЛО", "СУММА",
    "ОСЕНЬ", "ВЕСНА", "ТЕНЬ", "СВЕТ", "КЛЮЧ", "ЗАМОК", "ДУБ", "ЛИПА", "ЕЛЬ", "СОСНА",
    "КЛЁН", "ГРИБ", "ОРЕХ", "СЛИВА", "ДЫНЯ", "РЕПА", "ЛУК", "ЛЕВ", "ТИГР", "КОНЬ",
    "ОВЦА", "КОЗА", "УТКА", "ГУСЬ", "СОВА", "СОКОЛ", "ОРЁЛ", "ВОРОН", "ДРОЗД", "ТРУД",
    "ЛАСКА", "НОРКА", "КАША", "СУП", "ТАЗ", "ЧАН", "КОВЁР", "ТУЧА", "ИСКРА", "ЛЁД",
];

/// A rack authored by hand together with words it provably allows
#[derive(Debug, Clone)]
pub struct Preset {
    pub rack: Rack,
    pub sample_words: Vec<Word>,
}

/// Pool of curated racks
#[derive(Debug, Clone, Default)]
pub struct PresetPool {
    presets: Vec<Preset>,
}

impl PresetPool {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// The pool shipped with the game.
    pub fn standard() -> Self {
        let presets = STANDARD_PRESETS
            .iter()
            .map(|(letters, words)| Preset {
                rack: Rack::parse(letters),
                sample_words: words.iter().map(|w| Word::normalize(w)).collect(),
            })
            .collect();
        Self { presets }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Preset dealing exactly these letters, if any.
    pub fn find(&self, rack: &Rack) -> Option<&Preset> {
        self.presets.iter().find(|p| p.rack.same_letters(rack))
    }

    /// Every sample word across the pool.
    pub fn sample_words(&self) -> impl Iterator<Item = &Word> {
        self.presets.iter().flat_map(|p| p.sample_words.iter())
    }

    /// Uniform pick, skipping `exclude` unless it is the only preset.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R, exclude: Option<&Rack>) -> Option<&Preset> {
        if let Some(previous) = exclude {
            let others: Vec<&Preset> = self
                .presets
                .iter()
                .filter(|p| !p.rack.same_letters(previous))
                .collect();
            if let Some(pick) = others.choose(rng) {
                return Some(*pick);
            }
        }
        self.presets.choose(rng)
    }
}

/// Builtin curated words, normalized.
pub fn builtin_words() -> impl Iterator<Item = Word> {
    BUILTIN_WORDS.iter().map(|w| Word::normalize(w))
}

/// Source of hint words for a rack
#[derive(Debug, Clone)]
pub struct HintBook {
    presets: Arc<PresetPool>,
    curated: Vec<Word>,
    limit: usize,
    min_len: usize,
}

impl HintBook {
    pub fn new(presets: Arc<PresetPool>, limit: usize, min_len: usize) -> Self {
        let mut curated: Vec<Word> = builtin_words()
            .chain(presets.sample_words().cloned())
            .collect();
        curated.sort();
        curated.dedup();
        Self {
            presets,
            curated,
            limit,
            min_len,
        }
    }

    /// Preset racks answer with their sample words. Any other rack gets the
    /// curated words it can build, longest first.
    pub fn hints_for(&self, rack: &Rack) -> Vec<Word> {
        if let Some(preset) = self.presets.find(rack) {
            return preset.sample_words.iter().take(self.limit).cloned().collect();
        }

        let bag = LetterBag::from_rack(rack);
        let mut found: Vec<Word> = self
            .curated
            .iter()
            .filter(|w| w.char_len() >= self.min_len && bag.can_build(w.as_str()))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.char_len().cmp(&a.char_len()).then_with(|| a.cmp(b)));
        found.truncate(self.limit);
        found
    }
}
