use std::path::{Path, PathBuf};

/// What a catalog entry stands for in the script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    /// Independent vowel (ina ni surat `A`, `I`, `U`).
    Vowel,
    /// Consonant carrying the inherent `a`.
    Consonant,
    /// Vowel or consonant modifier (anak ni surat).
    Diacritic,
}

/// One symbol of the script with its reference artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Character {
    /// Canonical Latin key, also the label the classifier predicts.
    pub label: &'static str,
    /// Reference glyph, relative to the assets root.
    pub reference_path: &'static str,
    pub kind: CharacterKind,
}

impl Character {
    const fn new(label: &'static str, reference_path: &'static str, kind: CharacterKind) -> Self {
        Self {
            label,
            reference_path,
            kind,
        }
    }

    pub fn resolve_reference(&self, assets_root: &Path) -> PathBuf {
        assets_root.join(self.reference_path)
    }
}

static BASE: [Character; 19] = [
    Character::new("A", "toba/a.svg", CharacterKind::Vowel),
    Character::new("BA", "toba/ba.svg", CharacterKind::Consonant),
    Character::new("DA", "toba/da.svg", CharacterKind::Consonant),
    Character::new("GA", "toba/ga.svg", CharacterKind::Consonant),
    Character::new("HA", "toba/ha.svg", CharacterKind::Consonant),
    Character::new("I", "toba/i.svg", CharacterKind::Vowel),
    Character::new("JA", "toba/ja.svg", CharacterKind::Consonant),
    Character::new("LA", "toba/la.svg", CharacterKind::Consonant),
    Character::new("MA", "toba/ma.svg", CharacterKind::Consonant),
    Character::new("NA", "toba/na.svg", CharacterKind::Consonant),
    Character::new("NGA", "toba/nga.svg", CharacterKind::Consonant),
    Character::new("NYA", "toba/nya.svg", CharacterKind::Consonant),
    Character::new("PA", "toba/pa.svg", CharacterKind::Consonant),
    Character::new("RA", "toba/ra.svg", CharacterKind::Consonant),
    Character::new("SA", "toba/sa.svg", CharacterKind::Consonant),
    Character::new("TA", "toba/ta.svg", CharacterKind::Consonant),
    Character::new("U", "toba/u.svg", CharacterKind::Vowel),
    Character::new("WA", "toba/wa.svg", CharacterKind::Consonant),
    Character::new("YA", "toba/ya.svg", CharacterKind::Consonant),
];

static DIACRITICS: [Character; 6] = [
    Character::new("~", "toba/~.svg", CharacterKind::Diacritic),
    Character::new("~E", "toba/~e.svg", CharacterKind::Diacritic),
    Character::new("~I", "toba/~i.svg", CharacterKind::Diacritic),
    Character::new("~NG", "toba/~ng.svg", CharacterKind::Diacritic),
    Character::new("~O", "toba/~o.svg", CharacterKind::Diacritic),
    Character::new("~U", "toba/~u.svg", CharacterKind::Diacritic),
];

/// Which symbol table is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// The 19 base symbols the classifier is trained on.
    #[default]
    Base,
    /// Base symbols plus vowel and killer diacritics.
    Extended,
}

/// Read-only symbol table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    kind: CatalogKind,
}

impl Catalog {
    pub const fn base() -> Self {
        Self {
            kind: CatalogKind::Base,
        }
    }

    pub const fn extended() -> Self {
        Self {
            kind: CatalogKind::Extended,
        }
    }

    pub const fn of(kind: CatalogKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        match self.kind {
            CatalogKind::Base => BASE.len(),
            CatalogKind::Extended => BASE.len() + DIACRITICS.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Character> + use<> {
        let extra: &'static [Character] = match self.kind {
            CatalogKind::Base => &[],
            CatalogKind::Extended => &DIACRITICS,
        };
        BASE.iter().chain(extra.iter())
    }

    /// Entry by position in iteration order.
    pub fn get(&self, index: usize) -> Option<&'static Character> {
        self.iter().nth(index)
    }

    /// Case-insensitive lookup by label.
    pub fn find(&self, label: &str) -> Option<&'static Character> {
        self.iter().find(|c| c.label.eq_ignore_ascii_case(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::base()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/catalog.rs"]
mod tests;
