use crate::script::{
    alphabet::{Digraph, is_consonant, is_vowel},
    catalog::{Catalog, CatalogKind},
};

/// The symbol a syllable is written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SymbolMapping {
    /// Base catalog label; this is what the classifier is expected to predict.
    pub symbol: &'static str,
    /// Modifier drawn with the base symbol. Always `None` with [`CatalogKind::Base`].
    pub diacritic: Option<&'static str>,
}

impl SymbolMapping {
    fn new(symbol: &'static str, diacritic: Option<&'static str>, kind: CatalogKind) -> Self {
        Self {
            symbol,
            diacritic: match kind {
                CatalogKind::Base => None,
                CatalogKind::Extended => diacritic,
            },
        }
    }
}

/// Pangolat: silences the inherent vowel of a consonant.
pub const KILLER_DIACRITIC: &str = "~";

/// Maps one syllable (`v`, `cv` or digraph + `v`) to its symbol.
///
/// Consonant syllables with a vowel other than `a` keep the base consonant symbol; the vowel is
/// only expressed as a diacritic in the extended catalog. Standalone `e` / `o` fall back to `A`.
pub fn map_syllable(syllable: &str, kind: CatalogKind) -> Option<SymbolMapping> {
    let lower = syllable.to_ascii_lowercase();
    let chars: Vec<char> = lower.chars().collect();

    match chars.as_slice() {
        [v] if is_vowel(*v) => {
            let (symbol, diacritic) = match v {
                'a' => ("A", None),
                'i' => ("I", None),
                'u' => ("U", None),
                'e' => ("A", Some("~E")),
                _ => ("A", Some("~O")),
            };
            Some(SymbolMapping::new(symbol, diacritic, kind))
        }
        [c, v] if is_consonant(*c) && is_vowel(*v) => {
            let symbol = consonant_symbol(*c)?;
            Some(SymbolMapping::new(symbol, vowel_sign(*v), kind))
        }
        [_, _, v] if is_vowel(*v) => {
            let digraph = Digraph::at_start(&lower)?;
            Some(SymbolMapping::new(
                digraph_symbol(digraph),
                vowel_sign(*v),
                kind,
            ))
        }
        _ => None,
    }
}

/// Symbol for a consonant (or digraph) standing without a vowel.
pub fn map_dead_consonant(text: &str, kind: CatalogKind) -> Option<SymbolMapping> {
    let symbol = match Digraph::at_start(text) {
        Some(d) if text.len() == 2 => digraph_symbol(d),
        _ => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if is_consonant(c) => consonant_symbol(c)?,
                _ => return None,
            }
        }
    };
    Some(SymbolMapping::new(symbol, Some(KILLER_DIACRITIC), kind))
}

/// True when `syllable` (a live syllable or a dead consonant) maps to symbols present in the
/// catalog.
pub fn can_map(syllable: &str, kind: CatalogKind) -> bool {
    map_syllable(syllable, kind)
        .or_else(|| map_dead_consonant(syllable, kind))
        .is_some_and(|m| {
            let catalog = Catalog::of(kind);
            catalog.contains(m.symbol) && m.diacritic.is_none_or(|d| catalog.contains(d))
        })
}

fn consonant_symbol(c: char) -> Option<&'static str> {
    let label = format!("{}A", c.to_ascii_uppercase());
    Catalog::base().find(&label).map(|ch| ch.label)
}

fn digraph_symbol(d: Digraph) -> &'static str {
    match d {
        Digraph::Ng => "NGA",
        Digraph::Ny => "NYA",
    }
}

fn vowel_sign(v: char) -> Option<&'static str> {
    match v {
        'e' => Some("~E"),
        'i' => Some("~I"),
        'u' => Some("~U"),
        'o' => Some("~O"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/mapping.rs"]
mod tests;
