use crate::script::{
    alphabet::{Digraph, is_consonant, is_vowel},
    catalog::CatalogKind,
    mapping::{SymbolMapping, map_dead_consonant, map_syllable},
};

/// Why a name could not be fully split into syllables.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("name is empty")]
    Empty,

    #[error("'{ch}' at position {index} is not part of the script alphabet")]
    Unsupported { index: usize, ch: char },

    #[error("consonant '{ch}' at position {index} is not followed by a vowel")]
    Orphan { index: usize, ch: char },
}

/// What to do with a consonant that cannot start a syllable (`d` in `ridho`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Emit it as its own syllable written with the base consonant symbol.
    #[default]
    DeadConsonant,
    /// Fail with [`SegmentError::Orphan`].
    Reject,
}

/// A piece of the input name and the symbol it is written with.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Syllable {
    pub text: String,
    pub mapping: SymbolMapping,
    /// Consonant without a vowel.
    pub dead: bool,
}

impl Syllable {
    pub fn symbol(&self) -> &'static str {
        self.mapping.symbol
    }
}

/// Greedy left-to-right syllable segmentation over a symbol table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transliterator {
    catalog: CatalogKind,
    orphans: OrphanPolicy,
}

impl Transliterator {
    pub fn new(catalog: CatalogKind, orphans: OrphanPolicy) -> Self {
        Self { catalog, orphans }
    }

    pub fn catalog(&self) -> CatalogKind {
        self.catalog
    }

    pub fn orphan_policy(&self) -> OrphanPolicy {
        self.orphans
    }

    /// Splits `name` into syllables, longest table match first (3, 2, then 1 letters).
    ///
    /// The table holds every consonant+vowel pair and every standalone vowel, so the
    /// pairing and single-vowel fallbacks are subsumed by the longest-match step. What is
    /// left over is either a consonant with no vowel after it (handled per
    /// [`OrphanPolicy`]) or a letter outside the alphabet (always an error).
    #[tracing::instrument(level = "debug", skip(self), err)]
    pub fn segment(&self, name: &str) -> Result<Vec<Syllable>, SegmentError> {
        let chars: Vec<char> = name.to_lowercase().chars().collect();
        if chars.is_empty() {
            return Err(SegmentError::Empty);
        }

        let mut out = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if let Some((len, text, mapping)) = self.longest_match(&chars[i..]) {
                out.push(Syllable {
                    text,
                    mapping,
                    dead: false,
                });
                i += len;
                continue;
            }

            let ch = chars[i];
            if !is_consonant(ch) {
                return Err(SegmentError::Unsupported { index: i, ch });
            }
            if self.orphans == OrphanPolicy::Reject {
                return Err(SegmentError::Orphan { index: i, ch });
            }

            let len = match chars.get(i + 1) {
                Some(&next) if Digraph::at_start(&format!("{ch}{next}")).is_some() => 2,
                _ => 1,
            };
            let text: String = chars[i..i + len].iter().collect();
            let mapping = map_dead_consonant(&text, self.catalog)
                .ok_or(SegmentError::Orphan { index: i, ch })?;
            out.push(Syllable {
                text,
                mapping,
                dead: true,
            });
            i += len;
        }

        tracing::debug!(count = out.len(), "segmented name");
        Ok(out)
    }

    fn longest_match(&self, rest: &[char]) -> Option<(usize, String, SymbolMapping)> {
        (1..=3.min(rest.len())).rev().find_map(|len| {
            let text: String = rest[..len].iter().collect();
            if len == 1 && !is_vowel(rest[0]) {
                return None;
            }
            map_syllable(&text, self.catalog).map(|m| (len, text, m))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/segment.rs"]
mod tests;
