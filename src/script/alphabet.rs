//! Latin letters the Batak (Toba) script can express.

pub const VOWELS: [char; 5] = ['a', 'i', 'u', 'e', 'o'];

pub const CONSONANTS: [char; 14] = [
    'b', 'd', 'g', 'h', 'j', 'l', 'm', 'n', 'p', 'r', 's', 't', 'w', 'y',
];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c.to_ascii_lowercase())
}

/// Two-letter sequences written with a single base symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Digraph {
    Ng,
    Ny,
}

impl Digraph {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ng => "ng",
            Self::Ny => "ny",
        }
    }

    /// Digraph starting at the beginning of `s`, if any.
    pub fn at_start(s: &str) -> Option<Self> {
        let mut chars = s.chars().map(|c| c.to_ascii_lowercase());
        match (chars.next(), chars.next()) {
            (Some('n'), Some('g')) => Some(Self::Ng),
            (Some('n'), Some('y')) => Some(Self::Ny),
            _ => None,
        }
    }
}

/// One phonetic unit of a name after digraph collapsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Vowel(char),
    Consonant(char),
    Digraph(Digraph),
    Other(char),
}

impl Unit {
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Lowercases `s` and folds `ng` / `ny` into single units.
pub fn collapse_digraphs(s: &str) -> Vec<Unit> {
    let lower = s.to_lowercase();
    let mut units = Vec::with_capacity(lower.len());
    let mut rest = lower.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some(d) = Digraph::at_start(rest) {
            units.push(Unit::Digraph(d));
            rest = &rest[2..];
            continue;
        }

        units.push(if is_vowel(c) {
            Unit::Vowel(c)
        } else if is_consonant(c) {
            Unit::Consonant(c)
        } else {
            Unit::Other(c)
        });
        rest = &rest[c.len_utf8()..];
    }
    units
}

#[cfg(test)]
#[path = "../../tests/unit/script/alphabet.rs"]
mod tests;
