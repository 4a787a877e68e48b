use crate::{
    foundation::error::{AksaraError, AksaraResult},
    script::{
        alphabet::collapse_digraphs,
        mapping::can_map,
        segment::{Syllable, Transliterator},
    },
};

/// Upper bound on syllables a name may produce.
pub const DEFAULT_MAX_SYLLABLES: usize = 5;

/// Checks a name must pass before it can be written, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameRule {
    LettersOnly,
    NoWhitespace,
    SyllableCount,
    SupportedAlphabet,
    MappableSyllables,
}

impl NameRule {
    pub const ALL: [NameRule; 5] = [
        NameRule::LettersOnly,
        NameRule::NoWhitespace,
        NameRule::SyllableCount,
        NameRule::SupportedAlphabet,
        NameRule::MappableSyllables,
    ];

    /// Generic wording; see [`NameRule::describe`] for the text with the configured limit.
    pub fn description(self) -> &'static str {
        match self {
            Self::LettersOnly => "letters only",
            Self::NoWhitespace => "no spaces",
            Self::SyllableCount => "not too many syllables",
            Self::SupportedAlphabet => "only letters the Batak script can write",
            Self::MappableSyllables => "every syllable has a Batak symbol",
        }
    }

    /// Checklist text for a name limited to `max_syllables`.
    pub fn describe(self, max_syllables: usize) -> String {
        match self {
            Self::SyllableCount => format!("at most {max_syllables} syllables"),
            other => other.description().to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RuleCheck {
    pub rule: NameRule,
    pub passed: bool,
}

/// Per-rule outcome for one candidate name.
///
/// Rules are evaluated independently so a checklist can show each of them while the user types.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NameValidation {
    pub input: String,
    pub max_syllables: usize,
    pub checks: Vec<RuleCheck>,
    #[serde(skip)]
    syllables: Option<Vec<Syllable>>,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn passed(&self, rule: NameRule) -> bool {
        self.checks.iter().any(|c| c.rule == rule && c.passed)
    }

    pub fn first_failure(&self) -> Option<NameRule> {
        self.checks.iter().find(|c| !c.passed).map(|c| c.rule)
    }

    /// `(description, passed)` rows in reporting order.
    pub fn checklist(&self) -> impl Iterator<Item = (String, bool)> + '_ {
        self.checks
            .iter()
            .map(|c| (c.rule.describe(self.max_syllables), c.passed))
    }

    /// Syllables of a name that passed every rule.
    pub fn into_transliteration(self) -> AksaraResult<Transliteration> {
        if let Some(rule) = self.first_failure() {
            return Err(AksaraError::validation(format!(
                "name '{}' fails rule: {}",
                self.input,
                rule.describe(self.max_syllables)
            )));
        }
        let syllables = self
            .syllables
            .ok_or_else(|| AksaraError::validation("name produced no syllables"))?;
        Ok(Transliteration {
            name: self.input,
            syllables,
        })
    }
}

/// A validated name and the symbols to write it with.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transliteration {
    pub name: String,
    pub syllables: Vec<Syllable>,
}

impl Transliteration {
    pub fn symbols(&self) -> Vec<&'static str> {
        self.syllables.iter().map(Syllable::symbol).collect()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

pub fn validate_name(
    input: &str,
    transliterator: &Transliterator,
    max_syllables: usize,
) -> NameValidation {
    let non_empty = !input.is_empty();
    let segmented = transliterator.segment(input).ok();
    let kind = transliterator.catalog();

    let letters_only = non_empty && input.chars().all(|c| c.is_ascii_alphabetic());
    let no_whitespace = non_empty && !input.chars().any(char::is_whitespace);
    let syllable_count = segmented
        .as_ref()
        .is_some_and(|s| (1..=max_syllables).contains(&s.len()));
    let supported_alphabet =
        non_empty && collapse_digraphs(input).iter().all(|u| u.is_supported());
    let mappable = segmented
        .as_ref()
        .is_some_and(|s| !s.is_empty() && s.iter().all(|syl| can_map(&syl.text, kind)));

    let checks = [
        letters_only,
        no_whitespace,
        syllable_count,
        supported_alphabet,
        mappable,
    ]
    .into_iter()
    .zip(NameRule::ALL)
    .map(|(passed, rule)| RuleCheck { rule, passed })
    .collect();

    NameValidation {
        input: input.to_string(),
        max_syllables,
        checks,
        syllables: segmented,
    }
}

/// Validates and segments in one step.
pub fn transliterate(
    input: &str,
    transliterator: &Transliterator,
    max_syllables: usize,
) -> AksaraResult<Transliteration> {
    validate_name(input, transliterator, max_syllables).into_transliteration()
}

#[cfg(test)]
#[path = "../../tests/unit/script/validate.rs"]
mod tests;
