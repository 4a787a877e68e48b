use super::*;
use crate::script::{catalog::CatalogKind, segment::OrphanPolicy};

fn check(input: &str) -> NameValidation {
    validate_name(input, &Transliterator::default(), DEFAULT_MAX_SYLLABLES)
}

#[test]
fn empty_input_fails_every_rule() {
    let v = check("");
    assert!(!v.is_valid());
    assert!(v.checks.iter().all(|c| !c.passed));
    assert_eq!(v.first_failure(), Some(NameRule::LettersOnly));
}

#[test]
fn plain_name_passes() {
    let v = check("Ridho");
    assert!(v.is_valid(), "{v:?}");
    let t = v.into_transliteration().unwrap();
    assert_eq!(t.symbols(), ["RA", "DA", "HA"]);
    assert_eq!(t.name, "Ridho");
}

#[test]
fn whitespace_fails_letters_and_whitespace_rules() {
    let v = check("ani budi");
    assert!(!v.passed(NameRule::LettersOnly));
    assert!(!v.passed(NameRule::NoWhitespace));
    assert!(!v.passed(NameRule::SupportedAlphabet));
    assert_eq!(v.first_failure(), Some(NameRule::LettersOnly));
}

#[test]
fn digits_fail_only_letter_based_rules() {
    let v = check("budi2");
    assert!(!v.passed(NameRule::LettersOnly));
    assert!(v.passed(NameRule::NoWhitespace));
    assert!(!v.passed(NameRule::SyllableCount));
}

#[test]
fn too_many_syllables() {
    let v = check("balamanasata");
    assert!(!v.passed(NameRule::SyllableCount));
    assert!(v.passed(NameRule::SupportedAlphabet));
    assert!(v.passed(NameRule::MappableSyllables));
    assert_eq!(v.first_failure(), Some(NameRule::SyllableCount));
}

#[test]
fn unsupported_letters_fail_alphabet_rule() {
    let v = check("kevin");
    assert!(v.passed(NameRule::LettersOnly));
    assert!(!v.passed(NameRule::SupportedAlphabet));
    assert!(!v.passed(NameRule::MappableSyllables));
}

#[test]
fn reject_policy_makes_orphans_invalid() {
    let t = Transliterator::new(CatalogKind::Base, OrphanPolicy::Reject);
    let v = validate_name("ridho", &t, DEFAULT_MAX_SYLLABLES);
    assert!(!v.is_valid());
    assert!(v.passed(NameRule::SupportedAlphabet));
    assert!(!v.passed(NameRule::MappableSyllables));
}

#[test]
fn transliterate_reports_the_first_failing_rule() {
    let err = transliterate("x", &Transliterator::default(), DEFAULT_MAX_SYLLABLES).unwrap_err();
    assert!(err.to_string().contains("at most 5 syllables"));

    let err = transliterate("b4", &Transliterator::default(), DEFAULT_MAX_SYLLABLES).unwrap_err();
    assert!(err.to_string().contains(NameRule::LettersOnly.description()));
}

#[test]
fn checklist_lists_all_rules_in_order() {
    let rows: Vec<_> = check("a").checklist().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|(_, ok)| *ok));
    assert_eq!(rows[0].0, NameRule::LettersOnly.description());
    assert_eq!(rows[2].0, format!("at most {DEFAULT_MAX_SYLLABLES} syllables"));
}

#[test]
fn syllable_rule_text_follows_the_configured_limit() {
    let v = validate_name("budi", &Transliterator::default(), 3);
    let rows: Vec<_> = v.checklist().collect();
    assert_eq!(rows[2], ("at most 3 syllables".to_owned(), true));

    let err = transliterate("abadibadi", &Transliterator::default(), 3).unwrap_err();
    assert!(err.to_string().contains("at most 3 syllables"), "{err}");
}

#[test]
fn mappable_rule_accepts_dead_consonants() {
    let extended = Transliterator::new(CatalogKind::Extended, OrphanPolicy::DeadConsonant);
    for t in [Transliterator::default(), extended] {
        let v = validate_name("ridho", &t, DEFAULT_MAX_SYLLABLES);
        assert!(v.passed(NameRule::MappableSyllables), "{:?}", t.catalog());
    }
}
