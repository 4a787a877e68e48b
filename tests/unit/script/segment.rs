use super::*;

fn texts(name: &str) -> Vec<String> {
    Transliterator::default()
        .segment(name)
        .unwrap()
        .into_iter()
        .map(|s| s.text)
        .collect()
}

fn symbols(name: &str) -> Vec<&'static str> {
    Transliterator::default()
        .segment(name)
        .unwrap()
        .iter()
        .map(Syllable::symbol)
        .collect()
}

#[test]
fn simple_cv_names() {
    assert_eq!(texts("Budi"), ["bu", "di"]);
    assert_eq!(symbols("Budi"), ["BA", "DA"]);
    assert_eq!(texts("sari"), ["sa", "ri"]);
}

#[test]
fn digraph_syllables_take_the_three_letter_match() {
    assert_eq!(texts("nyoman"), ["nyo", "ma", "n"]);
    assert_eq!(symbols("nyoman"), ["NYA", "MA", "NA"]);
    assert_eq!(texts("bunga"), ["bu", "nga"]);
}

#[test]
fn single_vowel_name() {
    let s = Transliterator::default().segment("a").unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s[0].symbol(), "A");
    assert!(!s[0].dead);
}

#[test]
fn leading_vowels_split_before_consonants() {
    assert_eq!(texts("ani"), ["a", "ni"]);
    assert_eq!(texts("edo"), ["e", "do"]);
    assert_eq!(symbols("edo"), ["A", "DA"]);
}

#[test]
fn orphan_consonant_becomes_dead_syllable() {
    let s = Transliterator::default().segment("ridho").unwrap();
    let parts: Vec<_> = s.iter().map(|x| (x.text.as_str(), x.symbol(), x.dead)).collect();
    assert_eq!(
        parts,
        [("ri", "RA", false), ("d", "DA", true), ("ho", "HA", false)]
    );
}

#[test]
fn trailing_digraph_is_one_dead_syllable() {
    let s = Transliterator::default().segment("bang").unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s[1].text, "ng");
    assert_eq!(s[1].symbol(), "NGA");
    assert!(s[1].dead);
}

#[test]
fn reject_policy_reports_the_orphan() {
    let t = Transliterator::new(CatalogKind::Base, OrphanPolicy::Reject);
    assert_eq!(
        t.segment("ridho"),
        Err(SegmentError::Orphan { index: 2, ch: 'd' })
    );
}

#[test]
fn unsupported_letters_are_errors_not_drops() {
    let t = Transliterator::default();
    assert_eq!(
        t.segment("fajar"),
        Err(SegmentError::Unsupported { index: 0, ch: 'f' })
    );
    assert_eq!(
        t.segment("rika"),
        Err(SegmentError::Unsupported { index: 2, ch: 'k' })
    );
    assert_eq!(t.segment(""), Err(SegmentError::Empty));
}

#[test]
fn extended_catalog_marks_dead_consonants_with_killer() {
    let t = Transliterator::new(CatalogKind::Extended, OrphanPolicy::DeadConsonant);
    let s = t.segment("ridho").unwrap();
    assert_eq!(s[0].mapping.diacritic, Some("~I"));
    assert_eq!(s[1].mapping.diacritic, Some("~"));
    assert_eq!(s[2].mapping.diacritic, Some("~O"));
}

#[test]
fn segmentation_is_deterministic() {
    let t = Transliterator::default();
    let first = t.segment("ridho").unwrap();
    for _ in 0..8 {
        assert_eq!(t.segment("ridho").unwrap(), first);
    }
}
