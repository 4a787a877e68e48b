use super::*;

fn base(s: &str) -> Option<&'static str> {
    map_syllable(s, CatalogKind::Base).map(|m| m.symbol)
}

#[test]
fn consonant_plus_a_maps_to_its_own_symbol() {
    assert_eq!(base("ba"), Some("BA"));
    assert_eq!(base("Ya"), Some("YA"));
    assert_eq!(base("nga"), Some("NGA"));
    assert_eq!(base("nya"), Some("NYA"));
}

#[test]
fn other_vowels_collapse_onto_the_base_consonant() {
    for s in ["be", "bi", "bu", "bo"] {
        assert_eq!(base(s), Some("BA"), "{s}");
    }
    assert_eq!(base("ngi"), Some("NGA"));
    assert_eq!(map_syllable("ri", CatalogKind::Base).unwrap().diacritic, None);
}

#[test]
fn standalone_vowels() {
    assert_eq!(base("a"), Some("A"));
    assert_eq!(base("i"), Some("I"));
    assert_eq!(base("u"), Some("U"));
    assert_eq!(base("e"), Some("A"));
    assert_eq!(base("o"), Some("A"));
}

#[test]
fn extended_catalog_carries_vowel_signs() {
    let m = map_syllable("bi", CatalogKind::Extended).unwrap();
    assert_eq!(m.symbol, "BA");
    assert_eq!(m.diacritic, Some("~I"));
    let m = map_syllable("o", CatalogKind::Extended).unwrap();
    assert_eq!((m.symbol, m.diacritic), ("A", Some("~O")));
    assert_eq!(
        map_syllable("ta", CatalogKind::Extended).unwrap().diacritic,
        None
    );
}

#[test]
fn unmappable_shapes_return_none() {
    assert_eq!(base(""), None);
    assert_eq!(base("b"), None);
    assert_eq!(base("dh"), None);
    assert_eq!(base("ca"), None);
    assert_eq!(base("rid"), None);
    assert_eq!(base("aa"), None);
}

#[test]
fn dead_consonants_use_the_killer_sign_when_extended() {
    let m = map_dead_consonant("d", CatalogKind::Extended).unwrap();
    assert_eq!((m.symbol, m.diacritic), ("DA", Some(KILLER_DIACRITIC)));
    let m = map_dead_consonant("ng", CatalogKind::Base).unwrap();
    assert_eq!((m.symbol, m.diacritic), ("NGA", None));
    assert!(map_dead_consonant("a", CatalogKind::Base).is_none());
    assert!(map_dead_consonant("x", CatalogKind::Base).is_none());
}

#[test]
fn can_map_checks_catalog_membership() {
    assert!(can_map("ho", CatalogKind::Base));
    assert!(can_map("ho", CatalogKind::Extended));
    assert!(!can_map("xa", CatalogKind::Base));
    assert!(can_map("d", CatalogKind::Base));
    assert!(can_map("ng", CatalogKind::Extended));
    assert!(!can_map("x", CatalogKind::Extended));
}
