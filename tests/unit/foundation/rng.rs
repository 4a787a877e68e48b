use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_index_stays_in_range_and_covers_it() {
    let mut rng = Rng64::new(7);
    let mut seen = [false; 19];
    for _ in 0..2000 {
        let i = rng.next_index(19);
        assert!(i < 19);
        seen[i] = true;
    }
    assert!(seen.iter().all(|s| *s));
}
