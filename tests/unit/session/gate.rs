use super::*;

#[test]
fn only_one_check_at_a_time() {
    let mut g = CheckGate::new();
    let t = g.begin().unwrap();
    assert!(g.is_checking());
    assert_eq!(g.begin(), None);
    assert!(g.finish(t));
    assert!(!g.is_checking());
    assert!(g.begin().is_some());
}

#[test]
fn invalidate_makes_outstanding_tickets_stale() {
    let mut g = CheckGate::new();
    let old = g.begin().unwrap();
    g.invalidate();
    assert!(!g.is_checking());

    let fresh = g.begin().unwrap();
    assert!(!g.finish(old));
    assert!(g.is_checking(), "stale finish leaves the fresh check running");
    assert!(g.finish(fresh));
}
