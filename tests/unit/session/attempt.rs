use super::*;

#[test]
fn prediction_comparison_ignores_case() {
    let a = AttemptResult::from_prediction("BA", &Prediction::new("ba", 0.874));
    assert!(a.is_correct);
    assert_eq!(a.confidence, 87);
    assert_eq!(a.score(), 87);

    let b = AttemptResult::from_prediction("BA", &Prediction::new("DA", 0.95));
    assert!(!b.is_correct);
    assert_eq!(b.confidence, 95);
    assert_eq!(b.score(), 0);
}

#[test]
fn failures_become_the_sentinel() {
    let a = AttemptResult::from_outcome("NGA", &Err(ClassifyError::Status(500)));
    assert_eq!(a.predicted_label, "Error");
    assert_eq!(a.confidence, 0);
    assert!(!a.is_correct);
    assert!(a.is_failure());
    assert_eq!(a.expected_label, "NGA");
}

#[test]
fn stats_percentage_rounds() {
    let mut s = SessionStats::default();
    assert_eq!(s.percentage(), 0);
    let hit = AttemptResult::from_prediction("A", &Prediction::new("A", 0.9));
    let miss = AttemptResult::from_prediction("A", &Prediction::new("I", 0.9));
    s.record(&hit);
    s.record(&hit);
    s.record(&miss);
    assert_eq!((s.correct_count, s.total_count), (2, 3));
    assert_eq!(s.percentage(), 67);
}

#[test]
fn tiers_and_bands_use_inclusive_thresholds() {
    assert_eq!(ScoreTier::from_score(100), ScoreTier::Excellent);
    assert_eq!(ScoreTier::from_score(90), ScoreTier::Excellent);
    assert_eq!(ScoreTier::from_score(89), ScoreTier::Great);
    assert_eq!(ScoreTier::from_score(70), ScoreTier::Great);
    assert_eq!(ScoreTier::from_score(50), ScoreTier::Fair);
    assert_eq!(ScoreTier::from_score(49), ScoreTier::KeepPracticing);

    assert_eq!(ConfidenceBand::from_percent(80), ConfidenceBand::High);
    assert_eq!(ConfidenceBand::from_percent(79), ConfidenceBand::Medium);
    assert_eq!(ConfidenceBand::from_percent(60), ConfidenceBand::Medium);
    assert_eq!(ConfidenceBand::from_percent(59), ConfidenceBand::Low);
}
