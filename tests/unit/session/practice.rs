use super::*;
use crate::canvas::export::EncodedImage;
use crate::foundation::core::Point;

struct Always(Result<Prediction, ClassifyError>);

impl Classifier for Always {
    async fn classify(&self, _image: &EncodedImage) -> Result<Prediction, ClassifyError> {
        self.0.clone()
    }
}

fn session() -> PracticeSession {
    let opts = CanvasOptions {
        width: 32,
        height: 32,
        ..CanvasOptions::default()
    };
    PracticeSession::new(Catalog::base(), opts).unwrap()
}

fn scribble(s: &mut PracticeSession) {
    let c = s.canvas_mut();
    c.begin_stroke(Point::new(4.0, 4.0));
    c.extend_stroke(Point::new(28.0, 28.0));
    c.end_stroke();
}

#[test]
fn navigation_wraps_both_ways() {
    let mut s = session();
    assert_eq!(s.current().unwrap().label, "A");
    assert_eq!(s.prev_character().unwrap().label, "YA");
    assert_eq!(s.index(), 18);
    assert_eq!(s.next_character().unwrap().label, "A");
    assert_eq!(s.next_character().unwrap().label, "BA");
    assert_eq!(s.select(10).unwrap().label, "NGA");
    assert!(s.select(19).is_none());
    assert_eq!(s.index(), 10);
}

#[test]
fn changing_character_clears_the_canvas() {
    let mut s = session();
    scribble(&mut s);
    assert!(!s.canvas().is_empty());
    s.next_character();
    assert!(s.canvas().is_empty());
}

#[tokio::test]
async fn check_compares_against_the_current_character() {
    let mut s = session();
    s.select(1);
    scribble(&mut s);
    let hit = Always(Ok(Prediction::new("ba", 0.82)));
    let r = s.check(&hit).await.unwrap().clone();
    assert!(r.is_correct);
    assert_eq!(r.confidence, 82);
    assert_eq!(r.expected_label, "BA");
    assert!(!s.is_checking());
}

#[tokio::test]
async fn service_failure_yields_the_sentinel() {
    let mut s = session();
    scribble(&mut s);
    let down = Always(Err(ClassifyError::Status(500)));
    let r = s.check(&down).await.unwrap();
    assert_eq!(r.predicted_label, "Error");
    assert!(!r.is_correct);
}

#[test]
fn duplicate_checks_are_refused_while_in_flight() {
    let mut s = session();
    let first = s.begin_check().unwrap();
    assert!(s.begin_check().is_none());
    assert!(s.complete_check(first, Ok(Prediction::new("A", 1.0))).is_some());
    assert!(s.begin_check().is_some());
}

#[test]
fn late_response_after_navigation_is_dropped() {
    let mut s = session();
    let pending = s.begin_check().unwrap();
    s.next_character();
    assert!(s.complete_check(pending, Ok(Prediction::new("A", 0.9))).is_none());
    assert!(s.result().is_none());
}

#[test]
fn clearing_abandons_an_in_flight_check() {
    let mut s = session();
    scribble(&mut s);
    let pending = s.begin_check().unwrap();
    assert!(s.is_checking());

    s.clear();
    assert!(!s.is_checking());
    assert!(s.complete_check(pending, Ok(Prediction::new("A", 0.9))).is_none());
    assert!(s.result().is_none());
}
