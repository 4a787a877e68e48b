use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::canvas::input::Contacts;
use crate::foundation::core::Point;

#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
}

impl Classifier for Counting {
    async fn classify(&self, _image: &EncodedImage) -> Result<Prediction, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction::new("SA", 0.65))
    }
}

fn session() -> ExploreSession {
    let opts = CanvasOptions {
        width: 32,
        height: 32,
        ..CanvasOptions::default()
    };
    ExploreSession::new(opts, Duration::from_secs(2)).unwrap()
}

fn draw(s: &mut ExploreSession, from: (f64, f64), to: (f64, f64)) {
    let vp = ViewportRect::identity(32, 32);
    let at = |p: (f64, f64)| Contacts::Mouse(Point::new(p.0, p.1));
    s.handle_input(&InputEvent::Down(at(from)), &vp);
    s.handle_input(&InputEvent::Move(at(to)), &vp);
    s.handle_input(&InputEvent::Up, &vp);
}

#[tokio::test(start_paused = true)]
async fn pause_after_drawing_triggers_exactly_one_call() {
    let mut s = session();
    let c = Counting::default();
    let start = tokio::time::Instant::now();

    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    tokio::time::sleep(Duration::from_millis(1_900)).await;
    draw(&mut s, (2.0, 30.0), (30.0, 2.0));

    s.idle().await;
    assert_eq!(start.elapsed(), Duration::from_millis(3_900));
    let r = s.classify_now(&c).await.unwrap();
    assert_eq!(r.predicted_label, "SA");
    assert_eq!(r.confidence, 65);
    assert_eq!(r.band, ConfidenceBand::Medium);
    assert_eq!(c.calls.load(Ordering::SeqCst), 1);
    assert!(!s.is_auto_classify_pending());
}

#[tokio::test(start_paused = true)]
async fn empty_canvas_clears_result_without_calling() {
    let mut s = session();
    let c = Counting::default();
    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    s.classify_now(&c).await;
    assert!(s.result().is_some());

    s.clear();
    assert!(s.result().is_none());
    assert!(!s.is_auto_classify_pending());
    assert!(s.classify_now(&c).await.is_none());
    assert_eq!(c.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn clearing_drops_an_in_flight_response() {
    let mut s = session();
    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    let pending = s.begin_check().unwrap();
    s.clear();
    assert!(s.complete_check(pending, Ok(Prediction::new("A", 1.0))).is_none());
    assert!(s.result().is_none());
}

#[test]
fn failures_show_the_error_label() {
    let mut s = session();
    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    let pending = s.begin_check().unwrap();
    let r = s.complete_check(pending, Err(ClassifyError::Timeout)).unwrap();
    assert_eq!(r.predicted_label, "Error");
    assert_eq!(r.confidence, 0);
    assert_eq!(r.band, ConfidenceBand::Low);
}

#[tokio::test(start_paused = true)]
async fn drawing_during_a_check_is_classified_once_the_check_returns() {
    let mut s = session();
    let c = Counting::default();

    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    s.idle().await;
    let first = s.begin_check().unwrap();
    assert!(s.is_classifying());

    draw(&mut s, (2.0, 30.0), (30.0, 2.0));
    s.idle().await;
    assert!(s.classify_now(&c).await.is_none());
    assert_eq!(c.calls.load(Ordering::SeqCst), 0);

    let shown = s.complete_check(first, Ok(Prediction::new("BA", 0.9))).unwrap();
    assert_eq!(shown.predicted_label, "BA");
    assert!(s.is_auto_classify_pending());

    let start = tokio::time::Instant::now();
    s.idle().await;
    assert_eq!(start.elapsed(), Duration::from_secs(2));
    let r = s.classify_now(&c).await.unwrap();
    assert_eq!(r.predicted_label, "SA");
    assert_eq!(c.calls.load(Ordering::SeqCst), 1);
    assert!(!s.is_auto_classify_pending());
}

#[tokio::test(start_paused = true)]
async fn a_check_that_was_not_refused_does_not_rearm() {
    let mut s = session();
    draw(&mut s, (2.0, 2.0), (30.0, 30.0));
    s.idle().await;
    let pending = s.begin_check().unwrap();
    s.complete_check(pending, Ok(Prediction::new("A", 1.0))).unwrap();
    assert!(!s.is_auto_classify_pending());
}
