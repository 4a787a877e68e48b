use super::*;

#[tokio::test(start_paused = true)]
async fn inactivity_fires_after_the_last_reset() {
    let mut t = InactivityTimer::new(Duration::from_secs(2));
    let start = Instant::now();
    t.reset();
    tokio::time::sleep(Duration::from_millis(1_900)).await;
    t.reset();
    t.fired().await;
    assert_eq!(start.elapsed(), Duration::from_millis(3_900));
    assert!(!t.is_pending());
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let mut t = InactivityTimer::new(Duration::from_secs(2));
    t.reset();
    t.cancel();
    let fired = tokio::time::timeout(Duration::from_secs(10), t.fired()).await;
    assert!(fired.is_err());
}

#[tokio::test(start_paused = true)]
async fn countdown_ticks_every_second_and_stops_at_zero() {
    let mut c = Countdown::new();
    let start = Instant::now();
    c.start(3);
    assert_eq!(c.tick().await, 2);
    assert_eq!(c.tick().await, 1);
    assert_eq!(c.tick().await, 0);
    assert_eq!(start.elapsed(), Duration::from_secs(3));
    assert!(!c.is_running());
    assert!(
        tokio::time::timeout(Duration::from_secs(5), c.tick())
            .await
            .is_err()
    );
}

#[tokio::test(start_paused = true)]
async fn countdown_cancel_stops_ticks() {
    let mut c = Countdown::new();
    c.start(60);
    assert_eq!(c.tick().await, 59);
    c.cancel();
    assert_eq!(c.remaining(), 59);
    assert!(
        tokio::time::timeout(Duration::from_secs(5), c.tick())
            .await
            .is_err()
    );
}
