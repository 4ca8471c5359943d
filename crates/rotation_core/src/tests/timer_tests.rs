use super::*;
use tokio::sync::mpsc;

const INTERVAL: Duration = Duration::from_millis(5_000);

fn manager() -> TimerManager {
    TimerManager::new(Handle::current(), INTERVAL)
}

fn reporter(tx: &mpsc::UnboundedSender<u64>) -> impl FnOnce(u64) + Send + 'static {
    let tx = tx.clone();
    move |generation| {
        let _ = tx.send(generation);
    }
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_full_interval() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = manager();
    let start = Instant::now();
    timer.arm(reporter(&tx));
    assert_eq!(timer.deadline(), Some(start + INTERVAL));

    tokio::time::sleep(Duration::from_millis(4_999)).await;
    assert!(rx.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(rx.try_recv().expect("fired"), 1);
    assert!(timer.fired(1));
    assert_eq!(timer.deadline(), None);
}

#[tokio::test(start_paused = true)]
async fn rearm_replaces_pending_trigger() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = manager();
    let start = Instant::now();
    timer.arm(reporter(&tx));

    tokio::time::sleep(Duration::from_millis(3_000)).await;
    timer.rearm(reporter(&tx));
    assert_eq!(timer.generation(), 2);
    assert_eq!(
        timer.deadline(),
        Some(start + Duration::from_millis(3_000) + INTERVAL)
    );

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert!(rx.try_recv().is_err(), "replaced trigger must not fire");

    tokio::time::sleep(Duration::from_millis(3_000)).await;
    assert_eq!(rx.try_recv().expect("fired"), 2);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn cancel_prevents_fire() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = manager();
    timer.arm(reporter(&tx));
    timer.cancel();
    assert_eq!(timer.deadline(), None);

    tokio::time::sleep(INTERVAL * 3).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn stale_generations_are_rejected() {
    let mut timer = manager();
    timer.arm(|_| {});
    timer.arm(|_| {});
    assert!(!timer.is_current(1));
    assert!(!timer.fired(1));
    assert!(timer.is_current(2));

    timer.cancel();
    assert!(!timer.is_current(2));
    assert!(!timer.fired(2));
    assert!(!timer.is_current(timer.generation()));
}

#[tokio::test(start_paused = true)]
async fn fire_is_consumed_only_once() {
    let mut timer = manager();
    timer.arm(|_| {});
    assert!(timer.fired(1));
    assert!(!timer.fired(1));
}

#[tokio::test(start_paused = true)]
async fn dropping_manager_aborts_pending_trigger() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = manager();
    timer.arm(reporter(&tx));
    drop(timer);

    tokio::time::sleep(INTERVAL * 2).await;
    assert!(rx.try_recv().is_err());
}
