//! Unit tests for the debounce scheduler, under a paused tokio clock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use slideboard::upload::Debounce;

fn collector() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + 'static) {
    let seen: Arc<Mutex<Vec<u32>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value| sink.lock().push(value))
}

#[tokio::test(start_paused = true)]
async fn burst_coalesces_to_last_value() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    for value in 1..=5 {
        debounce.call(value);
    }
    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(*seen.lock(), vec![5]);
}

#[tokio::test(start_paused = true)]
async fn each_call_restarts_the_quiet_period() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    debounce.call(1);
    tokio::time::sleep(Duration::from_millis(300)).await;
    debounce.call(2);
    // 600ms after the first call: it would have fired by now had the second
    // call not reset the deadline
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(seen.lock().is_empty());

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(*seen.lock(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_the_pending_call() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    debounce.call(1);
    debounce.cancel();
    tokio::time::sleep(Duration::from_millis(700)).await;

    assert!(seen.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn flush_runs_immediately_and_only_once() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    debounce.call(7);
    debounce.flush();
    // give the scheduler task a chance to process both messages
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(*seen.lock(), vec![7]);

    // the timer must not fire a second time later
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(*seen.lock(), vec![7]);
}

#[tokio::test(start_paused = true)]
async fn flush_without_pending_is_a_noop() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    debounce.flush();
    tokio::time::sleep(Duration::from_millis(700)).await;

    assert!(seen.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_pending_work() {
    let (seen, action) = collector();
    let debounce = Debounce::new(Duration::from_millis(500), action);

    debounce.call(1);
    drop(debounce);
    tokio::time::sleep(Duration::from_millis(700)).await;

    assert!(seen.lock().is_empty());
}
