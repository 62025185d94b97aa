use super::*;

#[test]
fn clock_reading_is_not_zero_padded() {
    assert_eq!(ClockReading::from_elapsed(Duration::ZERO).to_string(), "0:0:0");
    assert_eq!(
        ClockReading::from_elapsed(Duration::from_secs(3_725)).to_string(),
        "1:2:5"
    );
    assert_eq!(
        ClockReading::from_elapsed(Duration::from_millis(59_999)).to_string(),
        "0:0:59"
    );
}

#[test]
fn hours_wrap_after_a_day() {
    let reading = ClockReading::from_elapsed(Duration::from_secs(25 * 3600 + 61));
    assert_eq!(
        reading,
        ClockReading {
            hours: 1,
            minutes: 1,
            seconds: 1
        }
    );
}

#[test]
fn idle_timer_reads_zero() {
    let timer = SessionTimer::new();
    assert!(!timer.is_running());
    assert_eq!(timer.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_second_while_running() {
    let mut timer = SessionTimer::new();
    timer.start();
    let mut readings = timer.subscribe();

    for expected in 1..=3 {
        readings.changed().await.expect("tick");
        assert_eq!(readings.borrow_and_update().seconds, expected);
    }
    assert!(timer.is_running());
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_elapsed_time() {
    let mut timer = SessionTimer::new();
    timer.start();
    time::sleep(Duration::from_secs(4)).await;
    timer.stop();
    assert!(!timer.is_running());

    time::sleep(Duration::from_secs(10)).await;
    assert_eq!(timer.reading().to_string(), "0:0:4");
    assert_eq!(*timer.subscribe().borrow(), timer.reading());
}

#[tokio::test(start_paused = true)]
async fn restarting_cancels_the_previous_ticker() {
    let mut timer = SessionTimer::new();
    timer.start();
    time::sleep(Duration::from_millis(5_500)).await;

    timer.start();
    let mut readings = timer.subscribe();
    readings.changed().await.expect("tick");
    // An orphaned ticker from the first start would have published 0:0:6 here.
    assert_eq!(readings.borrow_and_update().to_string(), "0:0:1");
    readings.changed().await.expect("tick");
    assert_eq!(readings.borrow_and_update().to_string(), "0:0:2");
}

#[test]
fn without_a_runtime_the_clock_is_poll_only() {
    let mut timer = SessionTimer::new();
    timer.start();
    let readings = timer.subscribe();
    std::thread::sleep(Duration::from_millis(1_100));

    assert!(timer.is_running());
    assert!(timer.reading().seconds >= 1);
    assert!(!readings.has_changed().expect("sender alive"));
}
