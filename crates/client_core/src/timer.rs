//! Session Timer: wall-clock elapsed time since the puzzle was loaded.
//!
//! Frame-driven frontends (the egui app, the terminal client) poll
//! [`SessionTimer::reading`] whenever they draw. [`SessionTimer::subscribe`]
//! is for async consumers that want to wake on each tick instead; it only
//! publishes when the timer was started on a thread with a tokio runtime.

use std::{fmt, time::Duration};

use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

const TICK_PERIOD: Duration = Duration::from_secs(1);
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Elapsed time as shown on the clock. Hours wrap after a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockReading {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ClockReading {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let total = elapsed.as_secs() % SECONDS_PER_DAY;
        Self {
            hours: total / 3600,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

pub struct SessionTimer {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
    ticker: Option<JoinHandle<()>>,
    readings: watch::Sender<ClockReading>,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTimer")
            .field("started_at", &self.started_at)
            .field("stopped_at", &self.stopped_at)
            .field("ticking", &self.ticker.is_some())
            .finish()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        let (readings, _) = watch::channel(ClockReading::default());
        Self {
            started_at: None,
            stopped_at: None,
            ticker: None,
            readings,
        }
    }

    /// Restarts the clock from zero. Any earlier tick task is cancelled
    /// first. Without a tokio runtime on the calling thread no tick task is
    /// spawned and callers poll [`SessionTimer::reading`] instead.
    pub fn start(&mut self) {
        self.cancel_ticker();

        let now = Instant::now();
        self.started_at = Some(now);
        self.stopped_at = None;
        self.readings.send_replace(ClockReading::default());

        match Handle::try_current() {
            Ok(handle) => {
                let readings = self.readings.clone();
                self.ticker = Some(handle.spawn(tick(now, readings)));
            }
            Err(_) => debug!("timer: no runtime on this thread, readings are poll-only"),
        }
    }

    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.cancel_ticker();
        self.stopped_at = Some(Instant::now());
        self.readings.send_replace(self.reading());
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.stopped_at) {
            (Some(started), Some(stopped)) => stopped.duration_since(started),
            (Some(started), None) => started.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn reading(&self) -> ClockReading {
        ClockReading::from_elapsed(self.elapsed())
    }

    /// Receives a fresh reading once per second while running. Not needed
    /// by callers that poll [`SessionTimer::reading`].
    pub fn subscribe(&self) -> watch::Receiver<ClockReading> {
        self.readings.subscribe()
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

async fn tick(started_at: Instant, readings: watch::Sender<ClockReading>) {
    let mut interval = time::interval_at(started_at + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        readings.send_replace(ClockReading::from_elapsed(started_at.elapsed()));
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
