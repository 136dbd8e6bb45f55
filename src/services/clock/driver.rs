use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use chrono::{NaiveDateTime, Timelike};
use futures::Stream;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{debug, info, instrument, trace};

use crate::{config::Settings, services::common::Property};

use super::{ClockSnapshot, ClockState, SystemTimeSource, TimeSource};

const TICK: Duration = Duration::from_secs(1);

/// Lifecycle of the clock timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No timer running.
    Idle,
    /// One-second timer active.
    Ticking,
}

/// Drives [`ClockState`] from a one-second timer aligned to wall-clock seconds.
///
/// Each tick publishes a [`ClockSnapshot`] through a [`Property`]; views
/// subscribe with [`ClockDriver::snapshots`]. The timer is owned by the driver
/// and is cancelled by [`ClockDriver::stop`] or on drop.
pub struct ClockDriver {
    source: Arc<dyn TimeSource>,
    state: Arc<Mutex<ClockState>>,
    snapshot: Property<ClockSnapshot>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl ClockDriver {
    /// Driver reading the local system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }

    /// Driver reading time from `source`.
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        let state = ClockState::new(source.now());
        let snapshot = Property::new(state.snapshot());

        Self {
            source,
            state: Arc::new(Mutex::new(state)),
            snapshot,
            timer: Mutex::new(None),
        }
    }

    /// Adopts new settings and publishes the resulting snapshot at once.
    pub fn apply_settings(&self, settings: &Settings) {
        let now = self.source.now();
        let mut state = lock(&self.state);
        state.apply_settings(settings, now);
        self.snapshot.set(state.snapshot());
    }

    /// Shows or hides the colour layer; see [`ClockState::set_colour_visible`].
    pub fn set_colour_visible(&self, visible: bool) {
        lock(&self.state).set_colour_visible(visible);
    }

    /// Starts the timer. Does nothing if it is already running.
    ///
    /// The first tick fires on the next wall-clock second boundary, then
    /// once per second. A late tick delays the schedule instead of bursting.
    #[instrument(skip(self))]
    pub fn start(&self) {
        let mut timer = lock(&self.timer);
        if timer.as_ref().is_some_and(|handle| !handle.is_finished()) {
            debug!("Clock already ticking");
            return;
        }

        let delay = delay_to_next_second(self.source.now());
        info!(delay_ms = delay.as_millis() as u64, "Starting clock");

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let snapshot = self.snapshot.clone();
        let first_tick = Instant::now() + delay;

        *timer = Some(tokio::spawn(async move {
            let mut interval = interval_at(first_tick, TICK);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                let next = lock(&state).tick(source.now());
                trace!(time = %next.time, colour = %next.colour, "Tick");
                snapshot.set(next);
            }
        }));
    }

    /// Stops the timer. Safe to call any number of times.
    pub fn stop(&self) {
        if let Some(timer) = lock(&self.timer).take() {
            timer.abort();
            info!("Clock stopped");
        }
    }

    /// Whether the timer is running.
    pub fn state(&self) -> DriverState {
        match lock(&self.timer).as_ref() {
            Some(timer) if !timer.is_finished() => DriverState::Ticking,
            _ => DriverState::Idle,
        }
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> ClockSnapshot {
        self.snapshot.get()
    }

    /// Stream of snapshots, starting with the current one.
    pub fn snapshots(&self) -> impl Stream<Item = ClockSnapshot> + Send + use<> {
        self.snapshot.watch()
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for ClockDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockDriver")
            .field("state", &self.state())
            .field("snapshot", &self.snapshot.get())
            .finish()
    }
}

/// Time left until the next whole second of `now`.
pub fn delay_to_next_second(now: NaiveDateTime) -> Duration {
    let millis = u64::from((now.nanosecond() / 1_000_000).min(999));
    Duration::from_millis(1000 - millis)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
