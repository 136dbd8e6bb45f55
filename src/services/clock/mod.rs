//! Once-per-second clock that recomputes the time, date and page colour.

mod driver;
mod state;
mod time;


pub use driver::{ClockDriver, DriverState, delay_to_next_second};
pub use state::{ClockSnapshot, ClockState, colour_for};
pub use time::{SimulatedTimeSource, SystemTimeSource, TimeOfDay, TimeSource};
