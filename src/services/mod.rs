/// Background image resolution
pub mod background;
/// Per-second clock and colour ticking
pub mod clock;
/// Shared building blocks for services
pub mod common;
/// Online/offline detection
pub mod connectivity;
/// Web font loading
pub mod font;
/// Transient on-screen messages
pub mod toast;

pub use background::{BackgroundError, BackgroundService, BackgroundState};
pub use clock::{ClockDriver, ClockSnapshot, DriverState, TimeOfDay};
pub use font::{FontError, FontService, FontState};
pub use toast::{DEFAULT_TOAST_DURATION, Toast, ToastService};
