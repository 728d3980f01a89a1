//! Loading overlay shown before the page content.
//!
//! A fixed [`schedule`] publishes fake progress targets, the [`smoother`]
//! eases the displayed value toward them every frame, and the
//! [`controller`] moves through `Entering → Showing → Exiting → Done`,
//! gated by the minimum-duration, extra-hold and timeout policies in
//! [`config`]. The [`driver`] plugs the controller into a host
//! [`TickSource`](driver::TickSource).
//!
//! Real asset loading (images, fonts) is only observed for logging; it never
//! changes how long the overlay stays up.

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod driver;
pub mod ring;
pub mod schedule;
pub mod smoother;
pub mod timers;

/// Milliseconds on the host clock.
pub type Millis = u64;

pub use config::{ConfigError, PreloaderConfig};
pub use controller::{ExitReason, Outcome, Phase, PreloaderController, PreloaderView};
pub use driver::{PreloaderDriver, TickError, TickSource};
pub use schedule::{ProgressSchedule, ProgressStep, ScheduleError};
pub use smoother::Smoother;
