pub mod animator;
pub mod brightness;
pub mod config;
pub mod event;
pub mod input;
pub mod log;
pub mod power;
pub mod screen;
pub mod session;
pub mod shutdown;

pub use animator::{Cursor, MouseAnimator};
pub use brightness::{BrightnessController, Surface};
pub use event::LightEvent;
pub use input::{Command, Key};
pub use power::{PowerControl, PowerGuard};
pub use screen::{Point, ScreenSize};
pub use session::{Outcome, Phase, Session};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal, SignalKind};

/// A boxed error type for platform and startup operations.
///
/// Any error type that implements the `Error` trait can be boxed into this,
/// including `windows::core::Error` and plain `String`s.
pub type LightResult<T> = Result<T, Box<dyn std::error::Error>>;
