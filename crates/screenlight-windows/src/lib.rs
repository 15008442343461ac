//! Windows platform implementation for Screen Light.
//!
//! Everything here talks to Win32 and is only built on Windows.
#![cfg(windows)]

/// GDI brushes backing the window background.
pub mod brush;

/// Console allocation for verbose diagnostics.
pub mod console;

/// Console control handler (Ctrl+C, Ctrl+Break, console close).
pub mod ctrl_c;

/// The system cursor.
pub mod cursor;

/// Window class, window creation and the message pump.
pub mod host;

/// Virtual-key translation.
pub mod keys;

/// Sleep inhibition via `SetThreadExecutionState`.
pub mod power;

pub use host::{HostOptions, run};
