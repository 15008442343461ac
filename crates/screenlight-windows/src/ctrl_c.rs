//! Console control handler using `SetConsoleCtrlHandler`.
//!
//! Windows runs the handler on a thread it creates for the purpose. The
//! handler forwards to a [`ShutdownCoordinator`] and reports the signal as
//! handled so the graceful path gets to run before the process ends.

use std::sync::OnceLock;

use screenlight_core::{LightResult, ShutdownCoordinator, SignalKind};
use windows::Win32::System::Console::{
    CTRL_BREAK_EVENT, CTRL_C_EVENT, CTRL_CLOSE_EVENT, SetConsoleCtrlHandler,
};
use windows::core::BOOL;

/// Written once by `install`, read by the callback.
static COORDINATOR: OnceLock<ShutdownCoordinator> = OnceLock::new();

/// Registers `coordinator` to receive interrupt, break and console-close
/// signals. Can only be called once per process.
pub fn install(coordinator: ShutdownCoordinator) -> LightResult<()> {
    COORDINATOR
        .set(coordinator)
        .map_err(|_| "console control handler already registered")?;

    // SAFETY: `handler` is a plain function that lives for the whole
    // process and only reads the `COORDINATOR` static.
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }?;
    Ok(())
}

/// Maps a console control code to the signal it represents.
pub fn signal_kind(ctrl_type: u32) -> Option<SignalKind> {
    match ctrl_type {
        CTRL_C_EVENT => Some(SignalKind::Interrupt),
        CTRL_BREAK_EVENT => Some(SignalKind::Break),
        CTRL_CLOSE_EVENT => Some(SignalKind::ConsoleClose),
        _ => None,
    }
}

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    // Logoff and shutdown codes go to the next handler.
    let Some(kind) = signal_kind(ctrl_type) else {
        return BOOL(0);
    };
    match COORDINATOR.get() {
        Some(coordinator) => BOOL::from(coordinator.on_signal(kind)),
        None => BOOL(0),
    }
}
