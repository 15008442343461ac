use screenlight_core::{LightResult, PowerControl};
use windows::Win32::System::Power::{
    ES_CONTINUOUS, ES_DISPLAY_REQUIRED, ES_SYSTEM_REQUIRED, SetThreadExecutionState,
};

/// Thread execution state requests.
///
/// Must be used from the dispatch thread: execution state is tracked per
/// thread and lives as long as that thread does.
pub struct ExecutionState;

impl PowerControl for ExecutionState {
    fn inhibit(&mut self) -> LightResult<()> {
        // SAFETY: SetThreadExecutionState only updates the calling thread's
        // power request flags.
        let previous = unsafe {
            SetThreadExecutionState(ES_CONTINUOUS | ES_SYSTEM_REQUIRED | ES_DISPLAY_REQUIRED)
        };
        if previous.0 == 0 {
            return Err("SetThreadExecutionState rejected the request".into());
        }
        Ok(())
    }

    fn restore(&mut self) {
        // SAFETY: see `inhibit`.
        unsafe {
            SetThreadExecutionState(ES_CONTINUOUS);
        }
    }
}
