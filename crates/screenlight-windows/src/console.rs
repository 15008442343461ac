use windows::Win32::System::Console::AllocConsole;

/// Gives the GUI process a console so verbose logging has somewhere to go.
///
/// Fails quietly if the process already owns a console.
pub fn attach() {
    // SAFETY: AllocConsole has no preconditions; it fails if a console
    // is already attached, which is fine for our purposes.
    unsafe {
        let _ = AllocConsole();
    }
}
