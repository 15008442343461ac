use screenlight_core::{Cursor, Point};
use windows::Win32::UI::WindowsAndMessaging::{SetCursorPos, ShowCursor};

/// The Win32 system cursor.
///
/// `ShowCursor` adjusts a display counter rather than setting a flag, so
/// the current state is tracked here and the counter is only touched when
/// visibility actually changes.
pub struct SystemCursor {
    hidden: bool,
}

impl SystemCursor {
    pub fn new() -> Self {
        Self { hidden: false }
    }
}

impl Default for SystemCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor for SystemCursor {
    fn move_to(&mut self, position: Point) {
        // SAFETY: SetCursorPos takes plain screen coordinates. A failure
        // (e.g. a secure desktop is active) only skips this frame.
        unsafe {
            let _ = SetCursorPos(position.x, position.y);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if visible == !self.hidden {
            return;
        }
        // SAFETY: ShowCursor only adjusts the calling thread's display count.
        unsafe {
            ShowCursor(visible);
        }
        self.hidden = !visible;
    }
}
