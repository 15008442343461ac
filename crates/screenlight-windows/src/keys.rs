use screenlight_core::Key;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, VK_SHIFT};

const VK_ESCAPE: u32 = 0x1B;
const VK_UP: u32 = 0x26;
const VK_DOWN: u32 = 0x28;
const VK_M: u32 = 0x4D; // 'M'

/// Converts a `WM_KEYDOWN` virtual key code to a [`Key`].
pub fn key_from_vk(vk: u32) -> Key {
    match vk {
        VK_ESCAPE => Key::Escape,
        VK_UP => Key::Up,
        VK_DOWN => Key::Down,
        VK_M => Key::M,
        other => Key::Other(other),
    }
}

/// Returns whether either Shift key was down when the current message
/// was posted.
pub fn shift_held() -> bool {
    // SAFETY: GetKeyState reads the thread's keyboard state snapshot.
    // The high bit is set while the key is down.
    unsafe { GetKeyState(i32::from(VK_SHIFT.0)) < 0 }
}
