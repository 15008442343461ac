/// Brightness step applied when no modifier is held.
pub const COARSE_STEP: u8 = 10;

/// Brightness step applied while Shift is held.
pub const FINE_STEP: u8 = 1;

/// A key the light panel reacts to.
///
/// Platform crates translate their native key codes into this type.
/// Keys without a binding arrive as [`Key::Other`] carrying the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Up,
    Down,
    M,
    Other(u32),
}

/// A command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Close the window and exit.
    Close,
    /// Change the gray level by `step` in the given direction.
    Adjust { lighter: bool, step: u8 },
    /// Turn cursor animation on or off.
    ToggleMouse,
}

/// Returns the step size for a key press.
pub fn step_size(modifier: bool) -> u8 {
    if modifier { FINE_STEP } else { COARSE_STEP }
}

/// Maps a key press to a command.
///
/// Returns `None` for unbound keys; the caller forwards those to the
/// platform's default handling.
pub fn command_for(key: Key, modifier: bool) -> Option<Command> {
    match key {
        Key::Escape => Some(Command::Close),
        Key::Up => Some(Command::Adjust {
            lighter: true,
            step: step_size(modifier),
        }),
        Key::Down => Some(Command::Adjust {
            lighter: false,
            step: step_size(modifier),
        }),
        Key::M => Some(Command::ToggleMouse),
        Key::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_regardless_of_modifier() {
        assert_eq!(command_for(Key::Escape, false), Some(Command::Close));
        assert_eq!(command_for(Key::Escape, true), Some(Command::Close));
    }

    #[test]
    fn arrows_adjust_with_coarse_step() {
        // Assert
        assert_eq!(
            command_for(Key::Up, false),
            Some(Command::Adjust {
                lighter: true,
                step: 10
            })
        );
        assert_eq!(
            command_for(Key::Down, false),
            Some(Command::Adjust {
                lighter: false,
                step: 10
            })
        );
    }

    #[test]
    fn modifier_selects_fine_step() {
        assert_eq!(
            command_for(Key::Up, true),
            Some(Command::Adjust {
                lighter: true,
                step: 1
            })
        );
        assert_eq!(
            command_for(Key::Down, true),
            Some(Command::Adjust {
                lighter: false,
                step: 1
            })
        );
    }

    #[test]
    fn m_toggles_mouse() {
        assert_eq!(command_for(Key::M, false), Some(Command::ToggleMouse));
        assert_eq!(command_for(Key::M, true), Some(Command::ToggleMouse));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(command_for(Key::Other(0x41), false), None);
        assert_eq!(command_for(Key::Other(0x20), true), None);
    }
}
