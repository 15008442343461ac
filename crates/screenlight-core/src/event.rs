use crate::input::Key;

/// A platform-agnostic event delivered to the dispatch thread.
///
/// Platform crates translate raw OS messages into these variants and
/// feed them to [`crate::Session::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightEvent {
    /// A key was pressed. `modifier` is true while Shift is held.
    KeyDown { key: Key, modifier: bool },

    /// The animation timer fired.
    TimerTick,

    /// The user asked to close the window (Alt+F4, system menu).
    CloseRequested,

    /// An external termination signal was received on another thread.
    ShutdownRequested,
}
