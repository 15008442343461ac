use crate::animator::{Cursor, MouseAnimator};
use crate::brightness::{BrightnessController, Surface};
use crate::event::LightEvent;
use crate::input::{self, Command};
use crate::screen::ScreenSize;
use crate::shutdown::ShutdownSignal;
use crate::{LightResult, log_info, log_warn};

/// Lifecycle of the light panel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    Terminating,
    Terminated,
}

/// What the host must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event was consumed.
    Handled,
    /// The event has no binding; pass it to default platform handling.
    Unhandled,
    /// The session just entered [`Phase::Terminating`]. The host must stop
    /// its timer and destroy the window. Reported at most once.
    Terminate,
}

/// All mutable state of a running light panel.
///
/// Owned by the dispatch thread and mutated only there. The shutdown
/// signal is the one piece shared with another thread, and the session
/// only reads it.
pub struct Session<S: Surface, C: Cursor> {
    phase: Phase,
    brightness: BrightnessController<S>,
    animator: MouseAnimator<C>,
    shutdown: ShutdownSignal,
}

impl<S: Surface, C: Cursor> Session<S, C> {
    /// Allocates the initial background and sets up the animator.
    ///
    /// Fails if the initial paint cannot be allocated.
    pub fn new(
        surface: S,
        cursor: C,
        screen: ScreenSize,
        animate: bool,
        shutdown: ShutdownSignal,
    ) -> LightResult<Self> {
        let brightness = BrightnessController::new(surface)?;
        let animator = MouseAnimator::new(cursor, screen, animate);
        Ok(Self {
            phase: Phase::Initializing,
            brightness,
            animator,
            shutdown,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn brightness(&self) -> &BrightnessController<S> {
        &self.brightness
    }

    pub fn animator(&self) -> &MouseAnimator<C> {
        &self.animator
    }

    /// Returns the paint the window background should be filled with.
    pub fn background(&self) -> Option<&S::Paint> {
        self.brightness.background()
    }

    /// Marks the window as shown. Only valid from `Initializing`.
    pub fn start(&mut self) {
        if self.phase == Phase::Initializing {
            self.transition(Phase::Running);
        }
    }

    /// Handles one event on the dispatch thread.
    ///
    /// Events arriving outside `Running` are swallowed.
    pub fn handle(&mut self, event: LightEvent) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Handled;
        }

        match event {
            LightEvent::KeyDown { key, modifier } => match input::command_for(key, modifier) {
                Some(command) => self.execute(command),
                None => Outcome::Unhandled,
            },
            LightEvent::TimerTick => {
                if self.shutdown.is_requested() {
                    return self.begin_termination();
                }
                self.animator.update();
                Outcome::Handled
            }
            LightEvent::CloseRequested | LightEvent::ShutdownRequested => {
                self.begin_termination()
            }
        }
    }

    /// Records that the terminal event was observed.
    ///
    /// A session that is still running tears down first, so no path
    /// reaches `Terminated` without passing through `Terminating`.
    pub fn finish(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        if self.phase != Phase::Terminating {
            self.begin_termination();
        }
        self.transition(Phase::Terminated);
    }

    fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Close => return self.begin_termination(),
            Command::Adjust { lighter, step } => {
                if let Err(e) = self.brightness.adjust(lighter, step) {
                    log_warn!("Could not change brightness: {e}");
                }
            }
            Command::ToggleMouse => {
                self.animator.toggle();
            }
        }
        Outcome::Handled
    }

    /// Enters `Terminating`, releasing the background and restoring the
    /// cursor. Returns [`Outcome::Terminate`] only on the first call.
    fn begin_termination(&mut self) -> Outcome {
        if matches!(self.phase, Phase::Terminating | Phase::Terminated) {
            return Outcome::Handled;
        }
        self.transition(Phase::Terminating);
        self.brightness.release();
        self.animator.restore_cursor();
        Outcome::Terminate
    }

    fn transition(&mut self, next: Phase) {
        log_info!("Lifecycle: {:?} -> {next:?}", self.phase);
        self.phase = next;
    }
}
