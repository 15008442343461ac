use crate::{LightResult, log_info, log_warn};

/// OS power-state requests.
pub trait PowerControl {
    /// Asks the OS to keep the system and display awake.
    fn inhibit(&mut self) -> LightResult<()>;

    /// Returns the OS to its default power behavior.
    fn restore(&mut self);
}

/// Keeps the display awake for as long as it is alive.
///
/// A failed inhibit request is logged and otherwise ignored. Dropping the
/// guard always issues the restore request, whether or not the inhibit
/// request succeeded.
pub struct PowerGuard<P: PowerControl> {
    control: P,
    inhibited: bool,
}

impl<P: PowerControl> PowerGuard<P> {
    pub fn acquire(mut control: P) -> Self {
        let inhibited = match control.inhibit() {
            Ok(()) => {
                log_info!("Display and system sleep inhibited");
                true
            }
            Err(e) => {
                log_warn!("Could not prevent system sleep: {e}");
                false
            }
        };
        Self { control, inhibited }
    }

    /// Returns whether the inhibit request succeeded.
    pub fn is_inhibited(&self) -> bool {
        self.inhibited
    }
}

impl<P: PowerControl> Drop for PowerGuard<P> {
    fn drop(&mut self) {
        self.control.restore();
        log_info!("Default power behavior restored");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Calls {
        inhibits: usize,
        restores: usize,
    }

    struct FakePower {
        calls: Rc<RefCell<Calls>>,
        fail: bool,
    }

    impl PowerControl for FakePower {
        fn inhibit(&mut self) -> LightResult<()> {
            self.calls.borrow_mut().inhibits += 1;
            if self.fail {
                Err("SetThreadExecutionState failed".into())
            } else {
                Ok(())
            }
        }

        fn restore(&mut self) {
            self.calls.borrow_mut().restores += 1;
        }
    }

    fn fake(fail: bool) -> (FakePower, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        (
            FakePower {
                calls: calls.clone(),
                fail,
            },
            calls,
        )
    }

    #[test]
    fn acquire_inhibits_once_and_drop_restores_once() {
        // Arrange
        let (power, calls) = fake(false);

        // Act
        let guard = PowerGuard::acquire(power);
        assert!(guard.is_inhibited());
        assert_eq!(calls.borrow().restores, 0);
        drop(guard);

        // Assert
        assert_eq!(calls.borrow().inhibits, 1);
        assert_eq!(calls.borrow().restores, 1);
    }

    #[test]
    fn failed_inhibit_is_not_fatal_and_still_restores() {
        // Arrange
        let (power, calls) = fake(true);

        // Act
        let guard = PowerGuard::acquire(power);
        assert!(!guard.is_inhibited());
        drop(guard);

        // Assert
        assert_eq!(calls.borrow().inhibits, 1);
        assert_eq!(calls.borrow().restores, 1);
    }
}
