use crate::screen::{Point, ScreenSize};
use crate::{log_debug, log_info};

/// Where the cursor starts on every launch.
pub const START_POSITION: Point = Point { x: 100, y: 100 };

/// Pixels moved per tick on each axis.
pub const SPEED: i32 = 2;

/// The system cursor, as seen by the animator.
pub trait Cursor {
    /// Moves the cursor to an absolute screen position.
    fn move_to(&mut self, position: Point);

    /// Shows or hides the cursor.
    fn set_visible(&mut self, visible: bool);
}

/// Bounces the cursor around the screen, one step per timer tick.
///
/// While enabled the cursor is hidden so it is never seen moving; when
/// disabled it is visible and left where it is.
pub struct MouseAnimator<C: Cursor> {
    cursor: C,
    screen: ScreenSize,
    position: Point,
    velocity: Point,
    enabled: bool,
}

impl<C: Cursor> MouseAnimator<C> {
    /// Creates an animator for the given screen and syncs cursor visibility
    /// with `enabled`.
    pub fn new(cursor: C, screen: ScreenSize, enabled: bool) -> Self {
        log_debug!("Screen dimensions: {}x{}", screen.width, screen.height);
        let mut animator = Self {
            cursor,
            screen,
            position: START_POSITION,
            velocity: Point::new(SPEED, SPEED),
            enabled,
        };
        animator.cursor.set_visible(!enabled);
        animator
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the position the next tick will move the cursor to.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    /// Advances the animation by one tick. Does nothing while disabled.
    ///
    /// The cursor is placed at the current position first, then the
    /// position advances. An axis whose new coordinate reaches either edge
    /// has its velocity reversed; the coordinate itself is not clamped.
    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }

        self.cursor.move_to(self.position);

        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        if self.position.x <= 0 || self.position.x >= self.screen.max_x() {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0 || self.position.y >= self.screen.max_y() {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Flips the enabled flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.cursor.set_visible(!self.enabled);
        log_info!(
            "Mouse movement {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
        self.enabled
    }

    /// Makes the ordinary cursor visible again before exit.
    pub fn restore_cursor(&mut self) {
        self.cursor.set_visible(true);
    }
}
