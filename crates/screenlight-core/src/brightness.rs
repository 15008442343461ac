use crate::{LightResult, log_info};

/// Gray level the panel starts at on every launch (full white).
pub const INITIAL_LEVEL: u8 = 255;

/// A drawable target whose background is filled with a solid gray.
///
/// The Windows implementation allocates GDI brushes; tests use a
/// recording fake.
pub trait Surface {
    /// The paint resource used to fill the background.
    type Paint;

    /// Allocates a paint resource for the given gray level.
    fn create_paint(&mut self, gray: u8) -> LightResult<Self::Paint>;

    /// Frees a paint resource that is no longer installed.
    fn release_paint(&mut self, paint: Self::Paint);

    /// Requests a full repaint of the surface.
    fn repaint(&mut self);
}

/// Owns the current gray level and the single live background paint.
///
/// Exactly one paint resource is live between construction and
/// [`release`](Self::release). Replacing it always frees the previous one.
pub struct BrightnessController<S: Surface> {
    surface: S,
    level: u8,
    paint: Option<S::Paint>,
}

impl<S: Surface> BrightnessController<S> {
    /// Allocates the initial full-white paint.
    ///
    /// Fails if the surface cannot allocate it; callers treat that as fatal.
    pub fn new(mut surface: S) -> LightResult<Self> {
        let paint = surface.create_paint(INITIAL_LEVEL)?;
        Ok(Self {
            surface,
            level: INITIAL_LEVEL,
            paint: Some(paint),
        })
    }

    /// Returns the current gray level.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the live background paint, or `None` after release.
    pub fn background(&self) -> Option<&S::Paint> {
        self.paint.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Moves the gray level by `step`, clamped to `0..=255`.
    ///
    /// Returns `Ok(true)` if the level changed. A clamped request that
    /// leaves the level where it was touches nothing. If the new paint
    /// cannot be allocated the level and live paint are left unchanged.
    pub fn adjust(&mut self, lighter: bool, step: u8) -> LightResult<bool> {
        if self.paint.is_none() {
            return Ok(false);
        }

        let target = clamp_level(self.level, lighter, step);
        if target == self.level {
            return Ok(false);
        }

        let paint = self.surface.create_paint(target)?;
        if let Some(old) = self.paint.replace(paint) {
            self.surface.release_paint(old);
        }
        self.level = target;
        self.surface.repaint();

        log_info!("Brightness set to {target}");
        Ok(true)
    }

    /// Frees the live paint. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(paint) = self.paint.take() {
            self.surface.release_paint(paint);
        }
    }
}

impl<S: Surface> Drop for BrightnessController<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Applies `step` in the given direction and clamps to `0..=255`.
pub fn clamp_level(level: u8, lighter: bool, step: u8) -> u8 {
    if lighter {
        level.saturating_add(step)
    } else {
        level.saturating_sub(step)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every paint operation so tests can count churn.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub next_id: u32,
        pub created: Vec<u8>,
        pub released: Vec<u32>,
        pub live: Vec<u32>,
        pub repaints: usize,
        pub fail_next: bool,
    }

    /// A fake paint resource identified by allocation order.
    #[derive(Debug, PartialEq)]
    pub(crate) struct FakePaint {
        pub id: u32,
        pub gray: u8,
    }

    impl Surface for RecordingSurface {
        type Paint = FakePaint;

        fn create_paint(&mut self, gray: u8) -> LightResult<FakePaint> {
            if self.fail_next {
                self.fail_next = false;
                return Err("out of brushes".into());
            }
            self.next_id += 1;
            self.created.push(gray);
            self.live.push(self.next_id);
            Ok(FakePaint {
                id: self.next_id,
                gray,
            })
        }

        fn release_paint(&mut self, paint: FakePaint) {
            self.released.push(paint.id);
            self.live.retain(|id| *id != paint.id);
        }

        fn repaint(&mut self) {
            self.repaints += 1;
        }
    }

    fn controller() -> BrightnessController<RecordingSurface> {
        BrightnessController::new(RecordingSurface::default()).unwrap()
    }

    fn press(c: &mut BrightnessController<RecordingSurface>, lighter: bool, step: u8, times: usize) {
        for _ in 0..times {
            c.adjust(lighter, step).unwrap();
        }
    }

    #[test]
    fn starts_at_full_white_with_one_live_paint() {
        // Act
        let c = controller();

        // Assert
        assert_eq!(c.level(), 255);
        assert_eq!(c.surface().created, vec![255]);
        assert_eq!(c.surface().live.len(), 1);
        assert_eq!(c.background().map(|p| p.gray), Some(255));
        assert_eq!(c.surface().repaints, 0);
    }

    #[test]
    fn coarse_down_swaps_once_and_repaints_once() {
        // Arrange
        let mut c = controller();

        // Act
        let changed = c.adjust(false, 10).unwrap();

        // Assert
        assert!(changed);
        assert_eq!(c.level(), 245);
        assert_eq!(c.surface().created, vec![255, 245]);
        assert_eq!(c.surface().released, vec![1]);
        assert_eq!(c.surface().live, vec![2]);
        assert_eq!(c.surface().repaints, 1);
    }

    #[test]
    fn up_at_full_white_is_a_no_op() {
        // Arrange
        let mut c = controller();

        // Act
        press(&mut c, true, 10, 5);
        press(&mut c, true, 1, 5);

        // Assert
        assert_eq!(c.level(), 255);
        assert_eq!(c.surface().created.len(), 1);
        assert!(c.surface().released.is_empty());
        assert_eq!(c.surface().repaints, 0);
    }

    #[test]
    fn down_at_black_is_a_no_op() {
        // Arrange
        let mut c = controller();
        press(&mut c, false, 10, 26);
        assert_eq!(c.level(), 0);
        let created = c.surface().created.len();
        let repaints = c.surface().repaints;

        // Act
        press(&mut c, false, 10, 3);
        press(&mut c, false, 1, 3);

        // Assert
        assert_eq!(c.level(), 0);
        assert_eq!(c.surface().created.len(), created);
        assert_eq!(c.surface().repaints, repaints);
    }

    #[test]
    fn fine_steps_change_level_by_one() {
        // Arrange
        let mut c = controller();
        c.adjust(false, 10).unwrap();

        // Act
        press(&mut c, false, 1, 30);

        // Assert
        assert_eq!(c.level(), 215);
        assert_eq!(c.surface().repaints, 31);
        assert_eq!(c.surface().live.len(), 1);
    }

    #[test]
    fn fine_steps_from_full_white_reach_225() {
        let mut c = controller();

        press(&mut c, false, 1, 30);

        assert_eq!(c.level(), 225);
        assert_eq!(c.surface().created.len(), 31);
    }

    #[test]
    fn coarse_up_from_black_clamps_at_step_26() {
        // Arrange
        let mut c = controller();
        press(&mut c, false, 10, 26);
        assert_eq!(c.level(), 0);
        let before = c.surface().created.len();

        // Act
        let mut changes = Vec::new();
        for _ in 0..100 {
            changes.push(c.adjust(true, 10).unwrap());
        }

        // Assert
        assert!(changes[..26].iter().all(|changed| *changed));
        assert!(changes[26..].iter().all(|changed| !*changed));
        assert_eq!(c.surface().created[before + 24], 250);
        assert_eq!(c.surface().created[before + 25], 255);
        assert_eq!(c.surface().created.len(), before + 26);
        assert_eq!(c.level(), 255);
    }

    #[test]
    fn mixed_presses_stay_in_range_with_one_live_paint() {
        // Arrange
        let mut c = controller();
        let presses = [
            (false, 10, 40),
            (true, 1, 7),
            (true, 10, 3),
            (false, 1, 12),
            (true, 10, 40),
            (false, 10, 13),
        ];

        // Act / Assert
        for (lighter, step, times) in presses {
            for _ in 0..times {
                let before = c.level();
                c.adjust(lighter, step).unwrap();
                assert_eq!(c.level(), clamp_level(before, lighter, step));
                assert_eq!(c.surface().live.len(), 1);
            }
        }
    }

    #[test]
    fn failed_allocation_keeps_level_and_paint() {
        // Arrange
        let mut c = controller();
        c.surface.fail_next = true;
        assert_eq!(c.surface().live, vec![1]);

        // Act
        let result = c.adjust(false, 10);

        // Assert
        assert!(result.is_err());
        assert_eq!(c.level(), 255);
        assert_eq!(c.background().map(|p| p.id), Some(1));
        assert_eq!(c.surface().repaints, 0);
    }

    #[test]
    fn release_frees_the_live_paint_once() {
        // Arrange
        let mut c = controller();
        c.adjust(false, 10).unwrap();

        // Act
        c.release();
        c.release();

        // Assert
        assert!(c.background().is_none());
        assert!(c.surface().live.is_empty());
        assert_eq!(c.surface().released, vec![1, 2]);
    }

    #[test]
    fn adjust_after_release_does_nothing() {
        let mut c = controller();
        c.release();

        assert!(!c.adjust(false, 10).unwrap());
        assert_eq!(c.level(), 255);
        assert_eq!(c.surface().created.len(), 1);
    }

    #[test]
    fn clamp_saturates_at_both_ends() {
        assert_eq!(clamp_level(250, true, 10), 255);
        assert_eq!(clamp_level(5, false, 10), 0);
        assert_eq!(clamp_level(128, true, 1), 129);
        assert_eq!(clamp_level(128, false, 1), 127);
    }
}
