/// Dimensions of the primary screen in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest x coordinate the cursor may sit on before bouncing.
    pub fn max_x(&self) -> i32 {
        self.width - 1
    }

    /// Largest y coordinate the cursor may sit on before bouncing.
    pub fn max_y(&self) -> i32 {
        self.height - 1
    }
}

/// A screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_limits_are_one_pixel_inside_the_screen() {
        // Arrange
        let screen = ScreenSize::new(1920, 1080);

        // Assert
        assert_eq!(screen.max_x(), 1919);
        assert_eq!(screen.max_y(), 1079);
    }
}
