use screenlight_core::{LightResult, Surface};
use windows::Win32::Foundation::{COLORREF, HWND};
use windows::Win32::Graphics::Gdi::{CreateSolidBrush, DeleteObject, HBRUSH, InvalidateRect};

/// An owned solid GDI brush.
///
/// Deliberately not `Copy`: the brush is deleted exactly once, when it is
/// handed back to [`GdiSurface::release_paint`].
#[derive(Debug)]
pub struct Brush(HBRUSH);

impl Brush {
    /// Returns the raw handle for use in `FillRect`.
    pub fn raw(&self) -> HBRUSH {
        self.0
    }
}

/// The light panel window, painted with solid gray brushes.
pub struct GdiSurface {
    hwnd: HWND,
}

impl GdiSurface {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl Surface for GdiSurface {
    type Paint = Brush;

    fn create_paint(&mut self, gray: u8) -> LightResult<Brush> {
        // SAFETY: CreateSolidBrush has no preconditions; a null handle
        // signals failure.
        let brush = unsafe { CreateSolidBrush(gray_colorref(gray)) };
        if brush.is_invalid() {
            return Err(format!("Could not create brush for gray level {gray}").into());
        }
        Ok(Brush(brush))
    }

    fn release_paint(&mut self, paint: Brush) {
        // SAFETY: the brush was created by `create_paint` and is no longer
        // used for painting once it has been replaced.
        unsafe {
            let _ = DeleteObject(paint.0.into());
        }
    }

    fn repaint(&mut self) {
        // SAFETY: InvalidateRect only queues a WM_PAINT for our window.
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, true);
        }
    }
}

/// Builds a `COLORREF` (0x00BBGGRR) with equal channels.
pub fn gray_colorref(gray: u8) -> COLORREF {
    let g = u32::from(gray);
    COLORREF(g | (g << 8) | (g << 16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_fills_all_three_channels() {
        assert_eq!(gray_colorref(255), COLORREF(0x00FF_FFFF));
        assert_eq!(gray_colorref(0), COLORREF(0));
        assert_eq!(gray_colorref(0x80), COLORREF(0x0080_8080));
    }
}
