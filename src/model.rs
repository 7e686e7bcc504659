//! Core data models for Pixelframe.
//! Pure grid geometry and zoom arithmetic; nothing in here touches the DOM,
//! so the widget's coordinate contract stays testable off-browser.

use serde::{Deserialize, Serialize};

/// Fixed-resolution drawing surface: a square raster of `canvas_size`
/// backing pixels subdivided into paintable cells of `pixel_size`.
/// `canvas_size` is assumed (not enforced) to be a multiple of `pixel_size`
/// so the grid lines land cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub canvas_size: u32,
    pub pixel_size: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            canvas_size: 500,
            pixel_size: 10,
        }
    }
}

impl GridSpec {
    pub fn new(canvas_size: u32, pixel_size: u32) -> Self {
        Self {
            canvas_size,
            pixel_size,
        }
    }

    /// Grid line offsets along one axis: every multiple of `pixel_size`
    /// from 0 to `canvas_size` inclusive. Both axes use the same sequence.
    pub fn line_offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..=self.canvas_size).step_by(self.pixel_size.max(1) as usize)
    }

    /// Map surface-local viewport coordinates to backing-resolution
    /// coordinates by scaling with backing / displayed size, so a click
    /// lands on the right cell at any display zoom.
    pub fn surface_point(
        &self,
        local_x: f64,
        local_y: f64,
        shown_w: f64,
        shown_h: f64,
    ) -> (f64, f64) {
        let size = self.canvas_size as f64;
        (local_x * size / shown_w, local_y * size / shown_h)
    }

    /// Snap a backing-resolution point to the origin of its enclosing cell.
    pub fn cell_origin(&self, x: f64, y: f64) -> (f64, f64) {
        let ps = self.pixel_size as f64;
        ((x / ps).floor() * ps, (y / ps).floor() * ps)
    }
}

/// Display zoom for the surface. Purely a style transform: the backing
/// resolution never changes, only the CSS size the canvas is shown at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f64);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

impl Zoom {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 3.0;
    pub const STEP: f64 = 0.5;

    pub fn factor(&self) -> f64 {
        self.0
    }

    pub fn step_in(self) -> Zoom {
        Zoom((self.0 + Self::STEP).clamp(Self::MIN, Self::MAX))
    }

    pub fn step_out(self) -> Zoom {
        Zoom((self.0 - Self::STEP).clamp(Self::MIN, Self::MAX))
    }

    pub fn at_min(&self) -> bool {
        self.0 <= Self::MIN
    }

    pub fn at_max(&self) -> bool {
        self.0 >= Self::MAX
    }

    /// Displayed edge length in CSS pixels for a surface of `canvas_size`.
    pub fn shown_size(&self, canvas_size: u32) -> f64 {
        canvas_size as f64 * self.0
    }

    /// Below 1.0 the browser may interpolate; at or above 1.0 cells must
    /// stay crisp when enlarged.
    pub fn image_rendering(&self) -> &'static str {
        if self.0 >= 1.0 { "pixelated" } else { "auto" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_origin_floors_to_grid() {
        let grid = GridSpec::default();
        assert_eq!(grid.cell_origin(0.0, 0.0), (0.0, 0.0));
        assert_eq!(grid.cell_origin(9.9, 9.9), (0.0, 0.0));
        assert_eq!(grid.cell_origin(10.0, 19.9), (10.0, 10.0));
        assert_eq!(grid.cell_origin(497.0, 3.0), (490.0, 0.0));
    }

    #[test]
    fn surface_point_undoes_display_zoom() {
        let grid = GridSpec::default();
        // Shown at 2x: a click at displayed (250, 100) is backing (125, 50).
        let (x, y) = grid.surface_point(250.0, 100.0, 1000.0, 1000.0);
        assert_eq!((x, y), (125.0, 50.0));
        // Shown at 0.5x the other way round.
        let (x, y) = grid.surface_point(100.0, 30.0, 250.0, 250.0);
        assert_eq!((x, y), (200.0, 60.0));
    }

    #[test]
    fn click_through_zoom_lands_on_snapped_cell() {
        let grid = GridSpec::default();
        let zoom = Zoom::default().step_in(); // 1.5
        let shown = zoom.shown_size(grid.canvas_size);
        let (sx, sy) = grid.surface_point(151.0, 151.0, shown, shown);
        let (gx, gy) = grid.cell_origin(sx, sy);
        // 151 / 1.5 = 100.66.. -> cell (100, 100)
        assert_eq!((gx, gy), (100.0, 100.0));
    }

    #[test]
    fn line_offsets_cover_zero_to_size_inclusive() {
        let grid = GridSpec::new(50, 10);
        let offsets: Vec<u32> = grid.line_offsets().collect();
        assert_eq!(offsets, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn zoom_never_leaves_bounds() {
        let mut zoom = Zoom::default();
        for _ in 0..20 {
            zoom = zoom.step_in();
        }
        assert_eq!(zoom.factor(), Zoom::MAX);
        assert!(zoom.at_max());
        for _ in 0..20 {
            zoom = zoom.step_out();
        }
        assert_eq!(zoom.factor(), Zoom::MIN);
        assert!(zoom.at_min());
    }

    #[test]
    fn zoom_steps_by_half() {
        let zoom = Zoom::default();
        assert_eq!(zoom.step_in().factor(), 1.5);
        assert_eq!(zoom.step_out().factor(), 0.5);
        assert_eq!(zoom.step_out().step_out().factor(), 0.5);
    }

    #[test]
    fn interpolation_switches_at_unit_zoom() {
        assert_eq!(Zoom::default().image_rendering(), "pixelated");
        assert_eq!(Zoom::default().step_out().image_rendering(), "auto");
        assert_eq!(Zoom::default().step_in().image_rendering(), "pixelated");
    }
}
