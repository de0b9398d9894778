// =============================================================================
// GEOMETRY.RS — Integer screen geometry for dialog layout
//
// Everything the quest log lays out lives on an integer pixel grid:
// - `Rect` for widget bounds, hit testing and clip scopes
// - `IVec2` (glam) for pixel points
// - `IVec3` (glam) for map tiles, where `z` is the map level
// =============================================================================

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle. `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `size` with its top-left corner at `pos`.
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Rectangle of size `size` whose centre is `center`.
    /// Odd sizes round the origin towards the top-left.
    pub fn centered_on(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half-open containment test: the right and bottom edges are outside.
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// The same rectangle shifted by `delta`.
    pub fn translated(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// A rectangle one pixel larger on every side, so a 1-px border drawn
    /// along it sits just outside `self`.
    pub fn around(&self) -> Self {
        Self::new(self.x - 1, self.y - 1, self.w + 2, self.h + 2)
    }

    /// Overlap of two rectangles. Disjoint inputs give an empty rectangle
    /// positioned at the overlap's would-be origin.
    pub fn intersect(&self, other: &Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let r = self.right().min(other.right());
        let b = self.bottom().min(other.bottom());
        Self::new(x, y, (r - x).max(0), (b - y).max(0))
    }

    /// Top-left origin that centres a `size`-sized box inside `self`.
    pub fn center_origin(&self, size: IVec2) -> IVec2 {
        IVec2::new(self.x + (self.w - size.x) / 2, self.y + (self.h - size.y) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(IVec2::new(10, 10)));
        assert!(r.contains(IVec2::new(14, 14)));
        assert!(!r.contains(IVec2::new(15, 10)));
        assert!(!r.contains(IVec2::new(10, 15)));
        assert!(!r.contains(IVec2::new(9, 12)));
    }

    #[test]
    fn test_around_grows_by_one_each_side() {
        assert_eq!(Rect::new(14, 195, 151, 31).around(), Rect::new(13, 194, 153, 33));
    }

    #[test]
    fn test_intersect_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(10, 10, 4, 4);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_centered_on() {
        let r = Rect::centered_on(IVec2::new(50, 40), IVec2::new(10, 6));
        assert_eq!(r, Rect::new(45, 37, 10, 6));
        assert_eq!(r.center(), IVec2::new(50, 40));
    }

    #[test]
    fn test_center_origin() {
        let screen = Rect::new(0, 0, 800, 600);
        assert_eq!(screen.center_origin(IVec2::new(600, 400)), IVec2::new(100, 100));
    }
}
