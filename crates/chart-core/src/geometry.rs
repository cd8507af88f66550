// File: crates/chart-core/src/geometry.rs
// Summary: Integer pixel rectangles used for layout reservations and collision checks.

use serde::{Deserialize, Serialize};

use crate::types::Insets;

/// Axis-aligned pixel rectangle.
///
/// An absent reservation is `Option<RectI32>::None`; a zero-sized rectangle is a
/// real box that happens to cover nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Strict intersection test; rectangles sharing only an edge do not overlap.
    pub const fn overlaps(&self, other: &RectI32) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Shift by `(dx, dy)`.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Shrink by `insets`. The result never inverts and never leaves `self`.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = (self.left + insets.left.max(0)).min(self.right);
        let top = (self.top + insets.top.max(0)).min(self.bottom);
        let right = (self.right - insets.right.max(0)).max(left);
        let bottom = (self.bottom - insets.bottom.max(0)).max(top);
        Self { left, top, right, bottom }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_contact_is_not_overlap() {
        let a = RectI32::from_ltrb(0, 0, 100, 20);
        let b = RectI32::from_ltrb(10, 20, 50, 40);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&b.translate(0, -1)));
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectI32::from_ltwh(0, 0, 10, 10);
        let s = r.inset(&Insets::new(8, 8, 0, 20));
        assert_eq!(s.width(), 0);
        assert_eq!(s.height(), 0);
        assert_eq!(s.left, 8);
    }

    #[test]
    fn oversized_inset_stays_inside() {
        let r = RectI32::from_ltwh(0, 0, 10, 10);
        assert_eq!(r.inset(&Insets::uniform(20)), RectI32::from_ltrb(10, 10, 10, 10));
        let r = RectI32::from_ltrb(5, 5, 15, 15);
        assert_eq!(r.inset(&Insets::new(30, 0, 0, 30)), RectI32::from_ltrb(15, 5, 15, 5));
    }
}
