//! Axis-aligned rectangles with closed integer bounds.
//!
//! A [`Rect`] is the unit of claiming: `{left, right, top, bottom}`, all
//! bounds inclusive, so a single cell is `left == right && top == bottom`.
//!
//! Coordinates are signed. A drag gesture can legitimately stray outside
//! the grid, so candidate rectangles with negative or oversized coordinates
//! must be representable; the grid treats them as illegal rather than as a
//! fault.

use serde::{Deserialize, Serialize};

/// A closed integer coordinate range: a candidate or committed claim.
///
/// Well-formed rectangles satisfy `left <= right` and `top <= bottom`.
/// The normalizing constructors ([`cell`](Rect::cell),
/// [`from_corners`](Rect::from_corners)) always produce well-formed values;
/// a hand-built one may not, and validation fails closed on it.
///
/// ## Example
///
/// ```
/// use life_tile::core::Rect;
///
/// // Drag anchor at (4, 1), cursor now over (2, 3)
/// let rect = Rect::from_corners((4, 1), (2, 3));
/// assert_eq!(rect, Rect { left: 2, right: 4, top: 1, bottom: 3 });
/// assert_eq!(rect.area(), 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Rect {
    /// A 1×1 rectangle at the given cell (the drag anchor).
    #[must_use]
    pub const fn cell(x: i32, y: i32) -> Self {
        Self { left: x, right: x, top: y, bottom: y }
    }

    /// The smallest rectangle enclosing both corner cells, in either order.
    #[must_use]
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            left: a.0.min(b.0),
            right: a.0.max(b.0),
            top: a.1.min(b.1),
            bottom: a.1.max(b.1),
        }
    }

    /// Whether `left <= right` and `top <= bottom`.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Width in cells (0 for a malformed rectangle).
    #[must_use]
    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    /// Height in cells (0 for a malformed rectangle).
    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }

    /// Number of cells covered: `(right-left+1) * (bottom-top+1)`.
    #[must_use]
    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    /// Whether the cell `(x, y)` lies inside this rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }

    /// Iterate over covered cells in row-major order.
    ///
    /// Empty for a malformed rectangle.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.top..=self.bottom).flat_map(move |y| (self.left..=self.right).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}]x[{}..{}]",
            self.left, self.right, self.top, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_single() {
        let rect = Rect::cell(2, 5);
        assert!(rect.is_well_formed());
        assert_eq!(rect.area(), 1);
        assert_eq!(rect.cells().collect::<Vec<_>>(), vec![(2, 5)]);
    }

    #[test]
    fn test_from_corners_normalizes() {
        let a = Rect::from_corners((3, 4), (1, 0));
        let b = Rect::from_corners((1, 0), (3, 4));

        assert_eq!(a, b);
        assert_eq!(a, Rect { left: 1, right: 3, top: 0, bottom: 4 });
    }

    #[test]
    fn test_area() {
        assert_eq!(Rect { left: 0, right: 2, top: 0, bottom: 1 }.area(), 6);
        assert_eq!(Rect::cell(0, 0).area(), 1);
    }

    #[test]
    fn test_malformed_rect() {
        let rect = Rect { left: 3, right: 1, top: 0, bottom: 0 };

        assert!(!rect.is_well_formed());
        assert_eq!(rect.area(), 0);
        assert_eq!(rect.cells().count(), 0);
    }

    #[test]
    fn test_contains() {
        let rect = Rect { left: 1, right: 3, top: 2, bottom: 4 };

        assert!(rect.contains(1, 2));
        assert!(rect.contains(3, 4));
        assert!(rect.contains(2, 3));
        assert!(!rect.contains(0, 2));
        assert!(!rect.contains(1, 5));
    }

    #[test]
    fn test_cells_row_major() {
        let rect = Rect { left: 1, right: 2, top: 0, bottom: 1 };

        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_display() {
        let rect = Rect { left: 1, right: 3, top: 2, bottom: 4 };
        assert_eq!(format!("{}", rect), "[1..3]x[2..4]");
    }

    #[test]
    fn test_serialization() {
        let rect = Rect { left: -1, right: 3, top: 0, bottom: 2 };
        let json = serde_json::to_string(&rect).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, deserialized);
    }
}
