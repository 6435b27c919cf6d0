use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// An offset within a presentation surface, in pixels from its top-left
/// corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub left: f64,
    pub top: f64,
}

impl From<(f64, f64)> for Point {
    fn from(pt: (f64, f64)) -> Self {
        Point {
            left: pt.0,
            top: pt.1,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from(pt: (i32, i32)) -> Self {
        Point {
            left: pt.0 as f64,
            top: pt.1 as f64,
        }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.left, p.top)
    }
}

impl Point {
    /// Keeps a widget of the given size fully inside a container, so the
    /// offset stays within `[0, container - widget]` on both axes. A widget
    /// larger than its container pins to 0.
    pub fn clamp_to(self, container: (f64, f64), widget: (f64, f64)) -> Point {
        let max_left = (container.0 - widget.0).max(0.0);
        let max_top = (container.1 - widget.1).max(0.0);
        Point {
            left: self.left.clamp(0.0, max_left),
            top: self.top.clamp(0.0, max_top),
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            left: self.left + other.left,
            top: self.top + other.top,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.top += rhs.top;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            left: self.left - other.left,
            top: self.top - other.top,
        }
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.left -= rhs.left;
        self.top -= rhs.top;
    }
}
