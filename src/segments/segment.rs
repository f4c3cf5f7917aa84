use serde::{Deserialize, Serialize};

/// Straight segment in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Slope is undefined for segments with `x1 == x2`.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn length(&self) -> f64 {
        let dx = f64::from(self.x2 - self.x1);
        let dy = f64::from(self.y2 - self.y1);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn endpoints(&self) -> [(f64, f64); 2] {
        [
            (f64::from(self.x1), f64::from(self.y1)),
            (f64::from(self.x2), f64::from(self.y2)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(LineSegment::new(0, 0, 3, 4).length(), 5.0);
        assert_eq!(LineSegment::new(2, 2, 2, 2).length(), 0.0);
    }

    #[test]
    fn vertical_detection() {
        assert!(LineSegment::new(5, 0, 5, 10).is_vertical());
        assert!(!LineSegment::new(5, 0, 6, 10).is_vertical());
    }
}
