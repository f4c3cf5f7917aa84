use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};

/// Line in slope-intercept form `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FitLine {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Solve for x at row `y`; non-finite when the line is horizontal.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    /// Component-wise arithmetic mean, `None` for an empty slice.
    pub fn mean(fits: &[FitLine]) -> Option<FitLine> {
        if fits.is_empty() {
            return None;
        }
        let n = fits.len() as f64;
        let (slope, intercept) = fits
            .iter()
            .fold((0.0, 0.0), |(s, i), f| (s + f.slope, i + f.intercept));
        Some(FitLine::new(slope / n, intercept / n))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneSide {
    Left,
    Right,
}

/// One aggregated lane boundary running from the bottom row of the frame up
/// to its vertical midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLine {
    pub side: LaneSide,
    pub segment: LineSegment,
}

/// Averaged fits per side before conversion to drawable lane lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneFits {
    pub left: Option<FitLine>,
    pub right: Option<FitLine>,
}
