//! Least-squares line fitting and lane-line projection.
use super::{FitLine, LaneFitParams, LaneLine, LaneSide};
use crate::image::FrameDims;
use crate::segments::LineSegment;
use nalgebra::DVector;

/// Degree-1 least-squares fit `y = slope * x + intercept` through `points`.
///
/// Works on mean-centred coordinates, which keeps integer pixel inputs exact
/// for the common two-endpoint case. Returns `None` for fewer than two points
/// or when all x are equal (vertical line, slope undefined).
pub fn polyfit_line(points: &[(f64, f64)]) -> Option<FitLine> {
    if points.len() < 2 {
        return None;
    }
    let xs = DVector::from_iterator(points.len(), points.iter().map(|p| p.0));
    let ys = DVector::from_iterator(points.len(), points.iter().map(|p| p.1));
    let x_mean = xs.mean();
    let y_mean = ys.mean();
    let dx = xs.add_scalar(-x_mean);
    let dy = ys.add_scalar(-y_mean);

    let sxx = dx.dot(&dx);
    if sxx <= 0.0 || !sxx.is_finite() {
        return None;
    }
    let slope = dx.dot(&dy) / sxx;
    let intercept = y_mean - slope * x_mean;
    (slope.is_finite() && intercept.is_finite()).then(|| FitLine::new(slope, intercept))
}

/// Fit a single segment; `None` for vertical segments.
pub fn fit_segment(segment: &LineSegment) -> Option<FitLine> {
    if segment.is_vertical() {
        return None;
    }
    polyfit_line(&segment.endpoints())
}

/// Project `fit` onto rows `height` and `height / 2`.
///
/// x is truncated toward zero and clamped into `params.x_clamp * width`, so
/// near-horizontal fits land on a finite off-screen coordinate. A horizontal
/// line lying exactly on the sampled row has no unique crossing and resolves
/// to the frame centre.
pub fn make_lane_line(
    dims: FrameDims,
    fit: &FitLine,
    side: LaneSide,
    params: &LaneFitParams,
) -> LaneLine {
    let width = f64::from(dims.width);
    let y1 = dims.height as i32;
    let y2 = y1 / 2;
    let lo = params.x_clamp[0] * width;
    let hi = params.x_clamp[1] * width;
    let project = |y: i32| -> i32 {
        let x = fit.x_at(f64::from(y));
        if x.is_nan() {
            return (width / 2.0) as i32;
        }
        x.trunc().clamp(lo, hi) as i32
    };
    LaneLine {
        side,
        segment: LineSegment::new(project(y1), y1, project(y2), y2),
    }
}
