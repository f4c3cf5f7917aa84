//! Lane geometry to target steering angle.
use super::{EstimatorParams, SteeringTarget, STRAIGHT_AHEAD_DEG};
use crate::image::FrameDims;
use crate::lanes::LaneLine;
use log::debug;

#[derive(Clone, Debug, Default)]
pub struct SteeringEstimator {
    params: EstimatorParams,
}

impl SteeringEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Angle between the vehicle heading and the point the car should aim at,
    /// shifted so that `90` means straight ahead.
    ///
    /// With one line the car follows that line's direction (`x2 - x1`). With
    /// two lines it aims at the midpoint of their upper endpoints relative to
    /// the camera-corrected frame centre. The look-ahead distance is half the
    /// frame height.
    pub fn estimate(&self, dims: FrameDims, lane_lines: &[LaneLine]) -> SteeringTarget {
        let x_offset = match lane_lines {
            [] => {
                debug!("no lane lines detected, holding course");
                return SteeringTarget::NoDetection;
            }
            [only] => {
                debug!("only one lane line detected, following it: {:?}", only);
                f64::from(only.segment.x2 - only.segment.x1)
            }
            [left, right, ..] => {
                let mid = (f64::from(dims.width) / 2.0 * (1.0 + self.params.camera_mid_offset))
                    .trunc();
                f64::from(left.segment.x2 + right.segment.x2) / 2.0 - mid
            }
        };
        let y_offset = f64::from((dims.height / 2).max(1));

        let angle_to_mid_deg = (x_offset / y_offset).atan().to_degrees().round() as i32;
        let target = SteeringTarget::detected(angle_to_mid_deg + STRAIGHT_AHEAD_DEG);
        debug!("new steering target: {:?}", target);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::LaneSide;
    use crate::segments::LineSegment;

    const DIMS: FrameDims = FrameDims {
        width: 640,
        height: 480,
    };

    fn line(side: LaneSide, x1: i32, x2: i32) -> LaneLine {
        LaneLine {
            side,
            segment: LineSegment::new(x1, 480, x2, 240),
        }
    }

    #[test]
    fn empty_is_no_detection() {
        let target = SteeringEstimator::default().estimate(DIMS, &[]);
        assert_eq!(target, SteeringTarget::NoDetection);
        assert_eq!(target.degrees(), -90);
    }

    #[test]
    fn symmetric_lines_without_camera_offset_go_straight() {
        let lines = [line(LaneSide::Left, 100, 280), line(LaneSide::Right, 540, 360)];
        let est = SteeringEstimator::new(EstimatorParams {
            camera_mid_offset: 0.0,
        });
        assert_eq!(est.estimate(DIMS, &lines), SteeringTarget::Detected(90));
    }

    #[test]
    fn camera_offset_shifts_symmetric_lines_right() {
        // mid = trunc(320 * 0.965) = 308, offset = 12, atan(12 / 240) = 2.86 deg
        let lines = [line(LaneSide::Left, 100, 280), line(LaneSide::Right, 540, 360)];
        let target = SteeringEstimator::default().estimate(DIMS, &lines);
        assert_eq!(target, SteeringTarget::Detected(93));
    }

    #[test]
    fn single_line_follows_its_direction() {
        // x2 - x1 = 240 over 240 rows -> 45 deg right of straight
        let lines = [line(LaneSide::Right, 200, 440)];
        let target = SteeringEstimator::default().estimate(DIMS, &lines);
        assert_eq!(target, SteeringTarget::Detected(135));

        let lines = [line(LaneSide::Left, 300, 300)];
        let target = SteeringEstimator::default().estimate(DIMS, &lines);
        assert_eq!(target, SteeringTarget::Detected(90));
    }

    #[test]
    fn detected_angle_stays_in_range_for_extreme_offsets() {
        let lines = [line(LaneSide::Left, 1280, -640)];
        let deg = SteeringEstimator::default().estimate(DIMS, &lines).degrees();
        assert!((0..=180).contains(&deg), "deg={deg}");
    }
}
