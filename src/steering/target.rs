use serde::{Deserialize, Serialize};

/// Heading that keeps the wheels straight.
pub const STRAIGHT_AHEAD_DEG: i32 = 90;

/// Integer stand-in for [`SteeringTarget::NoDetection`] when a plain angle is
/// required. Outside the commandable `[0, 180]` range.
pub const NO_DETECTION_SENTINEL: i32 = -90;

/// Lowest and highest commandable steering angles.
pub const STEERING_RANGE_DEG: (i32, i32) = (0, 180);

/// Outcome of steering estimation for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "degrees", rename_all = "camelCase")]
pub enum SteeringTarget {
    /// Target angle in degrees, `90` straight, lower values steer left.
    Detected(i32),
    /// No lane line visible; the previous command should be held.
    NoDetection,
}

impl SteeringTarget {
    /// Build a detected target, clamped into the commandable range.
    pub fn detected(degrees: i32) -> Self {
        Self::Detected(degrees.clamp(STEERING_RANGE_DEG.0, STEERING_RANGE_DEG.1))
    }

    pub fn angle(&self) -> Option<i32> {
        match *self {
            Self::Detected(deg) => Some(deg),
            Self::NoDetection => None,
        }
    }

    /// Integer form with [`NO_DETECTION_SENTINEL`] for the no-detection case.
    pub fn degrees(&self) -> i32 {
        self.angle().unwrap_or(NO_DETECTION_SENTINEL)
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_detection_maps_to_sentinel() {
        assert_eq!(SteeringTarget::NoDetection.degrees(), -90);
        assert_eq!(SteeringTarget::NoDetection.angle(), None);
    }

    #[test]
    fn detected_is_clamped_into_range() {
        assert_eq!(SteeringTarget::detected(200), SteeringTarget::Detected(180));
        assert_eq!(SteeringTarget::detected(-5), SteeringTarget::Detected(0));
        assert_eq!(SteeringTarget::detected(93).degrees(), 93);
    }
}
