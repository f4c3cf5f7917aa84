//! Steering estimation and stabilization.
//!
//! Angles are integer degrees centred at [`STRAIGHT_AHEAD_DEG`]: values
//! below steer left, values above steer right. The estimator turns lane
//! geometry into a [`SteeringTarget`]; the stabilizer bounds how far the
//! commanded angle may move per frame.

mod estimator;
mod options;
mod stabilizer;
mod target;

pub use estimator::SteeringEstimator;
pub use options::{EstimatorParams, StabilizerParams};
pub use stabilizer::SteeringStabilizer;
pub use target::{SteeringTarget, NO_DETECTION_SENTINEL, STEERING_RANGE_DEG, STRAIGHT_AHEAD_DEG};
