#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod steering;

// Stage modules, usable on their own for tools and experiments.
pub mod angle;
pub mod filter;
pub mod lanes;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: controller + results.
pub use crate::controller::{
    ControllerParams, FrameOutcome, FrameReport, LaneController, NoActuator, SteeringActuator,
};
pub use crate::error::{LaneError, Result};
pub use crate::image::{ChannelOrder, Frame, FrameDims};
pub use crate::steering::SteeringTarget;

// Per-frame diagnostics.
pub use crate::diagnostics::{PipelineTrace, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_follower::prelude::*;
///
/// # fn main() -> lane_follower::Result<()> {
/// let (w, h) = (640u32, 480u32);
/// let bgr = vec![0u8; (w * h * 3) as usize];
/// let frame = Frame::from_raw(w, h, 3, bgr, ChannelOrder::Bgr)?;
///
/// let mut controller = LaneController::new(ControllerParams::default());
/// let outcome = controller.process(&frame)?;
/// println!(
///     "target={} steering={} lanes={}",
///     outcome.target.degrees(),
///     outcome.steering_angle,
///     outcome.lane_lines.len()
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ChannelOrder, Frame};
    pub use crate::{ControllerParams, LaneController, SteeringActuator, SteeringTarget};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::filter::{FilterParams, FilterStages, FrameFilter, RegionOfInterest};
    pub use crate::lanes::{FitLine, LaneFitParams, LaneFits, LaneFitter, LaneLine, LaneSide};
    pub use crate::segments::{HoughParams, LineSegment, SegmentDetector};
    pub use crate::steering::{
        EstimatorParams, StabilizerParams, SteeringEstimator, SteeringStabilizer,
    };
}
