//! Lane controller: the per-frame composition root.
//!
//! Overview
//! - `FrameFilter` isolates lane-colored pixels and keeps their edges inside
//!   the region of interest.
//! - `SegmentDetector` extracts straight segments with a probabilistic Hough
//!   transform.
//! - `LaneFitter` turns segments into at most two lane lines.
//! - `SteeringEstimator` derives a target angle; `SteeringStabilizer` limits
//!   how far the commanded angle moves per frame.
//!
//! The only state carried between frames is the commanded angle (plus the
//! session frame size). `process` takes `&mut self`, so frames are handled
//! strictly one after another.
//!
//! Modules
//! - [`params`] – configuration bundling every stage's parameters.
//! - `pipeline` – the [`LaneController`] implementation.
//! - `actuator` – the steering output seam.
//! - `outcome` – per-frame results.

mod actuator;
mod outcome;
pub mod params;
mod pipeline;

pub use actuator::{NoActuator, SteeringActuator};
pub use outcome::{FrameOutcome, FrameReport};
pub use params::ControllerParams;
pub use pipeline::LaneController;
