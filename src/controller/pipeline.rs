use super::actuator::{NoActuator, SteeringActuator};
use super::outcome::FrameOutcome;
use super::params::ControllerParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    draw_heading, draw_lines, LineStyle, PipelineTrace, StageImages, TimingBreakdown,
};
use crate::error::{LaneError, Result};
use crate::filter::FrameFilter;
use crate::image::{Frame, FrameDims};
use crate::lanes::LaneFitter;
use crate::segments::SegmentDetector;
use crate::steering::{SteeringEstimator, SteeringStabilizer, STRAIGHT_AHEAD_DEG};
use log::{debug, info, warn};
use std::time::Instant;

/// Lane follower owning the steering state across frames.
pub struct LaneController<A: SteeringActuator = NoActuator> {
    params: ControllerParams,
    filter: FrameFilter,
    detector: SegmentDetector,
    fitter: LaneFitter,
    estimator: SteeringEstimator,
    stabilizer: SteeringStabilizer,
    current_angle: i32,
    session_dims: Option<FrameDims>,
    frames_processed: u64,
    actuator: A,
}

impl LaneController<NoActuator> {
    /// Controller without a steering actuator.
    pub fn new(params: ControllerParams) -> Self {
        Self::with_actuator(params, NoActuator)
    }
}

impl<A: SteeringActuator> LaneController<A> {
    pub fn with_actuator(params: ControllerParams, actuator: A) -> Self {
        info!(
            "creating lane controller, initial angle {}",
            params.initial_angle
        );
        Self {
            filter: FrameFilter::new(params.filter.clone()),
            detector: SegmentDetector::new(params.hough.clone()),
            fitter: LaneFitter::new(params.lanes.clone()),
            estimator: SteeringEstimator::new(params.estimator.clone()),
            stabilizer: SteeringStabilizer::new(params.stabilizer.clone()),
            current_angle: params.initial_angle,
            session_dims: None,
            frames_processed: 0,
            actuator,
            params,
        }
    }

    pub fn params(&self) -> &ControllerParams {
        &self.params
    }

    /// Last stabilized steering angle.
    pub fn current_angle(&self) -> i32 {
        self.current_angle
    }

    /// Frame size fixed by the first processed frame.
    pub fn session_dims(&self) -> Option<FrameDims> {
        self.session_dims
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Run the full pipeline on one frame.
    ///
    /// Errors leave the steering state untouched. A frame without lane lines
    /// is not an error: the outcome carries `SteeringTarget::NoDetection`, the
    /// previous angle is kept and the actuator is not called.
    pub fn process(&mut self, frame: &Frame) -> Result<FrameOutcome> {
        let dims = frame.dims();
        if let Some(expected) = self.session_dims {
            if expected != dims {
                return Err(LaneError::InvalidFrame(format!(
                    "frame is {}x{}, session started at {}x{}",
                    dims.width, dims.height, expected.width, expected.height
                )));
            }
        }
        debug!(
            "LaneController::process frame={} w={} h={} angle={}",
            self.frames_processed, dims.width, dims.height, self.current_angle
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let filtered = timings.time("filter", || self.filter.filter_with_stages(frame))?;
        if self.session_dims.is_none() {
            self.session_dims = Some(dims);
        }
        self.frames_processed += 1;

        let segments = timings.time("segments", || self.detector.detect(&filtered.cropped));
        let lane_fits = timings.time("lanes", || self.fitter.fit_buckets(dims, &segments));
        let lane_lines = self.fitter.lane_lines(dims, &lane_fits);
        let target = timings.time("estimate", || self.estimator.estimate(dims, &lane_lines));

        let annotated = if lane_lines.is_empty() {
            warn!("no lane lines detected, keeping steering angle {}", self.current_angle);
            frame.clone()
        } else {
            let previous = self.current_angle;
            self.current_angle =
                self.stabilizer.stabilize_target(previous, target, lane_lines.len());
            self.actuator.turn(self.current_angle);

            let (lane_style, heading_style) = (self.params.lane_style, self.params.heading_style);
            let angle = self.current_angle;
            timings.time("annotate", || {
                let with_lanes = draw_lines(frame, lane_lines.iter().map(|l| l.segment), lane_style);
                draw_heading(&with_lanes, angle, heading_style)
            })
        };

        let stages = self.params.capture_stages.then(|| StageImages {
            segments: draw_lines(frame, segments.iter().copied(), LineStyle::SEGMENT),
            lane_lines: draw_lines(
                frame,
                lane_lines.iter().map(|l| l.segment),
                self.params.lane_style,
            ),
            color_mask: filtered.color_mask.clone(),
            edges: filtered.edges.clone(),
            cropped_edges: filtered.cropped.clone(),
        });

        timings.total_ms = elapsed_ms(total_start);
        let trace = PipelineTrace {
            input: dims,
            timings,
            edge_pixels: filtered.cropped.count(),
            segment_count: segments.len(),
            lane_fits,
            stages,
        };

        Ok(FrameOutcome {
            target,
            steering_angle: self.current_angle,
            segments,
            lane_lines,
            annotated,
            trace,
        })
    }

    /// Centre the wheels and hand back the actuator.
    pub fn shutdown(mut self) -> A {
        info!(
            "stopping lane controller after {} frames, centering steering",
            self.frames_processed
        );
        self.actuator.turn(STRAIGHT_AHEAD_DEG);
        self.actuator
    }
}
