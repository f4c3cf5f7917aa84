mod common;

use common::synthetic_image::{
    right_lane_frame, two_lane_frame, uniform_frame, vertical_band_frame, ROAD,
};
use lane_follower::lanes::LaneSide;
use lane_follower::stages::{FilterParams, FrameFilter};
use lane_follower::steering::NO_DETECTION_SENTINEL;
use lane_follower::{
    ChannelOrder, ControllerParams, Frame, LaneController, LaneError, SteeringActuator,
    SteeringTarget,
};

#[derive(Debug, Default)]
struct RecordingActuator {
    commands: Vec<i32>,
}

impl SteeringActuator for RecordingActuator {
    fn turn(&mut self, angle_deg: i32) {
        self.commands.push(angle_deg);
    }
}

fn recording_controller() -> LaneController<RecordingActuator> {
    LaneController::with_actuator(ControllerParams::default(), RecordingActuator::default())
}

#[test]
fn empty_road_keeps_previous_angle() {
    let frame = uniform_frame(640, 480, ROAD);
    let mut controller = recording_controller();

    let outcome = controller.process(&frame).expect("frame processed");

    assert!(outcome.segments.is_empty());
    assert!(outcome.lane_lines.is_empty());
    assert_eq!(outcome.target, SteeringTarget::NoDetection);
    assert_eq!(outcome.target.degrees(), NO_DETECTION_SENTINEL);
    assert_eq!(outcome.steering_angle, 90);
    assert_eq!(controller.current_angle(), 90);
    assert_eq!(outcome.annotated, frame);
    assert!(controller.actuator().commands.is_empty());
}

#[test]
fn two_lane_frame_steers_near_straight() {
    let frame = two_lane_frame();
    let mut controller = recording_controller();

    let outcome = controller.process(&frame).expect("frame processed");

    assert!(!outcome.segments.is_empty());
    assert_eq!(
        outcome.lane_lines.len(),
        2,
        "expected two lane lines, got {:?}",
        outcome.lane_lines
    );
    assert_eq!(outcome.lane_lines[0].side, LaneSide::Left);
    assert_eq!(outcome.lane_lines[1].side, LaneSide::Right);
    for line in &outcome.lane_lines {
        assert_eq!(line.segment.y1, 480);
        assert_eq!(line.segment.y2, 240);
    }

    let target = outcome.target.angle().expect("lanes detected");
    assert!(
        (85..=100).contains(&target),
        "target angle {target} is not near straight"
    );
    assert!((85..=95).contains(&outcome.steering_angle));
    assert_eq!(controller.current_angle(), outcome.steering_angle);
    assert_eq!(controller.actuator().commands, vec![outcome.steering_angle]);
    assert_ne!(outcome.annotated, frame);
    assert!(outcome.trace.edge_pixels > 0);
    assert!(outcome.trace.timings.total_ms >= 0.0);
}

#[test]
fn single_lane_is_rate_limited_to_one_degree() {
    let frame = right_lane_frame();
    let mut controller = recording_controller();

    let outcome = controller.process(&frame).expect("frame processed");

    assert_eq!(outcome.lane_lines.len(), 1);
    assert_eq!(outcome.lane_lines[0].side, LaneSide::Right);
    let target = outcome.target.angle().expect("lane detected");
    assert!(target < 70, "right lane alone should steer left, got {target}");
    assert_eq!(outcome.steering_angle, 89);

    let second = controller.process(&frame).expect("frame processed");
    assert_eq!(second.steering_angle, 88);
    assert_eq!(controller.actuator().commands, vec![89, 88]);
}

#[test]
fn lost_lanes_hold_last_command() {
    let mut controller = recording_controller();
    let detected = controller.process(&right_lane_frame()).expect("frame processed");
    assert_eq!(detected.steering_angle, 89);

    let lost = controller
        .process(&uniform_frame(640, 480, ROAD))
        .expect("frame processed");
    assert!(!lost.is_detected());
    assert_eq!(lost.steering_angle, 89);
    assert_eq!(controller.actuator().commands, vec![89]);
}

#[test]
fn mismatched_frame_size_is_rejected_without_state_change() {
    let mut controller = recording_controller();
    controller.process(&right_lane_frame()).expect("frame processed");
    let dims = controller.session_dims().expect("session started");

    let err = controller
        .process(&uniform_frame(320, 240, ROAD))
        .expect_err("size change must fail");
    assert!(matches!(err, LaneError::InvalidFrame(_)));
    assert_eq!(controller.session_dims(), Some(dims));
    assert_eq!(controller.current_angle(), 89);
    assert_eq!(controller.frames_processed(), 1);
}

#[test]
fn shutdown_centers_the_wheels() {
    let mut controller = recording_controller();
    controller.process(&right_lane_frame()).expect("frame processed");

    let actuator = controller.shutdown();
    assert_eq!(actuator.commands, vec![89, 90]);
}

#[test]
fn malformed_raw_frames_are_invalid() {
    let short = Frame::from_raw(4, 4, 3, vec![0; 10], ChannelOrder::Bgr);
    assert!(matches!(short, Err(LaneError::InvalidFrame(_))));

    let gray = Frame::from_raw(4, 4, 1, vec![0; 16], ChannelOrder::Rgb);
    assert!(matches!(gray, Err(LaneError::InvalidFrame(_))));

    let empty = Frame::from_raw(0, 4, 3, Vec::new(), ChannelOrder::Rgb);
    assert!(matches!(empty, Err(LaneError::InvalidFrame(_))));
}

#[test]
fn bgr_frames_match_rgb_frames() {
    let rgb = two_lane_frame();
    let mut bgr_bytes = rgb.as_rgb().as_raw().clone();
    for px in bgr_bytes.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    let bgr = Frame::from_raw(640, 480, 3, bgr_bytes, ChannelOrder::Bgr).expect("valid frame");
    assert_eq!(bgr, rgb);
}

#[test]
fn edges_never_appear_above_the_region_of_interest() {
    let frame = vertical_band_frame(200, 120, 80, 120);
    let filter = FrameFilter::new(FilterParams::default());

    let stages = filter.filter_with_stages(&frame).expect("filtered");
    let unmasked_above = (0..60)
        .flat_map(|y| (0..200).map(move |x| (x, y)))
        .filter(|&(x, y)| stages.edges.is_edge(x, y))
        .count();
    assert!(unmasked_above > 0, "band edges should exist before masking");

    for y in 0..60 {
        for x in 0..200 {
            assert!(!stages.cropped.is_edge(x, y), "edge at ({x}, {y}) above ROI");
        }
    }
    assert!(stages.cropped.count() > 0);
}

#[test]
fn stage_capture_keeps_intermediate_images() {
    let params = ControllerParams {
        capture_stages: true,
        ..ControllerParams::default()
    };
    let mut controller = LaneController::new(params);
    let outcome = controller.process(&two_lane_frame()).expect("frame processed");

    let stages = outcome.trace.stages.as_ref().expect("stages captured");
    assert_eq!(stages.color_mask.dimensions(), (640, 480));
    assert_eq!(stages.cropped_edges.count(), outcome.trace.edge_pixels);

    let report = serde_json::to_value(outcome.report()).expect("serializable");
    assert_eq!(report["steeringAngle"], outcome.steering_angle);
    assert_eq!(report["trace"]["segmentCount"], outcome.segments.len());
}
