use lane_follower::image::io::{load_frame, save_edge_map, save_frame, save_gray, write_json_file};
use lane_follower::{ControllerParams, Frame, FrameReport, LaneController, SteeringActuator};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    /// Explicit list of frames, processed in order.
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// Directory of stills, processed in file-name order after `inputs`.
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Also write color mask, edges and segment overlays per frame.
    #[serde(default)]
    pub save_stages: bool,
    #[serde(default)]
    pub controller: ControllerParams,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Records commanded angles instead of driving a servo.
#[derive(Debug, Default)]
struct LoggingActuator {
    commands: Vec<i32>,
}

impl SteeringActuator for LoggingActuator {
    fn turn(&mut self, angle_deg: i32) {
        info!("steering -> {angle_deg} deg");
        self.commands.push(angle_deg);
    }
}

#[derive(Debug, Serialize)]
struct FrameEntry {
    input: PathBuf,
    annotated: PathBuf,
    #[serde(flatten)]
    report: FrameReport,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    frames: Vec<FrameEntry>,
    commands: Vec<i32>,
    final_angle: i32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let mut config = load_config(Path::new(&config_path))?;
    config.controller.capture_stages |= config.save_stages;

    let inputs = collect_inputs(&config)?;
    if inputs.is_empty() {
        return Err("No input frames configured".into());
    }
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| format!("Failed to create {}: {e}", config.output_dir.display()))?;

    let mut controller =
        LaneController::with_actuator(config.controller.clone(), LoggingActuator::default());
    let mut frames = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        let Some(frame) = load_input(input) else {
            continue;
        };
        let outcome = match controller.process(&frame) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                continue;
            }
        };

        let stem = format!("frame_{index:04}");
        let annotated = config.output_dir.join(format!("{stem}_annotated.png"));
        save_frame(&outcome.annotated, &annotated)?;
        if let Some(stages) = &outcome.trace.stages {
            let dir = &config.output_dir;
            save_gray(&stages.color_mask, &dir.join(format!("{stem}_mask.png")))?;
            save_edge_map(&stages.edges, &dir.join(format!("{stem}_edges.png")))?;
            save_edge_map(&stages.cropped_edges, &dir.join(format!("{stem}_roi.png")))?;
            save_frame(&stages.segments, &dir.join(format!("{stem}_segments.png")))?;
            save_frame(&stages.lane_lines, &dir.join(format!("{stem}_lanes.png")))?;
        }

        println!(
            "{}: lanes={} target={} steering={} ({:.2} ms)",
            input.display(),
            outcome.lane_lines.len(),
            outcome.target.degrees(),
            outcome.steering_angle,
            outcome.trace.timings.total_ms
        );
        frames.push(FrameEntry {
            input: input.clone(),
            annotated,
            report: outcome.report(),
        });
    }

    let final_angle = controller.current_angle();
    let actuator = controller.shutdown();
    let report = DemoReport {
        frames,
        commands: actuator.commands,
        final_angle,
    };
    let report_path = config.output_dir.join("report.json");
    write_json_file(&report_path, &report)?;
    println!("Saved report to {}", report_path.display());
    Ok(())
}

/// Unreadable stills are logged and skipped, like frames the controller rejects.
fn load_input(path: &Path) -> Option<Frame> {
    match load_frame(path) {
        Ok(frame) => Some(frame),
        Err(err) => {
            warn!("skipping {}: {err}", path.display());
            None
        }
    }
}

fn collect_inputs(config: &LaneDemoConfig) -> Result<Vec<PathBuf>, String> {
    let mut inputs = config.inputs.clone();
    if let Some(dir) = &config.input_dir {
        let entries = fs::read_dir(dir)
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_image_path(path))
            .collect();
        found.sort();
        inputs.extend(found);
    }
    Ok(inputs)
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp"))
        .unwrap_or(false)
}

fn usage() -> String {
    "Usage: lane_follow_demo <config.json>".to_string()
}
