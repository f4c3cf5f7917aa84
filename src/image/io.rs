//! I/O helpers for frames, edge maps and JSON reports.
//!
//! - `load_frame`: read a PNG/JPEG/etc. into an RGB `Frame`.
//! - `save_frame`: write a `Frame` to disk, format chosen by extension.
//! - `save_edge_map`: write an `EdgeMap` as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{EdgeMap, Frame};
use crate::error::{LaneError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to an RGB frame.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?.into_rgb8();
    Frame::from_rgb(img)
}

pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    frame.as_rgb().save(path)?;
    Ok(())
}

pub fn save_gray(image: &image::GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path)?;
    Ok(())
}

pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> Result<()> {
    save_gray(&edges.to_gray_image(), path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| LaneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LaneError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
