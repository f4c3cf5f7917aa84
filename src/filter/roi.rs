//! Polygonal region of interest expressed in frame-relative coordinates.
use crate::image::EdgeMap;
use serde::{Deserialize, Serialize};

/// Polygon with vertices given as fractions of frame width/height.
///
/// A pixel belongs to the region when its centre lies inside the polygon
/// (even-odd rule), so an edge at `y = 0.5 * height` keeps row `height / 2`
/// and drops every row above it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    pub vertices: Vec<[f32; 2]>,
}

impl Default for RegionOfInterest {
    /// Bottom half of the frame.
    fn default() -> Self {
        Self {
            vertices: vec![[0.0, 0.5], [1.0, 0.5], [1.0, 1.0], [0.0, 1.0]],
        }
    }
}

impl RegionOfInterest {
    /// Binary mask (1 inside) of size `w × h`.
    pub fn mask(&self, w: usize, h: usize) -> EdgeMap {
        let mut mask = EdgeMap::new(w, h);
        let polygon = self.scaled(w, h);
        let mut crossings = Vec::with_capacity(polygon.len());
        for y in 0..h {
            row_crossings(&polygon, y as f32 + 0.5, &mut crossings);
            for x in 0..w {
                let xc = x as f32 + 0.5;
                let left = crossings.iter().filter(|&&cx| cx < xc).count();
                if left % 2 == 1 {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Zero every edge pixel outside the region.
    pub fn apply(&self, edges: &mut EdgeMap) {
        let (w, h) = (edges.width(), edges.height());
        let mask = self.mask(w, h);
        for y in 0..h {
            for x in 0..w {
                if !mask.is_edge(x, y) {
                    edges.set(x, y, false);
                }
            }
        }
    }

    fn scaled(&self, w: usize, h: usize) -> Vec<[f32; 2]> {
        self.vertices
            .iter()
            .map(|v| [v[0] * w as f32, v[1] * h as f32])
            .collect()
    }
}

fn row_crossings(polygon: &[[f32; 2]], yc: f32, out: &mut Vec<f32>) {
    out.clear();
    let n = polygon.len();
    if n < 3 {
        return;
    }
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if (a[1] <= yc) != (b[1] <= yc) {
            let t = (yc - a[1]) / (b[1] - a[1]);
            out.push(a[0] + t * (b[0] - a[0]));
        }
    }
}
