use super::{HoughParams, LineSegment};
use crate::image::EdgeMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed-point shift used while stepping along a candidate line.
const SHIFT: u32 = 16;

pub(super) struct HoughExtractor {
    width: i64,
    height: i64,
    threshold: i32,
    min_len: i64,
    max_gap: i64,
    max_lines: usize,
    num_angle: usize,
    num_rho: usize,
    trig: Vec<(f32, f32)>,
    accum: Vec<i32>,
    mask: Vec<u8>,
    points: Vec<(i64, i64)>,
    rng: StdRng,
}

impl HoughExtractor {
    pub(super) fn new(edges: &EdgeMap, params: &HoughParams) -> Self {
        let width = edges.width() as i64;
        let height = edges.height() as i64;
        let rho = if params.rho > 0.0 { params.rho } else { 1.0 };
        let theta = if params.theta_deg > 0.0 {
            params.theta_deg.to_radians()
        } else {
            1f32.to_radians()
        };
        let irho = 1.0 / rho;
        let num_angle = ((std::f32::consts::PI / theta).round() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / rho).round() as usize).max(1);
        let trig = (0..num_angle)
            .map(|n| {
                let ang = n as f32 * theta;
                (ang.cos() * irho, ang.sin() * irho)
            })
            .collect();

        let mut points = Vec::new();
        for y in 0..edges.height() {
            for x in 0..edges.width() {
                if edges.is_edge(x, y) {
                    points.push((x as i64, y as i64));
                }
            }
        }

        Self {
            width,
            height,
            threshold: params.threshold as i32,
            min_len: i64::from(params.min_line_length),
            max_gap: i64::from(params.max_line_gap),
            max_lines: params.max_lines.unwrap_or(usize::MAX),
            num_angle,
            num_rho,
            trig,
            accum: vec![0; num_angle * num_rho],
            mask: edges.as_slice().to_vec(),
            points,
            rng: StdRng::seed_from_u64(params.seed),
        }
    }

    pub(super) fn extract(mut self) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        if self.width == 0 || self.height == 0 || self.max_lines == 0 {
            return segments;
        }
        let mut remaining = self.points.len();
        while remaining > 0 {
            let pick = self.rng.gen_range(0..remaining);
            let point = self.points[pick];
            self.points.swap(pick, remaining - 1);
            remaining -= 1;

            if !self.is_set(point) {
                continue;
            }
            let Some(angle_idx) = self.vote(point) else {
                continue;
            };
            if let Some(segment) = self.trace(point, angle_idx) {
                segments.push(segment);
                if segments.len() >= self.max_lines {
                    break;
                }
            }
        }
        segments
    }

    #[inline]
    fn is_set(&self, (x, y): (i64, i64)) -> bool {
        self.mask[(y * self.width + x) as usize] != 0
    }

    #[inline]
    fn rho_index(&self, angle_idx: usize, x: i64, y: i64) -> Option<usize> {
        let (c, s) = self.trig[angle_idx];
        let r = (x as f32 * c + y as f32 * s).round() as i64 + (self.num_rho as i64 - 1) / 2;
        (0..self.num_rho as i64).contains(&r).then_some(r as usize)
    }

    /// Add the point to the accumulator; returns the best angle bin when it
    /// clears the vote threshold.
    fn vote(&mut self, (x, y): (i64, i64)) -> Option<usize> {
        let mut max_val = self.threshold - 1;
        let mut max_n = 0usize;
        for n in 0..self.num_angle {
            let Some(r) = self.rho_index(n, x, y) else {
                continue;
            };
            let cell = &mut self.accum[n * self.num_rho + r];
            *cell += 1;
            if max_val < *cell {
                max_val = *cell;
                max_n = n;
            }
        }
        (max_val >= self.threshold).then_some(max_n)
    }

    fn unvote(&mut self, x: i64, y: i64) {
        for n in 0..self.num_angle {
            if let Some(r) = self.rho_index(n, x, y) {
                self.accum[n * self.num_rho + r] -= 1;
            }
        }
    }

    /// Walk both directions along the line through `seed`, bridging gaps of at
    /// most `max_gap` pixels, then clear the walked pixels from the mask.
    fn trace(&mut self, seed: (i64, i64), angle_idx: usize) -> Option<LineSegment> {
        let (c, s) = self.trig[angle_idx];
        let a = -s;
        let b = c;
        let (mut x0, mut y0) = seed;
        let one = (1i64 << SHIFT) as f32;
        let half = 1i64 << (SHIFT - 1);

        // Step one pixel along the dominant axis, fixed-point along the other.
        let x_major = a.abs() > b.abs();
        let (dx0, dy0) = if x_major {
            let dy0 = (b * one / a.abs()).round() as i64;
            y0 = (y0 << SHIFT) + half;
            (if a > 0.0 { 1 } else { -1 }, dy0)
        } else {
            let dx0 = (a * one / b.abs()).round() as i64;
            x0 = (x0 << SHIFT) + half;
            (dx0, if b > 0.0 { 1 } else { -1 })
        };
        let to_pixel = |x: i64, y: i64| {
            if x_major {
                (x, y >> SHIFT)
            } else {
                (x >> SHIFT, y)
            }
        };

        let mut line_end = [seed; 2];
        for (k, end) in line_end.iter_mut().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (x0, y0);
            let mut gap = 0;
            loop {
                let (px, py) = to_pixel(x, y);
                if px < 0 || px >= self.width || py < 0 || py >= self.height {
                    break;
                }
                if self.is_set((px, py)) {
                    gap = 0;
                    *end = (px, py);
                } else {
                    gap += 1;
                    if gap > self.max_gap {
                        break;
                    }
                }
                x += dx;
                y += dy;
            }
        }

        let good_line = (line_end[1].0 - line_end[0].0).abs() >= self.min_len
            || (line_end[1].1 - line_end[0].1).abs() >= self.min_len;

        for (k, end) in line_end.iter().enumerate() {
            let (dx, dy) = if k == 0 { (dx0, dy0) } else { (-dx0, -dy0) };
            let (mut x, mut y) = (x0, y0);
            loop {
                let (px, py) = to_pixel(x, y);
                if px < 0 || px >= self.width || py < 0 || py >= self.height {
                    break;
                }
                if self.is_set((px, py)) {
                    if good_line {
                        self.unvote(px, py);
                    }
                    self.mask[(py * self.width + px) as usize] = 0;
                }
                if (px, py) == *end {
                    break;
                }
                x += dx;
                y += dy;
            }
        }

        good_line.then(|| {
            LineSegment::new(
                line_end[0].0 as i32,
                line_end[0].1 as i32,
                line_end[1].0 as i32,
                line_end[1].1 as i32,
            )
        })
    }
}
