//! Binary single-channel edge map in row-major layout.
use super::FrameDims;
use image::{GrayImage, Luma};

/// Edge pixels are stored as `1`, everything else as `0`.
///
/// The buffer always holds exactly `w * h` entries; fields stay private so
/// that cannot drift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl EdgeMap {
    /// Zero-initialized map of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Build from an 8-bit image where any non-zero pixel is an edge.
    ///
    /// `None` when `gray` does not hold exactly `w * h` pixels.
    pub fn from_gray(w: usize, h: usize, gray: &[u8]) -> Option<Self> {
        if gray.len() != w * h {
            return None;
        }
        Some(Self {
            w,
            h,
            data: gray.iter().map(|&v| u8::from(v != 0)).collect(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn dims(&self) -> FrameDims {
        FrameDims::new(self.w as u32, self.h as u32)
    }

    /// Row-major 0/1 values.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, edge: bool) {
        let i = self.idx(x, y);
        self.data[i] = u8::from(edge);
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Render as an 8-bit image (edges at 255) for inspection.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            Luma([if self.is_edge(x as usize, y as usize) { 255 } else { 0 }])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_gray_rejects_wrong_length() {
        assert!(EdgeMap::from_gray(4, 3, &[0; 11]).is_none());
        assert!(EdgeMap::from_gray(4, 3, &[0; 13]).is_none());
        let map = EdgeMap::from_gray(2, 2, &[0, 7, 255, 0]).expect("valid size");
        assert_eq!(map.as_slice(), &[0, 1, 1, 0]);
    }

    #[test]
    fn gray_rendering_matches_edges() {
        let mut map = EdgeMap::new(3, 2);
        map.set(2, 1, true);
        let img = map.to_gray_image();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [255]);
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(map.row(1), &[0, 0, 1]);
    }
}
