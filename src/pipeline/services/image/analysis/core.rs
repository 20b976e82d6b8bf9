use image::RgbImage;
use std::collections::BTreeMap;

// Landmark indices on the 478-point face mesh.
pub const CHEEK_POLYGON: [usize; 4] = [116, 117, 118, 100];
pub const LEFT_IRIS: usize = 468;
pub const LEFT_TEMPLE: usize = 234;
pub const RIGHT_TEMPLE: usize = 454;
pub const CROWN: usize = 10;

/// Rectangular region of an image for focused analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` centred on the image, clipped to it.
    pub fn centered(width: u32, height: u32, size: u32) -> Self {
        let w = size.min(width);
        let h = size.min(height);
        Self::new((width - w) / 2, (height - h) / 2, w, h)
    }

    /// Region spanning two corners given in signed pixel space, clipped to the image.
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64, width: u32, height: u32) -> Self {
        let clamp_x = |v: i64| v.clamp(0, i64::from(width)) as u32;
        let clamp_y = |v: i64| v.clamp(0, i64::from(height)) as u32;
        let (left, right) = (clamp_x(x0.min(x1)), clamp_x(x0.max(x1)));
        let (top, bottom) = (clamp_y(y0.min(y1)), clamp_y(y0.max(y1)));
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Pixels of `image` inside this region, row by row.
    pub fn pixels(&self, image: &RgbImage) -> Vec<[u8; 3]> {
        let (width, height) = image.dimensions();
        let x_end = (self.x + self.width).min(width);
        let y_end = (self.y + self.height).min(height);
        let mut pixels = Vec::with_capacity(self.area() as usize);
        for y in self.y.min(y_end)..y_end {
            for x in self.x.min(x_end)..x_end {
                pixels.push(image.get_pixel(x, y).0);
            }
        }
        pixels
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub region: ImageRegion,
    pub confidence: f32,
}

/// Landmark position normalized to the image, both axes in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceLandmarks {
    points: BTreeMap<usize, LandmarkPoint>,
}

impl FaceLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, point: LandmarkPoint) {
        self.points.insert(index, point);
    }

    pub fn get(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Landmark in pixel coordinates of a `width` x `height` image.
    pub fn pixel(&self, index: usize, width: u32, height: u32) -> Option<(i64, i64)> {
        self.get(index).map(|point| {
            (
                (point.x * f64::from(width)).round() as i64,
                (point.y * f64::from(height)).round() as i64,
            )
        })
    }
}

/// One cluster from a color clustering pass, center in RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCluster {
    pub center: [f64; 3],
    pub size: usize,
}

/// Locates faces in an image
pub trait FaceDetector: Send + Sync {
    fn detect_faces(&self, image: &RgbImage) -> Vec<FaceBox>;
    fn name(&self) -> &'static str;
}

/// Places facial landmarks; `None` when no face is present
pub trait LandmarkDetector: Send + Sync {
    fn detect_landmarks(&self, image: &RgbImage) -> Option<FaceLandmarks>;
    fn name(&self) -> &'static str;
}

/// Groups pixels into `k` color clusters
pub trait ColorClusterer: Send + Sync {
    fn cluster(&self, pixels: &[[u8; 3]], k: usize) -> Vec<ColorCluster>;
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn corners_are_clipped_to_the_image() {
        let region = ImageRegion::from_corners(-10, 5, 30, -4, 20, 20);
        assert_eq!(region, ImageRegion::new(0, 0, 20, 5));
        assert!(ImageRegion::from_corners(25, 25, 40, 40, 20, 20).is_empty());
    }

    #[test]
    fn centered_region_fits_small_images() {
        assert_eq!(ImageRegion::centered(100, 60, 40), ImageRegion::new(30, 10, 40, 40));
        assert_eq!(ImageRegion::centered(30, 20, 40), ImageRegion::new(0, 0, 30, 20));
    }

    #[test]
    fn region_pixels_read_row_major() {
        let mut image: RgbImage = ImageBuffer::from_pixel(4, 4, Rgb([0, 0, 0]));
        image.put_pixel(2, 1, Rgb([9, 9, 9]));
        let pixels = ImageRegion::new(1, 1, 2, 2).pixels(&image);
        assert_eq!(pixels.len(), 4);
        assert_eq!(pixels[1], [9, 9, 9]);
    }

    #[test]
    fn landmarks_scale_to_pixels() {
        let mut landmarks = FaceLandmarks::new();
        landmarks.insert(CROWN, LandmarkPoint { x: 0.5, y: 0.25 });
        assert_eq!(landmarks.pixel(CROWN, 200, 100), Some((100, 25)));
        assert_eq!(landmarks.pixel(LEFT_IRIS, 200, 100), None);
    }
}
