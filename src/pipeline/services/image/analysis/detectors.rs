use super::core::{
    FaceBox, FaceDetector, FaceLandmarks, ImageRegion, LandmarkDetector, LandmarkPoint,
    CHEEK_POLYGON, CROWN, LEFT_IRIS, LEFT_TEMPLE, RIGHT_TEMPLE,
};
use image::RgbImage;
use std::collections::VecDeque;
use std::sync::Arc;

/// Face detector based on skin-colored cells - groups connected skin cells into
/// candidate boxes and keeps the ones shaped like a face
pub struct SkinToneFaceDetector {
    cell_size: u32,
    min_skin_fraction: f32,
    min_cells: usize,
    min_fill_ratio: f32,
}

impl Default for SkinToneFaceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinToneFaceDetector {
    pub fn new() -> Self {
        Self {
            cell_size: 8,
            min_skin_fraction: 0.5,
            min_cells: 6,
            min_fill_ratio: 0.45,
        }
    }

    /// RGB skin rule for daylight illumination.
    pub fn is_skin(pixel: [u8; 3]) -> bool {
        let [r, g, b] = pixel;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        r > 95 && g > 40 && b > 20 && max - min > 15 && r.abs_diff(g) > 15 && r > g && r > b
    }

    fn skin_grid(&self, image: &RgbImage) -> (Vec<bool>, u32, u32) {
        let (width, height) = image.dimensions();
        let cols = width / self.cell_size;
        let rows = height / self.cell_size;
        let mut grid = vec![false; (cols * rows) as usize];

        for row in 0..rows {
            for col in 0..cols {
                let region = ImageRegion::new(
                    col * self.cell_size,
                    row * self.cell_size,
                    self.cell_size,
                    self.cell_size,
                );
                let pixels = region.pixels(image);
                let skin = pixels.iter().filter(|p| Self::is_skin(**p)).count();
                grid[(row * cols + col) as usize] =
                    skin as f32 >= pixels.len() as f32 * self.min_skin_fraction;
            }
        }

        (grid, cols, rows)
    }
}

impl FaceDetector for SkinToneFaceDetector {
    fn detect_faces(&self, image: &RgbImage) -> Vec<FaceBox> {
        let (grid, cols, rows) = self.skin_grid(image);
        let mut visited = vec![false; grid.len()];
        let mut faces = Vec::new();

        for start in 0..grid.len() {
            if !grid[start] || visited[start] {
                continue;
            }

            // flood fill one 4-connected component
            let mut queue = VecDeque::from([start]);
            visited[start] = true;
            let (mut min_col, mut max_col) = (u32::MAX, 0);
            let (mut min_row, mut max_row) = (u32::MAX, 0);
            let mut cells = 0usize;

            while let Some(index) = queue.pop_front() {
                let col = index as u32 % cols;
                let row = index as u32 / cols;
                cells += 1;
                min_col = min_col.min(col);
                max_col = max_col.max(col);
                min_row = min_row.min(row);
                max_row = max_row.max(row);

                let neighbours = [
                    (col > 0).then(|| index - 1),
                    (col + 1 < cols).then(|| index + 1),
                    (row > 0).then(|| index - cols as usize),
                    (row + 1 < rows).then(|| index + cols as usize),
                ];
                for next in neighbours.into_iter().flatten() {
                    if grid[next] && !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }

            if cells < self.min_cells {
                continue;
            }
            let box_cols = max_col - min_col + 1;
            let box_rows = max_row - min_row + 1;
            let fill = cells as f32 / (box_cols * box_rows) as f32;
            let aspect = box_rows as f32 / box_cols as f32;
            if fill < self.min_fill_ratio || !(0.6..=2.2).contains(&aspect) {
                continue;
            }

            faces.push(FaceBox {
                region: ImageRegion::new(
                    min_col * self.cell_size,
                    min_row * self.cell_size,
                    box_cols * self.cell_size,
                    box_rows * self.cell_size,
                ),
                confidence: fill.min(1.0),
            });
        }

        faces.sort_by_key(|face| std::cmp::Reverse(face.region.area()));
        faces
    }

    fn name(&self) -> &'static str {
        "SkinToneFaceDetector"
    }
}

/// Proportional landmark template relative to a face box, (x, y) in box units.
const TEMPLATE: [(usize, f64, f64); 9] = [
    (CROWN, 0.50, 0.02),
    (LEFT_TEMPLE, 0.02, 0.32),
    (RIGHT_TEMPLE, 0.98, 0.32),
    (LEFT_IRIS, 0.32, 0.40),
    (CHEEK_POLYGON[0], 0.20, 0.52),
    (CHEEK_POLYGON[1], 0.40, 0.52),
    (CHEEK_POLYGON[2], 0.40, 0.68),
    (CHEEK_POLYGON[3], 0.20, 0.68),
    // chin
    (152, 0.50, 0.98),
];

/// Landmark detector that lays a fixed template over the largest detected face
pub struct TemplateLandmarkDetector {
    faces: Arc<dyn FaceDetector>,
}

impl TemplateLandmarkDetector {
    pub fn new(faces: Arc<dyn FaceDetector>) -> Self {
        Self { faces }
    }
}

impl LandmarkDetector for TemplateLandmarkDetector {
    fn detect_landmarks(&self, image: &RgbImage) -> Option<FaceLandmarks> {
        let (width, height) = image.dimensions();
        let face = self
            .faces
            .detect_faces(image)
            .into_iter()
            .max_by_key(|face| face.region.area())?;

        let region = face.region;
        let mut landmarks = FaceLandmarks::new();
        for (index, u, v) in TEMPLATE {
            landmarks.insert(
                index,
                LandmarkPoint {
                    x: (f64::from(region.x) + u * f64::from(region.width)) / f64::from(width),
                    y: (f64::from(region.y) + v * f64::from(region.height)) / f64::from(height),
                },
            );
        }
        Some(landmarks)
    }

    fn name(&self) -> &'static str {
        "TemplateLandmarkDetector"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    pub(crate) const SKIN: Rgb<u8> = Rgb([224, 172, 140]);
    pub(crate) const HAIR: Rgb<u8> = Rgb([40, 28, 22]);
    pub(crate) const BACKGROUND: Rgb<u8> = Rgb([70, 110, 160]);

    /// Blue background, dark hair band on top, skin-colored face block below it.
    pub(crate) fn portrait() -> RgbImage {
        let mut image: RgbImage = ImageBuffer::from_pixel(200, 240, BACKGROUND);
        for y in 20..60 {
            for x in 40..160 {
                image.put_pixel(x, y, HAIR);
            }
        }
        for y in 60..200 {
            for x in 56..144 {
                image.put_pixel(x, y, SKIN);
            }
            for x in 40..56 {
                image.put_pixel(x, y, HAIR);
            }
            for x in 144..160 {
                image.put_pixel(x, y, HAIR);
            }
        }
        image
    }

    #[test]
    fn skin_rule_rejects_grey_and_blue() {
        assert!(SkinToneFaceDetector::is_skin(SKIN.0));
        assert!(!SkinToneFaceDetector::is_skin([128, 128, 128]));
        assert!(!SkinToneFaceDetector::is_skin(BACKGROUND.0));
    }

    #[test]
    fn finds_the_face_block() {
        let faces = SkinToneFaceDetector::new().detect_faces(&portrait());
        assert_eq!(faces.len(), 1);
        let region = faces[0].region;
        assert!(region.contains_point(100, 120));
        assert!(!region.contains_point(100, 30));
    }

    #[test]
    fn uniform_grey_has_no_face() {
        let grey: RgbImage = ImageBuffer::from_pixel(120, 120, Rgb([128, 128, 128]));
        assert!(SkinToneFaceDetector::new().detect_faces(&grey).is_empty());
    }

    #[test]
    fn template_places_hair_landmarks_outside_the_face() {
        let image = portrait();
        let detector = TemplateLandmarkDetector::new(Arc::new(SkinToneFaceDetector::new()));
        let landmarks = detector.detect_landmarks(&image).unwrap();
        let (w, h) = image.dimensions();

        let (_, crown_y) = landmarks.pixel(CROWN, w, h).unwrap();
        let (iris_x, iris_y) = landmarks.pixel(LEFT_IRIS, w, h).unwrap();
        assert!(crown_y < 70);
        assert!((56..144).contains(&iris_x) && (60..200).contains(&iris_y));
        assert!(landmarks.len() >= CHEEK_POLYGON.len() + 4);
    }
}
