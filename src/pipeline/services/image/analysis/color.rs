use super::core::{ColorCluster, ColorClusterer};
use palette::white_point::D65;
use palette::{FromColor, Lab, Srgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// sRGB (0-255 per channel, fractional allowed) to CIE L*a*b* under D65.
pub fn rgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    let srgb = Srgb::new(
        (rgb[0] / 255.0) as f32,
        (rgb[1] / 255.0) as f32,
        (rgb[2] / 255.0) as f32,
    );
    let lab: Lab<D65, f32> = Lab::from_color(srgb);
    [f64::from(lab.l), f64::from(lab.a), f64::from(lab.b)]
}

/// CIE L*a*b* back to 8-bit sRGB, clipped to the gamut.
pub fn lab_to_rgb(lab: [f64; 3]) -> [u8; 3] {
    let srgb: Srgb<f32> =
        Srgb::from_color(Lab::<D65, f32>::new(lab[0] as f32, lab[1] as f32, lab[2] as f32));
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(srgb.red), channel(srgb.green), channel(srgb.blue)]
}

/// Seeded k-means with k-means++ seeding; the restart with the lowest inertia wins.
#[derive(Debug, Clone)]
pub struct KMeansClusterer {
    seed: u64,
    restarts: usize,
    max_iterations: usize,
    max_samples: usize,
}

impl Default for KMeansClusterer {
    fn default() -> Self {
        Self::new(42)
    }
}

impl KMeansClusterer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            restarts: 4,
            max_iterations: 50,
            max_samples: 4096,
        }
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts.max(1);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples.max(1);
        self
    }

    fn run(&self, points: &[[f64; 3]], k: usize, rng: &mut StdRng) -> (Vec<ColorCluster>, f64) {
        let mut centroids = plus_plus_init(points, k, rng);
        let mut assignments = vec![usize::MAX; points.len()];

        for _ in 0..self.max_iterations.max(1) {
            let mut changed = false;
            for (point, assignment) in points.iter().zip(assignments.iter_mut()) {
                let nearest = nearest_centroid(point, &centroids);
                if *assignment != nearest {
                    *assignment = nearest;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![[0.0f64; 3]; centroids.len()];
            let mut counts = vec![0usize; centroids.len()];
            for (point, &cluster) in points.iter().zip(&assignments) {
                counts[cluster] += 1;
                for channel in 0..3 {
                    sums[cluster][channel] += point[channel];
                }
            }
            for (centroid, (sum, count)) in centroids.iter_mut().zip(sums.iter().zip(&counts)) {
                // an emptied cluster keeps its previous center
                if *count > 0 {
                    *centroid = sum.map(|total| total / *count as f64);
                }
            }
        }

        let mut sizes = vec![0usize; centroids.len()];
        let mut inertia = 0.0;
        for (point, &cluster) in points.iter().zip(&assignments) {
            sizes[cluster] += 1;
            inertia += squared_distance(point, &centroids[cluster]);
        }

        let clusters = centroids
            .into_iter()
            .zip(sizes)
            .map(|(center, size)| ColorCluster { center, size })
            .collect();
        (clusters, inertia)
    }
}

impl ColorClusterer for KMeansClusterer {
    fn cluster(&self, pixels: &[[u8; 3]], k: usize) -> Vec<ColorCluster> {
        if pixels.is_empty() || k == 0 {
            return Vec::new();
        }

        // evenly strided subsample keeps large regions cheap and deterministic
        let stride = pixels.len().div_ceil(self.max_samples);
        let points: Vec<[f64; 3]> = pixels
            .iter()
            .step_by(stride)
            .map(|p| p.map(f64::from))
            .collect();
        let k = k.min(points.len());

        let mut best: Option<(Vec<ColorCluster>, f64)> = None;
        for restart in 0..self.restarts {
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(restart as u64));
            let (clusters, inertia) = self.run(&points, k, &mut rng);
            if best.as_ref().is_none_or(|(_, best_inertia)| inertia < *best_inertia) {
                best = Some((clusters, inertia));
            }
        }

        best.map(|(clusters, _)| clusters).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "KMeansClusterer"
    }
}

/// Center of the most populous cluster; the earliest cluster wins a tie.
pub fn dominant_color(
    clusterer: &dyn ColorClusterer,
    pixels: &[[u8; 3]],
    k: usize,
) -> Option<[f64; 3]> {
    clusterer
        .cluster(pixels, k)
        .into_iter()
        .fold(None, |best: Option<ColorCluster>, cluster| match best {
            Some(current) if current.size >= cluster.size => Some(current),
            _ => Some(cluster),
        })
        .map(|cluster| cluster.center)
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn nearest_centroid(point: &[f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::MAX;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}

fn plus_plus_init(points: &[[f64; 3]], k: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.random_range(0..points.len())]);
    let mut min_distances = vec![f64::MAX; points.len()];

    while centroids.len() < k {
        let last = centroids[centroids.len() - 1];
        for (point, min_distance) in points.iter().zip(min_distances.iter_mut()) {
            *min_distance = min_distance.min(squared_distance(point, &last));
        }

        let total: f64 = min_distances.iter().sum();
        if total <= 0.0 {
            // every point already sits on a centroid
            break;
        }

        let mut target = rng.random::<f64>() * total;
        let mut chosen = points.len() - 1;
        for (index, distance) in min_distances.iter().enumerate() {
            target -= distance;
            if target <= 0.0 {
                chosen = index;
                break;
            }
        }
        centroids.push(points[chosen]);
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_hit_the_lightness_extremes() {
        let white = rgb_to_lab([255.0, 255.0, 255.0]);
        let black = rgb_to_lab([0.0, 0.0, 0.0]);
        assert!((white[0] - 100.0).abs() < 0.5);
        assert!(white[1].abs() < 0.5 && white[2].abs() < 0.5);
        assert!(black[0].abs() < 0.5);
    }

    #[test]
    fn lab_round_trip_stays_close() {
        let rgb = [224u8, 172, 140];
        let lab = rgb_to_lab(rgb.map(f64::from));
        let back = lab_to_rgb(lab);
        for channel in 0..3 {
            assert!(rgb[channel].abs_diff(back[channel]) <= 1);
        }
    }

    fn two_tone(dominant: usize, minor: usize) -> Vec<[u8; 3]> {
        let mut pixels = vec![[200u8, 150, 120]; dominant];
        pixels.extend(std::iter::repeat_n([30u8, 20, 15], minor));
        pixels
    }

    #[test]
    fn dominant_color_is_the_largest_cluster() {
        let clusterer = KMeansClusterer::new(42);
        let center = dominant_color(&clusterer, &two_tone(300, 100), 3).unwrap();
        assert!((center[0] - 200.0).abs() < 1e-9);
        assert!((center[2] - 120.0).abs() < 1e-9);
    }

    #[test]
    fn clustering_is_deterministic() {
        let mut pixels = two_tone(500, 250);
        pixels.extend((0..250u32).map(|i| [(i % 256) as u8, 90, (255 - i % 256) as u8]));
        let clusterer = KMeansClusterer::new(42);
        assert_eq!(clusterer.cluster(&pixels, 3), clusterer.cluster(&pixels, 3));
    }

    #[test]
    fn fewer_points_than_clusters() {
        let clusters = KMeansClusterer::default().cluster(&[[10, 10, 10]], 3);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size, 1);
        assert!(KMeansClusterer::default().cluster(&[], 3).is_empty());
    }
}
