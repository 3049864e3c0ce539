use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::{approximate_polygon_dp, arc_length, min_area_rect};
use imageproc::point::Point;

use crate::detection::DetectorConfig;
use crate::models::CandidateRegion;

/// Fraction of a contour's perimeter used as the polygon-simplification
/// tolerance
const SIMPLIFY_EPSILON_RATIO: f64 = 0.001;

/// Trace connected foreground components in the binary mask and keep the
/// ones shaped like horizontal text lines. Outer and hole borders are both
/// visited; output order is contour discovery order.
pub fn find_text_regions(mask: &GrayImage, config: &DetectorConfig) -> Vec<CandidateRegion> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter_map(|contour| filter_contour(&contour.points, config))
        .collect()
}

/// Apply the area and shape filters to one traced boundary polygon. Returns
/// the fitted rectangle for accepted contours, `None` for rejected ones.
pub fn filter_contour(points: &[Point<i32>], config: &DetectorConfig) -> Option<CandidateRegion> {
    if points.len() < 3 {
        return None;
    }

    // Noise-scale components go first
    if contour_area(points) < config.min_area {
        return None;
    }

    // The simplified outline is computed for parity with the tuning
    // workflow, but nothing consumes it yet.
    let epsilon = SIMPLIFY_EPSILON_RATIO * arc_length(points, true);
    let _simplified = approximate_polygon_dp(points, epsilon, true);

    let region = CandidateRegion {
        corners: min_area_rect(points),
    };

    // Keep wide, flat boxes; drop tall, narrow ones
    let width = region.bounding_width() as f64;
    let height = region.bounding_height() as f64;
    if height > config.max_height_ratio * width {
        return None;
    }

    Some(region)
}

/// Enclosed area of a closed boundary polygon (shoelace formula)
fn contour_area(points: &[Point<i32>]) -> f64 {
    let mut doubled: i64 = 0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        doubled += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    doubled.abs() as f64 / 2.0
}
