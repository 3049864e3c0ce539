use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::CandidateRegion;

/// Outline color for accepted regions
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw each region's four corners as a closed polygon outline on the
/// original color image. No filtering or decision logic lives here.
pub fn draw_regions(canvas: &mut RgbImage, regions: &[CandidateRegion]) {
    for region in regions {
        for i in 0..4 {
            let a = region.corners[i];
            let b = region.corners[(i + 1) % 4];
            draw_line_segment_mut(
                canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                OUTLINE_COLOR,
            );
        }
    }
}
