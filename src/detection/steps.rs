use crate::detection::{KernelSize, preprocessing};
use crate::pipeline::{PipelineContext, PipelineStep};
use anyhow::Result;
use image::GrayImage;

/// Horizontal gradient extraction. Glyph strokes produce strong horizontal
/// intensity transitions; vertical ruling lines do not.
pub struct GradientStep;

impl PipelineStep for GradientStep {
    fn apply(&self, image: GrayImage, _context: &PipelineContext) -> Result<GrayImage> {
        Ok(preprocessing::horizontal_gradient(&image))
    }

    fn name(&self) -> &str {
        "gradient"
    }
}

/// Global Otsu binarization of the gradient image. Picking the threshold from
/// the histogram avoids a manual tunable that would not survive changes in
/// scan lighting.
pub struct ThresholdStep;

impl PipelineStep for ThresholdStep {
    fn apply(&self, image: GrayImage, _context: &PipelineContext) -> Result<GrayImage> {
        Ok(preprocessing::binarize(&image))
    }

    fn name(&self) -> &str {
        "binary"
    }
}

/// Dilation with a rectangular element. Used twice: first to merge adjacent
/// stroke fragments into line blobs, then to restore the blobs that survived
/// erosion.
pub struct DilateStep {
    pub kernel: KernelSize,
    pub label: String,
}

impl PipelineStep for DilateStep {
    fn apply(&self, image: GrayImage, _context: &PipelineContext) -> Result<GrayImage> {
        Ok(preprocessing::dilate_rect(&image, self.kernel))
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Erosion with a rectangular element. Structures narrower than the element
/// vanish, which strips near-vertical lines while solid line blobs persist.
pub struct ErodeStep {
    pub kernel: KernelSize,
}

impl PipelineStep for ErodeStep {
    fn apply(&self, image: GrayImage, _context: &PipelineContext) -> Result<GrayImage> {
        Ok(preprocessing::erode_rect(&image, self.kernel))
    }

    fn name(&self) -> &str {
        "erosion"
    }
}
