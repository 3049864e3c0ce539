use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use imageproc::gradients::horizontal_sobel;
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};

use crate::detection::KernelSize;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// First-order horizontal derivative (3x3 Sobel), saturated to the 8-bit
/// range. Negative responses clamp to zero, so only left-to-right rising
/// transitions survive.
pub fn horizontal_gradient(img: &GrayImage) -> GrayImage {
    let sobel = horizontal_sobel(img);
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([sobel.get_pixel(x, y)[0].clamp(0, 255) as u8])
    })
}

/// Binarize with a global Otsu threshold. Output samples are strictly 0 or 255.
pub fn binarize(img: &GrayImage) -> GrayImage {
    let level = otsu_level(img);
    threshold(img, level, ThresholdType::Binary)
}

/// Dilate with a flat rectangular structuring element
pub fn dilate_rect(img: &GrayImage, kernel: KernelSize) -> GrayImage {
    grayscale_dilate(img, &rect_mask(kernel))
}

/// Erode with a flat rectangular structuring element
pub fn erode_rect(img: &GrayImage, kernel: KernelSize) -> GrayImage {
    grayscale_erode(img, &rect_mask(kernel))
}

/// Flat all-foreground mask of the given size, anchored at its center
fn rect_mask(kernel: KernelSize) -> Mask {
    let shape = GrayImage::from_pixel(kernel.width, kernel.height, Luma([255u8]));
    Mask::from_image(&shape, (kernel.width / 2) as u8, (kernel.height / 2) as u8)
}

/// Resize to `target_width` while preserving aspect ratio
pub fn resize_to_width(img: &DynamicImage, target_width: u32) -> DynamicImage {
    let target_height =
        ((img.height() as u64 * target_width as u64) / img.width() as u64).max(1) as u32;
    img.resize_exact(target_width, target_height, FilterType::Lanczos3)
}
