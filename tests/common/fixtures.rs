use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::point::Point;

pub const INK: Rgb<u8> = Rgb([20, 20, 20]);
pub const PAPER: Rgb<u8> = Rgb([245, 245, 245]);

/// Uniform page of the given intensity
pub fn blank_page(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([value, value, value]),
    ))
}

/// Fill an axis-aligned rectangle, clipped to the image
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

/// A text-line-like band: a row of short vertical strokes standing in for
/// glyph stems, spaced closely enough for the merge dilation to fuse them
pub fn text_band(img: &mut RgbImage, x0: u32, y0: u32, width: u32, height: u32) {
    let mut x = x0;
    while x + 3 <= x0 + width {
        fill_rect(img, x, y0, 3, height, INK);
        x += 10;
    }
}

/// Synthetic document page: one horizontal text-like band at (100, 100)
/// spanning 200x40, and one thin 4x300 vertical line at (700, 150)
pub fn document_page() -> DynamicImage {
    let mut img = RgbImage::from_pixel(1000, 600, PAPER);
    text_band(&mut img, 100, 100, 200, 40);
    fill_rect(&mut img, 700, 150, 4, 300, INK);
    DynamicImage::ImageRgb8(img)
}

/// All-background binary mask
pub fn blank_mask(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([0u8]))
}

/// Binary mask with a single filled rectangle of foreground
pub fn rect_mask(width: u32, height: u32, x0: u32, y0: u32, w: u32, h: u32) -> GrayImage {
    let mut mask = blank_mask(width, height);
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            mask.put_pixel(x, y, Luma([255u8]));
        }
    }
    mask
}

/// Number of foreground (255) samples in a mask
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] == 255).count()
}

/// Closed axis-aligned rectangle boundary polygon with corners at
/// (x0, y0) and (x1, y1)
pub fn rect_polygon(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point<i32>> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}
