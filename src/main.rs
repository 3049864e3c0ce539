use clap::{CommandFactory, Parser};
use image::ImageReader;
use std::path::PathBuf;

use textregions::detection::{DetectorConfig, KernelSize, TextRegionDetector, annotate, preprocessing};

#[derive(Parser)]
#[command(name = "textregions")]
#[command(about = "Detect candidate text regions in scanned document images")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory for intermediate stage images
    #[arg(long, value_name = "DIR", default_value = ".")]
    debug_out: PathBuf,

    /// Skip writing intermediate stage images
    #[arg(long)]
    no_intermediates: bool,

    /// Minimum accepted contour area in square pixels
    #[arg(long, default_value_t = 700.0)]
    min_area: f64,

    /// Reject boxes taller than this fraction of their width
    #[arg(long, default_value_t = 0.9)]
    max_height_ratio: f64,

    /// Structuring element for both dilation passes (WIDTHxHEIGHT)
    #[arg(long, value_name = "WxH", default_value = "24x4")]
    merge_kernel: KernelSize,

    /// Structuring element for the erosion pass (WIDTHxHEIGHT)
    #[arg(long, value_name = "WxH", default_value = "30x9")]
    prune_kernel: KernelSize,

    /// Width of the resized working image
    #[arg(long, default_value_t = 1000)]
    width: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // A missing path is a usage error, not a failure
    let Some(image_path) = args.image_path else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if args.verbose {
        println!("Loading image: {:?}", image_path);
    }

    let img = ImageReader::open(&image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let config = DetectorConfig {
        merge_kernel: args.merge_kernel,
        prune_kernel: args.prune_kernel,
        min_area: args.min_area,
        max_height_ratio: args.max_height_ratio,
        target_width: args.width,
    };

    let resized = preprocessing::resize_to_width(&img, config.target_width);
    let resized_rgb = resized.to_rgb8();
    resized_rgb.save("test_resized.jpg")?;

    let mut detector = TextRegionDetector::with_config(config).with_verbose(args.verbose);
    if !args.no_intermediates {
        detector = detector.with_debug_output(args.debug_out);
    }

    let regions = detector.detect(&resized)?;

    let mut canvas = resized_rgb;
    annotate::draw_regions(&mut canvas, &regions);
    canvas.save("imgDrawRect.jpg")?;

    println!("\n=== Text Region Detection Results ===");
    println!("Total regions detected: {}", regions.len());

    if !regions.is_empty() && args.verbose {
        println!("\nDetected regions:");
        for (i, region) in regions.iter().enumerate() {
            let (x, y) = region.center();
            println!(
                "  Region {} at ({}, {}) - {}x{}",
                i + 1,
                x,
                y,
                region.bounding_width(),
                region.bounding_height()
            );
        }
    }

    Ok(())
}
