pub mod annotate;
pub mod contours;
pub mod preprocessing;
pub mod steps;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use image::{DynamicImage, GrayImage};

use crate::models::CandidateRegion;
use crate::pipeline::Pipeline;
use steps::{DilateStep, ErodeStep, GradientStep, ThresholdStep};

/// Dimensions of a flat rectangular structuring element, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelSize {
    pub width: u32,
    pub height: u32,
}

impl KernelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for KernelSize {
    type Err = String;

    /// Parses `"WIDTHxHEIGHT"`, e.g. `"24x4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width: u32 = w.parse().map_err(|_| format!("invalid width '{w}'"))?;
        let height: u32 = h.parse().map_err(|_| format!("invalid height '{h}'"))?;
        if width == 0 || height == 0 {
            return Err("kernel dimensions must be nonzero".to_string());
        }
        Ok(Self { width, height })
    }
}

/// Tunable detection parameters. Defaults are tuned for roughly
/// 1000px-wide document scans; optimal values depend on image resolution
/// and font size.
#[derive(Clone, Debug)]
pub struct DetectorConfig {
    /// Wide, flat element used by both dilation passes; merges adjacent
    /// stroke responses into solid word/line blobs (default 24x4)
    pub merge_kernel: KernelSize,
    /// Element used by the erosion pass; wipes out structures narrower than
    /// itself, in particular near-vertical ruling lines (default 30x9)
    pub prune_kernel: KernelSize,
    /// Contours enclosing less than this many square pixels are dropped as
    /// noise (default 700.0)
    pub min_area: f64,
    /// Boxes taller than this fraction of their bounding width are dropped
    /// (default 0.9)
    pub max_height_ratio: f64,
    /// Inputs are scaled to this width before detection (default 1000)
    pub target_width: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            merge_kernel: KernelSize::new(24, 4),
            prune_kernel: KernelSize::new(30, 9),
            min_area: 700.0,
            max_height_ratio: 0.9,
            target_width: 1000,
        }
    }
}

/// Main detection pipeline orchestrator
pub struct TextRegionDetector {
    pub config: DetectorConfig,
    pub verbose: bool,
    pub debug_dir: Option<PathBuf>,
}

impl TextRegionDetector {
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            config,
            verbose: false,
            debug_dir: None,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Write each preprocessing stage's image into `dir`
    pub fn with_debug_output(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    /// Run the full detection pipeline on an image
    pub fn detect(&self, img: &DynamicImage) -> Result<Vec<CandidateRegion>> {
        if self.verbose {
            println!("Converting to grayscale...");
        }
        let gray = preprocessing::to_grayscale(img);

        let mask = self.preprocess(gray)?;

        if self.verbose {
            println!("Finding text regions...");
        }
        let regions = contours::find_text_regions(&mask, &self.config);

        if self.verbose {
            println!("Found {} candidate regions", regions.len());
        }

        Ok(regions)
    }

    /// Morphological preprocessing only; returns the binary mask fed to
    /// contour extraction (useful when tuning the kernels)
    pub fn preprocess(&self, gray: GrayImage) -> Result<GrayImage> {
        self.build_pipeline()?.run(gray)
    }

    fn build_pipeline(&self) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new()
            .with_verbose(self.verbose)
            .add_step(Box::new(GradientStep))
            .add_step(Box::new(ThresholdStep))
            .add_step(Box::new(DilateStep {
                kernel: self.config.merge_kernel,
                label: "dilation".to_string(),
            }))
            .add_step(Box::new(ErodeStep {
                kernel: self.config.prune_kernel,
            }))
            .add_step(Box::new(DilateStep {
                kernel: self.config.merge_kernel,
                label: "dilation2".to_string(),
            }));

        if let Some(dir) = &self.debug_dir {
            pipeline = pipeline.with_debug(dir.clone())?;
        }

        Ok(pipeline)
    }
}

impl Default for TextRegionDetector {
    fn default() -> Self {
        Self::new()
    }
}
