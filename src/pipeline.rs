use anyhow::Result;
use image::GrayImage;
use std::path::PathBuf;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory that receives one image per executed step
    pub output_dir: PathBuf,
}

/// Context available to all pipeline steps
#[derive(Clone, Default)]
pub struct PipelineContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Consume the previous stage's grid and return this stage's output.
    /// Steps run strictly in sequence; each sees the full previous output.
    fn apply(&self, image: GrayImage, context: &PipelineContext) -> Result<GrayImage>;

    /// Stable name for this step, used for verbose output and as the
    /// filename stem of its debug image
    fn name(&self) -> &str;
}

/// Composable pipeline of image-to-image steps
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Write each step's output image into `output_dir`, creating it if needed
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&output_dir)?;
        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Run all steps in order. The input buffer and every intermediate are
    /// moved into their consuming step and dropped once superseded.
    pub fn run(&self, input: GrayImage) -> Result<GrayImage> {
        let mut image = input;

        for step in &self.steps {
            if self.context.verbose {
                println!("Running step: {}", step.name());
            }

            image = step.apply(image, &self.context)?;

            if let Some(debug_config) = &self.context.debug {
                let output_path = debug_config.output_dir.join(format!("{}.png", step.name()));
                image
                    .save(&output_path)
                    .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

                if self.context.verbose {
                    println!("  Debug: saved {}", output_path.display());
                }
            }
        }

        Ok(image)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
