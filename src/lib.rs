pub mod detection;
pub mod models;
pub mod pipeline;

pub use detection::{DetectorConfig, KernelSize, TextRegionDetector};
pub use models::CandidateRegion;
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineStep};
