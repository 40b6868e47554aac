pub mod pipeline;
pub mod rating_engine;

pub use pipeline::{analyze_resume_file, RatingPipeline};
pub use rating_engine::{RatingEngine, RatingWeights};
