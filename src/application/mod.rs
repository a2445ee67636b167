pub mod pipeline;

pub use pipeline::{Applied, Pipeline, PipelineError};
