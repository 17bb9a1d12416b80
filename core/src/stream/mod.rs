pub mod block;
pub mod pipeline;
pub mod writer;

pub use block::BlockAccumulator;
pub use pipeline::{EncryptPipeline, PipelineConfig, PipelineSummary};
pub use writer::FrameWriter;
