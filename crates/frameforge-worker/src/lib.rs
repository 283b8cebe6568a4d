// crates/frameforge-worker/src/lib.rs
//
// No egui dependency. Communicates with frameforge-ui via channels only.

pub mod worker;

pub use worker::PipelineWorker;
pub use frameforge_core::pipeline::{PipelineEvent, PipelineStage, PipelineTiming};
