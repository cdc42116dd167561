pub mod orchestrator;
pub mod report;
mod task;

pub use orchestrator::MountOrchestrator;
pub use report::{MountOutcome, MountReport};
