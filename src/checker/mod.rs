mod engine;
mod policy;
mod report;

pub use engine::{DiscardSink, Engine, OutcomeSink};
pub use policy::{ExitSignal, decide};
pub use report::{RunReport, RunVerdict};
