pub mod orchestrator;
pub mod processor;
