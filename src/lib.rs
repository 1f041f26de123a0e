pub mod compose;
pub mod config;
pub mod detect;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod segment;
pub mod spec;
