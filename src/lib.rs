pub mod api;
pub mod completion;
pub mod config;
pub mod orchestrator;
pub mod search;
