pub mod aggregate;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod parser;
pub mod render;
pub mod types;
pub mod writer;

// Application layer (pipeline) and infrastructure adapters
pub mod app;
pub mod infra;
