pub mod api;
pub mod config;
pub mod error;
pub mod import;
pub mod scoring;
pub mod telemetry;
pub mod validation;
