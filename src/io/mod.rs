/// Batch reader and result writer for the text protocol
pub mod batch;
/// Independent verification of a results file against its queries
pub mod checker;
/// Command-line interface and batch orchestration
pub mod cli;
/// Domain limits and configuration defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Seeded generation of query batches
pub mod generator;
/// Progress display for large batches
pub mod progress;
/// Strict line-level validation of query files
pub mod validator;
