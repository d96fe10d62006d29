/// Command-line interface and pipeline orchestration
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Progress bars for multi-step stages
pub mod progress;
/// Template image classification
pub mod template;
