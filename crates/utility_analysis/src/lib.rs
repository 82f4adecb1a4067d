//! Command-line front end for utility analysis configuration
//!
//! Loads an analysis request from YAML or JSON, validates it through
//! `utility_analysis_core` and renders the expanded configurations.

pub mod logging;
pub mod report;
pub mod request;

pub use logging::init_logging;
pub use report::{ExpansionReport, OutputFormat};
pub use request::load_request;
