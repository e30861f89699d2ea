//! Core modules for Luggage Pin

pub mod generator;
pub mod sanitize;
pub mod api;

pub use generator::{CombinationGenerator, most_likely};
pub use sanitize::InputSanitizer;
pub use api::{create_router, run_server};
