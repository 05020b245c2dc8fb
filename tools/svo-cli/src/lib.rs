pub mod check;
pub mod config;
pub mod logging;
pub mod report;

pub use config::{open_categorizer, SourceArgs};
pub use logging::init_tracing;
