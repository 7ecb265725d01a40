// Re-export all types at the module root
// Files below organize them by concern

pub use source::*;
pub use trust::*;
pub use config::*;

// Module declarations
mod source;
mod trust;
mod config;
