//! Error types for the application.
//!
//! Each processing stage has its own error enum so failures carry the stage
//! they came from; the run layer wraps them with `anyhow` context.

mod types;

pub use types::{InitializationError, InputError, RenderError};
