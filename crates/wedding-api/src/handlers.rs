//! Request handlers.

pub mod content;

pub use content::*;
