//! CLI library components for the movie dataset tool.

pub mod logging;
pub mod pipeline;
