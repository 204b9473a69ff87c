//! CLI library components for address verification.

pub mod input;
pub mod logging;
pub mod pipeline;
pub mod report;
