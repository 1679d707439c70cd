//! Shared utilities for the Agora settlement core.

pub mod logging;

pub use logging::init_tracing;
