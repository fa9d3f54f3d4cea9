//! Utility modules: JSON persistence and logging setup.

pub mod logging;
pub mod persistence;
