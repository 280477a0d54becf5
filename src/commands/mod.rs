pub mod breakdown;
pub mod config;
pub mod convert;
pub mod format;
