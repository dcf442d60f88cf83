//! Platform glue shared by the reader: executors, timers, share targets, formatting.

pub mod format;
pub mod platform;
pub mod share;
pub mod timing;
