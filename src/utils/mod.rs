//! Internal arithmetic helpers shared by the analyzers.

pub mod math;
