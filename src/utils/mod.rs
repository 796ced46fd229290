//! Utility helpers: geometry on top of `glam`, trace timers, and per-tick profiling.

pub mod logging;
pub mod math;
pub mod profiling;

pub use math::*;
pub use profiling::StepProfiler;
