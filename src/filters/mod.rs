//! Filter implementations

pub mod custom;
pub mod debug_only;
pub mod threshold;

pub use custom::CustomFilter;
pub use debug_only::DebugOnlyFilter;
pub use threshold::ThresholdFilter;

pub use crate::core::Filter;
