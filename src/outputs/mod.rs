//! Output implementations

pub mod console;
pub mod multi;
pub mod stream;

pub use console::ConsoleOutput;
pub use multi::MultiOutput;
pub use stream::{StreamOutput, LINE_ENDING};

pub use crate::core::{DynOutput, Output};
