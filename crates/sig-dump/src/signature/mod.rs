//! Function definition records and the callback that prints them.

mod collector;
mod definition;

pub use collector::{FileFilter, SignatureCollector};
pub use definition::FunctionDefinition;
