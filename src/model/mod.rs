mod laureate;
mod prize;

pub use laureate::*;
pub use prize::*;
