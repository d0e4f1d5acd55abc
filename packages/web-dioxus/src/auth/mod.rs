//! Authentication state for the component tree

mod context;

pub use context::*;
