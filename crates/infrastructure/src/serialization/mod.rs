//! JSON helpers shared by the file loaders.

mod json;

pub use json::*;
