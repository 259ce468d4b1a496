pub mod error;
pub mod event;
pub mod git;
pub mod inputs;
pub mod manifest;
pub mod orchestrate;
pub mod resolver;
pub mod rules;
pub mod ui;
pub mod version;

pub use error::{BumpError, Result};
