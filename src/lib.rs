pub mod backup;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod pipeline;
pub mod selector;

pub use error::{ModselError, Result};
