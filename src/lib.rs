pub mod config;
pub mod error;
pub mod highlight;
pub mod shell;

pub mod core;
pub mod input;
pub mod path;
pub mod process;
