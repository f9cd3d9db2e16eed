pub mod commands;
pub mod dispatch;

pub use dispatch::Dispatcher;
