pub mod actions;
pub mod args;
pub mod commands;
pub mod dispatch;
pub mod envelope;

mod invocation;
pub use self::invocation::Invocation;

mod start;
pub use self::start::{actions_from, start};
