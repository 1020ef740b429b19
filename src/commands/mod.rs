//! Lifecycle commands.
//!
//! Contains the verbs (`start`, `stop`, `restart`) and the dispatcher that
//! applies them to registered services.

mod dispatcher;
mod verb;

pub use dispatcher::Dispatcher;
pub use verb::Verb;
