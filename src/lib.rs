//! A tiny J-Ada command interpreter with a feedback slot.
//!
//! Each line of input is classified into a [`Command`], executed against an
//! [`ExecutionContext`] of variable bindings, and its result is recorded in a
//! [`FeedbackStore`]. Only two keywords are recognised, `print` and `define`;
//! everything else yields a fixed diagnostic.
//!
//! The main entry point is [`LearningVm`], which owns one context and one
//! feedback store. The free functions [`classify`], [`execute`] and
//! [`process_and_learn`] expose the individual steps.

mod classifier;
pub mod command;
pub mod context;
pub mod corpus;
pub mod error;
mod executor;
pub mod feedback;
pub mod repl;
mod vm;

pub use classifier::classify;
pub use command::Command;
pub use context::ExecutionContext;
pub use corpus::Corpus;
pub use error::ExecutionError;
pub use executor::{UNKNOWN_COMMAND_RESPONSE, execute};
pub use feedback::FeedbackStore;
pub use vm::{LearningVm, process_and_learn};
