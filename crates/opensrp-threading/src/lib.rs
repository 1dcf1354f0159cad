#![doc = include_str!("../README.md")]

mod thread_bound_runner;

pub use thread_bound_runner::{CallError, ThreadBoundRunner};
pub use tokio_util::sync::CancellationToken;
