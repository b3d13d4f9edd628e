#![deny(missing_docs)]
//! A fixed capacity, array backed FIFO queue

mod config;
pub mod error;
mod queue;

pub use config::QueueConfig;
pub use error::Error;
pub use queue::{BoundedQueue, DEFAULT_CAPACITY};
