//! Queue construction settings
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::queue::{BoundedQueue, DEFAULT_CAPACITY};

/// Settings used to construct a [`BoundedQueue`].
///
/// The capacity is signed so that a negative value coming from outside the
/// program is reported as `Error::InvalidArgument` rather than wrapping.
/// ```
/// let config = array_queue::QueueConfig::from_json(r#"{ "capacity": 4 }"#).unwrap();
/// let queue = config.build::<u32>().unwrap();
/// assert_eq!(queue.capacity(), 4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    capacity: i64,
}

impl QueueConfig {
    /// Config with a specific capacity. This is not validated until the
    /// queue is built.
    pub fn with_capacity(capacity: i64) -> Self {
        Self { capacity }
    }

    /// Parse a config from json. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("queue config capacity: {}", config.capacity);
        Ok(config)
    }

    /// The validated capacity
    pub fn capacity(&self) -> Result<usize> {
        match usize::try_from(self.capacity) {
            Ok(0) | Err(_) => Err(Error::InvalidArgument(self.capacity)),
            Ok(capacity) => Ok(capacity),
        }
    }

    /// Create an empty queue from this config
    pub fn build<T>(&self) -> Result<BoundedQueue<T>> {
        BoundedQueue::new(self.capacity()?)
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as i64,
        }
    }
}
