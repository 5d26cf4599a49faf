//! Play session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timer tick period in milliseconds.
const fn default_tick_millis() -> u64 {
    1000
}

const fn default_lock_penalized() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Interval between timer ticks. Each tick removes one second.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    /// Refuse answers on a question that already holds a penalty.
    #[serde(default = "default_lock_penalized")]
    pub lock_penalized: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            lock_penalized: default_lock_penalized(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
