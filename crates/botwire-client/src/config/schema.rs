use serde::Deserialize;

use botwire_core::error::{BotWireError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    pub api: ApiSection,

    #[serde(default)]
    pub poll: PollSection,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BotWireError::Config("version must be 1".into()));
        }
        self.api.validate()?;
        self.poll.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    pub token: String,
}

impl ApiSection {
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(BotWireError::Config("api.token must not be empty".into()));
        }
        if self.base_url.is_empty() {
            return Err(BotWireError::Config("api.base_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Long-poll tuning. Ranges follow the platform's getUpdates contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollSection {
    /// Long-poll hold time in seconds. 0 means short polling.
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,

    /// Updates per batch.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Bound of the in-process update stream.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Update kinds to subscribe to; empty keeps the platform default.
    #[serde(default)]
    pub allowed_updates: Vec<String>,
}

impl Default for PollSection {
    fn default() -> Self {
        Self {
            timeout_s: default_timeout_s(),
            limit: default_limit(),
            queue_capacity: default_queue_capacity(),
            allowed_updates: Vec::new(),
        }
    }
}

impl PollSection {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_s > 90 {
            return Err(BotWireError::Config(
                "poll.timeout_s must be between 0 and 90".into(),
            ));
        }
        if !(1..=100).contains(&self.limit) {
            return Err(BotWireError::Config(
                "poll.limit must be between 1 and 100".into(),
            ));
        }
        if !(1..=65536).contains(&self.queue_capacity) {
            return Err(BotWireError::Config(
                "poll.queue_capacity must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.telegram.org".into()
}
fn default_timeout_s() -> u64 {
    50
}
fn default_limit() -> u32 {
    100
}
fn default_queue_capacity() -> usize {
    512
}
