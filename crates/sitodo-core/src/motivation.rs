//! Motivation message derived from a list's item counts.
//!
//! The message joins a volume fragment (few/many items) with a completion
//! fragment (none/some/half/all finished). Every fragment and threshold comes
//! from [`MotivationConfig`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MotivationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationConfig {
    #[serde(default = "default_empty")]
    pub empty_message: String,
    #[serde(default = "default_no_finished")]
    pub no_finished_message: String,
    #[serde(default = "default_half_finished")]
    pub half_finished_message: String,
    #[serde(default = "default_some_finished")]
    pub some_finished_message: String,
    #[serde(default = "default_all_finished")]
    pub all_finished_message: String,
    #[serde(default = "default_few_items")]
    pub few_items_message: String,
    #[serde(default = "default_many_items")]
    pub many_items_message: String,
    /// Accepted for compatibility with existing configuration files. Message
    /// selection only consults `many_items_threshold`.
    #[serde(default = "default_few_items_threshold")]
    pub few_items_threshold: usize,
    #[serde(default = "default_many_items_threshold")]
    pub many_items_threshold: usize,
}

fn default_empty() -> String {
    "Nothing to do yet. Add your first item!".to_string()
}

fn default_no_finished() -> String {
    "None of them are finished yet, time to get started!".to_string()
}

fn default_half_finished() -> String {
    "Halfway there, keep going!".to_string()
}

fn default_some_finished() -> String {
    "Some are done already, nice progress!".to_string()
}

fn default_all_finished() -> String {
    "Everything is finished, well done!".to_string()
}

fn default_few_items() -> String {
    "You only have a few items.".to_string()
}

fn default_many_items() -> String {
    "You have a lot of items.".to_string()
}

pub fn default_few_items_threshold() -> usize {
    5
}

pub fn default_many_items_threshold() -> usize {
    10
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            empty_message: default_empty(),
            no_finished_message: default_no_finished(),
            half_finished_message: default_half_finished(),
            some_finished_message: default_some_finished(),
            all_finished_message: default_all_finished(),
            few_items_message: default_few_items(),
            many_items_message: default_many_items(),
            few_items_threshold: default_few_items_threshold(),
            many_items_threshold: default_many_items_threshold(),
        }
    }
}

// ---------------------------------------------------------------------------
// MotivationMessage
// ---------------------------------------------------------------------------

/// Pure mapping from `(total, finished)` to a status string.
#[derive(Debug, Clone, Default)]
pub struct MotivationMessage {
    config: MotivationConfig,
}

impl MotivationMessage {
    pub fn new(config: MotivationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MotivationConfig {
        &self.config
    }

    /// Compute the message for a list with `total` items of which `finished`
    /// are done. Callers guarantee `finished <= total`.
    pub fn compute(&self, total: usize, finished: usize) -> String {
        debug_assert!(
            finished <= total,
            "finished ({finished}) exceeds total ({total})"
        );
        tracing::debug!(total, finished, "computing motivation message");

        let c = &self.config;
        if total == 0 {
            tracing::debug!(message = %c.empty_message, "motivation message");
            return c.empty_message.clone();
        }

        let base = if total < c.many_items_threshold {
            &c.few_items_message
        } else {
            &c.many_items_message
        };

        // First match wins: all, none, half (floor division), some.
        let qualifier = if finished == total {
            &c.all_finished_message
        } else if finished == 0 {
            &c.no_finished_message
        } else if finished < total && finished >= total / 2 {
            &c.half_finished_message
        } else {
            &c.some_finished_message
        };

        let message = format!("{base} {qualifier}");
        tracing::debug!(%message, "motivation message");
        message
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
