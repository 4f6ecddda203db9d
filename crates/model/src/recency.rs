use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How fresh the newest activity at a location is, relative to "today".
///
/// Variants are ordered from freshest to oldest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecencyBucket {
    /// Registered today or yesterday.
    Recent,
    /// Two to seven days old.
    WithinWeek,
    /// Eight to fourteen days old.
    WithinTwoWeeks,
    /// Older than fourteen days, in the future, or undated.
    Stale,
}

impl RecencyBucket {
    pub const ALL: [RecencyBucket; 4] = [
        Self::Recent,
        Self::WithinWeek,
        Self::WithinTwoWeeks,
        Self::Stale,
    ];
}
