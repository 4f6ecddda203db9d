use schemars::JsonSchema;
use serde::Serialize;

pub mod listing;
pub mod map_point;
pub mod marker;
pub mod recency;

use marker::MarkerStyle;
use recency::RecencyBucket;

/// A value annotated with its recency bucket and the marker derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Classified<T> {
    pub recency: RecencyBucket,
    pub marker: MarkerStyle,
    #[serde(flatten)]
    pub content: T,
}

impl<T> Classified<T> {
    pub fn new(recency: RecencyBucket, marker: MarkerStyle, content: T) -> Self {
        Self {
            recency,
            marker,
            content,
        }
    }
}
