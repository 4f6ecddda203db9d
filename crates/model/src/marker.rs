use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image the rendering side should draw for a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "src", rename_all = "camelCase")]
pub enum MarkerIcon {
    /// Path of a static image shipped with the front end.
    Asset(String),
    /// Generated SVG as a `data:` URI.
    DataUri(String),
}

impl MarkerIcon {
    pub fn src(&self) -> &str {
        match self {
            Self::Asset(src) | Self::DataUri(src) => src,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Either a color name (`blue`, `green`, ...) or a `#RRGGBB` code,
    /// depending on the palette that produced it.
    pub color: String,
    pub icon: MarkerIcon,
}

impl MarkerStyle {
    pub fn new<S: Into<String>>(color: S, icon: MarkerIcon) -> Self {
        Self {
            color: color.into(),
            icon,
        }
    }
}
