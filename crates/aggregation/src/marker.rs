//! Marker color and icon for a map point.
//!
//! Two palettes exist. [`MarkerPolicy::Bucket`] (the default) maps each
//! [`RecencyBucket`] to a named color and a static image:
//!
//! | bucket           | color     | icon                   |
//! |------------------|-----------|------------------------|
//! | `Recent`         | `blue`    | `/markers/blue.png`    |
//! | `WithinWeek`     | `green`   | `/markers/green.png`   |
//! | `WithinTwoWeeks` | `yellow`  | `/markers/yellow.png`  |
//! | `Stale`          | `default` | `/markers/default.png` |
//!
//! [`MarkerPolicy::Gradient`] ignores the buckets and picks one of six colors
//! from the age in whole days (see [`gradient_color`]), drawn as a generated
//! SVG circle. Both palettes put future dates at the stale end, so a point's
//! marker never looks fresher than its bucket.

use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use model::{
    marker::{MarkerIcon, MarkerStyle},
    recency::RecencyBucket,
};
use utility::date::days_between;

use crate::recency::classify;

pub const ICON_SIZE_PX: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    #[default]
    Bucket,
    Gradient,
}

impl MarkerPolicy {
    /// Style for a point whose newest listing was registered on `latest`.
    pub fn style(self, latest: NaiveDate, today: NaiveDate) -> MarkerStyle {
        match self {
            Self::Bucket => bucket_style(classify(latest, today)),
            Self::Gradient => gradient_style(days_between(today, latest)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown marker policy {:?}, expected \"bucket\" or \"gradient\"",
            self.0
        )
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for MarkerPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bucket" => Ok(Self::Bucket),
            "gradient" => Ok(Self::Gradient),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

pub fn bucket_color(bucket: RecencyBucket) -> &'static str {
    match bucket {
        RecencyBucket::Recent => "blue",
        RecencyBucket::WithinWeek => "green",
        RecencyBucket::WithinTwoWeeks => "yellow",
        RecencyBucket::Stale => "default",
    }
}

pub fn bucket_style(bucket: RecencyBucket) -> MarkerStyle {
    let color = bucket_color(bucket);
    MarkerStyle::new(color, MarkerIcon::Asset(format!("/markers/{}.png", color)))
}

/// Color for a listing that is `days` whole days old.
///
/// Anything beyond two weeks is gold, and so is anything dated in the future.
pub fn gradient_color(days: i64) -> &'static str {
    match days {
        0 => "#1E90FF",
        1 => "#00BFFF",
        2..=3 => "#00FF7F",
        4..=7 => "#32CD32",
        8..=14 => "#ADFF2F",
        _ => "#FFD700",
    }
}

pub fn gradient_style(days: i64) -> MarkerStyle {
    let color = gradient_color(days);
    MarkerStyle::new(color, svg_icon(color))
}

/// A filled circle with a white outline, as a base64 `data:` URI.
pub fn svg_icon(color: &str) -> MarkerIcon {
    let size = ICON_SIZE_PX;
    let center = size / 2;
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><circle cx="{center}" cy="{center}" r="{radius}" fill="{color}" stroke="#FFFFFF" stroke-width="2"/></svg>"##,
        radius = center - 2,
    );
    MarkerIcon::DataUri(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(svg)
    ))
}
