//! Turns a flat list of listings into map points.
//!
//! Listings that share an exact position are gathered into one [`MapPoint`],
//! each point is classified by the age of its newest listing, and a marker
//! style is derived from that classification. Everything here is pure and
//! synchronous; the only ambient input is "today", which callers pass in
//! explicitly (see [`recency::today`] for the clock-based default).

pub mod deposit;
pub mod engine;
pub mod group;
pub mod marker;
pub mod recency;
pub mod sidebar;

pub use engine::{aggregate, classify_points};
pub use marker::MarkerPolicy;
pub use model::map_point::MapPoint;
