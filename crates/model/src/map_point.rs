use std::cmp::Reverse;

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use schemars::JsonSchema;
use serde::Serialize;
use utility::date;

use crate::listing::{Coordinates, ListingRecord};

/// One marker on the map: every listing registered at one exact position.
///
/// Members are ordered newest first; listings with the same date keep their
/// input order. The date range is derived from the members on construction and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    position: Coordinates,
    is_cluster: bool,
    latest_date: NaiveDate,
    earliest_date: NaiveDate,
    members: Vec<ListingRecord>,
}

impl MapPoint {
    /// Builds a point from listings that share a position. Returns `None` for
    /// an empty group.
    ///
    /// The position is taken from the first listing in input order.
    pub fn from_members(mut members: Vec<ListingRecord>) -> Option<Self> {
        let position = members.first()?.coordinates;
        members.sort_by_cached_key(|member| Reverse(member.registered_on()));

        let (earliest_date, latest_date) =
            match members.iter().map(ListingRecord::registered_on).minmax() {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(date) => (date, date),
                MinMaxResult::MinMax(earliest, latest) => (earliest, latest),
            };

        Some(Self {
            position,
            is_cluster: members.len() > 1,
            latest_date,
            earliest_date,
            members,
        })
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn members(&self) -> &[ListingRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a point has at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_cluster(&self) -> bool {
        self.is_cluster
    }

    /// Newest registration date among the members.
    pub fn latest_date(&self) -> NaiveDate {
        self.latest_date
    }

    /// Oldest registration date among the members.
    pub fn earliest_date(&self) -> NaiveDate {
        self.earliest_date
    }

    /// Title shown on hover, taken from the newest member.
    pub fn title(&self) -> &str {
        &self.members[0].title
    }

    /// Stable key for the rendered marker, distinguishing clusters from
    /// single listings at the same position across refreshes.
    pub fn marker_key(&self) -> String {
        let kind = if self.is_cluster { "group" } else { "single" };
        format!(
            "{}-{}-{}",
            kind, self.position.latitude, self.position.longitude
        )
    }

    /// "First listed on" label, e.g. `24.01.10.`.
    pub fn first_listed_label(&self) -> String {
        date::format_label(self.earliest_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: usize, date: &str) -> ListingRecord {
        ListingRecord::new(id, Coordinates::new(37.5, 127.0), format!("unit {id}"), date)
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn empty_group_is_no_point() {
        assert!(MapPoint::from_members(Vec::new()).is_none());
    }

    #[test]
    fn single_member() {
        let point = MapPoint::from_members(vec![listing(0, "24.01.10")]).unwrap();
        assert!(!point.is_cluster());
        assert_eq!(point.latest_date(), ymd(2024, 1, 10));
        assert_eq!(point.earliest_date(), ymd(2024, 1, 10));
        assert_eq!(point.marker_key(), "single-37.5-127");
    }

    #[test]
    fn members_sorted_newest_first_and_stable() {
        let point = MapPoint::from_members(vec![
            listing(0, "24.01.10"),
            listing(1, "24.01.12"),
            listing(2, ""),
            listing(3, "24.01.10"),
        ])
        .unwrap();
        let ids = point.members().iter().map(|m| m.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 0, 3, 2]);
        assert!(point.is_cluster());
        assert_eq!(point.latest_date(), ymd(2024, 1, 12));
        assert_eq!(point.earliest_date(), date::epoch());
        assert_eq!(point.title(), "unit 1");
        assert_eq!(point.marker_key(), "group-37.5-127");
    }

    #[test]
    fn first_listed_label_uses_earliest() {
        let point =
            MapPoint::from_members(vec![listing(0, "24.01.12"), listing(1, "23.12.30")]).unwrap();
        assert_eq!(point.first_listed_label(), "23.12.30.");
    }

    #[test]
    fn serializes_derived_fields() {
        let point = MapPoint::from_members(vec![listing(0, "24.01.10")]).unwrap();
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["isCluster"], false);
        assert_eq!(json["latestDate"], "2024-01-10");
        assert_eq!(json["members"][0]["title"], "unit 0");
    }
}
