use chrono::NaiveDate;
use model::{
    listing::{Coordinates, ListingRecord},
    map_point::MapPoint,
    Classified,
};

use crate::{group::group_by_position, marker::MarkerPolicy, recency::classify_point};

/// Groups listings into map points, one per exact position.
///
/// Every listing ends up in exactly one point. Points come out in the order
/// their position was first seen; members are ordered newest first.
pub fn aggregate(listings: impl IntoIterator<Item = ListingRecord>) -> Vec<MapPoint> {
    let points = group_by_position(listings)
        .into_values()
        .filter_map(MapPoint::from_members)
        .collect::<Vec<_>>();
    log::debug!(
        "aggregated {} listings into {} map points ({} clusters)",
        points.iter().map(MapPoint::len).sum::<usize>(),
        points.len(),
        points.iter().filter(|point| point.is_cluster()).count(),
    );
    points
}

/// Attaches recency and marker style to every point, relative to `today`.
pub fn classify_points(
    points: Vec<MapPoint>,
    today: NaiveDate,
    policy: MarkerPolicy,
) -> Vec<Classified<MapPoint>> {
    points
        .into_iter()
        .map(|point| {
            let recency = classify_point(&point, today);
            let marker = policy.style(point.latest_date(), today);
            Classified::new(recency, marker, point)
        })
        .collect()
}

/// Points with more than one listing.
pub fn clusters(points: &[MapPoint]) -> Vec<&MapPoint> {
    points.iter().filter(|point| point.is_cluster()).collect()
}

/// Listings that are alone at their position.
pub fn singles(points: &[MapPoint]) -> Vec<&ListingRecord> {
    points
        .iter()
        .filter(|point| !point.is_cluster())
        .flat_map(MapPoint::members)
        .collect()
}

/// The point at exactly `position`, using the same key as grouping.
pub fn find_at<'a>(points: &'a [MapPoint], position: &Coordinates) -> Option<&'a MapPoint> {
    let key = position.key();
    points.iter().find(|point| point.position().key() == key)
}

/// The point closest to `position` by great-circle distance. Earlier points
/// win ties.
pub fn nearest<'a>(points: &'a [MapPoint], position: &Coordinates) -> Option<&'a MapPoint> {
    points.iter().min_by(|a, b| {
        let distance_a = a.position().distance_km_to(position);
        let distance_b = b.position().distance_km_to(position);
        distance_a.total_cmp(&distance_b)
    })
}
