use std::hash::Hash;

use indexmap::IndexMap;
use model::listing::ListingRecord;

/// Partitions `items` by `key`. Keys keep the order in which they were first
/// seen and every group keeps the input order of its members.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Groups listings by their exact `"lat,lng"` key. No tolerance is applied.
pub fn group_by_position(
    listings: impl IntoIterator<Item = ListingRecord>,
) -> IndexMap<String, Vec<ListingRecord>> {
    group_by(listings, |listing| listing.coordinates.key())
}

#[cfg(test)]
mod tests {
    use model::listing::Coordinates;

    use super::*;

    #[test]
    fn groups_in_first_seen_order() {
        let grouped = group_by(vec![(1, "fruit"), (2, "vegetable"), (3, "fruit")], |item| item.1);
        assert_eq!(
            grouped.into_iter().collect::<Vec<_>>(),
            vec![
                ("fruit", vec![(1, "fruit"), (3, "fruit")]),
                ("vegetable", vec![(2, "vegetable")]),
            ]
        );
    }

    #[test]
    fn empty_input() {
        let grouped = group_by(Vec::<u32>::new(), |item| *item);
        assert!(grouped.is_empty());
    }

    #[test]
    fn position_keys_are_exact() {
        let listings = vec![
            ListingRecord::new(0, Coordinates::new(37.5, 127.0), "a", ""),
            ListingRecord::new(1, Coordinates::new(37.5, 127.0000001), "b", ""),
            ListingRecord::new(2, Coordinates::new(37.5, 127.0), "c", ""),
        ];
        let grouped = group_by_position(listings);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["37.5,127"].len(), 2);
        assert_eq!(grouped["37.5,127.0000001"][0].title, "b");
    }

    #[test]
    fn nan_coordinates_collapse_into_one_group() {
        let listings = vec![
            ListingRecord::new(0, Coordinates::new(f64::NAN, f64::NAN), "a", ""),
            ListingRecord::new(1, Coordinates::new(f64::NAN, f64::NAN), "b", ""),
        ];
        let grouped = group_by_position(listings);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["NaN,NaN"].len(), 2);
    }
}
