use chrono::{Local, NaiveDate};
use model::{map_point::MapPoint, recency::RecencyBucket};
use utility::date::days_between;

/// Today on the local clock. Only the outermost caller should use this; the
/// classification functions take "today" as a parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Buckets `date` by its whole-day age relative to `today`.
///
/// | age in days | bucket             |
/// |-------------|--------------------|
/// | 0 or 1      | `Recent`           |
/// | 2 ..= 7     | `WithinWeek`       |
/// | 8 ..= 14    | `WithinTwoWeeks`   |
/// | over 14     | `Stale`            |
/// | negative    | `Stale`            |
pub fn classify(date: NaiveDate, today: NaiveDate) -> RecencyBucket {
    match days_between(today, date) {
        0..=1 => RecencyBucket::Recent,
        2..=7 => RecencyBucket::WithinWeek,
        8..=14 => RecencyBucket::WithinTwoWeeks,
        _ => RecencyBucket::Stale,
    }
}

/// A point is as fresh as its newest member.
pub fn classify_point(point: &MapPoint, today: NaiveDate) -> RecencyBucket {
    classify(point.latest_date(), today)
}

#[cfg(test)]
mod tests {
    use chrono::Days;
    use model::listing::{Coordinates, ListingRecord};
    use utility::date::epoch;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn days_ago(days: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(days)).unwrap()
    }

    #[test]
    fn boundaries() {
        assert_eq!(classify(days_ago(0), today()), RecencyBucket::Recent);
        assert_eq!(classify(days_ago(1), today()), RecencyBucket::Recent);
        assert_eq!(classify(days_ago(2), today()), RecencyBucket::WithinWeek);
        assert_eq!(classify(days_ago(7), today()), RecencyBucket::WithinWeek);
        assert_eq!(classify(days_ago(8), today()), RecencyBucket::WithinTwoWeeks);
        assert_eq!(classify(days_ago(14), today()), RecencyBucket::WithinTwoWeeks);
        assert_eq!(classify(days_ago(15), today()), RecencyBucket::Stale);
    }

    #[test]
    fn future_and_undated_are_stale() {
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(classify(tomorrow, today()), RecencyBucket::Stale);
        assert_eq!(classify(epoch(), today()), RecencyBucket::Stale);
    }

    #[test]
    fn point_uses_newest_member() {
        let position = Coordinates::new(37.5, 127.0);
        let point = MapPoint::from_members(vec![
            ListingRecord::new(0, position, "old", "23.12.01"),
            ListingRecord::new(1, position, "new", "24.01.19"),
        ])
        .unwrap();
        assert_eq!(classify_point(&point, today()), RecencyBucket::Recent);
    }
}
