use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{date, geo};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Grouping key, `"{lat},{lng}"`.
    ///
    /// Uses the shortest float representation, so `127.0` becomes `127` and two
    /// coordinates only share a key when their values are identical. NaN
    /// coordinates all share the key `"NaN,NaN"`.
    pub fn key(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    pub fn distance_km_to(&self, other: &Coordinates) -> f64 {
        geo::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Floor of a unit. Most exports use numbers, some use labels such as `저`
/// (low) or `B1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Floor {
    Number(i32),
    Label(String),
}

impl Floor {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(match value.parse::<i32>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Label(value.to_owned()),
        })
    }
}

/// Display-only fields of a listing. None of these influence grouping or
/// classification.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetails {
    /// Deposit or price in units of 100 million won (억원).
    pub amount: Option<f64>,
    pub approval_year: Option<String>,
    pub household_count: Option<u32>,
    pub subway_line: Option<String>,
    pub subway_station: Option<String>,
    /// Walking distance to `subway_station`, whole metres.
    pub station_distance_m: Option<u32>,
    pub size: Option<String>,
    pub additional_info: Option<String>,
    pub area: Option<String>,
    pub min_floor: Option<Floor>,
    pub max_floor: Option<i32>,
    pub direction: Option<String>,
    pub rooms: Option<String>,
    pub bathrooms: Option<String>,
    pub address: Option<String>,
    pub primary_link: Option<String>,
    pub secondary_link: Option<String>,
}

/// One row of the listing export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    /// Zero-based row index in the source file.
    pub id: usize,
    pub coordinates: Coordinates,
    pub title: String,
    /// `YY.MM.DD`, or empty when unknown.
    pub registered_date: String,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl ListingRecord {
    pub fn new<T, D>(id: usize, coordinates: Coordinates, title: T, registered_date: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            id,
            coordinates,
            title: title.into(),
            registered_date: registered_date.into(),
            details: ListingDetails::default(),
        }
    }

    pub fn with_details(self, details: ListingDetails) -> Self {
        Self { details, ..self }
    }

    /// Parsed registration date; the epoch when missing or unreadable.
    pub fn registered_on(&self) -> NaiveDate {
        date::parse_short_date(&self.registered_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_shortest_float_form() {
        assert_eq!(Coordinates::new(37.5, 127.0).key(), "37.5,127");
        assert_eq!(
            Coordinates::new(37.566535, 126.9779692).key(),
            "37.566535,126.9779692"
        );
        assert_eq!(Coordinates::new(f64::NAN, f64::NAN).key(), "NaN,NaN");
    }

    #[test]
    fn floor_numbers_and_labels() {
        assert_eq!(Floor::parse("12"), Some(Floor::Number(12)));
        assert_eq!(Floor::parse("저"), Some(Floor::Label("저".to_owned())));
        assert_eq!(Floor::parse(" "), None);
    }

    #[test]
    fn registered_on_falls_back_to_epoch() {
        let record = ListingRecord::new(0, Coordinates::new(0.0, 0.0), "a", "");
        assert_eq!(record.registered_on(), date::epoch());
    }

    #[test]
    fn details_are_flattened_and_sparse() {
        let record = ListingRecord::new(3, Coordinates::new(37.5, 127.0), "Raemian", "24.01.10")
            .with_details(ListingDetails {
                amount: Some(3.5),
                ..Default::default()
            });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["registeredDate"], "24.01.10");
        assert_eq!(json["amount"], 3.5);
        assert!(json.get("address").is_none());
        assert!(json.get("details").is_none());
    }
}
