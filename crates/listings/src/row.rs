//! Mapping of one export row to a [`ListingRecord`].
//!
//! The export has no stable header names, so columns are addressed by
//! position. Cells past the end of a short row read as empty.

use std::{error::Error, fmt};

use csv::StringRecord;
use model::listing::{Coordinates, Floor, ListingDetails, ListingRecord};

pub mod columns {
    pub const LATITUDE: usize = 0;
    pub const LONGITUDE: usize = 1;
    pub const REGISTERED_DATE: usize = 2;
    pub const TITLE: usize = 3;
    pub const AMOUNT: usize = 4;
    pub const APPROVAL_YEAR: usize = 5;
    pub const HOUSEHOLD_COUNT: usize = 6;
    pub const SUBWAY_LINE: usize = 7;
    pub const SUBWAY_STATION: usize = 8;
    pub const STATION_DISTANCE: usize = 9;
    pub const SIZE: usize = 10;
    pub const ADDITIONAL_INFO: usize = 11;
    pub const AREA: usize = 13;
    pub const MIN_FLOOR: usize = 15;
    pub const MAX_FLOOR: usize = 16;
    pub const DIRECTION: usize = 17;
    pub const ROOMS: usize = 18;
    pub const BATHROOMS: usize = 19;
    pub const PRIMARY_LINK: usize = 20;
    pub const ADDRESS: usize = 21;
    pub const SECONDARY_LINK: usize = 22;
}

/// Raw amounts are in 10 000 won; listings display them in 100 million won.
pub const AMOUNT_DIVISOR: f64 = 1e4;

#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    InvalidCoordinate { column: usize, value: String },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { column, value } => {
                write!(f, "column {} is not a coordinate: {:?}", column, value)
            }
        }
    }
}

impl Error for RowError {}

fn cell(row: &StringRecord, column: usize) -> Option<&str> {
    row.get(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn text(row: &StringRecord, column: usize) -> Option<String> {
    cell(row, column).map(str::to_owned)
}

fn number<T: std::str::FromStr>(row: &StringRecord, column: usize) -> Option<T> {
    cell(row, column)?.parse().ok()
}

fn coordinate(row: &StringRecord, column: usize) -> Result<f64, RowError> {
    let value = row.get(column).unwrap_or_default().trim();
    value
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
        .ok_or_else(|| RowError::InvalidCoordinate {
            column,
            value: value.to_owned(),
        })
}

/// Maps the data row at `index` (zero-based, header excluded).
pub fn map_row(index: usize, row: &StringRecord) -> Result<ListingRecord, RowError> {
    use columns::*;

    let coordinates = Coordinates::new(coordinate(row, LATITUDE)?, coordinate(row, LONGITUDE)?);
    let details = ListingDetails {
        amount: number::<f64>(row, AMOUNT).map(|amount| amount / AMOUNT_DIVISOR),
        approval_year: text(row, APPROVAL_YEAR),
        household_count: number(row, HOUSEHOLD_COUNT),
        subway_line: text(row, SUBWAY_LINE),
        subway_station: text(row, SUBWAY_STATION),
        station_distance_m: number::<f64>(row, STATION_DISTANCE)
            .filter(|distance| distance.is_finite() && *distance >= 0.0)
            .map(|distance| distance.round() as u32),
        size: text(row, SIZE),
        additional_info: text(row, ADDITIONAL_INFO),
        area: text(row, AREA),
        min_floor: cell(row, MIN_FLOOR).and_then(Floor::parse),
        max_floor: number(row, MAX_FLOOR),
        direction: text(row, DIRECTION),
        rooms: text(row, ROOMS),
        bathrooms: text(row, BATHROOMS),
        address: text(row, ADDRESS),
        primary_link: text(row, PRIMARY_LINK),
        secondary_link: text(row, SECONDARY_LINK),
    };

    Ok(ListingRecord {
        id: index,
        coordinates,
        title: text(row, TITLE).unwrap_or_default(),
        registered_date: text(row, REGISTERED_DATE).unwrap_or_default(),
        details,
    })
}
