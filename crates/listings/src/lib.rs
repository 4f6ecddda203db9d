use std::{
    error::Error,
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};

use csv::StringRecord;
use model::listing::ListingRecord;

pub mod row;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(why) => write!(f, "could not read listings: {}", why),
            Self::Csv(why) => write!(f, "could not parse listings: {}", why),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(why) => Some(why),
            Self::Csv(why) => Some(why),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(why: io::Error) -> Self {
        Self::Io(why)
    }
}

impl From<csv::Error> for LoadError {
    fn from(why: csv::Error) -> Self {
        Self::Csv(why)
    }
}

/// Listings read from one export.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub listings: Vec<ListingRecord>,
    /// Rows dropped because they could not be mapped to a listing.
    pub skipped: usize,
}

pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Loaded, LoadError> {
    let path = path.as_ref();
    log::info!("loading listings from {}", path.display());
    let file = File::open(path)?;
    load_reader(file)
}

/// Reads a listing export. The first row is a header and is ignored; the
/// remaining rows keep their file order. Rows that cannot be mapped are
/// skipped with a warning.
///
/// Cells are decoded lossily: bytes that are not UTF-8 (CP949 exports, for
/// one) become U+FFFD instead of failing the whole file.
pub fn load_reader<R: Read>(reader: R) -> Result<Loaded, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = Loaded::default();
    for (index, record) in reader.byte_records().enumerate() {
        let record = StringRecord::from_byte_record_lossy(record?);
        match row::map_row(index, &record) {
            Ok(listing) => loaded.listings.push(listing),
            Err(why) => {
                log::warn!("skipping row {}: {}", index, why);
                loaded.skipped += 1;
            }
        }
    }
    log::info!(
        "loaded {} listings ({} rows skipped)",
        loaded.listings.len(),
        loaded.skipped
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use model::listing::Coordinates;

    use super::*;

    const EXPORT: &str = "\
lat,lng,date,title,amount
37.5,127.0,24.01.10,Raemian,35000
37.5,127.0,24.01.12,Raemian,36000
,,,broken row,
37.51,127.02,,Xi,
";

    #[test]
    fn loads_rows_in_order_and_skips_bad_ones() {
        let loaded = load_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(loaded.skipped, 1);
        let ids = loaded.listings.iter().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 3]);
        assert_eq!(loaded.listings[0].coordinates, Coordinates::new(37.5, 127.0));
        assert_eq!(loaded.listings[1].details.amount, Some(3.6));
        assert_eq!(loaded.listings[2].registered_date, "");
    }

    #[test]
    fn undecodable_cells_do_not_drop_neighbouring_rows() {
        let export: &[u8] = b"lat,lng,date,title\n\
37.5,127.0,24.01.10,ok\n\
37.51,127.01,24.01.11,\xB0\xAD\n\
37.52,127.02,24.01.12,ok2\n";
        let loaded = load_reader(export).unwrap();
        assert_eq!(loaded.skipped, 0);
        let titles = loaded
            .listings
            .iter()
            .map(|l| l.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["ok", "\u{FFFD}\u{FFFD}", "ok2"]);
        assert_eq!(loaded.listings[1].registered_date, "24.01.11");
    }

    #[test]
    fn header_only_is_empty() {
        let loaded = load_reader("lat,lng,date\n".as_bytes()).unwrap();
        assert!(loaded.listings.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = load_path("/nonexistent/listings.csv").unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
    }
}
