use std::{env, error::Error, fmt, path::PathBuf};

use aggregation::{
    sidebar::{Facet, DEFAULT_PAGE_SIZE},
    MarkerPolicy,
};
use chrono::NaiveDate;

pub const DEFAULT_CSV_PATH: &str = "analysis.csv";

#[derive(Debug)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value {:?} for {}: {}",
            self.value, self.variable, self.reason
        )
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub csv_path: PathBuf,
    /// Fixed "today"; the local date is used when unset.
    pub today: Option<NaiveDate>,
    pub marker_policy: MarkerPolicy,
    pub facet: Facet,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            today: None,
            marker_policy: MarkerPolicy::default(),
            facet: Facet::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup("LISTINGS_CSV") {
            config.csv_path = PathBuf::from(path);
        }
        if let Some(value) = lookup("LISTINGS_TODAY") {
            let today = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map_err(|why| invalid("LISTINGS_TODAY", &value, why))?;
            config.today = Some(today);
        }
        if let Some(value) = lookup("LISTINGS_MARKER_POLICY") {
            config.marker_policy = value
                .parse::<MarkerPolicy>()
                .map_err(|why| invalid("LISTINGS_MARKER_POLICY", &value, why))?;
        }
        if let Some(value) = lookup("LISTINGS_FACET") {
            config.facet = Facet::from_id(value.trim());
        }
        if let Some(value) = lookup("LISTINGS_PAGE") {
            config.page = value
                .trim()
                .parse::<usize>()
                .map_err(|why| invalid("LISTINGS_PAGE", &value, why))?;
        }
        if let Some(value) = lookup("LISTINGS_PAGE_SIZE") {
            config.page_size = value
                .trim()
                .parse::<usize>()
                .map_err(|why| invalid("LISTINGS_PAGE_SIZE", &value, why))?;
        }
        Ok(config)
    }
}

fn invalid<E: fmt::Display>(variable: &'static str, value: &str, why: E) -> ConfigError {
    ConfigError {
        variable,
        value: value.to_owned(),
        reason: why.to_string(),
    }
}
