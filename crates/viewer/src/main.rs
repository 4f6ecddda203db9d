use std::{env, error::Error};

use aggregation::{
    aggregate, classify_points,
    engine::{clusters, singles},
    recency,
    sidebar::{sidebar_page, SidebarPage},
};
use chrono::NaiveDate;
use model::{map_point::MapPoint, Classified};
use serde::Serialize;

use crate::config::ViewerConfig;

mod config;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PointOutput {
    key: String,
    first_listed: String,
    #[serde(flatten)]
    point: Classified<MapPoint>,
}

impl From<Classified<MapPoint>> for PointOutput {
    fn from(point: Classified<MapPoint>) -> Self {
        Self {
            key: point.content.marker_key(),
            first_listed: point.content.first_listed_label(),
            point,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewerOutput<'a> {
    today: NaiveDate,
    skipped_rows: usize,
    points: Vec<PointOutput>,
    sidebar: SidebarPage<'a>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    if env::args().nth(1).as_deref() == Some("schema") {
        let schema = schemars::schema_for!(Vec<Classified<MapPoint>>);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = ViewerConfig::from_env()?;
    log::debug!("config: {:?}", config);

    let loaded = listings::load_path(&config.csv_path)?;
    let today = config.today.unwrap_or_else(recency::today);

    let points = aggregate(loaded.listings.iter().cloned());
    log::info!(
        "{} clusters, {} single listings",
        clusters(&points).len(),
        singles(&points).len()
    );

    let output = ViewerOutput {
        today,
        skipped_rows: loaded.skipped,
        points: classify_points(points, today, config.marker_policy)
            .into_iter()
            .map(PointOutput::from)
            .collect(),
        sidebar: sidebar_page(
            &loaded.listings,
            config.facet,
            config.page,
            config.page_size,
        ),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
