//! Listing groups and pages for the sidebar list.

use indexmap::IndexMap;
use model::listing::ListingRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::group::group_by;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Label of the single group produced by [`Facet::All`].
pub const ALL_LABEL: &str = "All";

/// Label for listings whose address names no district.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// Attribute the sidebar groups listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    #[default]
    All,
    Area,
    District,
    SubwayLine,
    Bathrooms,
    Direction,
}

impl Facet {
    /// Facet for a front-end identifier such as `subwayLine`. Unknown and
    /// empty identifiers select [`Facet::All`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "area" => Self::Area,
            "district" => Self::District,
            "subwayLine" => Self::SubwayLine,
            "bathrooms" => Self::Bathrooms,
            "direction" => Self::Direction,
            _ => Self::All,
        }
    }

    /// Group label of `record` under this facet. Missing attributes give an
    /// empty label.
    pub fn label(self, record: &ListingRecord) -> String {
        let details = &record.details;
        let field = match self {
            Self::All => return ALL_LABEL.to_owned(),
            Self::District => {
                return district(details.address.as_deref())
                    .unwrap_or(UNKNOWN_DISTRICT)
                    .to_owned()
            }
            Self::Area => &details.area,
            Self::SubwayLine => &details.subway_line,
            Self::Bathrooms => &details.bathrooms,
            Self::Direction => &details.direction,
        };
        field.clone().unwrap_or_default()
    }
}

/// District (구) named by an address, e.g. `강남구` in `서울특별시 강남구 역삼동`.
///
/// Takes the first whitespace-separated part that has a `구` after its first
/// character and cuts it after the last such `구`, so `강남구청` gives `강남구`
/// and an unspaced `서울시강남구역삼동` gives `서울시강남구`.
pub fn district(address: Option<&str>) -> Option<&str> {
    address?.split_whitespace().find_map(|part| {
        let (end, marker) = part
            .char_indices()
            .skip(1)
            .filter(|(_, c)| *c == '구')
            .last()?;
        Some(&part[..end + marker.len_utf8()])
    })
}

pub fn group_by_facet(
    records: &[ListingRecord],
    facet: Facet,
) -> IndexMap<String, Vec<&ListingRecord>> {
    group_by(records, |record| facet.label(record))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(current_page: usize, total_items: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page,
            total_pages: total_items.div_ceil(page_size),
            total_items,
            page_size,
        }
    }

    pub fn offset(&self) -> usize {
        self.current_page.saturating_mul(self.page_size)
    }

    /// The part of `items` on the current page; empty past the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup<'a> {
    pub label: String,
    pub items: Vec<&'a ListingRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarPage<'a> {
    pub facet: Facet,
    pub groups: Vec<SidebarGroup<'a>>,
    pub pagination: Pagination,
}

/// Groups `records` by `facet` and cuts every group to the same page window.
///
/// The page count is derived from the total number of records, not from the
/// largest group, so later pages may leave some groups empty.
pub fn sidebar_page(
    records: &[ListingRecord],
    facet: Facet,
    page: usize,
    page_size: usize,
) -> SidebarPage<'_> {
    let pagination = Pagination::new(page, records.len(), page_size);
    let groups = group_by_facet(records, facet)
        .into_iter()
        .map(|(label, items)| SidebarGroup {
            label,
            items: pagination.slice(&items).to_vec(),
        })
        .collect();
    SidebarPage {
        facet,
        groups,
        pagination,
    }
}
