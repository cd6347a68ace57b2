//! Asset, course, and query data types shared across the data-layer contract and its adapters.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::status::FetchStatus;

/// Filter bucket for image content types.
pub const ASSET_TYPE_IMAGES: &str = "Images";
/// Filter bucket for document content types.
pub const ASSET_TYPE_DOCUMENTS: &str = "Documents";
/// Filter bucket for source/code content types.
pub const ASSET_TYPE_CODE: &str = "Code";
/// Filter bucket for audio content types.
pub const ASSET_TYPE_AUDIO: &str = "Audio";
/// Filter bucket for everything else.
pub const ASSET_TYPE_OTHER: &str = "OTHER";

const CODE_CONTENT_TYPES: [&str; 6] = [
    "application/javascript",
    "application/json",
    "application/x-python-code",
    "text/css",
    "text/html",
    "text/javascript",
];

const DOCUMENT_CONTENT_TYPES: [&str; 7] = [
    "application/msword",
    "application/pdf",
    "application/vnd.ms-excel",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/csv",
    "text/plain",
];

/// Maps a MIME content type onto the filter bucket it is listed under.
pub fn asset_type_for_content_type(content_type: &str) -> &'static str {
    let content_type = content_type.trim().to_ascii_lowercase();
    if content_type.starts_with("image/") {
        ASSET_TYPE_IMAGES
    } else if content_type.starts_with("audio/") {
        ASSET_TYPE_AUDIO
    } else if CODE_CONTENT_TYPES.contains(&content_type.as_str()) {
        ASSET_TYPE_CODE
    } else if DOCUMENT_CONTENT_TYPES.contains(&content_type.as_str()) {
        ASSET_TYPE_DOCUMENTS
    } else {
        ASSET_TYPE_OTHER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable asset identifier assigned by the data layer.
pub struct AssetId(pub String);

impl AssetId {
    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Immutable asset row delivered by the data layer.
pub struct AssetRecord {
    /// Unique asset identifier.
    pub id: AssetId,
    /// Human-readable file name.
    pub display_name: String,
    /// MIME content type.
    pub content_type: String,
    /// Studio-relative URL.
    pub url: String,
    /// Upload timestamp as delivered by the data layer.
    pub date_added: String,
    /// Portable (course-relative) URL used in course content.
    pub portable_url: String,
    /// Optional thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Absolute URL for sharing outside the course.
    pub external_url: String,
    /// Whether the asset is locked to enrolled learners.
    #[serde(default)]
    pub locked: bool,
}

impl AssetRecord {
    /// Returns the filter bucket this asset is listed under.
    pub fn asset_type(&self) -> &'static str {
        asset_type_for_content_type(&self.content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Course identity descriptor forwarded with every data-layer request.
pub struct CourseDetails {
    /// Course language code.
    pub lang: String,
    /// Course URL slug.
    pub url_name: String,
    /// Course display name.
    pub name: String,
    /// Display course number.
    pub display_course_number: String,
    /// Course number.
    pub num: String,
    /// Owning organization.
    pub org: String,
    /// Course key.
    pub id: String,
    /// Course run/revision.
    pub revision: String,
    /// Studio base URL.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Currently applied asset-type filters.
pub struct FilterMetadata {
    /// Filter bucket name to selection flag.
    #[serde(rename = "assetTypes", default)]
    pub asset_types: BTreeMap<String, bool>,
}

impl FilterMetadata {
    /// Builds filter metadata with the given buckets selected.
    pub fn selecting<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            asset_types: types
                .into_iter()
                .map(|name| (name.to_string(), true))
                .collect(),
        }
    }

    /// Returns `true` when at least one bucket is selected.
    pub fn is_active(&self) -> bool {
        self.asset_types.values().any(|selected| *selected)
    }

    /// Returns `true` when the asset falls into a selected bucket, or when no filter is active.
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        !self.is_active()
            || self
                .asset_types
                .get(asset.asset_type())
                .copied()
                .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Currently applied search query.
pub struct SearchMetadata {
    /// Search text.
    #[serde(default)]
    pub search: String,
}

impl SearchMetadata {
    /// Returns `true` when a search query is applied.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
    }

    /// Returns `true` when the asset display name contains the query (case-insensitive).
    pub fn matches(&self, asset: &AssetRecord) -> bool {
        !self.is_active()
            || asset
                .display_name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Upload limits published by the data layer.
pub struct UploadSettings {
    /// Largest accepted file, in megabytes.
    pub max_file_size_in_mbs: u64,
}

impl UploadSettings {
    /// Largest accepted file, in bytes.
    pub fn max_file_size_bytes(self) -> u64 {
        self.max_file_size_in_mbs.saturating_mul(1024 * 1024)
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_in_mbs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Asset fetch request parameters. Omitted fields keep the currently applied value.
pub struct AssetsQuery {
    /// Replacement filter selection.
    #[serde(default)]
    pub filters: Option<FilterMetadata>,
    /// Replacement search text.
    #[serde(default)]
    pub search: Option<String>,
    /// Zero-based page to fetch.
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// File handed to the data layer for upload.
pub struct UploadFile {
    /// File name.
    pub name: String,
    /// MIME content type reported by the browser.
    pub content_type: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
/// Everything the data layer currently knows about the page, delivered wholesale.
pub struct AssetsSnapshot {
    /// Current page of assets, in display order.
    pub assets: Vec<AssetRecord>,
    /// Course the assets belong to.
    pub course: CourseDetails,
    /// Applied filter selection.
    pub filters: FilterMetadata,
    /// Applied search.
    pub search: SearchMetadata,
    /// Outcome of the most recent asynchronous operation.
    pub status: FetchStatus,
    /// Asset most recently removed (or whose removal failed).
    pub deleted_asset: Option<AssetRecord>,
    /// List index the deleted asset occupied before removal.
    pub deleted_asset_index: Option<usize>,
    /// Upload limits.
    pub upload_settings: UploadSettings,
    /// Whether an asset fetch is in flight.
    pub is_loading: bool,
    /// Zero-based page the listing shows.
    pub page: u32,
    /// Largest number of assets listed per page. Zero means unpaged.
    pub page_size: u32,
    /// Number of assets matching the applied filters and search, across all pages.
    pub total_count: u64,
}

impl AssetsSnapshot {
    /// Number of pages the matching assets span. An empty or unpaged listing has one page.
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 || self.total_count == 0 {
            return 1;
        }
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
