//! Fetch-status union delivered by the data layer after every asynchronous operation.
//!
//! On the wire a status is a JSON object carrying a `type` tag plus outcome-specific payload
//! fields. An empty object means no status is stored. Tags outside [`StatusTag`] are preserved
//! as [`FetchStatus::Unrecognized`] so callers can ignore them without failing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Wire tags the page reacts to. Values must match the data layer exactly.
pub enum StatusTag {
    /// Asset deletion failed.
    DeleteAssetFailure,
    /// Asset deletion succeeded.
    DeleteAssetSuccess,
    /// One asset finished uploading.
    UploadAssetSuccess,
    /// An upload batch started.
    UploadingAssets,
    /// Upload batch rejected for containing too many files.
    UploadExceedMaxCountError,
    /// Upload batch rejected for containing an oversized file.
    UploadExceedMaxSizeError,
    /// One asset failed to upload.
    UploadAssetFailure,
    /// Toggling an asset lock failed.
    TogglingLockAssetFailure,
    /// Clearing filters failed.
    ClearFiltersFailure,
    /// Updating the filter selection failed.
    FilterUpdateFailure,
    /// Changing page failed.
    PageUpdateFailure,
    /// Changing sort order failed.
    SortUpdateFailure,
}

impl StatusTag {
    /// Every tag, in wire-table order.
    pub const ALL: [StatusTag; 12] = [
        Self::DeleteAssetFailure,
        Self::DeleteAssetSuccess,
        Self::UploadAssetSuccess,
        Self::UploadingAssets,
        Self::UploadExceedMaxCountError,
        Self::UploadExceedMaxSizeError,
        Self::UploadAssetFailure,
        Self::TogglingLockAssetFailure,
        Self::ClearFiltersFailure,
        Self::FilterUpdateFailure,
        Self::PageUpdateFailure,
        Self::SortUpdateFailure,
    ];

    /// Returns the exact wire string for this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeleteAssetFailure => "DELETE_ASSET_FAILURE",
            Self::DeleteAssetSuccess => "DELETE_ASSET_SUCCESS",
            Self::UploadAssetSuccess => "UPLOAD_ASSET_SUCCESS",
            Self::UploadingAssets => "UPLOADING_ASSETS",
            Self::UploadExceedMaxCountError => "UPLOAD_EXCEED_MAX_COUNT_ERROR",
            Self::UploadExceedMaxSizeError => "UPLOAD_EXCEED_MAX_SIZE_ERROR",
            Self::UploadAssetFailure => "UPLOAD_ASSET_FAILURE",
            Self::TogglingLockAssetFailure => "TOGGLING_LOCK_ASSET_FAILURE",
            Self::ClearFiltersFailure => "CLEAR_FILTERS_FAILURE",
            Self::FilterUpdateFailure => "FILTER_UPDATE_FAILURE",
            Self::PageUpdateFailure => "PAGE_UPDATE_FAILURE",
            Self::SortUpdateFailure => "SORT_UPDATE_FAILURE",
        }
    }

    /// Parses a wire string, returning `None` for tags the page does not react to.
    pub fn from_wire(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == tag)
    }

    /// Returns `true` for tags produced by the delete action family.
    pub const fn is_delete(self) -> bool {
        matches!(self, Self::DeleteAssetFailure | Self::DeleteAssetSuccess)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Asset reference carried by upload and lock failures.
pub struct StatusAsset {
    /// Asset (or file) name.
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "StatusRecord", into = "StatusRecord")]
/// Outcome of the most recent asynchronous data-layer operation.
pub enum FetchStatus {
    /// No stored status.
    #[default]
    Idle,
    /// See [`StatusTag::DeleteAssetFailure`].
    DeleteAssetFailure,
    /// See [`StatusTag::DeleteAssetSuccess`].
    DeleteAssetSuccess,
    /// See [`StatusTag::UploadAssetSuccess`].
    UploadAssetSuccess,
    /// See [`StatusTag::UploadingAssets`].
    UploadingAssets {
        /// Number of files in flight.
        count: u64,
    },
    /// See [`StatusTag::UploadExceedMaxCountError`].
    UploadExceedMaxCountError {
        /// Largest accepted batch size.
        max_file_count: u64,
    },
    /// See [`StatusTag::UploadExceedMaxSizeError`].
    UploadExceedMaxSizeError {
        /// Largest accepted file size in megabytes.
        max_file_size_mb: u64,
    },
    /// See [`StatusTag::UploadAssetFailure`].
    UploadAssetFailure {
        /// File that failed.
        asset: StatusAsset,
    },
    /// See [`StatusTag::TogglingLockAssetFailure`].
    TogglingLockAssetFailure {
        /// Asset whose lock could not be toggled.
        asset: StatusAsset,
    },
    /// See [`StatusTag::ClearFiltersFailure`].
    ClearFiltersFailure,
    /// See [`StatusTag::FilterUpdateFailure`].
    FilterUpdateFailure,
    /// See [`StatusTag::PageUpdateFailure`].
    PageUpdateFailure,
    /// See [`StatusTag::SortUpdateFailure`].
    SortUpdateFailure,
    /// Any other tag the data layer emits (request-in-flight markers and the like).
    Unrecognized(String),
}

impl FetchStatus {
    /// Returns the known tag for this status, if any.
    pub fn tag(&self) -> Option<StatusTag> {
        let tag = match self {
            Self::Idle | Self::Unrecognized(_) => return None,
            Self::DeleteAssetFailure => StatusTag::DeleteAssetFailure,
            Self::DeleteAssetSuccess => StatusTag::DeleteAssetSuccess,
            Self::UploadAssetSuccess => StatusTag::UploadAssetSuccess,
            Self::UploadingAssets { .. } => StatusTag::UploadingAssets,
            Self::UploadExceedMaxCountError { .. } => StatusTag::UploadExceedMaxCountError,
            Self::UploadExceedMaxSizeError { .. } => StatusTag::UploadExceedMaxSizeError,
            Self::UploadAssetFailure { .. } => StatusTag::UploadAssetFailure,
            Self::TogglingLockAssetFailure { .. } => StatusTag::TogglingLockAssetFailure,
            Self::ClearFiltersFailure => StatusTag::ClearFiltersFailure,
            Self::FilterUpdateFailure => StatusTag::FilterUpdateFailure,
            Self::PageUpdateFailure => StatusTag::PageUpdateFailure,
            Self::SortUpdateFailure => StatusTag::SortUpdateFailure,
        };
        Some(tag)
    }

    /// Returns the wire tag string, or `None` when idle.
    pub fn wire_tag(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Unrecognized(tag) => Some(tag),
            known => known.tag().map(StatusTag::as_str),
        }
    }

    /// Returns `true` when the status belongs to the delete action family.
    pub fn is_delete(&self) -> bool {
        self.tag().map(StatusTag::is_delete).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct StatusRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_file_count: Option<u64>,
    #[serde(
        rename = "maxFileSizeMB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    max_file_size_mb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset: Option<StatusAsset>,
}

impl From<StatusRecord> for FetchStatus {
    fn from(record: StatusRecord) -> Self {
        let Some(kind) = record.kind else {
            return Self::Idle;
        };
        let Some(tag) = StatusTag::from_wire(&kind) else {
            return Self::Unrecognized(kind);
        };
        match tag {
            StatusTag::DeleteAssetFailure => Self::DeleteAssetFailure,
            StatusTag::DeleteAssetSuccess => Self::DeleteAssetSuccess,
            StatusTag::UploadAssetSuccess => Self::UploadAssetSuccess,
            StatusTag::UploadingAssets => Self::UploadingAssets {
                count: record.count.unwrap_or_default(),
            },
            StatusTag::UploadExceedMaxCountError => Self::UploadExceedMaxCountError {
                max_file_count: record.max_file_count.unwrap_or_default(),
            },
            StatusTag::UploadExceedMaxSizeError => Self::UploadExceedMaxSizeError {
                max_file_size_mb: record.max_file_size_mb.unwrap_or_default(),
            },
            StatusTag::UploadAssetFailure => Self::UploadAssetFailure {
                asset: record.asset.unwrap_or_default(),
            },
            StatusTag::TogglingLockAssetFailure => Self::TogglingLockAssetFailure {
                asset: record.asset.unwrap_or_default(),
            },
            StatusTag::ClearFiltersFailure => Self::ClearFiltersFailure,
            StatusTag::FilterUpdateFailure => Self::FilterUpdateFailure,
            StatusTag::PageUpdateFailure => Self::PageUpdateFailure,
            StatusTag::SortUpdateFailure => Self::SortUpdateFailure,
        }
    }
}

impl From<FetchStatus> for StatusRecord {
    fn from(status: FetchStatus) -> Self {
        let mut record = StatusRecord {
            kind: status.wire_tag().map(str::to_string),
            ..StatusRecord::default()
        };
        match status {
            FetchStatus::UploadingAssets { count } => record.count = Some(count),
            FetchStatus::UploadExceedMaxCountError { max_file_count } => {
                record.max_file_count = Some(max_file_count);
            }
            FetchStatus::UploadExceedMaxSizeError { max_file_size_mb } => {
                record.max_file_size_mb = Some(max_file_size_mb);
            }
            FetchStatus::UploadAssetFailure { asset }
            | FetchStatus::TogglingLockAssetFailure { asset } => record.asset = Some(asset),
            _ => {}
        }
        record
    }
}
