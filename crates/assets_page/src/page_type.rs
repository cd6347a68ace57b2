//! Page-variant classification and the section composition each variant renders.

use std::str::FromStr;

use assets_host::{AssetRecord, FilterMetadata, SearchMetadata};
use thiserror::Error;

use crate::model::PageType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when a page variant is supplied from outside the classifier.
pub enum PageStateError {
    /// The tag does not name any page variant.
    #[error("unknown page type `{0}`")]
    InvalidState(String),
}

impl FromStr for PageType {
    type Err = PageStateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        [
            PageType::Skeleton,
            PageType::Normal,
            PageType::NoAssets,
            PageType::NoResults,
        ]
        .into_iter()
        .find(|page_type| page_type.as_str() == tag)
        .ok_or_else(|| PageStateError::InvalidState(tag.to_string()))
    }
}

/// Returns `true` when a search query or at least one asset-type filter is applied.
pub fn has_search_or_filter_applied(filters: &FilterMetadata, search: &SearchMetadata) -> bool {
    filters.is_active() || search.is_active()
}

/// Derives the page variant to render.
///
/// The skeleton is kept only while the very first fetch is still loading; afterwards an empty
/// list splits on whether the user narrowed it.
pub fn classify(
    previous: PageType,
    assets: &[AssetRecord],
    filters: &FilterMetadata,
    search: &SearchMetadata,
    is_loading: bool,
) -> PageType {
    if is_loading && previous == PageType::Skeleton {
        PageType::Skeleton
    } else if assets.is_empty() && has_search_or_filter_applied(filters, search) {
        PageType::NoResults
    } else if assets.is_empty() {
        PageType::NoAssets
    } else {
        PageType::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Body content shown in the records pane in place of the table.
pub enum RecordsBody {
    /// Nothing (skeleton).
    #[default]
    Empty,
    /// Table, pagination, and the status alert.
    Table,
    /// Prompt to upload a first asset.
    NoAssetsMessage,
    /// Prompt that nothing matched, with a clear-filters button.
    NoResultsMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Sections composed for one page variant.
pub struct PageSections {
    /// Upload drop zone in the sidebar.
    pub drop_zone: bool,
    /// Asset-type filters in the sidebar.
    pub filters: bool,
    /// Hide-previews checkbox in the sidebar.
    pub image_preview: bool,
    /// Search box in the records header.
    pub search: bool,
    /// Records pane body.
    pub body: RecordsBody,
}

impl PageType {
    /// Returns the sections this variant renders.
    pub const fn sections(self) -> PageSections {
        match self {
            Self::Normal => PageSections {
                drop_zone: true,
                filters: true,
                image_preview: true,
                search: true,
                body: RecordsBody::Table,
            },
            Self::NoAssets => PageSections {
                drop_zone: true,
                filters: false,
                image_preview: false,
                search: false,
                body: RecordsBody::NoAssetsMessage,
            },
            Self::NoResults => PageSections {
                drop_zone: true,
                filters: true,
                image_preview: false,
                search: false,
                body: RecordsBody::NoResultsMessage,
            },
            Self::Skeleton => PageSections {
                drop_zone: true,
                filters: true,
                image_preview: false,
                search: false,
                body: RecordsBody::Empty,
            },
        }
    }
}
