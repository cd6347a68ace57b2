//! Typed data-layer contracts and shared models for the course assets page.
//!
//! This crate is the boundary between the page runtime and whatever owns asset data. It exposes
//! the asset/course/query models, the wire-compatible fetch-status union, and the
//! [`AssetsDataService`] trait together with no-op and in-memory adapters.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod memory;
pub mod service;
pub mod status;
pub mod time;
pub mod types;

pub use memory::{MemoryAssetsDataService, DEFAULT_MAX_FILE_COUNT, DEFAULT_PAGE_SIZE};
pub use service::{AssetsDataFuture, AssetsDataService, NoopAssetsDataService};
pub use time::{format_date_added, unix_time_ms_now};
pub use status::{FetchStatus, StatusAsset, StatusTag};
pub use types::{
    asset_type_for_content_type, AssetId, AssetRecord, AssetsQuery, AssetsSnapshot,
    CourseDetails, FilterMetadata, SearchMetadata, UploadFile, UploadSettings,
    ASSET_TYPE_AUDIO, ASSET_TYPE_CODE, ASSET_TYPE_DOCUMENTS, ASSET_TYPE_IMAGES, ASSET_TYPE_OTHER,
};
