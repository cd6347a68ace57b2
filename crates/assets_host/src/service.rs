//! Assets data-layer service contract.

use std::{future::Future, pin::Pin};

use crate::types::{AssetId, AssetsQuery, AssetsSnapshot, CourseDetails, UploadFile};

/// Object-safe boxed future used by [`AssetsDataService`] async methods.
pub type AssetsDataFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// External data layer that owns asset lists, filters, search, and fetch status.
///
/// Every operation resolves to the data layer's full snapshot after the operation applied.
/// Operation outcomes (including failures the user should see) travel in
/// [`AssetsSnapshot::status`]; the `Err` side is reserved for transport failures.
pub trait AssetsDataService {
    /// Fetches assets for the course, applying any query fields that are present.
    fn get_assets<'a>(
        &'a self,
        query: &'a AssetsQuery,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;

    /// Applies a new search query and refetches.
    fn update_search<'a>(
        &'a self,
        search: &'a str,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;

    /// Clears the stored fetch status.
    fn clear_assets_status<'a>(&'a self) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;

    /// Clears the pending deletion marker (deleted asset and its former index).
    fn clear_asset_deletion<'a>(&'a self)
        -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;

    /// Deletes one asset.
    fn delete_asset<'a>(
        &'a self,
        asset_id: &'a AssetId,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;

    /// Uploads a batch of files.
    ///
    /// Resolves to one snapshot per status the batch produced, in delivery order: a single
    /// rejection snapshot when the batch violates upload limits, otherwise one per file.
    fn upload_assets<'a>(
        &'a self,
        files: &'a [UploadFile],
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<Vec<AssetsSnapshot>, String>>;

    /// Toggles the learner lock on one asset.
    fn toggle_lock<'a>(
        &'a self,
        asset_id: &'a AssetId,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op data layer for unsupported targets and baseline tests.
pub struct NoopAssetsDataService;

impl NoopAssetsDataService {
    fn unavailable(op: &str) -> String {
        format!("assets data layer unavailable: {op}")
    }
}

impl AssetsDataService for NoopAssetsDataService {
    fn get_assets<'a>(
        &'a self,
        _query: &'a AssetsQuery,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("get_assets")) })
    }

    fn update_search<'a>(
        &'a self,
        _search: &'a str,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("update_search")) })
    }

    fn clear_assets_status<'a>(&'a self) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("clear_assets_status")) })
    }

    fn clear_asset_deletion<'a>(
        &'a self,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("clear_asset_deletion")) })
    }

    fn delete_asset<'a>(
        &'a self,
        _asset_id: &'a AssetId,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("delete_asset")) })
    }

    fn upload_assets<'a>(
        &'a self,
        _files: &'a [UploadFile],
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<Vec<AssetsSnapshot>, String>> {
        Box::pin(async { Err(Self::unavailable("upload_assets")) })
    }

    fn toggle_lock<'a>(
        &'a self,
        _asset_id: &'a AssetId,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async { Err(Self::unavailable("toggle_lock")) })
    }
}
