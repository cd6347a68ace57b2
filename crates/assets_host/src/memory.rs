//! In-memory assets data layer used by tests and the standalone demo site.

use std::{cell::RefCell, rc::Rc};

use crate::{
    service::{AssetsDataFuture, AssetsDataService},
    status::{FetchStatus, StatusAsset},
    time::{format_date_added, unix_time_ms_now},
    types::{
        AssetId, AssetRecord, AssetsQuery, AssetsSnapshot, CourseDetails, SearchMetadata,
        UploadFile, UploadSettings,
    },
};

/// Largest upload batch accepted when no explicit limit is configured.
pub const DEFAULT_MAX_FILE_COUNT: u64 = 1000;

/// Assets listed per page when no explicit page size is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug)]
struct MemoryAssetsState {
    catalog: Vec<AssetRecord>,
    snapshot: AssetsSnapshot,
    max_file_count: u64,
}

impl MemoryAssetsState {
    /// Recomputes the listed page, clamping the page to the last one that has assets.
    fn refresh_listing(&mut self) {
        let filters = &self.snapshot.filters;
        let search = &self.snapshot.search;
        let matching: Vec<AssetRecord> = self
            .catalog
            .iter()
            .filter(|asset| filters.matches(asset) && search.matches(asset))
            .cloned()
            .collect();

        self.snapshot.total_count = matching.len() as u64;
        self.snapshot.page = self.snapshot.page.min(self.snapshot.page_count() - 1);
        self.snapshot.assets = match self.snapshot.page_size as usize {
            0 => matching,
            page_size => matching
                .into_iter()
                .skip(self.snapshot.page as usize * page_size)
                .take(page_size)
                .collect(),
        };
    }

    fn upload_one(&mut self, file: &UploadFile, course: &CourseDetails) -> AssetsSnapshot {
        let id = AssetId(format!(
            "asset-v1:{}+{}+{}+type@asset+block@{}",
            course.org, course.num, course.revision, file.name
        ));
        let record = AssetRecord {
            id: id.clone(),
            display_name: file.name.clone(),
            content_type: file.content_type.clone(),
            url: format!("/{id}"),
            date_added: format_date_added(unix_time_ms_now()),
            portable_url: format!("/static/{}", file.name),
            thumbnail: None,
            external_url: format!("{}/{id}", course.base_url.trim_end_matches('/')),
            locked: false,
        };
        match self.catalog.iter_mut().find(|asset| asset.id == id) {
            Some(existing) => *existing = record,
            None => self.catalog.insert(0, record),
        }
        self.refresh_listing();
        self.snapshot.status = FetchStatus::UploadAssetSuccess;
        self.snapshot.clone()
    }
}

#[derive(Debug, Clone)]
/// In-memory data layer holding a full asset catalog and the currently applied query.
pub struct MemoryAssetsDataService {
    inner: Rc<RefCell<MemoryAssetsState>>,
}

impl Default for MemoryAssetsDataService {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MemoryAssetsDataService {
    /// Creates a data layer over the given catalog. Nothing is listed until the first fetch.
    pub fn new(catalog: Vec<AssetRecord>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryAssetsState {
                catalog,
                snapshot: AssetsSnapshot {
                    page_size: DEFAULT_PAGE_SIZE,
                    ..AssetsSnapshot::default()
                },
                max_file_count: DEFAULT_MAX_FILE_COUNT,
            })),
        }
    }

    /// Sets how many assets one page lists. Zero lists everything on one page.
    pub fn with_page_size(self, page_size: u32) -> Self {
        self.inner.borrow_mut().snapshot.page_size = page_size;
        self
    }

    /// Sets the upload limits published in snapshots.
    pub fn with_upload_settings(self, settings: UploadSettings) -> Self {
        self.inner.borrow_mut().snapshot.upload_settings = settings;
        self
    }

    /// Sets the largest accepted upload batch.
    pub fn with_max_file_count(self, max_file_count: u64) -> Self {
        self.inner.borrow_mut().max_file_count = max_file_count;
        self
    }

    /// Sets the course published in snapshots.
    pub fn with_course(self, course: CourseDetails) -> Self {
        self.inner.borrow_mut().snapshot.course = course;
        self
    }

    /// Returns the current snapshot without performing an operation.
    pub fn snapshot(&self) -> AssetsSnapshot {
        self.inner.borrow().snapshot.clone()
    }
}

impl AssetsDataService for MemoryAssetsDataService {
    fn get_assets<'a>(
        &'a self,
        query: &'a AssetsQuery,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.snapshot.course = course.clone();
            if let Some(filters) = &query.filters {
                state.snapshot.filters = filters.clone();
            }
            if let Some(search) = &query.search {
                state.snapshot.search = SearchMetadata {
                    search: search.clone(),
                };
            }
            if let Some(page) = query.page {
                state.snapshot.page = page;
            }
            state.refresh_listing();
            state.snapshot.status = FetchStatus::Idle;
            state.snapshot.is_loading = false;
            Ok(state.snapshot.clone())
        })
    }

    fn update_search<'a>(
        &'a self,
        search: &'a str,
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let query = AssetsQuery {
                search: Some(search.to_string()),
                page: Some(0),
                ..AssetsQuery::default()
            };
            self.get_assets(&query, course).await
        })
    }

    fn clear_assets_status<'a>(&'a self) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.snapshot.status = FetchStatus::Idle;
            Ok(state.snapshot.clone())
        })
    }

    fn clear_asset_deletion<'a>(
        &'a self,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.snapshot.deleted_asset = None;
            state.snapshot.deleted_asset_index = None;
            Ok(state.snapshot.clone())
        })
    }

    fn delete_asset<'a>(
        &'a self,
        asset_id: &'a AssetId,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            let listed_index = state
                .snapshot
                .assets
                .iter()
                .position(|asset| &asset.id == asset_id);
            let catalog_index = state.catalog.iter().position(|asset| &asset.id == asset_id);

            match (listed_index, catalog_index) {
                (Some(listed_index), Some(catalog_index)) => {
                    let removed = state.catalog.remove(catalog_index);
                    state.refresh_listing();
                    state.snapshot.deleted_asset = Some(removed);
                    state.snapshot.deleted_asset_index = Some(listed_index);
                    state.snapshot.status = FetchStatus::DeleteAssetSuccess;
                }
                _ => {
                    let attempted = listed_index
                        .and_then(|index| state.snapshot.assets.get(index).cloned());
                    state.snapshot.deleted_asset = attempted;
                    state.snapshot.deleted_asset_index = listed_index;
                    state.snapshot.status = FetchStatus::DeleteAssetFailure;
                }
            }
            Ok(state.snapshot.clone())
        })
    }

    fn upload_assets<'a>(
        &'a self,
        files: &'a [UploadFile],
        course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<Vec<AssetsSnapshot>, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            let max_file_count = state.max_file_count;
            let settings = state.snapshot.upload_settings;

            if files.len() as u64 > max_file_count {
                state.snapshot.status = FetchStatus::UploadExceedMaxCountError { max_file_count };
                return Ok(vec![state.snapshot.clone()]);
            }
            if files
                .iter()
                .any(|file| file.size_bytes > settings.max_file_size_bytes())
            {
                state.snapshot.status = FetchStatus::UploadExceedMaxSizeError {
                    max_file_size_mb: settings.max_file_size_in_mbs,
                };
                return Ok(vec![state.snapshot.clone()]);
            }

            let deliveries = files
                .iter()
                .map(|file| {
                    if file.name.trim().is_empty() {
                        state.snapshot.status = FetchStatus::UploadAssetFailure {
                            asset: StatusAsset {
                                name: file.name.clone(),
                            },
                        };
                        state.snapshot.clone()
                    } else {
                        state.upload_one(file, course)
                    }
                })
                .collect();
            Ok(deliveries)
        })
    }

    fn toggle_lock<'a>(
        &'a self,
        asset_id: &'a AssetId,
        _course: &'a CourseDetails,
    ) -> AssetsDataFuture<'a, Result<AssetsSnapshot, String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            match state.catalog.iter_mut().find(|asset| &asset.id == asset_id) {
                Some(asset) => {
                    asset.locked = !asset.locked;
                    state.refresh_listing();
                    state.snapshot.status = FetchStatus::Idle;
                }
                None => {
                    state.snapshot.status = FetchStatus::TogglingLockAssetFailure {
                        asset: StatusAsset {
                            name: asset_id.to_string(),
                        },
                    };
                }
            }
            Ok(state.snapshot.clone())
        })
    }
}
