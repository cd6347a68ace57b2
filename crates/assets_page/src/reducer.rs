//! Reducer actions, side-effect intents, and transition logic for the assets page.

use assets_host::{
    AssetId, AssetsQuery, AssetsSnapshot, FetchStatus, FilterMetadata, UploadFile,
};
use thiserror::Error;

use crate::{
    model::{AssetsPageState, FocusHandle},
    page_type::classify,
    status_alert::{close_status_alert, project_status},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_assets_page`] to mutate [`AssetsPageState`].
pub enum AssetsPageAction {
    /// The page mounted; fetch assets if none were delivered yet.
    Mounted,
    /// The data layer delivered a new snapshot.
    SnapshotDelivered(AssetsSnapshot),
    /// The user dismissed the status alert.
    CloseStatusAlert,
    /// The user typed into the search box.
    EditSearch {
        /// Full search box text.
        value: String,
    },
    /// The user submitted the search box.
    SubmitSearch,
    /// The user cleared the search box.
    ClearSearch,
    /// The user flipped one asset-type filter checkbox.
    ToggleAssetTypeFilter {
        /// Filter bucket name.
        asset_type: String,
    },
    /// The user asked to drop every applied filter and the search.
    ClearFilters,
    /// The user picked a table page.
    ChangePage {
        /// Zero-based page.
        page: u32,
    },
    /// The user flipped the hide-previews checkbox.
    ToggleImagePreview,
    /// The user asked to delete an asset.
    DeleteAsset {
        /// Listed asset to delete.
        asset_id: AssetId,
    },
    /// The user toggled an asset lock.
    ToggleLock {
        /// Listed asset to lock or unlock.
        asset_id: AssetId,
    },
    /// The user dropped or picked files to upload.
    UploadFiles {
        /// Files to upload.
        files: Vec<UploadFile>,
    },
    /// A row rendered its delete button.
    RegisterDeleteButton {
        /// Asset the row shows.
        asset_id: AssetId,
        /// Handle used to focus the button.
        handle: FocusHandle,
    },
    /// A row unmounted.
    UnregisterDeleteButton {
        /// Asset the row showed.
        asset_id: AssetId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_assets_page`] for the effect executor.
pub enum PageEffect {
    /// Ask the data layer for assets.
    FetchAssets(AssetsQuery),
    /// Ask the data layer to apply a search.
    UpdateSearch(String),
    /// Ask the data layer to clear its stored status.
    ClearAssetsStatus,
    /// Ask the data layer to clear its pending-deletion marker.
    ClearAssetDeletion,
    /// Ask the data layer to delete an asset.
    DeleteAsset(AssetId),
    /// Ask the data layer to toggle an asset lock.
    ToggleLock(AssetId),
    /// Hand files to the data layer for upload.
    UploadFiles(Vec<UploadFile>),
    /// Move keyboard focus to a delete button.
    FocusDeleteButton(FocusHandle),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference state the page does not have.
pub enum ReducerError {
    /// The asset is not in the currently listed page of assets.
    #[error("asset `{0}` is not listed")]
    AssetNotListed(AssetId),
    /// The page lies past the last page of the listing.
    #[error("page {page} is out of range for {page_count} pages")]
    PageOutOfRange {
        /// Requested zero-based page.
        page: u32,
        /// Pages the listing currently spans.
        page_count: u32,
    },
}

/// Applies an [`AssetsPageAction`] to the page state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::AssetNotListed`] when a row action references an asset that is not
/// in the current listing, and [`ReducerError::PageOutOfRange`] for a page past the last one.
pub fn reduce_assets_page(
    state: &mut AssetsPageState,
    action: AssetsPageAction,
) -> Result<Vec<PageEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        AssetsPageAction::Mounted => {
            if state.snapshot.assets.is_empty() {
                state.snapshot.is_loading = true;
                effects.push(PageEffect::FetchAssets(AssetsQuery::default()));
            }
            reclassify(state);
        }
        AssetsPageAction::SnapshotDelivered(snapshot) => {
            state.search.sync_applied(&state.snapshot.search, &snapshot.search);
            state.snapshot = snapshot;
            reclassify(state);
            let (alert, alert_effects) = project_status(
                &state.alert,
                &state.snapshot.status,
                state.snapshot.deleted_asset.as_ref(),
            );
            state.alert = alert;
            effects.extend(alert_effects);
        }
        AssetsPageAction::CloseStatusAlert => {
            effects.extend(close_status_alert(state));
        }
        AssetsPageAction::EditSearch { value } => {
            state.search.edit(value);
        }
        AssetsPageAction::SubmitSearch => {
            effects.push(PageEffect::UpdateSearch(state.search.value().to_string()));
        }
        AssetsPageAction::ClearSearch => {
            state.search.edit(String::new());
            effects.push(PageEffect::UpdateSearch(String::new()));
        }
        AssetsPageAction::ToggleAssetTypeFilter { asset_type } => {
            let mut filters = state.snapshot.filters.clone();
            let selected = filters.asset_types.entry(asset_type).or_insert(false);
            *selected = !*selected;
            effects.push(PageEffect::FetchAssets(AssetsQuery {
                filters: Some(filters),
                page: Some(0),
                ..AssetsQuery::default()
            }));
        }
        AssetsPageAction::ClearFilters => {
            state.search.edit(String::new());
            effects.push(PageEffect::FetchAssets(AssetsQuery {
                filters: Some(FilterMetadata::default()),
                search: Some(String::new()),
                page: Some(0),
            }));
        }
        AssetsPageAction::ChangePage { page } => {
            let page_count = state.snapshot.page_count();
            if page >= page_count {
                return Err(ReducerError::PageOutOfRange { page, page_count });
            }
            if page != state.snapshot.page {
                effects.push(PageEffect::FetchAssets(AssetsQuery {
                    page: Some(page),
                    ..AssetsQuery::default()
                }));
            }
        }
        AssetsPageAction::ToggleImagePreview => {
            state.hide_image_previews = !state.hide_image_previews;
        }
        AssetsPageAction::DeleteAsset { asset_id } => {
            ensure_listed(state, &asset_id)?;
            effects.push(PageEffect::DeleteAsset(asset_id));
        }
        AssetsPageAction::ToggleLock { asset_id } => {
            ensure_listed(state, &asset_id)?;
            effects.push(PageEffect::ToggleLock(asset_id));
        }
        AssetsPageAction::UploadFiles { files } => {
            if files.is_empty() {
                return Ok(effects);
            }
            state.snapshot.status = FetchStatus::UploadingAssets {
                count: files.len() as u64,
            };
            let (alert, alert_effects) =
                project_status(&state.alert, &state.snapshot.status, None);
            state.alert = alert;
            effects.extend(alert_effects);
            effects.push(PageEffect::UploadFiles(files));
        }
        AssetsPageAction::RegisterDeleteButton { asset_id, handle } => {
            state.delete_buttons.register(asset_id, handle);
        }
        AssetsPageAction::UnregisterDeleteButton { asset_id } => {
            state.delete_buttons.unregister(&asset_id);
        }
    }
    Ok(effects)
}

fn reclassify(state: &mut AssetsPageState) {
    state.page_type = classify(
        state.page_type,
        &state.snapshot.assets,
        &state.snapshot.filters,
        &state.snapshot.search,
        state.snapshot.is_loading,
    );
}

fn ensure_listed(state: &AssetsPageState, asset_id: &AssetId) -> Result<(), ReducerError> {
    if state
        .snapshot
        .assets
        .iter()
        .any(|asset| &asset.id == asset_id)
    {
        Ok(())
    } else {
        Err(ReducerError::AssetNotListed(asset_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use assets_host::{
        AssetRecord, AssetsDataService, CourseDetails, MemoryAssetsDataService, SearchMetadata,
        UploadSettings, ASSET_TYPE_DOCUMENTS, ASSET_TYPE_IMAGES,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        messages::{MessageId, MessageValue},
        model::{AlertSeverity, PageType},
    };

    fn asset(name: &str) -> AssetRecord {
        AssetRecord {
            id: AssetId::from(name),
            display_name: name.to_string(),
            content_type: "image/png".to_string(),
            url: format!("/asset/{name}"),
            date_added: String::new(),
            portable_url: format!("/static/{name}"),
            thumbnail: None,
            external_url: String::new(),
            locked: false,
        }
    }

    fn deliver(state: &mut AssetsPageState, snapshot: AssetsSnapshot) -> Vec<PageEffect> {
        reduce_assets_page(state, AssetsPageAction::SnapshotDelivered(snapshot))
            .expect("deliver snapshot")
    }

    /// Runs data-layer effects against the in-memory service and feeds results back.
    fn drive(
        state: &mut AssetsPageState,
        service: &MemoryAssetsDataService,
        effects: Vec<PageEffect>,
    ) -> Vec<PageEffect> {
        let course = CourseDetails::default();
        let mut leftover = Vec::new();
        for effect in effects {
            let deliveries = match effect {
                PageEffect::FetchAssets(query) => {
                    vec![block_on(service.get_assets(&query, &course)).expect("get")]
                }
                PageEffect::UpdateSearch(search) => {
                    vec![block_on(service.update_search(&search, &course)).expect("search")]
                }
                PageEffect::ClearAssetsStatus => {
                    vec![block_on(service.clear_assets_status()).expect("clear")]
                }
                PageEffect::ClearAssetDeletion => {
                    vec![block_on(service.clear_asset_deletion()).expect("clear")]
                }
                PageEffect::DeleteAsset(asset_id) => {
                    vec![block_on(service.delete_asset(&asset_id, &course)).expect("delete")]
                }
                PageEffect::ToggleLock(asset_id) => {
                    vec![block_on(service.toggle_lock(&asset_id, &course)).expect("lock")]
                }
                PageEffect::UploadFiles(files) => {
                    block_on(service.upload_assets(&files, &course)).expect("upload")
                }
                focus @ PageEffect::FocusDeleteButton(_) => {
                    leftover.push(focus);
                    Vec::new()
                }
            };
            for snapshot in deliveries {
                let follow_up = deliver(state, snapshot);
                leftover.extend(drive(state, service, follow_up));
            }
        }
        leftover
    }

    fn register_rows(state: &mut AssetsPageState) {
        for asset in state.snapshot.assets.clone() {
            reduce_assets_page(
                state,
                AssetsPageAction::RegisterDeleteButton {
                    handle: FocusHandle::from_dom_id(format!("delete-{}", asset.id)),
                    asset_id: asset.id,
                },
            )
            .expect("register");
        }
    }

    #[test]
    fn mount_with_empty_list_fetches_and_keeps_skeleton() {
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");

        assert_eq!(effects, vec![PageEffect::FetchAssets(AssetsQuery::default())]);
        assert_eq!(state.page_type, PageType::Skeleton);
        assert!(state.snapshot.is_loading);
    }

    #[test]
    fn mount_with_delivered_assets_skips_fetch() {
        let mut state = AssetsPageState::from_snapshot(AssetsSnapshot {
            assets: vec![asset("a.png")],
            ..AssetsSnapshot::default()
        });
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");

        assert!(effects.is_empty());
        assert_eq!(state.page_type, PageType::Normal);
    }

    #[test]
    fn first_fetch_resolves_skeleton_to_loaded_variant() {
        let service = MemoryAssetsDataService::new(vec![asset("a.png")]);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::Normal);

        let empty = MemoryAssetsDataService::default();
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &empty, effects);
        assert_eq!(state.page_type, PageType::NoAssets);
    }

    #[test]
    fn search_with_no_matches_is_no_results_and_clearing_restores_listing() {
        let service = MemoryAssetsDataService::new(vec![asset("a.png"), asset("b.png")]);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);

        reduce_assets_page(
            &mut state,
            AssetsPageAction::EditSearch {
                value: "zzz".to_string(),
            },
        )
        .expect("edit");
        let effects =
            reduce_assets_page(&mut state, AssetsPageAction::SubmitSearch).expect("submit");
        assert_eq!(effects, vec![PageEffect::UpdateSearch("zzz".to_string())]);
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::NoResults);

        let effects = reduce_assets_page(&mut state, AssetsPageAction::ClearSearch).expect("clr");
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::Normal);
        assert_eq!(state.search.value(), "");
        assert_eq!(state.snapshot.assets.len(), 2);
    }

    #[test]
    fn delete_then_close_focuses_neighbouring_row() {
        let service = MemoryAssetsDataService::new(vec![asset("a"), asset("b"), asset("c")]);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);
        register_rows(&mut state);

        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::DeleteAsset {
                asset_id: AssetId::from("b"),
            },
        )
        .expect("delete");
        drive(&mut state, &service, effects);
        reduce_assets_page(
            &mut state,
            AssetsPageAction::UnregisterDeleteButton {
                asset_id: AssetId::from("b"),
            },
        )
        .expect("unregister");

        assert!(state.alert.open);
        assert_eq!(state.alert.severity, AlertSeverity::Success);
        assert_eq!(
            state.alert.message.as_ref().map(|message| message.render()),
            Some("b has been deleted.".to_string())
        );

        let effects =
            reduce_assets_page(&mut state, AssetsPageAction::CloseStatusAlert).expect("close");
        let focus = drive(&mut state, &service, effects);

        assert_eq!(
            focus,
            vec![PageEffect::FocusDeleteButton(FocusHandle::from_dom_id(
                "delete-c"
            ))]
        );
        assert!(!state.alert.open);
        assert_eq!(state.snapshot.status, FetchStatus::Idle);
        assert_eq!(state.snapshot.deleted_asset_index, None);
    }

    #[test]
    fn deleting_final_asset_closes_without_focus_and_shows_no_assets() {
        let service = MemoryAssetsDataService::new(vec![asset("only")]);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);
        register_rows(&mut state);

        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::DeleteAsset {
                asset_id: AssetId::from("only"),
            },
        )
        .expect("delete");
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::NoAssets);

        let effects =
            reduce_assets_page(&mut state, AssetsPageAction::CloseStatusAlert).expect("close");
        assert!(drive(&mut state, &service, effects).is_empty());
    }

    #[test]
    fn row_actions_reject_unlisted_assets() {
        let mut state = AssetsPageState::default();
        let err = reduce_assets_page(
            &mut state,
            AssetsPageAction::DeleteAsset {
                asset_id: AssetId::from("ghost"),
            },
        )
        .expect_err("unlisted");
        assert_eq!(err, ReducerError::AssetNotListed(AssetId::from("ghost")));
    }

    #[test]
    fn upload_batch_shows_progress_then_running_success_count() {
        let service = MemoryAssetsDataService::new(vec![asset("a.png")]);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);

        let files: Vec<UploadFile> = ["one.png", "two.png"]
            .into_iter()
            .map(|name| UploadFile {
                name: name.to_string(),
                content_type: "image/png".to_string(),
                size_bytes: 1,
            })
            .collect();
        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::UploadFiles {
                files: files.clone(),
            },
        )
        .expect("upload");

        assert_eq!(state.alert.severity, AlertSeverity::Info);
        assert_eq!(
            effects,
            vec![PageEffect::ClearAssetsStatus, PageEffect::UploadFiles(files)]
        );

        drive(&mut state, &service, effects);
        let message = state.alert.message.clone().expect("message");
        assert_eq!(state.alert.severity, AlertSeverity::Success);
        assert_eq!(message.id, MessageId::UploadSuccess);
        assert_eq!(
            message.values.get("uploaded_count"),
            Some(&MessageValue::Number(2))
        );
        assert_eq!(state.snapshot.assets.len(), 3);
    }

    #[test]
    fn oversized_upload_reports_limit_from_data_layer() {
        let service = MemoryAssetsDataService::new(Vec::new()).with_upload_settings(
            UploadSettings {
                max_file_size_in_mbs: 10,
            },
        );
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::UploadFiles {
                files: vec![UploadFile {
                    name: "video.mp4".to_string(),
                    content_type: "video/mp4".to_string(),
                    size_bytes: 11 * 1024 * 1024,
                }],
            },
        )
        .expect("upload");
        drive(&mut state, &service, effects);

        assert_eq!(state.alert.severity, AlertSeverity::Danger);
        assert_eq!(
            state.alert.message.as_ref().map(|message| message.render()),
            Some("The maximum size for an upload is 10 MB. No files were uploaded.".to_string())
        );
    }

    #[test]
    fn closing_alert_mid_upload_does_not_cancel_completion() {
        let mut state = AssetsPageState::default();
        reduce_assets_page(
            &mut state,
            AssetsPageAction::UploadFiles {
                files: vec![UploadFile {
                    name: "a.png".to_string(),
                    content_type: "image/png".to_string(),
                    size_bytes: 1,
                }],
            },
        )
        .expect("upload");
        reduce_assets_page(&mut state, AssetsPageAction::CloseStatusAlert).expect("close");
        assert!(!state.alert.open);

        deliver(
            &mut state,
            AssetsSnapshot {
                assets: vec![asset("a.png")],
                status: FetchStatus::UploadAssetSuccess,
                ..AssetsSnapshot::default()
            },
        );
        assert!(state.alert.open);
        assert_eq!(state.alert.severity, AlertSeverity::Success);
    }

    #[test]
    fn delivery_with_changed_search_resyncs_draft() {
        let mut state = AssetsPageState::default();
        reduce_assets_page(
            &mut state,
            AssetsPageAction::EditSearch {
                value: "draft".to_string(),
            },
        )
        .expect("edit");

        deliver(
            &mut state,
            AssetsSnapshot {
                filters: FilterMetadata::default(),
                search: SearchMetadata {
                    search: "applied".to_string(),
                },
                ..AssetsSnapshot::default()
            },
        );
        assert_eq!(state.search.value(), "applied");
        assert_eq!(state.page_type, PageType::NoResults);
    }

    #[test]
    fn type_filter_toggle_narrows_listing_and_clear_filters_restores_it() {
        let catalog = vec![
            asset("a.png"),
            AssetRecord {
                content_type: "application/pdf".to_string(),
                ..asset("b.pdf")
            },
        ];
        let service = MemoryAssetsDataService::new(catalog);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);

        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::ToggleAssetTypeFilter {
                asset_type: ASSET_TYPE_DOCUMENTS.to_string(),
            },
        )
        .expect("toggle");
        drive(&mut state, &service, effects);
        assert_eq!(state.snapshot.assets.len(), 1);
        assert_eq!(state.snapshot.assets[0].display_name, "b.pdf");

        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::ToggleAssetTypeFilter {
                asset_type: ASSET_TYPE_DOCUMENTS.to_string(),
            },
        )
        .expect("toggle off");
        drive(&mut state, &service, effects);
        assert_eq!(state.snapshot.assets.len(), 2);

        let effects = reduce_assets_page(
            &mut state,
            AssetsPageAction::ToggleAssetTypeFilter {
                asset_type: "Audio".to_string(),
            },
        )
        .expect("audio");
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::NoResults);

        let effects =
            reduce_assets_page(&mut state, AssetsPageAction::ClearFilters).expect("clear");
        drive(&mut state, &service, effects);
        assert_eq!(state.page_type, PageType::Normal);
        assert!(!state.snapshot.filters.is_active());
        assert_eq!(
            state.snapshot.filters.asset_types.get(ASSET_TYPE_IMAGES),
            None
        );
    }

    #[test]
    fn change_page_fetches_that_page_and_rejects_pages_past_the_end() {
        let service = MemoryAssetsDataService::new(vec![asset("a"), asset("b"), asset("c")])
            .with_page_size(2);
        let mut state = AssetsPageState::default();
        let effects = reduce_assets_page(&mut state, AssetsPageAction::Mounted).expect("mount");
        drive(&mut state, &service, effects);
        assert_eq!(state.snapshot.assets.len(), 2);
        assert_eq!(state.snapshot.page_count(), 2);

        let effects = reduce_assets_page(&mut state, AssetsPageAction::ChangePage { page: 1 })
            .expect("page 1");
        assert_eq!(
            effects,
            vec![PageEffect::FetchAssets(AssetsQuery {
                page: Some(1),
                ..AssetsQuery::default()
            })]
        );
        drive(&mut state, &service, effects);
        assert_eq!(state.snapshot.page, 1);
        assert_eq!(state.snapshot.assets, vec![asset("c")]);
        assert_eq!(state.page_type, PageType::Normal);

        let unchanged = reduce_assets_page(&mut state, AssetsPageAction::ChangePage { page: 1 })
            .expect("same page");
        assert!(unchanged.is_empty());

        let err = reduce_assets_page(&mut state, AssetsPageAction::ChangePage { page: 2 })
            .expect_err("past end");
        assert_eq!(
            err,
            ReducerError::PageOutOfRange {
                page: 2,
                page_count: 2
            }
        );
    }

    #[test]
    fn image_preview_toggle_flips_without_data_requests() {
        let mut state = AssetsPageState::default();
        assert!(!state.hide_image_previews);

        let effects = reduce_assets_page(&mut state, AssetsPageAction::ToggleImagePreview)
            .expect("hide");
        assert!(effects.is_empty());
        assert!(state.hide_image_previews);

        deliver(&mut state, AssetsSnapshot::default());
        assert!(state.hide_image_previews);

        reduce_assets_page(&mut state, AssetsPageAction::ToggleImagePreview).expect("show");
        assert!(!state.hide_image_previews);
    }

    #[test]
    fn clearing_filters_drops_unsubmitted_search_text() {
        let mut state = AssetsPageState::from_snapshot(AssetsSnapshot {
            assets: vec![asset("a.png")],
            filters: FilterMetadata::selecting([ASSET_TYPE_IMAGES]),
            ..AssetsSnapshot::default()
        });
        reduce_assets_page(
            &mut state,
            AssetsPageAction::EditSearch {
                value: "abc".to_string(),
            },
        )
        .expect("edit");

        let effects =
            reduce_assets_page(&mut state, AssetsPageAction::ClearFilters).expect("clear");
        assert_eq!(state.search.value(), "");
        assert_eq!(
            effects,
            vec![PageEffect::FetchAssets(AssetsQuery {
                filters: Some(FilterMetadata::default()),
                search: Some(String::new()),
                page: Some(0),
            })]
        );

        reduce_assets_page(
            &mut state,
            AssetsPageAction::EditSearch {
                value: "typed".to_string(),
            },
        )
        .expect("edit");
        reduce_assets_page(&mut state, AssetsPageAction::ClearSearch).expect("clear search");
        assert_eq!(state.search.value(), "");
    }

    #[test]
    fn rows_register_and_unregister_delete_buttons() {
        let mut state = AssetsPageState::from_snapshot(AssetsSnapshot {
            assets: vec![asset("a"), asset("b")],
            ..AssetsSnapshot::default()
        });
        assert!(state.delete_buttons.is_empty());

        register_rows(&mut state);
        assert_eq!(state.delete_buttons.len(), 2);

        reduce_assets_page(
            &mut state,
            AssetsPageAction::UnregisterDeleteButton {
                asset_id: AssetId::from("a"),
            },
        )
        .expect("unregister");
        assert_eq!(state.delete_buttons.len(), 1);
        assert_eq!(
            state.delete_buttons.get(&AssetId::from("b")),
            Some(&FocusHandle::from_dom_id("delete-b"))
        );
    }
}
