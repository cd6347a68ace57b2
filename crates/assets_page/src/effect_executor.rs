//! Effect-queue executor for reducer-emitted page effects.

use assets_host::{AssetsDataService, AssetsSnapshot, CourseDetails};
use leptos::*;

use crate::{
    components::a11y::focus_element_by_id,
    reducer::{AssetsPageAction, PageEffect},
    runtime_context::AssetsPageContext,
};

/// Installs the executor that drains page effects in order.
pub fn install(page: AssetsPageContext) {
    // Clear the queue before processing so dispatches made by completed requests enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = page.effects.get();
        if queued.is_empty() {
            return;
        }

        page.effects.set(Vec::new());

        let mut requests = Vec::new();
        for effect in queued {
            match effect {
                PageEffect::FocusDeleteButton(handle) => {
                    let dom_id = handle.dom_id().to_string();
                    request_animation_frame(move || {
                        if !focus_element_by_id(&dom_id) {
                            logging::warn!("delete button `{dom_id}` is not mounted");
                        }
                    });
                }
                request => requests.push(request),
            }
        }

        if requests.is_empty() {
            return;
        }

        // One batch runs sequentially so a status clear lands before the deletion clear.
        let data = page.data.get_value();
        let course = page.course.get_value();
        spawn_local(async move {
            for request in requests {
                match run_request(data.as_ref(), &course, request).await {
                    Ok(deliveries) => {
                        for snapshot in deliveries {
                            page.dispatch_action(AssetsPageAction::SnapshotDelivered(snapshot));
                        }
                    }
                    Err(err) => logging::warn!("assets data request failed: {err}"),
                }
            }
        });
    });
}

async fn run_request(
    data: &dyn AssetsDataService,
    course: &CourseDetails,
    request: PageEffect,
) -> Result<Vec<AssetsSnapshot>, String> {
    let single = |snapshot: AssetsSnapshot| vec![snapshot];
    match request {
        PageEffect::FetchAssets(query) => data.get_assets(&query, course).await.map(single),
        PageEffect::UpdateSearch(search) => data.update_search(&search, course).await.map(single),
        PageEffect::ClearAssetsStatus => data.clear_assets_status().await.map(single),
        PageEffect::ClearAssetDeletion => data.clear_asset_deletion().await.map(single),
        PageEffect::DeleteAsset(asset_id) => {
            data.delete_asset(&asset_id, course).await.map(single)
        }
        PageEffect::ToggleLock(asset_id) => data.toggle_lock(&asset_id, course).await.map(single),
        PageEffect::UploadFiles(files) => data.upload_assets(&files, course).await,
        PageEffect::FocusDeleteButton(_) => Ok(Vec::new()),
    }
}

