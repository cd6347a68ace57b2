//! Projection of data-layer fetch statuses onto the status alert, and alert dismissal.

use assets_host::{AssetRecord, FetchStatus};

use crate::{
    messages::{AlertMessage, MessageId},
    model::{AlertSeverity, AssetsPageState, DeleteButtonRegistry, FocusHandle, StatusAlertState},
    reducer::PageEffect,
};

/// Maps a delivered status onto the alert.
///
/// Statuses the alert does not react to (idle, unrecognized tags) return the prior state
/// unchanged and no effects.
pub fn project_status(
    prior: &StatusAlertState,
    status: &FetchStatus,
    deleted_asset: Option<&AssetRecord>,
) -> (StatusAlertState, Vec<PageEffect>) {
    let deleted_name = || {
        deleted_asset
            .map(|asset| asset.display_name.clone())
            .unwrap_or_default()
    };
    let mut next = prior.clone();
    let mut effects = Vec::new();

    let (severity, message) = match status {
        FetchStatus::Idle | FetchStatus::Unrecognized(_) => return (next, effects),
        FetchStatus::DeleteAssetFailure => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::CantDelete).with_text("assetName", deleted_name()),
        ),
        FetchStatus::DeleteAssetSuccess => (
            AlertSeverity::Success,
            AlertMessage::new(MessageId::DeleteSuccess).with_text("assetName", deleted_name()),
        ),
        FetchStatus::UploadAssetSuccess => {
            if !prior.open {
                next.upload_success_count = 1;
            }
            let shown = next.upload_success_count;
            next.upload_success_count = shown.saturating_add(1);
            (
                AlertSeverity::Success,
                AlertMessage::new(MessageId::UploadSuccess).with_number("uploaded_count", shown),
            )
        }
        FetchStatus::UploadingAssets { count } => {
            next = StatusAlertState::default();
            effects.push(PageEffect::ClearAssetsStatus);
            (
                AlertSeverity::Info,
                AlertMessage::new(MessageId::UploadInProgress)
                    .with_number("uploading_count", *count),
            )
        }
        FetchStatus::UploadExceedMaxCountError { max_file_count } => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::TooManyFiles).with_number("max_count", *max_file_count),
        ),
        FetchStatus::UploadExceedMaxSizeError { max_file_size_mb } => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::TooMuchData).with_number("max_size", *max_file_size_mb),
        ),
        FetchStatus::UploadAssetFailure { asset } => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::GenericError).with_text("assetName", asset.name.clone()),
        ),
        FetchStatus::TogglingLockAssetFailure { asset } => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::FailedLock).with_text("assetName", asset.name.clone()),
        ),
        FetchStatus::ClearFiltersFailure
        | FetchStatus::FilterUpdateFailure
        | FetchStatus::PageUpdateFailure
        | FetchStatus::SortUpdateFailure => (
            AlertSeverity::Danger,
            AlertMessage::new(MessageId::GenericUpdateError),
        ),
    };

    next.open = true;
    next.severity = severity;
    next.message = Some(message);
    (next, effects)
}

/// Picks the delete button to focus after a deletion alert closes.
///
/// Targets the row now occupying the deleted asset's former index, or the last row when the
/// deleted asset was last. Returns `None` when no rows remain, the index is unknown, or the row
/// has no registered button.
pub fn next_focus_target(
    assets: &[AssetRecord],
    deleted_index: Option<usize>,
    registry: &DeleteButtonRegistry,
) -> Option<FocusHandle> {
    let index = deleted_index?;
    // TODO: pick a focus target (search box or drop zone) once product decides where focus
    // lands after the final asset is deleted.
    let last = assets.len().checked_sub(1)?;
    let asset = assets.get(index.min(last))?;
    registry.get(&asset.id).cloned()
}

/// Dismisses the alert and emits the follow-up requests for the data layer and the DOM.
pub fn close_status_alert(state: &mut AssetsPageState) -> Vec<PageEffect> {
    let mut effects = vec![PageEffect::ClearAssetsStatus];
    state.alert = StatusAlertState::default();

    if state.snapshot.status.is_delete() {
        effects.push(PageEffect::ClearAssetDeletion);
        if let Some(handle) = next_focus_target(
            &state.snapshot.assets,
            state.snapshot.deleted_asset_index,
            &state.delete_buttons,
        ) {
            effects.push(PageEffect::FocusDeleteButton(handle));
        }
    }
    effects
}
