use assets_host::{AssetId, AssetRecord};
use leptos::*;

use super::use_assets_page;
use crate::{model::FocusHandle, reducer::AssetsPageAction};

fn delete_button_dom_id(asset_id: &AssetId) -> String {
    let slug: String = asset_id
        .as_str()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect();
    format!("asset-delete-button-{slug}")
}

#[component]
fn AssetRow(asset: AssetRecord, show_preview: Memo<bool>) -> impl IntoView {
    let page = use_assets_page();
    let asset_id = asset.id.clone();
    let delete_dom_id = delete_button_dom_id(&asset_id);

    // Registration is deferred so the reducer never runs inside a render pass.
    {
        let asset_id = asset_id.clone();
        let handle = FocusHandle::from_dom_id(delete_dom_id.clone());
        request_animation_frame(move || {
            page.dispatch_action(AssetsPageAction::RegisterDeleteButton { asset_id, handle });
        });
    }
    {
        let asset_id = asset_id.clone();
        on_cleanup(move || {
            request_animation_frame(move || {
                page.dispatch_action(AssetsPageAction::UnregisterDeleteButton { asset_id });
            });
        });
    }

    let locked = {
        let asset_id = asset_id.clone();
        create_memo(move |_| {
            page.state.with(|state| {
                state
                    .snapshot
                    .assets
                    .iter()
                    .find(|listed| listed.id == asset_id)
                    .is_some_and(|listed| listed.locked)
            })
        })
    };
    let lock_id = asset_id.clone();
    let delete_id = asset_id;
    let name = asset.display_name.clone();
    let thumbnail = asset.thumbnail.clone();
    let preview_alt = format!("Preview of {}", asset.display_name);
    let lock_label = move || {
        if locked.get() {
            format!("Unlock {name}")
        } else {
            format!("Lock {name}")
        }
    };

    view! {
        <tr>
            <Show when=move || show_preview.get() fallback=|| ()>
                <td class="asset-thumbnail">
                    {thumbnail
                        .clone()
                        .map(|src| view! { <img src=src alt=preview_alt.clone() /> })}
                </td>
            </Show>
            <td class="asset-name">
                <a href=asset.external_url.clone() target="_blank" rel="noopener">
                    {asset.display_name.clone()}
                </a>
            </td>
            <td class="asset-type">{asset.asset_type()}</td>
            <td class="asset-date">{asset.date_added.clone()}</td>
            <td class="asset-copy">
                <code>{asset.portable_url.clone()}</code>
            </td>
            <td class="asset-actions">
                <button
                    class="btn btn-outline-primary lock-button"
                    type="button"
                    aria-label=lock_label
                    aria-pressed=move || if locked.get() { "true" } else { "false" }
                    on:click=move |_| {
                        page.dispatch_action(AssetsPageAction::ToggleLock {
                            asset_id: lock_id.clone(),
                        })
                    }
                >
                    {move || if locked.get() { "Locked" } else { "Unlocked" }}
                </button>
                <button
                    id=delete_dom_id
                    class="btn btn-outline-danger delete-button"
                    type="button"
                    aria-label=format!("Delete {}", asset.display_name)
                    on:click=move |_| {
                        page.dispatch_action(AssetsPageAction::DeleteAsset {
                            asset_id: delete_id.clone(),
                        })
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub(super) fn AssetsTable() -> impl IntoView {
    let page = use_assets_page();
    let show_preview = create_memo(move |_| page.state.with(|state| !state.hide_image_previews));

    view! {
        <table class="table assets-table">
            <thead>
                <tr>
                    <Show when=move || show_preview.get() fallback=|| ()>
                        <th scope="col">"Preview"</th>
                    </Show>
                    <th scope="col">"Name"</th>
                    <th scope="col">"Type"</th>
                    <th scope="col">"Date Added"</th>
                    <th scope="col">"Studio URL"</th>
                    <th scope="col">
                        <span class="sr-only">"Actions"</span>
                    </th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || page.state.with(|state| state.snapshot.assets.clone())
                    key=|asset| asset.id.clone()
                    let:asset
                >
                    <AssetRow asset=asset show_preview=show_preview />
                </For>
            </tbody>
        </table>
    }
}
