use assets_host::{
    ASSET_TYPE_AUDIO, ASSET_TYPE_CODE, ASSET_TYPE_DOCUMENTS, ASSET_TYPE_IMAGES, ASSET_TYPE_OTHER,
};
use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

const FILTER_BUCKETS: [&str; 5] = [
    ASSET_TYPE_AUDIO,
    ASSET_TYPE_CODE,
    ASSET_TYPE_DOCUMENTS,
    ASSET_TYPE_IMAGES,
    ASSET_TYPE_OTHER,
];

fn filter_label(bucket: &str) -> &str {
    if bucket == ASSET_TYPE_OTHER {
        "Other"
    } else {
        bucket
    }
}

#[component]
pub(super) fn AssetTypeFilters() -> impl IntoView {
    let page = use_assets_page();

    view! {
        <fieldset class="filter-set">
            <legend>"Filter by file type"</legend>
            <For each=move || FILTER_BUCKETS key=|bucket| *bucket let:bucket>
                {{
                    let checkbox_id = format!("asset-filter-{}", bucket.to_ascii_lowercase());
                    let checked = move || {
                        page.state.with(|state| {
                            state
                                .snapshot
                                .filters
                                .asset_types
                                .get(bucket)
                                .copied()
                                .unwrap_or(false)
                        })
                    };
                    view! {
                        <div class="form-check">
                            <input
                                class="form-check-input"
                                type="checkbox"
                                id=checkbox_id.clone()
                                prop:checked=checked
                                on:change=move |_| {
                                    page.dispatch_action(AssetsPageAction::ToggleAssetTypeFilter {
                                        asset_type: bucket.to_string(),
                                    })
                                }
                            />
                            <label class="form-check-label" for=checkbox_id>
                                {filter_label(bucket)}
                            </label>
                        </div>
                    }
                }}
            </For>
        </fieldset>
    }
}
