use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

#[component]
pub(super) fn ImagePreviewFilter() -> impl IntoView {
    let page = use_assets_page();
    let hidden = create_memo(move |_| page.state.with(|state| state.hide_image_previews));

    view! {
        <div class="form-check image-preview-filter">
            <input
                class="form-check-input"
                type="checkbox"
                id="assets-hide-previews"
                prop:checked=move || hidden.get()
                on:change=move |_| page.dispatch_action(AssetsPageAction::ToggleImagePreview)
            />
            <label class="form-check-label" for="assets-hide-previews">
                "Hide file preview"
            </label>
        </div>
    }
}
