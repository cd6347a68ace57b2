use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

#[component]
pub(super) fn AssetsSearch() -> impl IntoView {
    let page = use_assets_page();
    let draft = create_memo(move |_| page.state.with(|state| state.search.value().to_string()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        page.dispatch_action(AssetsPageAction::SubmitSearch);
    };

    view! {
        <form class="form-search" role="search" on:submit=on_submit>
            <input
                class="search-input"
                type="text"
                placeholder="Search"
                aria-label="Search files"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    page.dispatch_action(AssetsPageAction::EditSearch {
                        value: event_target_value(&ev),
                    })
                }
            />
            <Show when=move || draft.with(|value| !value.is_empty()) fallback=|| ()>
                <button
                    class="search-clear"
                    type="button"
                    aria-label="Clear search"
                    on:click=move |_| page.dispatch_action(AssetsPageAction::ClearSearch)
                >
                    "×"
                </button>
            </Show>
            <button class="search-button" type="submit" aria-label="Submit search">
                "Search"
            </button>
        </form>
    }
}
