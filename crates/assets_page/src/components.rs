//! Assets page UI composition.

pub(crate) mod a11y;
mod drop_zone;
mod filters;
mod image_preview;
mod pagination;
mod search;
mod status_alert;
mod table;

use leptos::*;

use self::{
    drop_zone::AssetsDropZone, filters::AssetTypeFilters, image_preview::ImagePreviewFilter,
    pagination::AssetsPagination, search::AssetsSearch, status_alert::AssetsStatusAlert,
    table::AssetsTable,
};
use crate::{
    page_type::{has_search_or_filter_applied, RecordsBody},
    reducer::AssetsPageAction,
    sidebar::{sidebar_pin, SidebarPin},
};

pub use crate::runtime_context::{use_assets_page, AssetsPageContext, AssetsPageProvider};

/// DOM id of the records pane, targeted by the skip link.
pub const TABLE_CONTENTS_ID: &str = "table-contents";
const SIDEBAR_ID: &str = "assets-sidebar";
const SIDEBAR_PINNED_CLASS: &str = "fixed";

fn result_count_label(count: u64) -> String {
    match count {
        1 => "Showing 1 result".to_string(),
        count => format!("Showing {count} results"),
    }
}

fn apply_sidebar_pin(pin: SidebarPin) {
    let Some(sidebar) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SIDEBAR_ID))
    else {
        return;
    };
    let classes = sidebar.class_list();
    let result = match pin {
        SidebarPin::Pin => classes.add_1(SIDEBAR_PINNED_CLASS),
        SidebarPin::Unpin => classes.remove_1(SIDEBAR_PINNED_CLASS),
        SidebarPin::Keep => Ok(()),
    };
    if let Err(err) = result {
        logging::warn!("sidebar pin update failed: {err:?}");
    }
}

#[component]
fn ClearFiltersButton() -> impl IntoView {
    let page = use_assets_page();
    view! {
        <button
            class="btn btn-link clear-filters"
            type="button"
            on:click=move |_| page.dispatch_action(AssetsPageAction::ClearFilters)
        >
            "Clear all filters"
        </button>
    }
}

#[component]
/// Records page for one course: sidebar with upload and filters, and the records pane.
pub fn AssetsPage() -> impl IntoView {
    let page = use_assets_page();
    let state = page.state;
    let page_type = create_memo(move |_| state.with(|page| page.page_type));
    let sections = create_memo(move |_| page_type.get().sections());
    let result_count = create_memo(move |_| {
        state.with(|page| {
            page.snapshot
                .total_count
                .max(page.snapshot.assets.len() as u64)
        })
    });
    let narrowed = create_memo(move |_| {
        state.with(|page| {
            has_search_or_filter_applied(&page.snapshot.filters, &page.snapshot.search)
        })
    });

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        let Some(layout) = a11y::measure_sidebar_layout(TABLE_CONTENTS_ID, SIDEBAR_ID) else {
            return;
        };
        apply_sidebar_pin(sidebar_pin(layout, &page.config.get_value()));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div
            class="sr-only"
            role="status"
            aria-atomic="true"
            aria-live="polite"
            aria-relevant="text"
        >
            {move || result_count_label(result_count.get())}
        </div>
        <div class="content" data-page-type=move || page_type.get().as_str()>
            <div
                class="records"
                class=("no-assets", move || sections.get().body == RecordsBody::NoAssetsMessage)
                class=("no-results", move || sections.get().body == RecordsBody::NoResultsMessage)
                id=TABLE_CONTENTS_ID
                tabindex="-1"
            >
                {move || match sections.get().body {
                    RecordsBody::Empty => ().into_view(),
                    RecordsBody::Table => view! {
                        <AssetsStatusAlert />
                        <div class="header">
                            <div class="result-count">
                                {move || result_count_label(result_count.get())}
                                <Show when=move || narrowed.get() fallback=|| ()>
                                    <ClearFiltersButton />
                                </Show>
                            </div>
                            <Show when=move || sections.get().search fallback=|| ()>
                                <AssetsSearch />
                            </Show>
                        </div>
                        <AssetsTable />
                        <AssetsPagination />
                    }
                    .into_view(),
                    RecordsBody::NoAssetsMessage => view! {
                        <h3>"Add your first file by dragging it into the upload area."</h3>
                    }
                    .into_view(),
                    RecordsBody::NoResultsMessage => view! {
                        <h3>"No files were found for this filter."</h3>
                        <ClearFiltersButton />
                    }
                    .into_view(),
                }}
            </div>
            <div class="sidebar" id=SIDEBAR_ID>
                <div class="sidebar-content">
                    <Show when=move || sections.get().body == RecordsBody::Table fallback=|| ()>
                        <a class="sr-only sr-only-focusable skip-link" href=format!("#{TABLE_CONTENTS_ID}")>
                            "Skip to table contents"
                        </a>
                    </Show>
                    <Show when=move || sections.get().drop_zone fallback=|| ()>
                        <AssetsDropZone />
                    </Show>
                    <Show when=move || sections.get().image_preview fallback=|| ()>
                        <div class="page-header">
                            <ImagePreviewFilter />
                        </div>
                    </Show>
                    <Show when=move || sections.get().filters fallback=|| ()>
                        <AssetTypeFilters />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn result_count_label_pluralizes() {
        assert_eq!(result_count_label(0), "Showing 0 results");
        assert_eq!(result_count_label(1), "Showing 1 result");
        assert_eq!(result_count_label(25), "Showing 25 results");
    }
}
