use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

fn page_position_label(page: u32, page_count: u32) -> String {
    format!("Page {} of {page_count}", page + 1)
}

#[component]
pub(super) fn AssetsPagination() -> impl IntoView {
    let page = use_assets_page();
    let current = create_memo(move |_| page.state.with(|state| state.snapshot.page));
    let page_count = create_memo(move |_| page.state.with(|state| state.snapshot.page_count()));
    let go_to = move |target: u32| page.dispatch_action(AssetsPageAction::ChangePage { page: target });

    view! {
        <Show when=move || { page_count.get() > 1 } fallback=|| ()>
            <nav class="pagination" aria-label="Asset pages">
                <button
                    class="btn btn-link previous"
                    type="button"
                    disabled=move || current.get() == 0
                    on:click=move |_| go_to(current.get_untracked().saturating_sub(1))
                >
                    "Previous"
                </button>
                <For each=move || 0..page_count.get() key=|index| *index let:index>
                    <button
                        class="btn btn-link page-link"
                        type="button"
                        aria-current=move || (current.get() == index).then_some("page")
                        on:click=move |_| go_to(index)
                    >
                        {index + 1}
                    </button>
                </For>
                <button
                    class="btn btn-link next"
                    type="button"
                    disabled=move || current.get() + 1 >= page_count.get()
                    on:click=move |_| go_to(current.get_untracked() + 1)
                >
                    "Next"
                </button>
                <span class="sr-only" aria-live="polite">
                    {move || page_position_label(current.get(), page_count.get())}
                </span>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn position_label_is_one_based() {
        assert_eq!(page_position_label(0, 3), "Page 1 of 3");
        assert_eq!(page_position_label(2, 3), "Page 3 of 3");
    }
}
