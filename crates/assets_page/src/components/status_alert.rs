use leptos::*;

use super::use_assets_page;
use crate::reducer::AssetsPageAction;

const STATUS_ALERT_ID: &str = "assets-status-alert";

#[component]
pub(super) fn AssetsStatusAlert() -> impl IntoView {
    let page = use_assets_page();
    let alert = create_memo(move |_| page.state.with(|state| state.alert.clone()));

    view! {
        <Show when=move || alert.with(|alert| alert.open) fallback=|| ()>
            <div
                id=STATUS_ALERT_ID
                class=move || format!("alert alert-{}", alert.with(|alert| alert.severity.css_id()))
                role="alert"
                aria-live="assertive"
            >
                <span class="alert-message">
                    {move || {
                        alert
                            .with(|alert| alert.message.as_ref().map(|message| message.render()))
                            .unwrap_or_default()
                    }}
                </span>
                <button
                    class="close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| page.dispatch_action(AssetsPageAction::CloseStatusAlert)
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
