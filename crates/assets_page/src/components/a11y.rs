//! Internal DOM focus and measurement helpers for the assets page.

use wasm_bindgen::JsCast;

use crate::sidebar::SidebarLayout;

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Measures the records pane and sidebar for the pinning decision.
pub(super) fn measure_sidebar_layout(records_id: &str, sidebar_id: &str) -> Option<SidebarLayout> {
    let records = element_by_id(records_id)?.get_bounding_client_rect();
    let sidebar = element_by_id(sidebar_id)?.get_bounding_client_rect();
    Some(SidebarLayout {
        records_top: records.top(),
        records_height: records.height(),
        sidebar_height: sidebar.height(),
    })
}
