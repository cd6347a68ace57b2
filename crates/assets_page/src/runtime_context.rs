//! Provider and context wiring for the assets page.
//!
//! This module owns the reducer container, the page effect queue, and the injected data layer.
//! UI composition stays in [`crate::components`].

use std::rc::Rc;

use assets_host::{AssetsDataService, AssetsSnapshot, CourseDetails};
use leptos::*;

use crate::{
    config::AssetsPageConfig,
    effect_executor,
    model::AssetsPageState,
    reducer::{reduce_assets_page, AssetsPageAction, PageEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading assets page state and dispatching [`AssetsPageAction`] values.
pub struct AssetsPageContext {
    /// Data layer executing page effects.
    pub data: StoredValue<Rc<dyn AssetsDataService>>,
    /// Course the page lists assets for.
    pub course: StoredValue<CourseDetails>,
    /// Layout and upload settings.
    pub config: StoredValue<AssetsPageConfig>,
    /// Reactive page state signal.
    pub state: RwSignal<AssetsPageState>,
    /// Queue of page effects emitted by the reducer.
    pub effects: RwSignal<Vec<PageEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<AssetsPageAction>,
}

impl AssetsPageContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: AssetsPageAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`AssetsPageContext`] to descendant components and mounts the page.
pub fn AssetsPageProvider(
    /// Data layer assembled by the entry layer.
    data: Rc<dyn AssetsDataService>,
    /// Course whose assets are listed.
    course: CourseDetails,
    /// Page settings.
    #[prop(optional)]
    config: AssetsPageConfig,
    /// Snapshot already held by the data layer, if any.
    #[prop(optional)]
    initial: AssetsSnapshot,
    children: Children,
) -> impl IntoView {
    let data = store_value(data);
    let course = store_value(course);
    let config = store_value(config);
    let state = create_rw_signal(AssetsPageState::from_snapshot(initial));
    let effects = create_rw_signal(Vec::<PageEffect>::new());

    let dispatch = Callback::new(move |action: AssetsPageAction| {
        let mut page = state.get_untracked();
        let previous = page.clone();

        match reduce_assets_page(&mut page, action) {
            Ok(new_effects) => {
                if page != previous {
                    state.set(page);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("assets page reducer error: {err}"),
        }
    });

    let page = AssetsPageContext {
        data,
        course,
        config,
        state,
        effects,
        dispatch,
    };

    provide_context(page);
    effect_executor::install(page);
    page.dispatch_action(AssetsPageAction::Mounted);

    children().into_view()
}

/// Returns the current [`AssetsPageContext`].
///
/// # Panics
///
/// Panics if called outside [`AssetsPageProvider`].
pub fn use_assets_page() -> AssetsPageContext {
    use_context::<AssetsPageContext>().expect("AssetsPageContext not provided")
}
