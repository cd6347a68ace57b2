use std::rc::Rc;

use assets_host::{AssetsDataService, MemoryAssetsDataService};
use assets_page::{AssetsPage, AssetsPageProvider};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::demo::{demo_catalog, demo_course, page_config};

const DEMO_COURSE_ID: &str = "course-v1:edX+DemoX+Demo_Course";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Files & Uploads" />
        <Meta name="description" content="Course files and uploads." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DemoCourseRoute />
                    <Route path="/assets/:course_id" view=CourseAssetsRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn AssetsEntry(
    /// Course key, e.g. `course-v1:edX+DemoX+Demo_Course`.
    #[prop(into)]
    course_id: String,
) -> impl IntoView {
    let config = page_config();
    let data: Rc<dyn AssetsDataService> = Rc::new(
        MemoryAssetsDataService::new(demo_catalog())
            .with_upload_settings(config.upload_settings)
            .with_max_file_count(config.max_upload_file_count)
            .with_page_size(config.page_size),
    );

    view! {
        <AssetsPageProvider data=data course=demo_course(&course_id) config=config>
            <AssetsPage />
        </AssetsPageProvider>
    }
}

#[component]
fn DemoCourseRoute() -> impl IntoView {
    view! { <AssetsEntry course_id=DEMO_COURSE_ID /> }
}

#[component]
fn CourseAssetsRoute() -> impl IntoView {
    let params = use_params_map();
    let course_id = move || {
        params
            .with(|map| map.get("course_id").cloned())
            .unwrap_or_else(|| DEMO_COURSE_ID.to_string())
    };

    view! {
        {move || view! { <AssetsEntry course_id=course_id() /> }}
    }
}
