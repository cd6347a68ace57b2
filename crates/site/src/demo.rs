//! Embedded configuration and seed catalog for the standalone assets page.

use assets_host::{AssetRecord, CourseDetails};
use assets_page::AssetsPageConfig;
use leptos::logging;

const PAGE_CONFIG_JSON: &str = include_str!("../../../config/assets_page.json");
const DEMO_ASSETS_JSON: &str = include_str!("../../../config/demo_assets.json");

/// Loads the embedded page config, falling back to defaults when it is unusable.
pub fn page_config() -> AssetsPageConfig {
    parse_page_config(PAGE_CONFIG_JSON)
}

fn parse_page_config(raw: &str) -> AssetsPageConfig {
    AssetsPageConfig::from_json_str(raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using default assets page config");
        AssetsPageConfig::default()
    })
}

/// Loads the seed catalog shown before anything is uploaded.
pub fn demo_catalog() -> Vec<AssetRecord> {
    serde_json::from_str(DEMO_ASSETS_JSON).unwrap_or_else(|err| {
        logging::warn!("demo asset catalog parse failed: {err}");
        Vec::new()
    })
}

/// Builds the course descriptor for a course key taken from the route.
pub fn demo_course(course_id: &str) -> CourseDetails {
    let mut parts = course_id
        .strip_prefix("course-v1:")
        .unwrap_or(course_id)
        .splitn(3, '+');
    let org = parts.next().unwrap_or_default().to_string();
    let num = parts.next().unwrap_or_default().to_string();
    let revision = parts.next().unwrap_or_default().to_string();

    CourseDetails {
        lang: "en".to_string(),
        url_name: revision.clone(),
        name: format!("{org} {num}"),
        display_course_number: num.clone(),
        id: course_id.to_string(),
        base_url: "https://studio.example.org".to_string(),
        org,
        num,
        revision,
    }
}
