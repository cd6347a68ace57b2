pub mod components;
pub mod config;
mod effect_executor;
pub mod messages;
pub mod model;
pub mod page_type;
pub mod reducer;
mod runtime_context;
pub mod search;
pub mod sidebar;
pub mod status_alert;

pub use components::{use_assets_page, AssetsPage, AssetsPageContext, AssetsPageProvider};
pub use config::{AssetsPageConfig, ConfigError};
pub use messages::{AlertMessage, MessageId, MessageValue};
pub use model::*;
pub use page_type::{classify, has_search_or_filter_applied, PageSections, PageStateError};
pub use reducer::{reduce_assets_page, AssetsPageAction, PageEffect, ReducerError};
pub use status_alert::{close_status_alert, next_focus_target, project_status};
