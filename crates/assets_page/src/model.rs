use std::collections::HashMap;

use assets_host::{AssetId, AssetsSnapshot};
use serde::{Deserialize, Serialize};

use crate::{messages::AlertMessage, search::SearchDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageType {
    #[default]
    Skeleton,
    Normal,
    NoAssets,
    NoResults,
}

impl PageType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skeleton => "SKELETON",
            Self::Normal => "NORMAL",
            Self::NoAssets => "NO_ASSETS",
            Self::NoResults => "NO_RESULTS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Danger,
}

impl AlertSeverity {
    pub const fn css_id(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAlertState {
    pub open: bool,
    pub severity: AlertSeverity,
    pub message: Option<AlertMessage>,
    /// Value shown by the next upload-success alert.
    pub upload_success_count: u64,
}

impl Default for StatusAlertState {
    fn default() -> Self {
        Self {
            open: false,
            severity: AlertSeverity::Info,
            message: None,
            upload_success_count: 1,
        }
    }
}

/// Opaque reference to a focusable control rendered by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusHandle(String);

impl FocusHandle {
    pub fn from_dom_id(dom_id: impl Into<String>) -> Self {
        Self(dom_id.into())
    }

    pub fn dom_id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteButtonRegistry {
    handles: HashMap<AssetId, FocusHandle>,
}

impl DeleteButtonRegistry {
    pub fn register(&mut self, asset_id: AssetId, handle: FocusHandle) {
        self.handles.insert(asset_id, handle);
    }

    pub fn unregister(&mut self, asset_id: &AssetId) {
        self.handles.remove(asset_id);
    }

    pub fn get(&self, asset_id: &AssetId) -> Option<&FocusHandle> {
        self.handles.get(asset_id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetsPageState {
    /// Most recent data-layer delivery.
    pub snapshot: AssetsSnapshot,
    pub page_type: PageType,
    pub alert: StatusAlertState,
    pub delete_buttons: DeleteButtonRegistry,
    pub search: SearchDraft,
    /// Hides the table's thumbnail column.
    pub hide_image_previews: bool,
}

impl AssetsPageState {
    pub fn from_snapshot(snapshot: AssetsSnapshot) -> Self {
        Self {
            search: SearchDraft::from_applied(&snapshot.search),
            snapshot,
            ..Self::default()
        }
    }
}
