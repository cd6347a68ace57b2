//! Status-alert message catalogue and value interpolation.

use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies one user-facing status-alert message.
pub enum MessageId {
    /// Deleting an asset failed.
    CantDelete,
    /// An asset was deleted.
    DeleteSuccess,
    /// Files finished uploading.
    UploadSuccess,
    /// Files are uploading.
    UploadInProgress,
    /// The upload batch had too many files.
    TooManyFiles,
    /// The upload batch had an oversized file.
    TooMuchData,
    /// One file failed to upload.
    GenericError,
    /// Toggling an asset lock failed.
    FailedLock,
    /// A filter, sort, or page update failed.
    GenericUpdateError,
}

impl MessageId {
    /// Stable translation key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::CantDelete => "assetsStatusAlertCantDelete",
            Self::DeleteSuccess => "assetsStatusAlertDeleteSuccess",
            Self::UploadSuccess => "assetsStatusAlertUploadSuccess",
            Self::UploadInProgress => "assetsStatusAlertUploadInProgress",
            Self::TooManyFiles => "assetsStatusAlertTooManyFiles",
            Self::TooMuchData => "assetsStatusAlertTooMuchData",
            Self::GenericError => "assetsStatusAlertGenericError",
            Self::FailedLock => "assetsStatusAlertFailedLock",
            Self::GenericUpdateError => "assetsStatusAlertGenericUpdateError",
        }
    }

    /// English template with `{name}` placeholders.
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::CantDelete => "Unable to delete {assetName}.",
            Self::DeleteSuccess => "{assetName} has been deleted.",
            Self::UploadSuccess => "{uploaded_count} files successfully uploaded.",
            Self::UploadInProgress => "{uploading_count} files uploading.",
            Self::TooManyFiles => {
                "The maximum number of files for an upload is {max_count}. No files were uploaded."
            }
            Self::TooMuchData => {
                "The maximum size for an upload is {max_size} MB. No files were uploaded."
            }
            Self::GenericError => "Error uploading {assetName}. Try again.",
            Self::FailedLock => "Failed to lock {assetName}.",
            Self::GenericUpdateError => {
                "The action could not be completed. Refresh the page, and then try the action again."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Interpolation value for a message placeholder.
pub enum MessageValue {
    /// Plain text, inserted verbatim.
    Text(String),
    /// Count or size, rendered with thousands separators.
    Number(u64),
}

impl fmt::Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => f.write_str(&group_thousands(*value)),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Structured alert message: catalogue id plus named interpolation values.
pub struct AlertMessage {
    /// Catalogue entry.
    pub id: MessageId,
    /// Placeholder name to value.
    pub values: BTreeMap<&'static str, MessageValue>,
}

impl AlertMessage {
    /// Creates a message without interpolation values.
    pub fn new(id: MessageId) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    /// Adds a text value.
    pub fn with_text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(name, MessageValue::Text(value.into()));
        self
    }

    /// Adds a numeric value.
    pub fn with_number(mut self, name: &'static str, value: u64) -> Self {
        self.values.insert(name, MessageValue::Number(value));
        self
    }

    /// Renders the English template with all values substituted.
    pub fn render(&self) -> String {
        self.values
            .iter()
            .fold(self.id.default_template().to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }
}
