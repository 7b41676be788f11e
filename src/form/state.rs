use std::fmt;

use tracing::warn;

use crate::schema;

/// Failure payload of a schema fetch. Message extraction from the transport
/// error is the caller's concern; this carries the display string only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFetchError {
    pub message: String,
}

impl SchemaFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema fetch failed: {}", self.message)
    }
}

impl std::error::Error for SchemaFetchError {}

/// Session-local UI state: the normalization-panel toggle and the last
/// schema-fetch failure. Neither is persisted; the edited entity itself
/// lives in the external store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    show_normalization: bool,
    fetch_error: Option<String>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_normalization(&self) -> bool {
        self.show_normalization
    }

    pub fn set_show_normalization(&mut self, on: bool) {
        self.show_normalization = on;
    }

    /// The `{"Error": ...}` document shown in place of the schema editor's
    /// value, if the last fetch failed.
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Fold the fetch continuation into state: success clears the error,
    /// failure replaces it with the formatted error document. There is at
    /// most one in-flight fetch, enforced upstream by the fetching flag.
    pub fn complete_schema_fetch(&mut self, outcome: Result<(), SchemaFetchError>) {
        match outcome {
            Ok(()) => self.fetch_error = None,
            Err(error) => {
                warn!(error = %error.message, "input schema fetch failed");
                self.fetch_error = Some(schema::error_document(&error.message));
            }
        }
    }
}
