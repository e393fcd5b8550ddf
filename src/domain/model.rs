use serde::{Deserialize, Serialize};

/// A title record, keyed by `isbn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub isbn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Payload of a `DELETE` change event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTitle {
    pub isbn: String,
}

/// Notification published to the queue after a store mutation.
///
/// Serialises as `{"eventType": "PUT" | "DELETE", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType", content = "payload", rename_all = "UPPERCASE")]
pub enum ChangeEvent {
    Put(Title),
    Delete(DeletedTitle),
}

impl ChangeEvent {
    pub fn put(title: Title) -> Self {
        Self::Put(title)
    }

    pub fn delete(isbn: impl Into<String>) -> Self {
        Self::Delete(DeletedTitle { isbn: isbn.into() })
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Put(_) => "PUT",
            Self::Delete(_) => "DELETE",
        }
    }

    pub fn to_message_body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
