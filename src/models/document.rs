use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::envelope::Validate;

/// What a document is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSubject {
    Property,
    Tenant,
    Owner,
    Deal,
}

impl DocumentSubject {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentSubject::Property => "property",
            DocumentSubject::Tenant => "tenant",
            DocumentSubject::Owner => "owner",
            DocumentSubject::Deal => "deal",
        }
    }
}

impl std::fmt::Display for DocumentSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored file (lease, contract, ID scan) attached to a subject record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub subject: DocumentSubject,
    pub subject_id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    /// Download location; pre-signed and short-lived on some backends
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Validate for Document {}
