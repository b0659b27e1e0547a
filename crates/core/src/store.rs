//! Typed descriptions of session-store churn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three ways a value can move through the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Removed => "removed",
        };
        f.write_str(label)
    }
}

/// A value observed in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreObject {
    /// A named attribute with a known serialized size.
    Attribute { name: String, size_bytes: u64 },
    /// A value the host describes only as text.
    Opaque { description: String },
}

impl StoreObject {
    pub fn attribute(name: impl Into<String>, size_bytes: u64) -> Self {
        Self::Attribute {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn opaque(description: impl Into<String>) -> Self {
        Self::Opaque {
            description: description.into(),
        }
    }
}

impl fmt::Display for StoreObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute { name, size_bytes } => write!(f, "{} ({} bytes)", name, size_bytes),
            Self::Opaque { description } => f.write_str(description),
        }
    }
}
