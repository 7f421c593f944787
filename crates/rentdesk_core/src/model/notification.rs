//! Activity log entries describing store mutations.
//!
//! # Invariants
//! - The log is append-only and displayed newest first.
//! - Entries never expire; the viewer removes them one by one or in bulk.

use crate::model::employee::RoleKind;
use crate::model::{next_entity_id, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Severity/kind tag for one activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Actor attribution for one store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performer {
    Admin,
    Employee,
    /// Mutations issued without an authenticated session.
    System,
}

impl Performer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
            Self::System => "System",
        }
    }

    /// Maps an optional session role into an attribution tag.
    pub fn from_role(role: Option<RoleKind>) -> Self {
        match role {
            Some(RoleKind::Admin) => Self::Admin,
            Some(RoleKind::Employee) => Self::Employee,
            None => Self::System,
        }
    }
}

impl Display for Performer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One human-readable record of a store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub kind: NotificationKind,
    pub message: String,
    pub performer: Performer,
    /// Local display timestamp, already formatted.
    pub timestamp: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        performer: Performer,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: next_entity_id(),
            kind,
            message: message.into(),
            performer,
            timestamp: timestamp.into(),
        }
    }
}
