//! Tenant domain model.

use crate::model::{next_entity_id, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Tenant account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantStatus {
    Active,
    Inactive,
}

impl TenantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl Display for TenantStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical tenant record.
///
/// Tenants reference their room by display label, not by room id; a renamed
/// or deleted room leaves the label dangling on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    /// Room display label (`Room::room_number`).
    pub room: String,
    pub phone: String,
    pub move_in_date: Option<NaiveDate>,
    pub status: TenantStatus,
}

impl Tenant {
    /// Creates an active tenant with a fresh id.
    pub fn new(name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            id: next_entity_id(),
            name: name.into(),
            room: room.into(),
            phone: String::new(),
            move_in_date: None,
            status: TenantStatus::Active,
        }
    }
}
