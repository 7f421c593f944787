//! Payment domain model.

use crate::model::{next_entity_id, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Payment settlement status.
///
/// The current recording flow only produces `Paid` entries, but `Pending`
/// stays part of the model for imported or future flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: EntityId,
    /// Tenant display name.
    pub tenant: String,
    /// Room display label.
    pub room: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates a paid payment record with a fresh id.
    pub fn new(tenant: impl Into<String>, room: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: next_entity_id(),
            tenant: tenant.into(),
            room: room.into(),
            amount,
            date,
            status: PaymentStatus::Paid,
        }
    }
}
