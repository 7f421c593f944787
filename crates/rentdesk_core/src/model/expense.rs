//! Expense domain model.

use crate::model::{next_entity_id, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Expense settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Paid,
    Unpaid,
}

impl ExpenseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }
}

impl Display for ExpenseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    /// Property display name.
    pub property: String,
    /// Unit label within the property.
    pub unit: String,
    pub title: String,
    pub amount: f64,
    pub paid_by: String,
    pub status: ExpenseStatus,
    pub date: NaiveDate,
}

impl Expense {
    /// Creates a paid expense record with a fresh id.
    pub fn new(title: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: next_entity_id(),
            property: String::new(),
            unit: String::new(),
            title: title.into(),
            amount,
            paid_by: String::new(),
            status: ExpenseStatus::Paid,
            date,
        }
    }
}
