//! Employee account model and role variants.
//!
//! # Responsibility
//! - Define the employee record used for session lookup and gating.
//! - Model the role as a tagged variant so only `Employee` carries a
//!   permissions value; `Admin` access is unconditional by construction.
//!
//! # Invariants
//! - `username` is unique within the store and is the session lookup key.
//! - `assigned_room_ids` may reference rooms that no longer exist; dangling
//!   ids are tolerated as unresolved labels and never cleaned up.

use crate::model::permissions::{Action, Module, Permissions};
use crate::model::{next_entity_id, EntityId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Role discriminator without attached data, used for session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleKind {
    Admin,
    Employee,
}

impl RoleKind {
    /// Stable label persisted under the `userRole` settings key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employee => "Employee",
        }
    }
}

impl Display for RoleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a persisted role label.
pub fn parse_role_kind(value: &str) -> Result<RoleKind, RoleParseError> {
    match value.trim() {
        "Admin" => Ok(RoleKind::Admin),
        "Employee" => Ok(RoleKind::Employee),
        other => Err(RoleParseError(other.to_string())),
    }
}

/// Unknown persisted role label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleParseError(pub String);

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown role label: {}", self.0)
    }
}

impl Error for RoleParseError {}

/// Account role. Only the `Employee` variant carries a permission matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee(Permissions),
}

impl Role {
    /// Returns whether the role may perform `action` on `module`.
    ///
    /// Admin bypasses the permission matrix entirely.
    pub fn allows(&self, module: Module, action: Action) -> bool {
        match self {
            Self::Admin => true,
            Self::Employee(permissions) => permissions.allows(module, action),
        }
    }

    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Admin => RoleKind::Admin,
            Self::Employee(_) => RoleKind::Employee,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Employee account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl Display for EmployeeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    /// Unique login/session lookup key.
    pub username: String,
    /// Display name.
    pub name: String,
    pub email: String,
    /// Stored in plaintext; hashing is an explicit non-goal of this core.
    pub password: Option<String>,
    pub role: Role,
    pub status: EmployeeStatus,
    /// Explicit room allow-list for granular access.
    pub assigned_room_ids: Vec<EntityId>,
}

impl Employee {
    /// Creates an active employee with view-only permissions and no
    /// assigned rooms.
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: next_entity_id(),
            username: username.into(),
            name: name.into(),
            email: String::new(),
            password: None,
            role: Role::Employee(Permissions::view_only()),
            status: EmployeeStatus::Active,
            assigned_room_ids: Vec::new(),
        }
    }

    /// Returns whether `room_id` is on this employee's allow-list.
    pub fn is_room_accessible(&self, room_id: EntityId) -> bool {
        self.assigned_room_ids.contains(&room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_role_kind, Employee, Role, RoleKind};
    use crate::model::next_entity_id;
    use crate::model::permissions::{Action, Module, Permissions};

    #[test]
    fn admin_role_allows_everything() {
        for module in Module::all() {
            for action in [Action::View, Action::Add, Action::Edit, Action::Delete] {
                assert!(Role::Admin.allows(module, action));
            }
        }
    }

    #[test]
    fn employee_role_follows_its_matrix() {
        let mut perms = Permissions::view_only();
        perms.payments.add = true;
        let role = Role::Employee(perms);

        assert!(role.allows(Module::Payments, Action::Add));
        assert!(role.allows(Module::Rooms, Action::View));
        assert!(!role.allows(Module::Rooms, Action::Delete));
    }

    #[test]
    fn new_employee_defaults_to_view_only_and_no_rooms() {
        let employee = Employee::new("sara", "Sara K");
        assert!(matches!(&employee.role, Role::Employee(p) if *p == Permissions::view_only()));
        assert!(employee.assigned_room_ids.is_empty());
        assert!(!employee.is_room_accessible(next_entity_id()));
    }

    #[test]
    fn role_labels_round_trip() {
        assert_eq!(parse_role_kind("Admin").unwrap(), RoleKind::Admin);
        assert_eq!(parse_role_kind(" Employee ").unwrap(), RoleKind::Employee);
        assert!(parse_role_kind("Guest").is_err());
    }
}
