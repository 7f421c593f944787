//! Permission-enforcing facade over the domain store.
//!
//! # Responsibility
//! - Resolve the acting employee from the session username and check the
//!   permission model before every mutation.
//! - Keep the raw store free of authorization so mutation replay stays
//!   deterministic.
//!
//! # Invariants
//! - A rejected call leaves the store and the activity log untouched.
//! - Admin sessions bypass the permission matrix; a missing session acts
//!   as the System bootstrap path.
//! - Room edit/delete additionally require the room on the employee's
//!   allow-list.

use crate::model::employee::{Employee, EmployeeStatus, RoleKind};
use crate::model::expense::Expense;
use crate::model::notification::Performer;
use crate::model::payment::Payment;
use crate::model::permissions::{Action, Module};
use crate::model::room::{Room, RoomValidationError};
use crate::model::tenant::Tenant;
use crate::model::EntityId;
use crate::store::DomainStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Desk service errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    /// The permission matrix denies this module/action pair.
    Forbidden { module: Module, action: Action },
    /// The target room is not on the actor's allow-list.
    RoomNotAssigned(EntityId),
    /// Employee account management requires an Admin session.
    AdminOnly,
    /// Room invariant violation.
    Validation(RoomValidationError),
}

impl Display for DeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forbidden { module, action } => {
                write!(f, "permission denied: {action} on {module}")
            }
            Self::RoomNotAssigned(id) => write!(f, "room not assigned to this account: {id}"),
            Self::AdminOnly => write!(f, "employee management requires an Admin session"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DeskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoomValidationError> for DeskError {
    fn from(value: RoomValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Mutation facade bound to one acting session.
pub struct DeskService<'a> {
    store: &'a mut DomainStore,
    role: Option<RoleKind>,
    username: Option<String>,
}

impl<'a> DeskService<'a> {
    /// Binds the store to an acting session. `role: None` is the System
    /// bootstrap path and bypasses checks.
    pub fn new(store: &'a mut DomainStore, role: Option<RoleKind>, username: Option<String>) -> Self {
        Self {
            store,
            role,
            username,
        }
    }

    fn performer(&self) -> Performer {
        Performer::from_role(self.role)
    }

    /// The employee record backing this session, when the role requires one.
    fn acting_employee(&self) -> Option<&Employee> {
        let username = self.username.as_deref()?;
        self.store.current_employee(username)
    }

    fn authorize(&self, module: Module, action: Action) -> Result<(), DeskError> {
        match self.role {
            None | Some(RoleKind::Admin) => Ok(()),
            Some(RoleKind::Employee) => {
                let allowed = self
                    .acting_employee()
                    .is_some_and(|employee| employee.role.allows(module, action));
                if allowed {
                    Ok(())
                } else {
                    Err(DeskError::Forbidden { module, action })
                }
            }
        }
    }

    /// Room-level gate for edit/delete on one specific room.
    fn authorize_room(&self, room_id: EntityId) -> Result<(), DeskError> {
        match self.role {
            None | Some(RoleKind::Admin) => Ok(()),
            Some(RoleKind::Employee) => {
                let assigned = self
                    .acting_employee()
                    .is_some_and(|employee| employee.is_room_accessible(room_id));
                if assigned {
                    Ok(())
                } else {
                    Err(DeskError::RoomNotAssigned(room_id))
                }
            }
        }
    }

    fn require_admin(&self) -> Result<(), DeskError> {
        match self.role {
            None | Some(RoleKind::Admin) => Ok(()),
            Some(RoleKind::Employee) => Err(DeskError::AdminOnly),
        }
    }

    // --- rooms ---

    pub fn create_room(&mut self, room: Room) -> Result<EntityId, DeskError> {
        self.authorize(Module::Rooms, Action::Add)?;
        let performer = self.performer();
        Ok(self.store.add_room(room, performer)?)
    }

    pub fn edit_room(&mut self, room: Room) -> Result<bool, DeskError> {
        self.authorize(Module::Rooms, Action::Edit)?;
        self.authorize_room(room.id)?;
        let performer = self.performer();
        Ok(self.store.update_room(room, performer)?)
    }

    pub fn remove_room(&mut self, id: EntityId) -> Result<bool, DeskError> {
        self.authorize(Module::Rooms, Action::Delete)?;
        self.authorize_room(id)?;
        let performer = self.performer();
        Ok(self.store.delete_room(id, performer))
    }

    // --- tenants ---

    pub fn register_tenant(&mut self, tenant: Tenant) -> Result<EntityId, DeskError> {
        self.authorize(Module::Tenants, Action::Add)?;
        let performer = self.performer();
        Ok(self.store.add_tenant(tenant, performer))
    }

    pub fn edit_tenant(&mut self, tenant: Tenant) -> Result<bool, DeskError> {
        self.authorize(Module::Tenants, Action::Edit)?;
        let performer = self.performer();
        Ok(self.store.update_tenant(tenant, performer))
    }

    pub fn remove_tenant(&mut self, id: EntityId) -> Result<bool, DeskError> {
        self.authorize(Module::Tenants, Action::Delete)?;
        let performer = self.performer();
        Ok(self.store.delete_tenant(id, performer))
    }

    pub fn bulk_remove_tenants(&mut self, ids: &[EntityId]) -> Result<usize, DeskError> {
        self.authorize(Module::Tenants, Action::Delete)?;
        let performer = self.performer();
        Ok(self.store.bulk_delete_tenants(ids, performer))
    }

    // --- payments & expenses ---

    pub fn record_payment(&mut self, payment: Payment) -> Result<EntityId, DeskError> {
        self.authorize(Module::Payments, Action::Add)?;
        let performer = self.performer();
        Ok(self.store.add_payment(payment, performer))
    }

    pub fn record_expense(&mut self, expense: Expense) -> Result<EntityId, DeskError> {
        self.authorize(Module::Expenses, Action::Add)?;
        let performer = self.performer();
        Ok(self.store.add_expense(expense, performer))
    }

    // --- employees (Admin surface; outside the four-module matrix) ---

    pub fn add_employee(&mut self, employee: Employee) -> Result<EntityId, DeskError> {
        self.require_admin()?;
        let performer = self.performer();
        Ok(self.store.add_employee(employee, performer))
    }

    pub fn edit_employee(&mut self, employee: Employee) -> Result<bool, DeskError> {
        self.require_admin()?;
        let performer = self.performer();
        Ok(self.store.update_employee(employee, performer))
    }

    pub fn remove_employee(&mut self, id: EntityId) -> Result<bool, DeskError> {
        self.require_admin()?;
        let performer = self.performer();
        Ok(self.store.delete_employee(id, performer))
    }

    pub fn toggle_employee_status(
        &mut self,
        id: EntityId,
    ) -> Result<Option<EmployeeStatus>, DeskError> {
        self.require_admin()?;
        let performer = self.performer();
        Ok(self.store.toggle_employee_status(id, performer))
    }

    pub fn bulk_set_employee_status(
        &mut self,
        ids: &[EntityId],
        status: EmployeeStatus,
    ) -> Result<usize, DeskError> {
        self.require_admin()?;
        let performer = self.performer();
        Ok(self.store.bulk_set_employee_status(ids, status, performer))
    }
}
