//! In-memory domain store: the single source of truth for all collections.
//!
//! # Responsibility
//! - Own rooms, tenants, payments, expenses, employees, and the activity
//!   log, with every mutation entry point of the dashboard.
//! - Append exactly one performer-tagged activity entry per effective
//!   mutation.
//!
//! # Invariants
//! - Mutations run synchronously to completion; no partial collection
//!   update is ever observable.
//! - Update/delete of an unknown id is a no-op, never an error.
//! - The activity log is prepended (newest first) and uncapped; retention
//!   is deliberately left to the embedding application.
//! - Nothing in this store is persisted; a process restart starts empty.
//!
//! The store performs no authorization checks; permission enforcement
//! lives in `service::desk_service`. Mutation replay here stays
//! deterministic and actor-free.

use crate::model::employee::{Employee, EmployeeStatus};
use crate::model::expense::Expense;
use crate::model::notification::{Notification, NotificationKind, Performer};
use crate::model::payment::Payment;
use crate::model::room::{Room, RoomValidationError};
use crate::model::tenant::Tenant;
use crate::model::EntityId;
use chrono::Local;

/// Aggregate counters recomputed from the collections on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_rooms: usize,
    pub total_tenants: usize,
    /// Sum of all payment amounts regardless of status.
    pub total_income: f64,
    /// Sum of all expense amounts regardless of status.
    pub total_expenses: f64,
}

/// Authoritative in-memory collections plus the activity log.
#[derive(Debug, Default)]
pub struct DomainStore {
    rooms: Vec<Room>,
    tenants: Vec<Tenant>,
    payments: Vec<Payment>,
    expenses: Vec<Expense>,
    employees: Vec<Employee>,
    notifications: Vec<Notification>,
}

impl DomainStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every collection and the activity log.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Activity log, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Resolves the employee record backing a session username.
    pub fn current_employee(&self, username: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.username == username)
    }

    /// Recomputes aggregate counters over the current collections.
    pub fn stats(&self) -> Stats {
        Stats {
            total_rooms: self.rooms.len(),
            total_tenants: self.tenants.len(),
            total_income: self.payments.iter().map(|p| p.amount).sum(),
            total_expenses: self.expenses.iter().map(|e| e.amount).sum(),
        }
    }

    // --- rooms ---

    /// Adds a room after normalizing and validating its detail block.
    pub fn add_room(
        &mut self,
        mut room: Room,
        performer: Performer,
    ) -> Result<EntityId, RoomValidationError> {
        room.normalize_details();
        room.validate()?;

        let id = room.id;
        let message = format!("Added Room {}", room.room_number);
        self.rooms.insert(0, room);
        self.log(NotificationKind::Success, message, performer);
        Ok(id)
    }

    /// Replaces a room by id. Unknown id is a silent no-op.
    ///
    /// Status transitions are unrestricted; a stale detail block from the
    /// previous status is dropped before validation.
    pub fn update_room(
        &mut self,
        mut room: Room,
        performer: Performer,
    ) -> Result<bool, RoomValidationError> {
        room.normalize_details();
        room.validate()?;

        let Some(slot) = self.rooms.iter_mut().find(|r| r.id == room.id) else {
            return Ok(false);
        };

        let message = format!("Updated Room {}", room.room_number);
        *slot = room;
        self.log(NotificationKind::Info, message, performer);
        Ok(true)
    }

    /// Removes a room by id; logs only when the id was found.
    pub fn delete_room(&mut self, id: EntityId, performer: Performer) -> bool {
        let Some(index) = self.rooms.iter().position(|r| r.id == id) else {
            return false;
        };

        let removed = self.rooms.remove(index);
        self.log(
            NotificationKind::Warning,
            format!("Deleted Room {}", removed.room_number),
            performer,
        );
        true
    }

    // --- tenants ---

    pub fn add_tenant(&mut self, tenant: Tenant, performer: Performer) -> EntityId {
        let id = tenant.id;
        let message = format!("Registered Tenant {}", tenant.name);
        self.tenants.insert(0, tenant);
        self.log(NotificationKind::Success, message, performer);
        id
    }

    /// Replaces a tenant by id. Unknown id is a silent no-op.
    pub fn update_tenant(&mut self, tenant: Tenant, performer: Performer) -> bool {
        let Some(slot) = self.tenants.iter_mut().find(|t| t.id == tenant.id) else {
            return false;
        };

        let message = format!("Updated Tenant {}", tenant.name);
        *slot = tenant;
        self.log(NotificationKind::Info, message, performer);
        true
    }

    pub fn delete_tenant(&mut self, id: EntityId, performer: Performer) -> bool {
        let Some(index) = self.tenants.iter().position(|t| t.id == id) else {
            return false;
        };

        let removed = self.tenants.remove(index);
        self.log(
            NotificationKind::Warning,
            format!("Removed Tenant {}", removed.name),
            performer,
        );
        true
    }

    /// Removes every tenant whose id is listed; one aggregate entry for the
    /// whole batch, none when nothing matched.
    pub fn bulk_delete_tenants(&mut self, ids: &[EntityId], performer: Performer) -> usize {
        let before = self.tenants.len();
        self.tenants.retain(|t| !ids.contains(&t.id));
        let removed = before - self.tenants.len();

        if removed > 0 {
            self.log(
                NotificationKind::Warning,
                format!("Bulk removed {removed} tenants"),
                performer,
            );
        }
        removed
    }

    // --- payments & expenses ---

    pub fn add_payment(&mut self, payment: Payment, performer: Performer) -> EntityId {
        let id = payment.id;
        let message = format!(
            "Recorded payment of AED {} for {}",
            payment.amount, payment.tenant
        );
        self.payments.insert(0, payment);
        self.log(NotificationKind::Success, message, performer);
        id
    }

    pub fn add_expense(&mut self, expense: Expense, performer: Performer) -> EntityId {
        let id = expense.id;
        let message = format!("Recorded expense: {}", expense.title);
        self.expenses.insert(0, expense);
        self.log(NotificationKind::Warning, message, performer);
        id
    }

    // --- employees ---

    pub fn add_employee(&mut self, employee: Employee, performer: Performer) -> EntityId {
        let id = employee.id;
        let message = format!("Added Employee {}", employee.name);
        self.employees.insert(0, employee);
        self.log(NotificationKind::Info, message, performer);
        id
    }

    /// Replaces an employee by id. Unknown id is a silent no-op.
    pub fn update_employee(&mut self, employee: Employee, performer: Performer) -> bool {
        let Some(slot) = self.employees.iter_mut().find(|e| e.id == employee.id) else {
            return false;
        };

        let message = format!("Updated profile for {}", employee.name);
        *slot = employee;
        self.log(NotificationKind::Info, message, performer);
        true
    }

    pub fn delete_employee(&mut self, id: EntityId, performer: Performer) -> bool {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return false;
        };

        let removed = self.employees.remove(index);
        self.log(
            NotificationKind::Warning,
            format!("Removed Employee {}", removed.name),
            performer,
        );
        true
    }

    /// Flips one employee between Active and Inactive.
    pub fn toggle_employee_status(
        &mut self,
        id: EntityId,
        performer: Performer,
    ) -> Option<EmployeeStatus> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        employee.status = employee.status.toggled();
        let status = employee.status;
        let message = format!("Updated status for {} to {status}", employee.name);
        self.log(NotificationKind::Info, message, performer);
        Some(status)
    }

    /// Sets the status on every listed employee; one aggregate entry for
    /// the whole batch, none when nothing matched.
    pub fn bulk_set_employee_status(
        &mut self,
        ids: &[EntityId],
        status: EmployeeStatus,
        performer: Performer,
    ) -> usize {
        let mut changed = 0;
        for employee in &mut self.employees {
            if ids.contains(&employee.id) {
                employee.status = status;
                changed += 1;
            }
        }

        if changed > 0 {
            self.log(
                NotificationKind::Info,
                format!("Bulk updated {changed} employees to {status}"),
                performer,
            );
        }
        changed
    }

    // --- activity log ---

    /// Dismisses one entry. Dismissals are not themselves logged.
    pub fn clear_notification(&mut self, id: EntityId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() < before
    }

    /// Dismisses the whole log.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    fn log(&mut self, kind: NotificationKind, message: String, performer: Performer) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.notifications
            .insert(0, Notification::new(kind, message, performer, timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::DomainStore;
    use crate::model::notification::Performer;
    use crate::model::payment::{Payment, PaymentStatus};
    use crate::model::room::Room;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_records_are_prepended() {
        let mut store = DomainStore::new();
        store.add_room(Room::new("101"), Performer::Admin).unwrap();
        store.add_room(Room::new("102"), Performer::Admin).unwrap();

        assert_eq!(store.rooms()[0].room_number, "102");
        assert_eq!(store.rooms()[1].room_number, "101");
    }

    #[test]
    fn income_counts_pending_payments_too() {
        let mut store = DomainStore::new();
        store.add_payment(
            Payment::new("Omar", "101", 1200.0, date(2024, 2, 1)),
            Performer::Admin,
        );
        let mut pending = Payment::new("Lina", "102", 800.0, date(2024, 2, 2));
        pending.status = PaymentStatus::Pending;
        store.add_payment(pending, Performer::Admin);

        assert_eq!(store.stats().total_income, 2000.0);
    }

    #[test]
    fn clearing_one_notification_leaves_the_rest() {
        let mut store = DomainStore::new();
        store.add_room(Room::new("101"), Performer::Admin).unwrap();
        store.add_room(Room::new("102"), Performer::Admin).unwrap();

        let dismissed = store.notifications()[0].id;
        assert!(store.clear_notification(dismissed));
        assert!(!store.clear_notification(dismissed));
        assert_eq!(store.notifications().len(), 1);
    }
}
