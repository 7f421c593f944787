//! Domain model for the property-management core.
//!
//! # Responsibility
//! - Define canonical records for rooms, tenants, payments, expenses,
//!   employees, profiles, and the activity log.
//! - Define the per-module permission model and its predicates.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntityId`.
//! - A room carries at most one status detail block, chosen by its status.
//! - Only `Role::Employee` carries a permissions value.

use uuid::Uuid;

pub mod employee;
pub mod expense;
pub mod notification;
pub mod payment;
pub mod permissions;
pub mod profile;
pub mod room;
pub mod tenant;

/// Stable identifier for every domain object.
///
/// Generated as a v7 (time-ordered) UUID, so lexicographic order equals
/// creation order within one process. Replaces the raw creation-timestamp
/// strings of earlier prototypes: "newest first by id" reads stay correct
/// and rapid bulk creation cannot collide.
pub type EntityId = Uuid;

/// Returns a fresh creation-ordered identifier.
pub fn next_entity_id() -> EntityId {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::next_entity_id;

    #[test]
    fn ids_are_unique_and_creation_ordered() {
        let first = next_entity_id();
        let second = next_entity_id();
        let third = next_entity_id();
        assert!(first < second);
        assert!(second < third);
    }
}
