//! Core domain logic for the rentdesk property-management dashboard.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod views;

pub use app::App;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeStatus, Role, RoleKind};
pub use model::expense::{Expense, ExpenseStatus};
pub use model::notification::{Notification, NotificationKind, Performer};
pub use model::payment::{Payment, PaymentStatus};
pub use model::permissions::{Action, Module, ModulePermissions, Permissions};
pub use model::profile::UserProfile;
pub use model::room::{
    MaintenanceWork, Occupancy, PreBooking, Room, RoomDetails, RoomStatus, RoomValidationError,
};
pub use model::tenant::{Tenant, TenantStatus};
pub use model::EntityId;
pub use repo::settings_repo::{RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository};
pub use service::desk_service::{DeskError, DeskService};
pub use service::session_service::{SessionError, SessionService, Theme};
pub use store::{DomainStore, Stats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
