//! Per-module permission model.
//!
//! # Responsibility
//! - Define the four managed modules and the four capability actions.
//! - Provide the module/action permission matrix attached to employees.
//!
//! # Invariants
//! - A freshly created permission set grants `view` only, on every module.
//! - Module and action string ids are stable lowercase values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Managed data module used as the unit of permission granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Rooms,
    Tenants,
    Payments,
    Expenses,
}

impl Module {
    /// Stable string id used in persisted settings and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Tenants => "tenants",
            Self::Payments => "payments",
            Self::Expenses => "expenses",
        }
    }

    /// All modules in declaration order.
    pub fn all() -> [Module; 4] {
        [Self::Rooms, Self::Tenants, Self::Payments, Self::Expenses]
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability action gated per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Add,
    Edit,
    Delete,
}

impl Action {
    /// Stable string id used in log lines and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one module from its stable string id.
pub fn parse_module(value: &str) -> Result<Module, ModuleParseError> {
    match value.trim() {
        "" => Err(ModuleParseError::Empty),
        "rooms" => Ok(Module::Rooms),
        "tenants" => Ok(Module::Tenants),
        "payments" => Ok(Module::Payments),
        "expenses" => Ok(Module::Expenses),
        other => Err(ModuleParseError::Unknown(other.to_string())),
    }
}

/// Module parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleParseError {
    Empty,
    Unknown(String),
}

impl Display for ModuleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "module id must not be empty"),
            Self::Unknown(value) => write!(f, "unknown module id: {value}"),
        }
    }
}

impl Error for ModuleParseError {}

/// Capability flags for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissions {
    pub view: bool,
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ModulePermissions {
    /// View-only flags, the new-employee baseline.
    pub fn view_only() -> Self {
        Self {
            view: true,
            add: false,
            edit: false,
            delete: false,
        }
    }

    /// Every flag granted.
    pub fn full() -> Self {
        Self {
            view: true,
            add: true,
            edit: true,
            delete: true,
        }
    }

    /// Every flag denied.
    pub fn none() -> Self {
        Self {
            view: false,
            add: false,
            edit: false,
            delete: false,
        }
    }

    /// Returns the flag for one action.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Add => self.add,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }
}

impl Default for ModulePermissions {
    fn default() -> Self {
        Self::view_only()
    }
}

/// Permission matrix attached to an employee account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub rooms: ModulePermissions,
    pub tenants: ModulePermissions,
    pub payments: ModulePermissions,
    pub expenses: ModulePermissions,
}

impl Permissions {
    /// View-only on every module, the new-employee default.
    pub fn view_only() -> Self {
        Self {
            rooms: ModulePermissions::view_only(),
            tenants: ModulePermissions::view_only(),
            payments: ModulePermissions::view_only(),
            expenses: ModulePermissions::view_only(),
        }
    }

    /// Every flag granted on every module.
    pub fn full() -> Self {
        Self {
            rooms: ModulePermissions::full(),
            tenants: ModulePermissions::full(),
            payments: ModulePermissions::full(),
            expenses: ModulePermissions::full(),
        }
    }

    /// Returns the flags block for one module.
    pub fn module(&self, module: Module) -> &ModulePermissions {
        match module {
            Module::Rooms => &self.rooms,
            Module::Tenants => &self.tenants,
            Module::Payments => &self.payments,
            Module::Expenses => &self.expenses,
        }
    }

    /// Mutable flags block for one module.
    pub fn module_mut(&mut self, module: Module) -> &mut ModulePermissions {
        match module {
            Module::Rooms => &mut self.rooms,
            Module::Tenants => &mut self.tenants,
            Module::Payments => &mut self.payments,
            Module::Expenses => &mut self.expenses,
        }
    }

    /// Returns whether one module/action pair is granted.
    pub fn allows(&self, module: Module, action: Action) -> bool {
        self.module(module).allows(action)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::view_only()
    }
}
