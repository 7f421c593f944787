//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate session persistence into the session store API.
//! - Enforce per-module permissions in front of the domain store.
//! - Keep UI layers decoupled from storage and authorization details.

pub mod desk_service;
pub mod session_service;
