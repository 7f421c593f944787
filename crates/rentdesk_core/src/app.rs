//! Explicit application-state object.
//!
//! # Responsibility
//! - Bundle the session store and domain store behind one value the UI
//!   layer passes around; no module-level singletons.
//! - Provide clear init (`bootstrap`) and teardown (`clear`) entry points.

use crate::repo::settings_repo::SettingsRepository;
use crate::service::desk_service::DeskService;
use crate::service::session_service::{SessionError, SessionService};
use crate::store::DomainStore;

/// Top-level application state: one per running UI.
pub struct App<R: SettingsRepository> {
    pub session: SessionService<R>,
    pub store: DomainStore,
}

impl<R: SettingsRepository> App<R> {
    /// Rehydrates the session from persisted settings and starts with
    /// empty domain collections. Domain data is deliberately not durable.
    pub fn bootstrap(repo: R) -> Result<Self, SessionError> {
        Ok(Self {
            session: SessionService::load(repo)?,
            store: DomainStore::new(),
        })
    }

    /// Ends the session and drops all domain data.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.session.logout()?;
        self.store.reset();
        Ok(())
    }

    /// Mutation facade bound to the current session.
    pub fn desk(&mut self) -> DeskService<'_> {
        let role = self.session.role();
        let username = self.session.username().map(str::to_string);
        DeskService::new(&mut self.store, role, username)
    }
}
