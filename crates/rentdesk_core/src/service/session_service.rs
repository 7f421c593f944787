//! Session store: authentication state, profile, and theme preference.
//!
//! # Responsibility
//! - Gate access to the dashboard behind two fixed credential pairs.
//! - Keep in-memory session state and the persisted copy in lockstep.
//!
//! # Invariants
//! - Every mutation writes through to the settings repository before
//!   returning; memory and storage never diverge.
//! - A failed login leaves both memory and storage untouched.
//! - `logout` is idempotent.

use crate::model::employee::{parse_role_kind, RoleKind};
use crate::model::notification::Performer;
use crate::model::profile::UserProfile;
use crate::repo::settings_repo::{RepoError, SettingsRepository};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings key holding the `"true"` authenticated flag.
pub const KEY_IS_AUTH: &str = "isAuth";
/// Settings key holding the role label.
pub const KEY_USER_ROLE: &str = "userRole";
/// Settings key holding the raw username.
pub const KEY_USERNAME: &str = "username";
/// Settings key holding the base64(JSON) profile.
pub const KEY_USER_PROFILE: &str = "userProfile";
/// Settings key holding the theme label.
pub const KEY_THEME: &str = "theme";

/// The only accepted credential pairs. Plaintext comparison against
/// literals; registration, reset, and hashing are out of scope.
const CREDENTIALS: &[(&str, &str, RoleKind)] = &[
    ("admin", "772012", RoleKind::Admin),
    ("employee", "123", RoleKind::Employee),
];

/// UI theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session service errors.
#[derive(Debug)]
pub enum SessionError {
    /// Settings persistence failure.
    Repo(RepoError),
    /// Profile serialization failure.
    Codec(serde_json::Error),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "profile encoding failed: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Session store over a settings repository.
pub struct SessionService<R: SettingsRepository> {
    repo: R,
    authenticated: bool,
    role: Option<RoleKind>,
    username: Option<String>,
    profile: UserProfile,
    theme: Theme,
}

impl<R: SettingsRepository> SessionService<R> {
    /// Rehydrates session state from persisted settings.
    ///
    /// Absent keys mean unauthenticated with the default profile. A corrupt
    /// persisted profile or role falls back to the default instead of
    /// failing rehydration.
    pub fn load(repo: R) -> Result<Self, SessionError> {
        let authenticated = repo.get(KEY_IS_AUTH)?.as_deref() == Some("true");

        let role = match repo.get(KEY_USER_ROLE)? {
            Some(value) => match parse_role_kind(&value) {
                Ok(role) => Some(role),
                Err(err) => {
                    warn!("event=session_load module=session status=fallback field=role error={err}");
                    None
                }
            },
            None => None,
        };

        let username = repo.get(KEY_USERNAME)?;

        let profile = match repo.get(KEY_USER_PROFILE)? {
            Some(encoded) => decode_profile(&encoded).unwrap_or_else(|| {
                warn!("event=session_load module=session status=fallback field=profile");
                UserProfile::default()
            }),
            None => UserProfile::default(),
        };

        let theme = match repo.get(KEY_THEME)?.as_deref() {
            Some("dark") => Theme::Dark,
            Some("light") | None => Theme::Light,
            Some(other) => {
                warn!("event=session_load module=session status=fallback field=theme value={other}");
                Theme::Light
            }
        };

        info!(
            "event=session_load module=session status=ok authenticated={authenticated} role={}",
            role.map_or("none", RoleKind::as_str)
        );

        Ok(Self {
            repo,
            authenticated,
            role,
            username,
            profile,
            theme,
        })
    }

    /// Attempts a login against the fixed credential pairs.
    ///
    /// On success, sets and persists the authenticated flag, role, and
    /// username, and returns `true`. On failure, state is unchanged and the
    /// result is `false`. There is no lockout or rate limiting.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool, SessionError> {
        let matched = CREDENTIALS
            .iter()
            .find(|(user, pass, _)| *user == username && *pass == password);

        let Some((user, _, role)) = matched else {
            info!("event=auth_login module=session status=denied username={username}");
            return Ok(false);
        };

        self.repo.set(KEY_IS_AUTH, "true")?;
        self.repo.set(KEY_USER_ROLE, role.as_str())?;
        self.repo.set(KEY_USERNAME, user)?;

        self.authenticated = true;
        self.role = Some(*role);
        self.username = Some((*user).to_string());

        info!("event=auth_login module=session status=ok role={role}");
        Ok(true)
    }

    /// Clears the session from memory and storage. Safe to call repeatedly.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.repo.remove(KEY_IS_AUTH)?;
        self.repo.remove(KEY_USER_ROLE)?;
        self.repo.remove(KEY_USERNAME)?;

        self.authenticated = false;
        self.role = None;
        self.username = None;

        info!("event=auth_logout module=session status=ok");
        Ok(())
    }

    /// Replaces the singleton profile and persists the encoded copy.
    pub fn update_profile(&mut self, profile: UserProfile) -> Result<(), SessionError> {
        let encoded = encode_profile(&profile).map_err(SessionError::Codec)?;
        self.repo.set(KEY_USER_PROFILE, &encoded)?;
        self.profile = profile;
        Ok(())
    }

    /// Persists the theme preference.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SessionError> {
        self.repo.set(KEY_THEME, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Role of the authenticated session, if any.
    pub fn role(&self) -> Option<RoleKind> {
        self.role.filter(|_| self.authenticated)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Attribution tag for store mutations issued under this session.
    pub fn performer(&self) -> Performer {
        Performer::from_role(self.role())
    }
}

/// Encodes a profile as base64(JSON) for the settings store.
fn encode_profile(profile: &UserProfile) -> Result<String, serde_json::Error> {
    Ok(STANDARD.encode(serde_json::to_vec(profile)?))
}

/// Decodes a persisted profile; `None` when the value is corrupt.
fn decode_profile(encoded: &str) -> Option<UserProfile> {
    let bytes = STANDARD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}
