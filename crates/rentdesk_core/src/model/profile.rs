//! Singleton user profile shown in the account settings surface.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in account. Exactly one exists per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Photo reference, either a data URI or a URL.
    pub photo: String,
}

impl Default for UserProfile {
    /// Hardcoded fallback used when no profile has been persisted yet.
    fn default() -> Self {
        Self {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: "admin@prms.com".to_string(),
            phone: "+971 00 000 0000".to_string(),
            photo: "https://picsum.photos/seed/admin/150/150".to_string(),
        }
    }
}
