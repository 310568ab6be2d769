//! User profile sent to the backend after authentication.

use serde::{Deserialize, Serialize};

/// Profile upserted through `POST /api/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name ("Anonymous" when the auth provider has none)
    pub name: String,
    pub email: String,
    /// Avatar URL
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none", default)]
    pub photo_url: Option<String>,
}
