use serde::{Deserialize, Serialize};

/// Session check result from the backend's `/auth/me`.
///
/// The flag only gates UI affordances (edit/delete buttons); the backend
/// re-checks authorization on every mutating call. This is not a security
/// boundary on the front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub admin: bool,
}
