use serde::{Deserialize, Serialize};

/// Role strings as the remote API issues them. Comparison is case-insensitive
/// everywhere, these are only the canonical spellings.
pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_SUPERVISOR: &str = "Pharmacy Supervisor";
pub const ROLE_USER: &str = "User";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The authenticated user as returned by the login endpoint and as cached in
/// browser storage under the `user` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(rename = "userRole")]
    pub user_role: String,
    pub jwt: String,
}
