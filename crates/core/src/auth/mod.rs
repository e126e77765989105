//! Credential check capability
//!
//! The shipped adapter compares against two static accounts. An identity
//! provider can replace it without touching callers.

use solarquote_domain::{Role, Session};

/// Verifies a login attempt
pub trait Authenticator: Send + Sync {
    /// `None` for unknown email or wrong password.
    fn verify(&self, email: &str, password: &str) -> Option<Session>;

    /// Password-less session for a role. Providers without demo accounts
    /// keep the default and refuse.
    fn quick_login(&self, _role: Role) -> Option<Session> {
        None
    }
}
