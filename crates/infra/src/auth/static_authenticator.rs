//! Two hardcoded demo accounts behind the `Authenticator` port

use solarquote_core::Authenticator;
use solarquote_domain::{Role, Session};
use tracing::{info, warn};

/// One email/password pair and the session it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
    pub role: Role,
    pub salesperson_id: Option<&'static str>,
}

impl StaticAccount {
    /// Session opened by this account
    pub fn session(&self) -> Session {
        Session {
            email: self.email.to_string(),
            role: self.role,
            display_name: self.display_name.to_string(),
            salesperson_id: self.salesperson_id.map(str::to_string),
        }
    }
}

const ADMIN: StaticAccount = StaticAccount {
    email: "admin@solarquote.com",
    password: "admin123",
    display_name: "Admin User",
    role: Role::Admin,
    salesperson_id: None,
};

const SALESPERSON: StaticAccount = StaticAccount {
    email: "sales@solarquote.com",
    password: "sales123",
    display_name: "Rajesh Kumar",
    role: Role::Salesperson,
    salesperson_id: Some("sp-001"),
};

/// Exact-match check against the demo accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAuthenticator;

impl StaticAuthenticator {
    /// Authenticator over the two demo accounts
    pub fn new() -> Self {
        Self
    }

    /// Admin first, then the salesperson
    pub fn accounts() -> [StaticAccount; 2] {
        [ADMIN, SALESPERSON]
    }

    /// Demo account backing a role
    pub fn account_for(role: Role) -> StaticAccount {
        match role {
            Role::Admin => ADMIN,
            Role::Salesperson => SALESPERSON,
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, email: &str, password: &str) -> Option<Session> {
        let session = Self::accounts()
            .iter()
            .find(|account| account.email == email && account.password == password)
            .map(StaticAccount::session);

        match &session {
            Some(s) => info!(role = s.role.as_str(), "Login succeeded"),
            None => warn!("Login rejected"),
        }
        session
    }

    /// Session for a role without a password, as the login page's demo
    /// buttons do.
    fn quick_login(&self, role: Role) -> Option<Session> {
        info!(role = role.as_str(), "Quick login");
        Some(Self::account_for(role).session())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_both_accounts() {
        let auth = StaticAuthenticator::new();

        let admin = auth.verify("admin@solarquote.com", "admin123").expect("admin session");
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.display_name, "Admin User");
        assert!(admin.salesperson_id.is_none());

        let sales = auth.verify("sales@solarquote.com", "sales123").expect("sales session");
        assert_eq!(sales.role, Role::Salesperson);
        assert_eq!(sales.display_name, "Rajesh Kumar");
        assert_eq!(sales.salesperson_id.as_deref(), Some("sp-001"));
    }

    #[test]
    fn rejects_wrong_password_and_case_mismatch() {
        let auth = StaticAuthenticator::new();
        assert!(auth.verify("admin@solarquote.com", "sales123").is_none());
        assert!(auth.verify("Admin@SolarQuote.com", "admin123").is_none());
        assert!(auth.verify("", "").is_none());
    }

    #[test]
    fn quick_login_matches_password_login() {
        let auth = StaticAuthenticator::new();
        assert_eq!(
            auth.quick_login(Role::Salesperson),
            auth.verify("sales@solarquote.com", "sales123")
        );
        assert_eq!(auth.quick_login(Role::Admin).map(|s| s.role), Some(Role::Admin));
    }
}
