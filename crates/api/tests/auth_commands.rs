//! Login and role dispatch through the command layer

mod support;

use std::sync::Arc;

use solarquote_core::Authenticator;
use solarquote_domain::{Role, Session, SolarQuoteError};
use solarquote_lib::{login, open_dashboard, quick_login, DashboardView};
use support::{admin_session, sales_session, test_context};

/// Identity provider that knows nobody
struct RejectEveryone;

impl Authenticator for RejectEveryone {
    fn verify(&self, _email: &str, _password: &str) -> Option<Session> {
        None
    }
}

#[tokio::test]
async fn login_accepts_static_accounts() {
    let ctx = test_context();

    let session = login(&ctx, "sales@solarquote.com", "sales123").await.expect("login");
    assert_eq!(session.role, Role::Salesperson);
    assert_eq!(session.display_name, "Rajesh Kumar");

    let session = login(&ctx, "admin@solarquote.com", "admin123").await.expect("login");
    assert_eq!(session.role, Role::Admin);
}

#[tokio::test]
async fn login_rejects_bad_credentials_with_form_message() {
    let ctx = test_context();

    let err = login(&ctx, "admin@solarquote.com", "wrong").await.expect_err("rejected");
    match err {
        SolarQuoteError::Auth(message) => assert_eq!(message, "Invalid email or password"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn quick_login_returns_role_session() {
    let ctx = test_context();
    let session = quick_login(&ctx, Role::Admin).await.expect("quick login");
    assert_eq!(session.email, "admin@solarquote.com");
    assert!(session.is_admin());
}

#[tokio::test]
async fn quick_login_goes_through_injected_authenticator() {
    let ctx = test_context().with_authenticator(Arc::new(RejectEveryone));

    let err = login(&ctx, "admin@solarquote.com", "admin123").await.expect_err("rejected");
    assert!(matches!(err, SolarQuoteError::Auth(_)));

    for role in [Role::Admin, Role::Salesperson] {
        let err = quick_login(&ctx, role).await.expect_err("no demo accounts");
        match err {
            SolarQuoteError::Auth(message) => assert_eq!(message, "Quick login is not available"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[tokio::test]
async fn salesperson_dashboard_shows_only_own_leads() {
    let ctx = test_context();

    let view = open_dashboard(&ctx, &sales_session()).await.expect("dashboard");
    let DashboardView::Salesperson(dashboard) = view else {
        panic!("expected salesperson dashboard");
    };

    assert_eq!(dashboard.stats.total_leads, 4);
    assert_eq!(dashboard.stats.new_leads, 1);
    assert_eq!(dashboard.stats.quoted_leads, 1);
    assert_eq!(dashboard.stats.won_leads, 1);
    assert!(dashboard.leads.iter().all(|lead| lead.is_assigned_to("sp-001")));
    assert_eq!(dashboard.profile.map(|p| p.name), Some("Rajesh Kumar".to_string()));
}

#[tokio::test]
async fn admin_dashboard_summarises_company() {
    let ctx = test_context();

    let view = open_dashboard(&ctx, &admin_session()).await.expect("dashboard");
    let DashboardView::Admin(dashboard) = view else {
        panic!("expected admin dashboard");
    };

    assert_eq!(dashboard.stats.total_leads, 8);
    assert_eq!(dashboard.stats.won_leads, 1);
    assert_eq!(dashboard.stats.active_team, 3);
    assert_eq!(dashboard.workload.len(), 3);
    assert_eq!(
        dashboard.stats.average_quote_value,
        dashboard.stats.total_value / 8.0
    );
}
