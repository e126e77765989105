//! Login and role dispatch

use serde::Serialize;
use solarquote_core::{team_workload, AdminStats, SalespersonStats, SalespersonWorkload};
use solarquote_domain::constants::{INVALID_CREDENTIALS_MESSAGE, QUICK_LOGIN_UNAVAILABLE_MESSAGE};
use solarquote_domain::{Lead, Result as DomainResult, Role, Salesperson, Session, SolarQuoteError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_command, require_salesperson};

/// Check credentials and open a session.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> DomainResult<Session> {
    execute_command("auth::login", || async {
        ctx.authenticator
            .verify(email, password)
            .ok_or_else(|| SolarQuoteError::Auth(INVALID_CREDENTIALS_MESSAGE.to_string()))
    })
    .await
}

/// Demo shortcut: open the static session for a role.
pub async fn quick_login(ctx: &AppContext, role: Role) -> DomainResult<Session> {
    execute_command("auth::quick_login", || async {
        ctx.authenticator
            .quick_login(role)
            .ok_or_else(|| SolarQuoteError::Auth(QUICK_LOGIN_UNAVAILABLE_MESSAGE.to_string()))
    })
    .await
}

/// Salesperson landing view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonDashboard {
    pub display_name: String,
    pub profile: Option<Salesperson>,
    pub stats: SalespersonStats,
    pub leads: Vec<Lead>,
}

/// Administrator landing view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub display_name: String,
    pub stats: AdminStats,
    pub workload: Vec<SalespersonWorkload>,
}

/// The dashboard composed for a session's role
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardView {
    Admin(AdminDashboard),
    Salesperson(SalespersonDashboard),
}

/// Build the landing dashboard for whoever is signed in.
pub async fn open_dashboard(ctx: &AppContext, session: &Session) -> DomainResult<DashboardView> {
    execute_command("auth::open_dashboard", || async {
        match session.role {
            Role::Admin => {
                let leads = ctx.leads.list_all()?;
                let team = ctx.team.list()?;
                Ok(DashboardView::Admin(AdminDashboard {
                    display_name: session.display_name.clone(),
                    stats: AdminStats::compute(&leads, &team),
                    workload: team_workload(&leads, &team),
                }))
            }
            Role::Salesperson => {
                let salesperson_id = require_salesperson(session)?;
                let all = ctx.leads.list_all()?;
                let profile = match ctx.team.get(salesperson_id) {
                    Ok(profile) => Some(profile),
                    Err(SolarQuoteError::NotFound(_)) => None,
                    Err(err) => return Err(err),
                };
                Ok(DashboardView::Salesperson(SalespersonDashboard {
                    display_name: session.display_name.clone(),
                    profile,
                    stats: SalespersonStats::for_salesperson(&all, salesperson_id),
                    leads: all
                        .into_iter()
                        .filter(|lead| lead.is_assigned_to(salesperson_id))
                        .collect(),
                }))
            }
        }
    })
    .await
}
