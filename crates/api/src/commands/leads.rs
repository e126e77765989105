//! Lead list, filter and intake commands

use solarquote_core::LeadFilter;
use solarquote_domain::{Lead, NewLeadForm, Result as DomainResult, Role, Session, SolarQuoteError};

use crate::context::AppContext;
use crate::utils::command_helpers::{execute_command, require_salesperson};

/// Leads visible to the session: all for admins, own for salespeople.
pub async fn list_leads(ctx: &AppContext, session: &Session) -> DomainResult<Vec<Lead>> {
    execute_command("leads::list_leads", || async {
        match session.role {
            Role::Admin => ctx.leads.list_all(),
            Role::Salesperson => ctx.leads.list_for_salesperson(require_salesperson(session)?),
        }
    })
    .await
}

/// Apply a filter within the session's visibility.
///
/// A salesperson's filter is always pinned to their own leads.
pub async fn filter_leads(
    ctx: &AppContext,
    session: &Session,
    filter: LeadFilter,
) -> DomainResult<Vec<Lead>> {
    execute_command("leads::filter_leads", || async {
        let filter = match session.role {
            Role::Admin => filter,
            Role::Salesperson => filter.assignee(require_salesperson(session)?),
        };
        ctx.leads.filter(&filter)
    })
    .await
}

/// Fetch one lead the session may see.
pub async fn get_lead(ctx: &AppContext, session: &Session, lead_id: &str) -> DomainResult<Lead> {
    execute_command("leads::get_lead", || async { visible_lead(ctx, session, lead_id) }).await
}

/// Submit the new-lead form.
///
/// Salespeople own the leads they create; admin-created leads start
/// unassigned.
pub async fn create_lead(
    ctx: &AppContext,
    session: &Session,
    form: NewLeadForm,
) -> DomainResult<Lead> {
    execute_command("leads::create_lead", || async {
        let assigned_to = match session.role {
            Role::Admin => None,
            Role::Salesperson => Some(require_salesperson(session)?.to_string()),
        };
        ctx.leads.create_lead(&form, assigned_to)
    })
    .await
}

pub(crate) fn visible_lead(ctx: &AppContext, session: &Session, lead_id: &str) -> DomainResult<Lead> {
    let lead = ctx.leads.get(lead_id)?;
    if session.role == Role::Admin || lead.is_assigned_to(require_salesperson(session)?) {
        return Ok(lead);
    }
    // Other people's leads are reported as missing.
    Err(SolarQuoteError::NotFound(format!("lead {lead_id}")))
}
